use nom::{Parser, character::complete::char};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{Parsable, parse::flag},
    parsing::number,
};

/// MWV - Wind Speed and Angle
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_mwv_wind_speed_and_angle>
///
/// ```text
///         1   2 3   4 5
///         |   | |   | |
///  $--MWV,x.x,a,x.x,a,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct MWV {
    /// Wind angle, 0 to 359 degrees, scaled by 10^2
    pub wind_angle: u16,
    /// `R` relative or `T` true
    pub reference: char,
    /// Wind speed, scaled by 10^2
    pub wind_speed: u16,
    /// `K` km/h, `M` m/s, `N` knots or `S` statute miles per hour
    pub wind_speed_unit: char,
    /// `A` data valid, `V` data invalid
    pub status: char,
}

impl Parsable for MWV {
    fn parser(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, wind_angle) = number(2).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, reference) = flag(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, wind_speed) = number(2).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, wind_speed_unit) = flag(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, status) = flag(i)?;

        Ok((
            i,
            MWV {
                wind_angle,
                reference,
                wind_speed,
                wind_speed_unit,
                status,
            },
        ))
    }
}
