use nom::{Parser, character::complete::char};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{Magnetic, Parsable, parse::magnetic},
    parsing::number,
};

/// HDG - Heading - Deviation & Variation
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_hdg_heading_deviation_variation>
///
/// ```text
///         1   2   3 4   5
///         |   |   | |   |
///  $--HDG,x.x,x.x,a,x.x,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct HDG {
    /// Magnetic sensor heading in degrees, scaled by 10^2
    pub heading: u16,
    pub deviation: Magnetic,
    pub variation: Magnetic,
}

impl Parsable for HDG {
    fn parser(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, heading) = number(2).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, deviation) = magnetic(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, variation) = magnetic(i)?;

        Ok((
            i,
            HDG {
                heading,
                deviation,
                variation,
            },
        ))
    }
}
