use nom::{Parser, character::complete::char, combinator::opt, sequence::preceded};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{
        Coordinate, Parsable, Time,
        parse::{coordinate, flag, time},
    },
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GLL {
    pub latitude: Coordinate,
    pub longitude: Coordinate,
    /// Fix time in UTC
    pub time: Time,
    /// `A` data valid, `V` data invalid
    pub status: char,
    /// FAA mode indicator, `' '` before NMEA 2.3
    pub faa_mode: char,
}

impl Parsable for GLL {
    fn parser(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, latitude) = coordinate(i)?;
        let (i, longitude) = coordinate(i)?;
        let (i, time) = time(i)?;
        let (i, status) = flag(i)?;
        let (i, faa_mode) = opt(preceded(char(','), flag)).parse(i)?;

        Ok((
            i,
            GLL {
                latitude,
                longitude,
                time,
                status,
                faa_mode: faa_mode.unwrap_or(' '),
            },
        ))
    }
}
