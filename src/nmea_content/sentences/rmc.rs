use nom::{Parser, character::complete::char, combinator::opt, sequence::preceded};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{
        Coordinate, Date, Magnetic, Parsable, Time,
        parse::{coordinate, date, flag, magnetic, time},
    },
    parsing::number,
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 11
///         |         | |       | |        |  |   |   |    |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a*hh<CR><LF>
/// ```
///
/// NMEA 2.3:
/// ```text
///         1         2 3       4 5        6  7   8   9    10 1112
///         |         | |       | |        |  |   |   |    |  | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m*hh<CR><LF>
/// ```
///
/// NMEA 4.1:
/// ```text
///         1         2 3       4 5        6  7   8   9    10 111213
///         |         | |       | |        |  |   |   |    |  | | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m,s*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct RMC {
    /// Fix time in UTC
    pub time: Time,
    /// `A` data valid, `V` receiver warning
    pub status: char,
    pub latitude: Coordinate,
    pub longitude: Coordinate,
    /// Speed over ground in knots, scaled by 10^4
    pub speed_over_ground: u32,
    /// Course over ground in degrees true, scaled by 10^4
    pub course_over_ground: u32,
    /// Fix date in UTC, with a two digit year
    pub date: Date,
    pub magnetic_variation: Magnetic,
    /// FAA mode indicator, `' '` before NMEA 2.3
    pub faa_mode: char,
    /// Navigation status, `' '` before NMEA 4.1
    pub nav_status: char,
}

impl Parsable for RMC {
    fn parser(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, time) = time(i)?;
        let (i, status) = flag(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, latitude) = coordinate(i)?;
        let (i, longitude) = coordinate(i)?;
        let (i, speed_over_ground) = number(4).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, course_over_ground) = number(4).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, date) = date(i)?;
        let (i, magnetic_variation) = magnetic(i)?;
        let (i, modes) = opt(preceded(
            char(','),
            (flag, opt(preceded(char(','), flag))),
        ))
        .parse(i)?;

        let (faa_mode, nav_status) = match modes {
            Some((faa_mode, nav_status)) => (faa_mode, nav_status.unwrap_or(' ')),
            None => (' ', ' '),
        };

        Ok((
            i,
            RMC {
                time,
                status,
                latitude,
                longitude,
                speed_over_ground,
                course_over_ground,
                date,
                magnetic_variation,
                faa_mode,
                nav_status,
            },
        ))
    }
}
