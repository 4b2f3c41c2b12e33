use nom::{
    Parser,
    character::complete::char,
    combinator::opt,
    sequence::{preceded, terminated},
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{Parsable, parse::flag},
    parsing::number,
};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8
///          |  |  |  |  |  |  |  |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K*hh<CR><LF>
/// ```
///
/// NMEA 2.3:
///
/// ```text
///          1  2  3  4  5  6  7  8 9
///          |  |  |  |  |  |  |  | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
///
/// Older talkers omit the unit letters:
///
/// ```text
///          1   2   3   4
///          |   |   |   |
///  $--VTG,x.x,x.x,x.x,x.x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct VTG {
    /// Course over ground in degrees true, scaled by 10^4
    pub course_over_ground_true: u32,
    /// Course over ground in degrees magnetic, scaled by 10^4
    pub course_over_ground_magnetic: u32,
    /// Speed over ground in knots, scaled by 10^4
    pub speed_over_ground_knots: u32,
    /// Speed over ground in km/h, scaled by 10^4
    pub speed_over_ground_kph: u32,
    /// FAA mode indicator, `' '` before NMEA 2.3
    pub faa_mode: char,
}

impl Parsable for VTG {
    fn parser(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, course_over_ground_true) = number(4).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, _) = opt(terminated(char('T'), char(','))).parse(i)?;
        let (i, course_over_ground_magnetic) = number(4).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, _) = opt(terminated(char('M'), char(','))).parse(i)?;
        let (i, speed_over_ground_knots) = number(4).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, _) = opt(terminated(char('N'), char(','))).parse(i)?;
        let (i, speed_over_ground_kph) = number(4).parse(i)?;
        let (i, faa_mode) = opt(preceded(
            (char(','), opt(char('K'))),
            opt(preceded(char(','), flag)),
        ))
        .parse(i)?;

        Ok((
            i,
            VTG {
                course_over_ground_true,
                course_over_ground_magnetic,
                speed_over_ground_knots,
                speed_over_ground_kph,
                faa_mode: faa_mode.flatten().unwrap_or(' '),
            },
        ))
    }
}
