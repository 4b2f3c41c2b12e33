use nom::{Parser, character::complete::char};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{
        Parsable, Text,
        parse::{flag, trailing_text},
    },
    parsing::number,
};

/// AAM - Waypoint Arrival Alarm
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_aam_waypoint_arrival_alarm>
///
/// ```text
///         1 2 3   4 5    6
///         | | |   | |    |
///  $--AAM,A,A,x.x,N,c--c*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct AAM {
    /// `A` when the arrival circle was entered, `V` otherwise
    pub arrival_circle_entered: char,
    /// `A` when the perpendicular to the waypoint was passed, `V` otherwise
    pub perpendicular_passed: char,
    /// Arrival circle radius in nautical miles, scaled by 10^4
    pub circle_radius: u32,
    pub waypoint_id: Text<24>,
}

impl Parsable for AAM {
    fn parser(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, arrival_circle_entered) = flag(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, perpendicular_passed) = flag(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, circle_radius) = number(4).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, _) = char('N').parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, waypoint_id) = trailing_text(i)?;

        Ok((
            i,
            AAM {
                arrival_circle_entered,
                perpendicular_passed,
                circle_radius,
                waypoint_id,
            },
        ))
    }
}
