use nom::{Parser, character::complete::char, combinator::opt, sequence::preceded};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{
        Parsable, Text,
        parse::{field_text, trailing_text, with_unit},
    },
};

/// BOD - Bearing - Waypoint to Waypoint
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_bod_bearing_waypoint_to_waypoint>
///
/// ```text
///         1   2 3   4 5    6
///         |   | |   | |    |
///  $--BOD,x.x,T,x.x,M,c--c,c--c*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct BOD {
    /// Bearing true, scaled by 10^2
    pub bearing_true: u16,
    /// Bearing magnetic, scaled by 10^2
    pub bearing_magnetic: u16,
    pub destination_waypoint_id: Text<9>,
    /// Empty when no route is active
    pub origin_waypoint_id: Text<9>,
}

impl Parsable for BOD {
    fn parser(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, bearing_true) = with_unit(2, 'T').parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, bearing_magnetic) = with_unit(2, 'M').parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, destination_waypoint_id) = field_text(i)?;
        let (i, origin_waypoint_id) = opt(preceded(char(','), trailing_text)).parse(i)?;

        Ok((
            i,
            BOD {
                bearing_true,
                bearing_magnetic,
                destination_waypoint_id,
                origin_waypoint_id: origin_waypoint_id.unwrap_or_default(),
            },
        ))
    }
}
