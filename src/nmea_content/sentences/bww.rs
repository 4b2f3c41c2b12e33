use nom::{Parser, character::complete::char};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{
        Parsable, Text,
        parse::{field_text, trailing_text, with_unit},
    },
};

/// BWW - Bearing - Waypoint to Waypoint
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_bww_bearing_waypoint_to_waypoint>
///
/// ```text
///         1   2 3   4 5    6
///         |   | |   | |    |
///  $--BWW,x.x,T,x.x,M,c--c,c--c*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct BWW {
    /// Bearing true, scaled by 10^2
    pub bearing_true: u16,
    /// Bearing magnetic, scaled by 10^2
    pub bearing_magnetic: u16,
    pub to_waypoint_id: Text<9>,
    pub from_waypoint_id: Text<9>,
}

impl Parsable for BWW {
    fn parser(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, bearing_true) = with_unit(2, 'T').parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, bearing_magnetic) = with_unit(2, 'M').parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, to_waypoint_id) = field_text(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, from_waypoint_id) = trailing_text(i)?;

        Ok((
            i,
            BWW {
                bearing_true,
                bearing_magnetic,
                to_waypoint_id,
                from_waypoint_id,
            },
        ))
    }
}
