use nom::{
    Parser,
    character::complete::char,
    combinator::opt,
    sequence::preceded,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{
        Parsable, Text,
        parse::{field_text, flag},
    },
    parsing::number,
};

/// APB - Autopilot Sentence "B"
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_apb_autopilot_sentence_b>
///
/// ```text
///                                          13    15
///         1 2 3   4 5 6 7 8   9 10   11  12|   14|
///         | | |   | | | | |   | |    |   | |   | |
///  $--APB,A,A,x.x,a,N,A,A,x.x,a,c--c,x.x,a,x.x,a,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct APB {
    /// `A` for valid data, `V` for a Loran-C blink or SNR warning
    pub status_1: char,
    /// `A` for valid data, `V` for a Loran-C cycle lock warning
    pub status_2: char,
    /// Magnitude of the cross track error, scaled by 10^4
    pub cross_track_error: i32,
    /// Direction to steer, `L` or `R`
    pub steer_direction: char,
    /// Cross track error unit, `N` for nautical miles
    pub cross_track_unit: char,
    /// `A` when the arrival circle was entered
    pub arrival_circle_entered: char,
    /// `A` when the perpendicular to the waypoint was passed
    pub perpendicular_passed: char,
    /// Bearing origin to destination, scaled by 10^2
    pub bearing_origin_to_destination: u16,
    /// `M` magnetic or `T` true
    pub bearing_origin_to_destination_unit: char,
    pub destination_waypoint_id: Text<9>,
    /// Bearing present position to destination, scaled by 10^2
    pub bearing_position_to_destination: u16,
    /// `M` magnetic or `T` true
    pub bearing_position_to_destination_unit: char,
    /// Heading to steer to the destination waypoint, scaled by 10^2
    pub heading_to_steer: u16,
    /// `M` magnetic or `T` true
    pub heading_to_steer_unit: char,
    /// FAA mode indicator, `' '` before NMEA 2.3
    pub faa_mode: char,
}

impl Parsable for APB {
    fn parser(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, status_1) = flag(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, status_2) = flag(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, cross_track_error) = number(4).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, steer_direction) = flag(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, cross_track_unit) = flag(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, arrival_circle_entered) = flag(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, perpendicular_passed) = flag(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, bearing_origin_to_destination) = number(2).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, bearing_origin_to_destination_unit) = flag(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, destination_waypoint_id) = field_text(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, bearing_position_to_destination) = number(2).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, bearing_position_to_destination_unit) = flag(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, heading_to_steer) = number(2).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, heading_to_steer_unit) = flag(i)?;
        let (i, faa_mode) = opt(preceded(char(','), flag)).parse(i)?;

        Ok((
            i,
            APB {
                status_1,
                status_2,
                cross_track_error,
                steer_direction,
                cross_track_unit,
                arrival_circle_entered,
                perpendicular_passed,
                bearing_origin_to_destination,
                bearing_origin_to_destination_unit,
                destination_waypoint_id,
                bearing_position_to_destination,
                bearing_position_to_destination_unit,
                heading_to_steer,
                heading_to_steer_unit,
                faa_mode: faa_mode.unwrap_or(' '),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apb_parsing() {
        let input = b"A,A,0.10,R,N,V,V,011,M,DEST,011,M,011,M";
        let result = APB::parser(input);
        assert!(result.is_ok(), "Failed: {input:?}\n\t{result:?}");

        let (rest, apb) = result.unwrap();
        assert!(rest.is_empty());
        assert_eq!((apb.status_1, apb.status_2), ('A', 'A'));
        assert_eq!(apb.cross_track_error, 1000);
        assert_eq!(apb.steer_direction, 'R');
        assert_eq!(apb.cross_track_unit, 'N');
        assert_eq!(apb.arrival_circle_entered, 'V');
        assert_eq!(apb.perpendicular_passed, 'V');
        assert_eq!(apb.bearing_origin_to_destination, 1100);
        assert_eq!(apb.bearing_origin_to_destination_unit, 'M');
        assert_eq!(apb.destination_waypoint_id.as_bytes(), b"DEST");
        assert_eq!(apb.bearing_position_to_destination, 1100);
        assert_eq!(apb.heading_to_steer, 1100);
        assert_eq!(apb.heading_to_steer_unit, 'M');
        assert_eq!(apb.faa_mode, ' ');
    }

    #[test]
    fn test_apb_faa_mode() {
        let result = APB::parser(b"A,A,0.10,R,N,V,V,011,M,DEST,011,M,011,M,D");
        assert!(result.is_ok(), "Failed: {result:?}");
        assert_eq!(result.unwrap().1.faa_mode, 'D');
    }
}
