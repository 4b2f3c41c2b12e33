use nom::{Parser, character::complete::char};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{
        Coordinate, Parsable, Text, Time,
        parse::{coordinate, time, trailing_text, with_unit},
    },
};

/// BEC - Bearing & Distance to Waypoint - Dead Reckoning
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_bec_bearing_distance_to_waypoint_dead_reckoning>
///
/// ```text
///                                                         12
///         1         2       3 4        5 6   7 8   9 10  11|    13
///         |         |       | |        | |   | |   | |   | |    |
///  $--BEC,hhmmss.ss,llll.ll,a,yyyyy.yy,a,x.x,T,x.x,M,x.x,N,c--c*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct BEC {
    /// UTC time of observation
    pub time: Time,
    /// Waypoint latitude
    pub latitude: Coordinate,
    /// Waypoint longitude
    pub longitude: Coordinate,
    /// Bearing true, scaled by 10^2
    pub bearing_true: u16,
    /// Bearing magnetic, scaled by 10^2
    pub bearing_magnetic: u16,
    /// Distance in nautical miles, scaled by 10^4
    pub distance: u32,
    pub waypoint_id: Text<9>,
}

impl Parsable for BEC {
    fn parser(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, time) = time(i)?;
        let (i, latitude) = coordinate(i)?;
        let (i, longitude) = coordinate(i)?;
        let (i, bearing_true) = with_unit(2, 'T').parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, bearing_magnetic) = with_unit(2, 'M').parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, distance) = with_unit(4, 'N').parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, waypoint_id) = trailing_text(i)?;

        Ok((
            i,
            BEC {
                time,
                latitude,
                longitude,
                bearing_true,
                bearing_magnetic,
                distance,
                waypoint_id,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bec_parsing() {
        let input = b"081837,,,,,,T,,M,,N,";
        let result = BEC::parser(input);
        assert!(result.is_ok(), "Failed: {input:?}\n\t{result:?}");

        let (_, bec) = result.unwrap();
        assert_eq!((bec.time.hour, bec.time.minute, bec.time.second), (8, 18, 37));
        assert!(bec.latitude.is_no_value());
        assert_eq!(bec.bearing_true, 0xFFFF);
        assert_eq!(bec.distance, 0xFFFF_FFFF);
        assert!(bec.waypoint_id.is_empty());

        let input = b"220516,5130.02,N,00046.34,W,213.8,T,218.0,M,0004.6,N,EGLM";
        let result = BEC::parser(input);
        assert!(result.is_ok(), "Failed: {input:?}\n\t{result:?}");

        let (_, bec) = result.unwrap();
        assert_eq!(bec.latitude.degree, 51);
        assert_eq!(bec.latitude.minute, 300_200_000);
        assert_eq!(bec.longitude.degree, 0);
        assert_eq!(bec.longitude.minute, 463_400_000);
        assert_eq!(bec.bearing_true, 21380);
        assert_eq!(bec.bearing_magnetic, 21800);
        assert_eq!(bec.distance, 46000);
        assert_eq!(bec.waypoint_id.as_bytes(), b"EGLM");
    }
}
