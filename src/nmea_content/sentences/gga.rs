use nom::{Parser, character::complete::char, combinator::opt, sequence::preceded};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{
        Coordinate, NoValue, Parsable, Time,
        parse::{coordinate, flag, time, with_unit},
    },
    parsing::number,
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                       11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,ddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
///
/// The differential age and station fields are omitted by some receivers.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GGA {
    /// Fix time in UTC
    pub time: Time,
    pub latitude: Coordinate,
    pub longitude: Coordinate,
    /// GPS quality indicator
    ///
    /// * `0` - fix not available
    /// * `1` - GPS fix
    /// * `2` - differential GPS fix
    /// * `3` - PPS fix
    /// * `4` - real time kinematic
    /// * `5` - float RTK
    /// * `6` - estimated, dead reckoning
    /// * `7` - manual input mode
    /// * `8` - simulation mode
    pub fix_quality: char,
    /// Number of satellites in use
    pub satellite_count: u8,
    /// Horizontal dilution of precision, scaled by 10^2
    pub hdop: u16,
    /// Altitude above mean sea level in meters, scaled by 10^2
    pub altitude: i32,
    /// Geoidal separation in meters, scaled by 10^2
    pub geoidal_separation: i32,
    /// Age of differential GPS data in seconds, scaled by 10^2
    pub age_of_dgps: u16,
    /// Differential reference station ID
    pub ref_station_id: u16,
}

impl Parsable for GGA {
    fn parser(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, time) = time(i)?;
        let (i, latitude) = coordinate(i)?;
        let (i, longitude) = coordinate(i)?;
        let (i, fix_quality) = flag(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, satellite_count) = number(0).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, hdop) = number(2).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, altitude) = with_unit(2, 'M').parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, geoidal_separation) = with_unit(2, 'M').parse(i)?;
        let (i, dgps) = opt(preceded(
            char(','),
            (number(2), opt(preceded(char(','), number(0)))),
        ))
        .parse(i)?;

        let (age_of_dgps, ref_station_id) = match dgps {
            Some((age, station)) => (age, station.unwrap_or(u16::NO_VALUE)),
            None => (u16::NO_VALUE, u16::NO_VALUE),
        };

        Ok((
            i,
            GGA {
                time,
                latitude,
                longitude,
                fix_quality,
                satellite_count,
                hdop,
                altitude,
                geoidal_separation,
                age_of_dgps,
                ref_station_id,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gga_parsing() {
        let cases: [&[u8]; 6] = [
            b"001043.00,4404.14036,N,12118.85961,W,1,12,0.98,1113.0,M,-21.3,M",
            b"002153.000,3342.6618,N,01115.73858,W,1,10,1.2,27.0,M,-34.2,M,,0000",
            b"123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,",
            b",,,,,0,00,99.99,,M,,M,,",
            b"092725.00,4717.11399,N,00833.91590,E,1,08,1.01,499.6,M,48.0,M,,",
            b"092725.00,4717.11399,N,00833.91590,E,2,08,1.01,499.6,M,48.0,M,3.2,0120",
        ];

        for input in cases {
            let result = GGA::parser(input);
            assert!(result.is_ok(), "Failed: {input:?}\n\t{result:?}");
            assert!(result.unwrap().0.is_empty(), "Failed: {input:?}");
        }
    }

    #[test]
    fn test_gga_values() {
        let (_, gga) =
            GGA::parser(b"001043.00,4404.14036,N,12118.85961,W,1,12,0.98,1113.0,M,-21.3,M")
                .unwrap();
        assert_eq!((gga.time.hour, gga.time.minute, gga.time.second), (0, 10, 43));
        assert_eq!(gga.time.millisecond, 0);
        assert_eq!(gga.latitude.degree, 44);
        assert_eq!(gga.latitude.minute, 41_403_600);
        assert_eq!(gga.latitude.direction, 'N');
        assert_eq!(gga.longitude.degree, 121);
        assert_eq!(gga.longitude.minute, 188_596_100);
        assert_eq!(gga.longitude.direction, 'W');
        assert_eq!(gga.fix_quality, '1');
        assert_eq!(gga.satellite_count, 12);
        assert_eq!(gga.hdop, 98);
        assert_eq!(gga.altitude, 111_300);
        assert_eq!(gga.geoidal_separation, -2130);
        assert_eq!(gga.age_of_dgps, 0xFFFF);
        assert_eq!(gga.ref_station_id, 0xFFFF);

        let (_, gga) =
            GGA::parser(b"002153.000,3342.6618,N,01115.73858,W,1,10,1.2,27.0,M,-34.2,M,,0000")
                .unwrap();
        assert_eq!(gga.latitude.minute, 426_618_000);
        assert_eq!(gga.longitude.degree, 11);
        assert_eq!(gga.longitude.minute, 157_385_800);
        assert_eq!(gga.hdop, 120);
        assert_eq!(gga.altitude, 2700);
        assert_eq!(gga.geoidal_separation, -3420);
        assert_eq!(gga.age_of_dgps, 0xFFFF);
        assert_eq!(gga.ref_station_id, 0);
    }

    #[test]
    fn test_gga_invalid() {
        let cases: [&[u8]; 3] = [
            b"001043.00,4404.14036,N,12118.85961,W,1,12,0.98,1113.0,F,-21.3,M",
            b"001043.00,4404.14036,N,12118.85961,W,1,12,0.98,1113.0,M,-21.3",
            b"001043.00,4404.14036,N,12118.85961,W,1,12,0.98",
        ];

        for input in cases {
            let result = GGA::parser(input);
            assert!(result.is_err(), "Failed: {input:?}\n\t{result:?}");
        }
    }
}
