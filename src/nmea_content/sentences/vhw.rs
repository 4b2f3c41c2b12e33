use nom::{Parser, character::complete::char};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{Parsable, parse::with_unit},
};

/// VHW - Water speed and heading
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vhw_water_speed_and_heading>
///
/// ```text
///         1   2 3   4 5   6 7   8
///         |   | |   | |   | |   |
///  $--VHW,x.x,T,x.x,M,x.x,N,x.x,K*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct VHW {
    /// Heading in degrees true, scaled by 10^4
    pub heading_true: u32,
    /// Heading in degrees magnetic, scaled by 10^4
    pub heading_magnetic: u32,
    /// Speed through water in knots, scaled by 10^4
    pub speed_knots: u32,
    /// Speed through water in km/h, scaled by 10^4
    pub speed_kph: u32,
}

impl Parsable for VHW {
    fn parser(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, heading_true) = with_unit(4, 'T').parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, heading_magnetic) = with_unit(4, 'M').parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, speed_knots) = with_unit(4, 'N').parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, speed_kph) = with_unit(4, 'K').parse(i)?;

        Ok((
            i,
            VHW {
                heading_true,
                heading_magnetic,
                speed_knots,
                speed_kph,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vhw_parsing() {
        let (rest, vhw) = VHW::parser(b"245.1,T,243.8,M,047.01,N,087.04,K").unwrap();
        assert!(rest.is_empty());
        assert_eq!(vhw.heading_true, 2_451_000);
        assert_eq!(vhw.heading_magnetic, 2_438_000);
        assert_eq!(vhw.speed_knots, 470_100);
        assert_eq!(vhw.speed_kph, 870_400);

        let result = VHW::parser(b"245.1,T,243.8,M,047.01,N,087.04");
        assert!(result.is_err(), "Failed: {result:?}");
    }
}
