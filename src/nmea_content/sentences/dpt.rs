use nom::{Parser, character::complete::char, combinator::opt};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{NoValue, Parsable},
    parsing::{FIELD_DELIMITER, number},
};

/// DPT - Depth of Water
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_dpt_depth_of_water>
///
/// ```text
///         1   2
///         |   |
///  $--DPT,x.x,x.x*hh<CR><LF>
/// ```
///
/// NMEA 3.0:
/// ```text
///        1   2   3
///        |   |   |
/// $--DPT,x.x,x.x,x.x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct DPT {
    /// Water depth relative to transducer in meters, scaled by 10^3
    pub water_depth: u32,
    /// Offset from transducer in meters, scaled by 10^2,
    /// positive means distance from transducer to water line,
    /// negative means distance from transducer to keel.
    /// An empty offset reads as 0.
    pub offset_from_transducer: i16,
    /// Maximum range scale in use for the measurement in meters
    pub max_range_scale: u32,
}

fn is_field_empty(i: &[u8]) -> bool {
    matches!(i.first(), None | Some(&FIELD_DELIMITER))
}

impl Parsable for DPT {
    fn parser(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, water_depth) = number(3).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, offset_from_transducer) = if is_field_empty(i) {
            (i, 0)
        } else {
            number(2).parse(i)?
        };
        let (i, _) = opt(char(',')).parse(i)?;
        let (i, max_range_scale) = if is_field_empty(i) {
            (i, u32::NO_VALUE)
        } else {
            number(0).parse(i)?
        };

        Ok((
            i,
            DPT {
                water_depth,
                offset_from_transducer,
                max_range_scale,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dpt_parsing() {
        let cases: [(&[u8], (u32, i16, u32)); 5] = [
            (b"4.1,", (4100, 0, 0xFFFF_FFFF)),
            (b"2.4,,", (2400, 0, 0xFFFF_FFFF)),
            (b"76.1,,100", (76100, 0, 100)),
            (b"3.6,-1.2,50", (3600, -120, 50)),
            (b",0.5", (0xFFFF_FFFF, 50, 0xFFFF_FFFF)),
        ];

        for (input, (depth, offset, range)) in cases {
            let result = DPT::parser(input);
            assert!(result.is_ok(), "Failed: {input:?}\n\t{result:?}");

            let (rest, dpt) = result.unwrap();
            assert!(rest.is_empty(), "Failed: {input:?}\n\t{rest:?}");
            assert_eq!(dpt.water_depth, depth);
            assert_eq!(dpt.offset_from_transducer, offset);
            assert_eq!(dpt.max_range_scale, range);
        }
    }

    #[test]
    fn test_dpt_missing_delimiter() {
        let result = DPT::parser(b"4.1");
        assert!(result.is_err(), "Failed: {result:?}");
    }
}
