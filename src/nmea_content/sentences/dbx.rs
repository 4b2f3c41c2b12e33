use nom::{Parser, character::complete::char};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{Parsable, parse::with_unit},
};

/// DBK, DBS, DBT - Depth Below Keel, Surface, Transducer
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_dbt_depth_below_transducer>
///
/// The three sentences share one layout and differ only in the depth reference.
///
/// ```text
///         1   2 3   4 5   6
///         |   | |   | |   |
///  $--DBT,x.x,f,x.x,M,x.x,F*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct DBx {
    /// Water depth in feet, scaled by 10^3
    pub depth_feet: u32,
    /// Water depth in meters, scaled by 10^3
    pub depth_meters: u32,
    /// Water depth in fathoms, scaled by 10^3
    pub depth_fathoms: u32,
}

impl Parsable for DBx {
    fn parser(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, depth_feet) = with_unit(3, 'f').parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, depth_meters) = with_unit(3, 'M').parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, depth_fathoms) = with_unit(3, 'F').parse(i)?;

        Ok((
            i,
            DBx {
                depth_feet,
                depth_meters,
                depth_fathoms,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dbx_parsing() {
        let cases: [(&[u8], (u32, u32, u32)); 3] = [
            (b",f,22.5,M,,F", (0xFFFF_FFFF, 22500, 0xFFFF_FFFF)),
            (b"7.8,f,2.4,M,1.3,F", (7800, 2400, 1300)),
            (b",f,,M,,F", (0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF)),
        ];

        for (input, (feet, meters, fathoms)) in cases {
            let result = DBx::parser(input);
            assert!(result.is_ok(), "Failed: {input:?}\n\t{result:?}");

            let (_, dbx) = result.unwrap();
            assert_eq!(dbx.depth_feet, feet);
            assert_eq!(dbx.depth_meters, meters);
            assert_eq!(dbx.depth_fathoms, fathoms);
        }
    }

    #[test]
    fn test_dbx_missing_units() {
        let cases: [&[u8]; 3] = [b"7.8,,2.4,M,1.3,F", b"7.8,f,2.4,f,1.3,F", b"7.8,f,2.4,M"];

        for input in cases {
            let result = DBx::parser(input);
            assert!(result.is_err(), "Failed: {input:?}\n\t{result:?}");
        }
    }
}
