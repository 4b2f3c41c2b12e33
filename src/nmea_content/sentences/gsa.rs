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
    nmea_content::{NoValue, Parsable, parse::flag},
    parsing::{hex_number, number},
};

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                        14 15  16  17  18
///         | | |                         |  |   |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,x.x,h*hh<CR><LF>
/// ```
///
/// Field 18, the system ID, was added in NMEA 4.11.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSA {
    /// Selection mode, `M` manual or `A` automatic
    pub selection_mode: char,
    /// Fix mode, `1` no fix, `2` 2D fix or `3` 3D fix
    pub fix_mode: char,
    /// IDs of the satellites used for the fix, `0xFF` for unused slots
    pub satellite_ids: [u8; 12],
    /// Position dilution of precision, scaled by 10^2
    pub pdop: u16,
    /// Horizontal dilution of precision, scaled by 10^2
    pub hdop: u16,
    /// Vertical dilution of precision, scaled by 10^2
    pub vdop: u16,
    /// GNSS system ID, `0xFF` before NMEA 4.11
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_nmea_4_11_system_id_and_signal_id>
    pub system_id: u8,
}

impl GSA {
    /// IDs of the satellites used for the fix.
    pub fn satellites(&self) -> impl Iterator<Item = u8> + '_ {
        self.satellite_ids
            .iter()
            .copied()
            .filter(|id| !id.is_no_value())
    }
}

impl Parsable for GSA {
    fn parser(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, selection_mode) = flag(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, fix_mode) = flag(i)?;
        let (mut i, _) = char(',').parse(i)?;

        let mut satellite_ids = [u8::NO_VALUE; 12];
        for id in satellite_ids.iter_mut() {
            (i, *id) = terminated(number(0), char(',')).parse(i)?;
        }

        let (i, pdop) = number(2).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, hdop) = number(2).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, vdop) = number(2).parse(i)?;
        let (i, system_id) = opt(preceded(char(','), hex_number)).parse(i)?;

        Ok((
            i,
            GSA {
                selection_mode,
                fix_mode,
                satellite_ids,
                pdop,
                hdop,
                vdop,
                system_id: system_id.unwrap_or(u8::NO_VALUE),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gsa_parsing() {
        let (rest, gsa) = GSA::parser(b"A,1,,,,,,,,,,,,,,,").unwrap();
        assert!(rest.is_empty());
        assert_eq!(gsa.selection_mode, 'A');
        assert_eq!(gsa.fix_mode, '1');
        assert_eq!(gsa.satellite_ids, [0xFF; 12]);
        assert_eq!((gsa.pdop, gsa.hdop, gsa.vdop), (0xFFFF, 0xFFFF, 0xFFFF));
        assert_eq!(gsa.system_id, 0xFF);

        let (rest, gsa) = GSA::parser(b"A,3,80,71,73,79,69,,,,,,,,1.83,1.09,1.47").unwrap();
        assert!(rest.is_empty());
        assert_eq!(
            gsa.satellite_ids,
            [80, 71, 73, 79, 69, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
        );
        assert_eq!(gsa.satellites().count(), 5);
        assert_eq!((gsa.pdop, gsa.hdop, gsa.vdop), (183, 109, 147));

        let (_, gsa) = GSA::parser(b"A,3,13,15,18,,,,,,,,,,1.7,1.0,1.3,1").unwrap();
        assert_eq!(gsa.system_id, 1);
    }

    #[test]
    fn test_gsa_invalid() {
        let cases: [&[u8]; 2] = [b"A,3,80,71,73,79,69,1.83,1.09,1.47", b"A,3,,,,,,,,,,,,,1.83"];

        for input in cases {
            let result = GSA::parser(input);
            assert!(result.is_err(), "Failed: {input:?}\n\t{result:?}");
        }
    }
}
