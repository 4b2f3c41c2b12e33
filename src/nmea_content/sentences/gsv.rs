use nom::{Parser, character::complete::char, combinator::opt, sequence::preceded};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{NoValue, Parsable, SatelliteView},
    parsing::{digits, hex_number, number},
};

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// Each sentence carries up to four satellites, followed by the signal ID since NMEA 4.11.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSV {
    /// Total number of GSV sentences to be transmitted in this group
    pub total_messages: u8,
    /// Sentence number of this GSV message within current group
    pub message_number: u8,
    /// Total number of satellites in view
    pub satellites_in_view: u8,
    /// Satellite information, unfilled slots are [`SatelliteView::NO_VALUE`]
    pub satellites: [SatelliteView; 4],
    /// Signal ID of the GNSS system, `0xFF` before NMEA 4.11
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_nmea_4_11_system_id_and_signal_id>
    pub signal_id: u8,
}

impl GSV {
    /// The filled satellite slots.
    pub fn views(&self) -> impl Iterator<Item = &SatelliteView> {
        self.satellites
            .iter()
            .filter(|view| **view != SatelliteView::NO_VALUE)
    }
}

fn satellite_view(i: &[u8]) -> IResult<&[u8], SatelliteView> {
    let (i, id) = number(0).parse(i)?;
    let (i, _) = char(',').parse(i)?;
    let (i, elevation) = number(0).parse(i)?;
    let (i, _) = char(',').parse(i)?;
    let (i, azimuth) = number(0).parse(i)?;
    let (i, _) = char(',').parse(i)?;
    let (i, snr) = digits(2).parse(i)?;

    Ok((
        i,
        SatelliteView {
            id,
            elevation,
            azimuth,
            snr,
        },
    ))
}

impl Parsable for GSV {
    fn parser(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, total_messages) = number(0).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, message_number) = number(0).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (mut i, satellites_in_view) = number(0).parse(i)?;

        let mut satellites = [SatelliteView::NO_VALUE; 4];
        for slot in satellites.iter_mut() {
            match preceded(char(','), satellite_view).parse(i) {
                Ok((rest, view)) => {
                    *slot = view;
                    i = rest;
                }
                Err(nom::Err::Error(_)) => break,
                Err(e) => return Err(e),
            }
        }

        let (i, signal_id) = opt(preceded(char(','), hex_number)).parse(i)?;

        Ok((
            i,
            GSV {
                total_messages,
                message_number,
                satellites_in_view,
                satellites,
                signal_id: signal_id.unwrap_or(u8::NO_VALUE),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gsv_parsing() {
        let cases: [&[u8]; 8] = [
            b"1,1,00",
            b"1,1,01,05,45,120,38",
            b"1,1,01,05,45,120,38,1",
            b"1,1,04,01,60,150,45,02,30,090,30,03,70,270,50,04,10,010,20",
            b"1,1,04,01,60,150,45,02,30,090,30,03,70,270,50,04,10,010,20,F",
            b"1,1,01,05,45,120,",
            b"1,1,01,11,,,",
            b"1,1,03,01,60,150,45,02,30,,30,03,,270,",
        ];

        for input in cases {
            let result = GSV::parser(input);
            assert!(result.is_ok(), "Failed: {input:?}\n\t{result:?}");
            assert!(result.unwrap().0.is_empty(), "Failed: {input:?}");
        }
    }

    #[test]
    fn test_gsv_values() {
        let (_, gsv) =
            GSV::parser(b"3,1,12,01,00,000,,02,00,000,,03,00,000,,04,00,000,").unwrap();
        assert_eq!((gsv.total_messages, gsv.message_number), (3, 1));
        assert_eq!(gsv.satellites_in_view, 12);
        for (n, view) in gsv.satellites.iter().enumerate() {
            assert_eq!(view.id as usize, n + 1);
            assert_eq!(view.elevation, 0);
            assert_eq!(view.azimuth, 0);
            assert_eq!(view.snr, 0xFF);
        }
        assert_eq!(gsv.signal_id, 0xFF);

        let (_, gsv) =
            GSV::parser(b"3,1,10,05,53,303,30,02,30,239,24,13,21,272,23,30,78,155,19").unwrap();
        assert_eq!(
            gsv.satellites[3],
            SatelliteView {
                id: 30,
                elevation: 78,
                azimuth: 155,
                snr: 19
            }
        );

        let (_, gsv) = GSV::parser(b"1,1,01,05,45,120,38,1").unwrap();
        assert_eq!(gsv.views().count(), 1);
        assert_eq!(gsv.satellites[1], SatelliteView::NO_VALUE);
        assert_eq!(gsv.signal_id, 1);
    }

    #[test]
    fn test_gsv_invalid() {
        let cases: [&[u8]; 2] = [b"1,1,01,05,45", b"1,1,01,05,45,120,385"];

        for input in cases {
            let result = GSV::parser(input);
            assert!(
                result.as_ref().map_or(true, |(rest, _)| !rest.is_empty()),
                "Failed: {input:?}\n\t{result:?}"
            );
        }
    }
}
