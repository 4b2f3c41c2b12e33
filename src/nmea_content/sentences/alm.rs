use nom::{Parser, character::complete::char};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{NoValue, Parsable},
    parsing::{extract_signed, hex, hex_number, number},
};

/// ALM - GPS Almanac Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_alm_gps_almanac_data>
///
/// ```text
///         1   2   3  4   5  6    7  8    9    10     11     12     13     14  15
///         |   |   |  |   |  |    |  |    |    |      |      |      |      |   |
///  $--ALM,x.x,x.x,xx,x.x,hh,hhhh,hh,hhhh,hhhh,hhhhhh,hhhhhh,hhhhhh,hhhhhh,hhh,hhh*hh<CR><LF>
/// ```
///
/// Orbit parameters are hexadecimal fields of the GPS almanac subframe, stored with
/// their raw bit pattern. Signed parameters narrower than their field are sign extended.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct ALM {
    /// Total number of ALM sentences in this group
    pub total_messages: u8,
    /// Sentence number of this ALM message within current group
    pub message_number: u8,
    /// Satellite PRN number, 1 to 32
    pub satellite_prn: u8,
    pub gps_week: u16,
    /// SV health, see [`ALM::sv_health`] and [`ALM::nav_health`]
    pub health: u8,
    pub eccentricity: u16,
    /// Almanac reference time
    pub reference_time: u8,
    /// Inclination angle
    pub sigma_i: i16,
    /// Rate of right ascension
    pub omega_dot: i16,
    /// Root of semi-major axis
    pub root_a: u32,
    /// Argument of perigee, 24 bit
    pub omega: i32,
    /// Longitude of ascension node, 24 bit
    pub omega_0: i32,
    /// Mean anomaly, 24 bit
    pub m0: i32,
    /// Clock parameter, 11 bit
    pub af0: i16,
    /// Clock parameter, 11 bit
    pub af1: i16,
}

impl ALM {
    /// The signal health bits, 0 when all signals are OK.
    pub fn sv_health(&self) -> u8 {
        self.health & 0x1F
    }

    /// The navigation data health bits, 0 when all data are OK.
    pub fn nav_health(&self) -> u8 {
        (self.health >> 5) & 0x07
    }
}

fn signed_word<T: NoValue>(bits: u32) -> impl Fn(&[u8]) -> IResult<&[u8], T> {
    move |i: &[u8]| {
        let (i, value) = hex(None).parse(i)?;
        let value = value.map(|value| extract_signed(value, 0, bits));

        Ok((i, T::from_field(value)))
    }
}

impl Parsable for ALM {
    fn parser(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, total_messages) = number(0).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, message_number) = number(0).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, satellite_prn) = number(0).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, gps_week) = number(0).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, health) = hex_number(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, eccentricity) = hex_number(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, reference_time) = hex_number(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, sigma_i) = hex_number(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, omega_dot) = hex_number(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, root_a) = hex_number(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, omega) = signed_word(24).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, omega_0) = signed_word(24).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, m0) = signed_word(24).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, af0) = signed_word(11).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, af1) = signed_word(11).parse(i)?;

        Ok((
            i,
            ALM {
                total_messages,
                message_number,
                satellite_prn,
                gps_week,
                health,
                eccentricity,
                reference_time,
                sigma_i,
                omega_dot,
                root_a,
                omega,
                omega_0,
                m0,
                af0,
                af1,
            },
        ))
    }
}
