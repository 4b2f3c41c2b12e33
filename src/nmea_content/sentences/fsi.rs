use nom::{Parser, character::complete::char};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{Parsable, parse::flag},
    parsing::number,
};

/// FSI - Frequency Set Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_fsi_frequency_set_information>
///
/// ```text
///         1      2      3 4
///         |      |      | |
///  $--FSI,xxxxxx,xxxxxx,c,x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct FSI {
    /// Transmitting frequency in units of 100 Hz, scaled by 10^3
    pub transmit_frequency: u32,
    /// Receiving frequency in units of 100 Hz, scaled by 10^3
    pub receive_frequency: u32,
    /// Communications mode, `d` F3E/G3E simplex, `e` F3E/G3E duplex, `m` J3E,
    /// `o` H3E, `q` F1B/J2B FEC NBDP, `s` F1B/J2B ARQ NBDP, `w` F1B/J2B receive only,
    /// `x` F1B/J2B, `{` A1A Morse, `|` A1B Morse receive only, `}` A2A, `~` F1C/F2C/F3C
    pub mode: char,
    /// Power level, `0` standby to `9` maximum
    pub power_level: char,
}

impl Parsable for FSI {
    fn parser(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, transmit_frequency) = number(3).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, receive_frequency) = number(3).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, mode) = flag(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, power_level) = flag(i)?;

        Ok((
            i,
            FSI {
                transmit_frequency,
                receive_frequency,
                mode,
                power_level,
            },
        ))
    }
}
