use nom::Parser;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{Parsable, parse::with_unit},
};

/// MTW - Mean Temperature of Water
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_mtw_mean_temperature_of_water>
///
/// ```text
///         1   2
///         |   |
///  $--MTW,x.x,C*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct MTW {
    /// Degrees Celsius, scaled by 10^2
    pub temperature: i16,
}

impl Parsable for MTW {
    fn parser(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, temperature) = with_unit(2, 'C').parse(i)?;

        Ok((i, MTW { temperature }))
    }
}
