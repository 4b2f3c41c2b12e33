use nom::Parser;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{Parsable, parse::with_unit},
};

/// HDT - Heading - True
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_hdt_heading_true>
///
/// ```text
///         1   2
///         |   |
///  $--HDT,x.x,T*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct HDT {
    /// Heading in degrees true, scaled by 10^2
    pub heading: u16,
}

impl Parsable for HDT {
    fn parser(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, heading) = with_unit(2, 'T').parse(i)?;

        Ok((i, HDT { heading }))
    }
}
