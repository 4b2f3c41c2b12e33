use nom::Parser;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{Parsable, parse::with_unit},
};

/// HDM - Heading - Magnetic
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_hdm_heading_magnetic>
///
/// ```text
///         1   2
///         |   |
///  $--HDM,x.x,M*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct HDM {
    /// Heading in degrees magnetic, scaled by 10^2
    pub heading: u16,
}

impl Parsable for HDM {
    fn parser(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, heading) = with_unit(2, 'M').parse(i)?;

        Ok((i, HDM { heading }))
    }
}
