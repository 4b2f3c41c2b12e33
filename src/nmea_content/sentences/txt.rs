use nom::{
    Parser,
    character::complete::char,
    error::{ErrorKind, ParseError},
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, IResult,
    nmea_content::{Parsable, Text},
    parsing::{hex, number},
};

/// Capacity of a decoded text message.
pub const TEXT_MESSAGE_LENGTH: usize = 61;

/// TXT - Text Transmission
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_txt_text_transmission>
///
/// ```text
///         1  2  3  4
///         |  |  |  |
///  $--TXT,xx,xx,xx,c--c*hh<CR><LF>
/// ```
///
/// Reserved characters are transmitted as `^` followed by their two digit hex code,
/// the message holds them decoded.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct TXT {
    /// Total number of TXT sentences in this group
    pub total_messages: u8,
    /// Sentence number of this TXT message within current group
    pub message_number: u8,
    /// Text identifier, `01` error, `02` warning, `03` notice, `07` user
    pub identifier: u8,
    pub message: Text<TEXT_MESSAGE_LENGTH>,
}

fn escaped_text(i: &[u8]) -> IResult<&[u8], Text<TEXT_MESSAGE_LENGTH>> {
    let mut message = heapless::Vec::new();
    let mut i = i;

    while let Some((&c, rest)) = i.split_first() {
        let c = if c == b'^' {
            if rest.is_empty() {
                return Err(nom::Err::Error(Error::from_error_kind(i, ErrorKind::Escaped)));
            }
            let (rest, code) = hex(Some(2)).parse(rest)?;
            i = rest;
            code.unwrap_or_default() as u8
        } else {
            i = rest;
            c
        };

        if message.push(c).is_err() {
            return Err(nom::Err::Error(Error::from_error_kind(i, ErrorKind::TooLarge)));
        }
    }

    Ok((i, Text(message)))
}

impl Parsable for TXT {
    fn parser(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, total_messages) = number(0).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, message_number) = number(0).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, identifier) = number(0).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, message) = escaped_text(i)?;

        Ok((
            i,
            TXT {
                total_messages,
                message_number,
                identifier,
                message,
            },
        ))
    }
}
