//! # NMEA 0183 Frame Decoding
//!
//! This module decodes complete NMEA 0183 frames of the form
//! `$TTSSS,D1,D2,...,Dn*CC\r\n`, where `TT` is the talker ID, `SSS` the sentence ID and
//! `CC` the two digit hexadecimal checksum.
//!
//! [`process_line`] decodes a buffered line in one call. The [`Decoder`](crate::Decoder)
//! feeds on single bytes and shares [`decode_sentence`] with it.

use log::{debug, warn};
use nom::{
    AsBytes, Input, Parser, bytes::complete::take, character::complete::hex_digit0,
    error::ErrorKind, number::complete::hex_u32,
};

use crate::{
    Error, IResult,
    nmea_content::{DecodedSentence, NmeaSentence, SentenceId, sentence_header},
    parsing::{CHECKSUM_DELIMITER, consumed},
};

/// Marks the start of a frame.
pub const START_DELIMITER: u8 = b'$';

/// Capacity of a raw frame, 82 characters of sentence and its `$`.
pub const FRAME_BUFFER_SIZE: usize = 83;

/// A frame kept verbatim, from `$` up to its line terminator.
pub type RawFrame = heapless::Vec<u8, FRAME_BUFFER_SIZE>;

/// Calculates the NMEA 0183 checksum for the given sentence content.
///
/// The checksum is the XOR of all bytes between the `$` prefix and the `*` checksum
/// delimiter, both excluded.
///
/// # Arguments
///
/// * `input` - The sentence content to calculate the checksum for
///
/// # Returns
///
/// A tuple of (input, checksum) where `input` is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::checksum;
///
/// let (_, cc) = checksum(&b"GPGGA,123456,data"[..]);
/// assert_eq!(cc, 0x41);
/// ```
pub fn checksum<I>(input: I) -> (I, u8)
where
    I: Input + AsBytes,
{
    let calculated_checksum = input
        .as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte);

    (input, calculated_checksum)
}

/// Parses the two hexadecimal checksum digits following `*`.
///
/// Two digits must be present, in either case. Whatever follows them is left unparsed.
///
/// ```rust
/// use nmea0183_decoder::checksum_digits;
///
/// assert_eq!(checksum_digits(b"7a"), Ok((&b""[..], 0x7A)));
/// assert_eq!(checksum_digits(b"7A \r\n"), Ok((&b" \r\n"[..], 0x7A)));
/// assert!(checksum_digits(b"7").is_err());
/// assert!(checksum_digits(b"7G").is_err());
/// ```
pub fn checksum_digits(i: &[u8]) -> IResult<&[u8], u8> {
    let (i, cc) = take(2u8).parse(i)?;
    let (_, cc) = consumed(hex_digit0, ErrorKind::IsA).parse(cc)?;
    let (_, cc) = hex_u32.parse(cc)?;

    Ok((i, cc as u8))
}

fn raw_frame(frame: &[u8]) -> RawFrame {
    frame.iter().take(FRAME_BUFFER_SIZE).copied().collect()
}

/// Decodes a frame whose checksum was already verified.
///
/// `frame` starts with `$`. Content after the first `*` is ignored.
///
/// # Errors
///
/// * [`Error::BadFrameType`] - the frame does not start with `$`
/// * [`Error::ParseError`] - the header is malformed, or the fields of a supported
///   sentence type do not match its grammar
/// * [`Error::UnknownElement`] - the sentence type is not supported, the error carries
///   the talker ID and the raw frame
pub fn decode_sentence(frame: &[u8]) -> Result<DecodedSentence, Error> {
    let content = match frame.split_first() {
        Some((&START_DELIMITER, content)) => content,
        _ => return Err(Error::BadFrameType),
    };
    let content = content
        .iter()
        .position(|&c| c == CHECKSUM_DELIMITER)
        .map_or(content, |end| &content[..end]);

    let (fields, (talker_id, id)) = sentence_header(content)?;

    if id == SentenceId::Unknown {
        debug!("Unknown sentence from talker {talker_id}");
        return Err(Error::UnknownElement(DecodedSentence {
            talker_id,
            sentence: NmeaSentence::Unknown(raw_frame(frame)),
            valid: false,
        }));
    }

    let (_, sentence) = NmeaSentence::parser(id)(fields).map_err(|e| {
        warn!("Invalid {id} sentence from talker {talker_id}");
        Error::from(e)
    })?;

    debug!("Decoded {id} sentence from talker {talker_id}");
    Ok(DecodedSentence {
        talker_id,
        sentence,
        valid: true,
    })
}

/// Decodes one buffered line.
///
/// The line ends at the first CR, LF or NUL, or at the end of the slice. The checksum is
/// verified before the fields are parsed.
///
/// # Errors
///
/// * [`Error::BadFrameType`] - the line does not start with `$`
/// * [`Error::ChecksumError`] - the checksum is missing or does not match
/// * and the errors of [`decode_sentence`]
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{NmeaSentence, SentenceId, TalkerId, process_line};
///
/// let decoded = process_line("$SDMTW,26.8,C*08\r\n").unwrap();
/// assert_eq!(decoded.talker_id, TalkerId::new(*b"SD"));
/// assert_eq!(decoded.id(), SentenceId::MTW);
/// assert!(decoded.valid);
///
/// match decoded.sentence {
///     NmeaSentence::MTW(mtw) => assert_eq!(mtw.temperature, 2680),
///     _ => unreachable!(),
/// }
/// ```
pub fn process_line(line: impl AsRef<[u8]>) -> Result<DecodedSentence, Error> {
    let line = line.as_ref();
    let frame = line
        .iter()
        .position(|&c| matches!(c, b'\r' | b'\n' | 0))
        .map_or(line, |end| &line[..end]);

    let content = match frame.split_first() {
        Some((&START_DELIMITER, content)) => content,
        _ => return Err(Error::BadFrameType),
    };

    let Some(end) = content.iter().position(|&c| c == CHECKSUM_DELIMITER) else {
        let (_, calculated) = checksum(content);
        warn!("Missing checksum, calculated {calculated:02X}");
        return Err(Error::ChecksumError {
            calculated,
            found: None,
        });
    };

    let (_, calculated) = checksum(&content[..end]);
    let found = checksum_digits(&content[end + 1..])
        .ok()
        .map(|(_, found)| found);

    if found != Some(calculated) {
        warn!("Checksum error, calculated {calculated:02X}, found {found:02X?}");
        return Err(Error::ChecksumError { calculated, found });
    }

    decode_sentence(frame)
}
