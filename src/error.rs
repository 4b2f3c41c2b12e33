//! # Error Types
//!
//! This module defines the error type returned by the framer, the line decoder
//! and every field parser of the library.

use core::fmt;

use nom::error::{ErrorKind, FromExternalError};

use crate::nmea_content::DecodedSentence;

/// Holds the result of parsing functions.
///
/// The `Ok` side is a pair containing the remainder of the input (the part of the data that
/// was not parsed) and the produced value. The `Err` side contains an instance of `nom::Err`
/// wrapping an [`Error`].
pub type IResult<I, O> = nom::IResult<I, O, Error>;

/// Represents all possible errors that can occur while framing and decoding NMEA sentences.
///
/// Every error is reported as a value. After a terminal per-frame error the
/// [`Decoder`](crate::Decoder) is back in
/// [`AwaitingStart`](crate::DecoderState::AwaitingStart), so a single corrupt sentence
/// cannot block the stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A byte was fed while the previous frame was still being processed.
    Busy,

    /// A new `$` arrived before the previously completed frame was processed.
    ///
    /// The older frame is lost, the decoder keeps accumulating the new one.
    BufferOverride,

    /// The frame buffer is full, the offending byte was dropped.
    ///
    /// Framing continues and the truncated frame will later fail its checksum or its
    /// field grammar.
    BufferFull,

    /// The frame does not start with `$`.
    BadFrameType,

    /// The checksum of the sentence was corrupt, incorrect or missing.
    ChecksumError {
        /// The checksum calculated from the sentence content
        calculated: u8,
        /// The checksum transmitted with the sentence, `None` when the checksum
        /// delimiter or its two hex digits are missing
        found: Option<u8>,
    },

    /// The sentence ID is known but its fields do not match the expected grammar.
    ///
    /// Wraps the nom error kind of the combinator that rejected the input.
    ParseError(ErrorKind),

    /// The sentence ID is not recognized, or its sentence group is not compiled in.
    ///
    /// Carries the decoded talker ID and the raw frame so the caller can handle the
    /// sentence on its own. The validity flag of the carried sentence is `false`.
    UnknownElement(DecodedSentence),
}

impl<I> nom::error::ParseError<I> for Error {
    fn from_error_kind(_: I, kind: ErrorKind) -> Self {
        Error::ParseError(kind)
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I, EX> FromExternalError<I, EX> for Error {
    fn from_external_error(_: I, kind: ErrorKind, _: EX) -> Self {
        Error::ParseError(kind)
    }
}

impl From<nom::Err<Error>> for Error {
    fn from(err: nom::Err<Error>) -> Self {
        match err {
            nom::Err::Error(e) | nom::Err::Failure(e) => e,
            nom::Err::Incomplete(_) => Error::ParseError(ErrorKind::Eof),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Busy => f.write_str("decoder is busy processing a frame"),
            Error::BufferOverride => f.write_str("unprocessed frame overridden by a new frame"),
            Error::BufferFull => f.write_str("frame buffer is full"),
            Error::BadFrameType => f.write_str("frame does not start with '$'"),
            Error::ChecksumError {
                calculated,
                found: Some(found),
            } => write!(
                f,
                "checksum mismatch: calculated {calculated:02X}, found {found:02X}"
            ),
            Error::ChecksumError {
                calculated,
                found: None,
            } => write!(f, "checksum missing: calculated {calculated:02X}"),
            Error::ParseError(kind) => write!(f, "invalid sentence fields: {kind:?}"),
            Error::UnknownElement(decoded) => {
                write!(f, "unknown sentence from talker {}", decoded.talker_id)
            }
        }
    }
}

impl core::error::Error for Error {}
