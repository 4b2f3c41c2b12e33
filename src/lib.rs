//! # NMEA 0183 Decoder
//!
//! This library decodes NMEA 0183 sentences of the form `$TTSSS,D1,D2,...,Dn*CC\r\n`
//! into typed records, without heap allocation.
//!
//! Two entry points share the same sentence parsers:
//! - [`Decoder`] consumes a byte stream one byte at a time and decodes on request
//! - [`process_line`] decodes a complete line held by the caller
//!
//! Numeric fields are fixed-point integers scaled by a power of ten documented on each
//! field. Fields left empty in the sentence hold the all-bits-set sentinel of their
//! width (see [`NoValue`]), absent single character fields hold `' '`.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_decoder::{Decoder, NmeaSentence, NoValue};
//!
//! let mut decoder = Decoder::new();
//!
//! for &byte in b"$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E,A,S*7A\r\n" {
//!     decoder.feed(byte).unwrap();
//!
//!     if decoder.is_frame_ready() {
//!         let decoded = decoder.process_frame().unwrap();
//!
//!         if let NmeaSentence::RMC(rmc) = decoded.sentence {
//!             assert_eq!(rmc.speed_over_ground, 5000);
//!             assert_eq!(rmc.time.millisecond.value(), None);
//!         }
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]

mod decoder;
pub mod error;
pub mod nmea_content;
mod nmea0183;
pub mod parsing;

pub use decoder::{Decoder, DecoderState};
pub use error::{Error, IResult};
pub use nmea_content::{
    Coordinate, Date, DecodedSentence, Magnetic, NO_VALUE, NmeaSentence, NoValue, Parsable,
    SatelliteView, SentenceId, TalkerId, Text, Time,
};
pub use nmea0183::*;

#[cfg(all(doctest, feature = "echo-sounder", feature = "gps"))]
#[doc = include_str!("../README.md")]
struct README;
