//! # Streaming Decoder
//!
//! [`Decoder`] assembles frames from a byte stream, one byte at a time. Feeding only
//! flags a complete frame as ready, decoding happens later in
//! [`Decoder::process_frame`], so the byte source (for example a UART interrupt) never
//! pays for parsing.
//!
//! ```rust
//! use nmea0183_decoder::{Decoder, DecoderState, SentenceId};
//!
//! let mut decoder = Decoder::new();
//! for &byte in b"$SDDBT,7.8,f,2.4,M,1.3,F*0D\r\n" {
//!     decoder.feed(byte).unwrap();
//! }
//! assert_eq!(decoder.state(), DecoderState::ReadyToProcess);
//!
//! let decoded = decoder.process_frame().unwrap();
//! assert_eq!(decoded.id(), SentenceId::DBT);
//! assert_eq!(decoder.state(), DecoderState::AwaitingStart);
//! ```

use log::{debug, warn};
use nom::error::ErrorKind;

use crate::{
    Error,
    nmea_content::DecodedSentence,
    nmea0183::{RawFrame, START_DELIMITER, checksum_digits, decode_sentence},
    parsing::CHECKSUM_DELIMITER,
};

/// The state of a [`Decoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecoderState {
    /// Waiting for `$`, every other byte is ignored.
    #[default]
    AwaitingStart,
    /// Collecting the bytes of a frame.
    Accumulating,
    /// A CR or LF ended the frame, it waits for [`Decoder::process_frame`].
    ReadyToProcess,
    /// The frame is being decoded.
    Processing,
}

/// Incremental NMEA 0183 decoder working on a fixed-size frame buffer.
///
/// One decoder serves one byte stream. It holds a single frame at a time, a frame that
/// is not processed before the next `$` arrives is lost.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    state: DecoderState,
    frame: RawFrame,
    checksum: u8,
    // Digits following `*`, `None` until the checksum delimiter is seen.
    checksum_field: Option<heapless::Vec<u8, 2>>,
    // Set once a byte of the current frame was dropped.
    overflowed: bool,
}

impl Decoder {
    pub const fn new() -> Self {
        Self {
            state: DecoderState::AwaitingStart,
            frame: RawFrame::new(),
            checksum: 0,
            checksum_field: None,
            overflowed: false,
        }
    }

    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Returns `true` once a complete frame waits for [`process_frame`](Self::process_frame).
    pub fn is_frame_ready(&self) -> bool {
        self.state == DecoderState::ReadyToProcess
    }

    /// The bytes collected so far, starting with `$`.
    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    /// Feeds one byte of the stream.
    ///
    /// * `$` starts a new frame in any state
    /// * CR or LF completes the frame being collected and is not stored
    /// * `*` starts the checksum digits
    /// * any other byte is stored, bytes before `*` also enter the running checksum
    ///
    /// Bytes arriving outside of a frame are ignored.
    ///
    /// # Errors
    ///
    /// * [`Error::Busy`] - the decoder is processing a frame, the byte is dropped
    /// * [`Error::BufferOverride`] - a ready frame was discarded by a new `$`, the new
    ///   frame is collected anyway
    /// * [`Error::BufferFull`] - the frame buffer is full, the byte is dropped and the
    ///   frame will be rejected by [`process_frame`](Self::process_frame)
    pub fn feed(&mut self, byte: u8) -> Result<(), Error> {
        match (self.state, byte) {
            (DecoderState::Processing, _) => Err(Error::Busy),
            (previous, START_DELIMITER) => {
                self.reset();
                self.state = DecoderState::Accumulating;
                self.store(byte)?;

                if previous == DecoderState::ReadyToProcess {
                    warn!("Unprocessed frame overridden by a new one");
                    return Err(Error::BufferOverride);
                }
                Ok(())
            }
            (DecoderState::Accumulating, b'\r' | b'\n') => {
                self.state = DecoderState::ReadyToProcess;
                debug!("Frame of {} bytes ready", self.frame.len());
                Ok(())
            }
            (DecoderState::Accumulating, _) => {
                match &mut self.checksum_field {
                    Some(digits) => {
                        let _ = digits.push(byte);
                    }
                    None if byte == CHECKSUM_DELIMITER => {
                        self.checksum_field = Some(heapless::Vec::new());
                    }
                    None => self.checksum ^= byte,
                }
                self.store(byte)
            }
            _ => Ok(()),
        }
    }

    /// Feeds a chunk of the stream.
    ///
    /// Stops at the first byte completing a frame and returns the number of bytes
    /// consumed, the caller processes the frame and feeds the rest. Conditions reported
    /// by [`feed`](Self::feed) that do not stop framing are logged and skipped.
    ///
    /// ```rust
    /// use nmea0183_decoder::Decoder;
    ///
    /// let stream = b"$SDMTW,26.8,C*08\r\n$SDMTW,27.0,C*01\r\n";
    /// let mut decoder = Decoder::new();
    ///
    /// let consumed = decoder.feed_slice(stream);
    /// assert_eq!(consumed, 17);
    /// assert!(decoder.is_frame_ready());
    /// ```
    pub fn feed_slice(&mut self, bytes: &[u8]) -> usize {
        for (n, &byte) in bytes.iter().enumerate() {
            if let Err(e) = self.feed(byte) {
                debug!("Byte {n} of chunk: {e}");
            }
            if self.is_frame_ready() {
                return n + 1;
            }
        }
        bytes.len()
    }

    /// Decodes the collected frame.
    ///
    /// The checksum is verified before the sentence is dispatched. Whatever the outcome
    /// the decoder returns to [`DecoderState::AwaitingStart`].
    ///
    /// # Errors
    ///
    /// * [`Error::BadFrameType`] - no frame was collected
    /// * [`Error::ChecksumError`] - the checksum is missing or does not match
    /// * [`Error::ParseError`] - the fields do not match the grammar of the sentence type,
    ///   or bytes of the frame were dropped ([`ErrorKind::TooLarge`])
    /// * [`Error::UnknownElement`] - the sentence type is not supported
    pub fn process_frame(&mut self) -> Result<DecodedSentence, Error> {
        self.state = DecoderState::Processing;
        let result = self.decode();
        self.reset();

        result
    }

    fn decode(&self) -> Result<DecodedSentence, Error> {
        if self.frame.first() != Some(&START_DELIMITER) {
            return Err(Error::BadFrameType);
        }

        if self.overflowed {
            warn!("Frame of {} bytes was truncated", self.frame.len());
            return Err(Error::ParseError(ErrorKind::TooLarge));
        }

        let calculated = self.checksum;
        let found = self
            .checksum_field
            .as_deref()
            .and_then(|digits| checksum_digits(digits).ok())
            .map(|(_, found)| found);

        if found != Some(calculated) {
            warn!("Checksum error, calculated {calculated:02X}, found {found:02X?}");
            return Err(Error::ChecksumError { calculated, found });
        }

        decode_sentence(&self.frame)
    }

    fn store(&mut self, byte: u8) -> Result<(), Error> {
        self.frame.push(byte).map_err(|_| {
            self.overflowed = true;
            warn!("Frame buffer full, dropped {byte:#04X}");
            Error::BufferFull
        })
    }

    fn reset(&mut self) {
        self.state = DecoderState::AwaitingStart;
        self.frame.clear();
        self.checksum = 0;
        self.checksum_field = None;
        self.overflowed = false;
    }
}
