//! # NMEA Content
//!
//! Field types shared by the sentence records, the [`NoValue`] sentinel convention and the
//! [`NmeaSentence`] dispatcher.
//!
//! Numeric fields are stored as fixed-point integers. Each field documents its scale,
//! for example a speed stored with 4 fraction digits holds `5000` for `0.5` knots.
//! A field that was empty in the sentence holds the all-bits-set value of its width
//! (`0xFF`, `0xFFFF`, `0xFFFF_FFFF`, or `-1` for signed fields), and a flag holds `' '`.

pub mod parse;
mod sentences;

pub use sentences::*;

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The all-bits-set value marking an absent field.
pub const NO_VALUE: u32 = 0xFFFF_FFFF;

/// The sentinel convention for absent numeric fields.
///
/// Records keep the raw sentinel so they stay bit-compatible with consumers expecting it,
/// [`NoValue::value`] converts a field into an [`Option`].
///
/// ```rust
/// use nmea0183_decoder::NoValue;
///
/// assert_eq!(u16::NO_VALUE, 0xFFFF);
/// assert_eq!(i8::NO_VALUE, -1);
/// assert_eq!(120u16.value(), Some(120));
/// assert_eq!(0xFFu8.value(), None);
/// ```
pub trait NoValue: Copy + PartialEq {
    /// The sentinel of this width.
    const NO_VALUE: Self;

    /// Narrows a scanned field to this width, mapping an absent field to [`Self::NO_VALUE`].
    fn from_field(value: Option<i32>) -> Self;

    /// Returns `true` when the field was absent.
    fn is_no_value(self) -> bool {
        self == Self::NO_VALUE
    }

    /// Returns the field value, or `None` when it was absent.
    fn value(self) -> Option<Self> {
        (!self.is_no_value()).then_some(self)
    }
}

macro_rules! impl_no_value {
    ($($ty:ty),*) => {
        $(
            impl NoValue for $ty {
                const NO_VALUE: Self = NO_VALUE as Self;

                fn from_field(value: Option<i32>) -> Self {
                    value.map_or(Self::NO_VALUE, |value| value as Self)
                }
            }
        )*
    };
}

impl_no_value!(u8, u16, u32, i8, i16, i32);

/// A latitude or longitude.
///
/// `degree` holds the whole degrees, `minute` holds the minutes scaled by 10^7.
/// An empty position has both set to their sentinel.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    /// Hemisphere, `N`, `S`, `E` or `W`
    pub direction: char,
    /// Whole degrees
    pub degree: u8,
    /// Minutes scaled by 10^7
    pub minute: u32,
}

impl Coordinate {
    /// Returns `true` when the position field was empty.
    pub fn is_no_value(&self) -> bool {
        self.degree.is_no_value() && self.minute.is_no_value()
    }

    /// Converts the position into signed decimal degrees, negative for `S` and `W`.
    pub fn to_degrees(&self) -> Option<f64> {
        if self.is_no_value() {
            return None;
        }

        let degrees = f64::from(self.degree) + f64::from(self.minute) / 600_000_000.0;
        match self.direction {
            'S' | 'W' => Some(-degrees),
            _ => Some(degrees),
        }
    }
}

/// A UTC time of day.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// `0xFFFF` when the sentence carries no fractional seconds
    pub millisecond: u16,
}

impl Time {
    /// Returns `true` when the time field was empty.
    pub fn is_no_value(&self) -> bool {
        self.hour.is_no_value() && self.minute.is_no_value() && self.second.is_no_value()
    }

    /// Converts into a [`time::Time`], `None` when empty or out of range.
    #[cfg(feature = "time")]
    pub fn to_time(&self) -> Option<time::Time> {
        let millisecond = self.millisecond.value().unwrap_or_default();
        time::Time::from_hms_milli(self.hour, self.minute, self.second, millisecond).ok()
    }
}

/// A calendar date.
///
/// RMC carries a two digit year which is kept as is, ZDA carries the full year.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub day: u8,
    pub month: u8,
    pub year: u16,
}

impl Date {
    /// Returns `true` when the date field was empty.
    pub fn is_no_value(&self) -> bool {
        self.day.is_no_value() && self.month.is_no_value() && self.year.is_no_value()
    }

    /// Converts into a [`time::Date`], `None` when empty or invalid.
    ///
    /// Two digit years from 83 to 99 map to the 20th century, the rest to the 21st.
    #[cfg(feature = "time")]
    pub fn to_date(&self) -> Option<time::Date> {
        let year = match self.year {
            83..=99 => self.year + 1900,
            0..=82 => self.year + 2000,
            year => year,
        };
        let month = time::Month::try_from(self.month).ok()?;

        time::Date::from_calendar_date(i32::from(year), month, self.day).ok()
    }
}

/// A magnetic deviation or variation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Magnetic {
    /// Degrees scaled by 10^2
    pub value: u16,
    /// `E` or `W`
    pub direction: char,
}

/// One satellite of a GSV sentence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SatelliteView {
    pub id: u8,
    /// Degrees
    pub elevation: u8,
    /// Degrees from true north
    pub azimuth: u16,
    /// dB-Hz, `0xFF` when the satellite is not tracked
    pub snr: u8,
}

impl SatelliteView {
    /// An unfilled satellite slot.
    pub const NO_VALUE: Self = Self {
        id: u8::NO_VALUE,
        elevation: u8::NO_VALUE,
        azimuth: u16::NO_VALUE,
        snr: u8::NO_VALUE,
    };
}

/// The two character source device code of a sentence, packed as `c1 | c2 << 8`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TalkerId(pub u16);

impl TalkerId {
    /// Galileo
    pub const GA: Self = Self::new(*b"GA");
    /// BeiDou
    pub const GB: Self = Self::new(*b"GB");
    /// NavIC
    pub const GI: Self = Self::new(*b"GI");
    /// GLONASS
    pub const GL: Self = Self::new(*b"GL");
    /// Combined GNSS
    pub const GN: Self = Self::new(*b"GN");
    /// GPS
    pub const GP: Self = Self::new(*b"GP");
    /// QZSS
    pub const GQ: Self = Self::new(*b"GQ");

    pub const fn new(code: [u8; 2]) -> Self {
        Self(code[0] as u16 | (code[1] as u16) << 8)
    }

    /// Returns the two characters of the talker ID.
    pub const fn code(&self) -> [u8; 2] {
        [self.0 as u8, (self.0 >> 8) as u8]
    }
}

impl fmt::Display for TalkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c1, c2] = self.code();
        write!(f, "{}{}", char::from(c1), char::from(c2))
    }
}

#[cfg_attr(
    not(any(
        feature = "autopilot",
        feature = "communications",
        feature = "compass",
        feature = "echo-sounder",
        feature = "gps",
        feature = "heading",
        feature = "other",
        feature = "weather"
    )),
    allow(dead_code)
)]
const fn sentence_key(mnemonic: &[u8]) -> u32 {
    mnemonic[0] as u32 | (mnemonic[1] as u32) << 8 | (mnemonic[2] as u32) << 16
}

macro_rules! sentence_ids {
    ($($(#[$meta:meta])* $id:ident),* $(,)?) => {
        /// The three character sentence type.
        ///
        /// Each identifier is keyed by its characters packed as `c1 | c2 << 8 | c3 << 16`.
        /// A sentence type whose group is disabled at compile time has no variant and
        /// decodes as [`SentenceId::Unknown`].
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u32)]
        pub enum SentenceId {
            $(
                $(#[$meta])*
                $id = sentence_key(stringify!($id).as_bytes()),
            )*
            Unknown = NO_VALUE,
        }

        impl SentenceId {
            /// Looks up a sentence type by its three characters.
            pub fn from_mnemonic(mnemonic: &[u8]) -> Self {
                match mnemonic {
                    $(
                        $(#[$meta])*
                        m if m == stringify!($id).as_bytes() => Self::$id,
                    )*
                    _ => Self::Unknown,
                }
            }

            /// Returns the three characters of the sentence type, `None` for
            /// [`SentenceId::Unknown`].
            pub fn mnemonic(&self) -> Option<&'static str> {
                match self {
                    $(
                        $(#[$meta])*
                        Self::$id => Some(stringify!($id)),
                    )*
                    Self::Unknown => None,
                }
            }
        }
    };
}

sentence_ids! {
    #[cfg(feature = "gps")]
    AAM,
    #[cfg(feature = "gps")]
    ALM,
    #[cfg(feature = "autopilot")]
    APB,
    #[cfg(feature = "autopilot")]
    BEC,
    #[cfg(feature = "autopilot")]
    BOD,
    #[cfg(feature = "autopilot")]
    BWW,
    #[cfg(feature = "echo-sounder")]
    DBK,
    #[cfg(feature = "echo-sounder")]
    DBS,
    #[cfg(feature = "echo-sounder")]
    DBT,
    #[cfg(feature = "echo-sounder")]
    DPT,
    #[cfg(feature = "communications")]
    FSI,
    #[cfg(feature = "gps")]
    GGA,
    #[cfg(feature = "gps")]
    GLL,
    #[cfg(feature = "gps")]
    GSA,
    #[cfg(feature = "gps")]
    GSV,
    #[cfg(feature = "heading")]
    HDG,
    #[cfg(feature = "heading")]
    HDM,
    #[cfg(feature = "heading")]
    HDT,
    #[cfg(feature = "echo-sounder")]
    MTW,
    #[cfg(feature = "weather")]
    MWV,
    #[cfg(feature = "gps")]
    RMC,
    #[cfg(feature = "other")]
    TXT,
    #[cfg(feature = "other")]
    VHW,
    #[cfg(feature = "compass")]
    VTG,
    #[cfg(feature = "other")]
    ZDA,
}

impl SentenceId {
    /// Returns the packed key of the sentence type.
    pub const fn key(&self) -> u32 {
        *self as u32
    }
}

impl fmt::Display for SentenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic().unwrap_or("unknown"))
    }
}

/// A bounded text field.
///
/// Bytes are kept verbatim, [`Text::chars`] reads them as Latin-1.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text<const N: usize>(pub heapless::Vec<u8, N>);

impl<const N: usize> Text<N> {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the text when it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.0).ok()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied().map(char::from)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> fmt::Display for Text<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars().try_for_each(|c| fmt::Write::write_char(f, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_talker_id() {
        assert_eq!(TalkerId::GP.0, 0x5047);
        assert_eq!(TalkerId::new(*b"XX").0, 0x5858);
        assert_eq!(TalkerId::GN.code(), *b"GN");
    }

    #[cfg(all(feature = "echo-sounder", feature = "gps"))]
    #[test]
    fn test_sentence_id() {
        let cases = [
            (&b"RMC"[..], SentenceId::RMC, 0x434D52),
            (b"GGA", SentenceId::GGA, 0x414747),
            (b"ZZZ", SentenceId::Unknown, 0xFFFF_FFFF),
            (b"RM", SentenceId::Unknown, 0xFFFF_FFFF),
        ];

        for (mnemonic, id, key) in cases {
            assert_eq!(SentenceId::from_mnemonic(mnemonic), id, "Failed: {mnemonic:?}");
            assert_eq!(id.key(), key);
        }

        assert_eq!(SentenceId::DBT.mnemonic(), Some("DBT"));
    }

    #[test]
    fn test_unknown_sentence_id() {
        let cases: [&[u8]; 3] = [b"ZZZ", b"RM", b""];

        for mnemonic in cases {
            let id = SentenceId::from_mnemonic(mnemonic);
            assert_eq!(id, SentenceId::Unknown, "Failed: {mnemonic:?}");
            assert_eq!(id.key(), NO_VALUE);
            assert_eq!(id.mnemonic(), None);
        }
    }

    #[test]
    fn test_no_value() {
        assert_eq!(u8::from_field(None), 0xFF);
        assert_eq!(u32::from_field(None), 0xFFFF_FFFF);
        assert_eq!(i16::from_field(Some(-2130)), -2130);
        assert_eq!(i32::NO_VALUE, -1);
        assert!(0xFFFFu16.is_no_value());
    }

    #[test]
    fn test_coordinate_degrees() {
        let coordinate = Coordinate {
            direction: 'W',
            degree: 123,
            minute: 111_200_000,
        };
        let degrees = coordinate.to_degrees().unwrap();
        assert!((degrees + 123.185_333).abs() < 1e-6);

        let empty = Coordinate {
            direction: ' ',
            degree: u8::NO_VALUE,
            minute: u32::NO_VALUE,
        };
        assert_eq!(empty.to_degrees(), None);
    }
}
