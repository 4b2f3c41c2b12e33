#[cfg(feature = "gps")]
mod aam;
#[cfg(feature = "gps")]
mod alm;
#[cfg(feature = "autopilot")]
mod apb;
#[cfg(feature = "autopilot")]
mod bec;
#[cfg(feature = "autopilot")]
mod bod;
#[cfg(feature = "autopilot")]
mod bww;
#[cfg(feature = "echo-sounder")]
mod dbx;
#[cfg(feature = "echo-sounder")]
mod dpt;
#[cfg(feature = "communications")]
mod fsi;
#[cfg(feature = "gps")]
mod gga;
#[cfg(feature = "gps")]
mod gll;
#[cfg(feature = "gps")]
mod gsa;
#[cfg(feature = "gps")]
mod gsv;
#[cfg(feature = "heading")]
mod hdg;
#[cfg(feature = "heading")]
mod hdm;
#[cfg(feature = "heading")]
mod hdt;
#[cfg(feature = "echo-sounder")]
mod mtw;
#[cfg(feature = "weather")]
mod mwv;
#[cfg(feature = "gps")]
mod rmc;
#[cfg(feature = "other")]
mod txt;
#[cfg(feature = "other")]
mod vhw;
#[cfg(feature = "compass")]
mod vtg;
#[cfg(feature = "other")]
mod zda;

#[cfg(feature = "gps")]
pub use aam::AAM;
#[cfg(feature = "gps")]
pub use alm::ALM;
#[cfg(feature = "autopilot")]
pub use apb::APB;
#[cfg(feature = "autopilot")]
pub use bec::BEC;
#[cfg(feature = "autopilot")]
pub use bod::BOD;
#[cfg(feature = "autopilot")]
pub use bww::BWW;
#[cfg(feature = "echo-sounder")]
pub use dbx::DBx;
#[cfg(feature = "echo-sounder")]
pub use dpt::DPT;
#[cfg(feature = "communications")]
pub use fsi::FSI;
#[cfg(feature = "gps")]
pub use gga::GGA;
#[cfg(feature = "gps")]
pub use gll::GLL;
#[cfg(feature = "gps")]
pub use gsa::GSA;
#[cfg(feature = "gps")]
pub use gsv::GSV;
#[cfg(feature = "heading")]
pub use hdg::HDG;
#[cfg(feature = "heading")]
pub use hdm::HDM;
#[cfg(feature = "heading")]
pub use hdt::HDT;
#[cfg(feature = "echo-sounder")]
pub use mtw::MTW;
#[cfg(feature = "weather")]
pub use mwv::MWV;
#[cfg(feature = "gps")]
pub use rmc::RMC;
#[cfg(feature = "other")]
pub use txt::{TEXT_MESSAGE_LENGTH, TXT};
#[cfg(feature = "other")]
pub use vhw::VHW;
#[cfg(feature = "compass")]
pub use vtg::VTG;
#[cfg(feature = "other")]
pub use zda::ZDA;

use nom::{
    Parser,
    bytes::complete::{take, take_till},
    character::complete::char,
    error::{ErrorKind, ParseError},
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, IResult,
    nmea_content::{SentenceId, TalkerId},
    nmea0183::RawFrame,
    parsing::{FIELD_DELIMITER, consumed},
};

/// A trait for types that can be parsed from the fields of a sentence.
///
/// This trait defines a single method `parser` that takes the bytes following the
/// sentence ID and its field delimiter, up to but excluding the checksum delimiter,
/// and returns an `IResult` containing the remaining input and the parsed value.
///
/// This trait is implemented by all strongly-typed NMEA sentence structs.
pub trait Parsable: Sized {
    /// Parses the input and returns a result.
    ///
    /// # Arguments
    ///
    /// * `input` - The sentence fields to parse into `Self`.
    ///
    /// # Returns
    ///
    /// Returns an [`IResult`] containing:
    /// - On success: A tuple of `(remaining_input, parsed_value)`, where `remaining_input`
    ///   is the unparsed portion of the input and `parsed_value` is the successfully parsed
    ///   instance of `Self`.
    /// - On failure: An [`Error`] indicating the parsing error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nmea0183_decoder::nmea_content::{Parsable, RMC};
    ///
    /// let result = RMC::parser(b"225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E");
    /// assert!(result.is_ok());
    ///
    /// let (rest, rmc) = result.unwrap();
    /// assert!(rest.is_empty());
    /// assert_eq!(rmc.speed_over_ground, 5000);
    /// ```
    fn parser(input: &[u8]) -> IResult<&[u8], Self>;
}

/// A unified enum representing all supported NMEA 0183 sentence types.
///
/// Each variant wraps the corresponding strongly-typed struct, a sentence type that is
/// not supported keeps its raw frame in [`NmeaSentence::Unknown`].
///
/// ## Supported Sentence Types
///
/// | Variant      | Feature          | Sentence Type                                           |
/// |--------------|------------------|---------------------------------------------------------|
/// | AAM([`AAM`]) | `gps`            | Waypoint Arrival Alarm                                  |
/// | ALM([`ALM`]) | `gps`            | GPS Almanac Data                                        |
/// | APB([`APB`]) | `autopilot`      | Autopilot Sentence "B"                                  |
/// | BEC([`BEC`]) | `autopilot`      | Bearing & Distance to Waypoint - Dead Reckoning         |
/// | BOD([`BOD`]) | `autopilot`      | Bearing - Waypoint to Waypoint                          |
/// | BWW([`BWW`]) | `autopilot`      | Bearing - Waypoint to Waypoint                          |
/// | DBK([`DBx`]) | `echo-sounder`   | Depth Below Keel                                        |
/// | DBS([`DBx`]) | `echo-sounder`   | Depth Below Surface                                     |
/// | DBT([`DBx`]) | `echo-sounder`   | Depth Below Transducer                                  |
/// | DPT([`DPT`]) | `echo-sounder`   | Depth of Water                                          |
/// | FSI([`FSI`]) | `communications` | Frequency Set Information                               |
/// | GGA([`GGA`]) | `gps`            | Global Positioning System Fix Data                      |
/// | GLL([`GLL`]) | `gps`            | Geographic Position - Latitude/Longitude                |
/// | GSA([`GSA`]) | `gps`            | GPS DOP and active satellites                           |
/// | GSV([`GSV`]) | `gps`            | Satellites in View                                      |
/// | HDG([`HDG`]) | `heading`        | Heading - Deviation & Variation                         |
/// | HDM([`HDM`]) | `heading`        | Heading - Magnetic                                      |
/// | HDT([`HDT`]) | `heading`        | Heading - True                                          |
/// | MTW([`MTW`]) | `echo-sounder`   | Mean Temperature of Water                               |
/// | MWV([`MWV`]) | `weather`        | Wind Speed and Angle                                    |
/// | RMC([`RMC`]) | `gps`            | Recommended Minimum Navigation Information              |
/// | TXT([`TXT`]) | `other`          | Text Transmission                                       |
/// | VHW([`VHW`]) | `other`          | Water speed and heading                                 |
/// | VTG([`VTG`]) | `compass`        | Track made good and Ground speed                        |
/// | ZDA([`ZDA`]) | `other`          | Time & Date - UTC, day, month, year and local time zone |
///
/// All groups are enabled by default. A sentence whose group is disabled is reported as
/// [`Error::UnknownElement`].
///
/// ## Example Usage
///
/// ```rust
/// use nmea0183_decoder::{SentenceId, nmea_content::NmeaSentence};
///
/// let result = NmeaSentence::parser(SentenceId::ZDA)(b"160012.71,11,03,2004,-10,00");
/// assert!(result.is_ok());
///
/// match result.unwrap().1 {
///     NmeaSentence::ZDA(zda) => {
///         assert_eq!(zda.date.year, 2004);
///         assert_eq!(zda.local_zone_hours, -10);
///     }
///     _ => unreachable!(),
/// }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum NmeaSentence {
    #[cfg(feature = "gps")]
    /// Waypoint Arrival Alarm
    AAM(AAM),
    #[cfg(feature = "gps")]
    /// GPS Almanac Data
    ALM(ALM),
    #[cfg(feature = "autopilot")]
    /// Autopilot Sentence "B"
    APB(APB),
    #[cfg(feature = "autopilot")]
    /// Bearing & Distance to Waypoint - Dead Reckoning
    BEC(BEC),
    #[cfg(feature = "autopilot")]
    /// Bearing - Waypoint to Waypoint
    BOD(BOD),
    #[cfg(feature = "autopilot")]
    /// Bearing - Waypoint to Waypoint
    BWW(BWW),
    #[cfg(feature = "echo-sounder")]
    /// Depth Below Keel
    DBK(DBx),
    #[cfg(feature = "echo-sounder")]
    /// Depth Below Surface
    DBS(DBx),
    #[cfg(feature = "echo-sounder")]
    /// Depth Below Transducer
    DBT(DBx),
    #[cfg(feature = "echo-sounder")]
    /// Depth of Water
    DPT(DPT),
    #[cfg(feature = "communications")]
    /// Frequency Set Information
    FSI(FSI),
    #[cfg(feature = "gps")]
    /// Global Positioning System Fix Data
    GGA(GGA),
    #[cfg(feature = "gps")]
    /// Geographic Position - Latitude/Longitude
    GLL(GLL),
    #[cfg(feature = "gps")]
    /// GPS DOP and active satellites
    GSA(GSA),
    #[cfg(feature = "gps")]
    /// Satellites in View
    GSV(GSV),
    #[cfg(feature = "heading")]
    /// Heading - Deviation & Variation
    HDG(HDG),
    #[cfg(feature = "heading")]
    /// Heading - Magnetic
    HDM(HDM),
    #[cfg(feature = "heading")]
    /// Heading - True
    HDT(HDT),
    #[cfg(feature = "echo-sounder")]
    /// Mean Temperature of Water
    MTW(MTW),
    #[cfg(feature = "weather")]
    /// Wind Speed and Angle
    MWV(MWV),
    #[cfg(feature = "gps")]
    /// Recommended Minimum Navigation Information
    RMC(RMC),
    #[cfg(feature = "other")]
    /// Text Transmission
    TXT(TXT),
    #[cfg(feature = "other")]
    /// Water speed and heading
    VHW(VHW),
    #[cfg(feature = "compass")]
    /// Track made good and Ground speed
    VTG(VTG),
    #[cfg(feature = "other")]
    /// Time & Date - UTC, day, month, year and local time zone
    ZDA(ZDA),
    /// Unsupported sentence, holding the frame from `$` through the checksum digits
    Unknown(RawFrame),
}

impl NmeaSentence {
    /// Returns a parser for the fields of the sentence type `id`.
    ///
    /// The fields must be consumed completely, trailing input is a parse error.
    /// [`SentenceId::Unknown`] has no field grammar and always fails.
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
        allow(unreachable_code)
    )]
    pub fn parser(id: SentenceId) -> impl Fn(&[u8]) -> IResult<&[u8], Self> {
        move |i: &[u8]| {
            let (i, sentence) = match id {
                #[cfg(feature = "gps")]
                SentenceId::AAM => AAM::parser.map(Self::AAM).parse(i)?,
                #[cfg(feature = "gps")]
                SentenceId::ALM => ALM::parser.map(Self::ALM).parse(i)?,
                #[cfg(feature = "autopilot")]
                SentenceId::APB => APB::parser.map(Self::APB).parse(i)?,
                #[cfg(feature = "autopilot")]
                SentenceId::BEC => BEC::parser.map(Self::BEC).parse(i)?,
                #[cfg(feature = "autopilot")]
                SentenceId::BOD => BOD::parser.map(Self::BOD).parse(i)?,
                #[cfg(feature = "autopilot")]
                SentenceId::BWW => BWW::parser.map(Self::BWW).parse(i)?,
                #[cfg(feature = "echo-sounder")]
                SentenceId::DBK => DBx::parser.map(Self::DBK).parse(i)?,
                #[cfg(feature = "echo-sounder")]
                SentenceId::DBS => DBx::parser.map(Self::DBS).parse(i)?,
                #[cfg(feature = "echo-sounder")]
                SentenceId::DBT => DBx::parser.map(Self::DBT).parse(i)?,
                #[cfg(feature = "echo-sounder")]
                SentenceId::DPT => DPT::parser.map(Self::DPT).parse(i)?,
                #[cfg(feature = "communications")]
                SentenceId::FSI => FSI::parser.map(Self::FSI).parse(i)?,
                #[cfg(feature = "gps")]
                SentenceId::GGA => GGA::parser.map(Self::GGA).parse(i)?,
                #[cfg(feature = "gps")]
                SentenceId::GLL => GLL::parser.map(Self::GLL).parse(i)?,
                #[cfg(feature = "gps")]
                SentenceId::GSA => GSA::parser.map(Self::GSA).parse(i)?,
                #[cfg(feature = "gps")]
                SentenceId::GSV => GSV::parser.map(Self::GSV).parse(i)?,
                #[cfg(feature = "heading")]
                SentenceId::HDG => HDG::parser.map(Self::HDG).parse(i)?,
                #[cfg(feature = "heading")]
                SentenceId::HDM => HDM::parser.map(Self::HDM).parse(i)?,
                #[cfg(feature = "heading")]
                SentenceId::HDT => HDT::parser.map(Self::HDT).parse(i)?,
                #[cfg(feature = "echo-sounder")]
                SentenceId::MTW => MTW::parser.map(Self::MTW).parse(i)?,
                #[cfg(feature = "weather")]
                SentenceId::MWV => MWV::parser.map(Self::MWV).parse(i)?,
                #[cfg(feature = "gps")]
                SentenceId::RMC => RMC::parser.map(Self::RMC).parse(i)?,
                #[cfg(feature = "other")]
                SentenceId::TXT => TXT::parser.map(Self::TXT).parse(i)?,
                #[cfg(feature = "other")]
                SentenceId::VHW => VHW::parser.map(Self::VHW).parse(i)?,
                #[cfg(feature = "compass")]
                SentenceId::VTG => VTG::parser.map(Self::VTG).parse(i)?,
                #[cfg(feature = "other")]
                SentenceId::ZDA => ZDA::parser.map(Self::ZDA).parse(i)?,
                SentenceId::Unknown => {
                    return Err(nom::Err::Error(Error::from_error_kind(i, ErrorKind::Switch)));
                }
            };

            let (i, _) = consumed(take(0u8), ErrorKind::Eof).parse(i)?;
            Ok((i, sentence))
        }
    }

    /// Returns the sentence type of the decoded content.
    pub fn id(&self) -> SentenceId {
        match self {
            #[cfg(feature = "gps")]
            Self::AAM(_) => SentenceId::AAM,
            #[cfg(feature = "gps")]
            Self::ALM(_) => SentenceId::ALM,
            #[cfg(feature = "autopilot")]
            Self::APB(_) => SentenceId::APB,
            #[cfg(feature = "autopilot")]
            Self::BEC(_) => SentenceId::BEC,
            #[cfg(feature = "autopilot")]
            Self::BOD(_) => SentenceId::BOD,
            #[cfg(feature = "autopilot")]
            Self::BWW(_) => SentenceId::BWW,
            #[cfg(feature = "echo-sounder")]
            Self::DBK(_) => SentenceId::DBK,
            #[cfg(feature = "echo-sounder")]
            Self::DBS(_) => SentenceId::DBS,
            #[cfg(feature = "echo-sounder")]
            Self::DBT(_) => SentenceId::DBT,
            #[cfg(feature = "echo-sounder")]
            Self::DPT(_) => SentenceId::DPT,
            #[cfg(feature = "communications")]
            Self::FSI(_) => SentenceId::FSI,
            #[cfg(feature = "gps")]
            Self::GGA(_) => SentenceId::GGA,
            #[cfg(feature = "gps")]
            Self::GLL(_) => SentenceId::GLL,
            #[cfg(feature = "gps")]
            Self::GSA(_) => SentenceId::GSA,
            #[cfg(feature = "gps")]
            Self::GSV(_) => SentenceId::GSV,
            #[cfg(feature = "heading")]
            Self::HDG(_) => SentenceId::HDG,
            #[cfg(feature = "heading")]
            Self::HDM(_) => SentenceId::HDM,
            #[cfg(feature = "heading")]
            Self::HDT(_) => SentenceId::HDT,
            #[cfg(feature = "echo-sounder")]
            Self::MTW(_) => SentenceId::MTW,
            #[cfg(feature = "weather")]
            Self::MWV(_) => SentenceId::MWV,
            #[cfg(feature = "gps")]
            Self::RMC(_) => SentenceId::RMC,
            #[cfg(feature = "other")]
            Self::TXT(_) => SentenceId::TXT,
            #[cfg(feature = "other")]
            Self::VHW(_) => SentenceId::VHW,
            #[cfg(feature = "compass")]
            Self::VTG(_) => SentenceId::VTG,
            #[cfg(feature = "other")]
            Self::ZDA(_) => SentenceId::ZDA,
            Self::Unknown(_) => SentenceId::Unknown,
        }
    }
}

/// The outcome of decoding one frame.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedSentence {
    pub talker_id: TalkerId,
    pub sentence: NmeaSentence,
    /// `true` when every field matched the grammar of a supported sentence type
    pub valid: bool,
}

impl DecodedSentence {
    pub fn id(&self) -> SentenceId {
        self.sentence.id()
    }
}

/// Parses the talker ID and the sentence ID of a frame, `$` excluded.
///
/// The sentence ID is [`SentenceId::Unknown`] when it is not followed by the field
/// delimiter, for example in `$GPRMCX,...`. Any characters up to the first field delimiter
/// are skipped, the delimiter itself is required.
pub fn sentence_header(i: &[u8]) -> IResult<&[u8], (TalkerId, SentenceId)> {
    let (i, talker) = take(2u8).parse(i)?;
    let (i, mnemonic) = take(3u8).parse(i)?;

    let id = match i.first() {
        Some(&FIELD_DELIMITER) => SentenceId::from_mnemonic(mnemonic),
        _ => SentenceId::Unknown,
    };

    let (i, _) = take_till(|c| c == FIELD_DELIMITER).parse(i)?;
    let (i, _) = char(',').parse(i)?;

    Ok((i, (TalkerId::new([talker[0], talker[1]]), id)))
}
