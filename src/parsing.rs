//! # Parsing Utilities
//!
//! This module provides the primitive field scanners shared by every sentence parser,
//! and a combinator ensuring complete consumption of input data.
//!
//! Numeric fields are decoded into fixed-point integers: a field holding `220.86`
//! scanned with 4 fraction digits becomes `2208600`. Fields that are empty decode to
//! `None`, which the typed helpers turn into the all-bits-set sentinel of
//! [`NoValue`](crate::NoValue).

use nom::{
    Err, Input, Mode, OutputMode, PResult, Parser,
    bytes::complete::{take_till, take_while_m_n},
    error::{ErrorKind, ParseError},
};

use crate::{IResult, nmea_content::NoValue};

/// Separates two fields of a sentence.
pub const FIELD_DELIMITER: u8 = b',';
/// Separates the sentence content from its checksum.
pub const CHECKSUM_DELIMITER: u8 = b'*';

// Upper bound on characters examined by an unbounded scan, a sentence never exceeds it.
const MAX_SCAN_LENGTH: usize = 83;

fn at_field_end(i: &[u8]) -> bool {
    matches!(
        i.first(),
        None | Some(&FIELD_DELIMITER) | Some(&CHECKSUM_DELIMITER)
    )
}

/// Skips the remaining characters of the current field.
///
/// Stops in front of the next field delimiter, the checksum delimiter or at the end
/// of input.
pub fn skip_field(i: &[u8]) -> IResult<&[u8], &[u8]> {
    take_till(|c| c == FIELD_DELIMITER || c == CHECKSUM_DELIMITER).parse(i)
}

/// Scans a signed decimal field into a fixed-point integer.
///
/// * `max_chars` - the number of characters to examine, `None` scans the whole field and
///   then skips whatever is left of it
/// * `stop` - a byte that ends the scan in front of it
/// * `fraction_digits` - the number of decimal places kept, missing ones are padded
///   with zeros and extra ones are dropped
///
/// An optional leading `+` or `-` is accepted. A field that is empty after the sign
/// yields `None`. Scanning stops at the first character that is neither a digit nor
/// the decimal point. Arithmetic wraps on overflow.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::parsing::fixed_point;
///
/// assert_eq!(fixed_point(None, None, 4)(b"220.86,T"), Ok((&b",T"[..], Some(2208600))));
/// assert_eq!(fixed_point(None, None, 2)(b"-21.345,M"), Ok((&b",M"[..], Some(-2134))));
/// assert_eq!(fixed_point(Some(2), None, 0)(b"225446"), Ok((&b"5446"[..], Some(22))));
/// assert_eq!(fixed_point(None, Some(b'.'), 0)(b"4916.45"), Ok((&b".45"[..], Some(4916))));
/// assert_eq!(fixed_point(None, None, 2)(b",M"), Ok((&b",M"[..], None)));
/// ```
pub fn fixed_point(
    max_chars: Option<u8>,
    stop: Option<u8>,
    fraction_digits: u8,
) -> impl Fn(&[u8]) -> IResult<&[u8], Option<i32>> {
    move |i: &[u8]| {
        let (negative, i) = match i.first() {
            Some(b'-') => (true, &i[1..]),
            Some(b'+') => (false, &i[1..]),
            _ => (false, i),
        };

        if at_field_end(i) {
            return Ok((i, None));
        }

        let limit = max_chars.map_or(MAX_SCAN_LENGTH, usize::from);
        let mut fraction_left = fraction_digits;
        let mut point_found = false;
        let mut value: i32 = 0;
        let mut len = 0;

        for &c in i.iter().take(limit) {
            if Some(c) == stop {
                break;
            }

            if c == b'.' {
                point_found = true;
            } else {
                if !c.is_ascii_digit() {
                    break;
                }

                if point_found {
                    if fraction_left == 0 {
                        break;
                    }
                    fraction_left -= 1;
                }

                value = value.wrapping_mul(10).wrapping_add(i32::from(c - b'0'));
            }

            len += 1;
        }

        for _ in 0..fraction_left {
            value = value.wrapping_mul(10);
        }

        let mut i = &i[len..];
        if max_chars.is_none() && stop.is_none() {
            (i, _) = skip_field(i)?;
        }

        Ok((i, Some(if negative { value.wrapping_neg() } else { value })))
    }
}

/// Scans a hexadecimal field, case-insensitive.
///
/// At most `max_chars` digits are read, `None` reads the whole field. Scanning stops at
/// the first character that is not a hex digit. An empty field yields `None`.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::parsing::hex;
///
/// assert_eq!(hex(None)(b"a10C9f,4a"), Ok((&b",4a"[..], Some(0xA10C9F))));
/// assert_eq!(hex(Some(2))(b"21 FAULT"), Ok((&b" FAULT"[..], Some(0x21))));
/// assert_eq!(hex(None)(b",4a"), Ok((&b",4a"[..], None)));
/// ```
pub fn hex(max_chars: Option<u8>) -> impl Fn(&[u8]) -> IResult<&[u8], Option<u32>> {
    move |i: &[u8]| {
        if at_field_end(i) {
            return Ok((i, None));
        }

        let limit = max_chars.map_or(MAX_SCAN_LENGTH, usize::from);
        let (i, digits) = take_while_m_n(0, limit, |c: u8| c.is_ascii_hexdigit()).parse(i)?;
        let value = digits.iter().fold(0u32, |acc, &c| {
            (acc << 4) | char::from(c).to_digit(16).unwrap_or_default()
        });

        Ok((i, Some(value)))
    }
}

/// Scans a whole decimal field scaled by `10^fraction_digits` into the width `T`.
///
/// An empty field yields the sentinel of `T`.
pub fn number<T: NoValue>(fraction_digits: u8) -> impl Fn(&[u8]) -> IResult<&[u8], T> {
    move |i: &[u8]| {
        let (i, value) = fixed_point(None, None, fraction_digits)(i)?;
        Ok((i, T::from_field(value)))
    }
}

/// Scans exactly the next `count` characters of a field as an integer.
///
/// Used for packed fields such as `hhmmss` or `ddmmyy`.
pub fn digits<T: NoValue>(count: u8) -> impl Fn(&[u8]) -> IResult<&[u8], T> {
    move |i: &[u8]| {
        let (i, value) = fixed_point(Some(count), None, 0)(i)?;
        Ok((i, T::from_field(value)))
    }
}

/// Scans a whole hexadecimal field into the width `T`, keeping its bit pattern.
pub fn hex_number<T: NoValue>(i: &[u8]) -> IResult<&[u8], T> {
    let (i, value) = hex(None)(i)?;
    Ok((i, T::from_field(value.map(|value| value as i32))))
}

/// Extracts a `bits` wide two's-complement integer starting at bit `pos` of `data`
/// and sign-extends it.
///
/// `bits` must lie in `1..=31`.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::parsing::extract_signed;
///
/// assert_eq!(extract_signed(0x0A4, 0, 11), 0xA4);
/// assert_eq!(extract_signed(0x401, 0, 11), -1023);
/// assert_eq!(extract_signed(0xA8CBE1, 0, 24) as u32, 0xFFA8CBE1);
/// ```
pub const fn extract_signed(data: u32, pos: u32, bits: u32) -> i32 {
    let sign = 1u32 << (bits - 1);
    let mask = (1u32 << bits) - 1;

    (((data >> pos) & mask) ^ sign).wrapping_sub(sign) as i32
}

/// Ensures that the parser consumes all input.
///
/// Runs the provided parser and fails with `e` when any input remains.
///
/// # Arguments
///
/// * `f` - The parser to run
/// * `e` - Error kind to return if input is not fully consumed
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{IResult, parsing::consumed};
/// use nom::{Parser, bytes::complete::take, error::ErrorKind};
///
/// let mut parser = consumed(take(3u8), ErrorKind::Count);
/// let result: IResult<_, _> = parser.parse(&b"abc"[..]);
/// assert!(result.is_ok());
///
/// // This fails because not all input is consumed
/// let result: IResult<_, _> = parser.parse(&b"abcd"[..]);
/// assert!(result.is_err());
/// ```
pub fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    Consumed { f, e }
}

struct Consumed<F> {
    f: F,
    e: ErrorKind,
}

impl<I, F> Parser<I> for Consumed<F>
where
    I: Input,
    F: Parser<I>,
{
    type Output = <F as Parser<I>>::Output;
    type Error = <F as Parser<I>>::Error;

    fn process<OM: OutputMode>(&mut self, i: I) -> PResult<OM, I, Self::Output, Self::Error> {
        let (i, o) = self.f.process::<OM>(i)?;

        if i.input_len() != 0 {
            return Err(Err::Error(OM::Error::bind(|| {
                <F as Parser<I>>::Error::from_error_kind(i, self.e)
            })));
        }

        Ok((i, o))
    }
}
