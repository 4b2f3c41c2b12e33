//! Compound field scanners built on the primitives of [`parsing`](crate::parsing).

use nom::{
    Parser,
    bytes::complete::take_while_m_n,
    character::complete::char,
    error::{ErrorKind, ParseError},
};

use crate::{
    Error, IResult,
    nmea_content::{Coordinate, Date, Magnetic, NoValue, Text, Time},
    parsing::{FIELD_DELIMITER, digits, fixed_point, number},
};

/// Reads a single character field, `' '` when the field is empty.
///
/// The following field delimiter is not consumed.
pub fn flag(i: &[u8]) -> IResult<&[u8], char> {
    match i.split_first() {
        Some((&c, rest)) if c != FIELD_DELIMITER => Ok((rest, char::from(c))),
        _ => Ok((i, ' ')),
    }
}

/// Scans a number with `fraction_digits` decimal places followed by its mandatory unit letter.
///
/// ```rust
/// use nmea0183_decoder::nmea_content::parse::with_unit;
///
/// assert_eq!(with_unit::<i16>(2, 'C')(b"26.8,C"), Ok((&b""[..], 2680)));
/// assert!(with_unit::<i16>(2, 'C')(b"26.8,F").is_err());
/// ```
pub fn with_unit<T: NoValue>(
    fraction_digits: u8,
    unit: char,
) -> impl Fn(&[u8]) -> IResult<&[u8], T> {
    move |i: &[u8]| {
        let (i, value) = number(fraction_digits).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, _) = char(unit).parse(i)?;

        Ok((i, value))
    }
}

/// Scans a `ddmm.mmmm,H,` or `dddmm.mmmm,H,` position, including its trailing delimiter.
///
/// The minutes fraction is kept with 7 digits. A position without fraction reads as
/// whole minutes.
pub fn coordinate(i: &[u8]) -> IResult<&[u8], Coordinate> {
    let (i, (degree, minute)) = if i.first() == Some(&FIELD_DELIMITER) {
        (i, (u8::NO_VALUE, u32::NO_VALUE))
    } else {
        let (i, whole) = fixed_point(None, Some(b'.'), 0).parse(i)?;
        let (i, fraction) = fixed_point(None, None, 7).parse(i)?;

        match whole {
            Some(whole) => {
                let minute = (whole % 100) as u32 * 10_000_000;
                let fraction = fraction.unwrap_or_default() as u32;
                (i, ((whole / 100) as u8, minute.wrapping_add(fraction)))
            }
            None => (i, (u8::NO_VALUE, u32::NO_VALUE)),
        }
    };

    let (i, _) = char(',').parse(i)?;
    let (i, direction) = flag(i)?;
    let (i, _) = char(',').parse(i)?;

    Ok((
        i,
        Coordinate {
            direction,
            degree,
            minute,
        },
    ))
}

/// Scans a `hhmmss.sss,` time, including its trailing delimiter.
///
/// Milliseconds are `0xFFFF` when the time has no fraction.
pub fn time(i: &[u8]) -> IResult<&[u8], Time> {
    let (i, (hour, minute, second)) = (digits(2), digits(2), digits(2)).parse(i)?;
    let (i, millisecond) = match i.first() {
        Some(b'.') => number(3).parse(i)?,
        _ => (i, u16::NO_VALUE),
    };
    let (i, _) = char(',').parse(i)?;

    Ok((
        i,
        Time {
            hour,
            minute,
            second,
            millisecond,
        },
    ))
}

/// Scans a `ddmmyy,` date, including its trailing delimiter. The year stays two digits.
pub fn date(i: &[u8]) -> IResult<&[u8], Date> {
    let (i, (day, month, year)) = (digits(2), digits(2), digits(2)).parse(i)?;
    let (i, _) = char(',').parse(i)?;

    Ok((i, Date { day, month, year }))
}

/// Scans a `x.x,E` magnetic value, the trailing delimiter is not consumed.
pub fn magnetic(i: &[u8]) -> IResult<&[u8], Magnetic> {
    let (i, value) = number(2).parse(i)?;
    let (i, _) = char(',').parse(i)?;
    let (i, direction) = flag(i)?;

    Ok((i, Magnetic { value, direction }))
}

fn bounded_text<const N: usize>(
    i: &[u8],
    stop: impl Fn(u8) -> bool,
) -> IResult<&[u8], Text<N>> {
    let (i, bytes) = take_while_m_n(0, N, |c| !stop(c)).parse(i)?;
    let text = heapless::Vec::from_slice(bytes)
        .map_err(|_| nom::Err::Error(Error::from_error_kind(i, ErrorKind::TooLarge)))?;

    Ok((i, Text(text)))
}

/// Reads at most `N` characters up to the next field delimiter.
pub fn field_text<const N: usize>(i: &[u8]) -> IResult<&[u8], Text<N>> {
    bounded_text(i, |c| c == FIELD_DELIMITER)
}

/// Reads at most `N` characters up to the end of the sentence, delimiters included.
pub fn trailing_text<const N: usize>(i: &[u8]) -> IResult<&[u8], Text<N>> {
    bounded_text(i, |_| false)
}
