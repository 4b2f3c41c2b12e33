use nom::{Parser, character::complete::char};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    IResult,
    nmea_content::{Date, NoValue, Parsable, Time, parse::time},
    parsing::{fixed_point, number},
};

/// ZDA - Time & Date - UTC, day, month, year and local time zone
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///         1         2  3  4    5  6
///         |         |  |  |    |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
///
/// The local zone minutes carry the sign of the local zone hours, `-00,30` is half an
/// hour behind UTC.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct ZDA {
    /// Time in UTC
    pub time: Time,
    /// Date in UTC, with a four digit year
    pub date: Date,
    /// Local zone hours, -13 to 13
    pub local_zone_hours: i8,
    /// Local zone minutes, -59 to 59
    pub local_zone_minutes: i8,
}

#[cfg(feature = "time")]
impl ZDA {
    /// Combines time, date and local zone, `None` when any of them is empty or invalid.
    pub fn to_offset_date_time(&self) -> Option<time::OffsetDateTime> {
        let time_of_day = self.time.to_time()?;
        let date = self.date.to_date()?;
        let offset = time::UtcOffset::from_hms(
            self.local_zone_hours.value()?,
            self.local_zone_minutes.value()?,
            0,
        )
        .ok()?;

        Some(time::PrimitiveDateTime::new(date, time_of_day).assume_offset(offset))
    }
}

impl Parsable for ZDA {
    fn parser(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, time) = time(i)?;
        let (i, day) = number(0).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, month) = number(0).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, year) = number(0).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let behind_utc = i.first() == Some(&b'-');
        let (i, local_zone_hours) = number(0).parse(i)?;
        let (i, _) = char(',').parse(i)?;
        let (i, minutes) = fixed_point(None, None, 0).parse(i)?;
        let minutes = minutes.map(|m| if behind_utc { -m.abs() } else { m });

        Ok((
            i,
            ZDA {
                time,
                date: Date { day, month, year },
                local_zone_hours,
                local_zone_minutes: i8::from_field(minutes),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zda_parsing() {
        let cases: [(&[u8], i8, i8); 4] = [
            (b"160012.71,11,03,2004,3,00", 3, 0),
            (b"160012.71,11,03,2004,-10,00", -10, 0),
            (b"160012.71,11,03,2004,-00,30", 0, -30),
            (b"160012.71,11,03,2004,05,45", 5, 45),
        ];

        for (input, hours, minutes) in cases {
            let result = ZDA::parser(input);
            assert!(result.is_ok(), "Failed: {input:?}\n\t{result:?}");

            let (rest, zda) = result.unwrap();
            assert!(rest.is_empty());
            assert_eq!(
                zda.time,
                Time {
                    hour: 16,
                    minute: 0,
                    second: 12,
                    millisecond: 710
                }
            );
            assert_eq!(
                zda.date,
                Date {
                    day: 11,
                    month: 3,
                    year: 2004
                }
            );
            assert_eq!(zda.local_zone_hours, hours, "Failed: {input:?}");
            assert_eq!(zda.local_zone_minutes, minutes, "Failed: {input:?}");
        }
    }

    #[test]
    fn test_zda_empty_zone() {
        let (_, zda) = ZDA::parser(b"000000,01,01,2000,,").unwrap();
        assert_eq!(zda.local_zone_hours, -1);
        assert_eq!(zda.local_zone_minutes, -1);
        assert!(zda.local_zone_hours.value().is_none());
    }

    #[cfg(feature = "time")]
    #[test]
    fn test_zda_offset_date_time() {
        let (_, zda) = ZDA::parser(b"160012.71,11,03,2004,-00,30").unwrap();
        let datetime = zda.to_offset_date_time().unwrap();
        assert_eq!(datetime.offset().whole_minutes(), -30);
        assert_eq!(datetime.year(), 2004);
    }
}
