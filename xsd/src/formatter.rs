// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Canonical representations of XSD date and date-time values.
//!
//! Years are padded to four digits with a leading `-` for negative years,
//! fractional seconds drop trailing zeros, and a zero offset is written `Z`.

use std::fmt;

use crate::value::{XsdDate, XsdDateTime, XsdOffset, XsdTime};

/// Format a date value as `YYYY-MM-DD`.
impl fmt::Display for XsdDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-")?;
        }
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.unsigned_abs(),
            self.month,
            self.day
        )
    }
}

/// Format a time value as `hh:mm:ss[.fraction]`.
impl fmt::Display for XsdTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if self.nanosecond != 0 {
            let digits = format!("{:09}", self.nanosecond);
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }
        Ok(())
    }
}

/// Format an offset as `Z`, `+hh:mm` or `-hh:mm` (with optional seconds).
impl fmt::Display for XsdOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Utc => write!(f, "Z"),
            Self::Fixed { hour: 0, minute: 0, second: None | Some(0), .. } => write!(f, "Z"),
            Self::Fixed {
                positive,
                hour,
                minute,
                second,
            } => {
                let sign = if positive { "+" } else { "-" };
                write!(f, "{sign}{hour:02}:{minute:02}")?;
                match second {
                    Some(second) if second != 0 => write!(f, ":{second:02}"),
                    _ => Ok(()),
                }
            }
        }
    }
}

/// Format a date-time as `YYYY-MM-DDThh:mm:ss[.fraction]offset[[zone]]`.
impl fmt::Display for XsdDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}{}", self.date, self.time, self.offset)?;
        if let Some(zone) = &self.zone {
            write!(f, "[{zone}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn date(year: i16, month: i8, day: i8) -> XsdDate {
        XsdDate { year, month, day }
    }

    const fn time(hour: u8, minute: u8, second: u8, nanosecond: u32) -> XsdTime {
        XsdTime {
            hour,
            minute,
            second,
            nanosecond,
        }
    }

    #[test]
    fn formats_date() {
        #[rustfmt::skip]
        let cases = [
            (date(2024,  1,  5), "2024-01-05"),
            (date(1999, 12, 31), "1999-12-31"),
            (date(5,     1,  1), "0005-01-01"),
            (date(0,     1,  1), "0000-01-01"),
            (date(-44,   3, 15), "-0044-03-15"),
            (date(-9999, 1,  1), "-9999-01-01"),
        ];
        for (value, expected) in cases {
            assert_eq!(value.to_string(), expected);
        }
    }

    #[test]
    fn formats_time() {
        #[rustfmt::skip]
        let cases = [
            (time(10, 15, 30, 0),           "10:15:30"),
            (time( 0,  0,  0, 0),           "00:00:00"),
            (time(10, 15, 30, 500_000_000), "10:15:30.5"),
            (time(10, 15, 30, 120_000_000), "10:15:30.12"),
            (time(10, 15, 30, 123_456_789), "10:15:30.123456789"),
            (time(10, 15, 30, 1),           "10:15:30.000000001"),
        ];
        for (value, expected) in cases {
            assert_eq!(value.to_string(), expected);
        }
    }

    #[test]
    fn formats_offset() {
        #[rustfmt::skip]
        let cases = [
            (XsdOffset::Utc, "Z"),
            (XsdOffset::Fixed { positive: true,  hour: 0,  minute: 0,  second: None },     "Z"),
            (XsdOffset::Fixed { positive: false, hour: 0,  minute: 0,  second: None },     "Z"),
            (XsdOffset::Fixed { positive: true,  hour: 1,  minute: 0,  second: None },     "+01:00"),
            (XsdOffset::Fixed { positive: false, hour: 5,  minute: 30, second: None },     "-05:30"),
            (XsdOffset::Fixed { positive: true,  hour: 14, minute: 0,  second: Some(0) },  "+14:00"),
            (XsdOffset::Fixed { positive: true,  hour: 5,  minute: 30, second: Some(15) }, "+05:30:15"),
        ];
        for (value, expected) in cases {
            assert_eq!(value.to_string(), expected);
        }
    }

    #[test]
    fn formats_date_time() {
        let mut value = XsdDateTime {
            date: date(2024, 1, 5),
            time: time(10, 15, 30, 0),
            offset: XsdOffset::Fixed {
                positive: true,
                hour: 1,
                minute: 0,
                second: None,
            },
            zone: None,
        };
        assert_eq!(value.to_string(), "2024-01-05T10:15:30+01:00");

        value.zone = Some("Europe/Paris".to_string());
        assert_eq!(value.to_string(), "2024-01-05T10:15:30+01:00[Europe/Paris]");
    }
}
