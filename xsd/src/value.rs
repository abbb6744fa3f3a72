// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Lexical values of the XSD `date` and `dateTime` types.

/// Date value in the XSD lexical space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XsdDate {
    /// Year component, astronomical numbering (year 0 is 1 BCE).
    pub year: i16,

    /// Month component, 1-12.
    pub month: i8,

    /// Day component, 1-31.
    pub day: i8,
}

impl XsdDate {
    /// Convert to `jiff::civil::Date`.
    ///
    /// # Errors
    ///
    /// If the fields do not denote a day that `jiff` can represent.
    #[cfg(feature = "jiff")]
    pub fn civil_date(self) -> Result<jiff::civil::Date, jiff::Error> {
        jiff::civil::Date::new(self.year, self.month, self.day)
    }
}

#[cfg(feature = "jiff")]
impl From<jiff::civil::Date> for XsdDate {
    fn from(value: jiff::civil::Date) -> Self {
        Self {
            year: value.year(),
            month: value.month(),
            day: value.day(),
        }
    }
}

/// Time of day in the XSD lexical space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XsdTime {
    /// Hour component, 0-23, or 24 for the end of the day.
    pub hour: u8,

    /// Minute component, 0-59.
    pub minute: u8,

    /// Second component, 0-59.
    pub second: u8,

    /// Fractional second in nanoseconds.
    pub nanosecond: u32,
}

impl XsdTime {
    /// Whether this is `24:00:00`, the first instant of the following day.
    #[must_use]
    pub const fn is_end_of_day(&self) -> bool {
        self.hour == 24
    }

    /// Convert to `jiff::civil::Time`.
    ///
    /// # Errors
    ///
    /// If the time is `24:00:00` or a field is out of range.
    #[cfg(feature = "jiff")]
    #[expect(clippy::cast_possible_wrap)]
    pub fn civil_time(self) -> Result<jiff::civil::Time, jiff::Error> {
        jiff::civil::Time::new(
            self.hour as i8,
            self.minute as i8,
            self.second as i8,
            self.nanosecond as i32,
        )
    }
}

#[cfg(feature = "jiff")]
impl From<jiff::civil::Time> for XsdTime {
    #[expect(clippy::cast_sign_loss)]
    fn from(value: jiff::civil::Time) -> Self {
        Self {
            hour: value.hour() as u8,
            minute: value.minute() as u8,
            second: value.second() as u8,
            nanosecond: value.subsec_nanosecond() as u32,
        }
    }
}

/// Time zone offset in the XSD lexical space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XsdOffset {
    /// UTC, written as `Z`.
    Utc,

    /// Numeric offset, written as `+hh:mm` or `-hh:mm`.
    Fixed {
        /// Whether the offset is east of UTC
        positive: bool,

        /// Hour, 0-25
        hour: u8,

        /// Minute, 0-59
        minute: u8,

        /// Second, 0-59, optional
        second: Option<u8>,
    },
}

impl XsdOffset {
    /// Total offset from UTC in seconds.
    #[must_use]
    pub fn seconds(self) -> i32 {
        match self {
            Self::Utc => 0,
            Self::Fixed {
                positive,
                hour,
                minute,
                second,
            } => {
                let total = i32::from(hour) * 3600
                    + i32::from(minute) * 60
                    + i32::from(second.unwrap_or(0));
                if positive { total } else { -total }
            }
        }
    }

    /// Convert to `jiff::tz::Offset`.
    ///
    /// # Errors
    ///
    /// If the offset is outside the range `jiff` supports.
    #[cfg(feature = "jiff")]
    pub fn offset(self) -> Result<jiff::tz::Offset, jiff::Error> {
        jiff::tz::Offset::from_seconds(self.seconds())
    }
}

#[cfg(feature = "jiff")]
impl From<jiff::tz::Offset> for XsdOffset {
    #[expect(clippy::cast_possible_truncation)]
    fn from(value: jiff::tz::Offset) -> Self {
        let seconds = value.seconds();
        if seconds == 0 {
            return Self::Utc;
        }

        let abs = seconds.unsigned_abs();
        Self::Fixed {
            positive: seconds > 0,
            hour: (abs / 3600) as u8,
            minute: (abs / 60 % 60) as u8,
            second: match abs % 60 {
                0 => None,
                s => Some(s as u8),
            },
        }
    }
}

/// Date-time value in the XSD lexical space, with a mandatory offset and an
/// optional bracketed time zone identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XsdDateTime {
    /// Date component.
    pub date: XsdDate,

    /// Time component.
    pub time: XsdTime,

    /// Offset from UTC.
    pub offset: XsdOffset,

    /// IANA time zone identifier, e.g. `Europe/Paris`.
    pub zone: Option<String>,
}

#[cfg(feature = "jiff")]
impl XsdDateTime {
    /// Civil date-time, with `24:00:00` rolled over to midnight of the next day.
    ///
    /// # Errors
    ///
    /// If the date or time cannot be represented by `jiff`.
    pub fn civil_date_time(&self) -> Result<jiff::civil::DateTime, jiff::Error> {
        let date = self.date.civil_date()?;
        if self.time.is_end_of_day() {
            return Ok(date.tomorrow()?.to_datetime(jiff::civil::Time::midnight()));
        }

        Ok(date.to_datetime(self.time.civil_time()?))
    }

    /// Resolve to a `jiff::Zoned`.
    ///
    /// The civil date-time and the offset fix the instant. Without a zone
    /// identifier the result lives in the fixed offset, otherwise the instant
    /// is re-expressed in the named zone.
    ///
    /// # Errors
    ///
    /// If a component is out of range or the zone identifier is unknown.
    pub fn to_zoned(&self) -> Result<jiff::Zoned, jiff::Error> {
        let offset = self.offset.offset()?;
        let zoned = self
            .civil_date_time()?
            .to_zoned(jiff::tz::TimeZone::fixed(offset))?;

        match &self.zone {
            Some(name) => Ok(zoned.with_time_zone(jiff::tz::TimeZone::get(name)?)),
            None => Ok(zoned),
        }
    }
}

#[cfg(feature = "jiff")]
impl From<&jiff::Zoned> for XsdDateTime {
    fn from(value: &jiff::Zoned) -> Self {
        let datetime = value.datetime();
        Self {
            date: datetime.date().into(),
            time: datetime.time().into(),
            offset: value.offset().into(),
            zone: value.time_zone().iana_name().map(str::to_owned),
        }
    }
}
