// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Zoned;
use xsdtime_xsd::{XsdDateTime, parse_date_time};

use crate::{Converter, DateTimeParseError, ZoneFidelity};

/// Converter for `xsd:dateTime` values that carry an offset, e.g.
/// `2024-01-05T10:15:30Z` or `2024-01-05T10:15:30+01:00[Europe/Paris]`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeConverter {
    fidelity: ZoneFidelity,
}

impl DateTimeConverter {
    /// Create a converter that marshals zone identifiers according to
    /// `fidelity`.
    #[must_use]
    pub const fn new(fidelity: ZoneFidelity) -> Self {
        Self { fidelity }
    }

    /// How zone identifiers are marshalled.
    #[must_use]
    pub const fn fidelity(&self) -> ZoneFidelity {
        self.fidelity
    }

    /// Parse a date-time with offset into a zoned value.
    ///
    /// The date, time and offset fix the instant. A bracketed zone identifier
    /// re-expresses that instant in the named zone, so an offset that
    /// disagrees with the zone keeps the instant rather than the wall clock.
    ///
    /// # Errors
    ///
    /// If the date, time or offset is missing or malformed, a field is out of
    /// range, or the zone identifier is unknown.
    #[tracing::instrument(level = "trace")]
    pub fn unmarshal(&self, text: &str) -> Result<Zoned, DateTimeParseError> {
        let lexical =
            parse_date_time(text).map_err(|e| DateTimeParseError::lexical(text, &e))?;
        let zoned = lexical
            .to_zoned()
            .map_err(|e| DateTimeParseError::resolve(text, &e))?;

        if lexical.zone.is_some() && zoned.offset().seconds() != lexical.offset.seconds() {
            tracing::debug!(
                text,
                offset = %zoned.offset(),
                "offset disagrees with the zone, keeping the instant"
            );
        }
        Ok(zoned)
    }

    /// Render a zoned value as `YYYY-MM-DDThh:mm:ss[.fraction]` followed by
    /// `Z` or `±hh:mm`, then `[zone]` when the value carries an IANA zone
    /// other than UTC and zone identifiers are kept.
    #[must_use]
    pub fn marshal(&self, value: &Zoned) -> String {
        let mut lexical = XsdDateTime::from(value);
        let drop_zone = match self.fidelity {
            ZoneFidelity::OffsetOnly => true,
            ZoneFidelity::ZoneId => lexical.zone.as_deref() == Some("UTC"),
        };
        if drop_zone {
            lexical.zone = None;
        }
        lexical.to_string()
    }
}

impl Converter for DateTimeConverter {
    type Value = Zoned;
    type Error = DateTimeParseError;

    fn unmarshal(&self, text: &str) -> Result<Zoned, DateTimeParseError> {
        DateTimeConverter::unmarshal(self, text)
    }

    fn marshal(&self, value: &Zoned) -> String {
        DateTimeConverter::marshal(self, value)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::tz::{self, TimeZone};

    use super::*;

    #[test]
    fn unmarshals_utc() {
        let zoned = DateTimeConverter::default()
            .unmarshal("2024-01-05T10:15:30Z")
            .unwrap();
        assert_eq!(zoned.datetime(), date(2024, 1, 5).at(10, 15, 30, 0));
        assert_eq!(zoned.offset(), tz::Offset::UTC);
    }

    #[test]
    fn unmarshals_fixed_offset() {
        let zoned = DateTimeConverter::default()
            .unmarshal("2024-01-05T10:15:30.25-05:30")
            .unwrap();
        assert_eq!(zoned.datetime(), date(2024, 1, 5).at(10, 15, 30, 250_000_000));
        assert_eq!(zoned.offset().seconds(), -(5 * 3600 + 30 * 60));
    }

    #[test]
    fn unmarshals_named_zone() {
        let zoned = DateTimeConverter::default()
            .unmarshal("2024-07-05T10:15:30+02:00[Europe/Paris]")
            .unwrap();
        assert_eq!(zoned.datetime(), date(2024, 7, 5).at(10, 15, 30, 0));
        assert_eq!(zoned.offset(), tz::offset(2));
        assert_eq!(zoned.time_zone().iana_name(), Some("Europe/Paris"));
    }

    #[test]
    fn keeps_instant_when_offset_disagrees_with_zone() {
        let zoned = DateTimeConverter::default()
            .unmarshal("2024-01-05T10:15:30+05:00[Europe/Paris]")
            .unwrap();
        assert_eq!(zoned.datetime(), date(2024, 1, 5).at(6, 15, 30, 0));
        assert_eq!(zoned.offset(), tz::offset(1));
    }

    #[test]
    fn unmarshals_end_of_day() {
        let converter = DateTimeConverter::default();
        let zoned = converter.unmarshal("2024-02-29T24:00:00Z").unwrap();
        assert_eq!(zoned.datetime(), date(2024, 3, 1).at(0, 0, 0, 0));
        assert_eq!(converter.marshal(&zoned), "2024-03-01T00:00:00Z");
    }

    #[test]
    fn rejects_invalid_date_time() {
        let converter = DateTimeConverter::default();
        let lexical = [
            "2024-01-05",
            "2024-01-05T10:15:30",
            "2024-01-05T25:00:00Z",
            "2024-02-30T10:15:30Z",
            "2024-01-05T10:15:30+26:00",
            "not-a-date",
        ];
        for text in lexical {
            let err = converter.unmarshal(text).unwrap_err();
            assert!(
                matches!(err, DateTimeParseError::Lexical { .. }),
                "Expected lexical error for {text}, got {err:?}"
            );
            assert_eq!(err.input(), text);
        }

        let err = converter
            .unmarshal("2024-01-05T10:15:30Z[Mars/Olympus_Mons]")
            .unwrap_err();
        assert!(matches!(err, DateTimeParseError::Resolve { .. }));
        assert_eq!(err.span(), 0..err.input().len());
    }

    #[test]
    fn marshals_by_fidelity() {
        let zoned = date(2024, 1, 5)
            .at(10, 15, 30, 0)
            .in_tz("Europe/Paris")
            .unwrap();

        let converter = DateTimeConverter::new(ZoneFidelity::ZoneId);
        assert_eq!(
            converter.marshal(&zoned),
            "2024-01-05T10:15:30+01:00[Europe/Paris]"
        );

        let converter = DateTimeConverter::new(ZoneFidelity::OffsetOnly);
        assert_eq!(converter.marshal(&zoned), "2024-01-05T10:15:30+01:00");
    }

    #[test]
    fn marshals_utc_as_zulu() {
        let converter = DateTimeConverter::default();
        let zoned = date(2024, 1, 5).at(10, 15, 30, 0).to_zoned(TimeZone::UTC).unwrap();
        assert_eq!(converter.marshal(&zoned), "2024-01-05T10:15:30Z");

        let zoned = date(2024, 1, 5)
            .at(10, 15, 30, 0)
            .to_zoned(TimeZone::fixed(tz::Offset::UTC))
            .unwrap();
        assert_eq!(converter.marshal(&zoned), "2024-01-05T10:15:30Z");
    }

    #[test]
    fn marshals_fraction_without_trailing_zeros() {
        let converter = DateTimeConverter::default();
        let zoned = date(2024, 1, 5)
            .at(10, 15, 30, 120_000_000)
            .to_zoned(TimeZone::fixed(tz::offset(-3)))
            .unwrap();
        assert_eq!(converter.marshal(&zoned), "2024-01-05T10:15:30.12-03:00");
    }
}
