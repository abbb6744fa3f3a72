// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Serde adapters for data-binding models, to be used with
//! `#[serde(with = "...")]`.
//!
//! ```
//! use jiff::{Zoned, civil::Date};
//!
//! #[derive(serde::Serialize, serde::Deserialize)]
//! struct Invoice {
//!     #[serde(with = "xsdtime_core::binding::date")]
//!     issued: Date,
//!     #[serde(with = "xsdtime_core::binding::date_time")]
//!     sent: Zoned,
//! }
//! ```

/// `xsd:date` as `YYYY-MM-DD`.
pub mod date {
    use jiff::civil::Date;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::DateConverter;

    /// Serialize a date with [`DateConverter::marshal`].
    ///
    /// # Errors
    ///
    /// Only errors raised by the serializer itself.
    pub fn serialize<S>(value: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&DateConverter.marshal(*value))
    }

    /// Deserialize a date with [`DateConverter::unmarshal`].
    ///
    /// # Errors
    ///
    /// If the value is not a string or not a valid `xsd:date`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateConverter
            .unmarshal(&s)
            .map_err(serde::de::Error::custom)
    }
}

/// `xsd:dateTime` keeping zone identifiers, as with [`ZoneFidelity::ZoneId`].
///
/// [`ZoneFidelity::ZoneId`]: crate::ZoneFidelity::ZoneId
pub mod date_time {
    use jiff::Zoned;
    use serde::{Deserializer, Serializer};

    use crate::{DateTimeConverter, ZoneFidelity};

    const CONVERTER: DateTimeConverter = DateTimeConverter::new(ZoneFidelity::ZoneId);

    /// Serialize a zoned value with [`DateTimeConverter::marshal`].
    ///
    /// # Errors
    ///
    /// Only errors raised by the serializer itself.
    pub fn serialize<S>(value: &Zoned, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        super::serialize_date_time(CONVERTER, value, serializer)
    }

    /// Deserialize a zoned value with [`DateTimeConverter::unmarshal`].
    ///
    /// # Errors
    ///
    /// If the value is not a string or not a valid `xsd:dateTime`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Zoned, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::deserialize_date_time(CONVERTER, deserializer)
    }
}

/// `xsd:dateTime` with the numeric offset only, as with
/// [`ZoneFidelity::OffsetOnly`].
///
/// [`ZoneFidelity::OffsetOnly`]: crate::ZoneFidelity::OffsetOnly
pub mod date_time_offset_only {
    use jiff::Zoned;
    use serde::{Deserializer, Serializer};

    use crate::{DateTimeConverter, ZoneFidelity};

    const CONVERTER: DateTimeConverter = DateTimeConverter::new(ZoneFidelity::OffsetOnly);

    /// Serialize a zoned value with [`DateTimeConverter::marshal`], dropping
    /// the zone identifier.
    ///
    /// # Errors
    ///
    /// Only errors raised by the serializer itself.
    pub fn serialize<S>(value: &Zoned, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        super::serialize_date_time(CONVERTER, value, serializer)
    }

    /// Deserialize a zoned value with [`DateTimeConverter::unmarshal`].
    ///
    /// # Errors
    ///
    /// If the value is not a string or not a valid `xsd:dateTime`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Zoned, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::deserialize_date_time(CONVERTER, deserializer)
    }
}

fn serialize_date_time<S>(
    converter: crate::DateTimeConverter,
    value: &jiff::Zoned,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&converter.marshal(value))
}

fn deserialize_date_time<'de, D>(
    converter: crate::DateTimeConverter,
    deserializer: D,
) -> Result<jiff::Zoned, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = <String as serde::Deserialize>::deserialize(deserializer)?;
    converter.unmarshal(&s).map_err(serde::de::Error::custom)
}
