// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Converters between XML Schema `date` / `dateTime` text and `jiff` values,
//! for use by XML data-binding layers.
//!
//! ```
//! use xsdtime_core::{DateConverter, DateTimeConverter};
//!
//! let date = DateConverter.unmarshal("2024-01-05").unwrap();
//! assert_eq!(DateConverter.marshal(date), "2024-01-05");
//!
//! let converter = DateTimeConverter::default();
//! let zoned = converter.unmarshal("2024-01-05T10:15:30+01:00[Europe/Paris]").unwrap();
//! assert_eq!(converter.marshal(&zoned), "2024-01-05T10:15:30+01:00[Europe/Paris]");
//! ```

pub mod binding;
mod config;
mod converter;
mod date;
mod datetime;
mod error;

pub use crate::config::{APP_NAME, Config, ZoneFidelity};
pub use crate::converter::Converter;
pub use crate::date::DateConverter;
pub use crate::datetime::DateTimeConverter;
pub use crate::error::{DateParseError, DateTimeParseError};
