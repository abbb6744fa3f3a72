// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;
use xsdtime_xsd::{XsdDate, parse_date};

use crate::{Converter, DateParseError};

/// Converter for `xsd:date`, e.g. `2024-01-05`.
///
/// Years are written with at least four digits using astronomical numbering,
/// so year 5 is `0005` and 44 BCE is `-0043`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DateConverter;

impl DateConverter {
    /// Parse `YYYY-MM-DD` into a calendar date.
    ///
    /// # Errors
    ///
    /// If the text is malformed or does not denote an existing day.
    #[tracing::instrument(level = "trace")]
    pub fn unmarshal(self, text: &str) -> Result<Date, DateParseError> {
        let lexical = parse_date(text).map_err(|e| DateParseError::lexical(text, &e))?;
        lexical
            .civil_date()
            .map_err(|e| DateParseError::resolve(text, &e))
    }

    /// Render a calendar date as `YYYY-MM-DD`.
    #[must_use]
    pub fn marshal(self, value: Date) -> String {
        XsdDate::from(value).to_string()
    }
}

impl Converter for DateConverter {
    type Value = Date;
    type Error = DateParseError;

    fn unmarshal(&self, text: &str) -> Result<Date, DateParseError> {
        DateConverter::unmarshal(*self, text)
    }

    fn marshal(&self, value: &Date) -> String {
        DateConverter::marshal(*self, *value)
    }
}
