// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::ops::Range;

use chumsky::Parser;
use chumsky::error::Rich;
use chumsky::extra;

use crate::grammar::{value_date, value_date_time};
use crate::value::{XsdDate, XsdDateTime};

/// Parse an `xsd:date` lexical value such as `2024-01-05`.
///
/// ## Errors
///
/// If the text is not a date in the lexical space, or the day does not
/// exist in the given month.
///
/// ## Examples
///
/// ```
/// # use xsdtime_xsd::{XsdDate, parse_date};
/// let date = parse_date("2024-01-05").unwrap();
/// assert_eq!(date, XsdDate { year: 2024, month: 1, day: 5 });
///
/// assert!(parse_date("2024-02-30").is_err());
/// ```
pub fn parse_date(src: &str) -> Result<XsdDate, LexicalError> {
    value_date::<'_, _, extra::Err<Rich<'_, char>>>()
        .parse(src)
        .into_result()
        .map_err(LexicalError::from_errors)
}

/// Parse an `xsd:dateTime` lexical value with a mandatory offset, such as
/// `2024-01-05T10:15:30+01:00` or `2024-01-05T10:15:30+01:00[Europe/Paris]`.
///
/// ## Errors
///
/// If the text is not a date-time in the lexical space, lacks an offset, or
/// carries an out-of-range field.
///
/// ## Examples
///
/// ```
/// # use xsdtime_xsd::{XsdOffset, parse_date_time};
/// let value = parse_date_time("2024-01-05T10:15:30Z").unwrap();
/// assert_eq!(value.offset, XsdOffset::Utc);
///
/// assert!(parse_date_time("2024-01-05T10:15:30").is_err());
/// ```
pub fn parse_date_time(src: &str) -> Result<XsdDateTime, LexicalError> {
    value_date_time::<'_, _, extra::Err<Rich<'_, char>>>()
        .parse(src)
        .into_result()
        .map_err(LexicalError::from_errors)
}

/// Error raised when text does not belong to a lexical space.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason} at {}..{}", .span.start, .span.end)]
pub struct LexicalError {
    span: Range<usize>,
    reason: String,
}

impl LexicalError {
    /// Byte range of the offending input.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Human readable description of what was found and what was expected,
    /// followed by the fragments the failure occurred in, e.g.
    /// `found '3' expected digit 0-2 in month`.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    fn from_errors(errs: Vec<Rich<'_, char>>) -> Self {
        // Without recovery strategies chumsky yields a single error
        match errs.into_iter().next() {
            Some(e) => {
                let mut reason = e.reason().to_string();
                for (label, _) in e.contexts() {
                    reason.push_str(" in ");
                    reason.push_str(&label.to_string());
                }
                Self {
                    span: e.span().into_range(),
                    reason,
                }
            }
            None => Self {
                span: 0..0,
                reason: "unexpected input".to_string(),
            },
        }
    }
}
