// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::ops::Range;

use xsdtime_xsd::LexicalError;

/// Error returned when text is not a valid `xsd:date`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid xsd:date '{input}': {reason}")]
pub struct DateParseError {
    input: String,
    span: Range<usize>,
    reason: String,
}

impl DateParseError {
    pub(crate) fn lexical(input: &str, err: &LexicalError) -> Self {
        Self {
            input: input.to_owned(),
            span: err.span(),
            reason: err.reason().to_owned(),
        }
    }

    pub(crate) fn resolve(input: &str, err: &jiff::Error) -> Self {
        Self {
            input: input.to_owned(),
            span: 0..input.len(),
            reason: err.to_string(),
        }
    }

    /// The rejected text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Byte range of `input` the failure points at.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Why the text was rejected.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Error returned when text is not a valid `xsd:dateTime`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateTimeParseError {
    /// The text is not in the lexical space, e.g. a component is missing or
    /// out of range.
    #[error("Invalid xsd:dateTime '{input}': {reason}")]
    Lexical {
        /// The rejected text
        input: String,
        /// Byte range of the failure
        span: Range<usize>,
        /// What was found and expected
        reason: String,
    },

    /// The text is well formed but does not denote a representable instant,
    /// e.g. the zone identifier is unknown.
    #[error("Cannot resolve xsd:dateTime '{input}': {reason}")]
    Resolve {
        /// The rejected text
        input: String,
        /// Why resolution failed
        reason: String,
    },
}

impl DateTimeParseError {
    pub(crate) fn lexical(input: &str, err: &LexicalError) -> Self {
        Self::Lexical {
            input: input.to_owned(),
            span: err.span(),
            reason: err.reason().to_owned(),
        }
    }

    pub(crate) fn resolve(input: &str, err: &jiff::Error) -> Self {
        Self::Resolve {
            input: input.to_owned(),
            reason: err.to_string(),
        }
    }

    /// The rejected text.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::Lexical { input, .. } | Self::Resolve { input, .. } => input,
        }
    }

    /// Byte range of `input` the failure points at. Resolution failures
    /// cover the whole input.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::Lexical { span, .. } => span.clone(),
            Self::Resolve { input, .. } => 0..input.len(),
        }
    }

    /// Why the text was rejected.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::Lexical { reason, .. } | Self::Resolve { reason, .. } => reason,
        }
    }
}
