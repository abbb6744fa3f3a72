// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

/// Conversion between the text of an XML attribute or element and a typed
/// value, as invoked by a data-binding layer.
pub trait Converter {
    /// The in-memory value.
    type Value;

    /// The error raised by [`Converter::unmarshal`].
    type Error: Error + Send + Sync + 'static;

    /// Parse text into a value.
    ///
    /// # Errors
    ///
    /// If the text is not in the lexical space of the type.
    fn unmarshal(&self, text: &str) -> Result<Self::Value, Self::Error>;

    /// Render a value as text. Never fails.
    fn marshal(&self, value: &Self::Value) -> String;
}
