// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parse and format the XML Schema `date` and `dateTime` lexical spaces.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]

mod formatter;
mod grammar;
mod parser;
mod value;

pub use crate::parser::{LexicalError, parse_date, parse_date_time};
pub use crate::value::{XsdDate, XsdDateTime, XsdOffset, XsdTime};
