// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end for the xsdtime converters.

mod cli;
mod cmd_date;
mod cmd_generate_completion;
mod config;
mod report;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_date::{CmdDate, CmdDateTime};
pub use crate::cmd_generate_completion::{CmdGenerateCompletion, Shell};
