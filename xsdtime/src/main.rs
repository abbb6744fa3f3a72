// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! xsdtime - normalize XML Schema date and dateTime values

use std::process::ExitCode;

use xsdtime_cli::run;

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}
