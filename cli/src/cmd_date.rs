// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, arg, value_parser};
use xsdtime_core::{Config, DateConverter, ZoneFidelity};

use crate::report::write_report;

/// Normalize `xsd:date` values.
#[derive(Debug, Clone)]
pub struct CmdDate {
    /// The values to normalize
    pub values: Vec<String>,
}

impl CmdDate {
    /// Subcommand name
    pub const NAME: &str = "date";

    /// Build the subcommand
    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("d")
            .about("Parse xsd:date values and print their canonical form")
            .arg(arg!(values: <VALUE>... "Dates such as 2024-01-05"))
    }

    /// Read the subcommand arguments
    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            values: get_values(matches),
        }
    }

    /// Print the canonical form of each value to `out`, and a report for each
    /// invalid value to `err`.
    pub fn run(
        &self,
        out: &mut impl io::Write,
        err: &mut impl io::Write,
    ) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "normalizing xsd:date values...");
        let converter = DateConverter;
        let mut failed = 0;
        for value in &self.values {
            match converter.unmarshal(value) {
                Ok(date) => writeln!(out, "{}", converter.marshal(date))?,
                Err(e) => {
                    failed += 1;
                    write_report(err, value, e.span(), &e.to_string(), e.reason())?;
                }
            }
        }
        check_failed(failed, self.values.len())
    }
}

/// Normalize `xsd:dateTime` values.
#[derive(Debug, Clone)]
pub struct CmdDateTime {
    /// The values to normalize
    pub values: Vec<String>,

    /// Overrides the configured zone fidelity
    pub fidelity: Option<ZoneFidelity>,
}

impl CmdDateTime {
    /// Subcommand name
    pub const NAME: &str = "datetime";

    /// Build the subcommand
    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("dt")
            .about("Parse xsd:dateTime values and print their canonical form")
            .arg(
                arg!(-f --fidelity <FIDELITY> "Whether to keep zone identifiers")
                    .required(false)
                    .value_parser(value_parser!(ZoneFidelity)),
            )
            .arg(arg!(values: <VALUE>... "Date-times such as 2024-01-05T10:15:30+01:00"))
    }

    /// Read the subcommand arguments
    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            values: get_values(matches),
            fidelity: matches.get_one("fidelity").copied(),
        }
    }

    /// Print the canonical form of each value to `out`, and a report for each
    /// invalid value to `err`.
    pub fn run(
        &self,
        config: &Config,
        out: &mut impl io::Write,
        err: &mut impl io::Write,
    ) -> Result<(), Box<dyn Error>> {
        let config = Config {
            zone_fidelity: self.fidelity.unwrap_or(config.zone_fidelity),
        };
        tracing::debug!(?self, ?config, "normalizing xsd:dateTime values...");

        let converter = config.date_time_converter();
        let mut failed = 0;
        for value in &self.values {
            match converter.unmarshal(value) {
                Ok(zoned) => writeln!(out, "{}", converter.marshal(&zoned))?,
                Err(e) => {
                    failed += 1;
                    write_report(err, value, e.span(), &e.to_string(), e.reason())?;
                }
            }
        }
        check_failed(failed, self.values.len())
    }
}

fn get_values(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("values")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn check_failed(failed: usize, total: usize) -> Result<(), Box<dyn Error>> {
    match failed {
        0 => Ok(()),
        _ => Err(format!("{failed} of {total} values are invalid").into()),
    }
}
