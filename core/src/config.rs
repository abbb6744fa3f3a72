// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::DateTimeConverter;

/// The name of the xsdtime application.
pub const APP_NAME: &str = "xsdtime";

/// Configuration for the converters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// How named time zones survive marshalling.
    #[serde(default)]
    pub zone_fidelity: ZoneFidelity,
}

impl Config {
    /// Build the date-time converter described by this configuration.
    #[must_use]
    pub const fn date_time_converter(&self) -> DateTimeConverter {
        DateTimeConverter::new(self.zone_fidelity)
    }
}

/// Whether a marshalled date-time keeps its IANA zone identifier.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ZoneFidelity {
    /// Append the zone identifier, e.g. `2024-01-05T10:15:30+01:00[Europe/Paris]`.
    #[default]
    ZoneId,

    /// Only write the numeric offset, e.g. `2024-01-05T10:15:30+01:00`.
    OffsetOnly,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_config() {
        let config: Config = toml::from_str(r#"zone_fidelity = "offset-only""#).unwrap();
        assert_eq!(config.zone_fidelity, ZoneFidelity::OffsetOnly);
        assert_eq!(
            config.date_time_converter().fidelity(),
            ZoneFidelity::OffsetOnly
        );
    }

    #[test]
    fn test_deserialize_default_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.zone_fidelity, ZoneFidelity::ZoneId);
    }

    #[test]
    fn test_reject_unknown_fidelity() {
        assert!(toml::from_str::<Config>(r#"zone_fidelity = "zone-name""#).is_err());
    }

    #[test]
    fn test_zone_fidelity_strings() {
        assert_eq!(ZoneFidelity::ZoneId.to_string(), "zone-id");
        assert_eq!(ZoneFidelity::OffsetOnly.to_string(), "offset-only");
        assert_eq!(
            "offset-only".parse::<ZoneFidelity>().unwrap(),
            ZoneFidelity::OffsetOnly
        );
        assert!("zone".parse::<ZoneFidelity>().is_err());
    }
}
