// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use xsdtime_core::{APP_NAME, Config as CoreConfig};

const XSDTIME_CONFIG_ENV: &str = "XSDTIME_CONFIG";

/// Load the configuration from `--config`, then `XSDTIME_CONFIG`, then the
/// user configuration directory. A missing default file yields the defaults.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(XSDTIME_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            return Ok(CoreConfig::default());
        }
        config
    };

    let raw = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()?;

    match raw.core {
        Some(core) => Ok(core),
        None => {
            tracing::warn!(path = %path.display(), "config has no [core] table, using defaults");
            Ok(CoreConfig::default())
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    core: Option<CoreConfig>,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::OnceLock;
    use tempfile::TempDir;
    use tokio::sync::Mutex;
    use xsdtime_core::ZoneFidelity;

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    fn write_config(dir: &TempDir, name: &str, fidelity: &str) -> PathBuf {
        let path = dir.path().join(name);
        let content = format!(
            r#"
[core]
zone_fidelity = "{fidelity}"
"#
        );
        fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn cli_flag_overrides_env_var() {
        let temp_dir = TempDir::new().unwrap();
        let cli_path = write_config(&temp_dir, "config.toml", "offset-only");
        let env_path = write_config(&temp_dir, "env_config.toml", "zone-id");

        let _guard = env_lock().lock().await;
        unsafe {
            std::env::set_var(XSDTIME_CONFIG_ENV, env_path.to_str().unwrap());
        }

        let config = parse_config(Some(cli_path)).await.unwrap();
        assert_eq!(config.zone_fidelity, ZoneFidelity::OffsetOnly);

        unsafe {
            std::env::remove_var(XSDTIME_CONFIG_ENV);
        }
    }

    #[tokio::test]
    async fn env_var_overrides_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let env_path = write_config(&temp_dir, "env_config.toml", "offset-only");

        let _guard = env_lock().lock().await;
        unsafe {
            std::env::set_var(XSDTIME_CONFIG_ENV, env_path.to_str().unwrap());
        }

        let config = parse_config(None).await.unwrap();
        assert_eq!(config.zone_fidelity, ZoneFidelity::OffsetOnly);

        unsafe {
            std::env::remove_var(XSDTIME_CONFIG_ENV);
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn uses_default_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join(APP_NAME)).unwrap();
        write_config(&temp_dir, "xsdtime/config.toml", "offset-only");

        let _guard = env_lock().lock().await;
        unsafe {
            std::env::remove_var(XSDTIME_CONFIG_ENV);
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path().to_str().unwrap());
        }

        let config = parse_config(None).await.unwrap();
        assert_eq!(config.zone_fidelity, ZoneFidelity::OffsetOnly);

        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn falls_back_to_default_when_no_config_found() {
        let temp_dir = TempDir::new().unwrap();

        let _guard = env_lock().lock().await;
        unsafe {
            std::env::remove_var(XSDTIME_CONFIG_ENV);
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path().to_str().unwrap());
        }

        let config = parse_config(None).await.unwrap();
        assert_eq!(config, CoreConfig::default());

        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[tokio::test]
    async fn returns_error_when_explicit_config_is_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");

        let result = parse_config(Some(path)).await;
        let error_msg = result.unwrap_err().to_string();
        assert!(error_msg.contains("Failed to read config file"), "{error_msg}");
    }

    #[tokio::test]
    async fn rejects_invalid_fidelity() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "config.toml", "zone-name");
        assert!(parse_config(Some(path)).await.is_err());
    }

    #[test]
    fn parses_config_without_core_table() {
        let raw: ConfigRaw = "".parse().unwrap();
        assert!(raw.core.is_none());

        let raw: ConfigRaw = "[core]\n".parse().unwrap();
        assert_eq!(raw.core, Some(CoreConfig::default()));
    }
}
