//! Configuration for cmstat.
//!
//! TOML profiles naming one modem each, environment overrides, and
//! translation to `cmstat_core::ModemConfig`. The CLI layers its own flag
//! overrides on top.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use cmstat_core::{DEFAULT_HOST, ModemConfig};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{name}' not found")]
    ProfileNotFound { name: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named modem profiles.
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_timeout() -> u64 {
    10
}

/// A named modem.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// Host, host:port, or base URL of the modem's web interface.
    #[serde(default = "default_host")]
    pub host: String,

    /// Override the default timeout (seconds).
    pub timeout: Option<u64>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            host: default_host(),
            timeout: None,
        }
    }
}

fn default_host() -> String {
    DEFAULT_HOST.into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("", "", "cmstat").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("cmstat");
    p
}

// ── Config loading ──────────────────────────────────────────────────

fn figment_for(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("CMSTAT_").split("__"))
}

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load the Config from an explicit file + environment.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    Ok(figment_for(path).extract()?)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Profile resolution ──────────────────────────────────────────────

impl Config {
    /// The profile a command runs against when none is named.
    pub fn active_profile_name(&self, requested: Option<&str>) -> String {
        requested
            .map(str::to_owned)
            .or_else(|| self.default_profile.clone())
            .unwrap_or_else(|| "default".into())
    }

    /// Look up a profile by name.
    pub fn profile(&self, name: &str) -> Result<&Profile, ConfigError> {
        self.profiles
            .get(name)
            .ok_or_else(|| ConfigError::ProfileNotFound { name: name.into() })
    }
}

/// Build a `ModemConfig` from a profile, falling back to `defaults` for the
/// timeout.
pub fn profile_to_modem_config(
    profile: &Profile,
    defaults: &Defaults,
) -> Result<ModemConfig, ConfigError> {
    let timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));
    let config = ModemConfig::from_host(&profile.host).map_err(|e| ConfigError::Validation {
        field: "host".into(),
        reason: e.to_string(),
    })?;
    Ok(config.with_timeout(timeout))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use figment::Jail;

    use super::*;

    #[test]
    fn defaults_without_a_file() {
        Jail::expect_with(|jail| {
            let cfg = load_config_from(&jail.directory().join("missing.toml")).unwrap();
            assert_eq!(cfg.default_profile.as_deref(), Some("default"));
            assert_eq!(cfg.defaults.output, "table");
            assert_eq!(cfg.defaults.timeout, 10);
            assert!(cfg.profiles.is_empty());
            Ok(())
        });
    }

    #[test]
    fn profiles_load_from_toml() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                default_profile = "basement"

                [defaults]
                timeout = 4

                [profiles.basement]
                host = "192.168.100.1"

                [profiles.lab]
                host = "http://10.0.0.2:8080/"
                timeout = 20
                "#,
            )?;
            let cfg = load_config_from(&jail.directory().join("config.toml")).unwrap();

            assert_eq!(cfg.active_profile_name(None), "basement");
            assert_eq!(cfg.active_profile_name(Some("lab")), "lab");

            let basement = profile_to_modem_config(cfg.profile("basement").unwrap(), &cfg.defaults)
                .unwrap();
            assert_eq!(basement.url.as_str(), "http://192.168.100.1/");
            assert_eq!(basement.timeout, Duration::from_secs(4));

            let lab = profile_to_modem_config(cfg.profile("lab").unwrap(), &cfg.defaults).unwrap();
            assert_eq!(lab.url.port(), Some(8080));
            assert_eq!(lab.timeout, Duration::from_secs(20));
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[defaults]\ntimeout = 4\n")?;
            jail.set_env("CMSTAT_DEFAULTS__TIMEOUT", "30");
            let cfg = load_config_from(&jail.directory().join("config.toml")).unwrap();
            assert_eq!(cfg.defaults.timeout, 30);
            Ok(())
        });
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let cfg = Config::default();
        assert!(matches!(
            cfg.profile("attic"),
            Err(ConfigError::ProfileNotFound { .. })
        ));
    }

    #[test]
    fn save_then_load_keeps_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.profiles.insert(
            "default".into(),
            Profile {
                host: "modem.lan".into(),
                timeout: Some(3),
            },
        );
        save_config_to(&cfg, &path).unwrap();

        let loaded: Config = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.profiles["default"].host, "modem.lan");
        assert_eq!(loaded.profiles["default"].timeout, Some(3));
    }
}
