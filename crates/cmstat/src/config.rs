//! CLI configuration: thin wrapper around `cmstat_config`.
//!
//! Layers `GlobalOpts` flag overrides (`--host`, `--timeout`, `--output`)
//! on top of the active profile.

use clap::ValueEnum;

use cmstat_core::ModemConfig;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use cmstat_config::{
    Config, Profile, config_path, load_config, load_config_or_default, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    config.active_profile_name(global.profile.as_deref())
}

/// Translate the active profile + global flags into a `ModemConfig`.
///
/// Precedence is flag, then profile, then built-in default. A profile that
/// was asked for by name must exist; the implicit default profile may be
/// missing, in which case the modem's standard LAN address is used.
pub fn resolve_modem(global: &GlobalOpts, config: &Config) -> Result<ModemConfig, CliError> {
    let name = active_profile_name(global, config);
    let mut profile = match config.profiles.get(&name) {
        Some(p) => p.clone(),
        None if global.profile.is_some() => {
            return Err(CliError::ProfileNotFound {
                name,
                available: available_profiles(config),
            });
        }
        None => Profile::default(),
    };

    if let Some(ref host) = global.host {
        profile.host.clone_from(host);
    }
    if let Some(timeout) = global.timeout {
        profile.timeout = Some(timeout);
    }

    tracing::debug!(profile = %name, host = %profile.host, "resolved modem");
    Ok(cmstat_config::profile_to_modem_config(
        &profile,
        &config.defaults,
    )?)
}

/// Output format: `--output`, then `defaults.output` from the config file.
pub fn output_format(global: &GlobalOpts, config: &Config) -> Result<OutputFormat, CliError> {
    if let Some(format) = global.output {
        return Ok(format);
    }
    OutputFormat::from_str(&config.defaults.output, true).map_err(|_| CliError::Validation {
        field: "defaults.output".into(),
        reason: format!(
            "expected table, json, json-compact, yaml or plain, got '{}'",
            config.defaults.output
        ),
    })
}

pub fn available_profiles(config: &Config) -> String {
    if config.profiles.is_empty() {
        "(none)".into()
    } else {
        config.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}
