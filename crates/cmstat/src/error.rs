//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and a process exit code.

use miette::Diagnostic;
use thiserror::Error;

use cmstat_config::ConfigError;
use cmstat_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not read status pages from the modem")]
    #[diagnostic(
        code(cmstat::connection_failed),
        help(
            "Check that the modem is reachable from this machine.\n\
             Most cable modems answer on 192.168.100.1; use --host to point elsewhere."
        )
    )]
    ConnectionFailed {
        #[source]
        source: CoreError,
    },

    #[error("The modem did not answer in time")]
    #[diagnostic(
        code(cmstat::timeout),
        help("Increase the timeout with --timeout or check the modem's responsiveness.")
    )]
    Timeout {
        #[source]
        source: CoreError,
    },

    // ── Page contents ────────────────────────────────────────────────
    #[error("The modem has no such status page")]
    #[diagnostic(
        code(cmstat::page_not_found),
        help("This firmware may serve its status pages under different names.")
    )]
    PageNotFound {
        #[source]
        source: CoreError,
    },

    #[error("No table headed '{label}' on the status page")]
    #[diagnostic(
        code(cmstat::table_not_found),
        help("The page loaded but its layout is not one cmstat recognizes.")
    )]
    TableNotFound { label: String },

    #[error("Could not make sense of the modem's status tables")]
    #[diagnostic(code(cmstat::extraction))]
    Extraction {
        #[source]
        source: CoreError,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(cmstat::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(cmstat::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: cmstat config set-host {name} <host>"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(cmstat::config))]
    Config(Box<figment::Error>),

    #[error("Failed to write configuration: {0}")]
    #[diagnostic(code(cmstat::config_write))]
    ConfigWrite(String),

    // ── IO ────────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::PageNotFound { .. } | Self::TableNotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::ProfileNotFound { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            _ if err.is_timeout() => CliError::Timeout { source: err },
            _ if err.is_not_found() => CliError::PageNotFound { source: err },
            CoreError::Fetch(_) => CliError::ConnectionFailed { source: err },

            CoreError::TableNotFound { label } => CliError::TableNotFound { label },

            CoreError::Parse { .. } | CoreError::ColumnMismatch { .. } => {
                CliError::Extraction { source: err }
            }

            CoreError::Config { message } => CliError::Validation {
                field: "host".into(),
                reason: message,
            },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ProfileNotFound { name } => CliError::ProfileNotFound {
                name,
                available: String::new(),
            },
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Figment(e) => CliError::Config(e),
            ConfigError::Serialization(e) => CliError::ConfigWrite(e.to_string()),
            ConfigError::Io(e) => CliError::Io(e),
        }
    }
}
