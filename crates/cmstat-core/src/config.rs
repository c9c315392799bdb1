// ── Runtime connection configuration ──
//
// Describes where the modem lives and how long to wait for it. Never
// touches disk; the CLI builds one and hands it to `Modem::new`.

use std::time::Duration;

use url::Url;

use crate::error::CoreError;

/// Address every DOCSIS cable modem answers on from the LAN side.
pub const DEFAULT_HOST: &str = "192.168.100.1";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for a single modem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModemConfig {
    /// Base URL the status pages hang off (e.g. `http://192.168.100.1/`).
    pub url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ModemConfig {
    /// Build a config from a bare host (`192.168.100.1`, `modem.lan:8080`)
    /// or a full base URL.
    pub fn from_host(host: &str) -> Result<Self, CoreError> {
        let host = host.trim();
        if host.is_empty() {
            return Err(CoreError::Config {
                message: "modem host is empty".into(),
            });
        }

        let raw = if host.contains("://") {
            host.to_owned()
        } else {
            format!("http://{host}/")
        };
        let url = Url::parse(&raw).map_err(|e| CoreError::Config {
            message: format!("invalid modem host '{host}': {e}"),
        })?;

        Ok(Self {
            url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
