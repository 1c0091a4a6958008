//! Startup configuration.
//!
//! A browser client has no filesystem to read a config file from, so
//! the knobs are compile-time environment overrides baked in at build
//! time and provided to the component tree through context.

use tracing::warn;

/// Web App URL of the deployed sheet backend. Replace with your own
/// deployment, or override with `TASKBOARD_API_URL` at build time.
const DEFAULT_API_URL: &str = "https://script.google.com/macros/s/REPLACE_WITH_DEPLOYMENT/exec";

const DEFAULT_REFRESH_MS: u32 = 15_000;

/// Which backing store the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// The deployed sheet web app. The normal mode.
    Remote,
    /// A static JSON file; writes stay in memory. Demo use only.
    Snapshot,
    /// Browser LocalStorage as the durable store. Single-user only.
    Local,
}

/// Configuration consumed once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend: BackendKind,
    pub api_url: String,
    /// Fixed refresh period in milliseconds.
    pub refresh_ms: u32,
}

impl AppConfig {
    /// Reads `TASKBOARD_BACKEND` (`remote|snapshot|local`),
    /// `TASKBOARD_API_URL`, and `TASKBOARD_REFRESH_MS`, falling back
    /// to the remote backend on a 15 second refresh.
    pub fn from_env() -> Self {
        Self::parse(
            option_env!("TASKBOARD_BACKEND"),
            option_env!("TASKBOARD_API_URL"),
            option_env!("TASKBOARD_REFRESH_MS"),
        )
    }

    fn parse(backend: Option<&str>, api_url: Option<&str>, refresh_ms: Option<&str>) -> Self {
        let backend = match backend {
            Some("remote") | None => BackendKind::Remote,
            Some("snapshot") => BackendKind::Snapshot,
            Some("local") => BackendKind::Local,
            Some(other) => {
                warn!(value = other, "unknown backend kind, using remote");
                BackendKind::Remote
            }
        };
        let refresh_ms = refresh_ms
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_REFRESH_MS);
        Self {
            backend,
            api_url: api_url.unwrap_or(DEFAULT_API_URL).to_string(),
            refresh_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_remote_backend() {
        let config = AppConfig::parse(None, None, None);

        assert_eq!(config.backend, BackendKind::Remote);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.refresh_ms, 15_000);
    }

    #[test]
    fn selects_the_configured_backend() {
        assert_eq!(
            AppConfig::parse(Some("snapshot"), None, None).backend,
            BackendKind::Snapshot
        );
        assert_eq!(
            AppConfig::parse(Some("local"), None, None).backend,
            BackendKind::Local
        );
    }

    #[test]
    fn unknown_backend_falls_back_to_remote() {
        let config = AppConfig::parse(Some("ftp"), None, None);
        assert_eq!(config.backend, BackendKind::Remote);
    }

    #[test]
    fn overrides_url_and_refresh_period() {
        let config = AppConfig::parse(None, Some("https://example.com/tasks"), Some("5000"));

        assert_eq!(config.api_url, "https://example.com/tasks");
        assert_eq!(config.refresh_ms, 5_000);
    }

    #[test]
    fn unparseable_refresh_period_uses_the_default() {
        let config = AppConfig::parse(None, None, Some("soon"));
        assert_eq!(config.refresh_ms, 15_000);
    }
}
