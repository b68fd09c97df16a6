use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};

/// Environment variable holding the Gemini API credential.
pub const CREDENTIAL_ENV_VAR: &str = "GEMINI_API_KEY";

const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Application configuration loaded from environment variables.
///
/// A missing credential is not a startup error: the service still comes up and
/// rejects fact-check requests with a configuration error until it is set.
#[derive(Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    pub request_timeout: Option<Duration>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: load_credential(),
            gemini_api_base: std::env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string()),
            request_timeout: parse_timeout(std::env::var("REQUEST_TIMEOUT_SECS").ok())?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn has_credential(&self) -> bool {
        !self.gemini_api_key.is_empty()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field(
                "gemini_api_key",
                &if self.has_credential() { "<redacted>" } else { "<unset>" },
            )
            .field("gemini_api_base", &self.gemini_api_base)
            .field("request_timeout", &self.request_timeout)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

/// Reads the Gemini credential from the process environment.
///
/// Returns an empty string when the variable is unset or blank. Absence is an
/// expected outcome; callers decide how to surface it.
pub fn load_credential() -> String {
    normalize_credential(std::env::var(CREDENTIAL_ENV_VAR).ok())
}

fn normalize_credential(raw: Option<String>) -> String {
    raw.map(|v| v.trim().to_string()).unwrap_or_default()
}

fn parse_timeout(raw: Option<String>) -> Result<Option<Duration>> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(secs) => {
            let secs = secs
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?;
            Ok((secs > 0).then(|| Duration::from_secs(secs)))
        }
    }
}
