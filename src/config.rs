//! Client configuration resolved at build time.
//!
//! The WASM bundle has no process environment at runtime, so settings are
//! baked in through `option_env!` when the crate is compiled and fall back to
//! local-development defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";
pub const DEFAULT_STORAGE_KEY: &str = "user_detail";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("backend url must start with http:// or https://: {0}")]
    InvalidBackendUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the REST backend, without a trailing slash.
    pub backend_url: String,
    /// `localStorage` key holding the serialized session.
    pub storage_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { backend_url: DEFAULT_BACKEND_URL.to_owned(), storage_key: DEFAULT_STORAGE_KEY.to_owned() }
    }
}

impl ClientConfig {
    /// Build config from `BACKEND_SERVER_URL` as seen by the compiler.
    ///
    /// An invalid URL is logged and replaced by the default so the app still
    /// boots.
    #[must_use]
    pub fn from_build_env() -> Self {
        match Self::from_parts(option_env!("BACKEND_SERVER_URL")) {
            Ok(config) => config,
            Err(e) => {
                leptos::logging::warn!("{e}; using {DEFAULT_BACKEND_URL}");
                Self::default()
            }
        }
    }

    /// Build config from an optional raw backend URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBackendUrl`] when the URL is not http(s).
    pub fn from_parts(backend_url: Option<&str>) -> Result<Self, ConfigError> {
        let backend_url = parse_backend_url(backend_url)?;
        Ok(Self { backend_url, ..Self::default() })
    }

    /// Absolute URL for an API path such as `/users/signin`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.backend_url, path.trim_start_matches('/'))
    }
}

fn parse_backend_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_BACKEND_URL);
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidBackendUrl(raw.to_owned()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}
