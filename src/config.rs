use std::env;
use std::time::Duration;

use crate::error::{LogoError, Result};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

// The key never shows up in logs or panics.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Reads the credential from `API_KEY` (or `GEMINI_API_KEY`).
    ///
    /// A missing or blank key is a [`LogoError::Configuration`]; callers are
    /// expected to treat it as fatal.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Like [`GeminiConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("API_KEY")
            .filter(|k| !k.trim().is_empty())
            .or_else(|| lookup("GEMINI_API_KEY").filter(|k| !k.trim().is_empty()))
            .ok_or_else(|| {
                LogoError::Configuration("API_KEY environment variable is not set.".into())
            })?;

        let mut config = Self::new(api_key);

        if let Some(model) = lookup("GEMINI_MODEL").filter(|m| !m.is_empty()) {
            config.model = model;
        }
        if let Some(base_url) = lookup("GEMINI_BASE_URL").filter(|u| !u.is_empty()) {
            config = config.with_base_url(base_url);
        }
        if let Some(raw) = lookup("GEMINI_TIMEOUT_SECS") {
            let secs: u64 = raw.parse().map_err(|_| {
                LogoError::Configuration(format!("GEMINI_TIMEOUT_SECS is not a number: {}", raw))
            })?;
            if secs == 0 {
                return Err(LogoError::Configuration(
                    "GEMINI_TIMEOUT_SECS must be at least 1".into(),
                ));
            }
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
