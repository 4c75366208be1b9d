use std::env;

use crate::errors::ConfigurationError;
use crate::models::role::AgentRole;

pub const KEYWORDS_HOST: &str = "https://api.keywordsai.co";
pub const DEFAULT_MODEL: &str = "openai/gpt-5-mini";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Read an environment variable, treating blank values as unset
pub fn get_env(
    key: &str,
    required: bool,
    default: Option<String>,
) -> Result<Option<String>, ConfigurationError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(Some(value.trim().to_string())),
        Ok(_) | Err(env::VarError::NotPresent) if !required => Ok(default),
        Ok(_) | Err(env::VarError::NotPresent) => Err(ConfigurationError::MissingCredential {
            var: key.to_string(),
        }),
        Err(e) => Err(ConfigurationError::InvalidSetting {
            key: key.to_string(),
            reason: e.to_string(),
        }),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeywordsProviderConfig {
    pub host: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl KeywordsProviderConfig {
    pub fn new<S: Into<String>, K: Into<String>>(host: S, api_key: K) -> Self {
        Self {
            host: host.into(),
            api_key: api_key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Load configuration from environment variables. A missing API key is a hard failure.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let api_key = get_env("KEYWORDS_API_KEY", true, None)?.ok_or_else(|| {
            ConfigurationError::MissingCredential {
                var: "KEYWORDS_API_KEY".to_string(),
            }
        })?;

        let host = get_env("KEYWORDS_API_HOST", false, None)?
            .unwrap_or_else(|| KEYWORDS_HOST.to_string());

        let timeout_secs = match get_env("KEYWORDS_TIMEOUT_SECS", false, None)? {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|e| ConfigurationError::InvalidSetting {
                    key: "KEYWORDS_TIMEOUT_SECS".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self::new(host, api_key).with_timeout(timeout_secs))
    }
}

/// Which model serves which role. Swappable, and kept out of the parsing logic.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelMap {
    pub triage: String,
    pub recovery: String,
    pub billing: String,
}

impl Default for ModelMap {
    fn default() -> Self {
        Self::uniform(DEFAULT_MODEL)
    }
}

impl ModelMap {
    pub fn uniform<S: Into<String>>(model: S) -> Self {
        let model = model.into();
        Self {
            triage: model.clone(),
            recovery: model.clone(),
            billing: model,
        }
    }

    pub fn model_for(&self, role: AgentRole) -> &str {
        match role {
            AgentRole::Triage => &self.triage,
            AgentRole::Recovery => &self.recovery,
            AgentRole::Billing => &self.billing,
        }
    }

    pub fn from_env() -> Result<Self, ConfigurationError> {
        let model = |key: &str| -> Result<String, ConfigurationError> {
            Ok(get_env(key, false, None)?.unwrap_or_else(|| DEFAULT_MODEL.to_string()))
        };

        Ok(Self {
            triage: model("MEDILINK_TRIAGE_MODEL")?,
            recovery: model("MEDILINK_RECOVERY_MODEL")?,
            billing: model("MEDILINK_BILLING_MODEL")?,
        })
    }
}
