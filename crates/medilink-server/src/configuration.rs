use crate::error::{to_env_var, ConfigError};
use config::{Config, Environment};
use medilink::{
    gateway::{CompletionGateway, DEFAULT_SOURCE},
    providers::{
        configs::{KeywordsProviderConfig, ModelMap, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, KEYWORDS_HOST},
        keywords::KeywordsProvider,
    },
};
use serde::Deserialize;
use std::net::{AddrParseError, SocketAddr};

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProviderSettings {
    #[serde(default = "default_provider_host")]
    pub host: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_source")]
    pub source: String,
}

#[derive(Debug, Deserialize)]
pub struct ModelSettings {
    #[serde(default = "default_model")]
    pub triage: String,
    #[serde(default = "default_model")]
    pub recovery: String,
    #[serde(default = "default_model")]
    pub billing: String,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            triage: default_model(),
            recovery: default_model(),
            billing: default_model(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub provider: ProviderSettings,
    #[serde(default)]
    pub models: ModelSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_and_validate()
    }

    fn load_and_validate() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Server defaults
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port())?
            // Provider defaults
            .set_default("provider.host", default_provider_host())?
            .set_default("provider.timeout_secs", default_timeout_secs())?
            .set_default("provider.source", default_source())?
            // Layer on the environment variables
            .add_source(
                Environment::with_prefix("MEDILINK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Self = match config.try_deserialize() {
            Ok(settings) => settings,
            Err(config::ConfigError::NotFound(field)) => {
                tracing::debug!("Configuration field not found: {}", field);
                return Err(ConfigError::MissingEnvVar {
                    env_var: to_env_var(&field),
                });
            }
            Err(err) => return Err(ConfigError::Other(err)),
        };

        // The credential is required; there is no point starting without it
        match settings.provider.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(settings),
            _ => Err(ConfigError::MissingEnvVar {
                env_var: to_env_var("provider.api_key"),
            }),
        }
    }

    pub fn model_map(&self) -> ModelMap {
        ModelMap {
            triage: self.models.triage.clone(),
            recovery: self.models.recovery.clone(),
            billing: self.models.billing.clone(),
        }
    }

    /// Build the gateway these settings describe
    pub fn build_gateway(&self) -> anyhow::Result<CompletionGateway> {
        let api_key = self.provider.api_key.clone().unwrap_or_default();
        let provider_config = KeywordsProviderConfig::new(self.provider.host.clone(), api_key)
            .with_timeout(self.provider.timeout_secs);
        let provider = KeywordsProvider::new(provider_config)?;

        Ok(CompletionGateway::new(Box::new(provider), self.model_map())
            .with_source(self.provider.source.clone()))
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8001
}

fn default_provider_host() -> String {
    KEYWORDS_HOST.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
