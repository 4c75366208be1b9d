use thiserror::Error;

/// Fatal setup problems. These are surfaced immediately and never retried.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Missing credential: environment variable '{var}' is required but not set")]
    MissingCredential { var: String },

    #[error("Unknown agent role: {0}")]
    UnknownRole(String),

    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    #[error("Assistant gateway has not been initialized")]
    NotInitialized,

    #[error("Assistant gateway is already initialized")]
    AlreadyInitialized,
}

#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("No user content to send")]
    EmptyInput,

    #[error("Model provider unavailable: {message}")]
    ProviderUnavailable {
        status: Option<u16>,
        message: String,
    },

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

impl GatewayError {
    pub fn unavailable<S: Into<String>>(status: Option<u16>, message: S) -> Self {
        GatewayError::ProviderUnavailable {
            status,
            message: message.into(),
        }
    }

    /// Transport-level failures, which callers treat as "could not reach the assistant"
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            GatewayError::ProviderUnavailable { .. } | GatewayError::MalformedResponse(_)
        )
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16());
        if err.is_timeout() {
            GatewayError::unavailable(status, format!("request timed out: {}", err))
        } else if err.is_decode() {
            GatewayError::MalformedResponse(err.to_string())
        } else {
            GatewayError::unavailable(status, err.to_string())
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
