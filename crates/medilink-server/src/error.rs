use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use medilink::errors::{ConfigurationError, GatewayError};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {env_var}")]
    MissingEnvVar { env_var: String },

    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

/// Map a settings path like `provider.api_key` onto the env var that sets it
pub fn to_env_var(field_path: &str) -> String {
    let path = field_path
        .split('.')
        .map(|part| part.to_uppercase())
        .collect::<Vec<_>>()
        .join("__");
    format!("MEDILINK_{}", path)
}

/// Gateway failures as HTTP responses
#[derive(Debug)]
pub struct ApiError(pub GatewayError);

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        ApiError(err)
    }
}

impl From<ConfigurationError> for ApiError {
    fn from(err: ConfigurationError) -> Self {
        ApiError(err.into())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            GatewayError::EmptyInput => StatusCode::BAD_REQUEST,
            GatewayError::Configuration(ConfigurationError::UnknownRole(_)) => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::ProviderUnavailable { .. } | GatewayError::MalformedResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "chat request failed");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
