use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Error, Debug)]
pub enum GatewayError {
    /// Any failed call: non-success status (carrying the server message),
    /// transport failure, undecodable body, or a request unusable before it
    /// left the process.
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl GatewayError {
    pub fn api_error(msg: impl Into<String>) -> Self {
        GatewayError::ApiError(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        GatewayError::ConfigError(msg.into())
    }

    /// Message without the variant prefix, as reported by the server for API errors.
    pub fn message(&self) -> &str {
        match self {
            GatewayError::ApiError(msg) | GatewayError::ConfigError(msg) => msg,
        }
    }
}
