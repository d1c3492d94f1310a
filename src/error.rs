use thiserror::Error;
pub use url::ParseError as UrlParseError;

/// Error types for the legacy UniFi controller client.
#[derive(Error, Debug)]
pub enum ControllerError {
    /// The controller reported a failure in the response envelope
    /// (`meta.rc != "ok"`), or a required argument failed local validation.
    /// Carries the human-readable message.
    #[error("API error: {0}")]
    ApiError(String),

    /// HTTP request failed at the transport level (connection, TLS,
    /// unparseable body). Never folded into [`ControllerError::ApiError`].
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error parsing or joining a URL.
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] UrlParseError),

    /// Error serializing or deserializing JSON.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Invalid client configuration, reported at build time.
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),

    /// Local filesystem failure while writing a downloaded backup.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for controller operations.
pub type ControllerResult<T> = Result<T, ControllerError>;
