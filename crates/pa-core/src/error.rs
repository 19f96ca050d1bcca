use thiserror::Error;

/// The main error type for pa-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error (bad base URL, header value or HTTP client setup)
  #[error("Configuration error: {0}")]
  Config(String),

  /// A required request field was empty
  #[error("Validation error: {0}")]
  Validation(String),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Any response other than 200 OK
  #[error("invalid status: {0}")]
  Status(String),

  /// Value body was not a decimal number
  #[error("Parse error: {0}")]
  Parse(String),

  /// Graph body was not a decodable PNG
  #[error("Decode error: {0}")]
  Decode(String),
}

impl Error {
  /// True when the error was raised before any request was sent
  pub fn is_validation(&self) -> bool {
    matches!(self, Error::Validation(_))
  }
}

/// Result type alias for pa-* crates
pub type Result<T> = std::result::Result<T, Error>;
