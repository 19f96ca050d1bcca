//! Configuration management for the Photon analytics client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Main configuration struct for the Photon analytics client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Bearer token sent with every request
  #[serde(skip_serializing)]
  pub token: String,

  /// Root URL every request path is joined onto
  pub base_url: String,

  /// Timeout for the default HTTP client. `None` leaves reqwest's default.
  pub timeout_secs: Option<u64>,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let token = env::var("PHOTON_TOKEN")
      .map_err(|_| Error::Config("PHOTON_TOKEN not set".to_string()))?;

    let base_url =
      env::var("PHOTON_BASE_URL").unwrap_or_else(|_| crate::PHOTON_ANALYTICS_BASE_URL.to_string());

    let timeout_secs = match env::var("PHOTON_TIMEOUT_SECS") {
      Ok(raw) => Some(
        raw.parse().map_err(|_| Error::Config("Invalid PHOTON_TIMEOUT_SECS".to_string()))?,
      ),
      Err(_) => None,
    };

    Ok(Config { token, base_url, timeout_secs })
  }

  /// Create a config with default values for the given token
  pub fn with_token(token: impl Into<String>) -> Self {
    Config {
      token: token.into(),
      base_url: crate::PHOTON_ANALYTICS_BASE_URL.to_string(),
      timeout_secs: None,
    }
  }

  /// Parse `base_url`, rejecting anything that cannot carry path segments.
  pub fn parsed_base_url(&self) -> Result<Url> {
    let url = Url::parse(&self.base_url)
      .map_err(|e| Error::Config(format!("Invalid base URL {}: {}", self.base_url, e)))?;
    if url.cannot_be_a_base() {
      return Err(Error::Config(format!("Base URL cannot be a base: {}", self.base_url)));
    }
    Ok(url)
  }
}
