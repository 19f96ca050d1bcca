/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! The top-level client handing out endpoint groups

use crate::endpoints::{app::AppEndpoints, license::LicenseEndpoints};
use crate::transport::Transport;
use pa_core::{Config, Result};
use std::sync::Arc;

/// Main Photon analytics API client
///
/// Holds the immutable configuration (base URL, bearer token) and the HTTP
/// client, and hands out endpoint groups that share them. Each call is a
/// single request/response; nothing is retried or cached.
///
/// # Examples
///
/// ```ignore
/// use pa_client::{AnalyticsClient, AppValueRequest};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = AnalyticsClient::from_env()?;
///
///     let ccu = client.app().value(&AppValueRequest::new("my-app", "jp", "Ccu")).await?;
///     println!("CCU: {}", ccu);
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
  transport: Arc<Transport>,
}

impl AnalyticsClient {
  /// Create a client for the default service URL with a default HTTP client
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(token: impl Into<String>) -> Result<Self> {
    Self::from_config(Config::with_token(token))
  }

  /// Create a client that sends requests through `client`
  ///
  /// Use this to control timeouts, proxies or TLS on the underlying
  /// transport.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// use pa_client::AnalyticsClient;
  /// use std::time::Duration;
  ///
  /// let http = reqwest::Client::builder().timeout(Duration::from_secs(10)).build().unwrap();
  /// let client = AnalyticsClient::with_client("token", http).unwrap();
  /// ```
  pub fn with_client(token: impl Into<String>, client: reqwest::Client) -> Result<Self> {
    Self::with_config_and_client(Config::with_token(token), client)
  }

  /// Create a client from a full configuration
  ///
  /// # Errors
  ///
  /// Returns a configuration error if the base URL cannot be parsed or the
  /// HTTP client cannot be created.
  pub fn from_config(config: Config) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(&config)?) })
  }

  /// Create a client from a full configuration and a caller-supplied HTTP client
  pub fn with_config_and_client(config: Config, client: reqwest::Client) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::with_client(&config, client)?) })
  }

  /// Create a client from `PHOTON_*` environment variables
  pub fn from_env() -> Result<Self> {
    Self::from_config(Config::from_env()?)
  }

  /// Get access to application-scoped endpoints
  pub fn app(&self) -> AppEndpoints {
    AppEndpoints::new(self.transport.clone())
  }

  /// Get access to license-scoped endpoints
  pub fn license(&self) -> LicenseEndpoints {
    LicenseEndpoints::new(self.transport.clone())
  }

  /// Get the transport shared by all endpoint groups
  pub fn transport(&self) -> &Arc<Transport> {
    &self.transport
  }
}
