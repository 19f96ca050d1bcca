//! HTTP transport layer for Photon analytics API requests

use pa_core::{Config, Error, Result, USER_AGENT};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Request, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

/// Per-call request parameters: query pairs, extra headers and an optional body
#[derive(Debug, Default, Clone)]
pub struct RequestParams {
  headers: HeaderMap,
  queries: BTreeMap<String, String>,
  body: Option<Vec<u8>>,
}

impl RequestParams {
  /// Empty parameter set
  pub fn new() -> Self {
    Self::default()
  }

  /// Set a query pair, replacing any earlier value for `key`
  pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.queries.insert(key.into(), value.into());
    self
  }

  /// Set a query pair only when a value is present
  pub fn query_opt(self, key: &str, value: Option<impl Into<String>>) -> Self {
    match value {
      Some(value) => self.query(key, value),
      None => self,
    }
  }

  /// Set a header. `User-Agent` and `Authorization` are always overwritten
  /// by the transport.
  pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
    self.headers.insert(name, value);
    self
  }

  /// Attach a raw body, sent as-is
  pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
    self.body = Some(body.into());
    self
  }

  /// Serialize `value` as the JSON body and set `Content-Type: application/json`
  pub fn json_body<T: Serialize + ?Sized>(self, value: &T) -> Result<Self> {
    let body = serde_json::to_vec(value)?;
    Ok(
      self
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .body(body),
    )
  }
}

/// HTTP transport layer for making requests to the Photon analytics API
pub struct Transport {
  client: Client,
  base_url: Url,
  token: String,
}

impl Transport {
  /// Create a transport with a reqwest client built from `config`
  pub fn new(config: &Config) -> Result<Self> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(secs) = config.timeout_secs {
      builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder
      .build()
      .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

    Self::with_client(config, client)
  }

  /// Create a transport around a caller-supplied reqwest client.
  ///
  /// `config.timeout_secs` is ignored here; the supplied client's own
  /// settings apply.
  pub fn with_client(config: &Config, client: Client) -> Result<Self> {
    Ok(Self { client, base_url: config.parsed_base_url()?, token: config.token.clone() })
  }

  /// Build a ready-to-send request for `path` relative to the base URL.
  ///
  /// Caller headers go in first, then `User-Agent` and the bearer
  /// `Authorization` header, so the fixed pair always wins.
  pub fn build_request(&self, method: Method, path: &str, params: RequestParams) -> Result<Request> {
    let url = self.build_url(path, &params.queries)?;

    let mut headers = params.headers;
    headers.insert(reqwest::header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.token))
      .map_err(|e| Error::Config(format!("Invalid bearer token: {}", e)))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);

    let mut builder = self.client.request(method, url).headers(headers);
    if let Some(body) = params.body {
      builder = builder.body(body);
    }

    builder.build().map_err(|e| Error::Config(format!("Failed to build request: {}", e)))
  }

  /// Join `path` onto the base path segment-wise and set the query pairs
  fn build_url(&self, path: &str, queries: &BTreeMap<String, String>) -> Result<Url> {
    let mut url = self.base_url.clone();
    {
      let mut segments = url
        .path_segments_mut()
        .map_err(|_| Error::Config(format!("Base URL cannot be a base: {}", self.base_url)))?;
      segments.pop_if_empty();
      segments.extend(path.split('/').filter(|s| !s.is_empty()));
    }

    if !queries.is_empty() {
      let mut merged: BTreeMap<String, String> = url.query_pairs().into_owned().collect();
      merged.extend(queries.iter().map(|(k, v)| (k.clone(), v.clone())));
      url.query_pairs_mut().clear().extend_pairs(merged.iter());
    }

    Ok(url)
  }

  /// Send a request. Anything other than `200 OK` is a status error and the
  /// body is dropped.
  pub async fn send(&self, request: Request) -> Result<Response> {
    debug!("Making {} request to: {}", request.method(), request.url());

    let response = self
      .client
      .execute(request)
      .await
      .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

    let status = response.status();
    if status == StatusCode::OK {
      debug!("Request successful with status: {}", status);
      Ok(response)
    } else {
      error!("Request failed with status: {}", status);
      Err(Error::Status(status.to_string()))
    }
  }

  /// `GET` and read the whole body as text
  pub async fn get_text(&self, path: &str, params: RequestParams) -> Result<String> {
    let request = self.build_request(Method::GET, path, params)?;
    self
      .send(request)
      .await?
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))
  }

  /// `GET` and read the whole body as bytes
  pub async fn get_bytes(&self, path: &str, params: RequestParams) -> Result<Vec<u8>> {
    let request = self.build_request(Method::GET, path, params)?;
    let body = self
      .send(request)
      .await?
      .bytes()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;
    debug!("Response body length: {} bytes", body.len());
    Ok(body.to_vec())
  }

  /// `POST` `body` as JSON and decode a JSON response
  pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
  where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
  {
    let params = RequestParams::new().json_body(body)?;
    let request = self.build_request(Method::POST, path, params)?;
    let text = self
      .send(request)
      .await?
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

    serde_json::from_str(&text).map_err(|e| {
      error!("Failed to parse JSON response: {}", e);
      Error::Serde(e)
    })
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &Url {
    &self.base_url
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.base_url.as_str())
      .field("token", &"<redacted>")
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn transport(base_url: &str) -> Transport {
    let mut config = Config::with_token("T");
    config.base_url = base_url.to_string();
    Transport::new(&config).unwrap()
  }

  #[test]
  fn test_build_request_joins_path_segments() {
    let transport = transport("https://mock.photon.test/Counter/api");
    let request = transport
      .build_request(Method::GET, "data/app/A1/jp/Ccu", RequestParams::new())
      .unwrap();

    assert_eq!(request.url().as_str(), "https://mock.photon.test/Counter/api/data/app/A1/jp/Ccu");
    assert_eq!(request.url().query(), None);
    assert_eq!(request.method(), Method::GET);
  }

  #[test]
  fn test_build_request_trailing_slash_base() {
    let transport = transport("https://mock.photon.test/Counter/api/");
    let request =
      transport.build_request(Method::POST, "/bulk/app", RequestParams::new()).unwrap();
    assert_eq!(request.url().path(), "/Counter/api/bulk/app");
  }

  #[test]
  fn test_build_request_sets_fixed_headers() {
    let transport = transport("https://mock.photon.test/Counter/api");
    let params = RequestParams::new()
      .header(reqwest::header::USER_AGENT, HeaderValue::from_static("someone-else"))
      .header(AUTHORIZATION, HeaderValue::from_static("Basic abc"))
      .header(HeaderName::from_static("x-trace"), HeaderValue::from_static("1"));
    let request = transport.build_request(Method::GET, "data/app/A/jp/Ccu", params).unwrap();

    let headers = request.headers();
    assert_eq!(headers.get(reqwest::header::USER_AGENT).unwrap(), USER_AGENT);
    assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer T");
    assert_eq!(headers.get_all(AUTHORIZATION).iter().count(), 1);
    assert_eq!(headers.get("x-trace").unwrap(), "1");
  }

  #[test]
  fn test_build_request_query_overwrites() {
    let transport = transport("https://mock.photon.test/Counter/api?start=old&keep=1");
    let params = RequestParams::new().query("start", "new").query("end", "2024-01-02 00:00");
    let request = transport.build_request(Method::GET, "data/app/A/jp/Ccu", params).unwrap();

    let pairs: Vec<(String, String)> = request.url().query_pairs().into_owned().collect();
    assert_eq!(
      pairs,
      vec![
        ("end".to_string(), "2024-01-02 00:00".to_string()),
        ("keep".to_string(), "1".to_string()),
        ("start".to_string(), "new".to_string()),
      ]
    );
  }

  #[test]
  fn test_query_opt_skips_none() {
    let params = RequestParams::new().query_opt("start", None::<String>).query_opt("end", Some("e"));
    assert_eq!(params.queries.len(), 1);
    assert_eq!(params.queries["end"], "e");
  }

  #[test]
  fn test_json_body_sets_content_type() {
    let transport = transport("https://mock.photon.test/Counter/api");
    let params = RequestParams::new().json_body(&vec!["a", "b"]).unwrap();
    let request = transport.build_request(Method::POST, "bulkdata/app", params).unwrap();

    assert_eq!(request.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    let body = request.body().and_then(|b| b.as_bytes()).unwrap();
    assert_eq!(body, br#"["a","b"]"#);
  }

  #[test]
  fn test_invalid_token_is_config_error() {
    let transport = Transport::new(&Config::with_token("bad\ntoken")).unwrap();
    let result = transport.build_request(Method::GET, "data", RequestParams::new());
    assert!(matches!(result, Err(Error::Config(_))));
  }

  #[test]
  fn test_invalid_base_url_is_config_error() {
    let mut config = Config::with_token("T");
    config.base_url = "::not-a-url".to_string();
    assert!(matches!(Transport::new(&config), Err(Error::Config(_))));
  }

  #[test]
  fn test_debug_redacts_token() {
    let transport = Transport::new(&Config::with_token("super-secret")).unwrap();
    let debug = format!("{:?}", transport);
    assert!(!debug.contains("super-secret"));
  }
}
