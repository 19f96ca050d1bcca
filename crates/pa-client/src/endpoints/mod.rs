//! Endpoint groups of the Photon analytics API

pub mod app;
pub mod license;

use crate::transport::Transport;
use image::{DynamicImage, ImageFormat};
use pa_core::{Error, Result};
use std::sync::Arc;
use tracing::error;

/// Base trait for endpoint implementations
///
/// Provides common functionality needed by all endpoint modules
pub trait EndpointBase {
  /// Get a reference to the transport layer
  fn transport(&self) -> &Arc<Transport>;
}

/// Macro to implement the EndpointBase trait for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl EndpointBase for $struct_name {
      fn transport(&self) -> &Arc<Transport> {
        &self.transport
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

/// Fail with a validation error naming every empty field
pub(crate) fn require_fields(fields: &[(&str, &str)]) -> Result<()> {
  let missing: Vec<&str> =
    fields.iter().filter(|(_, value)| value.is_empty()).map(|(name, _)| *name).collect();
  if missing.is_empty() {
    Ok(())
  } else {
    Err(Error::Validation(format!("{} must be set", missing.join(", "))))
  }
}

/// Like [`require_fields`], and also rejects `.` and `..`, which the URL
/// joiner would otherwise resolve into a different resource path
pub(crate) fn require_path_segments(fields: &[(&str, &str)]) -> Result<()> {
  require_fields(fields)?;
  let dotted: Vec<&str> = fields
    .iter()
    .filter(|(_, value)| matches!(*value, "." | ".."))
    .map(|(name, _)| *name)
    .collect();
  if dotted.is_empty() {
    Ok(())
  } else {
    Err(Error::Validation(format!("{} must not be a dot segment", dotted.join(", "))))
  }
}

/// Zero pixel sizes mean "let the server pick"
pub(crate) fn positive_dimension(value: Option<u32>) -> Option<String> {
  value.filter(|v| *v > 0).map(|v| v.to_string())
}

/// Parse a value endpoint body
pub(crate) fn parse_value(body: &str) -> Result<f64> {
  body.parse::<f64>().map_err(|e| {
    error!("Value response is not a number: {}", body.chars().take(200).collect::<String>());
    Error::Parse(format!("invalid counter value {:?}: {}", body, e))
  })
}

/// Decode a graph endpoint body
pub(crate) fn decode_png(body: &[u8]) -> Result<DynamicImage> {
  image::load_from_memory_with_format(body, ImageFormat::Png)
    .map_err(|e| Error::Decode(format!("invalid PNG graph: {}", e)))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_require_fields() {
    assert!(require_fields(&[("app_id", "A1"), ("region", "jp")]).is_ok());

    let err = require_fields(&[("app_id", ""), ("region", "jp"), ("template", "")]).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "Validation error: app_id, template must be set");
  }

  #[test]
  fn test_require_path_segments_rejects_dots() {
    assert!(require_path_segments(&[("app_id", "A.1"), ("region", "jp")]).is_ok());

    let err = require_path_segments(&[("app_id", ".."), ("region", "."), ("template", "Ccu")])
      .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "Validation error: app_id, region must not be a dot segment");

    let err = require_path_segments(&[("app_id", ""), ("region", "..")]).unwrap_err();
    assert_eq!(err.to_string(), "Validation error: app_id must be set");
  }

  #[test]
  fn test_positive_dimension() {
    assert_eq!(positive_dimension(Some(640)), Some("640".to_string()));
    assert_eq!(positive_dimension(Some(0)), None);
    assert_eq!(positive_dimension(None), None);
  }

  #[test]
  fn test_parse_value() {
    assert_eq!(parse_value("42.5").unwrap(), 42.5);
    assert_eq!(parse_value("1234").unwrap(), 1234.0);
    assert!(matches!(parse_value("forty"), Err(Error::Parse(_))));
    assert!(matches!(parse_value(""), Err(Error::Parse(_))));
  }

  #[test]
  fn test_decode_png_rejects_garbage() {
    assert!(matches!(decode_png(b"definitely not a png"), Err(Error::Decode(_))));
  }
}
