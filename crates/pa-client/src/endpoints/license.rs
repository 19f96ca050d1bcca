//! Counters scoped to one license hash

use super::{
  decode_png, impl_endpoint_base, parse_value, positive_dimension, require_fields,
  require_path_segments, EndpointBase,
};

use crate::transport::{RequestParams, Transport};
use image::DynamicImage;
use pa_core::Result;
use pa_models::license::*;
use std::sync::Arc;
use tracing::instrument;

/// License-scoped counter endpoints, keyed by license hash
pub struct LicenseEndpoints {
  transport: Arc<Transport>,
}

impl LicenseEndpoints {
  /// Create a new license endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get the current value of one counter of a license
  ///
  /// # Errors
  ///
  /// Returns a validation error when `hash` or `template` is empty.
  #[instrument(skip(self, request), fields(template = %request.template))]
  pub async fn value(&self, request: &LicenseValueRequest) -> Result<f64> {
    require_path_segments(&[("hash", request.hash.as_str()), ("template", request.template.as_str())])?;

    let params = RequestParams::new()
      .query_opt("start", request.start.as_deref())
      .query_opt("end", request.end.as_deref());

    let path = format!("data/license/{}/{}", request.hash, request.template);
    let body = self.transport().get_text(&path, params).await?;
    parse_value(&body)
  }

  /// Get the graph of one counter of a license
  #[instrument(skip(self, request), fields(template = %request.template))]
  pub async fn graph(&self, request: &LicenseGraphRequest) -> Result<DynamicImage> {
    require_path_segments(&[("hash", request.hash.as_str()), ("template", request.template.as_str())])?;

    let params = RequestParams::new()
      .query_opt("start", request.start.as_deref())
      .query_opt("end", request.end.as_deref())
      .query_opt("width", positive_dimension(request.width))
      .query_opt("height", positive_dimension(request.height));

    let path = format!("graph/license/{}/{}", request.hash, request.template);
    let body = self.transport().get_bytes(&path, params).await?;
    decode_png(&body)
  }

  /// Get the current value of many license counters in one call
  #[instrument(skip(self, queries), fields(count = queries.len()))]
  pub async fn bulk_data(&self, queries: &[LicenseBulkDataQuery]) -> Result<BulkDataLicenseResponse> {
    for query in queries {
      require_fields(&[
        ("id", query.id.as_str()),
        ("hash", query.hash.as_str()),
        ("template", query.template.as_str()),
      ])?;
    }
    self.transport().post_json("bulkdata/license", queries).await
  }
}

impl_endpoint_base!(LicenseEndpoints);
