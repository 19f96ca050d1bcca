//! Counters scoped to one application, region and template

use super::{
  decode_png, impl_endpoint_base, parse_value, positive_dimension, require_fields,
  require_path_segments, EndpointBase,
};

use crate::transport::{RequestParams, Transport};
use image::DynamicImage;
use pa_core::Result;
use pa_models::app::*;
use std::sync::Arc;
use tracing::instrument;

/// Application-scoped counter endpoints
pub struct AppEndpoints {
  transport: Arc<Transport>,
}

impl AppEndpoints {
  /// Create a new application endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get the current value of one counter of an application
  ///
  /// # Arguments
  ///
  /// * `request` - Application id, region and template are required; `start`
  ///   and `end` are sent as query parameters only when set
  ///
  /// # Errors
  ///
  /// Returns a validation error, without touching the network, when any
  /// required field is empty. A non-200 response is a status error, and a
  /// body that is not a decimal number is a parse error.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use pa_client::{AnalyticsClient, AppValueRequest, CounterType, Region};
  /// # async fn run() -> pa_client::Result<()> {
  /// let client = AnalyticsClient::new("token")?;
  /// let ccu = client.app().value(&AppValueRequest::new("my-app", Region::Japan, CounterType::Ccu)).await?;
  /// println!("CCU: {}", ccu);
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, request), fields(app_id = %request.app_id, region = %request.region, template = %request.template))]
  pub async fn value(&self, request: &AppValueRequest) -> Result<f64> {
    require_path_segments(&[
      ("app_id", request.app_id.as_str()),
      ("region", request.region.as_str()),
      ("template", request.template.as_str()),
    ])?;

    let params = RequestParams::new()
      .query_opt("start", request.start.as_deref())
      .query_opt("end", request.end.as_deref());

    let path = format!("data/app/{}/{}/{}", request.app_id, request.region, request.template);
    let body = self.transport().get_text(&path, params).await?;
    parse_value(&body)
  }

  /// Get the graph of one counter of an application as a decoded PNG
  ///
  /// # Arguments
  ///
  /// * `request` - Same required fields as [`AppEndpoints::value`]; `width`
  ///   and `height` are only sent when positive
  #[instrument(skip(self, request), fields(app_id = %request.app_id, region = %request.region, template = %request.template))]
  pub async fn graph(&self, request: &AppGraphRequest) -> Result<DynamicImage> {
    require_path_segments(&[
      ("app_id", request.app_id.as_str()),
      ("region", request.region.as_str()),
      ("template", request.template.as_str()),
    ])?;

    let params = RequestParams::new()
      .query_opt("start", request.start.as_deref())
      .query_opt("end", request.end.as_deref())
      .query_opt("width", positive_dimension(request.width))
      .query_opt("height", positive_dimension(request.height));

    let path = format!("graph/app/{}/{}/{}", request.app_id, request.region, request.template);
    let body = self.transport().get_bytes(&path, params).await?;
    decode_png(&body)
  }

  /// Get the current value of many counters in one call
  ///
  /// The response is keyed by each query's `id`. Ids are not checked for
  /// uniqueness.
  #[instrument(skip(self, queries), fields(count = queries.len()))]
  pub async fn bulk_data(&self, queries: &[BulkDataAppQuery]) -> Result<BulkDataAppResponse> {
    for query in queries {
      require_fields(&[
        ("id", query.id.as_str()),
        ("appid", query.appid.as_str()),
        ("region", query.region.as_str()),
        ("template", query.template.as_str()),
      ])?;
    }
    self.transport().post_json("bulkdata/app", queries).await
  }

  /// Get value series over a time span for many counters in one call
  #[instrument(skip(self, queries), fields(count = queries.len()))]
  pub async fn bulk_xport(&self, queries: &[BulkXportAppQuery]) -> Result<BulkXportAppResponse> {
    validate_span_queries(queries)?;
    self.transport().post_json("bulkxport/app", queries).await
  }

  /// Get both the value and the value series for many counters in one call
  #[instrument(skip(self, queries), fields(count = queries.len()))]
  pub async fn bulk(&self, queries: &[BulkAppQuery]) -> Result<BulkAppResponse> {
    validate_span_queries(queries)?;
    self.transport().post_json("bulk/app", queries).await
  }
}

impl_endpoint_base!(AppEndpoints);

fn validate_span_queries(queries: &[BulkSpanAppQuery]) -> Result<()> {
  for query in queries {
    require_fields(&[
      ("id", query.id.as_str()),
      ("appid", query.appid.as_str()),
      ("region", query.region.as_str()),
      ("template", query.template.as_str()),
    ])?;
  }
  Ok(())
}
