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

//! Application-scoped bulk query descriptors and response shapes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named series of counter samples, e.g. `{"s1": [1, 2, 3]}`
pub type ValueSeries = HashMap<String, Vec<i64>>;

/// Response of `bulkdata/app`: id -> counter value
pub type BulkDataAppResponse = HashMap<String, i64>;

/// Response of `bulkxport/app`: id -> named series
pub type BulkXportAppResponse = HashMap<String, ValueSeries>;

/// Response of `bulk/app`: id -> value and series
pub type BulkAppResponse = HashMap<String, BulkAllEntry>;

/// Parameters of a single `data/app` value request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppValueRequest {
  pub app_id: String,
  pub region: String,
  /// Counter type, e.g. `Ccu`
  pub template: String,
  pub start: Option<String>,
  pub end: Option<String>,
}

impl AppValueRequest {
  pub fn new(
    app_id: impl Into<String>,
    region: impl Into<String>,
    template: impl Into<String>,
  ) -> Self {
    Self { app_id: app_id.into(), region: region.into(), template: template.into(), ..Default::default() }
  }

  pub fn with_span(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
    self.start = Some(start.into());
    self.end = Some(end.into());
    self
  }
}

/// Parameters of a single `graph/app` image request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppGraphRequest {
  pub app_id: String,
  pub region: String,
  pub template: String,
  pub start: Option<String>,
  pub end: Option<String>,
  /// Pixel width; `None` or `0` leaves it to the server
  pub width: Option<u32>,
  pub height: Option<u32>,
}

impl AppGraphRequest {
  pub fn new(
    app_id: impl Into<String>,
    region: impl Into<String>,
    template: impl Into<String>,
  ) -> Self {
    Self { app_id: app_id.into(), region: region.into(), template: template.into(), ..Default::default() }
  }

  pub fn with_span(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
    self.start = Some(start.into());
    self.end = Some(end.into());
    self
  }

  pub fn with_size(mut self, width: u32, height: u32) -> Self {
    self.width = Some(width);
    self.height = Some(height);
    self
  }
}

/// One query of a `bulkdata/app` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkDataAppQuery {
  /// Correlation id, echoed back as the key of the response object
  pub id: String,
  pub appid: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cloud: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cluster: Option<String>,
  pub region: String,
  pub template: String,
}

impl BulkDataAppQuery {
  pub fn new(
    id: impl Into<String>,
    appid: impl Into<String>,
    region: impl Into<String>,
    template: impl Into<String>,
  ) -> Self {
    Self {
      id: id.into(),
      appid: appid.into(),
      cloud: None,
      cluster: None,
      region: region.into(),
      template: template.into(),
    }
  }

  pub fn with_cloud(mut self, cloud: impl Into<String>) -> Self {
    self.cloud = Some(cloud.into());
    self
  }

  pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
    self.cluster = Some(cluster.into());
    self
  }
}

/// Query descriptor carrying a time span. Shared by `bulkxport/app`
/// and `bulk/app`, which accept the same fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkSpanAppQuery {
  pub id: String,
  pub appid: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cloud: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cluster: Option<String>,
  pub region: String,
  pub template: String,
  /// Opaque start token, passed through as given
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub start: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub end: Option<String>,
  /// Export time grouping
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub xporttime: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub normalize: Option<String>,
}

/// One query of a `bulkxport/app` request
pub type BulkXportAppQuery = BulkSpanAppQuery;

/// One query of a `bulk/app` request
pub type BulkAppQuery = BulkSpanAppQuery;

impl BulkSpanAppQuery {
  pub fn new(
    id: impl Into<String>,
    appid: impl Into<String>,
    region: impl Into<String>,
    template: impl Into<String>,
  ) -> Self {
    Self {
      id: id.into(),
      appid: appid.into(),
      region: region.into(),
      template: template.into(),
      ..Default::default()
    }
  }

  pub fn with_span(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
    self.start = Some(start.into());
    self.end = Some(end.into());
    self
  }

  pub fn with_xporttime(mut self, xporttime: impl Into<String>) -> Self {
    self.xporttime = Some(xporttime.into());
    self
  }

  pub fn with_normalize(mut self, normalize: impl Into<String>) -> Self {
    self.normalize = Some(normalize.into());
    self
  }
}

/// Value and series for one id of a `bulk/app` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkAllEntry {
  #[serde(rename = "Data", alias = "data")]
  pub data: i64,
  #[serde(rename = "Xport", alias = "xport", default)]
  pub xport: ValueSeries,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_bulkdata_query_omits_unset_cloud_and_cluster() {
    let query = BulkDataAppQuery::new("q1", "A1", "jp", "Ccu");
    let value = serde_json::to_value(&query).unwrap();
    assert_eq!(value, json!({"id": "q1", "appid": "A1", "region": "jp", "template": "Ccu"}));

    let query = query.with_cloud("public").with_cluster("c1");
    let value = serde_json::to_value(&query).unwrap();
    assert_eq!(value["cloud"], "public");
    assert_eq!(value["cluster"], "c1");
  }

  #[test]
  fn test_span_query_omits_every_unset_optional() {
    let body = serde_json::to_value(vec![BulkXportAppQuery::new("x", "A1", "jp", "Ccu")]).unwrap();
    let element = body[0].as_object().unwrap();
    let mut keys: Vec<&str> = element.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["appid", "id", "region", "template"]);
  }

  #[test]
  fn test_span_query_emits_set_optionals() {
    let query = BulkAppQuery::new("x", "A1", "jp", "Ccu")
      .with_span("20240101", "20240102")
      .with_xporttime("hour")
      .with_normalize("true");
    let value = serde_json::to_value(&query).unwrap();
    assert_eq!(value["start"], "20240101");
    assert_eq!(value["end"], "20240102");
    assert_eq!(value["xporttime"], "hour");
    assert_eq!(value["normalize"], "true");
    assert!(value.get("cloud").is_none());
  }

  #[test]
  fn test_query_list_preserves_order_and_fields() {
    let queries = vec![
      BulkXportAppQuery::new("b", "A2", "us", "Rooms").with_span("s", "e"),
      BulkXportAppQuery::new("a", "A1", "jp", "Ccu"),
      BulkXportAppQuery::new("a", "A1", "eu", "Ccu").with_normalize("1"),
    ];
    let body = serde_json::to_vec(&queries).unwrap();
    let decoded: Vec<BulkXportAppQuery> = serde_json::from_slice(&body).unwrap();
    assert_eq!(decoded, queries);
  }

  #[test]
  fn test_bulk_all_entry_accepts_either_key_case() {
    let upper: BulkAppResponse =
      serde_json::from_value(json!({"x": {"Data": 7, "Xport": {"s1": [1, 2]}}})).unwrap();
    let lower: BulkAppResponse =
      serde_json::from_value(json!({"x": {"data": 7, "xport": {"s1": [1, 2]}}})).unwrap();
    assert_eq!(upper, lower);
    assert_eq!(upper["x"].data, 7);
    assert_eq!(upper["x"].xport["s1"], vec![1, 2]);
  }

  #[test]
  fn test_bulk_xport_response_shape() {
    let response: BulkXportAppResponse =
      serde_json::from_value(json!({"x": {"s1": [1, 2, 3]}, "y": {}})).unwrap();
    assert_eq!(response["x"]["s1"], vec![1, 2, 3]);
    assert!(response["y"].is_empty());

    let bad: Result<BulkXportAppResponse, _> = serde_json::from_value(json!({"x": [1, 2]}));
    assert!(bad.is_err());
  }
}
