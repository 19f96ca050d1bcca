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

//! License-scoped bulk query descriptors.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response of `bulkdata/license`: id -> counter value
pub type BulkDataLicenseResponse = HashMap<String, f64>;

/// Parameters of a single `data/license` value request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseValueRequest {
  pub hash: String,
  pub template: String,
  pub start: Option<String>,
  pub end: Option<String>,
}

impl LicenseValueRequest {
  pub fn new(hash: impl Into<String>, template: impl Into<String>) -> Self {
    Self { hash: hash.into(), template: template.into(), ..Default::default() }
  }
}

/// Parameters of a single `graph/license` image request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseGraphRequest {
  pub hash: String,
  pub template: String,
  pub start: Option<String>,
  pub end: Option<String>,
  pub width: Option<u32>,
  pub height: Option<u32>,
}

impl LicenseGraphRequest {
  pub fn new(hash: impl Into<String>, template: impl Into<String>) -> Self {
    Self { hash: hash.into(), template: template.into(), ..Default::default() }
  }
}

/// One query of a `bulkdata/license` request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseBulkDataQuery {
  pub id: String,
  /// License hash
  pub hash: String,
  pub template: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub start: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub end: Option<String>,
}

impl LicenseBulkDataQuery {
  pub fn new(id: impl Into<String>, hash: impl Into<String>, template: impl Into<String>) -> Self {
    Self { id: id.into(), hash: hash.into(), template: template.into(), ..Default::default() }
  }

  pub fn with_span(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
    self.start = Some(start.into());
    self.end = Some(end.into());
    self
  }
}
