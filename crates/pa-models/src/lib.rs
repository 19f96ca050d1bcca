//! # pa-models
//!
//! Data models for Photon analytics bulk queries and their responses.
//!
//! Query descriptors serialize with unset optional fields left out of the
//! JSON object entirely, never as `null` or `""`. Response aliases mirror the
//! JSON objects the bulk endpoints return, keyed by the caller-supplied `id`.
//!
//! ## Usage
//!
//! ```ignore
//! use pa_models::BulkXportAppQuery;
//!
//! let query = BulkXportAppQuery::new("x", "A1", "jp", "Ccu").with_span("2024-01-01", "2024-01-02");
//! let body = serde_json::to_vec(&vec![query])?;
//! ```

#![warn(clippy::all)]

pub mod app;
pub mod license;

pub use app::*;
pub use license::*;
