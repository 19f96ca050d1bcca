//! # pa-client
//!
//! An async client for the Photon analytics counter API.
//!
//! ## Features
//!
//! - **Single counters**: current value as `f64`, graphs as decoded PNG images
//! - **Bulk queries**: many counters per call, keyed by caller-supplied ids
//! - **Application and license scopes**: the same read patterns for both
//! - **Injectable transport**: bring your own `reqwest::Client`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pa_client::{AnalyticsClient, AppValueRequest, BulkXportAppQuery, CounterType, Region};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AnalyticsClient::new(std::env::var("PHOTON_TOKEN")?)?;
//!
//!     let ccu = client
//!         .app()
//!         .value(&AppValueRequest::new("my-app", Region::Japan, CounterType::Ccu))
//!         .await?;
//!     println!("CCU: {}", ccu);
//!
//!     let series = client
//!         .app()
//!         .bulk_xport(&[BulkXportAppQuery::new("jp-ccu", "my-app", Region::Japan, CounterType::Ccu)])
//!         .await?;
//!     println!("{:?}", series.get("jp-ccu"));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, pa_core::Error>`. Nothing is retried; the
//! first failure is returned as-is.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use client::AnalyticsClient;
pub use image::DynamicImage;
pub use pa_core::{Config, CounterType, Error, Region, Result};
pub use pa_models::*;

pub use endpoints::{app::AppEndpoints, license::LicenseEndpoints};
