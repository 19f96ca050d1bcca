pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::{CounterType, Region};

/// Base URL for the Photon analytics counter API
pub const PHOTON_ANALYTICS_BASE_URL: &str = "https://counter.photonengine.com/Counter/api";

/// User-Agent sent with every request, overriding any caller-supplied value
pub const USER_AGENT: &str = "pa-client";
