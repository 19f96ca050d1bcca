#![allow(dead_code)]

use pa_client::{AnalyticsClient, Config};
use std::io::Cursor;
use wiremock::MockServer;

pub const TOKEN: &str = "T";

/// Client pointed at `server` with the same base path as the real service
pub fn client_for(server: &MockServer) -> AnalyticsClient {
  init_tracing();
  let config = Config {
    token: TOKEN.to_string(),
    base_url: format!("{}/Counter/api", server.uri()),
    timeout_secs: Some(5),
  };
  AnalyticsClient::from_config(config).expect("Failed to create client")
}

/// Encode a solid-colour PNG of the given size
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
  let img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 30, 30, 255]));
  let mut buf = Cursor::new(Vec::new());
  image::DynamicImage::ImageRgba8(img)
    .write_to(&mut buf, image::ImageFormat::Png)
    .expect("Failed to encode PNG");
  buf.into_inner()
}

/// Route client logs through the test harness; safe to call repeatedly
pub fn init_tracing() {
  let _ = tracing_subscriber::fmt().with_env_filter("pa_client=debug").with_test_writer().try_init();
}
