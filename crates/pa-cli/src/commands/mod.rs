pub mod bulk;
pub mod graph;
pub mod license;
pub mod value;

use anyhow::{Context, Result};
use pa_client::DynamicImage;
use std::path::Path;
use tracing::info;

/// Write a decoded graph to `output`, format picked from the extension
pub fn save_graph(graph: &DynamicImage, output: &Path) -> Result<()> {
  graph
    .save(output)
    .with_context(|| format!("Failed to write graph to {}", output.display()))?;
  info!("Wrote {}x{} graph to {}", graph.width(), graph.height(), output.display());
  Ok(())
}
