use anyhow::{Context, Result};
use clap::Args;
use pa_client::{
  AnalyticsClient, BulkAppQuery, BulkDataAppQuery, BulkXportAppQuery, LicenseBulkDataQuery,
};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug)]
pub struct BulkCommand {
  /// JSON file holding an array of query descriptors
  #[arg(short, long)]
  pub file: PathBuf,
}

/// Bulk endpoint to call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkKind {
  Data,
  Xport,
  All,
  License,
}

pub async fn execute(cmd: BulkCommand, kind: BulkKind, client: &AnalyticsClient) -> Result<()> {
  let raw = read_queries(&cmd.file)?;

  let response: Value = match kind {
    BulkKind::Data => {
      let queries = parse::<BulkDataAppQuery>(&raw)?;
      serde_json::to_value(client.app().bulk_data(&queries).await?)?
    }
    BulkKind::Xport => {
      let queries = parse::<BulkXportAppQuery>(&raw)?;
      serde_json::to_value(client.app().bulk_xport(&queries).await?)?
    }
    BulkKind::All => {
      let queries = parse::<BulkAppQuery>(&raw)?;
      serde_json::to_value(client.app().bulk(&queries).await?)?
    }
    BulkKind::License => {
      let queries = parse::<LicenseBulkDataQuery>(&raw)?;
      serde_json::to_value(client.license().bulk_data(&queries).await?)?
    }
  };

  println!("{}", serde_json::to_string_pretty(&response)?);
  Ok(())
}

fn read_queries(path: &Path) -> Result<String> {
  let raw = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read query file {}", path.display()))?;
  info!("Loaded bulk queries from {}", path.display());
  Ok(raw)
}

fn parse<T: serde::de::DeserializeOwned>(raw: &str) -> Result<Vec<T>> {
  serde_json::from_str(raw).context("Query file is not a JSON array of descriptors")
}
