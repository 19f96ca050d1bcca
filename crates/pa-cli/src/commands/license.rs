use super::save_graph;
use anyhow::Result;
use clap::Args;
use pa_client::{AnalyticsClient, LicenseGraphRequest, LicenseValueRequest};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct LicenseValueCommand {
  /// License hash
  #[arg(long, env = "PHOTON_LICENSE_HASH")]
  pub hash: String,

  #[arg(long)]
  pub template: String,

  #[arg(long)]
  pub start: Option<String>,

  #[arg(long)]
  pub end: Option<String>,
}

#[derive(Args, Debug)]
pub struct LicenseGraphCommand {
  #[command(flatten)]
  pub query: LicenseValueCommand,

  #[arg(long)]
  pub width: Option<u32>,

  #[arg(long)]
  pub height: Option<u32>,

  #[arg(short, long, default_value = "graph.png")]
  pub output: PathBuf,
}

pub async fn execute_value(cmd: LicenseValueCommand, client: &AnalyticsClient) -> Result<()> {
  let request =
    LicenseValueRequest { hash: cmd.hash, template: cmd.template, start: cmd.start, end: cmd.end };
  println!("{}", client.license().value(&request).await?);
  Ok(())
}

pub async fn execute_graph(cmd: LicenseGraphCommand, client: &AnalyticsClient) -> Result<()> {
  let request = LicenseGraphRequest {
    hash: cmd.query.hash,
    template: cmd.query.template,
    start: cmd.query.start,
    end: cmd.query.end,
    width: cmd.width,
    height: cmd.height,
  };
  let graph = client.license().graph(&request).await?;
  save_graph(&graph, &cmd.output)
}
