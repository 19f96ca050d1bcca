use super::save_graph;
use anyhow::Result;
use clap::Args;
use pa_client::{AnalyticsClient, AppGraphRequest};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct GraphCommand {
  #[arg(long, env = "PHOTON_APP_ID")]
  pub app_id: String,

  #[arg(long)]
  pub region: String,

  #[arg(long)]
  pub template: String,

  #[arg(long)]
  pub start: Option<String>,

  #[arg(long)]
  pub end: Option<String>,

  /// Width in pixels
  #[arg(long)]
  pub width: Option<u32>,

  /// Height in pixels
  #[arg(long)]
  pub height: Option<u32>,

  /// Where to write the PNG
  #[arg(short, long, default_value = "graph.png")]
  pub output: PathBuf,
}

pub async fn execute(cmd: GraphCommand, client: &AnalyticsClient) -> Result<()> {
  let request = AppGraphRequest {
    app_id: cmd.app_id,
    region: cmd.region,
    template: cmd.template,
    start: cmd.start,
    end: cmd.end,
    width: cmd.width,
    height: cmd.height,
  };
  let graph = client.app().graph(&request).await?;
  save_graph(&graph, &cmd.output)
}
