use anyhow::Result;
use clap::Args;
use pa_client::{AnalyticsClient, AppValueRequest};

#[derive(Args, Debug)]
pub struct ValueCommand {
  /// Application id
  #[arg(long, env = "PHOTON_APP_ID")]
  pub app_id: String,

  /// Region code, e.g. `jp`
  #[arg(long)]
  pub region: String,

  /// Counter type, e.g. `Ccu`
  #[arg(long)]
  pub template: String,

  /// Start of the span, passed through unchanged
  #[arg(long)]
  pub start: Option<String>,

  #[arg(long)]
  pub end: Option<String>,
}

pub async fn execute(cmd: ValueCommand, client: &AnalyticsClient) -> Result<()> {
  let request = AppValueRequest {
    app_id: cmd.app_id,
    region: cmd.region,
    template: cmd.template,
    start: cmd.start,
    end: cmd.end,
  };
  let value = client.app().value(&request).await?;
  println!("{}", value);
  Ok(())
}
