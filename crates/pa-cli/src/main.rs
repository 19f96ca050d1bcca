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

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use pa_client::AnalyticsClient;
use pa_core::Config;

mod commands;
use commands::{
  bulk::{BulkCommand, BulkKind},
  graph::GraphCommand,
  value::ValueCommand,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "pa")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Current value of an application counter
  Value(ValueCommand),
  /// Graph of an application counter, written as PNG
  Graph(GraphCommand),
  /// Current value of a license counter
  LicenseValue(commands::license::LicenseValueCommand),
  /// Graph of a license counter, written as PNG
  LicenseGraph(commands::license::LicenseGraphCommand),
  /// Bulk value query (`bulkdata/app`) from a JSON file of descriptors
  BulkData(BulkCommand),
  /// Bulk value-series query (`bulkxport/app`)
  BulkXport(BulkCommand),
  /// Bulk value and value-series query (`bulk/app`)
  Bulk(BulkCommand),
  /// Bulk license value query (`bulkdata/license`)
  BulkLicense(BulkCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging
  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).with_writer(std::io::stderr).init();

  // Load configuration
  let config = Config::from_env().context("Failed to load configuration")?;
  let client = AnalyticsClient::from_config(config).context("Failed to create client")?;

  // Execute command
  match cli.command {
    Commands::Value(cmd) => commands::value::execute(cmd, &client).await?,
    Commands::Graph(cmd) => commands::graph::execute(cmd, &client).await?,
    Commands::LicenseValue(cmd) => commands::license::execute_value(cmd, &client).await?,
    Commands::LicenseGraph(cmd) => commands::license::execute_graph(cmd, &client).await?,
    Commands::BulkData(cmd) => commands::bulk::execute(cmd, BulkKind::Data, &client).await?,
    Commands::BulkXport(cmd) => commands::bulk::execute(cmd, BulkKind::Xport, &client).await?,
    Commands::Bulk(cmd) => commands::bulk::execute(cmd, BulkKind::All, &client).await?,
    Commands::BulkLicense(cmd) => commands::bulk::execute(cmd, BulkKind::License, &client).await?,
  }

  Ok(())
}
