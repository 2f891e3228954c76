// Copyright (c) 2025 gdns2tf contributors
// SPDX-License-Identifier: MIT

//! gdns2tf binary entry point.

use anyhow::Result;
use clap::Parser;
use gdns2tf::config::Config;
use gdns2tf::constants::DEFAULT_GCLOUD_BIN;
use gdns2tf::importer::Importer;
use std::path::PathBuf;
use tracing::{debug, info};

/// Generate Terraform resources and import commands from Google Cloud DNS
/// record-sets.
#[derive(Parser, Debug)]
#[command(name = "gdns2tf")]
#[command(version)]
#[command(about = "Generate Terraform resources and import commands from Google Cloud DNS record-sets")]
struct Cli {
    /// GCP project ID the managed zone lives in
    #[arg(long, env = "GDNS2TF_PROJECT")]
    project: String,

    /// Cloud DNS managed-zone name to convert
    #[arg(long, env = "GDNS2TF_ZONE")]
    zone: String,

    /// Directory to write the .tf files and import.sh into
    #[arg(long, env = "GDNS2TF_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Program name or path of the Google Cloud CLI
    #[arg(long, env = "GDNS2TF_GCLOUD_BIN", default_value = DEFAULT_GCLOUD_BIN)]
    gcloud_bin: String,
}

fn main() -> Result<()> {
    // Initialize logging
    //
    // Respects RUST_LOG environment variable if set, otherwise defaults to INFO level
    // Example: RUST_LOG=debug gdns2tf ...
    //
    // Respects RUST_LOG_FORMAT environment variable for output format
    // Example: RUST_LOG_FORMAT=json gdns2tf ...
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(true)
                .compact()
                .init();
        }
    }

    let cli = Cli::parse();
    debug!("parsed CLI arguments: {cli:?}");

    info!(
        "converting record-sets of zone {} (project {}) into {}",
        cli.zone,
        cli.project,
        cli.output_dir.display()
    );

    let config = Config::new(cli.project, cli.zone, cli.output_dir, cli.gcloud_bin);
    let summary = Importer::new(config).run()?;

    info!(
        "done: {} resource file(s) written, {} row(s) skipped",
        summary.written, summary.skipped
    );

    Ok(())
}
