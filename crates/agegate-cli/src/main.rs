//! agegate - offline decision evaluation for the registry age filter
//!
//! Reads a package manifest JSON file (as served by the registry) and
//! reports what the filter would do with it right now: pass it through,
//! rewrite `latest`, or reject the request. Useful for checking a policy
//! against real manifests before deploying it.

use agegate_config::{Policy, load_config};
use agegate_core::{Decision, select_version};
use agegate_model::PackageManifest;
use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// agegate - evaluate the registry age filter against a package manifest
#[derive(Parser, Debug)]
#[command(name = "agegate")]
#[command(about = "Evaluate the registry age filter against a package manifest", long_about = None)]
struct Args {
    /// Package manifest JSON file
    manifest: PathBuf,

    /// Configuration file path (or set AGEGATE_CONFIG env var)
    #[arg(short, long, env = "AGEGATE_CONFIG")]
    config: Option<PathBuf>,

    /// Maximum age in days, overriding the configuration
    #[arg(short, long)]
    max_age_days: Option<u64>,

    /// Log level
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let policy = match (args.max_age_days, &args.config) {
        (Some(days), _) => Policy::from_days(days),
        (None, Some(path)) => load_config(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        (None, None) => Policy::default(),
    };

    info!(max_age_days = policy.max_age_days(), "Policy loaded");

    let content = std::fs::read_to_string(&args.manifest)
        .with_context(|| format!("Failed to read manifest {:?}", args.manifest))?;
    let manifest: PackageManifest =
        serde_json::from_str(&content).context("Failed to parse manifest JSON")?;

    let package = if manifest.name.is_empty() {
        "<unnamed>"
    } else {
        manifest.name.as_str()
    };

    match select_version(&manifest, &policy, Utc::now()) {
        Decision::Pass => {
            match manifest.latest() {
                Some(latest) => println!("pass: {} stays at {}", package, latest),
                None => println!("pass: {} has no latest tag to evaluate", package),
            }
            Ok(ExitCode::SUCCESS)
        }
        Decision::Rewrite { version } => {
            println!(
                "rewrite: {} latest {} -> {}",
                package,
                manifest.latest().unwrap_or("?"),
                version
            );
            Ok(ExitCode::SUCCESS)
        }
        Decision::Reject { threshold_days } => {
            println!(
                "reject: all stable versions of {} are newer than {} days",
                package, threshold_days
            );
            Ok(ExitCode::from(3))
        }
    }
}
