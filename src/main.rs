//! noip-update - No-IP dynamic DNS update client.

use anyhow::Context;
use clap::Parser;
use noip_update::config::{Config, Target};
use noip_update::detector::IpDetector;
use noip_update::error::DdnsError;
use noip_update::providers::NoIpProvider;
use noip_update::updater::Updater;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noip-update")]
#[command(about = "Bind a No-IP hostname to the current public address")]
#[command(version)]
struct Cli {
    /// The hostname to update
    #[arg(long)]
    hostname: String,

    /// Use this IP address instead of detecting it
    #[arg(long)]
    ip: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Settings file to load and whether the user named it explicitly.
fn get_config_path(cli_path: Option<PathBuf>) -> (PathBuf, bool) {
    if let Some(path) = cli_path {
        return (path, true);
    }

    let candidates = [
        dirs::config_dir().map(|p| p.join("noip-update/config.toml")),
        Some(PathBuf::from("/etc/noip-update/config.toml")),
    ];

    for candidate in candidates.into_iter().flatten() {
        if candidate.exists() {
            return (candidate, false);
        }
    }

    // Return default even if it doesn't exist
    let path = Config::default_path().unwrap_or_else(|_| PathBuf::from("config.toml"));
    (path, false)
}

/// Lines to print for a failed run: provider rejections go to stdout,
/// everything else to stderr.
#[derive(Debug, PartialEq, Eq)]
enum Report {
    Stdout(String),
    Stderr(String),
}

fn report(e: &anyhow::Error) -> Report {
    match e.downcast_ref::<DdnsError>() {
        Some(DdnsError::Provider { message, .. }) => Report::Stdout(format!("Error: {}", message)),
        _ => Report::Stderr(format!("{:#}", e)),
    }
}

fn exit_status(result: &anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = run(cli).await;
    if let Err(e) = &result {
        match report(e) {
            Report::Stdout(line) => println!("{}", line),
            Report::Stderr(line) => eprintln!("{}", line),
        }
    }
    ExitCode::from(exit_status(&result))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let (config_path, explicit) = get_config_path(cli.config);
    if explicit && !config_path.exists() {
        anyhow::bail!("Config file {} does not exist", config_path.display());
    }
    let config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    let target = Target::new(cli.hostname, cli.ip);
    let detector = IpDetector::with_service(config.ip_service.clone());
    let provider = NoIpProvider::from_config(&config)?;

    let response = Updater::new(&detector, &provider).run(&target).await?;
    tracing::info!("{}: {}", target.hostname, response);

    Ok(())
}
