use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use namecheap_ddns::{Config, DdnsUpdater, NamecheapClient};
use serde_json::json;

#[derive(Debug, Parser)]
#[command(version, about = "Namecheap dynamic DNS updater")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Only update the profile with this name
    #[arg(short, long)]
    profile: Option<String>,

    /// Run a single round even if an update interval is configured
    #[arg(long)]
    once: bool,

    /// Print each result as a JSON line
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = Config::load(&args.config)?;
    log::info!(
        "Loaded {} profile(s) from {}",
        config.profiles.len(),
        args.config.display()
    );
    let timeout = Duration::from_secs(config.timeout_secs);
    let client = match config.endpoint.as_deref() {
        Some(endpoint) => NamecheapClient::with_base_url(endpoint, timeout)?,
        None => NamecheapClient::new(timeout)?,
    };

    let updater = DdnsUpdater::new(config, client);
    updater
        .run(args.profile.as_deref(), args.once, |profile, report| {
            if args.json {
                let line = json!({
                    "profile": profile.name,
                    "message": report.message(),
                    "report": report,
                });
                println!("{}", line);
            } else {
                println!("{}: {}", profile.name, report);
            }
        })
        .await
}
