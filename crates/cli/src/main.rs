use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::info;
use whale_radar_core::{AlertSender, ConfigLoader, RadarConfig};
use whale_radar_detector::Scanner;
use whale_radar_notify::{LogSender, NtfySender};
use whale_radar_upbit::UpbitClient;

#[derive(Parser)]
#[command(name = "whale-radar")]
#[command(about = "Whale-buying detector for Upbit spot markets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one detection pass and exit
    Scan {
        /// Config file path
        #[arg(short, long, default_value = "config/Config.toml")]
        config: String,
    },
    /// Run detection passes on an interval until interrupted
    Watch {
        /// Config file path
        #[arg(short, long, default_value = "config/Config.toml")]
        config: String,
        /// Seconds between passes (overrides config)
        #[arg(long)]
        interval: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scan { config } => {
            let config = ConfigLoader::load_from(Some(&config))?;
            let scanner = build_scanner(config)?;
            let report = scanner.run().await;
            info!(
                scanned = report.markets_scanned,
                failed = report.markets_failed,
                abandoned = report.markets_abandoned,
                alerted = report.alert.is_some(),
                "scan complete"
            );
        }
        Commands::Watch { config, interval } => {
            let mut config = ConfigLoader::load_from(Some(&config))?;
            if let Some(secs) = interval {
                config.interval_secs = secs;
            }
            let pause = config.interval();
            let scanner = build_scanner(config)?;
            info!(interval_secs = pause.as_secs(), "watching");
            loop {
                let report = scanner.run().await;
                info!(
                    scanned = report.markets_scanned,
                    failed = report.markets_failed,
                    alerted = report.alert.is_some(),
                    "pass complete"
                );
                tokio::time::sleep(pause).await;
            }
        }
    }
    Ok(())
}

fn build_scanner(config: RadarConfig) -> Result<Scanner> {
    let provider = Arc::new(UpbitClient::new(config.upbit.base_url.clone())?);
    let sender: Arc<dyn AlertSender> = match config.ntfy.topic.as_deref() {
        Some(topic) => Arc::new(NtfySender::new(&config.ntfy.url, topic)?),
        None => Arc::new(LogSender),
    };
    Ok(Scanner::new(config, provider, sender))
}
