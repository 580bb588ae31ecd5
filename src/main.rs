mod batch;
mod cli;
mod report;

use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use formscan_core::FetchConfig;
use formscan_fetcher::HttpFetcher;

use crate::batch::BatchRunner;
use crate::cli::Cli;
use crate::report::ConsoleReporter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout is reserved for the report output.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(path) = cli.file.filter(|f| !f.is_empty()) else {
        println!("Please provide a URL list file with the -f flag");
        std::process::exit(1);
    };

    let file = match File::open(&path) {
        Ok(f) => f,
        Err(e) => {
            println!("Error opening {}: {}", path, e);
            std::process::exit(1);
        }
    };

    let mut config = FetchConfig {
        timeout: Duration::from_secs(cli.timeout),
        ..FetchConfig::default()
    };
    if let Some(ua) = cli.user_agent {
        config.user_agent = ua;
    }

    let fetcher = match HttpFetcher::new(config) {
        Ok(f) => f,
        Err(e) => {
            println!("Error building HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    info!(file = %path, "starting batch scan");

    let mut runner = BatchRunner::new(fetcher, ConsoleReporter);
    runner.run(BufReader::new(file)).await;

    Ok(())
}
