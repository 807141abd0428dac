use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "usc156-extensions",
    version,
    about = "Patent term extensions granted under 35 USC 156, as JSON"
)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let _cli = Cli::parse();
    let t0 = Instant::now();

    let records = usc156_extensions::fetch_extensions()
        .await
        .context("Failed to scrape patent term extensions")?;

    println!("{}", serde_json::to_string_pretty(&records)?);
    info!(
        "Extracted {} extensions in {:.1}s",
        records.len(),
        t0.elapsed().as_secs_f64()
    );
    Ok(())
}
