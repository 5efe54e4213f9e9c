use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gate_snake::game::{GameConfig, STAGE_COUNT};
use gate_snake::modes::PlayMode;

#[derive(Parser)]
#[command(name = "gate_snake")]
#[command(version, about = "Stage-based snake with gates, poison and missions")]
struct Cli {
    /// Grid height, border included
    #[arg(long, default_value = "21")]
    height: usize,

    /// Grid width, border included
    #[arg(long, default_value = "41")]
    width: usize,

    /// Milliseconds between ticks
    #[arg(long, default_value = "250")]
    tick_ms: u64,

    /// Seed for gate and item placement
    #[arg(long)]
    seed: Option<u64>,

    /// Stage to start from (1-based)
    #[arg(
        long,
        default_value = "1",
        value_parser = clap::value_parser!(u8).range(1..=STAGE_COUNT as i64)
    )]
    stage: u8,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// The terminal belongs to the game, so logs only go to a file when asked
fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to initialize logger")?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_file.as_ref())?;

    // Create game configuration from CLI arguments
    let config = GameConfig {
        tick_interval_ms: cli.tick_ms,
        seed: cli.seed,
        ..GameConfig::new(cli.width, cli.height)
    };

    let mut play = PlayMode::new(config, usize::from(cli.stage) - 1)?;
    play.run().await?;

    Ok(())
}
