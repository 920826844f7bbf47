//! Coin Dash entry point
//!
//! Reads keys from stdin (one or more per line, then Enter) and draws the
//! board as text, or as JSON lines with `--json`.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use tokio::sync::mpsc;

use coin_dash::platform::spawn_stdin_reader;
use coin_dash::renderer::{JsonRenderer, TextRenderer};
use coin_dash::sim::GameState;
use coin_dash::{GameConfig, RenderSink, StopReason, run};

/// Input queue depth between stdin and the game loop
const INPUT_QUEUE: usize = 64;

#[derive(Parser)]
#[command(author, version, about = "Collect coins, dodge bombs, avoid walls", long_about = None)]
struct Cli {
    /// JSON config file (missing fields use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed for board layout and coin spawns
    #[arg(long)]
    seed: Option<u64>,

    /// Override the tick interval in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Emit JSON snapshots instead of drawing the board
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(ms) = cli.tick_ms {
        config.tick_interval_ms = ms;
        config.validate()?;
    }

    let seed = cli.seed.unwrap_or_else(clock_seed);
    log::info!("Coin Dash starting (seed {seed})");

    let (tx, rx) = mpsc::channel(INPUT_QUEUE);
    let _reader = spawn_stdin_reader(tx);

    let sink: Box<dyn RenderSink + Send> = if cli.json {
        Box::new(JsonRenderer::new(std::io::stdout()))
    } else {
        Box::new(TextRenderer::new(std::io::stdout()))
    };

    let summary = run(GameState::new(config, seed), rx, sink).await;
    match summary.reason {
        StopReason::Quit => log::info!("Bye! Final score {}", summary.state.player.score),
        StopReason::InputClosed => log::info!("Input closed, final score {}", summary.state.player.score),
    }

    // The stdin reader may still be parked on a blocking read
    std::process::exit(0);
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
