//! Headless table tennis runner
//!
//! Plays matches against the AI with a scripted pointer, no rendering.
//! Handy for soak runs and for tuning difficulty.

mod autoplay;

use std::fs;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use pingpong_core::{run, Command, Config, Side, SimulationState};

#[derive(Parser)]
#[command(name = "pingpong")]
#[command(about = "Run table tennis matches headlessly", long_about = None)]
struct Cli {
    /// RNG seed (same seed and flags give the same run)
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Number of matches to play
    #[arg(long, default_value_t = 1)]
    matches: u32,

    /// Give up after this many steps
    #[arg(long, default_value_t = 500_000)]
    max_steps: u64,

    /// JSON config file; missing fields take their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override AI difficulty (0.0 to 1.0)
    #[arg(long)]
    difficulty: Option<f32>,

    /// Print the final snapshot as JSON
    #[arg(long, default_value = "false")]
    json: bool,
}

fn load_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    Ok(config)
}

#[derive(Debug, Default)]
struct Tally {
    player: u32,
    ai: u32,
}

impl Tally {
    fn played(&self) -> u32 {
        self.player + self.ai
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::new(),
    };
    if let Some(difficulty) = cli.difficulty {
        config.ai_difficulty = difficulty;
    }

    let mut sim = SimulationState::new(config, cli.seed).context("Invalid simulation config")?;
    let pointer = sim.pointer_handle();
    let mut tally = Tally::default();

    let steps = run(&mut sim, |state| {
        if let Some(winner) = state.match_state.winner() {
            match winner {
                Side::Player => tally.player += 1,
                Side::Ai => tally.ai += 1,
            }
            info!(
                "Match {} to {:?}, {}-{}",
                tally.played(),
                winner,
                state.match_state.player_score(),
                state.match_state.ai_score()
            );
            if tally.played() >= cli.matches {
                return ControlFlow::Break(());
            }
            state.push_command(Command::ResetScore);
        }
        if state.tick >= cli.max_steps {
            log::warn!("Step limit {} reached", cli.max_steps);
            return ControlFlow::Break(());
        }
        pointer.set(autoplay::scripted_pointer(state));
        ControlFlow::Continue(())
    });

    info!(
        "Finished after {} steps: player won {}, AI won {}",
        steps, tally.player, tally.ai
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);
    } else {
        println!(
            "matches: {}  player: {}  ai: {}  steps: {}",
            tally.played(),
            tally.player,
            tally.ai,
            steps
        );
    }

    Ok(())
}
