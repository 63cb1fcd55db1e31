use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use term_games::config::AppConfig;
use term_games::controller::Controller;
use term_games::modes::{ColorWarMode, PigMode, SnakeMode};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "term-games")]
#[command(version, about = "Color War, Pig and Snake in the terminal")]
struct Cli {
    /// Which game to play
    #[arg(long, default_value = "color-war")]
    game: Game,

    /// Board or field size (Color War and Snake)
    #[arg(long)]
    size: Option<usize>,

    /// Who plays seat 2 in Color War
    #[arg(long)]
    opponent: Option<Controller>,

    /// Pig seats in order, e.g. "human,bot,bot"
    #[arg(long, value_delimiter = ',')]
    players: Option<Vec<Controller>>,

    /// Fixed RNG seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with per-game settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs here (filtered by RUST_LOG); the terminal belongs to the game
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Game {
    /// Flood the board with your color
    ColorWar,
    /// Dice game to 100 points
    Pig,
    /// Classic snake
    Snake,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn build_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    if let Some(size) = cli.size {
        match cli.game {
            Game::ColorWar => config.color_war.board_size = size,
            Game::Snake => config.snake.field_size = size,
            Game::Pig => {}
        }
    }
    if let Some(opponent) = cli.opponent {
        config.color_war.player_two = opponent;
    }
    if let Some(players) = &cli.players {
        config.pig.seats = players.clone();
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = build_config(&cli)?;
    tracing::info!(seed = ?config.seed, "starting");

    // Dispatch to the selected game
    match cli.game {
        Game::ColorWar => {
            let mut mode = ColorWarMode::new(config.color_war, config.seed);
            mode.run().await?;
        }
        Game::Pig => {
            let mut mode = PigMode::new(config.pig, config.seed)?;
            mode.run().await?;
        }
        Game::Snake => {
            let mut mode = SnakeMode::new(config.snake, config.seed);
            mode.run().await?;
        }
    }

    Ok(())
}
