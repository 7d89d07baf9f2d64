use anyhow::{Context, Result};
use clap::Parser;
use poke_battle::app::game::Game;
use poke_battle::app::presenter::{OutputFormat, Presenter};
use poke_battle::app::prompter::Prompter;
use poke_battle::{logging, Catalog, GameConfig, Outcome, Side};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_CONFIG_PATH: &str = "config.ron";

/// Pick four creatures and battle a rival trainer.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// RON config file. Defaults to ./config.ron when it exists.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Creature catalog (CSV). Overrides the config file.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Seed for damage rolls and the rival's team.
    #[arg(long)]
    seed: Option<u64>,

    /// Do not pause between rounds.
    #[arg(long)]
    no_delay: bool,

    /// Print round reports as JSON lines instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    logging::init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let catalog = Catalog::load(&config.catalog_path)
        .with_context(|| format!("failed to load catalog {}", config.catalog_path.display()))?;

    let delay = Duration::from_millis(config.round_delay_ms);
    let format = if args.json { OutputFormat::Json } else { OutputFormat::Text };
    let presenter = Presenter::new(delay, format);
    let prompter = Prompter::new(io::stdin().lock(), io::stdout());

    let mut game = Game::new(config, catalog, prompter, presenter);
    let outcome = game.run().context("the match was aborted")?;

    match outcome {
        Outcome::Winner(Side::Challenger) => tracing::info!("challenger won"),
        Outcome::Winner(Side::Opponent) => tracing::info!("opponent won"),
        Outcome::Draw => tracing::info!("draw"),
    }
    Ok(())
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => GameConfig::load(Path::new(DEFAULT_CONFIG_PATH))?,
        None => GameConfig::default(),
    };

    if let Some(catalog) = &args.catalog {
        config.catalog_path = catalog.clone();
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.no_delay {
        config.round_delay_ms = 0;
    }
    Ok(config)
}
