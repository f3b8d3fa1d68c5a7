mod command;
mod config;
mod error;
mod render;
mod runner;

use clap::Parser;
use std::path::PathBuf;
use tictactoe_common::games::tictactoe::{Difficulty, GameMode, GameSession, Player};
use tictactoe_common::{SessionRng, debug_log, log, logger};
use tokio::io::BufReader;

use config::{AiDelayConfig, ClientConfig, Storage};
use runner::Runner;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against a friend or the computer")]
struct Args {
    /// Settings file, defaults to tictactoe_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,
    /// Score file, defaults to tictactoe_stats.yaml next to the executable
    #[arg(long)]
    stats: Option<PathBuf>,
    /// easy, medium, hard or unbeatable
    #[arg(long)]
    difficulty: Option<Difficulty>,
    /// computer or two-players
    #[arg(long)]
    mode: Option<GameMode>,
    /// Your mark against the computer, x or o. X always moves first.
    #[arg(long)]
    mark: Option<Player>,
    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,
    /// Reveal the computer's moves immediately
    #[arg(long)]
    no_delay: bool,
    #[arg(long)]
    verbose: bool,
    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_to(&self, config: &mut ClientConfig) -> bool {
        let before = *config;
        if let Some(difficulty) = self.difficulty {
            config.game.difficulty = difficulty;
        }
        if let Some(mode) = self.mode {
            config.game.mode = mode;
        }
        if let Some(mark) = self.mark {
            config.game.human_mark = mark;
        }
        before != *config
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let storage = Storage::from_files(args.config.clone(), args.stats.clone());

    let mut client_config = storage.settings.get_config().unwrap_or_else(|e| {
        log!("Ignoring unreadable settings, using defaults: {}", e);
        ClientConfig::default()
    });
    if args.apply_to(&mut client_config)
        && let Err(e) = storage.settings.set_config(&client_config)
    {
        log!("Failed to save settings: {}", e);
    }

    let statistics = storage.statistics.get_config().unwrap_or_else(|e| {
        log!("Ignoring unreadable statistics, starting from zero: {}", e);
        Default::default()
    });

    let rng = SessionRng::from_optional_seed(args.seed);
    debug_log!("Session seed: {}", rng.seed());

    let mut run_config = client_config;
    if args.no_delay {
        run_config.ai_delay = AiDelayConfig::none();
    }

    let session = GameSession::new(client_config.game, statistics);
    let mut runner = Runner::new(
        session,
        rng,
        run_config,
        storage,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    );
    runner.run().await?;

    Ok(())
}
