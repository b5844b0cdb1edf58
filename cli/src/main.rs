mod command;
mod config;
mod game_loop;

use std::io;

use clap::Parser;
use tictactoe_common::engine::tictactoe::{Difficulty, FirstPlayerMode, TicTacToeSession};
use tictactoe_common::{SessionRng, log, logger};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a minimax opponent")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Config file, defaults to tictactoe_config.yaml next to the executable
    #[arg(long)]
    config: Option<String>,

    /// easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// human, computer or random
    #[arg(long)]
    first_player: Option<FirstPlayerMode>,

    /// Seed for random choices such as who opens
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_path = args.config.clone().unwrap_or_else(config::get_config_path);
    let config_manager = config::get_config_manager(&config_path);
    let mut cfg = config_manager.get_config()?;

    if let Some(difficulty) = args.difficulty {
        cfg.tictactoe.difficulty = difficulty;
    }
    if let Some(first_player) = args.first_player {
        cfg.tictactoe.first_player = first_player;
    }

    if args.save_config {
        config_manager.set_config(&cfg)?;
        log!("Settings saved to {}", config_path);
    }

    let rng = args.seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
    let mut session = TicTacToeSession::new(cfg.tictactoe, rng)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    game_loop::run(&mut session, cfg.show_scores, stdin.lock(), &mut stdout)?;

    Ok(())
}
