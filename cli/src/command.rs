use std::str::FromStr;

use tictactoe_common::engine::tictactoe::{CELL_COUNT, Difficulty};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index, already range-checked.
    Place(usize),
    Restart,
    ResetScores,
    Scores,
    SetDifficulty(Difficulty),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(first) = words.next() else {
            return Err("Empty command".to_string());
        };

        if let Ok(cell) = first.parse::<usize>() {
            if !(1..=CELL_COUNT).contains(&cell) {
                return Err(format!("Cell must be between 1 and {}, got {}", CELL_COUNT, cell));
            }
            return Ok(Command::Place(cell - 1));
        }

        match first.to_ascii_lowercase().as_str() {
            "restart" | "r" => Ok(Command::Restart),
            "reset" => Ok(Command::ResetScores),
            "scores" | "s" => Ok(Command::Scores),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            "difficulty" | "d" => {
                let level = words
                    .next()
                    .ok_or_else(|| "Usage: difficulty easy|medium|hard".to_string())?;
                Ok(Command::SetDifficulty(level.parse()?))
            }
            other => Err(format!("Unknown command '{}', type 'help'", other)),
        }
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  1-9                 place your mark (cells numbered left to right, top to bottom)
  restart             start a new game, keep the scores
  reset               clear the scores
  scores              show the scores
  difficulty LEVEL    easy, medium or hard, applies to the next computer move
  help                show this text
  quit                leave";
