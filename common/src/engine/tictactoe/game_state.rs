use serde::{Deserialize, Serialize};

use super::board::Board;
use super::types::{Mark, Outcome, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};
use crate::error::GameError;
use crate::session_rng::SessionRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayerMode {
    #[default]
    Human,
    Computer,
    Random,
}

impl FirstPlayerMode {
    pub fn resolve(&self, rng: &mut SessionRng) -> Mark {
        match self {
            FirstPlayerMode::Human => Mark::Human,
            FirstPlayerMode::Computer => Mark::Computer,
            FirstPlayerMode::Random => {
                if rng.random_bool() {
                    Mark::Human
                } else {
                    Mark::Computer
                }
            }
        }
    }
}

impl std::str::FromStr for FirstPlayerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(FirstPlayerMode::Human),
            "computer" => Ok(FirstPlayerMode::Computer),
            "random" => Ok(FirstPlayerMode::Random),
            other => Err(format!("Unknown first player '{}', expected human, computer or random", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: Outcome,
    pub last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(first_mark: Mark) -> Self {
        Self {
            board: Board::new(),
            current_mark: first_mark,
            status: Outcome::Ongoing,
            last_move: None,
        }
    }

    /// Applies a validated move and re-evaluates the outcome. The turn passes
    /// to the opponent only while the game is still running.
    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<Outcome, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        if mark != self.current_mark {
            return Err(GameError::NotYourTurn(mark));
        }

        self.board.place(index, mark)?;
        self.last_move = Some(index);
        self.status = evaluate(&self.board);

        if !self.status.is_over()
            && let Some(next) = mark.opponent()
        {
            self.current_mark = next;
        }

        Ok(self.status)
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.status {
            Outcome::HumanWins | Outcome::ComputerWins => check_win_with_line(&self.board),
            _ => None,
        }
    }
}
