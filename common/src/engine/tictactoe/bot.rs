use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::board::{Board, get_available_moves};
use super::game_state::TicTacToeGameState;
use super::types::{CELL_COUNT, Mark, Outcome};
use super::win_detector::evaluate;
use crate::error::GameError;
use crate::log;

pub const WIN_SCORE: i32 = 10;

/// Deep enough to play every game out on a 3x3 board.
pub const FULL_SEARCH_DEPTH: usize = CELL_COUNT;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Plies the move selector may look ahead.
    pub fn max_depth(&self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 6,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty '{}', expected easy, medium or hard", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    /// `None` when the search bottomed out without choosing a move.
    pub best_move: Option<usize>,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board,
            current_mark: state.current_mark,
        }
    }
}

/// Picks a cell for `input.current_mark` with a search limited to `max_depth`
/// plies.
pub fn calculate_move(max_depth: usize, input: BotInput) -> Result<usize, GameError> {
    let mut board = input.board;
    let result = select_move(&mut board, input.current_mark, 0, max_depth)?;

    let Some(best_move) = result.best_move else {
        return Err(GameError::InvariantViolation(format!(
            "no move to select: outcome {:?}, depth limit {}",
            evaluate(&board),
            max_depth
        )));
    };

    log!(
        "[bot] {:?} picks cell {} (score {}, depth limit {})",
        input.current_mark,
        best_move,
        result.score,
        max_depth
    );
    Ok(best_move)
}

/// Minimax from the computer's point of view.
///
/// Terminal positions score `WIN_SCORE - depth` for a computer win and
/// `depth - WIN_SCORE` for a human win, so nearer wins are preferred and nearer
/// losses avoided. Reaching `max_depth` on an unfinished board scores 0 with
/// no positional heuristic, which is what makes shallow limits play weakly.
///
/// Ties keep the first move found in ascending cell order. The board is
/// returned unchanged.
pub fn select_move(
    board: &mut Board,
    player: Mark,
    depth: usize,
    max_depth: usize,
) -> Result<SearchResult, GameError> {
    let depth_score = depth as i32;
    match evaluate(board) {
        Outcome::HumanWins => return Ok(SearchResult::leaf(depth_score - WIN_SCORE)),
        Outcome::ComputerWins => return Ok(SearchResult::leaf(WIN_SCORE - depth_score)),
        Outcome::Draw => return Ok(SearchResult::leaf(0)),
        Outcome::Ongoing => {}
    }

    if depth >= max_depth {
        return Ok(SearchResult::leaf(0));
    }

    let Some(opponent) = player.opponent() else {
        return Err(GameError::InvariantViolation(
            "search requested for the empty mark".to_string(),
        ));
    };

    let maximizing = player == Mark::Computer;
    let mut best: Option<SearchResult> = None;

    for index in get_available_moves(board) {
        let score = board
            .with_mark(index, player, |board| {
                select_move(board, opponent, depth + 1, max_depth)
            })??
            .score;

        let improves = match best {
            None => true,
            Some(current) if maximizing => score > current.score,
            Some(current) => score < current.score,
        };
        if improves {
            best = Some(SearchResult {
                score,
                best_move: Some(index),
            });
        }
    }

    best.ok_or_else(|| {
        GameError::InvariantViolation("ongoing board has no empty cell".to_string())
    })
}
