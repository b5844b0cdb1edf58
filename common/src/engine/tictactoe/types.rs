use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Rows, then columns, then diagonals. Scan order is part of the evaluator's
/// contract.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    Human,
    Computer,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::Human => Some(Mark::Computer),
            Mark::Computer => Some(Mark::Human),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::Human => 'X',
            Mark::Computer => 'O',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    HumanWins,
    ComputerWins,
    Draw,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        *self != Outcome::Ongoing
    }

    pub fn from_winner(mark: Mark) -> Self {
        match mark {
            Mark::Human => Outcome::HumanWins,
            Mark::Computer => Outcome::ComputerWins,
            Mark::Empty => Outcome::Ongoing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }
}
