use std::fmt;

use super::types::{CELL_COUNT, Mark};
use crate::error::GameError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), GameError> {
        if mark == Mark::Empty {
            return Err(GameError::invalid_move(index, "cannot place an empty mark"));
        }
        match self.get(index) {
            None => Err(GameError::invalid_move(index, "position out of bounds")),
            Some(Mark::Empty) => {
                self.cells[index] = mark;
                Ok(())
            }
            Some(_) => Err(GameError::invalid_move(index, "cell is already marked")),
        }
    }

    /// Places `mark` at `index`, runs `f`, then erases the mark again, so the
    /// board leaves this call exactly as it entered. Rejects the same moves as
    /// `place` without calling `f`.
    pub fn with_mark<R>(
        &mut self,
        index: usize,
        mark: Mark,
        f: impl FnOnce(&mut Board) -> R,
    ) -> Result<R, GameError> {
        self.place(index, mark)?;
        let result = f(self);
        self.cells[index] = Mark::Empty;
        Ok(result)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Mark::Empty).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(3).enumerate() {
            if row_index > 0 {
                writeln!(f, "---+---+---")?;
            }
            writeln!(f, " {} | {} | {} ", row[0].symbol(), row[1].symbol(), row[2].symbol())?;
        }
        Ok(())
    }
}

/// Empty cells in ascending index order.
pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}
