use serde::{Deserialize, Serialize};

use super::bot::Difficulty;
use super::game_state::FirstPlayerMode;
use crate::config::Validate;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeSettings {
    pub difficulty: Difficulty,
    #[serde(default)]
    pub first_player: FirstPlayerMode,
}

impl TicTacToeSettings {
    pub fn max_depth(&self) -> usize {
        self.difficulty.max_depth()
    }
}

/// Every difficulty and first-player mode is playable, so a settings block
/// that deserialized is valid.
impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
