use serde::{Deserialize, Serialize};

use super::types::Outcome;

/// Results across games in one session. Restarting a game keeps the tally;
/// only `reset` clears it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    pub human_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
}

impl ScoreTally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::HumanWins => self.human_wins += 1,
            Outcome::ComputerWins => self.computer_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }
    }

    pub fn games_played(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
