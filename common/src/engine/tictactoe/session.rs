use super::bot::{BotInput, calculate_move};
use super::game_state::TicTacToeGameState;
use super::score::ScoreTally;
use super::settings::TicTacToeSettings;
use super::types::{Mark, Outcome};
use crate::error::GameError;
use crate::log;
use crate::session_rng::SessionRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub human_move: usize,
    pub computer_move: Option<usize>,
    pub outcome: Outcome,
}

/// One human against the computer over any number of games. Drives the
/// evaluate / select / apply cycle and keeps the score tally.
pub struct TicTacToeSession {
    settings: TicTacToeSettings,
    game_state: TicTacToeGameState,
    tally: ScoreTally,
    rng: SessionRng,
    opening_move: Option<usize>,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSettings, mut rng: SessionRng) -> Result<Self, GameError> {
        let seed = rng.seed();
        let first_mark = settings.first_player.resolve(&mut rng);
        let mut session = Self {
            settings,
            game_state: TicTacToeGameState::new(first_mark),
            tally: ScoreTally::default(),
            rng,
            opening_move: None,
        };
        log!(
            "[session] seed {}, difficulty {}, {:?} opens",
            seed,
            settings.difficulty,
            first_mark
        );
        session.opening_move = session.play_computer_turn_if_due()?;
        Ok(session)
    }

    pub fn game_state(&self) -> &TicTacToeGameState {
        &self.game_state
    }

    pub fn tally(&self) -> ScoreTally {
        self.tally
    }

    pub fn settings(&self) -> TicTacToeSettings {
        self.settings
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Cell the computer took when it opened the current game.
    pub fn opening_move(&self) -> Option<usize> {
        self.opening_move
    }

    pub fn set_settings(&mut self, settings: TicTacToeSettings) {
        self.settings = settings;
    }

    /// Places the human mark and, if the game goes on, answers with exactly
    /// one computer move.
    pub fn play_human_move(&mut self, index: usize) -> Result<TurnReport, GameError> {
        let mut outcome = self.game_state.place_mark(Mark::Human, index)?;
        let mut computer_move = None;

        if outcome.is_over() {
            self.finish_game(outcome);
        } else {
            computer_move = self.play_computer_turn_if_due()?;
            outcome = self.game_state.status;
        }

        Ok(TurnReport {
            human_move: index,
            computer_move,
            outcome,
        })
    }

    /// Fresh board, same tally. The first player is resolved again.
    pub fn restart(&mut self) -> Result<(), GameError> {
        let first_mark = self.settings.first_player.resolve(&mut self.rng);
        self.game_state = TicTacToeGameState::new(first_mark);
        log!("[session] new game, {:?} opens", first_mark);
        self.opening_move = self.play_computer_turn_if_due()?;
        Ok(())
    }

    pub fn reset_scores(&mut self) {
        self.tally.reset();
        log!("[session] score tally reset");
    }

    fn play_computer_turn_if_due(&mut self) -> Result<Option<usize>, GameError> {
        if self.game_state.is_over() || self.game_state.current_mark != Mark::Computer {
            return Ok(None);
        }

        let input = BotInput::from_game_state(&self.game_state);
        let index = calculate_move(self.settings.max_depth(), input)?;
        let outcome = self.game_state.place_mark(Mark::Computer, index)?;

        if outcome.is_over() {
            self.finish_game(outcome);
        }
        Ok(Some(index))
    }

    fn finish_game(&mut self, outcome: Outcome) {
        self.tally.record(outcome);
        log!(
            "[session] game over: {:?} (human {}, computer {}, draws {})",
            outcome,
            self.tally.human_wins,
            self.tally.computer_wins,
            self.tally.draws
        );
    }
}
