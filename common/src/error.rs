use crate::engine::tictactoe::Mark;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid move at cell {index}: {reason}")]
    InvalidMove { index: usize, reason: String },

    #[error("game is already over")]
    GameOver,

    #[error("it is not {0:?}'s turn")]
    NotYourTurn(Mark),

    /// A caller broke the engine's contract, e.g. asked for a move on a
    /// finished board. Not recoverable at runtime.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl GameError {
    pub fn invalid_move(index: usize, reason: &str) -> Self {
        GameError::InvalidMove {
            index,
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(serde_yaml_ng::Error),

    #[error("failed to deserialize config: {0}")]
    Deserialize(serde_yaml_ng::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
