pub mod config;
pub mod engine;
pub mod error;
pub mod logger;
pub mod session_rng;

pub use error::{ConfigError, GameError};
pub use session_rng::SessionRng;
