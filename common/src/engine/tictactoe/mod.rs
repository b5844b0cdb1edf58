mod board;
mod bot;
mod game_state;
mod score;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot::{BotInput, Difficulty, FULL_SEARCH_DEPTH, SearchResult, WIN_SCORE, calculate_move, select_move};
pub use game_state::{FirstPlayerMode, TicTacToeGameState};
pub use score::ScoreTally;
pub use session::{TicTacToeSession, TurnReport};
pub use settings::TicTacToeSettings;
pub use types::{BOARD_SIZE, CELL_COUNT, Mark, Outcome, WINNING_LINES, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate};
