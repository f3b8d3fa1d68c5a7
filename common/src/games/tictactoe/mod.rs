mod board;
mod bot_controller;
mod game_state;
mod session;
mod settings;
mod statistics;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{
    BotInput, WIN_SCORE, calculate_minimax_move, calculate_move, score_moves, select_move,
};
pub use game_state::{MoveError, TicTacToeGameState};
pub use session::GameSession;
pub use settings::GameSettings;
pub use statistics::Statistics;
pub use types::{BOARD_SIZE, Cell, CellIndex, Difficulty, GameMode, Player};
pub use win_detector::{GameResult, WIN_LINES, WinLine, check_win, evaluate};
