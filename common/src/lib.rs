pub mod config;
pub mod games;
pub mod logger;

pub use games::SessionRng;
pub use games::tictactoe::{
    BotInput, Board, CellIndex, Difficulty, GameMode, GameResult, GameSession, GameSettings,
    MoveError, Player, Statistics, TicTacToeGameState, WinLine, calculate_move, evaluate,
    select_move,
};
