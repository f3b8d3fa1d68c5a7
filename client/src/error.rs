use thiserror::Error;
use tictactoe_common::games::tictactoe::MoveError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Computer move task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("Computer could not move: {0}")]
    Move(#[from] MoveError),
}
