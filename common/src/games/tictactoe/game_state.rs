use thiserror::Error;

use super::board::Board;
use super::types::{BOARD_SIZE, Cell, CellIndex, Player};
use super::win_detector::{GameResult, evaluate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Game is already over")]
    GameOver,
    #[error("Cell {} is out of bounds", .0 + 1)]
    OutOfBounds(CellIndex),
    #[error("Cell {} is already marked", .0 + 1)]
    CellOccupied(CellIndex),
    #[error("Not your turn")]
    NotYourTurn,
    #[error("No move available")]
    NoAvailableMove,
}

/// One round: the board, whose turn it is and how it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    current_player: Player,
    status: GameResult,
    last_move: Option<CellIndex>,
    history: Vec<CellIndex>,
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameResult::NoResult,
            last_move: None,
            history: Vec::with_capacity(BOARD_SIZE),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameResult {
        self.status
    }

    pub fn is_in_progress(&self) -> bool {
        !self.status.is_over()
    }

    pub fn last_move(&self) -> Option<CellIndex> {
        self.last_move
    }

    /// Cells in the order they were played. X played the even positions.
    pub fn history(&self) -> &[CellIndex] {
        &self.history
    }

    /// Places the current player's mark and re-evaluates the board.
    ///
    /// The turn passes to the opponent only while the game goes on.
    pub fn place_mark(&mut self, index: CellIndex) -> Result<GameResult, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if index >= BOARD_SIZE {
            return Err(MoveError::OutOfBounds(index));
        }
        if !self.board.is_empty_at(index) {
            return Err(MoveError::CellOccupied(index));
        }

        self.board.set(index, Cell::Taken(self.current_player));
        self.last_move = Some(index);
        self.history.push(index);

        self.status = evaluate(&self.board);
        if !self.status.is_over() {
            self.current_player = self.current_player.opponent();
        }

        Ok(self.status)
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}
