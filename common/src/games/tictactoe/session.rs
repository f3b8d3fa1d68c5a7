use crate::games::SessionRng;
use crate::{debug_log, log};
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::{MoveError, TicTacToeGameState};
use super::settings::GameSettings;
use super::statistics::Statistics;
use super::types::{CellIndex, Player};
use super::win_detector::GameResult;

/// Owns the round in play, the settings it runs under and the running score.
///
/// Humans and the computer both move through here so every finished round is
/// counted exactly once.
#[derive(Debug, Clone)]
pub struct GameSession {
    settings: GameSettings,
    state: TicTacToeGameState,
    statistics: Statistics,
}

impl GameSession {
    pub fn new(settings: GameSettings, statistics: Statistics) -> Self {
        Self {
            settings,
            state: TicTacToeGameState::new(),
            statistics,
        }
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn ai_player(&self) -> Option<Player> {
        self.settings.ai_player()
    }

    pub fn is_ai_turn(&self) -> bool {
        self.state.is_in_progress() && self.ai_player() == Some(self.state.current_player())
    }

    pub fn play_human_move(&mut self, index: CellIndex) -> Result<GameResult, MoveError> {
        if self.is_ai_turn() {
            return Err(MoveError::NotYourTurn);
        }
        self.place(index)
    }

    /// Snapshot for the move selector, `None` unless the computer is to move.
    pub fn bot_input(&self) -> Option<BotInput> {
        if !self.is_ai_turn() {
            return None;
        }
        Some(BotInput::from_game_state(&self.state, self.settings.difficulty))
    }

    pub fn apply_ai_move(&mut self, index: CellIndex) -> Result<GameResult, MoveError> {
        if !self.is_ai_turn() {
            return Err(MoveError::NotYourTurn);
        }
        self.place(index)
    }

    /// Selects and applies the computer's move in one step.
    pub fn play_ai_turn(&mut self, rng: &mut SessionRng) -> Result<(CellIndex, GameResult), MoveError> {
        let input = self.bot_input().ok_or(MoveError::NotYourTurn)?;
        let index = calculate_move(&input, rng).ok_or(MoveError::NoAvailableMove)?;
        let result = self.apply_ai_move(index)?;
        Ok((index, result))
    }

    pub fn new_round(&mut self) {
        self.state = TicTacToeGameState::new();
        debug_log!("New round: {} ({})", self.settings.mode, self.settings.difficulty);
    }

    pub fn reset_statistics(&mut self) {
        self.statistics.reset();
        log!("Statistics reset");
    }

    /// Applies new settings and starts a fresh round under them.
    pub fn update_settings(&mut self, settings: GameSettings) {
        self.settings = settings;
        self.new_round();
    }

    fn place(&mut self, index: CellIndex) -> Result<GameResult, MoveError> {
        let player = self.state.current_player();
        let result = self.state.place_mark(index)?;
        debug_log!("{} played cell {}", player, index + 1);

        if result.is_over() {
            self.statistics.record(&result);
            match result {
                GameResult::Win(winner, line) => log!("{} wins on {:?}", winner, line),
                GameResult::Draw => log!("Round drawn"),
                GameResult::NoResult => {}
            }
        }
        Ok(result)
    }
}
