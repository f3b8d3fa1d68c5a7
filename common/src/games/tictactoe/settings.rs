use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::{Difficulty, GameMode, Player};

/// Everything the session needs to know about how a round is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Mark of the human in [`GameMode::VsComputer`]. X always opens.
    pub human_mark: Player,
}

impl GameSettings {
    pub fn ai_player(&self) -> Option<Player> {
        match self.mode {
            GameMode::VsComputer => Some(self.human_mark.opponent()),
            GameMode::TwoPlayers => None,
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::VsComputer,
            difficulty: Difficulty::default(),
            human_mark: Player::X,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        // Every combination of the closed enums is playable.
        Ok(())
    }
}
