use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::Player;
use super::win_detector::GameResult;

/// Running score across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub x_wins: u32,
    #[serde(default)]
    pub o_wins: u32,
    #[serde(default)]
    pub draws: u32,
}

impl Statistics {
    pub fn games_played(&self) -> u32 {
        self.x_wins
            .saturating_add(self.o_wins)
            .saturating_add(self.draws)
    }

    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Counts a finished round. `NoResult` is ignored. Counters stop at `u32::MAX`.
    pub fn record(&mut self, result: &GameResult) {
        let counter = match result {
            GameResult::Win(Player::X, _) => &mut self.x_wins,
            GameResult::Win(Player::O, _) => &mut self.o_wins,
            GameResult::Draw => &mut self.draws,
            GameResult::NoResult => return,
        };
        *counter = counter.saturating_add(1);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Validate for Statistics {
    fn validate(&self) -> Result<(), String> {
        // Every counter value is reachable; totals saturate in `games_played`.
        Ok(())
    }
}
