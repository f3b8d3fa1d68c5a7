use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Row-major index into the 3x3 board, `0..9`.
pub type CellIndex = usize;

pub const BOARD_SIZE: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Player {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Player::X),
            "o" => Ok(Player::O),
            other => Err(format!("Unknown mark '{}', expected x or o", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Strength of the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Unbeatable,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Unbeatable,
    ];

    /// Deepest ply the search explores before scoring a position as neutral.
    ///
    /// `None` searches to terminal positions. Easy never searches, so it has no limit either.
    pub fn depth_limit(self) -> Option<usize> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(4),
            Difficulty::Hard => Some(6),
            Difficulty::Unbeatable => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Unbeatable => "unbeatable",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown difficulty '{}', expected one of: easy, medium, hard, unbeatable",
                    s.trim()
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    VsComputer,
    TwoPlayers,
}

impl GameMode {
    pub fn toggled(self) -> Self {
        match self {
            GameMode::VsComputer => GameMode::TwoPlayers,
            GameMode::TwoPlayers => GameMode::VsComputer,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::VsComputer => f.write_str("vs computer"),
            GameMode::TwoPlayers => f.write_str("two players"),
        }
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "computer" | "ai" | "vs-computer" => Ok(GameMode::VsComputer),
            "two-players" | "pvp" | "local" => Ok(GameMode::TwoPlayers),
            other => Err(format!(
                "Unknown mode '{}', expected computer or two-players",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parses_case_insensitively() {
        assert_eq!("Unbeatable".parse::<Difficulty>(), Ok(Difficulty::Unbeatable));
        assert_eq!(" easy ".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_depth_limits() {
        assert_eq!(Difficulty::Medium.depth_limit(), Some(4));
        assert_eq!(Difficulty::Hard.depth_limit(), Some(6));
        assert_eq!(Difficulty::Unbeatable.depth_limit(), None);
    }

    #[test]
    fn test_player_and_mode_parsing() {
        assert_eq!("O".parse::<Player>(), Ok(Player::O));
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!("pvp".parse::<GameMode>(), Ok(GameMode::TwoPlayers));
        assert_eq!(GameMode::TwoPlayers.toggled(), GameMode::VsComputer);
    }
}
