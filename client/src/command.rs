use tictactoe_common::games::tictactoe::{BOARD_SIZE, CellIndex, Difficulty};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(CellIndex),
    NewRound,
    ResetScores,
    ShowScores,
    SetDifficulty(Difficulty),
    ToggleMode,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Ok(None);
        };
        let argument = parts.next();

        if let Ok(cell) = word.parse::<usize>() {
            if !(1..=BOARD_SIZE).contains(&cell) {
                return Err(format!("Pick a cell between 1 and {}", BOARD_SIZE));
            }
            return Ok(Some(Command::Place(cell - 1)));
        }

        let command = match word.to_ascii_lowercase().as_str() {
            "n" | "new" => Command::NewRound,
            "r" | "reset" => Command::ResetScores,
            "s" | "scores" => Command::ShowScores,
            "m" | "mode" => Command::ToggleMode,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            "d" | "difficulty" => {
                let level = argument.ok_or("Usage: d <easy|medium|hard|unbeatable>")?;
                Command::SetDifficulty(level.parse()?)
            }
            other => return Err(format!("Unknown command '{}'. Type h for help.", other)),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_are_one_based() {
        assert_eq!(Command::parse("1\n"), Ok(Some(Command::Place(0))));
        assert_eq!(Command::parse(" 9 "), Ok(Some(Command::Place(8))));
        assert!(Command::parse("0").is_err());
        assert!(Command::parse("10").is_err());
    }

    #[test]
    fn test_words_and_blank_lines() {
        assert_eq!(Command::parse(""), Ok(None));
        assert_eq!(Command::parse("   \n"), Ok(None));
        assert_eq!(Command::parse("Q"), Ok(Some(Command::Quit)));
        assert_eq!(Command::parse("new"), Ok(Some(Command::NewRound)));
        assert!(Command::parse("jump").is_err());
    }

    #[test]
    fn test_difficulty_argument() {
        assert_eq!(
            Command::parse("d unbeatable"),
            Ok(Some(Command::SetDifficulty(Difficulty::Unbeatable)))
        );
        assert!(Command::parse("d").is_err());
        assert!(Command::parse("d brutal").is_err());
    }
}
