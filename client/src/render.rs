use tictactoe_common::games::tictactoe::{GameMode, GameResult, GameSession, Player, WinLine};

pub const HELP: &str = "\
Commands:
  1-9           place your mark (cells are numbered left to right, top to bottom)
  n             start a new round
  r             reset the scores
  s             show the scores
  d <level>     set difficulty: easy, medium, hard, unbeatable
  m             switch between playing the computer and two players
  h             show this help
  q             quit";

pub fn render_header(session: &GameSession) -> String {
    let settings = session.settings();
    match settings.mode {
        GameMode::VsComputer => format!(
            "Playing as {} against the computer ({})",
            settings.human_mark, settings.difficulty
        ),
        GameMode::TwoPlayers => format!("Playing {}", settings.mode),
    }
}

pub fn render_scores(session: &GameSession) -> String {
    let stats = session.statistics();
    let label = |player: Player| match session.ai_player() {
        Some(ai) if ai == player => format!("Computer ({})", player),
        Some(_) => format!("You ({})", player),
        None => player.to_string(),
    };
    format!(
        "{}: {}  {}: {}  Draws: {}  Games: {}",
        label(Player::X),
        stats.wins(Player::X),
        label(Player::O),
        stats.wins(Player::O),
        stats.draws,
        stats.games_played()
    )
}

pub fn render_turn(session: &GameSession) -> String {
    let player = session.state().current_player();
    match session.ai_player() {
        Some(_) => format!("Your move ({}): ", player),
        None => format!("{} to move: ", player),
    }
}

fn render_line(line: &WinLine) -> String {
    let cells: Vec<String> = line.iter().map(|index| (index + 1).to_string()).collect();
    cells.join("-")
}

pub fn render_result(session: &GameSession, result: &GameResult) -> String {
    match (result, session.ai_player()) {
        (GameResult::Win(winner, line), Some(ai)) if *winner == ai => {
            format!("The computer wins on {}.", render_line(line))
        }
        (GameResult::Win(_, line), Some(_)) => format!("You win on {}!", render_line(line)),
        (GameResult::Win(winner, line), None) => {
            format!("{} wins on {}!", winner, render_line(line))
        }
        (GameResult::Draw, _) => "It's a draw.".to_string(),
        (GameResult::NoResult, _) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::games::tictactoe::{Difficulty, GameSettings, Statistics};

    fn session(mode: GameMode) -> GameSession {
        GameSession::new(
            GameSettings {
                mode,
                difficulty: Difficulty::Hard,
                human_mark: Player::X,
            },
            Statistics { x_wins: 2, o_wins: 1, draws: 3 },
        )
    }

    #[test]
    fn test_scores_name_the_computer() {
        let text = render_scores(&session(GameMode::VsComputer));
        assert_eq!(text, "You (X): 2  Computer (O): 1  Draws: 3  Games: 6");
        let text = render_scores(&session(GameMode::TwoPlayers));
        assert_eq!(text, "X: 2  O: 1  Draws: 3  Games: 6");
    }

    #[test]
    fn test_result_messages() {
        let vs = session(GameMode::VsComputer);
        assert_eq!(
            render_result(&vs, &GameResult::Win(Player::O, [2, 4, 6])),
            "The computer wins on 3-5-7."
        );
        assert_eq!(
            render_result(&vs, &GameResult::Win(Player::X, [0, 1, 2])),
            "You win on 1-2-3!"
        );
        let local = session(GameMode::TwoPlayers);
        assert_eq!(
            render_result(&local, &GameResult::Win(Player::O, [0, 4, 8])),
            "O wins on 1-5-9!"
        );
        assert_eq!(render_result(&local, &GameResult::Draw), "It's a draw.");
    }

    #[test]
    fn test_header_mentions_difficulty() {
        let header = render_header(&session(GameMode::VsComputer));
        assert!(header.contains("hard"));
        assert!(header.contains("as X"));
    }
}
