use super::board::Board;
use super::types::{Cell, CellIndex, Player};

/// Three cells that win when held by one player.
pub type WinLine = [CellIndex; 3];

/// Rows, then columns, then diagonals. Scan order decides which line is reported.
pub const WIN_LINES: [WinLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    NoResult,
    Win(Player, WinLine),
    Draw,
}

impl GameResult {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::NoResult)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Win(player, _) => Some(*player),
            _ => None,
        }
    }
}

/// First completed line in scan order, if any.
pub fn check_win(board: &Board) -> Option<(Player, WinLine)> {
    WIN_LINES.iter().find_map(|&line| {
        match line.map(|index| board.get(index)) {
            [Cell::Taken(player), b, c] if b == Cell::Taken(player) && c == Cell::Taken(player) => {
                Some((player, line))
            }
            _ => None,
        }
    })
}

pub fn evaluate(board: &Board) -> GameResult {
    if let Some((player, line)) = check_win(board) {
        return GameResult::Win(player, line);
    }
    if board.is_full() {
        GameResult::Draw
    } else {
        GameResult::NoResult
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_every_line_is_detected_for_both_players() {
        for player in [Player::X, Player::O] {
            for line in WIN_LINES {
                let mut b = Board::new();
                for index in line {
                    b = b.with_move(index, player);
                }
                assert_eq!(evaluate(&b), GameResult::Win(player, line), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_line_detected_with_other_cells_filled() {
        let b = board("OOX/_X_/X_O");
        assert_eq!(evaluate(&b), GameResult::Win(Player::X, [2, 4, 6]));

        let b = board("XOX/XOO/_O_");
        assert_eq!(evaluate(&b), GameResult::Win(Player::O, [1, 4, 7]));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(evaluate(&board("XOX/XOO/OXX")), GameResult::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        assert_eq!(
            evaluate(&board("XXX/OOX/XOO")),
            GameResult::Win(Player::X, [0, 1, 2])
        );
    }

    #[test]
    fn test_no_false_positives() {
        assert_eq!(evaluate(&Board::new()), GameResult::NoResult);
        assert_eq!(evaluate(&board("XO_/XO_/O__")), GameResult::NoResult);
        assert_eq!(evaluate(&board("XOX/OXO/__O")), GameResult::NoResult);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        assert_eq!(
            evaluate(&board("XXX/XXX/OOO")),
            GameResult::Win(Player::X, [0, 1, 2])
        );
    }

    #[test]
    fn test_placing_on_anti_diagonal_completes_it() {
        let before = board("XOX/OXO/__O");
        assert_eq!(evaluate(&before), GameResult::NoResult);

        let after = before.with_move(6, Player::X);
        assert_eq!(after, board("XOX/OXO/X_O"));
        assert_eq!(evaluate(&after), GameResult::Win(Player::X, [2, 4, 6]));
    }

    #[test]
    fn test_result_helpers() {
        assert!(!GameResult::NoResult.is_over());
        assert!(GameResult::Draw.is_over());
        assert_eq!(GameResult::Draw.winner(), None);
        assert_eq!(GameResult::Win(Player::O, [0, 4, 8]).winner(), Some(Player::O));
    }
}
