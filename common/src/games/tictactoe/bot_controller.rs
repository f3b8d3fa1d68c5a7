use crate::games::SessionRng;
use super::board::{Board, get_available_moves};
use super::game_state::TicTacToeGameState;
use super::types::{Cell, CellIndex, Difficulty, Player};
use super::win_detector::{GameResult, evaluate};

/// Score of a win found at the root. Each extra ply costs one point.
pub const WIN_SCORE: i32 = 10;

/// Snapshot handed to the move selector, detached from the session that owns the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotInput {
    pub board: Board,
    pub ai_player: Player,
    pub difficulty: Difficulty,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState, difficulty: Difficulty) -> Self {
        Self {
            board: *state.board(),
            ai_player: state.current_player(),
            difficulty,
        }
    }
}

/// Checked entry point: `None` when the board is already decided.
pub fn calculate_move(input: &BotInput, rng: &mut SessionRng) -> Option<CellIndex> {
    if evaluate(&input.board).is_over() {
        return None;
    }
    Some(select_move(&input.board, input.ai_player, input.difficulty, rng))
}

/// Picks the cell the AI plays.
///
/// The board must have an empty cell and no completed line. `rng` is only used at
/// [`Difficulty::Easy`]; every other level is deterministic.
pub fn select_move(
    board: &Board,
    ai_player: Player,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> CellIndex {
    assert!(!board.is_full(), "select_move called on a full board");
    debug_assert_eq!(
        evaluate(board),
        GameResult::NoResult,
        "select_move called on a finished game"
    );

    match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        Difficulty::Medium | Difficulty::Hard | Difficulty::Unbeatable => {
            calculate_minimax_move(board, ai_player, difficulty)
        }
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> CellIndex {
    match rng.choose(&get_available_moves(board)) {
        Some(index) => index,
        None => unreachable!("select_move checked the board has an empty cell"),
    }
}

pub fn calculate_minimax_move(board: &Board, ai_player: Player, difficulty: Difficulty) -> CellIndex {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for (index, score) in score_moves(board, ai_player, difficulty) {
        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    match best_move {
        Some(index) => index,
        None => unreachable!("a board with an empty cell always has a scored move"),
    }
}

/// Minimax value of every empty cell for `ai_player`, in index order.
pub fn score_moves(board: &Board, ai_player: Player, difficulty: Difficulty) -> Vec<(CellIndex, i32)> {
    let depth_limit = difficulty.depth_limit();
    let mut scratch = *board;

    get_available_moves(board)
        .into_iter()
        .map(|index| {
            scratch.set(index, Cell::Taken(ai_player));
            let score = minimax(
                &mut scratch,
                1,
                depth_limit,
                false,
                ai_player,
                i32::MIN,
                i32::MAX,
            );
            scratch.set(index, Cell::Empty);
            (index, score)
        })
        .collect()
}

fn minimax(
    board: &mut Board,
    depth: usize,
    depth_limit: Option<usize>,
    is_maximizing: bool,
    ai_player: Player,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    match evaluate(board) {
        GameResult::Win(winner, _) => {
            return if winner == ai_player {
                WIN_SCORE - depth as i32
            } else {
                depth as i32 - WIN_SCORE
            };
        }
        GameResult::Draw => return 0,
        GameResult::NoResult => {}
    }

    if let Some(limit) = depth_limit
        && depth > limit
    {
        return 0;
    }

    let moves = get_available_moves(board);

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in moves {
            board.set(index, Cell::Taken(ai_player));
            let eval = minimax(board, depth + 1, depth_limit, false, ai_player, alpha, beta);
            board.set(index, Cell::Empty);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let opponent = ai_player.opponent();
        let mut min_eval = i32::MAX;
        for index in moves {
            board.set(index, Cell::Taken(opponent));
            let eval = minimax(board, depth + 1, depth_limit, true, ai_player, alpha, beta);
            board.set(index, Cell::Empty);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
