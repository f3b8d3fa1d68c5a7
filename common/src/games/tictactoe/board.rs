use std::fmt;
use std::str::FromStr;

use super::types::{BOARD_SIZE, Cell, CellIndex, Player};

/// The 3x3 grid in row-major order: 0-2 top row, 3-5 middle, 6-8 bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Panics on an index outside `0..9`.
    pub fn get(&self, index: CellIndex) -> Cell {
        self.cells[index]
    }

    pub fn is_empty_at(&self, index: CellIndex) -> bool {
        index < BOARD_SIZE && self.cells[index].is_empty()
    }

    pub(crate) fn set(&mut self, index: CellIndex, cell: Cell) {
        self.cells[index] = cell;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Taken(player))
            .count()
    }

    /// Returns a copy with `player` placed at `index`. The cell must be empty.
    pub fn with_move(&self, index: CellIndex, player: Player) -> Self {
        debug_assert!(self.is_empty_at(index), "cell {} is not empty", index);
        let mut next = *self;
        next.set(index, Cell::Taken(player));
        next
    }
}

pub fn get_available_moves(board: &Board) -> Vec<CellIndex> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let symbols: Vec<String> = (0..3)
                .map(|col| {
                    let index = row * 3 + col;
                    match self.cells[index] {
                        Cell::Empty => (index + 1).to_string(),
                        Cell::Taken(player) => player.to_string(),
                    }
                })
                .collect();
            write!(f, " {} ", symbols.join(" | "))?;
            if row < 2 {
                write!(f, "\n---+---+---\n")?;
            }
        }
        Ok(())
    }
}

/// Parses nine cells, e.g. `"XOX/OXO/__O"`.
///
/// `X`/`O` are marks, `_`, `.` and `-` are empty. Whitespace, `/` and `|` are ignored.
impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; BOARD_SIZE];
        let mut count = 0;

        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Taken(Player::X),
                'O' | 'o' => Cell::Taken(Player::O),
                '_' | '.' | '-' => Cell::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(format!("Unexpected character '{}' in board", other)),
            };
            if count == BOARD_SIZE {
                return Err("Board has more than 9 cells".to_string());
            }
            cells[count] = cell;
            count += 1;
        }

        if count != BOARD_SIZE {
            return Err(format!("Board needs 9 cells, got {}", count));
        }
        Ok(Self { cells })
    }
}
