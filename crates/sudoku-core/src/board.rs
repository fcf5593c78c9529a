use serde::{Deserialize, Serialize};

/// Raw solver grid: 0 is empty, 1..=9 are digits. Row-major.
pub type Grid = [[u8; 9]; 9];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Given(u8),
    UserInput(u8),
    Empty,
}

impl Cell {
    pub fn value(&self) -> Option<u8> {
        match self {
            Cell::Given(v) | Cell::UserInput(v) => Some(*v),
            Cell::Empty => None,
        }
    }

    pub fn is_given(&self) -> bool {
        matches!(self, Cell::Given(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

pub type Board = [[Cell; 9]; 9];

/// Lift a puzzle grid into a board, marking every clue as a given.
pub fn grid_to_board(grid: &Grid) -> Board {
    let mut board = [[Cell::Empty; 9]; 9];
    for r in 0..9 {
        for c in 0..9 {
            if grid[r][c] != 0 {
                board[r][c] = Cell::Given(grid[r][c]);
            }
        }
    }
    board
}

/// Lower a board to a raw grid, dropping the given/user distinction.
pub fn board_to_grid(board: &Board) -> Grid {
    let mut grid = [[0u8; 9]; 9];
    for r in 0..9 {
        for c in 0..9 {
            grid[r][c] = board[r][c].value().unwrap_or(0);
        }
    }
    grid
}

/// Serialize a grid as a flat 81-char string, `.` for empty cells.
pub fn grid_to_string(grid: &Grid) -> String {
    let mut s = String::with_capacity(81);
    for row in grid {
        for &cell in row {
            s.push(if cell == 0 { '.' } else { (b'0' + cell) as char });
        }
    }
    s
}

/// Parse the flat 81-char form back into a grid.
///
/// Returns `None` unless the string is exactly 81 characters of `.` or
/// `1`-`9`. Inverse of [`grid_to_string`].
pub fn string_to_grid(s: &str) -> Option<Grid> {
    let bytes = s.as_bytes();
    if bytes.len() != 81 {
        return None;
    }
    let mut grid = [[0u8; 9]; 9];
    for (i, &b) in bytes.iter().enumerate() {
        grid[i / 9][i % 9] = match b {
            b'.' => 0,
            b'1'..=b'9' => b - b'0',
            _ => return None,
        };
    }
    Some(grid)
}
