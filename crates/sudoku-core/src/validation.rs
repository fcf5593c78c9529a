use crate::board::Board;

/// Check if a cell's value duplicates any other cell in its row/col/box.
///
/// Operates on the board as the user entered it, which may be invalid
/// anywhere; empty cells never conflict. Excludes the cell itself.
pub fn has_conflict(board: &Board, row: usize, col: usize) -> bool {
    let val = match board[row][col].value() {
        Some(v) => v,
        None => return false,
    };

    for i in 0..9 {
        if i != col && board[row][i].value() == Some(val) {
            return true;
        }
        if i != row && board[i][col].value() == Some(val) {
            return true;
        }
    }
    let box_r = (row / 3) * 3;
    let box_c = (col / 3) * 3;
    for r in box_r..box_r + 3 {
        for c in box_c..box_c + 3 {
            if (r != row || c != col) && board[r][c].value() == Some(val) {
                return true;
            }
        }
    }
    false
}

/// Get all conflicting cell positions, for highlighting.
pub fn get_all_conflicts(board: &Board) -> Vec<(usize, usize)> {
    let mut conflicts = Vec::new();
    for r in 0..9 {
        for c in 0..9 {
            if board[r][c].value().is_some() && has_conflict(board, r, c) {
                conflicts.push((r, c));
            }
        }
    }
    conflicts
}

/// Check that no row, column, or box holds a duplicate among its filled
/// cells. Empty cells are tolerated; this is weaker than "solved".
pub fn is_board_valid(board: &Board) -> bool {
    for i in 0..9 {
        let mut row_seen = [false; 10];
        let mut col_seen = [false; 10];
        for j in 0..9 {
            if let Some(v) = board[i][j].value() {
                if row_seen[v as usize] {
                    return false;
                }
                row_seen[v as usize] = true;
            }
            if let Some(v) = board[j][i].value() {
                if col_seen[v as usize] {
                    return false;
                }
                col_seen[v as usize] = true;
            }
        }
    }
    for box_r in 0..3 {
        for box_c in 0..3 {
            let mut seen = [false; 10];
            for i in 0..3 {
                for j in 0..3 {
                    if let Some(v) = board[box_r * 3 + i][box_c * 3 + j].value() {
                        if seen[v as usize] {
                            return false;
                        }
                        seen[v as usize] = true;
                    }
                }
            }
        }
    }
    true
}

/// Check if the board is completely and correctly filled.
pub fn is_board_complete(board: &Board) -> bool {
    for r in 0..9 {
        for c in 0..9 {
            if board[r][c].value().is_none() {
                return false;
            }
            if has_conflict(board, r, c) {
                return false;
            }
        }
    }
    true
}
