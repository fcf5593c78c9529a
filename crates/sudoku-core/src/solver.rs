use crate::board::Grid;

/// Check if placing `val` at (row, col) breaks no row/column/box constraint.
///
/// Single 0..9 scan: `i` walks the row, the column, and the cell's 3x3 box
/// at (3*(row/3) + i/3, 3*(col/3) + i%3) simultaneously. Pure predicate;
/// callers only probe cells that are currently empty.
pub fn is_safe(grid: &Grid, row: usize, col: usize, val: u8) -> bool {
    for i in 0..9 {
        if grid[row][i] == val {
            return false;
        }
        if grid[i][col] == val {
            return false;
        }
        let box_row = 3 * (row / 3) + i / 3;
        let box_col = 3 * (col / 3) + i % 3;
        if grid[box_row][box_col] == val {
            return false;
        }
    }
    true
}

/// Solve the grid in place by exhaustive backtracking.
///
/// Scans row-major for the first empty cell and tries candidates 1..=9 in
/// ascending order, so a given input always reaches the same solution.
/// Returns true and leaves the grid fully populated on success; restores
/// the grid unchanged and returns false if no solution exists.
pub fn solve(grid: &mut Grid) -> bool {
    for row in 0..9 {
        for col in 0..9 {
            if grid[row][col] == 0 {
                for val in 1..=9 {
                    if is_safe(grid, row, col, val) {
                        grid[row][col] = val;
                        if solve(grid) {
                            return true;
                        }
                        grid[row][col] = 0;
                    }
                }
                return false;
            }
        }
    }
    true
}

/// Count solutions, stopping as soon as `limit` have been found.
///
/// Exact for true counts below `limit`; `count_solutions(grid, 2) == 1`
/// is the uniqueness test. The grid is restored before returning.
pub fn count_solutions(grid: &mut Grid, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }

    for row in 0..9 {
        for col in 0..9 {
            if grid[row][col] == 0 {
                let mut count = 0;
                for val in 1..=9 {
                    if is_safe(grid, row, col, val) {
                        grid[row][col] = val;
                        count += count_solutions(grid, limit - count);
                        grid[row][col] = 0;
                        if count >= limit {
                            return count;
                        }
                    }
                }
                return count;
            }
        }
    }
    1
}
