use rand::RngExt;
use rand::seq::SliceRandom;

use crate::board::{Board, Grid, grid_to_board};
use crate::difficulty::Difficulty;
use crate::solver::{count_solutions, solve};

/// Generate a complete valid solution grid.
///
/// The three diagonal boxes share no row, column, or box constraint, so
/// each is seeded with an independent random permutation of 1..=9; the
/// deterministic backtracking solve then completes the other 54 cells.
/// The seeded boxes are the only entropy source, so the distribution over
/// solved grids is not uniform.
pub fn generate_full_solution<R: RngExt + ?Sized>(rng: &mut R) -> Grid {
    let mut grid = [[0u8; 9]; 9];

    for box_idx in 0..3 {
        let mut nums: Vec<u8> = (1..=9).collect();
        nums.shuffle(rng);
        let start = box_idx * 3;
        let mut idx = 0;
        for r in start..start + 3 {
            for c in start..start + 3 {
                grid[r][c] = nums[idx];
                idx += 1;
            }
        }
    }

    solve(&mut grid);
    grid
}

/// Blank cells one at a time while the puzzle keeps a unique solution.
///
/// Visits the 81 cells in a uniformly shuffled order. A removal survives
/// only if `count_solutions(.., 2)` still reports exactly one solution;
/// otherwise the clue is restored. Stops once `max_remove` cells are gone
/// or the clue count would drop below `min_clues`. Single greedy pass, so
/// the result can sit above the theoretical minimum clue count.
pub fn remove_cells<R: RngExt + ?Sized>(
    grid: &mut Grid,
    max_remove: usize,
    min_clues: usize,
    rng: &mut R,
) {
    let mut indices: Vec<usize> = (0..81).collect();
    indices.shuffle(rng);

    let mut clues = grid
        .iter()
        .flatten()
        .filter(|&&v| v != 0)
        .count();
    let mut removed = 0;

    for idx in indices {
        if removed >= max_remove {
            break;
        }
        if clues <= min_clues {
            break;
        }

        let (r, c) = (idx / 9, idx % 9);
        let backup = grid[r][c];
        if backup == 0 {
            continue;
        }
        grid[r][c] = 0;

        if count_solutions(grid, 2) == 1 {
            removed += 1;
            clues -= 1;
        } else {
            grid[r][c] = backup;
        }
    }
}

/// Generate a puzzle/solution pair for the given difficulty.
///
/// The puzzle board marks every surviving clue as a given; the returned
/// solution is the full grid the puzzle was carved from, and is the
/// puzzle's unique completion.
pub fn generate_puzzle<R: RngExt + ?Sized>(
    difficulty: Difficulty,
    rng: &mut R,
) -> (Board, Grid) {
    let solution = generate_full_solution(rng);

    let (max_remove, min_clues) = difficulty.removal_limits();
    let mut puzzle = solution;
    remove_cells(&mut puzzle, max_remove, min_clues, rng);

    (grid_to_board(&puzzle), solution)
}
