use serde::{Deserialize, Serialize};

use crate::board::{Board, Grid};

/// Puzzle/solution pair returned by the generation endpoint.
///
/// Both grids are 9x9 row-major; empty puzzle cells carry the 0 sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub puzzle: Vec<Vec<u8>>,
    pub solution: Vec<Vec<u8>>,
}

impl GenerateResponse {
    pub fn new(puzzle: &Board, solution: &Grid) -> Self {
        let puzzle = puzzle
            .iter()
            .map(|row| row.iter().map(|cell| cell.value().unwrap_or(0)).collect())
            .collect();
        let solution = solution.iter().map(|row| row.to_vec()).collect();
        GenerateResponse { puzzle, solution }
    }
}
