use axum::Json;
use axum::extract::Query;
use axum::http::StatusCode;
use serde::Deserialize;

use sudoku_core::generator::generate_puzzle;
use sudoku_core::protocol::GenerateResponse;
use sudoku_core::Difficulty;

// ── Health ──────────────────────────────────────────────────────────────

pub async fn health() -> &'static str {
    "ok"
}

// ── Puzzle generation ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateParams {
    pub difficulty: Option<String>,
}

/// `GET /generate?difficulty=easy|medium|hard`
///
/// Missing or unrecognized difficulty behaves like `easy`. Generation is
/// CPU-bound backtracking, so it runs on a blocking thread; a panic in
/// the engine surfaces as a bare 500 with no partial puzzle.
pub async fn generate(
    Query(params): Query<GenerateParams>,
) -> Result<Json<GenerateResponse>, StatusCode> {
    let difficulty = Difficulty::from_param(params.difficulty.as_deref().unwrap_or("easy"));

    let (puzzle, solution) =
        tokio::task::spawn_blocking(move || generate_puzzle(difficulty, &mut rand::rng()))
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    println!(
        "Generated {} puzzle with {} clues",
        difficulty.label(),
        puzzle
            .iter()
            .flatten()
            .filter(|cell| cell.value().is_some())
            .count()
    );

    Ok(Json(GenerateResponse::new(&puzzle, &solution)))
}
