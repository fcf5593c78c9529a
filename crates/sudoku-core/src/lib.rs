pub mod board;
pub mod difficulty;
pub mod generator;
pub mod protocol;
pub mod solver;
pub mod validation;

pub use board::{Board, Cell, Grid};
pub use difficulty::Difficulty;
pub use generator::generate_puzzle;
pub use protocol::GenerateResponse;
