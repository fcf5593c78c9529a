use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Removal policy: (max cells removed, minimum clues kept).
    pub fn removal_limits(&self) -> (usize, usize) {
        match self {
            Difficulty::Easy => (25, 40),
            Difficulty::Medium => (50, 30),
            Difficulty::Hard => (64, 17),
        }
    }

    /// Parse the wire value. Anything unrecognized falls back to Easy.
    pub fn from_param(s: &str) -> Difficulty {
        match s {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }

    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}
