pub mod library;
pub use library::*;

pub mod source;
pub use source::*;

use serde::Serialize;

/// Rounds ramp from easy through hard; the bonus round is always hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn for_round(round: u8) -> Self {
        match round {
            1 => Self::Easy,
            2 => Self::Medium,
            _ => Self::Hard,
        }
    }
}

/// A puzzle as it goes up on the board. `text` is uppercase with hyphens
/// marking where long compound words break across grid lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    pub category: String,
    pub text: String,
}

impl Puzzle {
    pub fn new(category: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            text: text.into(),
        }
    }

    /// Normalizes untrusted puzzle text: uppercase, restricted to German
    /// letters, digits, spaces, and hyphens.
    pub fn sanitized(category: &str, text: &str) -> Self {
        let text = text
            .chars()
            .map(crate::gameplay::letters::normalized)
            .filter(|c| {
                crate::gameplay::letters::is_letter(*c) || c.is_ascii_digit() || *c == ' ' || *c == '-'
            })
            .collect::<String>();
        Self {
            category: category.to_uppercase(),
            text: text.split_whitespace().collect::<Vec<_>>().join(" "),
        }
    }
}
