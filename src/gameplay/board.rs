use super::letters;
use serde::Serialize;
use std::collections::BTreeSet;

/// The set of characters known to all players for the current puzzle.
///
/// Grows monotonically within a round and is reset to the auto-revealed
/// subset when a new puzzle goes up. Digits and hyphens are structural,
/// not guessable, so they are revealed at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reveals(BTreeSet<char>);

impl Reveals {
    /// Opening state for a fresh puzzle: digits and hyphens only.
    pub fn opening(text: &str) -> Self {
        let mut state = Self::default();
        for c in text.chars() {
            if c.is_ascii_digit() || c == '-' {
                state.0.insert(c);
            }
        }
        state
    }

    /// Everything in the puzzle, shown at round end and on a solve.
    pub fn full(text: &str) -> Self {
        Self(text.chars().filter(|c| *c != ' ').collect())
    }

    /// Adds one character. Idempotent.
    pub fn reveal(&mut self, c: char) {
        self.0.insert(letters::normalized(c));
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&letters::normalized(c))
    }

    /// True if the puzzle still holds a letter matching `pred` that has
    /// not been revealed. Guards spinning (consonants) and vowel purchase.
    pub fn has_unrevealed(&self, text: &str, pred: impl Fn(char) -> bool) -> bool {
        text.chars()
            .filter(|c| letters::is_letter(*c))
            .any(|c| pred(c) && !self.contains(c))
    }

    /// Distinct guessable letters of `text` already revealed, over the
    /// total distinct guessable letters. Drives the AI solve threshold.
    pub fn known_fraction(&self, text: &str) -> f64 {
        let unique: BTreeSet<char> = text.chars().filter(|c| letters::is_letter(*c)).collect();
        if unique.is_empty() {
            return 1.0;
        }
        let known = unique.iter().filter(|c| self.contains(**c)).count();
        known as f64 / unique.len() as f64
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

/// Number of times a guessed character appears in the puzzle text.
/// Exact-character matching, case-normalized, never matches spaces.
pub fn occurrences(text: &str, c: char) -> usize {
    let c = letters::normalized(c);
    if c == ' ' {
        return 0;
    }
    text.chars().filter(|x| *x == c).count()
}
