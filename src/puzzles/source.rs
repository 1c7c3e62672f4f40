use super::Difficulty;
use super::Library;
use super::Puzzle;
use std::collections::VecDeque;

/// Where puzzles come from. Implementations may call out to a generator
/// service; the engine retries a failing source and then falls back to
/// the built-in [`Library`], so a fetch can fail but a round cannot.
pub trait PuzzleSource {
    /// Produce one puzzle. `excluded` lists categories already played this
    /// game; `theme` is a free-form hint a generator may honor or ignore.
    fn fetch(
        &mut self,
        difficulty: Difficulty,
        excluded: &[String],
        theme: &str,
    ) -> anyhow::Result<Puzzle>;
}

impl PuzzleSource for Library {
    fn fetch(
        &mut self,
        difficulty: Difficulty,
        excluded: &[String],
        _theme: &str,
    ) -> anyhow::Result<Puzzle> {
        Ok(self.draw(difficulty, excluded))
    }
}

/// A fixed queue of puzzles, served in order. Used by tests and demo
/// games that need a known board.
#[derive(Debug, Default)]
pub struct Scripted(VecDeque<Puzzle>);

impl Scripted {
    pub fn new(puzzles: impl IntoIterator<Item = Puzzle>) -> Self {
        Self(puzzles.into_iter().collect())
    }
}

impl PuzzleSource for Scripted {
    fn fetch(
        &mut self,
        _difficulty: Difficulty,
        _excluded: &[String],
        _theme: &str,
    ) -> anyhow::Result<Puzzle> {
        self.0
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("scripted puzzle queue is empty"))
    }
}
