use super::Phase;
use super::Player;
use super::Reveals;
use super::Segment;
use crate::Money;
use serde::Serialize;

/// A serializable view of the session for frontends and AI policies.
///
/// Carries the full puzzle text; presentation layers mask it through
/// `revealed` (see [`Snapshot::masked_text`]), and the AI is only allowed
/// to peek at it through its skill-gated channels.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub round: u8,
    pub total_rounds: u8,
    pub active: usize,
    pub players: Vec<Player>,
    pub category: String,
    pub text: String,
    pub revealed: Reveals,
    pub faces: Vec<Segment>,
    pub last_spin: Money,
    pub jackpot: Money,
    pub free_play: bool,
    pub express_run: bool,
    pub bonus_prize: Money,
    pub bonus_selection: Vec<char>,
    pub message: String,
}

impl Snapshot {
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    /// Board text as a viewer sees it: unrevealed letters become
    /// underscores, spaces and revealed characters pass through.
    pub fn masked_text(&self) -> String {
        self.text
            .chars()
            .map(|c| {
                if c == ' ' || self.revealed.contains(c) {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }
}
