use crate::gameplay::Controller;
use crate::MAX_PLAYERS;
use crate::MIN_ROUNDS;
use serde::Deserialize;
use serde::Serialize;

/// A set of round numbers a per-round modifier is active in, packed into
/// a bitmask. Round numbers are 1-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSet(u8);

impl RoundSet {
    pub const fn none() -> Self {
        Self(0)
    }
    pub const fn all() -> Self {
        Self(u8::MAX)
    }
    pub const fn only(round: u8) -> Self {
        Self(1 << (round - 1))
    }
    pub const fn with(self, round: u8) -> Self {
        Self(self.0 | 1 << (round - 1))
    }
    pub const fn contains(self, round: u8) -> bool {
        round >= 1 && round <= 8 && self.0 & (1 << (round - 1)) != 0
    }
    /// Highest round in the set, or 0 when empty.
    pub const fn max(self) -> u8 {
        8 - self.0.leading_zeros() as u8
    }
}

/// One seat requested at setup time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub name: String,
    pub controller: Controller,
}

impl PlayerSpec {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            controller: Controller::Human,
        }
    }
    pub fn ai(name: impl Into<String>, skill: crate::Skill) -> Self {
        Self {
            name: name.into(),
            controller: Controller::Ai { skill },
        }
    }
}

/// Game setup: who plays, which wheel modifiers are live, and the puzzle
/// theme. Global toggles hold for the whole game; `RoundSet` fields name
/// the rounds a per-round modifier appears in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub players: Vec<PlayerSpec>,
    pub theme: String,
    pub toss_up: bool,
    pub jackpot: bool,
    pub free_play: bool,
    pub gift_tags: bool,
    pub mystery: RoundSet,
    pub risk: RoundSet,
    pub express: RoundSet,
    pub million: RoundSet,
    pub extra_spin: RoundSet,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: vec![
                PlayerSpec::human("Spieler 1"),
                PlayerSpec::human("Spieler 2"),
                PlayerSpec::human("Spieler 3"),
            ],
            theme: String::new(),
            toss_up: false,
            jackpot: false,
            free_play: false,
            gift_tags: false,
            mystery: RoundSet::none(),
            risk: RoundSet::none(),
            express: RoundSet::none(),
            million: RoundSet::none(),
            extra_spin: RoundSet::all(),
        }
    }
}

impl GameConfig {
    /// Number of main rounds: at least three, stretched to cover the last
    /// round any per-round modifier is scheduled for.
    pub fn total_rounds(&self) -> u8 {
        MIN_ROUNDS
            .max(self.mystery.max())
            .max(self.risk.max())
            .max(self.express.max())
            .max(self.million.max())
    }

    pub fn validated(self) -> anyhow::Result<Self> {
        anyhow::ensure!(
            !self.players.is_empty() && self.players.len() <= MAX_PLAYERS,
            "a game takes 1 to {} players, got {}",
            MAX_PLAYERS,
            self.players.len()
        );
        anyhow::ensure!(
            self.players.iter().all(|p| !p.name.trim().is_empty()),
            "every player needs a name"
        );
        Ok(self)
    }
}
