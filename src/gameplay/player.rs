use crate::Money;
use crate::Skill;
use crate::CONSOLATION;
use crate::GIFT_VALUE;
use serde::Deserialize;
use serde::Serialize;

/// Who controls a position at the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Controller {
    Human,
    Ai { skill: Skill },
}

impl Controller {
    pub fn is_ai(&self) -> bool {
        matches!(self, Self::Ai { .. })
    }
}

/// Prize tags that can be collected from the gift face. Cashed out for
/// [`GIFT_VALUE`] each when the holder banks a round; lost to bankruptcy.
pub const GIFT_CATALOG: [&str; 8] = [
    "AUTO",
    "REISE",
    "HAUS",
    "MOTORRAD",
    "ROLLER",
    "BIKE",
    "E-BIKE",
    "KREUZFAHRT",
];

/// A player's ledger entry.
///
/// `round_score` is at-risk money: it accumulates during a round, is wiped
/// by bankruptcy, and moves into `banked` only when this player solves the
/// round. `banked` never decreases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: usize,
    pub name: String,
    pub controller: Controller,
    pub round_score: Money,
    pub banked: Money,
    pub extra_spin: bool,
    pub rounds_won: u32,
    pub inventory: Vec<&'static str>,
    pub million_wedge: bool,
}

impl Player {
    pub fn new(id: usize, name: impl Into<String>, controller: Controller) -> Self {
        Self {
            id,
            name: name.into(),
            controller,
            round_score: 0,
            banked: 0,
            extra_spin: false,
            rounds_won: 0,
            inventory: Vec::new(),
            million_wedge: false,
        }
    }

    /// Hard reset of at-risk state: round score, inventory, and the
    /// million wedge are gone. `banked` is untouched, always.
    pub fn bankrupt(&mut self) {
        self.round_score = 0;
        self.inventory.clear();
        self.million_wedge = false;
    }
}

/// Resets every player's round state at the start of a round. The starter
/// may carry opening capital (toss-up winnings at risk in round 1).
pub fn clear_round_state(players: &mut [Player], starter: usize, capital: Money) {
    for (index, player) in players.iter_mut().enumerate() {
        player.round_score = if index == starter { capital } else { 0 };
        player.extra_spin = false;
    }
}

/// Banks the round winner's at-risk score.
///
/// A winner who solved broke still banks the consolation amount. Collected
/// gift tags are cashed out on top. This is the only place `banked` grows
/// outside the bonus round. Returns the banked amount for display.
pub fn bank_round_winnings(players: &mut [Player], winner: usize) -> Money {
    let player = &mut players[winner];
    let score = if player.round_score == 0 {
        CONSOLATION
    } else {
        player.round_score
    };
    let gifts = player.inventory.len() as Money * GIFT_VALUE;
    let total = score + gifts;
    player.round_score = total;
    player.banked += total;
    player.rounds_won += 1;
    player.inventory.clear();
    total
}

/// The bonus-round finalist: most rounds won, ties broken by the higher
/// banked total, then by table position.
pub fn finalist(players: &[Player]) -> usize {
    players
        .iter()
        .enumerate()
        .max_by(|(i, a), (j, b)| {
            (a.rounds_won, a.banked, std::cmp::Reverse(*i))
                .cmp(&(b.rounds_won, b.banked, std::cmp::Reverse(*j)))
        })
        .map(|(index, _)| index)
        .unwrap_or(0)
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<12} {:>7} / {:>7} DM ({} Runden)",
            self.name, self.round_score, self.banked, self.rounds_won
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<Player> {
        (0..3)
            .map(|i| Player::new(i, format!("Spieler {}", i + 1), Controller::Human))
            .collect()
    }

    #[test]
    fn banking_a_zero_score_pays_the_consolation() {
        let mut players = table();
        let won = bank_round_winnings(&mut players, 1);
        assert_eq!(won, 200);
        assert_eq!(players[1].banked, 200);
        assert_eq!(players[1].rounds_won, 1);
        assert_eq!(players[0].banked, 0);
    }

    #[test]
    fn banking_moves_the_full_round_score() {
        let mut players = table();
        players[2].round_score = 4300;
        let won = bank_round_winnings(&mut players, 2);
        assert_eq!(won, 4300);
        assert_eq!(players[2].banked, 4300);
        assert_eq!(players[2].rounds_won, 1);
        assert!(players[2].inventory.is_empty());
    }

    #[test]
    fn banking_cashes_out_gift_tags() {
        let mut players = table();
        players[0].round_score = 1000;
        players[0].inventory = vec!["AUTO", "REISE"];
        let won = bank_round_winnings(&mut players, 0);
        assert_eq!(won, 3000);
        assert!(players[0].inventory.is_empty());
    }

    #[test]
    fn bankruptcy_never_touches_the_bank() {
        let mut players = table();
        players[0].banked = 5000;
        players[0].round_score = 1200;
        players[0].inventory = vec!["HAUS"];
        players[0].million_wedge = true;
        players[0].bankrupt();
        assert_eq!(players[0].round_score, 0);
        assert_eq!(players[0].banked, 5000);
        assert!(players[0].inventory.is_empty());
        assert!(!players[0].million_wedge);
    }

    #[test]
    fn round_reset_keeps_only_the_starter_capital() {
        let mut players = table();
        players[0].round_score = 900;
        players[1].extra_spin = true;
        clear_round_state(&mut players, 2, 1000);
        assert_eq!(players[0].round_score, 0);
        assert_eq!(players[2].round_score, 1000);
        assert!(!players[1].extra_spin);
    }

    #[test]
    fn finalist_prefers_rounds_won_then_bank() {
        let mut players = table();
        players[0].rounds_won = 1;
        players[0].banked = 9000;
        players[1].rounds_won = 2;
        players[1].banked = 500;
        players[2].rounds_won = 2;
        players[2].banked = 700;
        assert_eq!(finalist(&players), 2);
        players[1].banked = 700;
        // full tie falls back to the earlier position
        assert_eq!(finalist(&players), 1);
    }
}
