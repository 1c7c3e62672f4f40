use crate::gameplay::board::occurrences;
use crate::gameplay::letters;
use crate::gameplay::Action;
use crate::gameplay::Phase;
use crate::gameplay::Snapshot;
use crate::Skill;
use crate::BONUS_CONSONANTS;
use crate::BONUS_VOWELS;
use crate::VOWEL_COST;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

/// German letters ranked by corpus frequency. Guides letter picks for
/// mid-skill policies; umlauts and ß sit at the bottom where they belong.
pub const FREQUENCY: [char; 30] = [
    'E', 'N', 'I', 'S', 'R', 'A', 'T', 'D', 'H', 'U', //
    'L', 'C', 'G', 'M', 'O', 'B', 'W', 'F', 'K', 'Z', //
    'P', 'V', 'J', 'Y', 'X', 'Q', 'Ä', 'Ö', 'Ü', 'ß',
];

/// A skill-parameterized decision policy.
///
/// `skill` runs 0..=200. Zero plays close to uniformly random; 200 peeks
/// at the board most of the time, solves early, and weighs its wagers.
/// The policy only ever emits actions that pass the session's guards.
pub struct Policy {
    skill: Skill,
    rng: SmallRng,
}

impl Policy {
    pub fn new(skill: Skill) -> Self {
        Self {
            skill: skill.min(200),
            rng: SmallRng::from_os_rng(),
        }
    }

    pub fn seeded(skill: Skill, seed: u64) -> Self {
        Self {
            skill: skill.min(200),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn skill(&self) -> Skill {
        self.skill
    }

    fn fraction(&self) -> f64 {
        self.skill as f64 / 200.0
    }

    /// One action for the active seat in the given state. Total over all
    /// phases; banner phases acknowledge, spins land themselves.
    pub fn act(&mut self, view: &Snapshot) -> Action {
        match view.phase {
            Phase::TossUp => Action::TossUpTick,
            Phase::RoundStart | Phase::RoundEnd | Phase::BonusIntro => Action::Continue,
            Phase::Spinning | Phase::BonusSpinning => Action::Land,
            Phase::SpinOrSolve => self.root(view),
            Phase::GuessingConsonant => {
                Action::GuessConsonant(self.pick(view, &letters::CONSONANTS, &[]))
            }
            Phase::BuyingVowel => Action::BuyVowel(self.pick(view, &letters::VOWELS, &[])),
            Phase::Solving(_) => Action::SubmitSolution(self.solution(view)),
            Phase::MysteryDecision => Action::DecideMystery(self.gamble(view)),
            Phase::RiskDecision => Action::DecideRisk(self.gamble(view)),
            Phase::ExpressDecision => Action::DecideExpress(self.gamble(view)),
            Phase::ExtraSpinPrompt => Action::DecideExtraSpin(true),
            Phase::BonusSpin => Action::Spin,
            Phase::BonusSelection => self.bonus(view),
            Phase::GameOver => Action::Continue,
        }
    }

    /// Whether this seat wants to buzz in on the toss-up right now.
    pub fn wants_buzz(&mut self, view: &Snapshot) -> bool {
        let known = view.revealed.known_fraction(&view.text);
        known >= 0.9 - 0.55 * self.fraction()
            && self.rng.random_bool(0.2 + 0.6 * self.fraction())
    }
}

/// Decision internals.
impl Policy {
    /// The root decision: solve when enough of the board is known, buy a
    /// vowel when flush, otherwise spin.
    fn root(&mut self, view: &Snapshot) -> Action {
        let consonants_left = view
            .revealed
            .has_unrevealed(&view.text, letters::is_consonant);
        if view.express_run {
            // no spinning aboard the express; ride or bail out by solving
            if self.ready_to_solve(view) || !consonants_left {
                return Action::StartSolving;
            }
            return Action::GuessConsonant(self.pick(view, &letters::CONSONANTS, &[]));
        }
        if self.ready_to_solve(view) {
            return Action::StartSolving;
        }
        if !consonants_left && !view.free_play {
            return Action::StartSolving;
        }
        let me = view.active_player();
        let vowels_left = view.revealed.has_unrevealed(&view.text, letters::is_vowel);
        let affordable = view.free_play || me.round_score >= VOWEL_COST;
        if vowels_left && affordable && self.rng.random_bool(0.2 + 0.3 * self.fraction()) {
            return Action::StartBuyingVowel;
        }
        Action::Spin
    }

    fn ready_to_solve(&mut self, view: &Snapshot) -> bool {
        let known = view.revealed.known_fraction(&view.text);
        let threshold = 0.95 - 0.55 * self.fraction();
        // a small genius chance lets strong policies steal early rounds
        known >= threshold || self.rng.random_bool(0.02 * self.fraction())
    }

    /// Picks a letter from `pool` that is neither revealed nor in `taken`.
    /// High skill peeks at the board; otherwise frequency order, with low
    /// skill drifting toward uniform noise.
    fn pick(&mut self, view: &Snapshot, pool: &[char], taken: &[char]) -> char {
        let open: Vec<char> = pool
            .iter()
            .copied()
            .filter(|c| !view.revealed.contains(*c) && !taken.contains(c))
            .collect();
        debug_assert!(!open.is_empty());
        if self.rng.random_bool(0.8 * self.fraction()) {
            let hit = FREQUENCY
                .iter()
                .copied()
                .filter(|c| open.contains(c))
                .find(|c| occurrences(&view.text, *c) > 0);
            if let Some(c) = hit {
                return c;
            }
        }
        if self.rng.random_bool(0.4 * (1.0 - self.fraction())) {
            return open[self.rng.random_range(0..open.len())];
        }
        FREQUENCY
            .iter()
            .copied()
            .find(|c| open.contains(c))
            .unwrap_or(open[0])
    }

    /// Solution attempts succeed with probability scaled by skill and how
    /// much of the board is known; a fully revealed board is always read
    /// off correctly. Failures submit a string that cannot match.
    fn solution(&mut self, view: &Snapshot) -> String {
        let known = view.revealed.known_fraction(&view.text);
        if known >= 1.0 {
            return view.text.clone();
        }
        let p = ((0.25 + 0.70 * self.fraction()) * known).max(0.05);
        if self.rng.random_bool(p.min(1.0)) {
            view.text.clone()
        } else {
            format!("{} X", view.text)
        }
    }

    /// Binary wagers. Strong policies protect a built-up round score and
    /// gamble only when there is little to lose; the rest flip a coin.
    fn gamble(&mut self, view: &Snapshot) -> bool {
        if self.skill >= 140 {
            view.active_player().round_score < 2 * VOWEL_COST
        } else {
            self.rng.random_bool(0.5)
        }
    }

    fn bonus(&mut self, view: &Snapshot) -> Action {
        let consonants = view
            .bonus_selection
            .iter()
            .filter(|c| letters::is_consonant(**c))
            .count();
        let vowels = view
            .bonus_selection
            .iter()
            .filter(|c| letters::is_vowel(**c))
            .count();
        if consonants >= BONUS_CONSONANTS && vowels >= BONUS_VOWELS {
            return Action::BonusSubmit;
        }
        let pool: &[char] = if vowels < BONUS_VOWELS {
            &letters::VOWELS
        } else {
            &letters::CONSONANTS
        };
        Action::BonusSelect(self.pick(view, pool, &view.bonus_selection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::Controller;
    use crate::gameplay::Player;
    use crate::gameplay::Reveals;

    fn view(text: &str, phase: Phase) -> Snapshot {
        Snapshot {
            phase,
            round: 1,
            total_rounds: 3,
            active: 0,
            players: vec![Player::new(0, "KI", Controller::Ai { skill: 200 })],
            category: "TEST".into(),
            text: text.into(),
            revealed: Reveals::opening(text),
            faces: Vec::new(),
            last_spin: 0,
            jackpot: 0,
            free_play: false,
            express_run: false,
            bonus_prize: 0,
            bonus_selection: Vec::new(),
            message: String::new(),
        }
    }

    #[test]
    fn a_fully_revealed_board_is_always_solved_correctly() {
        let mut policy = Policy::seeded(0, 1);
        let mut state = view("ROTE ROSE", Phase::Solving(crate::gameplay::SolveContext::Turn));
        state.revealed = Reveals::full("ROTE ROSE");
        match policy.act(&state) {
            Action::SubmitSolution(text) => assert_eq!(text, "ROTE ROSE"),
            other => panic!("expected a solution attempt, got {}", other),
        }
    }

    #[test]
    fn picks_never_repeat_revealed_letters() {
        let mut policy = Policy::seeded(100, 7);
        let mut state = view("ROTE ROSE", Phase::GuessingConsonant);
        for c in ['R', 'S'] {
            state.revealed.reveal(c);
        }
        for _ in 0..50 {
            match policy.act(&state) {
                Action::GuessConsonant(c) => {
                    assert!(letters::is_consonant(c));
                    assert!(!state.revealed.contains(c));
                }
                other => panic!("expected a consonant guess, got {}", other),
            }
        }
    }

    #[test]
    fn a_skilled_policy_peeks_at_present_consonants() {
        let mut policy = Policy::seeded(200, 7);
        let state = view("ROTE ROSE", Phase::GuessingConsonant);
        let mut hits = 0;
        for _ in 0..100 {
            if let Action::GuessConsonant(c) = policy.act(&state) {
                if occurrences(&state.text, c) > 0 {
                    hits += 1;
                }
            }
        }
        assert!(hits > 50, "only {} peeks out of 100", hits);
    }

    #[test]
    fn with_no_consonants_left_the_policy_solves() {
        let mut policy = Policy::seeded(0, 7);
        let mut state = view("ROTE ROSE", Phase::SpinOrSolve);
        for c in ['R', 'T', 'S'] {
            state.revealed.reveal(c);
        }
        assert_eq!(policy.act(&state), Action::StartSolving);
    }

    #[test]
    fn bonus_selection_fills_five_consonants_and_one_vowel() {
        let mut policy = Policy::seeded(150, 7);
        let mut state = view("WASCH- MASCHINE", Phase::BonusSelection);
        for _ in 0..6 {
            match policy.act(&state) {
                Action::BonusSelect(c) => {
                    assert!(!state.bonus_selection.contains(&c));
                    state.bonus_selection.push(c);
                }
                other => panic!("expected a pick, got {}", other),
            }
        }
        assert_eq!(policy.act(&state), Action::BonusSubmit);
        let vowels = state
            .bonus_selection
            .iter()
            .filter(|c| letters::is_vowel(**c))
            .count();
        assert_eq!(vowels, 1);
    }

    #[test]
    fn strong_policies_protect_a_big_round_score() {
        let mut policy = Policy::seeded(200, 7);
        let mut state = view("ROTE ROSE", Phase::RiskDecision);
        state.players[0].round_score = 5000;
        assert_eq!(policy.act(&state), Action::DecideRisk(false));
        state.players[0].round_score = 0;
        assert_eq!(policy.act(&state), Action::DecideRisk(true));
    }
}
