use serde::Serialize;

/// Everything a participant (human UI or AI policy) can do to a session.
///
/// Chance is explicit: `Spin` only starts a spin, and `Land` resolves it
/// from the session's RNG. Timers are explicit too: the toss-up ticker is
/// driven by `TossUpTick` from whoever owns the clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Action {
    /// Start a spin (main or bonus wheel, depending on phase).
    Spin,
    /// Resolve the spin in flight.
    Land,
    /// Commit to buying a vowel; the cost is deducted up front.
    StartBuyingVowel,
    BuyVowel(char),
    GuessConsonant(char),
    /// Open a solution attempt from the root decision point.
    StartSolving,
    SubmitSolution(String),
    /// Back out of a vowel purchase (refunded) or a turn solve attempt.
    Cancel,
    /// Mystery face: flip for the big payout (true) or take the safe amount.
    DecideMystery(bool),
    /// Risk face: wager the round score (true) or take the safe amount.
    DecideRisk(bool),
    /// Express face: board the express (true) or guess a plain letter.
    DecideExpress(bool),
    /// Spend the extra-spin token (true) or pass the turn.
    DecideExtraSpin(bool),
    /// A player buzzes in during the toss-up.
    TossUpBuzz(usize),
    /// The toss-up ticker fires: one more letter is revealed.
    TossUpTick,
    /// Finalist picks one of their bonus letters.
    BonusSelect(char),
    /// Finalist locks in the bonus letters and moves to the solve.
    BonusSubmit,
    /// Acknowledge a banner phase.
    Continue,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::BuyVowel(c) => write!(f, "BUY {}", c),
            Self::GuessConsonant(c) => write!(f, "GUESS {}", c),
            Self::SubmitSolution(s) => write!(f, "SOLVE {}", s),
            Self::TossUpBuzz(i) => write!(f, "BUZZ {}", i),
            Self::BonusSelect(c) => write!(f, "PICK {}", c),
            other => write!(f, "{}", format!("{:?}", other).to_uppercase()),
        }
    }
}

/// Sound and presentation cues emitted alongside a state change. The
/// engine never plays audio; it names the moments a frontend would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cue {
    /// Ticker click: one letter revealed during the toss-up.
    Click,
    /// Letters flipped on the board.
    Reveal(usize),
    Correct,
    Wrong,
    /// A rejected action; the message on the session says why.
    Warning,
    Bankrupt,
    Solve,
}

/// How the session handled an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Disposition {
    /// The action was legal and the state advanced.
    Accepted,
    /// The action was legal for the phase but failed a guard; the state
    /// is unchanged and a warning message is set.
    Rejected,
    /// The action has no meaning in the current phase; strict no-op.
    Ignored,
}

/// Result of feeding one action to the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub disposition: Disposition,
    pub cues: Vec<Cue>,
}

impl Outcome {
    pub fn accepted() -> Self {
        Self {
            disposition: Disposition::Accepted,
            cues: Vec::new(),
        }
    }
    pub fn accepted_with(cues: impl IntoIterator<Item = Cue>) -> Self {
        Self {
            disposition: Disposition::Accepted,
            cues: cues.into_iter().collect(),
        }
    }
    pub fn rejected() -> Self {
        Self {
            disposition: Disposition::Rejected,
            cues: vec![Cue::Warning],
        }
    }
    pub fn ignored() -> Self {
        Self {
            disposition: Disposition::Ignored,
            cues: Vec::new(),
        }
    }
    pub fn is_accepted(&self) -> bool {
        self.disposition == Disposition::Accepted
    }
}
