use serde::Serialize;

/// Where a solution attempt came from. A wrong turn solve passes the turn;
/// a wrong toss-up solve resumes the ticker; a wrong bonus solve ends the
/// game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SolveContext {
    Turn,
    TossUp,
    Bonus,
}

/// The session's control state. Every action is legal in a small set of
/// phases and ignored everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Toss-up opener: letters tick in until someone buzzes.
    TossUp,
    /// Display-only round banner, advanced with Continue.
    RoundStart,
    /// The active player's root decision point.
    SpinOrSolve,
    /// A spin is in flight; Land resolves it.
    Spinning,
    /// Landed on the mystery face: flip or take the safe amount.
    MysteryDecision,
    /// Landed on the risk face: wager the round score or take the safe amount.
    RiskDecision,
    /// Landed on the express face: board the express or take a plain letter.
    ExpressDecision,
    /// Awaiting a consonant guess for the face just landed on.
    GuessingConsonant,
    /// Awaiting a vowel choice, cost already committed.
    BuyingVowel,
    /// Awaiting a full-solution attempt.
    Solving(SolveContext),
    /// A miss was saved by the extra-spin token: spend it or pass.
    ExtraSpinPrompt,
    /// Display-only round result, advanced with Continue.
    RoundEnd,
    /// Display-only bonus-round banner, advanced with Continue.
    BonusIntro,
    /// Finalist spins the bonus wheel for a hidden prize.
    BonusSpin,
    /// The bonus spin is in flight.
    BonusSpinning,
    /// Finalist picks five consonants and one vowel.
    BonusSelection,
    /// Terminal.
    GameOver,
}

impl Phase {
    /// Phases that only show a banner and wait for acknowledgement.
    pub fn is_banner(&self) -> bool {
        matches!(self, Self::RoundStart | Self::RoundEnd | Self::BonusIntro)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::GameOver)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
