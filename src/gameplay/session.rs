use super::action::Action;
use super::action::Cue;
use super::action::Outcome;
use super::board::occurrences;
use super::board::Reveals;
use super::config::GameConfig;
use super::letters;
use super::phase::Phase;
use super::phase::SolveContext;
use super::player;
use super::player::Player;
use super::player::GIFT_CATALOG;
use super::segment;
use super::segment::Kind;
use super::snapshot::Snapshot;
use crate::puzzles::Difficulty;
use crate::puzzles::Library;
use crate::puzzles::Puzzle;
use crate::puzzles::PuzzleSource;
use crate::Money;
use crate::EXPRESS_VALUE;
use crate::JACKPOT_SEED;
use crate::MYSTERY_SAFE;
use crate::MYSTERY_WIN;
use crate::RISK_SAFE;
use crate::TOSS_UP_CAPITAL;
use crate::VOWEL_COST;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

/// A full game from the opening toss-up to the bonus-round verdict.
///
/// The session is a synchronous state machine: it consumes one [`Action`]
/// at a time, reports how it was handled, and never blocks or spawns.
/// Chance lives behind explicit actions (`Land` resolves a spin from the
/// session's own RNG), so a seeded session replays identically.
pub struct Session {
    config: GameConfig,
    players: Vec<Player>,
    phase: Phase,
    round: u8,
    active: usize,
    puzzle: Puzzle,
    reveals: Reveals,
    ticker: Vec<char>,
    used_categories: Vec<String>,
    rotation: u32,
    last_spin: Money,
    mystery_revealed: bool,
    free_play_turn: bool,
    risk_turn: bool,
    express_run: bool,
    jackpot_armed: bool,
    jackpot: Money,
    vowel_paid: Money,
    bonus_selection: Vec<char>,
    bonus_prize: Money,
    message: String,
    rng: SmallRng,
    source: Box<dyn PuzzleSource>,
}

impl Session {
    pub fn new(config: GameConfig) -> anyhow::Result<Self> {
        let seed = rand::random();
        Self::with_source(config, Box::new(Library::seeded(seed)), seed)
    }

    /// Deterministic session: same config, seed, and action sequence give
    /// the same game.
    pub fn seeded(config: GameConfig, seed: u64) -> anyhow::Result<Self> {
        Self::with_source(config, Box::new(Library::seeded(seed)), seed)
    }

    pub fn with_source(
        config: GameConfig,
        source: Box<dyn PuzzleSource>,
        seed: u64,
    ) -> anyhow::Result<Self> {
        let config = config.validated()?;
        let players = config
            .players
            .iter()
            .enumerate()
            .map(|(i, spec)| Player::new(i, spec.name.clone(), spec.controller))
            .collect();
        let mut session = Self {
            config,
            players,
            phase: Phase::GameOver,
            round: 1,
            active: 0,
            puzzle: Puzzle::new("", ""),
            reveals: Reveals::default(),
            ticker: Vec::new(),
            used_categories: Vec::new(),
            rotation: 0,
            last_spin: 0,
            mystery_revealed: false,
            free_play_turn: false,
            risk_turn: false,
            express_run: false,
            jackpot_armed: false,
            jackpot: JACKPOT_SEED,
            vowel_paid: 0,
            bonus_selection: Vec::new(),
            bonus_prize: 0,
            message: String::new(),
            rng: SmallRng::seed_from_u64(seed),
            source,
        };
        if session.config.toss_up {
            session.start_toss_up();
        } else {
            session.start_round(1, 0, 0);
        }
        Ok(session)
    }
}

/// Accessors.
impl Session {
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn round(&self) -> u8 {
        self.round
    }
    pub fn active(&self) -> usize {
        self.active
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }
    pub fn reveals(&self) -> &Reveals {
        &self.reveals
    }
    pub fn jackpot(&self) -> Money {
        self.jackpot
    }
    pub fn bonus_prize(&self) -> Money {
        self.bonus_prize
    }
    pub fn message(&self) -> &str {
        &self.message
    }
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Per-round value multiplier: face values double each round.
    fn multiplier(&self) -> Money {
        1 << (self.round - 1)
    }

    pub fn snapshot(&self) -> Snapshot {
        let faces = match self.phase {
            Phase::BonusSpin
            | Phase::BonusSpinning
            | Phase::BonusSelection
            | Phase::Solving(SolveContext::Bonus) => {
                segment::resolve_bonus(self.players[self.active].million_wedge).to_vec()
            }
            _ => segment::resolve(self.round, &self.config, self.mystery_revealed).to_vec(),
        };
        Snapshot {
            phase: self.phase,
            round: self.round,
            total_rounds: self.config.total_rounds(),
            active: self.active,
            players: self.players.clone(),
            category: self.puzzle.category.clone(),
            text: self.puzzle.text.clone(),
            revealed: self.reveals.clone(),
            faces,
            last_spin: self.last_spin,
            jackpot: self.jackpot,
            free_play: self.free_play_turn,
            express_run: self.express_run,
            bonus_prize: self.bonus_prize,
            bonus_selection: self.bonus_selection.clone(),
            message: self.message.clone(),
        }
    }
}

/// Action dispatch. Every (phase, action) pair outside this table is a
/// strict no-op.
impl Session {
    pub fn act(&mut self, action: Action) -> Outcome {
        match (self.phase, action) {
            (Phase::TossUp, Action::TossUpTick) => self.tick(),
            (Phase::TossUp, Action::TossUpBuzz(player)) => self.buzz(player),
            (Phase::RoundStart, Action::Continue) => self.open_round(),
            (Phase::SpinOrSolve, Action::Spin) => self.spin(),
            (Phase::SpinOrSolve, Action::StartBuyingVowel) => self.start_buying_vowel(),
            (Phase::SpinOrSolve, Action::StartSolving) => self.start_solving(),
            (Phase::SpinOrSolve, Action::GuessConsonant(c)) if self.express_run => {
                self.guess_consonant(c)
            }
            (Phase::Spinning, Action::Land) => {
                let rotation = self.throw();
                self.land(rotation)
            }
            (Phase::GuessingConsonant, Action::GuessConsonant(c)) => self.guess_consonant(c),
            (Phase::BuyingVowel, Action::BuyVowel(c)) => self.buy_vowel(c),
            (Phase::BuyingVowel, Action::Cancel) => self.cancel_vowel(),
            (Phase::Solving(SolveContext::Turn), Action::Cancel) => self.cancel_solving(),
            (Phase::Solving(context), Action::SubmitSolution(guess)) => self.solve(context, &guess),
            (Phase::MysteryDecision, Action::DecideMystery(flip)) => self.decide_mystery(flip),
            (Phase::RiskDecision, Action::DecideRisk(wager)) => self.decide_risk(wager),
            (Phase::ExpressDecision, Action::DecideExpress(board)) => self.decide_express(board),
            (Phase::ExtraSpinPrompt, Action::DecideExtraSpin(spend)) => {
                self.decide_extra_spin(spend)
            }
            (Phase::RoundEnd, Action::Continue) => self.advance_round(),
            (Phase::BonusIntro, Action::Continue) => self.start_bonus(),
            (Phase::BonusSpin, Action::Spin) => self.spin_bonus(),
            (Phase::BonusSpinning, Action::Land) => {
                let rotation = self.throw();
                self.land_bonus(rotation)
            }
            (Phase::BonusSelection, Action::BonusSelect(c)) => self.bonus_select(c),
            (Phase::BonusSelection, Action::BonusSubmit) => self.bonus_submit(),
            _ => Outcome::ignored(),
        }
    }
}

/// Setup and flow control.
impl Session {
    fn start_toss_up(&mut self) {
        let puzzle = self.fetch(Difficulty::Easy);
        self.reveals = Reveals::opening(&puzzle.text);
        self.ticker.clear();
        for c in puzzle.text.chars().filter(|c| letters::is_letter(*c)) {
            if !self.ticker.contains(&c) {
                self.ticker.push(c);
            }
        }
        self.puzzle = puzzle;
        self.message = "SCHNELLRATERUNDE!".into();
        self.phase = Phase::TossUp;
        log::info!("toss-up opens on category {}", self.puzzle.category);
    }

    fn start_round(&mut self, round: u8, starter: usize, capital: Money) {
        self.round = round;
        self.active = starter;
        player::clear_round_state(&mut self.players, starter, capital);
        self.last_spin = 0;
        self.mystery_revealed = false;
        self.free_play_turn = false;
        self.risk_turn = false;
        self.express_run = false;
        self.jackpot_armed = false;
        self.vowel_paid = 0;
        let puzzle = self.fetch(Difficulty::for_round(round));
        self.used_categories.push(puzzle.category.clone());
        self.reveals = Reveals::opening(&puzzle.text);
        self.puzzle = puzzle;
        self.message = if self.config.mystery.contains(round) {
            format!("MYSTERY RUNDE {}!", round)
        } else {
            format!("RUNDE {}", round)
        };
        self.phase = Phase::RoundStart;
        log::info!(
            "round {} opens on category {}, {} starts",
            round,
            self.puzzle.category,
            self.players[starter].name
        );
    }

    /// Pulls a puzzle from the source, retrying once; a source that keeps
    /// failing is replaced by the built-in library for this draw.
    fn fetch(&mut self, difficulty: Difficulty) -> Puzzle {
        for _ in 0..2 {
            match self
                .source
                .fetch(difficulty, &self.used_categories, &self.config.theme)
            {
                Ok(puzzle) => return Puzzle::sanitized(&puzzle.category, &puzzle.text),
                Err(e) => log::warn!("puzzle source failed: {:#}", e),
            }
        }
        let seed = self.rng.random();
        Library::seeded(seed).draw(difficulty, &self.used_categories)
    }

    fn open_round(&mut self) -> Outcome {
        self.message.clear();
        self.phase = Phase::SpinOrSolve;
        Outcome::accepted()
    }

    /// Turn passes to the left; per-turn modifier state and the display
    /// message die with the turn. Callers set their own message afterwards.
    fn next_turn(&mut self) {
        self.active = (self.active + 1) % self.players.len();
        self.free_play_turn = false;
        self.risk_turn = false;
        self.express_run = false;
        self.jackpot_armed = false;
        self.message.clear();
        self.phase = Phase::SpinOrSolve;
    }

    /// A lost turn is saved by the extra-spin token if the player holds
    /// one. Risk and express losses never come through here.
    fn token_or_next(&mut self) {
        if self.players[self.active].extra_spin {
            self.phase = Phase::ExtraSpinPrompt;
        } else {
            self.next_turn();
        }
    }

    fn advance_round(&mut self) -> Outcome {
        if self.round < self.config.total_rounds() {
            let next = self.round + 1;
            let starter = (next as usize - 1) % self.players.len();
            self.start_round(next, starter, 0);
        } else {
            self.active = player::finalist(&self.players);
            self.message = format!(
                "FINALE! {} spielt um den Hauptpreis!",
                self.players[self.active].name
            );
            self.phase = Phase::BonusIntro;
            log::info!("{} reaches the bonus round", self.players[self.active].name);
        }
        Outcome::accepted()
    }

    fn game_over(&mut self) {
        self.reveals = Reveals::full(&self.puzzle.text);
        self.phase = Phase::GameOver;
        log::info!("game over");
    }

    fn reject(&mut self, message: &str) -> Outcome {
        log::warn!("rejected in {}: {}", self.phase, message);
        self.message = message.into();
        Outcome::rejected()
    }
}

/// Toss-up.
impl Session {
    fn tick(&mut self) -> Outcome {
        if self.ticker.is_empty() {
            return Outcome::ignored();
        }
        let c = self.ticker.remove(0);
        self.reveals.reveal(c);
        Outcome::accepted_with([Cue::Click, Cue::Reveal(occurrences(&self.puzzle.text, c))])
    }

    fn buzz(&mut self, player: usize) -> Outcome {
        if player >= self.players.len() {
            return self.reject("Unbekannter Spieler.");
        }
        self.active = player;
        self.phase = Phase::Solving(SolveContext::TossUp);
        Outcome::accepted()
    }
}

/// Spinning and landing.
impl Session {
    fn spin(&mut self) -> Outcome {
        if self.express_run {
            return self.reject("Im Express wird nicht gedreht.");
        }
        if !self.free_play_turn
            && !self
                .reveals
                .has_unrevealed(&self.puzzle.text, letters::is_consonant)
        {
            return self.reject("Keine Konsonanten mehr! Bitte lösen.");
        }
        self.message.clear();
        self.phase = Phase::Spinning;
        Outcome::accepted_with([Cue::Click])
    }

    fn spin_bonus(&mut self) -> Outcome {
        self.message.clear();
        self.phase = Phase::BonusSpinning;
        Outcome::accepted_with([Cue::Click])
    }

    fn throw(&mut self) -> u32 {
        self.rotation += 1080 + self.rng.random_range(0..720);
        self.rotation
    }

    fn land(&mut self, rotation: u32) -> Outcome {
        let faces = segment::resolve(self.round, &self.config, self.mystery_revealed);
        let stopper = segment::stopper(self.active, self.players.len());
        let face = segment::pick(&faces, rotation, stopper);
        let value = face.value * self.multiplier();
        if self.config.jackpot && face.kind == Kind::Value && value > 0 {
            self.jackpot += value;
        }
        log::debug!("{} lands on {}", self.players[self.active].name, face.label);
        match face.kind {
            Kind::Value => {
                self.last_spin = value;
                self.phase = Phase::GuessingConsonant;
                Outcome::accepted()
            }
            Kind::Mystery => {
                self.message = "MYSTERY FELD! Risiko oder Sicherheit?".into();
                self.phase = Phase::MysteryDecision;
                Outcome::accepted()
            }
            Kind::Risk => {
                self.message = "RISIKO FELD! Willst du es wagen?".into();
                self.phase = Phase::RiskDecision;
                Outcome::accepted()
            }
            Kind::Express => {
                self.message = "EXPRESS! Einsteigen oder normal spielen?".into();
                self.phase = Phase::ExpressDecision;
                Outcome::accepted()
            }
            Kind::Bankrupt => {
                self.players[self.active].bankrupt();
                self.token_or_next();
                self.message = "BANKROTT!".into();
                Outcome::accepted_with([Cue::Bankrupt])
            }
            Kind::LoseTurn => {
                self.token_or_next();
                self.message = "AUSSETZEN!".into();
                Outcome::accepted_with([Cue::Wrong])
            }
            Kind::ExtraSpin => {
                self.players[self.active].extra_spin = true;
                self.message = "EXTRA DREH GEWONNEN! NOCHMAL DREHEN!".into();
                self.phase = Phase::SpinOrSolve;
                Outcome::accepted_with([Cue::Correct])
            }
            Kind::FreePlay => {
                self.free_play_turn = true;
                self.last_spin = 0;
                self.message = "FREISPIEL! Vokal oder Konsonant ohne Risiko.".into();
                self.phase = Phase::GuessingConsonant;
                Outcome::accepted()
            }
            Kind::Jackpot => {
                self.last_spin = value;
                self.jackpot_armed = true;
                self.message = format!("JACKPOT CHANCE! ({} DM)", self.jackpot);
                self.phase = Phase::GuessingConsonant;
                Outcome::accepted()
            }
            Kind::Gift => {
                let gift = GIFT_CATALOG[self.rng.random_range(0..GIFT_CATALOG.len())];
                self.players[self.active].inventory.push(gift);
                self.last_spin = value;
                self.message = format!("GESCHENK AUFGEDECKT: {}!", gift);
                self.phase = Phase::GuessingConsonant;
                Outcome::accepted_with([Cue::Correct])
            }
            Kind::Million => {
                self.players[self.active].million_wedge = true;
                self.last_spin = RISK_SAFE * self.multiplier();
                self.message = "MILLIONEN-KEIL EINGESAMMELT!".into();
                self.phase = Phase::GuessingConsonant;
                Outcome::accepted_with([Cue::Correct])
            }
        }
    }
}

/// Face decisions.
impl Session {
    fn decide_mystery(&mut self, flip: bool) -> Outcome {
        if !flip {
            self.last_spin = MYSTERY_SAFE * self.multiplier();
            self.message = "Sicher gespielt: 1.000er Wert.".into();
            self.phase = Phase::GuessingConsonant;
            return Outcome::accepted();
        }
        self.mystery_revealed = true;
        let good = self.rng.random_bool(0.5);
        self.resolve_mystery(good)
    }

    /// The flipped mystery face pays huge or bankrupts, 50/50.
    fn resolve_mystery(&mut self, good: bool) -> Outcome {
        if good {
            self.last_spin = MYSTERY_WIN * self.multiplier();
            self.message = "GLÜCKWUNSCH! 10.000er WERT!".into();
            self.phase = Phase::GuessingConsonant;
            Outcome::accepted_with([Cue::Correct])
        } else {
            self.players[self.active].bankrupt();
            self.token_or_next();
            self.message = "BANKROTT! Risiko verloren.".into();
            Outcome::accepted_with([Cue::Bankrupt])
        }
    }

    fn decide_risk(&mut self, wager: bool) -> Outcome {
        if wager {
            self.risk_turn = true;
            self.message = "RISIKO! Alles oder Nichts.".into();
        } else {
            self.last_spin = RISK_SAFE * self.multiplier();
            self.message = "Sicher gespielt für 500.".into();
        }
        self.phase = Phase::GuessingConsonant;
        Outcome::accepted()
    }

    fn decide_express(&mut self, board: bool) -> Outcome {
        if board {
            self.express_run = true;
            self.message = "EXPRESS! Jeder Konsonant zahlt 1.000 DM.".into();
        } else {
            self.last_spin = EXPRESS_VALUE * self.multiplier();
            self.message = "Normal weitergespielt.".into();
        }
        self.phase = Phase::GuessingConsonant;
        Outcome::accepted()
    }

    fn decide_extra_spin(&mut self, spend: bool) -> Outcome {
        if spend {
            self.players[self.active].extra_spin = false;
            self.message = "EXTRA DREH EINGESETZT! Du bist noch einmal dran.".into();
            self.phase = Phase::SpinOrSolve;
        } else {
            self.next_turn();
            self.message = "Kein Extra Dreh eingesetzt.".into();
        }
        Outcome::accepted()
    }
}

/// Letters and solutions.
impl Session {
    fn guess_consonant(&mut self, c: char) -> Outcome {
        let c = letters::normalized(c);
        if !letters::is_consonant(c) {
            return self.reject("Nur Konsonanten.");
        }
        if self.reveals.contains(c) {
            return self.reject("Schon aufgedeckt.");
        }
        self.reveals.reveal(c);
        let count = occurrences(&self.puzzle.text, c);
        if count > 0 {
            if self.risk_turn {
                self.risk_turn = false;
                self.players[self.active].round_score *= 2;
                self.message = format!("RISIKO GEWONNEN! {}x {}. Alles verdoppelt!", count, c);
            } else if self.express_run {
                let won = EXPRESS_VALUE * count as Money;
                self.players[self.active].round_score += won;
                self.message = format!("{}x {}! (+{} DM) Der Express rollt.", count, c, won);
            } else {
                let won = self.last_spin * count as Money;
                self.players[self.active].round_score += won;
                self.message = format!("{}x {}! (+{} DM)", count, c, won);
            }
            self.phase = Phase::SpinOrSolve;
            Outcome::accepted_with([Cue::Reveal(count), Cue::Correct])
        } else if self.risk_turn {
            // the wager is lost outright; the token cannot save it, and
            // the million wedge goes with the stake
            self.risk_turn = false;
            self.players[self.active].round_score = 0;
            self.players[self.active].million_wedge = false;
            self.next_turn();
            self.message = format!("RISIKO VERLOREN! Kein {}. Alles weg.", c);
            Outcome::accepted_with([Cue::Wrong])
        } else if self.express_run {
            // derailing the express is a full bankruptcy, token or not
            self.players[self.active].bankrupt();
            self.next_turn();
            self.message = format!("EXPRESS ENTGLEIST! Kein {}. BANKROTT!", c);
            Outcome::accepted_with([Cue::Wrong, Cue::Bankrupt])
        } else if self.free_play_turn {
            self.message = format!("Kein {}. (Freispiel - Kein Verlust)", c);
            self.phase = Phase::SpinOrSolve;
            Outcome::accepted_with([Cue::Wrong])
        } else {
            self.token_or_next();
            self.message = format!("Leider kein {}.", c);
            Outcome::accepted_with([Cue::Wrong])
        }
    }

    fn start_buying_vowel(&mut self) -> Outcome {
        if !self
            .reveals
            .has_unrevealed(&self.puzzle.text, letters::is_vowel)
        {
            return self.reject("Keine Vokale mehr!");
        }
        if self.free_play_turn {
            self.vowel_paid = 0;
        } else {
            if self.players[self.active].round_score < VOWEL_COST {
                return self.reject("Zu wenig Geld für einen Vokal.");
            }
            self.players[self.active].round_score -= VOWEL_COST;
            self.vowel_paid = VOWEL_COST;
        }
        self.phase = Phase::BuyingVowel;
        Outcome::accepted()
    }

    fn cancel_vowel(&mut self) -> Outcome {
        self.players[self.active].round_score += self.vowel_paid;
        self.vowel_paid = 0;
        self.phase = Phase::SpinOrSolve;
        Outcome::accepted()
    }

    fn buy_vowel(&mut self, c: char) -> Outcome {
        let c = letters::normalized(c);
        if !letters::is_vowel(c) {
            return self.reject("Nur Vokale.");
        }
        if self.reveals.contains(c) {
            return self.reject("Schon aufgedeckt.");
        }
        // the cost was committed at StartBuyingVowel; a miss is not refunded
        self.vowel_paid = 0;
        self.reveals.reveal(c);
        let count = occurrences(&self.puzzle.text, c);
        if count > 0 {
            self.message = if self.free_play_turn {
                format!("{}x {} (Gratis).", count, c)
            } else {
                format!("{}x {} gekauft.", count, c)
            };
            self.phase = Phase::SpinOrSolve;
            Outcome::accepted_with([Cue::Reveal(count), Cue::Correct])
        } else if self.express_run {
            // a missed vowel derails the express like any other miss
            self.players[self.active].bankrupt();
            self.next_turn();
            self.message = format!("EXPRESS ENTGLEIST! Kein {}. BANKROTT!", c);
            Outcome::accepted_with([Cue::Wrong, Cue::Bankrupt])
        } else if self.free_play_turn {
            self.message = format!("Kein {}. (Freispiel - Kein Verlust)", c);
            self.phase = Phase::SpinOrSolve;
            Outcome::accepted_with([Cue::Wrong])
        } else {
            self.token_or_next();
            self.message = format!("Kein {}.", c);
            Outcome::accepted_with([Cue::Wrong])
        }
    }

    fn start_solving(&mut self) -> Outcome {
        self.message.clear();
        self.phase = Phase::Solving(SolveContext::Turn);
        Outcome::accepted()
    }

    fn cancel_solving(&mut self) -> Outcome {
        self.phase = Phase::SpinOrSolve;
        Outcome::accepted()
    }

    fn solve(&mut self, context: SolveContext, guess: &str) -> Outcome {
        if letters::canonical(guess) == letters::canonical(&self.puzzle.text) {
            self.reveals = Reveals::full(&self.puzzle.text);
            match context {
                SolveContext::TossUp => {
                    let winner = self.active;
                    log::info!("{} wins the toss-up", self.players[winner].name);
                    self.start_round(1, winner, TOSS_UP_CAPITAL);
                    self.message = "SCHNELLRUNDE GEWONNEN! (+1000 DM Startkapital)".into();
                }
                SolveContext::Turn => {
                    if self.jackpot_armed {
                        self.players[self.active].round_score += self.jackpot;
                        log::info!(
                            "{} cracks the jackpot worth {}",
                            self.players[self.active].name,
                            self.jackpot
                        );
                        self.jackpot = JACKPOT_SEED;
                        self.jackpot_armed = false;
                    }
                    let banked = player::bank_round_winnings(&mut self.players, self.active);
                    self.message = format!(
                        "Runde vorbei! {} gewinnt {} DM.",
                        self.players[self.active].name, banked
                    );
                    self.phase = Phase::RoundEnd;
                }
                SolveContext::Bonus => {
                    self.players[self.active].banked += self.bonus_prize;
                    self.message = format!("BONUS GEWONNEN! +{} DM", self.bonus_prize);
                    self.game_over();
                }
            }
            Outcome::accepted_with([Cue::Solve])
        } else {
            match context {
                SolveContext::TossUp => {
                    // anyone may buzz again; the ticker resumes where it was
                    self.message = "Falsch!".into();
                    self.phase = Phase::TossUp;
                }
                SolveContext::Turn => {
                    if self.express_run {
                        self.players[self.active].bankrupt();
                        self.next_turn();
                        self.message = "EXPRESS ENTGLEIST! Das war falsch. BANKROTT!".into();
                    } else {
                        self.token_or_next();
                        self.message = "Das war falsch.".into();
                    }
                }
                SolveContext::Bonus => {
                    self.message = format!("Das war falsch. Lösung: {}", self.puzzle.text);
                    self.game_over();
                }
            }
            Outcome::accepted_with([Cue::Wrong])
        }
    }
}

/// Bonus round.
impl Session {
    fn start_bonus(&mut self) -> Outcome {
        let puzzle = self.fetch(Difficulty::Hard);
        self.used_categories.push(puzzle.category.clone());
        self.reveals = Reveals::opening(&puzzle.text);
        self.puzzle = puzzle;
        self.bonus_selection.clear();
        self.message = "Dreh am Bonusrad!".into();
        self.phase = Phase::BonusSpin;
        Outcome::accepted()
    }

    fn land_bonus(&mut self, rotation: u32) -> Outcome {
        let faces = segment::resolve_bonus(self.players[self.active].million_wedge);
        let stopper = segment::stopper(self.active, self.players.len());
        self.bonus_prize = segment::pick(&faces, rotation, stopper).value;
        self.message = "Preis ermittelt!".into();
        self.phase = Phase::BonusSelection;
        Outcome::accepted()
    }

    fn bonus_select(&mut self, c: char) -> Outcome {
        let c = letters::normalized(c);
        if !letters::is_letter(c) {
            return self.reject("Nur Buchstaben.");
        }
        if self.bonus_selection.contains(&c) || self.reveals.contains(c) {
            return self.reject("Schon gewählt.");
        }
        let (consonants, vowels) = self.selection_counts();
        if letters::is_consonant(c) && consonants >= crate::BONUS_CONSONANTS {
            return self.reject("Schon fünf Konsonanten gewählt.");
        }
        if letters::is_vowel(c) && vowels >= crate::BONUS_VOWELS {
            return self.reject("Schon einen Vokal gewählt.");
        }
        self.bonus_selection.push(c);
        Outcome::accepted()
    }

    fn bonus_submit(&mut self) -> Outcome {
        let (consonants, vowels) = self.selection_counts();
        if consonants != crate::BONUS_CONSONANTS || vowels != crate::BONUS_VOWELS {
            return self.reject("Fünf Konsonanten und ein Vokal, bitte.");
        }
        let mut revealed = 0;
        for c in self.bonus_selection.clone() {
            revealed += occurrences(&self.puzzle.text, c);
            self.reveals.reveal(c);
        }
        self.message = "Eine Chance. Viel Glück!".into();
        self.phase = Phase::Solving(SolveContext::Bonus);
        Outcome::accepted_with([Cue::Reveal(revealed)])
    }

    fn selection_counts(&self) -> (usize, usize) {
        let consonants = self
            .bonus_selection
            .iter()
            .filter(|c| letters::is_consonant(**c))
            .count();
        let vowels = self
            .bonus_selection
            .iter()
            .filter(|c| letters::is_vowel(**c))
            .count();
        (consonants, vowels)
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let snapshot = self.snapshot();
        writeln!(
            f,
            "Runde {}/{} [{}] {}",
            self.round,
            self.config.total_rounds(),
            self.phase,
            self.puzzle.category
        )?;
        writeln!(f, "  {}", snapshot.masked_text())?;
        for (index, player) in self.players.iter().enumerate() {
            let marker = if index == self.active { ">" } else { " " };
            writeln!(f, " {} {}", marker, player)?;
        }
        Ok(())
    }
}
