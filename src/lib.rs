//! Core engine for a Wheel-of-Fortune style word-guessing game.
//!
//! The crate implements the round/turn state machine, the scoring ledger,
//! the puzzle reveal tracker, and an AI policy that plays through the same
//! action surface a human UI would. Rendering, audio synthesis, and input
//! mapping are external collaborators: the engine emits snapshots and sound
//! cues and consumes discrete [`gameplay::Action`]s.

pub mod gameplay;
pub mod players;
pub mod puzzles;

/// Money amounts (round scores, banked totals, wheel values) in DM.
pub type Money = i64;
/// AI strength parameter in `0..=200`.
pub type Skill = u8;

/// Cost of buying a vowel.
pub const VOWEL_COST: Money = 300;
/// Consolation amount banked by a round winner who solved with zero score.
pub const CONSOLATION: Money = 200;
/// Starting capital awarded to the toss-up winner for round 1.
pub const TOSS_UP_CAPITAL: Money = 1_000;
/// Jackpot accumulator seed value.
pub const JACKPOT_SEED: Money = 5_000;
/// Base payout for declining the mystery flip.
pub const MYSTERY_SAFE: Money = 1_000;
/// Base payout for winning the mystery flip.
pub const MYSTERY_WIN: Money = 10_000;
/// Base payout for declining the risk wager.
pub const RISK_SAFE: Money = 500;
/// Flat per-letter value during an express run.
pub const EXPRESS_VALUE: Money = 1_000;
/// Cash value of each collected gift tag, awarded when the round is banked.
pub const GIFT_VALUE: Money = 1_000;
/// Consonants a bonus-round finalist must pick before submitting.
pub const BONUS_CONSONANTS: usize = 5;
/// Vowels a bonus-round finalist must pick before submitting.
pub const BONUS_VOWELS: usize = 1;
/// Fewest rounds in a game; enabled modifiers can extend this to 4.
pub const MIN_ROUNDS: u8 = 3;
/// Upper bound on players at the wheel.
pub const MAX_PLAYERS: usize = 6;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
