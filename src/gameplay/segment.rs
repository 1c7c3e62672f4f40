use crate::Money;
use serde::Serialize;

/// What landing on a wheel face does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Kind {
    Value,
    Bankrupt,
    LoseTurn,
    ExtraSpin,
    Mystery,
    Risk,
    Express,
    Jackpot,
    FreePlay,
    Gift,
    Million,
}

/// One face of the wheel.
///
/// `value` is the pre-multiplier base; the session applies the per-round
/// doubling. `color` is display-only and carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub label: &'static str,
    pub value: Money,
    pub kind: Kind,
    pub color: &'static str,
}

const fn value(label: &'static str, value: Money, color: &'static str) -> Segment {
    Segment {
        label,
        value,
        kind: Kind::Value,
        color,
    }
}

const fn special(label: &'static str, kind: Kind, color: &'static str) -> Segment {
    Segment {
        label,
        value: 0,
        kind,
        color,
    }
}

/// Number of faces on the main wheel.
pub const WHEEL: usize = 24;
/// Number of faces on the bonus wheel.
pub const BONUS_WHEEL: usize = 12;

/// The fixed 24-face base template. Overrides replace individual indices;
/// the layout itself never changes.
pub const TEMPLATE: [Segment; WHEEL] = [
    value("1000", 1000, "#FACC15"),
    value("200", 200, "#4ADE80"),
    value("300", 300, "#22C55E"),
    value("400", 400, "#FB923C"),
    value("500", 500, "#F59E0B"),
    value("1000", 1000, "#FACC15"),
    value("200", 200, "#F87171"),
    value("300", 300, "#EF4444"),
    value("800", 800, "#0EA5E9"),
    value("750", 750, "#0284C7"),
    value("350", 350, "#A855F7"),
    special("EXTRA", Kind::ExtraSpin, "#D946EF"),
    value("700", 700, "#E879F9"),
    special("BANKROTT", Kind::Bankrupt, "#1F2937"),
    value("250", 250, "#FDE047"),
    value("600", 600, "#DC2626"),
    value("400", 400, "#F97316"),
    value("150", 150, "#FDBA74"),
    value("450", 450, "#06B6D4"),
    special("AUSSETZEN", Kind::LoseTurn, "#84CC16"),
    value("400", 400, "#A3E635"),
    value("250", 250, "#60A5FA"),
    value("900", 900, "#EAB308"),
    value("150", 150, "#FAFAFA"),
];

/// Bonus wheel: prize amounts hidden behind "?" faces. The top prize face
/// is only worth a million while the finalist holds the million wedge;
/// otherwise it falls back to the table value.
pub const BONUS_TEMPLATE: [Segment; BONUS_WHEEL] = [
    value("?", 10_000, "#FACC15"),
    value("?", 20_000, "#EF4444"),
    value("?", 30_000, "#3B82F6"),
    value("?", 40_000, "#A855F7"),
    value("?", 50_000, "#10B981"),
    value("?", 75_000, "#F97316"),
    value("?", 100_000, "#EC4899"),
    value("?", 30_000, "#6366F1"),
    value("?", 50_000, "#84CC16"),
    value("?", 20_000, "#14B8A6"),
    value("?", 40_000, "#EAB308"),
    value("?", 10_000, "#64748B"),
];

/// Face index of the top bonus prize, upgraded to a million for a
/// million-wedge finalist.
pub const BONUS_TOP_INDEX: usize = 6;
pub const BONUS_TOP_PRIZE: Money = 1_000_000;

// Override indices on the main wheel.
const JACKPOT_INDEX: usize = 1;
const RISK_INDEX: usize = 4;
const MYSTERY_INDICES: [usize; 2] = [6, 17];
const EXPRESS_INDEX: usize = 9;
const MILLION_INDEX: usize = 12;
const FREE_PLAY_INDEX: usize = 14;
const GIFT_INDEX: usize = 23;
/// Index 11 is the extra-spin face in the base template; disabling the
/// modifier turns it back into a plain 350 face.
const EXTRA_SPIN_INDEX: usize = 11;

/// Resolves the concrete 24-face wheel for a spin.
///
/// Pure function of the inputs, so identical config and state always
/// produce a bit-identical wheel. Overrides are applied in a fixed
/// precedence order, later writes winning on index collisions:
/// base template, global toggles (jackpot, free play, gift), per-round
/// modifiers (risk, express, million trio, extra spin), mystery last.
pub fn resolve(round: u8, config: &crate::gameplay::GameConfig, mystery_revealed: bool) -> [Segment; WHEEL] {
    let mut faces = TEMPLATE;
    if config.jackpot {
        faces[JACKPOT_INDEX] = Segment {
            label: "JACKPOT",
            value: 500,
            kind: Kind::Jackpot,
            color: "#B91C1C",
        };
    }
    if config.free_play {
        faces[FREE_PLAY_INDEX] = special("FREI", Kind::FreePlay, "#4C1D95");
    }
    if config.gift_tags {
        faces[GIFT_INDEX] = Segment {
            label: "GESCHENK",
            value: 1000,
            kind: Kind::Gift,
            color: "#EC4899",
        };
    }
    if config.risk.contains(round) {
        faces[RISK_INDEX] = special("RISIKO", Kind::Risk, "#000000");
    }
    if config.express.contains(round) {
        faces[EXPRESS_INDEX] = Segment {
            label: "EXPRESS",
            value: 1000,
            kind: Kind::Express,
            color: "#0F766E",
        };
    }
    if !config.extra_spin.contains(round) {
        faces[EXTRA_SPIN_INDEX] = value("350", 350, "#D946EF");
    }
    if config.million.contains(round) {
        // the wedge travels with two forced bankrupts, one on each side
        faces[MILLION_INDEX] = special("MILLION", Kind::Million, "#065F46");
        faces[MILLION_INDEX - 1] = special("BANKROTT", Kind::Bankrupt, "#1F2937");
        faces[MILLION_INDEX + 1] = special("BANKROTT", Kind::Bankrupt, "#1F2937");
    }
    if config.mystery.contains(round) {
        for index in MYSTERY_INDICES {
            faces[index] = if mystery_revealed {
                value("1000", 1000, "#9333EA")
            } else {
                special("?", Kind::Mystery, "#7E22CE")
            };
        }
    }
    faces
}

/// Bonus wheel faces for the given finalist.
pub fn resolve_bonus(million_wedge: bool) -> [Segment; BONUS_WHEEL] {
    let mut faces = BONUS_TEMPLATE;
    if million_wedge {
        faces[BONUS_TOP_INDEX] = value("?", BONUS_TOP_PRIZE, "#EC4899");
    }
    faces
}

/// Stopper angle for a player position, evenly spaced around the rim.
/// Three players sit at 0, 120, and 240 degrees.
pub fn stopper(position: usize, players: usize) -> u32 {
    debug_assert!(players > 0 && position < players);
    (position as u32) * (360 / players as u32)
}

/// Maps a finished spin to the face under the player's stopper.
///
/// `hit = (stopper - rotation) mod 360`, then integer division by the
/// face width. Total and deterministic: every rotation lands on exactly
/// one face, and sweeping the rotation by one face width steps the index
/// by exactly one.
pub fn pick(faces: &[Segment], rotation: u32, stopper: u32) -> Segment {
    let n = faces.len() as u32;
    let width = 360 / n;
    let hit = (stopper + 360 - rotation % 360) % 360;
    let index = (hit / width) % n;
    faces[index as usize]
}
