pub mod action;
pub use action::*;

pub mod board;
pub use board::*;

pub mod config;
pub use config::*;

pub mod letters;
pub use letters::*;

pub mod phase;
pub use phase::*;

pub mod player;
pub use player::*;

pub mod segment;
pub use segment::*;

pub mod session;
pub use session::*;

pub mod snapshot;
pub use snapshot::*;
