//! AI participants.
//!
//! A [`Policy`] observes [`crate::gameplay::Snapshot`]s and emits
//! [`crate::gameplay::Action`]s through the same surface a human frontend
//! would, so it can never do anything a button could not. [`Table`] wires
//! one policy per seat and drives a full unattended game.

pub mod policy;
pub use policy::*;

pub mod table;
pub use table::*;
