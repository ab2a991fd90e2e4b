//! Core domain types for the breach game
//!
//! The round state machine, the word-bank record it consumes, and the
//! adaptive difficulty advisor. Everything here is pure and synchronous;
//! I/O and presentation live in the surrounding modules.

mod advisor;
mod record;
mod round;

pub use advisor::DifficultyAdvisor;
pub use record::WordRecord;
pub use round::{BREACH_STAGES, MAX_BREACH_LEVEL, Round, RoundView};
