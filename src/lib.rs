//! Breach Terminal
//!
//! A word-guessing game styled as a terminal hacking simulation: decrypt the
//! target word letter by letter before the breach level maxes out. An
//! adaptive difficulty advisor tunes each round to the player's win streak.
//!
//! # Quick Start
//!
//! ```rust
//! use breach_terminal::core::{Round, WordRecord};
//!
//! let record = WordRecord {
//!     word: "CIPHER".to_string(),
//!     difficulty: 1,
//!     category: "Cryptography".to_string(),
//!     hints: vec![],
//!     definition: None,
//! };
//!
//! let mut round = Round::new(&record);
//! round.guess_letter('C');
//! assert_eq!(round.masked_display(), "C _ _ _ _ _");
//! ```

// Core domain types
pub mod core;

// Word bank
pub mod bank;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// HTTP adapter
pub mod web;
