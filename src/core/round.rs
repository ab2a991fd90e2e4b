//! Round state machine
//!
//! A `Round` owns one play-through's mutable state: the masked target, the
//! guessed-letter set, the breach level, and the hint cursor. Letter and
//! word guesses drive it from `Active` to `Won` or `Lost`; once terminal,
//! every operation is a no-op that only updates the status message.

use crate::core::record::WordRecord;
use rustc_hash::FxHashSet;
use serde::Serialize;

/// Breach level at which the round is lost
pub const MAX_BREACH_LEVEL: u8 = 5;

/// Severity labels indexed by breach level (clamped to the last entry)
pub const BREACH_STAGES: [&str; 6] = [
    "Secure",
    "Firewall Weakened",
    "Encryption Broken",
    "Credentials Exposed",
    "Unauthorized Access",
    "SYSTEM COMPROMISED",
];

/// Placeholder shown for unrevealed letters
const MASK_CHAR: char = '_';

/// One round of the breach game
///
/// Created fresh from a [`WordRecord`] and discarded when the round ends.
/// The record fields are snapshotted at construction so a round can be
/// stored independently of the bank that produced it.
#[derive(Debug, Clone)]
pub struct Round {
    target: String,
    mask: Vec<char>,
    guessed: FxHashSet<char>,
    breach_level: u8,
    hints_used: usize,
    game_over: bool,
    won: bool,
    message: String,
    hints: Vec<String>,
    definition: Option<String>,
    category: String,
}

/// Serializable projection of a [`Round`]
///
/// Presentation layers (web responses, status dumps) consume this instead
/// of the round itself. The target word is included only once the round is
/// over.
#[derive(Debug, Clone, Serialize)]
pub struct RoundView {
    pub masked_word: String,
    pub guessed_letters: Vec<char>,
    pub breach_level: u8,
    pub max_breach_level: u8,
    pub breach_stage: &'static str,
    pub hints_used: usize,
    pub game_over: bool,
    pub won: bool,
    pub message: String,
    pub word_length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_word: Option<String>,
}

impl Round {
    /// Start a round from a word-bank record
    ///
    /// The target is uppercase-normalized; non-alphabetic positions are
    /// pre-revealed and never need guessing.
    #[must_use]
    pub fn new(record: &WordRecord) -> Self {
        let target = record.word.to_uppercase();
        let mask = target
            .chars()
            .map(|c| if c.is_ascii_alphabetic() { MASK_CHAR } else { c })
            .collect();

        Self {
            target,
            mask,
            guessed: FxHashSet::default(),
            breach_level: 0,
            hints_used: 0,
            game_over: false,
            won: false,
            message: String::new(),
            hints: record.hints.clone(),
            definition: record.definition.clone(),
            category: record.category.clone(),
        }
    }

    /// Guess a single letter
    ///
    /// Assumes the caller already validated the input as one ASCII letter;
    /// presentation layers reject anything else before it reaches here.
    /// Returns `true` only when the letter reveals at least one position.
    /// Duplicates are rejected without a breach; a miss raises the breach
    /// level by one and may end the round.
    pub fn guess_letter(&mut self, letter: char) -> bool {
        if self.game_over {
            self.message = "SESSION CLOSED. NO FURTHER INPUT ACCEPTED.".to_string();
            return false;
        }

        let letter = letter.to_ascii_uppercase();
        if self.guessed.contains(&letter) {
            self.message = format!("Letter '{letter}' already attempted.");
            return false;
        }

        self.guessed.insert(letter);

        if self.target.contains(letter) {
            self.reveal(letter);
            self.message = "SECTION DECRYPTED.".to_string();
            self.check_win();
            true
        } else {
            self.breach_level += 1;
            self.message = format!(
                "ERROR: INVALID KEY. BREACH LEVEL INCREASED TO {}.",
                self.breach_level
            );
            self.check_loss();
            false
        }
    }

    /// Guess the entire word
    ///
    /// An exact match (including non-letter characters) wins immediately and
    /// resolves the mask. A wrong guess always costs a breach; full-word
    /// guesses are never deduplicated.
    pub fn guess_word(&mut self, candidate: &str) -> bool {
        if self.game_over {
            self.message = "SESSION CLOSED. NO FURTHER INPUT ACCEPTED.".to_string();
            return false;
        }

        if candidate.to_uppercase() == self.target {
            self.mask = self.target.chars().collect();
            self.won = true;
            self.game_over = true;
            self.message = "SYSTEM ACCESS GRANTED.".to_string();
            true
        } else {
            self.breach_level += 1;
            self.message = "PASSWORD REJECTED. BREACH LEVEL INCREASED.".to_string();
            self.check_loss();
            false
        }
    }

    /// Request the next hint
    ///
    /// Hints are disclosed in record order; once exhausted, every further
    /// call returns the definition (or a fallback notice) without advancing
    /// the cursor or costing a breach. The returned text also becomes the
    /// round's status message.
    pub fn hint(&mut self) -> String {
        if self.game_over {
            self.message = "SESSION CLOSED. NO FURTHER INPUT ACCEPTED.".to_string();
            return self.message.clone();
        }

        let text = if self.hints.is_empty() {
            "No hints available.".to_string()
        } else if self.hints_used < self.hints.len() {
            let hint = format!("HINT: {}", self.hints[self.hints_used]);
            self.hints_used += 1;
            hint
        } else {
            match &self.definition {
                Some(def) => format!("DEFINITION: {def}"),
                None => "DEFINITION: No definition.".to_string(),
            }
        };

        self.message = text.clone();
        text
    }

    fn reveal(&mut self, letter: char) {
        for (idx, c) in self.target.chars().enumerate() {
            if c == letter {
                self.mask[idx] = letter;
            }
        }
    }

    fn check_win(&mut self) {
        if !self.mask.contains(&MASK_CHAR) {
            self.won = true;
            self.game_over = true;
            self.message = "SYSTEM ACCESS RESTORED.".to_string();
        }
    }

    fn check_loss(&mut self) {
        if self.breach_level >= MAX_BREACH_LEVEL {
            self.game_over = true;
            self.won = false;
            self.message = "CRITICAL FAILURE. SYSTEM COMPROMISED.".to_string();
        }
    }

    /// The uppercase target word
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The mask as a spaced display string, e.g. `C _ P _ E R`
    #[must_use]
    pub fn masked_display(&self) -> String {
        let mut out = String::with_capacity(self.mask.len() * 2);
        for (i, c) in self.mask.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(*c);
        }
        out
    }

    /// Guessed letters in sorted order for display
    #[must_use]
    pub fn guessed_sorted(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.guessed.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    #[inline]
    #[must_use]
    pub const fn breach_level(&self) -> u8 {
        self.breach_level
    }

    #[inline]
    #[must_use]
    pub const fn hints_used(&self) -> usize {
        self.hints_used
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    #[must_use]
    pub const fn won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Current severity label, clamped to the final stage
    #[must_use]
    pub fn breach_stage(&self) -> &'static str {
        BREACH_STAGES[usize::from(self.breach_level.min(MAX_BREACH_LEVEL))]
    }

    /// Project the round into its serializable view
    ///
    /// The literal target is revealed only once the round is over.
    #[must_use]
    pub fn view(&self) -> RoundView {
        RoundView {
            masked_word: self.masked_display(),
            guessed_letters: self.guessed_sorted(),
            breach_level: self.breach_level.min(MAX_BREACH_LEVEL),
            max_breach_level: MAX_BREACH_LEVEL,
            breach_stage: self.breach_stage(),
            hints_used: self.hints_used,
            game_over: self.game_over,
            won: self.won,
            message: self.message.clone(),
            word_length: self.target.chars().count(),
            target_word: self.game_over.then(|| self.target.clone()),
        }
    }
}
