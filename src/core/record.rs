//! Word-bank record type
//!
//! A `WordRecord` is one immutable entry in the word bank: the target word,
//! its difficulty rating, and the optional hint material shown to the player.

use serde::Deserialize;

/// One word-bank entry
///
/// Targets may contain non-letter characters (spaces, hyphens); those
/// positions are pre-revealed in the round mask and never guessed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordRecord {
    /// The target word or phrase
    pub word: String,

    /// Difficulty rating (1 = normal, higher = harder)
    pub difficulty: u8,

    /// Thematic category, defaults to "Unknown"
    #[serde(default = "default_category")]
    pub category: String,

    /// Progressive hints, disclosed in order
    #[serde(default)]
    pub hints: Vec<String>,

    /// Dictionary definition, shown once all hints are exhausted
    #[serde(default)]
    pub definition: Option<String>,
}

fn default_category() -> String {
    "Unknown".to_string()
}

impl WordRecord {
    /// Check that the record has at least one guessable (alphabetic) character
    ///
    /// Records failing this are skipped at load time; a round built from a
    /// letterless word could never be won by letter guesses.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.word.chars().any(|c| c.is_ascii_alphabetic())
    }
}
