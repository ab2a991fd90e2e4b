//! Word bank
//!
//! Owns the loaded record collection and hands out one record per round,
//! matching the requested difficulty with fallback broadening. A default
//! bank is compiled into the binary so the game runs with no setup.

pub mod loader;

pub use loader::BankError;

use crate::core::WordRecord;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::path::Path;

/// Default bank shipped in the binary
const EMBEDDED_BANK: &str = include_str!("../../data/words.yaml");

/// The loaded word collection
#[derive(Debug, Clone)]
pub struct WordBank {
    records: Vec<WordRecord>,
}

impl WordBank {
    /// Build a bank from already-loaded records
    #[must_use]
    pub fn from_records(records: Vec<WordRecord>) -> Self {
        Self { records }
    }

    /// Load a bank from a YAML file
    ///
    /// # Errors
    /// Returns [`BankError`] when the file is missing or malformed. An empty
    /// bank is not a load error; it surfaces as `None` from [`Self::select`].
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, BankError> {
        Ok(Self::from_records(loader::load_from_file(path)?))
    }

    /// The bank compiled into the binary
    ///
    /// # Panics
    /// Will not panic - the embedded document is validated by tests.
    #[must_use]
    pub fn embedded() -> Self {
        let records =
            loader::parse_bank_str(EMBEDDED_BANK).expect("embedded word bank is valid YAML");
        Self::from_records(records)
    }

    /// Pick a record for the requested difficulty
    ///
    /// Tries an exact difficulty match, then broadens to records within one
    /// difficulty step, then falls back to the whole collection. Returns
    /// `None` only when the bank itself is empty - the caller must treat
    /// that as a fatal configuration error. Selection among candidates is
    /// uniform over the injected RNG so tests can pin it.
    pub fn select<R: Rng + ?Sized>(&self, difficulty: u8, rng: &mut R) -> Option<&WordRecord> {
        let exact: Vec<&WordRecord> = self
            .records
            .iter()
            .filter(|r| r.difficulty == difficulty)
            .collect();

        if let Some(&record) = exact.choose(rng) {
            return Some(record);
        }

        let near: Vec<&WordRecord> = self
            .records
            .iter()
            .filter(|r| r.difficulty.abs_diff(difficulty) <= 1)
            .collect();

        if let Some(&record) = near.choose(rng) {
            return Some(record);
        }

        self.records.choose(rng)
    }

    /// Distinct categories across the bank, sorted
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> =
            self.records.iter().map(|r| r.category.clone()).collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
