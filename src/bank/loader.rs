//! Word-bank loading
//!
//! Parses the YAML bank format: a top-level `words` list of records. Records
//! without a single alphabetic character are skipped rather than rejected
//! wholesale, so one bad entry cannot take down the whole bank.

use crate::core::WordRecord;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Error loading a word bank
///
/// `Missing` and `Parse` are deliberately distinct from an empty bank: a
/// bank that loads but contains no words is a valid (if useless) bank, and
/// selection on it returns `None` instead.
#[derive(Debug)]
pub enum BankError {
    /// The bank file does not exist or could not be read
    Missing(PathBuf),
    /// The file was read but is not a valid bank document
    Parse(PathBuf, String),
}

impl fmt::Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(path) => write!(f, "word bank not found at {}", path.display()),
            Self::Parse(path, reason) => {
                write!(f, "word bank at {} is malformed: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for BankError {}

#[derive(Deserialize)]
struct BankFile {
    #[serde(default)]
    words: Vec<WordRecord>,
}

/// Parse a bank document from a YAML string
///
/// # Errors
/// Returns the parser's message if the document is not a valid bank.
pub fn parse_bank_str(content: &str) -> Result<Vec<WordRecord>, String> {
    let file: BankFile = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
    Ok(file
        .words
        .into_iter()
        .filter(WordRecord::is_playable)
        .collect())
}

/// Load a bank from a YAML file
///
/// # Errors
/// Returns [`BankError::Missing`] if the file cannot be read and
/// [`BankError::Parse`] if it cannot be parsed.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<WordRecord>, BankError> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).map_err(|_| BankError::Missing(path.to_path_buf()))?;
    parse_bank_str(&content).map_err(|reason| BankError::Parse(path.to_path_buf(), reason))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bank_with_records() {
        let yaml = r"
words:
  - word: FIREWALL
    difficulty: 1
    hints:
      - Keeps intruders out
  - word: CIPHER
    difficulty: 2
    definition: An algorithm for encryption.
";
        let records = parse_bank_str(yaml).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].word, "FIREWALL");
        assert_eq!(records[1].difficulty, 2);
    }

    #[test]
    fn parse_bank_skips_letterless_records() {
        let yaml = r"
words:
  - word: '12345'
    difficulty: 1
  - word: CIPHER
    difficulty: 1
";
        let records = parse_bank_str(yaml).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].word, "CIPHER");
    }

    #[test]
    fn parse_bank_without_words_key_is_empty() {
        let records = parse_bank_str("{}").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn parse_bank_rejects_malformed_yaml() {
        assert!(parse_bank_str("words: [not a record").is_err());
    }

    #[test]
    fn load_missing_file_reports_missing() {
        let err = load_from_file("/nonexistent/words.yaml").unwrap_err();
        assert!(matches!(err, BankError::Missing(_)));
        assert!(err.to_string().contains("not found"));
    }
}
