//! Formatting utilities for terminal output

use crate::core::{BREACH_STAGES, MAX_BREACH_LEVEL};

/// Marker state for one entry in the breach-stage checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageMark {
    /// Stage already passed
    Passed,
    /// The currently active stage
    Active,
    /// Stage not yet reached
    Pending,
}

/// Classify each of the six breach stages against the current level
///
/// The active stage index is the breach level clamped to the last stage.
#[must_use]
pub fn stage_marks(breach_level: u8) -> [(&'static str, StageMark); 6] {
    let active = usize::from(breach_level.min(MAX_BREACH_LEVEL));

    let mut marks = [("", StageMark::Pending); 6];
    for (idx, &stage) in BREACH_STAGES.iter().enumerate() {
        let mark = if idx < active {
            StageMark::Passed
        } else if idx == active {
            StageMark::Active
        } else {
            StageMark::Pending
        };
        marks[idx] = (stage, mark);
    }
    marks
}

/// Format one checklist line, e.g. `[!] Firewall Weakened <ACTIVE>`
#[must_use]
pub fn stage_line(stage: &str, mark: StageMark) -> String {
    match mark {
        StageMark::Passed => format!("[X] {stage}"),
        StageMark::Active => format!("[!] {stage} <ACTIVE>"),
        StageMark::Pending => format!("[ ] {stage}"),
    }
}

/// Breach level as a filled/empty meter, e.g. `██░░░` for level 2
#[must_use]
pub fn breach_meter(breach_level: u8) -> String {
    let filled = usize::from(breach_level.min(MAX_BREACH_LEVEL));
    let width = usize::from(MAX_BREACH_LEVEL);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Guessed letters joined for display, e.g. `C, I, P`
#[must_use]
pub fn guessed_line(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_marks_at_zero_activates_secure() {
        let marks = stage_marks(0);
        assert_eq!(marks[0], ("Secure", StageMark::Active));
        assert!(marks[1..].iter().all(|&(_, m)| m == StageMark::Pending));
    }

    #[test]
    fn stage_marks_midway() {
        let marks = stage_marks(2);
        assert_eq!(marks[0].1, StageMark::Passed);
        assert_eq!(marks[1].1, StageMark::Passed);
        assert_eq!(marks[2], ("Encryption Broken", StageMark::Active));
        assert_eq!(marks[3].1, StageMark::Pending);
    }

    #[test]
    fn stage_marks_clamp_past_the_last_stage() {
        let marks = stage_marks(9);
        assert_eq!(marks[5], ("SYSTEM COMPROMISED", StageMark::Active));
        assert!(marks[..5].iter().all(|&(_, m)| m == StageMark::Passed));
    }

    #[test]
    fn stage_line_markers() {
        assert_eq!(stage_line("Secure", StageMark::Passed), "[X] Secure");
        assert_eq!(stage_line("Secure", StageMark::Active), "[!] Secure <ACTIVE>");
        assert_eq!(stage_line("Secure", StageMark::Pending), "[ ] Secure");
    }

    #[test]
    fn breach_meter_empty() {
        assert_eq!(breach_meter(0), "░░░░░");
    }

    #[test]
    fn breach_meter_partial() {
        assert_eq!(breach_meter(2), "██░░░");
    }

    #[test]
    fn breach_meter_clamped_full() {
        assert_eq!(breach_meter(7), "█████");
    }

    #[test]
    fn guessed_line_joins_letters() {
        assert_eq!(guessed_line(&['C', 'I', 'P']), "C, I, P");
        assert_eq!(guessed_line(&[]), "");
    }
}
