//! Display functions for the simple CLI mode

use super::formatters::{StageMark, breach_meter, guessed_line, stage_line, stage_marks};
use crate::core::{DifficultyAdvisor, Round};
use colored::Colorize;

/// Print the full round status screen
pub fn print_round_screen(round: &Round, advisor: &DifficultyAdvisor) {
    println!("\n{}", "─".repeat(60).green());
    println!(
        " TARGET [{}]: {}",
        round.category().cyan(),
        round.masked_display().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).green());

    println!(
        "\n BREACH [{}] {}",
        breach_meter(round.breach_level()).red(),
        round.breach_stage().bold()
    );
    for (stage, mark) in stage_marks(round.breach_level()) {
        let line = stage_line(stage, mark);
        let line = match mark {
            StageMark::Passed => line.red().dimmed(),
            StageMark::Active => line.bright_red().bold(),
            StageMark::Pending => line.green(),
        };
        println!("   {line}");
    }

    let guessed = round.guessed_sorted();
    if !guessed.is_empty() {
        println!("\n Attempted: {}", guessed_line(&guessed).cyan());
    }

    println!(
        " Session:   {} wins / {} losses / streak {}",
        advisor.wins(),
        advisor.losses(),
        advisor.streak()
    );

    if !round.message().is_empty() {
        println!("\n > {}", round.message().bright_white().bold());
    }
}

/// Print the end-of-round banner with the revealed target
pub fn print_round_end(round: &Round) {
    if round.won() {
        println!(
            "\n{}",
            format!("SUCCESS. Target Decrypted: {}", round.target())
                .green()
                .bold()
        );
    } else {
        println!(
            "\n{}",
            format!("FAILURE. System Compromised. Target was: {}", round.target())
                .red()
                .bold()
        );
    }
}
