//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI: prints the round status each turn,
//! reads one line, and routes it to the round as a letter guess, word guess,
//! hint request, or exit.

use crate::bank::WordBank;
use crate::core::{DifficultyAdvisor, Round};
use crate::output::{print_round_end, print_round_screen};
use colored::Colorize;
use std::io::{self, Write};

/// What one line of player input means
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Exit,
    Hint,
    Letter(char),
    Word(String),
    Invalid,
}

/// Classify a raw input line
///
/// The core only sees validated letters and words; everything else resolves
/// to `Invalid` here. Routing is by shape: one letter is a letter guess, a
/// longer string with at least one letter is a word guess.
#[must_use]
pub fn parse_action(input: &str) -> Action {
    let input = input.trim().to_uppercase();

    match input.as_str() {
        "" => Action::Invalid,
        "EXIT" | "QUIT" => Action::Exit,
        "HINT" => Action::Hint,
        _ => {
            let mut chars = input.chars();
            let first = chars.next().unwrap_or(' ');
            if chars.next().is_none() {
                if first.is_ascii_alphabetic() {
                    Action::Letter(first)
                } else {
                    Action::Invalid
                }
            } else if input.chars().any(|c| c.is_ascii_alphabetic()) {
                Action::Word(input)
            } else {
                Action::Invalid
            }
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the word bank is empty or if reading user input
/// fails.
pub fn run_simple(bank: &WordBank) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 SECURE ACCESS TERMINAL v1.0                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Decrypt the target word before the breach level maxes out.");
    println!("Guess one letter at a time, or attempt the full password.\n");
    println!("Commands: 'HINT' for a clue, 'EXIT' to quit.\n");

    let mut advisor = DifficultyAdvisor::new();
    let mut rng = rand::rng();

    loop {
        let difficulty = advisor.recommended_difficulty();
        let record = bank
            .select(difficulty, &mut rng)
            .ok_or("word bank is empty - no words to play")?;
        let mut round = Round::new(record);

        while !round.is_over() {
            print_round_screen(&round, &advisor);

            match parse_action(&get_user_input("\nACTION")?) {
                Action::Exit => {
                    println!("\n{}", "Session Terminated by User.".bright_white());
                    return Ok(());
                }
                Action::Hint => {
                    round.hint();
                }
                Action::Letter(letter) => {
                    round.guess_letter(letter);
                }
                Action::Word(word) => {
                    round.guess_word(&word);
                }
                Action::Invalid => {
                    println!("{}", "INVALID INPUT. ENTER A LETTER.".yellow());
                }
            }
        }

        print_round_screen(&round, &advisor);
        print_round_end(&round);
        advisor.record_result(round.won());

        let again = get_user_input("\nRe-initialize System? (Y/N)")?;
        if !again.eq_ignore_ascii_case("y") {
            break;
        }
    }

    println!("\n{}", "SECURE ACCESS SYSTEM SHUTTING DOWN...".dimmed());
    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_action_routes_by_shape() {
        assert_eq!(parse_action("c"), Action::Letter('C'));
        assert_eq!(parse_action(" R "), Action::Letter('R'));
        assert_eq!(parse_action("cipher"), Action::Word("CIPHER".to_string()));
        assert_eq!(parse_action("zero-day"), Action::Word("ZERO-DAY".to_string()));
    }

    #[test]
    fn parse_action_recognizes_commands() {
        assert_eq!(parse_action("exit"), Action::Exit);
        assert_eq!(parse_action("QUIT"), Action::Exit);
        assert_eq!(parse_action("Hint"), Action::Hint);
    }

    #[test]
    fn parse_action_rejects_garbage() {
        assert_eq!(parse_action(""), Action::Invalid);
        assert_eq!(parse_action("   "), Action::Invalid);
        assert_eq!(parse_action("7"), Action::Invalid);
        assert_eq!(parse_action("123"), Action::Invalid);
        assert_eq!(parse_action("?!"), Action::Invalid);
    }
}
