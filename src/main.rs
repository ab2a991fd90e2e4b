//! Breach Terminal - CLI
//!
//! Terminal hacking word game with TUI, plain-CLI, and HTTP-server modes.

use anyhow::{Result, bail};
use breach_terminal::{
    bank::WordBank,
    commands::run_simple,
    interactive::{App, run_tui},
    web,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "breach_terminal",
    about = "Terminal hacking word game with adaptive difficulty",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a YAML word bank (default: the embedded bank)
    #[arg(short, long, global = true)]
    bank: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive game without TUI)
    Simple,

    /// Run the HTTP API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "5000")]
        port: u16,
    },
}

/// Load the word bank selected by the --bank flag
///
/// A missing or malformed file and an empty bank are both fatal, with
/// distinct messages: the first is a configuration error, the second a
/// content error.
fn load_bank(path: Option<&PathBuf>) -> Result<WordBank> {
    let bank = match path {
        Some(path) => WordBank::load_from_file(path)?,
        None => WordBank::embedded(),
    };

    if bank.is_empty() {
        bail!("word bank loaded but contains no playable words");
    }
    Ok(bank)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let bank = load_bank(cli.bank.as_ref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&bank),
        Commands::Simple => run_simple(&bank).map_err(|e| anyhow::anyhow!(e)),
        Commands::Serve { port } => web::serve(bank, port),
    }
}

fn run_play_command(bank: &WordBank) -> Result<()> {
    let app = App::new(bank)?;
    run_tui(app)
}
