//! Command implementations for the CLI interface.
//!
//! Every handler builds on the same [`TodoState`] transitions: `ui` drives
//! them from key presses, `replay` from a JSON action script.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};
use log::info;

use crate::action::parse_actions;
use crate::cli::Cli;
use crate::state::TodoState;
use crate::text::autocorrect;
use crate::tui::run::run_tui;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive to-do list (default).
    Ui,

    /// Apply a JSON array of actions to an empty list and print the result.
    Replay {
        /// Script file, or "-" for stdin.
        script: PathBuf,
        /// Print the resulting state on one line.
        #[arg(long)]
        compact: bool,
    },

    /// Print text with the typing corrections applied.
    Autocorrect {
        /// Text to correct; multiple arguments are joined with spaces.
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// Only the list-driving commands write a log file.
    pub fn wants_file_log(&self) -> bool {
        matches!(self, Commands::Ui | Commands::Replay { .. })
    }
}

/// Run the terminal UI.
pub fn cmd_ui(state: TodoState) -> io::Result<()> {
    let state = run_tui(state)?;
    if !state.tasks().is_empty() {
        println!(
            "Closed with {} task(s); the list is not saved.",
            state.tasks().len()
        );
    }
    Ok(())
}

/// Apply the script at `script` ("-" reads stdin) and print the final state.
pub fn cmd_replay(state: TodoState, script: &Path, compact: bool) -> io::Result<()> {
    let json = if script == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(script)?
    };

    let out = replay(state, &json, Local::now().naive_local(), compact)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", out)?;
    Ok(())
}

/// Parse `json`, apply every action at time `now`, serialise the result.
pub fn replay(state: TodoState, json: &str, now: NaiveDateTime, compact: bool) -> io::Result<String> {
    let actions = parse_actions(json)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("invalid action script: {e}")))?;
    info!("event=replay_start actions={}", actions.len());

    let state = state.apply_all(&actions, now);
    info!(
        "event=replay_done tasks={} undo_depth={}",
        state.tasks().len(),
        state.undo_stack().len()
    );

    let rendered = if compact {
        serde_json::to_string(&state)
    } else {
        serde_json::to_string_pretty(&state)
    };
    rendered.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

pub fn cmd_autocorrect(text: &[String]) {
    println!("{}", autocorrect(&text.join(" ")));
}

pub fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
