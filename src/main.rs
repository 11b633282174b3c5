//! # todo - Terminal To-Do List
//!
//! A small, single-screen to-do list for the terminal.
//!
//! ## Key Features
//!
//! - **Add, complete, delete**: type a task and press Enter; each task is stamped
//!   with the local time it was added.
//! - **Undo**: every delete can be undone, most recent first. Restored tasks go
//!   to the end of the list.
//! - **Autocorrect**: a handful of common typos are fixed as you type.
//! - **Emoji picker and on-screen keyboard**: insert characters without
//!   typing them.
//! - **Light and dark themes**.
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the UI
//! todo
//!
//! # Start in dark mode without autocorrect
//! todo --theme dark --no-autocorrect
//!
//! # Drive the list from a script and inspect the result
//! echo '[{"action":"add_text","text":"buy milk"}]' | todo replay -
//! ```
//!
//! Nothing is written to disk except log files under `~/.emoji_todo/logs`,
//! and only `ui` and `replay` write those.

use std::process;

use clap::Parser;
use log::warn;

pub mod action;
pub mod cli;
pub mod cmd;
pub mod emoji;
pub mod fields;
pub mod keyboard;
pub mod logging;
pub mod state;
pub mod task;
pub mod text;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod utils;
}

use cli::Cli;
use cmd::*;
use logging::{default_log_dir, default_log_level, init_logging};

fn main() {
    let mut cli = Cli::parse();
    let command = cli.command.take().unwrap_or(Commands::Ui);

    // Keep the handle alive until exit so buffered lines get flushed.
    let logger = if command.wants_file_log() {
        let level = cli.log_level.clone().unwrap_or_else(|| default_log_level().to_string());
        let log_dir = cli.log_dir.clone().unwrap_or_else(default_log_dir);
        match init_logging(&level, &log_dir) {
            Ok(handle) => Some(handle),
            Err(e) => {
                eprintln!("Logging disabled: {}", e);
                None
            }
        }
    } else {
        None
    };

    let state = cli.initial_state();

    let result = match command {
        Commands::Ui => cmd_ui(state),
        Commands::Replay { script, compact } => cmd_replay(state, &script, compact),
        Commands::Autocorrect { text } => {
            cmd_autocorrect(&text);
            Ok(())
        },
        Commands::Completions { shell } => {
            cmd_completions(shell);
            Ok(())
        },
    };

    if let Err(e) = result {
        warn!("event=command_failed error={}", e);
        eprintln!("Error: {}", e);
        if let Some(handle) = &logger {
            handle.flush();
        }
        process::exit(1);
    }
}
