//! TUI entry point and terminal setup.

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen}
};
use log::info;
use ratatui::{prelude::CrosstermBackend, Terminal};

use crate::state::TodoState;
use crate::tui::app::App;

/// Initialise the terminal, run the to-do UI until the user quits, restore
/// the terminal. The final state is returned for the caller to report on.
pub fn run_tui(state: TodoState) -> io::Result<TodoState> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(state);
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    let state = app.into_state();
    info!(
        "event=ui_exit tasks={} undo_depth={}",
        state.tasks().len(),
        state.undo_stack().len()
    );
    Ok(state)
}
