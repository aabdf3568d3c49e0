//! Main TUI runner - entry point and event loop
//!
//! Single-threaded and run-to-completion: poll one terminal event,
//! translate it to a message, apply it, draw. No event interleaves
//! with another.

use crate::app::handler::update;
use crate::app::state::AppState;
use crate::common::prelude::*;

use super::{event, render, terminal};

/// Run the TUI with a prepared application state
pub fn run(mut state: AppState) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::init();

    // Seed the viewport width before the first transition runs
    if let Ok(size) = term.size() {
        state.viewport_width = size.width;
    }

    let result = run_loop(&mut term, &mut state);
    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, state: &mut AppState) -> Result<()> {
    while !state.should_quit() {
        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            update(state, message);
        }
    }
    info!("Shutting down");
    Ok(())
}
