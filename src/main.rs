//! skillmatch - Terminal Career Mentor
//!
//! A terminal wizard that guides a user from an education level through
//! skill selection to matching job postings. All data is compiled in;
//! nothing is persisted and nothing leaves the machine.

use std::io;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

mod domain;
mod application;
mod presentation;

use application::App;
use presentation::{render_ui, InputHandler};

/// Entry point for the skillmatch terminal application.
///
/// Validates the compiled-in catalog, sets up the terminal interface,
/// and runs the main event loop until the user quits.
///
/// # Errors
///
/// Returns an error if the catalog data is malformed (a build defect,
/// reported before the terminal enters raw mode) or if terminal setup
/// fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    domain::catalog::validate()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::default();
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Each key press synchronously mutates the application state and the
/// next draw re-renders from it. Runs until the user presses 'q'
/// outside the help popup.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') if !app.show_help => return Ok(()),
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
            }
        }
    }
}
