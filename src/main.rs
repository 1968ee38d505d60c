use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

mod app;
mod calendar;
mod input;
mod models;
mod state;
mod store;
mod ui;

use app::App;
use store::TaskStore;

fn main() -> Result<()> {
    // Open the store (ensuring the schema) and build the app before
    // touching the terminal, so startup failures are reported on a
    // normal screen
    let store = TaskStore::open(&state::data_dir().join("tasks.db"))?;
    let mut app = App::new(store)?;

    // Set up the terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, &mut app);

    // Restore the terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    // Persist the UI state for the next run
    let ui_state = state::extract_state(&app);
    if let Err(e) = state::save_state(&ui_state) {
        eprintln!("Failed to save state: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.clear_expired_notification();
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if !app.handle_key(key)? {
                    return Ok(()); // Quit requested
                }
            }
        }
    }
}
