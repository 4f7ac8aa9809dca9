//! # `SimplyTrue` Foods
//!
//! A terminal front end for the `SimplyTrue` Foods menu: a filterable dish list,
//! a meal of the day randomizer, a calorie planner with a progress ring, and a
//! mock order popup.
//!
//! ## Modules
//! - [`app`]: Core application state and key routing.
//! - [`catalog`]: The read-only menu records.
//! - [`menu`], [`actions`]: Filtering and the per-dish action controls.
//! - [`picker`]: Meal of the day.
//! - [`calories`]: Calorie planner and ring geometry.
//! - [`nav`], [`popup`]: Navigation toggle and order popup.
//! - [`cli`]: Command-line argument parsing and one-shot commands.
//! - [`event`]: Event loop handling.
//! - [`ui`]: TUI rendering and widget definitions.

mod actions;
mod app;
mod calories;
mod catalog;
mod cli;
mod constants;
mod error;
mod event;
mod menu;
mod nav;
mod picker;
mod popup;
mod theme;
mod ui;
mod utils;

use app::App;
use catalog::Catalog;
use clap::Parser;
use cli::args::Args;
use color_eyre::Result;
use event::{Event, EventHandler};

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse arguments
    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => Catalog::from_json_file(&utils::expand_home(path))?,
        None => Catalog::sample(),
    };

    // Handle CLI commands (menu, pick, calc)
    if let Some(command) = &args.command {
        if cli::commands::handle_command(command, &catalog, args.target, args.seed)? {
            return Ok(());
        }
    }

    // Run the TUI application
    let terminal = ratatui::init();
    let result = run_tui(terminal, App::new(catalog, args.target, args.seed));
    ratatui::restore();

    result
}

/// Runs the main TUI event loop.
fn run_tui(mut terminal: ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    let events = EventHandler::new(constants::DEFAULT_TICK_RATE);
    let size = terminal.size()?;
    app.on_resize(size.width, size.height);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, &mut app))?;

        match events.next()? {
            Event::Key(key_event) => app.handle_key(key_event),
            Event::Tick => app.on_tick(),
            Event::Resize(width, height) => app.on_resize(width, height),
        }
    }

    Ok(())
}
