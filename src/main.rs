//! cellscope - a terminal UI for browsing microscopy image files
//!
//! This is the main entry point for the application. It uses the
//! Component Architecture pattern from ratatui: events become Actions,
//! Actions update state, state is drawn.

mod action;
mod app;
mod component;
mod components;
mod model;
mod services;
mod settings;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use std::time::Duration;

fn main() -> Result<()> {
    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    // Create app state
    let mut app = App::new();
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                eprintln!("Draw error: {}", e);
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Process the action; an action may produce a follow-up
            // (e.g. a checkbox change produces the resulting selection)
            if let Some(action) = action {
                let mut current_action = Some(action);
                while let Some(a) = current_action {
                    current_action = app.update(a)?;
                }
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
