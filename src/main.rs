//! transformation-catalog - browse transformation blocks from the terminal
//!
//! Opens the transformation catalog on top of a pipeline canvas. Uses the
//! Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod error;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::Event;
use std::path::PathBuf;
use std::time::Duration;

/// Browse the transformation catalog of a data-pipeline editor
#[derive(Parser, Debug)]
#[command(name = "transformation-catalog", version, about)]
struct Args {
    /// Base URL of the catalog backend
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Browse an offline YAML/JSON catalog instead of the API
    #[arg(long, value_name = "PATH")]
    catalog_file: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Store the effective settings as the new defaults
    #[arg(long)]
    save_config: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    let config = config.with_overrides(args.api_url, args.catalog_file, args.log_file);
    logging::init(&config.resolved_log_file(), args.verbose)?;

    if let Some(e) = config_error {
        tracing::warn!("Ignoring config, using defaults: {:#}", e);
    }
    if args.save_config {
        config.save().context("Failed to save config")?;
        tracing::info!("Saved settings to the config file");
    }

    let client = services::connect(&config.api_url, config.catalog_file.as_deref())
        .context("Failed to set up the catalog source")?;

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    let mut app = App::new(client);
    app.init()?;

    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        tracing::error!("Exiting on error: {:?}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    tracing::info!("Exited cleanly");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        let mut draw_result = Ok(());
        tui.draw(|frame| {
            let area = frame.area();
            draw_result = app.draw(frame, area);
        })?;
        if let Err(e) = draw_result {
            tracing::warn!("Draw error: {}", e);
        }

        if let Some(event) = tui.next_event()? {
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                tracing::trace!(action = %a, "dispatch");
                current_action = app.update(a)?;
            }
        } else {
            // No event - send a tick to poll background fetches
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
