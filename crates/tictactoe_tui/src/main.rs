//! Tic-tac-toe terminal UI.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::File;
use std::io::{self, Stdout};
use std::sync::Mutex;
use std::time::Duration;
use tictactoe_tui::{App, Cli, Control, Palette, TuiConfig, terminal, ui};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref())?;
    let palette = config.palette()?;

    init_tracing(&cli, &config)?;
    config.log_loaded(cli.config.as_deref());
    info!("Starting tic-tac-toe TUI");

    let guard = terminal::enter()?;
    let res = run(&palette);
    guard.restore();

    match &res {
        Ok(()) => info!("Exiting tic-tac-toe TUI"),
        Err(err) => error!(error = %err, "TUI exited with error"),
    }
    res
}

/// Everything that needs the raw-mode terminal; the caller restores it.
fn run(palette: &Palette) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut app = App::new();
    run_app(&mut terminal, &mut app, palette)
}

/// Logs go to a file; stdout belongs to the terminal UI.
fn init_tracing(cli: &Cli, config: &TuiConfig) -> Result<()> {
    let file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    palette: &Palette,
) -> Result<()> {
    loop {
        if app.take_dirty() {
            terminal.draw(|f| ui::draw(f, &*app, palette))?;
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key.code) == Control::Quit {
                        return Ok(());
                    }
                }
                Event::Resize(..) => app.mark_dirty(),
                _ => {}
            }
        }
    }
}
