//! Raw-mode terminal setup with guaranteed teardown.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tracing::{debug, warn};

/// Runs a restore action exactly once: on [`RestoreGuard::restore`] or on drop.
///
/// Dropping also happens while unwinding from a panic, so the action runs on
/// early returns and panics alike.
pub struct RestoreGuard<F: FnMut()> {
    restore: Option<F>,
}

impl<F: FnMut()> RestoreGuard<F> {
    /// Arms the guard with `restore`.
    pub fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }

    /// Runs the restore action now.
    pub fn restore(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(mut restore) = self.restore.take() {
            restore();
        }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        self.run();
    }
}

/// Guard returned by [`enter`].
pub type TerminalGuard = RestoreGuard<fn()>;

/// Switches stdout to raw mode on the alternate screen.
///
/// The guard is armed as soon as raw mode is on, so a failure entering the
/// alternate screen still leaves the terminal restored.
pub fn enter() -> io::Result<TerminalGuard> {
    enable_raw_mode()?;
    let guard = RestoreGuard::new(restore as fn());
    execute!(io::stdout(), EnterAlternateScreen)?;
    debug!("Terminal in raw mode");
    Ok(guard)
}

/// Leaves raw mode and the alternate screen. Each step runs even if the
/// previous one failed.
pub fn restore() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
    debug!("Terminal restored");
}
