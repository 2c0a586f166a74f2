//! Application state: the engine plus cursor and redraw tracking.

use crate::input::{Command, command_for, move_cursor};
use crossterm::event::KeyCode;
use std::cell::Cell;
use std::rc::Rc;
use tictactoe_engine::{GameEngine, GameState, GameStatus, Position};
use tracing::{debug, instrument};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep handling events.
    Continue,
    /// Exit the application.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    dirty: Rc<Cell<bool>>,
}

impl App {
    /// Creates a new application with a fresh game and the cursor centered.
    pub fn new() -> Self {
        let dirty = Rc::new(Cell::new(true));
        let mut engine = GameEngine::new();
        let flag = Rc::clone(&dirty);
        engine.subscribe(move |_: &GameState| flag.set(true));

        Self {
            engine,
            cursor: Position::Center,
            dirty,
        }
    }

    /// Gets the game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        let Some(command) = command_for(key) else {
            return Control::Continue;
        };
        debug!(?command, "Handling command");

        match command {
            Command::MoveCursor(rows, columns) => {
                let moved = move_cursor(self.cursor, rows, columns);
                if moved != self.cursor {
                    self.cursor = moved;
                    self.mark_dirty();
                }
            }
            Command::TapCursor => self.tap(self.cursor.to_index()),
            Command::Tap(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                    self.mark_dirty();
                }
                self.tap(index);
            }
            Command::Reset => self.engine.reset(),
            Command::Quit => return Control::Quit,
        }
        Control::Continue
    }

    /// Forwards a cell tap to the engine.
    pub fn tap(&mut self, index: usize) {
        self.engine.apply_move(index);
    }

    /// Requests a redraw.
    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Returns whether a redraw is needed and clears the flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Status line shown above the board.
    pub fn headline(&self) -> String {
        headline(self.engine.state())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats the status line for a game state.
pub fn headline(state: &GameState) -> String {
    match (state.status(), state.winner()) {
        (GameStatus::Won(_), Some(winner)) => format!("Player {} Wins!", winner),
        (GameStatus::InProgress, _) => format!("Player {}'s Turn", state.current_player()),
        _ => "Game Draw!".to_string(),
    }
}
