//! The tic-tac-toe game engine.

use crate::invariants::assert_invariants;
use crate::listener::{ListenerId, StateListener};
use crate::rules::{is_full, winning_line};
use crate::{Board, GameState, GameStatus, MoveError, Player, Position, Square, WinningLine};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the [`GameState`] and mutates it only through [`apply_move`] and
/// [`reset`]. Invalid moves are ignored and leave the state untouched, which
/// suits a UI where stray taps are expected and harmless.
///
/// [`apply_move`]: GameEngine::apply_move
/// [`reset`]: GameEngine::reset
pub struct GameEngine {
    state: GameState,
    listeners: Vec<(ListenerId, Box<dyn StateListener>)>,
    next_listener: u64,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the current player marker.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        self.state.status()
    }

    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        !self.state.status().is_over()
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        is_full(self.state.board())
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    /// Returns the winning line, if the game was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.state.status().winning_line()
    }

    /// Positions that would accept a move right now.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_active() {
            self.state.board().empty_positions()
        } else {
            Vec::new()
        }
    }

    /// Places the current player's marker at `index` (0-8).
    ///
    /// Out-of-range indices, occupied squares and moves after the game has
    /// ended are ignored: the state is left exactly as it was and no
    /// listener is notified.
    #[instrument(skip(self), fields(player = %self.state.current_player))]
    pub fn apply_move(&mut self, index: usize) {
        if let Err(e) = self.try_apply_move(index) {
            debug!(error = %e, "Move ignored");
        }
    }

    /// Places the current player's marker at `index`, reporting why a move
    /// was ignored.
    ///
    /// On success returns the status after the move. On error the state is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has already been won or drawn
    /// - [`MoveError::OutOfBounds`] if `index >= 9`
    /// - [`MoveError::SquareOccupied`] if the square already holds a marker
    #[instrument(skip(self), fields(player = %self.state.current_player))]
    pub fn try_apply_move(&mut self, index: usize) -> Result<&GameStatus, MoveError> {
        if self.state.status.is_over() {
            return Err(MoveError::GameOver);
        }

        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

        if !self.state.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.state.current_player;
        self.state.board.set(pos, Square::Occupied(player));
        debug!(position = %pos, "Marker placed");

        if let Some(line) = winning_line(&self.state.board) {
            self.state.status = GameStatus::Won(line);
            info!(winner = %player, line = %line, "Game won");
        } else if is_full(&self.state.board) {
            self.state.status = GameStatus::Draw;
            info!("Game drawn");
        } else {
            self.state.current_player = player.opponent();
        }

        self.state_changed();
        Ok(&self.state.status)
    }

    /// Restores the initial state. Valid from any state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = GameState::new();
        debug!("Game reset");
        self.state_changed();
    }

    /// Registers a listener called after every move and reset.
    ///
    /// Listeners run synchronously in subscription order.
    #[instrument(skip_all)]
    pub fn subscribe(&mut self, listener: impl StateListener + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        debug!(listener = %id, "Listener subscribed");
        id
    }

    /// Removes a listener. Returns false if `id` was not registered.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    fn state_changed(&mut self) {
        assert_invariants(&self.state);
        for (_, listener) in &mut self.listeners {
            listener.state_changed(&self.state);
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
