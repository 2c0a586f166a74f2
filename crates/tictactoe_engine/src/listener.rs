//! Change notification for presentation layers.
//!
//! The engine is framework-agnostic: instead of reactive containers it calls
//! registered listeners synchronously after every state mutation.

use crate::GameState;

/// Receives the new state after each successful move or reset.
pub trait StateListener {
    /// Called once per mutation, after the state has been updated.
    fn state_changed(&mut self, state: &GameState);
}

impl<F> StateListener for F
where
    F: FnMut(&GameState),
{
    fn state_changed(&mut self, state: &GameState) {
        self(state)
    }
}

/// Handle returned by [`GameEngine::subscribe`](crate::GameEngine::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("listener#{}", _0)]
pub struct ListenerId(pub(crate) u64);
