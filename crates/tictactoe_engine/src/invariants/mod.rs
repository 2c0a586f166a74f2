//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold for every state the
//! engine can reach. They are checked after each mutation in debug builds
//! and can be tested independently.

use crate::GameState;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod balanced_marks;
pub mod status_matches_board;
pub mod turn_matches_marks;

pub use balanced_marks::BalancedMarksInvariant;
pub use status_matches_board::StatusMatchesBoardInvariant;
pub use turn_matches_marks::TurnMatchesMarksInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    BalancedMarksInvariant,
    StatusMatchesBoardInvariant,
    TurnMatchesMarksInvariant,
);

/// Asserts that all engine invariants hold. Debug builds only; a no-op in
/// release builds.
pub(crate) fn assert_invariants(state: &GameState) {
    if !cfg!(debug_assertions) {
        return;
    }

    let result = EngineInvariants::check_all(state);
    if let Err(violations) = &result {
        for violation in violations {
            warn!(description = %violation.description, "Engine invariant violated");
        }
    }
    debug_assert!(result.is_ok(), "Engine invariants violated: {:?}", result);
}
