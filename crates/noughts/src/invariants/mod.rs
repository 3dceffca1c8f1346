//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are testable independently and back the post-move contract check.

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
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

type Check<S> = (fn(&S) -> bool, &'static str);

fn collect<S>(checks: &[Check<S>], state: &S) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds(state))
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

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
        collect(
            &[
                (I1::holds as fn(&S) -> bool, I1::description()),
                (I2::holds as fn(&S) -> bool, I2::description()),
                (I3::holds as fn(&S) -> bool, I3::description()),
            ],
            state,
        )
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(
            &[
                (I1::holds as fn(&S) -> bool, I1::description()),
                (I2::holds as fn(&S) -> bool, I2::description()),
            ],
            state,
        )
    }
}

pub mod bounded_history;
pub mod render_consistent;
pub mod unique_positions;

pub use bounded_history::BoundedHistoryInvariant;
pub use render_consistent::RenderConsistentInvariant;
pub use unique_positions::UniquePositionsInvariant;

/// All engine invariants as a composable set.
pub type GameInvariants = (
    UniquePositionsInvariant,
    BoundedHistoryInvariant,
    RenderConsistentInvariant,
);
