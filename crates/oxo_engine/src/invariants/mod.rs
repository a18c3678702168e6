//! First-class invariants for a round of tic-tac-toe.
//!
//! Invariants are logical properties of a single snapshot. They are checked
//! after every accepted action in debug builds and can be tested on their
//! own.

/// A property every published snapshot satisfies.
pub trait Invariant<S> {
    /// Returns true if `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// Short statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// One named check: the predicate and what it asserts.
pub type Check<S> = (fn(&S) -> bool, &'static str);

/// An invariant that did not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvariantViolation {
    /// What the failed invariant asserts.
    pub description: &'static str,
}

/// Several invariants checked as one.
pub trait InvariantSet<S> {
    /// The checks in the set, in reporting order.
    fn checks() -> Vec<Check<S>>;

    /// Runs every check and reports all that fail, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = Self::checks()
            .into_iter()
            .filter(|(holds, _)| !holds(state))
            .map(|(_, description)| InvariantViolation { description })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, A, B, C> InvariantSet<S> for (A, B, C)
where
    A: Invariant<S>,
    B: Invariant<S>,
    C: Invariant<S>,
{
    fn checks() -> Vec<Check<S>> {
        let checks: [Check<S>; 3] = [
            (A::holds, A::description()),
            (B::holds, B::description()),
            (C::holds, C::description()),
        ];
        Vec::from(checks)
    }
}

pub mod mark_balance;
pub mod turn_order;
pub mod win_consistent;

pub use mark_balance::MarkBalanceInvariant;
pub use turn_order::TurnOrderInvariant;
pub use win_consistent::WinConsistentInvariant;

/// All snapshot invariants as a composable set.
pub type RoundInvariants = (
    MarkBalanceInvariant,
    TurnOrderInvariant,
    WinConsistentInvariant,
);
