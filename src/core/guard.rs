//! Guard predicates over states.
//!
//! A transition normally names a single source state. When one operation is
//! legal from several states (an elevator can stop whether it is moving up or
//! down) the source is a guard instead.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Pure predicate that decides whether a transition may fire from a state.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{Guard, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lift {
///     Idle,
///     Up,
///     Down,
/// }
///
/// impl State for Lift {
///     fn label(&self) -> &'static str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Up => "Up",
///             Self::Down => "Down",
///         }
///     }
///
///     fn all() -> &'static [Self] {
///         &[Self::Idle, Self::Up, Self::Down]
///     }
/// }
///
/// let moving = Guard::new(|s: &Lift| matches!(s, Lift::Up | Lift::Down));
///
/// assert!(moving.check(&Lift::Up));
/// assert!(!moving.check(&Lift::Idle));
/// ```
pub struct Guard<S: State> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that passes for any of the listed states.
    pub fn any_of(states: &[S]) -> Self {
        let states = states.to_vec();
        Self::new(move |s| states.contains(s))
    }

    /// Guard that passes only where both `self` and `other` pass.
    pub fn and(self, other: Guard<S>) -> Self {
        Self::new(move |s| self.check(s) && other.check(s))
    }

    /// Check if the guard allows a transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }

    /// States of the full enumeration that pass this guard.
    pub fn admitted(&self) -> Vec<S> {
        S::all().iter().copied().filter(|s| self.check(s)).collect()
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            _phantom: PhantomData,
        }
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("admitted", &self.admitted())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Red,
        Green,
        Yellow,
    }

    impl State for TestState {
        fn label(&self) -> &'static str {
            match self {
                Self::Red => "Red",
                Self::Green => "Green",
                Self::Yellow => "Yellow",
            }
        }

        fn all() -> &'static [Self] {
            &[Self::Red, Self::Green, Self::Yellow]
        }
    }

    #[test]
    fn guard_allows_matching_states() {
        let guard = Guard::new(|s: &TestState| matches!(s, TestState::Red));

        assert!(guard.check(&TestState::Red));
        assert!(!guard.check(&TestState::Green));
    }

    #[test]
    fn any_of_admits_only_listed_states() {
        let guard = Guard::any_of(&[TestState::Green, TestState::Yellow]);

        assert!(!guard.check(&TestState::Red));
        assert!(guard.check(&TestState::Green));
        assert!(guard.check(&TestState::Yellow));
        assert_eq!(guard.admitted(), vec![TestState::Green, TestState::Yellow]);
    }

    #[test]
    fn and_requires_both_guards() {
        let not_red = Guard::new(|s: &TestState| !matches!(s, TestState::Red));
        let guard = Guard::any_of(&[TestState::Red, TestState::Green]).and(not_red);

        assert_eq!(guard.admitted(), vec![TestState::Green]);
    }

    #[test]
    fn cloned_guard_shares_predicate() {
        let guard = Guard::new(|s: &TestState| !matches!(s, TestState::Yellow));
        let cloned = guard.clone();

        for state in TestState::all() {
            assert_eq!(guard.check(state), cloned.check(state));
        }
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|s: &TestState| matches!(s, TestState::Green));

        let result1 = guard.check(&TestState::Green);
        let result2 = guard.check(&TestState::Green);

        assert_eq!(result1, result2);
    }
}
