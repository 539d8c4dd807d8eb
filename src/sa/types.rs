//! Core trait for annealing problems.

use crate::error::AdapterError;
use rand::Rng;
use std::fmt::Debug;

/// Defines a discrete problem the annealer can optimize.
///
/// The implementor owns everything about the state space: the starting
/// point, the elementary move, and the energy. The [`Annealer`] handles the
/// temperature loop and the acceptance criterion and never inspects a
/// state.
///
/// # Minimization
///
/// Energy is minimized. For maximization, negate the value.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_anneal::sa::AnnealProblem;
/// use u_anneal::AdapterError;
///
/// struct CountOnes { n: usize }
///
/// impl AnnealProblem for CountOnes {
///     type State = Vec<bool>;
///
///     fn initial_state(&self) -> Vec<bool> {
///         vec![true; self.n]
///     }
///
///     fn perturb<R: Rng>(&self, bits: &Vec<bool>, rng: &mut R) -> Result<Vec<bool>, AdapterError> {
///         let mut next = bits.clone();
///         let i = rng.random_range(0..next.len());
///         next[i] = !next[i];
///         Ok(next)
///     }
///
///     fn energy(&self, bits: &Vec<bool>) -> Result<f64, AdapterError> {
///         Ok(bits.iter().filter(|&&b| b).count() as f64)
///     }
/// }
/// ```
///
/// [`Annealer`]: super::Annealer
pub trait AnnealProblem {
    /// The state representation.
    type State: Clone + Debug;

    /// The canonical starting state, used when the caller supplies none.
    fn initial_state(&self) -> Self::State;

    /// Returns a neighbor of `state` reachable by one elementary move.
    ///
    /// The input is left untouched; the neighbor is a fresh value from the
    /// same state space.
    fn perturb<R: Rng>(&self, state: &Self::State, rng: &mut R) -> Result<Self::State, AdapterError>;

    /// Scores a state. Lower is better.
    ///
    /// Must be deterministic: the same state always yields the same energy.
    fn energy(&self, state: &Self::State) -> Result<f64, AdapterError>;

    /// Membership test against a finite, enumerable state set.
    ///
    /// Returns `None` when the state space is too large to enumerate, which
    /// disables the start-state check.
    fn contains(&self, _state: &Self::State) -> Option<bool> {
        None
    }
}
