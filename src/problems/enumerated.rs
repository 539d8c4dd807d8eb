//! Brute-force adapter over an explicit list of states.
//!
//! Small instances can list every state up front. The annealer then checks
//! caller-supplied start states against the list, and [`EnumeratedProblem::minimum`]
//! gives the exact optimum to compare annealing results with.

use crate::error::AdapterError;
use crate::sa::AnnealProblem;
use rand::Rng;
use std::fmt;

/// A problem whose state set is a finite list.
///
/// The move steps to the next state in list order, wrapping at the end.
pub struct EnumeratedProblem<S, F> {
    states: Vec<S>,
    energy_fn: F,
}

impl<S, F> EnumeratedProblem<S, F>
where
    S: Clone + fmt::Debug + PartialEq,
    F: Fn(&S) -> f64,
{
    pub fn new(states: Vec<S>, energy_fn: F) -> Result<Self, AdapterError> {
        if states.is_empty() {
            return Err(AdapterError::InvalidInstance("state set is empty".into()));
        }
        Ok(Self { states, energy_fn })
    }

    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Exhaustive scan for the lowest-energy state. Ties keep the first listed.
    pub fn minimum(&self) -> (S, f64) {
        let mut best = &self.states[0];
        let mut best_energy = (self.energy_fn)(best);
        for state in &self.states[1..] {
            let e = (self.energy_fn)(state);
            if e < best_energy {
                best = state;
                best_energy = e;
            }
        }
        (best.clone(), best_energy)
    }
}

impl<S: fmt::Debug, F> fmt::Debug for EnumeratedProblem<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumeratedProblem")
            .field("states", &self.states)
            .finish_non_exhaustive()
    }
}

impl<S, F> AnnealProblem for EnumeratedProblem<S, F>
where
    S: Clone + fmt::Debug + PartialEq,
    F: Fn(&S) -> f64,
{
    type State = S;

    /// The first listed state.
    fn initial_state(&self) -> S {
        self.states[0].clone()
    }

    fn perturb<R: Rng>(&self, state: &S, _rng: &mut R) -> Result<S, AdapterError> {
        let index = self
            .states
            .iter()
            .position(|s| s == state)
            .ok_or(AdapterError::NotInStateSet)?;
        Ok(self.states[(index + 1) % self.states.len()].clone())
    }

    fn energy(&self, state: &S) -> Result<f64, AdapterError> {
        Ok((self.energy_fn)(state))
    }

    fn contains(&self, state: &S) -> Option<bool> {
        Some(self.states.contains(state))
    }
}
