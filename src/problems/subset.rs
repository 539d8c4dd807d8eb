//! Subset selection under a capacity bound (0/1 knapsack).

use crate::error::AdapterError;
use crate::sa::AnnealProblem;
use rand::Rng;

/// An item that can be packed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub value: f64,
    pub weight: f64,
}

impl Item {
    pub fn new(value: f64, weight: f64) -> Self {
        Self { value, weight }
    }
}

impl From<(f64, f64)> for Item {
    fn from((value, weight): (f64, f64)) -> Self {
        Self { value, weight }
    }
}

/// Maximizes the total value of selected items without exceeding capacity.
///
/// State is one inclusion flag per item. Energy is the negated total value,
/// or a fixed sentinel when the selection is overweight. The sentinel
/// defaults to `0.0` ("no benefit"); overweight moves are scored, never
/// rejected outright.
#[derive(Debug, Clone)]
pub struct SubsetProblem {
    items: Vec<Item>,
    capacity: f64,
    infeasible_energy: f64,
}

impl SubsetProblem {
    pub fn new(items: Vec<Item>, capacity: f64) -> Result<Self, AdapterError> {
        if items.is_empty() {
            return Err(AdapterError::InvalidInstance("no items to select".into()));
        }
        if !capacity.is_finite() || capacity < 0.0 {
            return Err(AdapterError::InvalidInstance(format!(
                "capacity must be finite and non-negative, got {capacity}"
            )));
        }
        if let Some(i) = items
            .iter()
            .position(|it| !it.value.is_finite() || !it.weight.is_finite() || it.weight < 0.0)
        {
            return Err(AdapterError::InvalidInstance(format!(
                "item {i} must have a finite value and a finite non-negative weight"
            )));
        }
        Ok(Self {
            items,
            capacity,
            infeasible_energy: 0.0,
        })
    }

    /// Sets the energy returned for overweight selections.
    ///
    /// A large positive value penalizes infeasibility; the default `0.0`
    /// can look attractive next to low-value feasible selections.
    pub fn with_infeasible_energy(mut self, energy: f64) -> Self {
        self.infeasible_energy = energy;
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn total_value(&self, selection: &[bool]) -> Result<f64, AdapterError> {
        Ok(self.selected(selection)?.map(|it| it.value).sum())
    }

    pub fn total_weight(&self, selection: &[bool]) -> Result<f64, AdapterError> {
        Ok(self.selected(selection)?.map(|it| it.weight).sum())
    }

    pub fn is_feasible(&self, selection: &[bool]) -> Result<bool, AdapterError> {
        Ok(self.total_weight(selection)? <= self.capacity)
    }

    fn selected<'a>(
        &'a self,
        selection: &'a [bool],
    ) -> Result<impl Iterator<Item = &'a Item> + 'a, AdapterError> {
        if selection.len() != self.items.len() {
            return Err(AdapterError::StateLength {
                expected: self.items.len(),
                found: selection.len(),
            });
        }
        Ok(self
            .items
            .iter()
            .zip(selection)
            .filter_map(|(it, &on)| on.then_some(it)))
    }
}

impl AnnealProblem for SubsetProblem {
    type State = Vec<bool>;

    /// The empty selection.
    fn initial_state(&self) -> Vec<bool> {
        vec![false; self.items.len()]
    }

    /// Flips one inclusion flag.
    fn perturb<R: Rng>(&self, selection: &Vec<bool>, rng: &mut R) -> Result<Vec<bool>, AdapterError> {
        if selection.len() != self.items.len() {
            return Err(AdapterError::StateLength {
                expected: self.items.len(),
                found: selection.len(),
            });
        }
        let mut next = selection.clone();
        let i = rng.random_range(0..next.len());
        next[i] = !next[i];
        Ok(next)
    }

    fn energy(&self, selection: &Vec<bool>) -> Result<f64, AdapterError> {
        if self.total_weight(selection)? > self.capacity {
            return Ok(self.infeasible_energy);
        }
        Ok(-self.total_value(selection)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sa::{sample_cooling_schedule, AnnealConfig, Annealer};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> SubsetProblem {
        SubsetProblem::new(
            vec![(60.0, 10.0).into(), (100.0, 20.0).into(), (120.0, 30.0).into()],
            50.0,
        )
        .unwrap()
    }

    #[test]
    fn test_energy_values() {
        let p = sample();
        assert_eq!(p.energy(&vec![false, false, false]).unwrap(), 0.0);
        assert_eq!(p.energy(&vec![true, true, false]).unwrap(), -160.0);
        assert_eq!(p.energy(&vec![false, true, true]).unwrap(), -220.0);
        // weight 60 > 50
        assert_eq!(p.energy(&vec![true, true, true]).unwrap(), 0.0);
    }

    #[test]
    fn test_custom_infeasible_energy() {
        let p = sample().with_infeasible_energy(1e6);
        assert_eq!(p.energy(&vec![true, true, true]).unwrap(), 1e6);
        assert_eq!(p.energy(&vec![true, false, true]).unwrap(), -180.0);
    }

    #[test]
    fn test_perturb_flips_one_flag() {
        let p = sample();
        let mut rng = StdRng::seed_from_u64(42);
        let state = vec![false, true, false];
        for _ in 0..100 {
            let next = p.perturb(&state, &mut rng).unwrap();
            let diff = state.iter().zip(&next).filter(|(a, b)| a != b).count();
            assert_eq!(diff, 1);
        }
    }

    #[test]
    fn test_wrong_length() {
        let p = sample();
        assert!(matches!(
            p.energy(&vec![true]),
            Err(AdapterError::StateLength {
                expected: 3,
                found: 1
            })
        ));
        let mut rng = StdRng::seed_from_u64(0);
        assert!(p.perturb(&vec![], &mut rng).is_err());
    }

    #[test]
    fn test_invalid_instances() {
        assert!(SubsetProblem::new(vec![], 10.0).is_err());
        assert!(SubsetProblem::new(vec![Item::new(1.0, 1.0)], -1.0).is_err());
        assert!(SubsetProblem::new(vec![Item::new(1.0, -1.0)], 1.0).is_err());
    }

    #[test]
    fn test_knapsack_scenario() {
        let mut good_runs = 0;
        for seed in 0..20 {
            let config = AnnealConfig::default()
                .with_trials_per_step(20)
                .with_t_end(1.0)
                .with_seed(seed);
            let annealer = Annealer::new(sample(), sample_cooling_schedule(200.0), config).unwrap();
            let result = annealer.run().unwrap();

            for selection in [&result.best, &result.state] {
                assert!(
                    annealer.problem().is_feasible(selection).unwrap(),
                    "seed {seed}: selection {selection:?} is overweight"
                );
            }
            if result.energy <= -180.0 {
                good_runs += 1;
            }
        }
        assert!(good_runs >= 10, "only {good_runs}/20 runs ended at value 180 or more");
    }
}
