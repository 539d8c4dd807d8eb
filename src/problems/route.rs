//! Route sequencing: a closed tour through every node.
//!
//! State is a permutation of node indices. The tour is cyclic, so the last
//! node connects back to the first.

use crate::error::AdapterError;
use crate::sa::AnnealProblem;
use rand::Rng;

/// Largest node count [`RouteProblem::tours`] will enumerate (9! tours).
pub const MAX_ENUMERATED_NODES: usize = 9;

/// A symmetric or asymmetric tour problem over a dense cost matrix.
///
/// # Examples
///
/// ```
/// use u_anneal::problems::route::RouteProblem;
/// use u_anneal::sa::AnnealProblem;
///
/// let square = RouteProblem::from_points(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();
/// assert_eq!(square.energy(&vec![0, 1, 2, 3]).unwrap(), 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct RouteProblem {
    costs: Vec<Vec<f64>>,
}

impl RouteProblem {
    /// Builds a problem from 2-D coordinates using Euclidean distances.
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self, AdapterError> {
        let costs = points
            .iter()
            .map(|&(ax, ay)| {
                points
                    .iter()
                    .map(|&(bx, by)| (ax - bx).hypot(ay - by))
                    .collect()
            })
            .collect();
        Self::from_matrix(costs)
    }

    /// Builds a problem from a square cost matrix, `costs[a][b]` being the
    /// cost of travelling from `a` to `b`.
    pub fn from_matrix(costs: Vec<Vec<f64>>) -> Result<Self, AdapterError> {
        let n = costs.len();
        if n < 2 {
            return Err(AdapterError::InvalidInstance(format!(
                "a route needs at least 2 nodes, got {n}"
            )));
        }
        if let Some((row, r)) = costs.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(AdapterError::InvalidInstance(format!(
                "cost matrix row {row} has {} entries, expected {n}",
                r.len()
            )));
        }
        if costs.iter().flatten().any(|c| !c.is_finite()) {
            return Err(AdapterError::InvalidInstance(
                "cost matrix entries must be finite".into(),
            ));
        }
        Ok(Self { costs })
    }

    pub fn node_count(&self) -> usize {
        self.costs.len()
    }

    /// Cost of the edge `from -> to`.
    pub fn cost(&self, from: usize, to: usize) -> Result<f64, AdapterError> {
        let n = self.node_count();
        let row = self
            .costs
            .get(from)
            .ok_or(AdapterError::IndexOutOfRange { index: from, len: n })?;
        row.get(to)
            .copied()
            .ok_or(AdapterError::IndexOutOfRange { index: to, len: n })
    }

    /// Edges of the closed tour in visiting order, including the edge from the
    /// last node back to the first.
    pub fn edges(&self, tour: &[usize]) -> Vec<(usize, usize)> {
        (0..tour.len())
            .map(|i| (tour[i], tour[(i + 1) % tour.len()]))
            .collect()
    }

    /// Every permutation of `0..n`, for instances small enough to enumerate.
    ///
    /// Allocates `n!` tours, so `n` is limited to [`MAX_ENUMERATED_NODES`].
    pub fn tours(n: usize) -> Result<Vec<Vec<usize>>, AdapterError> {
        if n > MAX_ENUMERATED_NODES {
            return Err(AdapterError::InvalidInstance(format!(
                "cannot enumerate tours of {n} nodes, limit is {MAX_ENUMERATED_NODES}"
            )));
        }
        let mut out = Vec::new();
        let mut current: Vec<usize> = (0..n).collect();
        permute(&mut current, 0, &mut out);
        Ok(out)
    }

    fn check_tour(&self, tour: &[usize]) -> Result<(), AdapterError> {
        let n = self.node_count();
        if tour.len() != n {
            return Err(AdapterError::StateLength {
                expected: n,
                found: tour.len(),
            });
        }
        let mut seen = vec![false; n];
        for &node in tour {
            if node >= n {
                return Err(AdapterError::IndexOutOfRange { index: node, len: n });
            }
            if seen[node] {
                return Err(AdapterError::DuplicateNode { node });
            }
            seen[node] = true;
        }
        Ok(())
    }
}

fn permute(items: &mut Vec<usize>, k: usize, out: &mut Vec<Vec<usize>>) {
    if k + 1 >= items.len() {
        out.push(items.clone());
        return;
    }
    for i in k..items.len() {
        items.swap(k, i);
        permute(items, k + 1, out);
        items.swap(k, i);
    }
}

impl AnnealProblem for RouteProblem {
    type State = Vec<usize>;

    /// The identity tour `[0, 1, .., n-1]`.
    fn initial_state(&self) -> Vec<usize> {
        (0..self.node_count()).collect()
    }

    /// Swaps two distinct positions.
    fn perturb<R: Rng>(&self, tour: &Vec<usize>, rng: &mut R) -> Result<Vec<usize>, AdapterError> {
        self.check_tour(tour)?;
        let n = tour.len();
        let i = rng.random_range(0..n);
        let mut j = rng.random_range(0..n - 1);
        if j >= i {
            j += 1;
        }
        let mut next = tour.clone();
        next.swap(i, j);
        Ok(next)
    }

    /// Total cyclic tour length.
    fn energy(&self, tour: &Vec<usize>) -> Result<f64, AdapterError> {
        self.check_tour(tour)?;
        Ok(self
            .edges(tour)
            .into_iter()
            .map(|(a, b)| self.costs[a][b])
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnnealError;
    use crate::sa::{sample_cooling_schedule, AnnealConfig, Annealer};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> RouteProblem {
        RouteProblem::from_matrix(vec![
            vec![0.0, 6.0, 5.0, 5.0],
            vec![6.0, 0.0, 7.0, 4.0],
            vec![5.0, 7.0, 0.0, 3.0],
            vec![5.0, 4.0, 3.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_energy_cyclic_sum() {
        let p = sample();
        assert_eq!(p.energy(&vec![0, 1, 2, 3]).unwrap(), 21.0);
        assert_eq!(p.energy(&vec![0, 1, 3, 2]).unwrap(), 18.0);
        assert_eq!(p.energy(&vec![3, 2, 0, 1]).unwrap(), 18.0);
    }

    #[test]
    fn test_euclidean_points() {
        let p = RouteProblem::from_points(&[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]).unwrap();
        assert_eq!(p.cost(0, 2).unwrap(), 5.0);
        assert_eq!(p.energy(&vec![0, 1, 2]).unwrap(), 12.0);
    }

    #[test]
    fn test_perturb_swaps_two_positions() {
        let p = sample();
        let mut rng = StdRng::seed_from_u64(42);
        let tour = vec![0, 1, 2, 3];
        for _ in 0..200 {
            let next = p.perturb(&tour, &mut rng).unwrap();
            let changed = tour.iter().zip(&next).filter(|(a, b)| a != b).count();
            assert_eq!(changed, 2);
            let mut sorted = next.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, tour);
        }
        assert_eq!(tour, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_two_node_perturb() {
        let p = RouteProblem::from_points(&[(0.0, 0.0), (1.0, 0.0)]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(p.perturb(&vec![0, 1], &mut rng).unwrap(), vec![1, 0]);
    }

    #[test]
    fn test_malformed_tour() {
        let p = sample();
        assert_eq!(
            p.energy(&vec![0, 1, 2]),
            Err(AdapterError::StateLength {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            p.energy(&vec![0, 1, 2, 4]),
            Err(AdapterError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_repeated_node_rejected() {
        let p = sample();
        assert_eq!(
            p.energy(&vec![0, 0, 1, 2]),
            Err(AdapterError::DuplicateNode { node: 0 })
        );
        let mut rng = StdRng::seed_from_u64(0);
        assert!(p.perturb(&vec![3, 1, 3, 2], &mut rng).is_err());
    }

    #[test]
    fn test_anneal_rejects_non_permutation_start() {
        let config = AnnealConfig::default().with_t_end(1.0).with_seed(0);
        let annealer = Annealer::new(sample(), sample_cooling_schedule(5.0), config).unwrap();
        let err = annealer.run_from(vec![0, 0, 0, 0]).unwrap_err();
        assert_eq!(
            err,
            AnnealError::Adapter(AdapterError::DuplicateNode { node: 0 })
        );
    }

    #[test]
    fn test_tours_size_limit() {
        assert_eq!(RouteProblem::tours(1).unwrap(), vec![vec![0]]);
        assert!(RouteProblem::tours(MAX_ENUMERATED_NODES + 1).is_err());
    }

    #[test]
    fn test_invalid_instances() {
        assert!(RouteProblem::from_matrix(vec![vec![0.0]]).is_err());
        assert!(RouteProblem::from_matrix(vec![vec![0.0, 1.0], vec![1.0]]).is_err());
        assert!(RouteProblem::from_matrix(vec![vec![0.0, f64::NAN], vec![1.0, 0.0]]).is_err());
    }

    #[test]
    fn test_edges_and_tours() {
        let p = sample();
        assert_eq!(p.edges(&[0, 1, 3, 2]), vec![(0, 1), (1, 3), (3, 2), (2, 0)]);

        let tours = RouteProblem::tours(4).unwrap();
        assert_eq!(tours.len(), 24);
        let best = tours
            .iter()
            .map(|t| p.energy(t).unwrap())
            .fold(f64::INFINITY, f64::min);
        assert_eq!(best, 18.0);
    }
}
