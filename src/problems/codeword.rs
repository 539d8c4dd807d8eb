//! Nearest-codeword decoding for binary linear codes.
//!
//! A message `m` of `k` bits encodes to `m * G (mod 2)`, the XOR of the
//! generator rows selected by the set message bits. Decoding searches for
//! the message whose codeword is closest in Hamming distance to a received
//! word.

use crate::error::AdapterError;
use crate::sa::AnnealProblem;
use rand::Rng;

/// Scale applied to the Hamming distance to widen the energy range.
pub const DISTANCE_SCALE: f64 = 10.0;

/// Hamming distance between two equal-length bit strings.
pub fn hamming_distance(a: &[bool], b: &[bool]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

fn to_bits(row: &[u8]) -> Result<Vec<bool>, AdapterError> {
    row.iter()
        .map(|&b| match b {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(AdapterError::InvalidInstance(format!(
                "bit entries must be 0 or 1, got {other}"
            ))),
        })
        .collect()
}

/// Decodes a received word against a `k x n` generator matrix.
#[derive(Debug, Clone)]
pub struct CodewordProblem {
    generator: Vec<Vec<bool>>,
    received: Vec<bool>,
}

impl CodewordProblem {
    pub fn new(generator: Vec<Vec<bool>>, received: Vec<bool>) -> Result<Self, AdapterError> {
        if generator.is_empty() {
            return Err(AdapterError::InvalidInstance(
                "generator matrix has no rows".into(),
            ));
        }
        let n = received.len();
        if let Some(row) = generator.iter().position(|r| r.len() != n) {
            return Err(AdapterError::InvalidInstance(format!(
                "generator row {row} has {} columns, received word has {n}",
                generator[row].len()
            )));
        }
        Ok(Self {
            generator,
            received,
        })
    }

    /// Builds a problem from 0/1 integer rows, as codes are usually written.
    ///
    /// Any entry other than 0 or 1 is rejected.
    pub fn from_bits(generator: &[Vec<u8>], received: &[u8]) -> Result<Self, AdapterError> {
        let rows = generator
            .iter()
            .map(|row| to_bits(row))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rows, to_bits(received)?)
    }

    /// Message length `k`.
    pub fn message_len(&self) -> usize {
        self.generator.len()
    }

    /// Codeword length `n`.
    pub fn code_len(&self) -> usize {
        self.received.len()
    }

    pub fn received(&self) -> &[bool] {
        &self.received
    }

    /// Encodes `message` through the generator matrix.
    pub fn encode(&self, message: &[bool]) -> Result<Vec<bool>, AdapterError> {
        if message.len() != self.message_len() {
            return Err(AdapterError::StateLength {
                expected: self.message_len(),
                found: message.len(),
            });
        }
        let mut code = vec![false; self.code_len()];
        for row in self
            .generator
            .iter()
            .zip(message)
            .filter_map(|(row, &bit)| bit.then_some(row))
        {
            for (c, &g) in code.iter_mut().zip(row) {
                *c ^= g;
            }
        }
        Ok(code)
    }
}

impl AnnealProblem for CodewordProblem {
    type State = Vec<bool>;

    /// The all-zero message.
    fn initial_state(&self) -> Vec<bool> {
        vec![false; self.message_len()]
    }

    /// Flips one message bit.
    fn perturb<R: Rng>(&self, message: &Vec<bool>, rng: &mut R) -> Result<Vec<bool>, AdapterError> {
        if message.len() != self.message_len() {
            return Err(AdapterError::StateLength {
                expected: self.message_len(),
                found: message.len(),
            });
        }
        let mut next = message.clone();
        let i = rng.random_range(0..next.len());
        next[i] = !next[i];
        Ok(next)
    }

    fn energy(&self, message: &Vec<bool>) -> Result<f64, AdapterError> {
        let code = self.encode(message)?;
        Ok(hamming_distance(&code, &self.received) as f64 * DISTANCE_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sa::{sample_cooling_schedule, AnnealConfig, Annealer};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // [I_4 | 0] generator, 4 message bits, 7 code bits.
    fn identity_prefixed(received: &[u8]) -> CodewordProblem {
        let generator: Vec<Vec<u8>> = (0..4)
            .map(|i| (0..7).map(|j| u8::from(i == j)).collect())
            .collect();
        CodewordProblem::from_bits(&generator, received).unwrap()
    }

    #[test]
    fn test_encode_xor_of_rows() {
        let p = CodewordProblem::from_bits(&[vec![1, 0, 1, 1], vec![0, 1, 1, 0]], &[0, 0, 0, 0])
            .unwrap();
        assert_eq!(p.encode(&[true, true]).unwrap(), vec![true, true, false, true]);
        assert_eq!(p.encode(&[false, false]).unwrap(), vec![false; 4]);
    }

    #[test]
    fn test_energy_scaled_distance() {
        let p = identity_prefixed(&[1, 0, 1, 0, 0, 0, 1]);
        assert_eq!(p.energy(&vec![false; 4]).unwrap(), 30.0);
        assert_eq!(p.energy(&vec![true, false, true, false]).unwrap(), 10.0);
    }

    #[test]
    fn test_hamming_distance() {
        assert_eq!(hamming_distance(&[true, false, true], &[true, true, false]), 2);
        assert_eq!(hamming_distance(&[], &[]), 0);
    }

    #[test]
    fn test_perturb_flips_one_bit() {
        let p = identity_prefixed(&[0; 7]);
        let mut rng = StdRng::seed_from_u64(1);
        let message = vec![false, true, false, false];
        for _ in 0..50 {
            let next = p.perturb(&message, &mut rng).unwrap();
            assert_eq!(hamming_distance(&message, &next), 1);
        }
    }

    #[test]
    fn test_invalid_instances() {
        assert!(CodewordProblem::new(vec![], vec![true]).is_err());
        assert!(CodewordProblem::from_bits(&[vec![1, 0], vec![1]], &[0, 0]).is_err());
        assert!(CodewordProblem::from_bits(&[vec![1, 3]], &[0, 0]).is_err());
        assert!(CodewordProblem::from_bits(&[vec![1, 0]], &[2, 0]).is_err());
        let p = identity_prefixed(&[0; 7]);
        assert!(p.energy(&vec![true; 3]).is_err());
    }

    #[test]
    fn test_decodes_zero_codeword() {
        // Start from the all-ones message so the anneal has work to do.
        let mut converged = 0;
        for seed in 0..10 {
            let config = AnnealConfig::default()
                .with_trials_per_step(20)
                .with_t_end(1.0)
                .with_seed(seed);
            let annealer = Annealer::new(
                identity_prefixed(&[0; 7]),
                sample_cooling_schedule(100.0),
                config,
            )
            .unwrap();
            let result = annealer.run_from(vec![true; 4]).unwrap();
            if result.energy == 0.0 {
                converged += 1;
            }
        }
        assert!(converged >= 9, "only {converged}/10 runs decoded");
    }
}
