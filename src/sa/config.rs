//! Annealer configuration.

use crate::error::ConfigError;

/// Configuration for the annealing loop.
///
/// The cooling schedule is passed separately to the [`Annealer`]; this
/// struct holds the loop controls that do not depend on it.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_trials_per_step(100)
///     .with_t_end(0.5)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
///
/// [`Annealer`]: super::Annealer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Number of perturb/accept trials at each temperature step (`n_per`).
    pub trials_per_step: usize,

    /// Temperature floor. The loop stops once the schedule drops below it.
    pub t_end: f64,

    /// Random seed for reproducibility. `None` draws from OS entropy.
    pub seed: Option<u64>,

    /// Hard cap on outer steps. 0 = no limit.
    pub max_steps: usize,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            trials_per_step: 100,
            t_end: 1e-3,
            seed: None,
            max_steps: 0,
        }
    }
}

impl AnnealConfig {
    pub fn with_trials_per_step(mut self, n: usize) -> Self {
        self.trials_per_step = n;
        self
    }

    pub fn with_t_end(mut self, t_end: f64) -> Self {
        self.t_end = t_end;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials_per_step == 0 {
            return Err(ConfigError::invalid("trials_per_step", "must be at least 1"));
        }
        if !(self.t_end.is_finite() && self.t_end > 0.0) {
            return Err(ConfigError::invalid(
                "t_end",
                format!("must be finite and positive, got {}", self.t_end),
            ));
        }
        Ok(())
    }
}
