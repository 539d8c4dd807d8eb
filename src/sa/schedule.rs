//! Cooling schedules.
//!
//! A schedule maps the outer-loop step index to a temperature. It carries
//! no state of its own: the engine asks for `temperature(t)` once per outer
//! step for the stopping test and again inside the acceptance rule.

use crate::error::ConfigError;

/// Maps a temperature step to a temperature value.
///
/// Any `Fn(usize) -> f64` is a schedule:
///
/// ```
/// use u_anneal::sa::CoolingSchedule;
///
/// let schedule = |t: usize| 10.0 / (t as f64 + 1.0);
/// assert_eq!(schedule.temperature(4), 2.0);
/// ```
///
/// Well-formed schedules are positive and non-increasing. Neither property
/// is checked.
pub trait CoolingSchedule {
    /// Temperature at step `step`.
    fn temperature(&self, step: usize) -> f64;

    /// Number of outer steps run before the temperature drops below `t_end`.
    ///
    /// Returns `None` if the schedule is still at or above `t_end` after
    /// `limit` steps.
    fn steps_until(&self, t_end: f64, limit: usize) -> Option<usize> {
        (0..=limit).find(|&t| {
            let temperature = self.temperature(t);
            temperature.is_nan() || temperature < t_end
        })
    }
}

impl<F> CoolingSchedule for F
where
    F: Fn(usize) -> f64,
{
    fn temperature(&self, step: usize) -> f64 {
        self(step)
    }
}

/// Built-in closed-form cooling schedules.
///
/// # References
///
/// - Hyperbolic: `c / (t + 1)`, the classic sample schedule
/// - Geometric: standard textbook approach
/// - Linear: fixed-duration cooling
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cooling {
    /// `T_t = c / (t + 1)`.
    ///
    /// Starts at `c` and reaches a floor `t_end` after roughly
    /// `c / t_end - 1` steps.
    Hyperbolic {
        /// Initial temperature, also the decay constant.
        c: f64,
    },

    /// `T_t = initial * alpha^t`.
    ///
    /// Typical `alpha`: 0.95 to 0.99.
    Geometric {
        /// Temperature at step 0.
        initial: f64,
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// `T_t = max(initial - t * decrement, 0)`.
    Linear {
        /// Temperature at step 0.
        initial: f64,
        /// Amount subtracted per step.
        decrement: f64,
    },

    /// `T_t = initial / (1 + beta * t * initial)`.
    ///
    /// Closed form of `T_{k+1} = T_k / (1 + beta * T_k)`. Cools fast at high
    /// T, slow at low T.
    LundyMees {
        /// Temperature at step 0.
        initial: f64,
        /// Cooling parameter.
        beta: f64,
    },
}

impl Default for Cooling {
    fn default() -> Self {
        Cooling::Hyperbolic { c: 100.0 }
    }
}

impl Cooling {
    /// Validates the schedule parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Cooling::Hyperbolic { c } => positive("c", c),
            Cooling::Geometric { initial, alpha } => {
                positive("initial", initial)?;
                if !(alpha > 0.0 && alpha < 1.0) {
                    return Err(ConfigError::invalid(
                        "alpha",
                        format!("geometric alpha must be in (0, 1), got {alpha}"),
                    ));
                }
                Ok(())
            }
            Cooling::Linear { initial, decrement } => {
                positive("initial", initial)?;
                positive("decrement", decrement)
            }
            Cooling::LundyMees { initial, beta } => {
                positive("initial", initial)?;
                positive("beta", beta)
            }
        }
    }
}

fn positive(parameter: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            parameter,
            format!("must be finite and positive, got {value}"),
        ))
    }
}

impl CoolingSchedule for Cooling {
    fn temperature(&self, step: usize) -> f64 {
        let t = step as f64;
        match *self {
            Cooling::Hyperbolic { c } => c / (t + 1.0),
            Cooling::Geometric { initial, alpha } => initial * alpha.powf(t),
            Cooling::Linear { initial, decrement } => (initial - t * decrement).max(0.0),
            Cooling::LundyMees { initial, beta } => initial / (1.0 + beta * t * initial),
        }
    }
}

/// The sample schedule `t -> c / (t + 1)`.
///
/// ```
/// use u_anneal::sa::{sample_cooling_schedule, CoolingSchedule};
///
/// let schedule = sample_cooling_schedule(30.0);
/// assert_eq!(schedule.temperature(0), 30.0);
/// assert_eq!(schedule.temperature(2), 10.0);
/// ```
pub fn sample_cooling_schedule(c: f64) -> Cooling {
    Cooling::Hyperbolic { c }
}
