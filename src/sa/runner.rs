//! Annealing execution loop.
//!
//! # Algorithm
//!
//! 1. `t = 0`, `x` = caller-supplied start or the problem's initial state
//! 2. While `schedule(t) >= t_end`:
//!    a. Report `(x, t)` to the progress sink
//!    b. `trials_per_step` times: perturb `x`, accept the candidate by the
//!       Metropolis criterion at temperature `schedule(t)`
//!    c. `t = t + 1`
//! 3. Return `x`
//!
//! # References
//!
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

use super::config::AnnealConfig;
use super::progress::{NoProgress, ProgressSink, StepReport};
use super::schedule::CoolingSchedule;
use super::types::AnnealProblem;
use crate::error::AnnealError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult<S: Clone> {
    /// Terminal state: the current state when the schedule fell below `t_end`.
    pub state: S,

    /// Energy of the terminal state.
    pub energy: f64,

    /// Lowest-energy state seen during the run.
    pub best: S,

    /// Energy of `best`.
    pub best_energy: f64,

    /// Number of outer (temperature) steps performed.
    pub steps: usize,

    /// Total number of perturb/accept trials.
    pub trials: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Schedule temperature at the step that ended the run.
    pub final_temperature: f64,

    /// Best energy after each outer step.
    pub best_energy_history: Vec<f64>,
}

/// Probability of accepting a move from `e_curr` to `e_next` at `temperature`.
///
/// Non-worsening moves have probability 1. Worsening moves have
/// `exp(-(e_next - e_curr) / temperature)`, or 0 when the temperature is not
/// positive.
pub fn metropolis_probability(e_curr: f64, e_next: f64, temperature: f64) -> f64 {
    if e_next <= e_curr {
        1.0
    } else if temperature > 0.0 {
        (-(e_next - e_curr) / temperature).exp()
    } else {
        0.0
    }
}

/// Metropolis acceptance decision.
///
/// Non-worsening moves are accepted without consuming randomness. Otherwise
/// one uniform draw `u` in `[0, 1)` is taken and the move is accepted iff
/// `u <= exp(-(e_next - e_curr) / temperature)`.
pub fn accept<R: Rng>(e_curr: f64, e_next: f64, temperature: f64, rng: &mut R) -> bool {
    if e_next <= e_curr {
        return true;
    }
    if temperature.is_nan() || temperature <= 0.0 {
        return false;
    }
    let probability = metropolis_probability(e_curr, e_next, temperature);
    rng.random::<f64>() <= probability
}

/// Drives a problem through a cooling schedule.
///
/// # Examples
///
/// ```
/// use u_anneal::problems::route::RouteProblem;
/// use u_anneal::sa::{sample_cooling_schedule, AnnealConfig, Annealer};
///
/// let route = RouteProblem::from_matrix(vec![
///     vec![0.0, 6.0, 5.0, 5.0],
///     vec![6.0, 0.0, 7.0, 4.0],
///     vec![5.0, 7.0, 0.0, 3.0],
///     vec![5.0, 4.0, 3.0, 0.0],
/// ])
/// .unwrap();
/// let config = AnnealConfig::default()
///     .with_trials_per_step(100)
///     .with_t_end(0.5)
///     .with_seed(42);
///
/// let annealer = Annealer::new(route, sample_cooling_schedule(30.0), config).unwrap();
/// let result = annealer.run().unwrap();
/// assert_eq!(result.best_energy, 18.0);
/// ```
#[derive(Debug, Clone)]
pub struct Annealer<P, C> {
    problem: P,
    schedule: C,
    config: AnnealConfig,
}

impl<P, C> Annealer<P, C>
where
    P: AnnealProblem,
    C: CoolingSchedule,
{
    /// Creates an annealer after validating `config`.
    pub fn new(problem: P, schedule: C, config: AnnealConfig) -> Result<Self, AnnealError> {
        config.validate()?;
        Ok(Self {
            problem,
            schedule,
            config,
        })
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn schedule(&self) -> &C {
        &self.schedule
    }

    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    /// Replaces the seed used by subsequent runs.
    pub fn reseed(&mut self, seed: u64) {
        self.config.seed = Some(seed);
    }

    /// Runs from the problem's initial state.
    pub fn run(&self) -> Result<AnnealResult<P::State>, AnnealError> {
        self.run_with_progress(None, &mut NoProgress)
    }

    /// Runs from `start`.
    ///
    /// Fails with [`AnnealError::InvalidState`] if the problem declares a
    /// finite state set that does not contain `start`.
    pub fn run_from(&self, start: P::State) -> Result<AnnealResult<P::State>, AnnealError> {
        self.run_with_progress(Some(start), &mut NoProgress)
    }

    /// Runs with a progress sink, seeding a fresh generator from the config.
    pub fn run_with_progress<K>(
        &self,
        start: Option<P::State>,
        sink: &mut K,
    ) -> Result<AnnealResult<P::State>, AnnealError>
    where
        K: ProgressSink<P::State>,
    {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.run_with_rng(start, sink, &mut rng)
    }

    /// Runs with a caller-owned random source. `config.seed` is ignored.
    pub fn run_with_rng<K, R>(
        &self,
        start: Option<P::State>,
        sink: &mut K,
        rng: &mut R,
    ) -> Result<AnnealResult<P::State>, AnnealError>
    where
        K: ProgressSink<P::State>,
        R: Rng,
    {
        let config = &self.config;

        let mut current = match start {
            Some(state) => {
                if self.problem.contains(&state) == Some(false) {
                    return Err(AnnealError::InvalidState(format!("{state:?}")));
                }
                state
            }
            None => self.problem.initial_state(),
        };
        let mut current_energy = self.problem.energy(&current)?;
        let mut best = current.clone();
        let mut best_energy = current_energy;

        log::info!("annealing start: x = {current:?}, E(x) = {current_energy}");

        let mut step = 0usize;
        let mut trials = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut best_energy_history = Vec::new();

        let mut temperature = self.schedule.temperature(step);
        while temperature >= config.t_end {
            if config.max_steps > 0 && step >= config.max_steps {
                log::warn!("annealing stopped at step cap {}", config.max_steps);
                break;
            }
            log::trace!("step {step}: T = {temperature}");

            sink.on_step(&StepReport {
                step,
                temperature,
                state: &current,
                energy: current_energy,
                best_energy,
            });

            for _ in 0..config.trials_per_step {
                let candidate = self.problem.perturb(&current, rng)?;
                let candidate_energy = self.problem.energy(&candidate)?;
                trials += 1;

                if accept(current_energy, candidate_energy, temperature, rng) {
                    log::debug!("accept: x = {candidate:?}, E(x) = {candidate_energy}");
                    if candidate_energy < current_energy {
                        improving_moves += 1;
                    }
                    current = candidate;
                    current_energy = candidate_energy;
                    accepted_moves += 1;

                    if current_energy < best_energy {
                        best = current.clone();
                        best_energy = current_energy;
                    }
                }
            }

            best_energy_history.push(best_energy);
            step += 1;
            temperature = self.schedule.temperature(step);
        }

        log::info!("annealing end: x = {current:?}, E(x) = {current_energy}, steps = {step}");

        Ok(AnnealResult {
            state: current,
            energy: current_energy,
            best,
            best_energy,
            steps: step,
            trials,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
            best_energy_history,
        })
    }
}
