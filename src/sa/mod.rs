//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases as the temperature falls, allowing the search to escape
//! local optima early and settle into greedy descent late.
//!
//! The cooling schedule is a fixed function of the step index; the loop
//! runs `trials_per_step` trials per temperature until the schedule drops
//! below `t_end`.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod config;
mod progress;
mod runner;
mod schedule;
mod types;

pub use config::AnnealConfig;
pub use progress::{EnergyTrace, LogProgress, NoProgress, ProgressSink, StepReport};
pub use runner::{accept, metropolis_probability, AnnealResult, Annealer};
pub use schedule::{sample_cooling_schedule, Cooling, CoolingSchedule};
pub use types::AnnealProblem;
