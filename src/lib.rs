//! Simulated annealing for discrete combinatorial problems.
//!
//! - **Engine** ([`sa`]): fixed cooling schedule, per-temperature trial
//!   loop, Metropolis acceptance, pluggable progress sinks.
//! - **Adapters** ([`problems`]): route sequencing (TSP tours), subset
//!   selection (0/1 knapsack), nearest-codeword decoding, and a brute-force
//!   adapter over an explicit state list.
//!
//! # Architecture
//!
//! The engine knows nothing about state structure. A problem implements
//! [`sa::AnnealProblem`] (initial state, perturbation, energy) and the
//! [`sa::Annealer`] drives it through a [`sa::CoolingSchedule`]. All
//! randomness flows through one explicit generator, seeded from
//! [`sa::AnnealConfig::seed`] or supplied by the caller.
//!
//! # Example
//!
//! ```
//! use u_anneal::problems::{Item, SubsetProblem};
//! use u_anneal::sa::{sample_cooling_schedule, AnnealConfig, Annealer};
//!
//! let knapsack = SubsetProblem::new(
//!     vec![Item::new(60.0, 10.0), Item::new(100.0, 20.0), Item::new(120.0, 30.0)],
//!     50.0,
//! )?;
//! let config = AnnealConfig::default()
//!     .with_trials_per_step(20)
//!     .with_t_end(1.0)
//!     .with_seed(42);
//! let annealer = Annealer::new(knapsack, sample_cooling_schedule(200.0), config)?;
//! let result = annealer.run()?;
//! assert_eq!(result.best_energy, -220.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod problems;
pub mod sa;

pub use error::{AdapterError, AnnealError, ConfigError};
