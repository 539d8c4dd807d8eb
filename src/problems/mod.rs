//! Problem adapters for the annealer.
//!
//! - [`route`]: closed tour over a cost matrix or 2-D points
//! - [`subset`]: 0/1 knapsack with a capacity bound
//! - [`codeword`]: nearest-codeword decoding of a binary linear code
//! - [`enumerated`]: brute-force adapter over an explicit state list

pub mod codeword;
pub mod enumerated;
pub mod route;
pub mod subset;

pub use codeword::CodewordProblem;
pub use enumerated::EnumeratedProblem;
pub use route::RouteProblem;
pub use subset::{Item, SubsetProblem};
