//! Simulated Annealing (SA) over simple paths.
//!
//! A single-trajectory search that starts from the fewest-hop path, proposes
//! neighbors with the shared tail-regrowth operator, and accepts worse
//! neighbors with probability `exp(-delta / T)` while `T` cools
//! geometrically. The answer is the best path visited, not the last.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
