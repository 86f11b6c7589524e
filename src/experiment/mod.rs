//! Comparison sweep over Baseline, GA and SA.
//!
//! Samples connected `(source, target, demand)` triples from a network, runs
//! each algorithm several times per triple with derived seeds, and reduces
//! the trials to mean / population standard deviation / best / worst per
//! metric. [`write_csv`] exports the table.
//!
//! # Key Types
//!
//! - [`ExperimentConfig`]: sweep size, weights, and both optimizer configs
//! - [`Demand`]: one sampled routing request
//! - [`TrialSummary`]: aggregated statistics for one algorithm on one demand

mod config;
mod runner;
mod summary;

pub use config::ExperimentConfig;
pub use runner::{run_experiment, sample_demands, trial_seed, Algorithm, Demand};
pub use summary::{write_csv, Stats, TrialSummary};
