//! Genetic Algorithm over simple paths.
//!
//! A generational, elitist GA whose individuals are source-to-target simple
//! paths. Every operator preserves feasibility (see [`crate::operators`]),
//! so the population never contains an invalid path.
//!
//! # Lifecycle
//!
//! Initializing → (Evaluating → Selecting → Reproducing)* → Terminated
//!
//! - **Initializing**: shortest simple paths by hop count, topped up with
//!   random intermediate-node routes
//! - **Selecting**: the `elite_count` cheapest paths survive unchanged
//! - **Reproducing**: two distinct elites are crossed over (a parent is
//!   copied if crossover declines) and the child is mutated
//!
//! The answer is the running best across all generations.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, elites, rates)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best path with run statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Ahn & Ramakrishna (2002), "A Genetic Algorithm for Shortest Path
//!   Routing Problem and the Sizing of Populations"

mod config;
mod population;
mod runner;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use types::Candidate;
