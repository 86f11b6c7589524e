//! Multi-objective QoS path search over attributed networks.
//!
//! Finds a simple path between two nodes that minimizes a weighted sum of
//! end-to-end delay, unreliability and resource consumption. Three solvers
//! share one cost model:
//!
//! - **Baseline**: Dijkstra under `link_delay + 1 / bandwidth`, scored with
//!   the combined cost for comparison.
//! - **Genetic Algorithm (GA)**: population of simple paths with elitist
//!   selection, common-node crossover and tail-regrowth mutation.
//! - **Simulated Annealing (SA)**: single trajectory from the fewest-hop path
//!   with Metropolis acceptance and geometric cooling.
//!
//! # Architecture
//!
//! - [`graph`]: the [`Topology`](graph::Topology) capability, the
//!   [`Network`](graph::Network) implementation, path queries and a seeded
//!   network generator
//! - [`cost`]: delay, reliability cost, resource cost, combined cost
//! - [`operators`]: path mutation, crossover and via-node splicing
//! - [`ga`], [`sa`], [`baseline`]: the solvers
//! - [`experiment`]: repeated-trial comparison sweep with CSV export
//!
//! Every stochastic entry point takes an explicit seed and creates its random
//! stream exactly once, so identical inputs reproduce identical paths.
//!
//! # Example
//!
//! ```
//! use qos_route::graph::generator::{generate_network, GeneratorConfig};
//! use qos_route::sa::{SaConfig, SaRunner};
//!
//! let net = generate_network(&GeneratorConfig::default().with_node_count(40).with_edge_probability(0.2)).unwrap();
//! let result = SaRunner::run(&net, 0, 39, &SaConfig::default().with_seed(7)).unwrap();
//! assert_eq!(result.best_path.first(), Some(&0));
//! assert_eq!(result.best_path.last(), Some(&39));
//! ```

pub mod baseline;
pub mod cost;
pub mod error;
pub mod experiment;
pub mod ga;
pub mod graph;
pub mod operators;
pub mod random;
pub mod sa;

pub use error::{Result, RouteError};
