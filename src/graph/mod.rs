//! Attributed network graph and the queries the optimizers consume.
//!
//! The optimizers are generic over [`Topology`], the read-only capability
//! they need from a graph: node/edge attributes and adjacency. [`Network`]
//! is the adjacency-list implementation used throughout the crate.
//!
//! # Key Types
//!
//! - [`NodeAttrs`] / [`EdgeAttrs`]: QoS attributes carried by nodes and links
//! - [`Network`]: undirected adjacency-list graph
//! - [`ShortestSimplePaths`]: lazy simple-path enumeration by hop count
//!
//! # Submodules
//!
//! - [`generator`]: seeded Erdős–Rényi network with random QoS attributes
//!
//! # References
//!
//! - Dijkstra (1959), "A Note on Two Problems in Connexion with Graphs"
//! - Yen (1971), "Finding the K Shortest Loopless Paths in a Network"
//! - Erdős & Rényi (1959), "On Random Graphs I"

pub mod generator;
mod search;
mod simple_paths;
mod types;

pub use search::{connected_components, dijkstra_path, has_path, shortest_path};
pub use simple_paths::ShortestSimplePaths;
pub use types::{EdgeAttrs, Network, NodeAttrs, NodeId, Topology};
