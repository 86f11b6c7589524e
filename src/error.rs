//! Error types shared by every public search entry point.
//!
//! Graph-level failures (no path, unknown node) and initialization failures
//! propagate to the caller as [`RouteError`]. Operator-level infeasibility is
//! never a `RouteError`; see [`crate::operators::Declined`].

use crate::graph::NodeId;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RouteError>;

/// Failures surfaced to callers of the graph, optimizers and harness.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Source and target lie in different connected components.
    #[error("no path between node {from} and node {to}")]
    NoPath {
        /// Requested source.
        from: NodeId,
        /// Requested target.
        to: NodeId,
    },

    /// A node identifier outside the graph was referenced.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// Fewer than two feasible seed paths could be built for the GA.
    #[error("infeasible population: found {found} feasible path(s), need at least {required}")]
    InfeasiblePopulation {
        /// Distinct feasible paths that were found.
        found: usize,
        /// Minimum needed to select and cross over.
        required: usize,
    },

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A node or edge attribute violates its domain.
    #[error("invalid attribute: {0}")]
    InvalidAttribute(String),

    /// Writing an export failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
