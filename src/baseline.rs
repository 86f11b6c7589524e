//! Deterministic reference solver.
//!
//! Routes by Dijkstra under `link_delay_ms + 1 / bandwidth_mbps`, then scores
//! the resulting path with the same combined cost the optimizers use, so the
//! three algorithms are directly comparable.

use crate::cost::{combined_cost, CostWeights};
use crate::error::Result;
use crate::graph::{dijkstra_path, EdgeAttrs, NodeId, Topology};

/// Path chosen by the baseline solver and its combined cost.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineResult {
    pub path: Vec<NodeId>,
    pub cost: f64,
}

/// Edge weight used by the baseline: link delay plus inverse bandwidth.
///
/// Node attributes and reliabilities are ignored.
pub fn baseline_edge_weight(attrs: &EdgeAttrs) -> f64 {
    attrs.link_delay_ms + 1.0 / attrs.bandwidth_mbps
}

/// Solves `source -> target` with the baseline weight.
///
/// # Errors
///
/// [`RouteError::UnknownNode`](crate::RouteError::UnknownNode) or
/// [`RouteError::NoPath`](crate::RouteError::NoPath) from the underlying
/// search.
pub fn solve_baseline<G: Topology>(
    graph: &G,
    source: NodeId,
    target: NodeId,
    weights: &CostWeights,
) -> Result<BaselineResult> {
    let path = dijkstra_path(graph, source, target, |_, _, attrs| {
        baseline_edge_weight(attrs)
    })?;
    let cost = combined_cost(graph, &path, weights);
    tracing::debug!(source, target, cost, hops = path.len() - 1, "baseline solved");
    Ok(BaselineResult { path, cost })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteError;
    use crate::graph::{Network, NodeAttrs};

    /// 0-1-3 is one hop longer than 0-2-3 in delay but has fat links.
    fn two_routes() -> Network {
        let mut net = Network::new();
        for _ in 0..4 {
            net.add_node(NodeAttrs::new(1.0, 0.99)).unwrap();
        }
        net.add_edge(0, 1, EdgeAttrs::new(1000.0, 3.0, 0.99)).unwrap();
        net.add_edge(1, 3, EdgeAttrs::new(1000.0, 3.0, 0.99)).unwrap();
        net.add_edge(0, 2, EdgeAttrs::new(100.0, 2.0, 0.99)).unwrap();
        net.add_edge(2, 3, EdgeAttrs::new(100.0, 2.0, 0.99)).unwrap();
        net
    }

    /// 4-cycle A-B-C-D-A with uniform attributes.
    fn square() -> Network {
        let mut net = Network::new();
        for _ in 0..4 {
            net.add_node(NodeAttrs::new(1.0, 0.99)).unwrap();
        }
        for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
            net.add_edge(u, v, EdgeAttrs::new(100.0, 2.0, 0.99)).unwrap();
        }
        net
    }

    #[test]
    fn test_square_scenario() {
        let net = square();
        let result = solve_baseline(&net, 0, 2, &CostWeights::default()).unwrap();
        assert_eq!(result.path.len(), 3);
        assert_eq!(result.path.first(), Some(&0));
        assert_eq!(result.path.last(), Some(&2));
        assert!(
            (result.cost - 7.0702).abs() < 1e-3,
            "expected ~7.0702, got {}",
            result.cost
        );
    }

    #[test]
    fn test_edge_weight() {
        let w = baseline_edge_weight(&EdgeAttrs::new(100.0, 2.0, 0.5));
        assert!((w - 2.01).abs() < 1e-12);
    }

    #[test]
    fn test_picks_lowest_weight_route() {
        let net = two_routes();
        let result = solve_baseline(&net, 0, 3, &CostWeights::default()).unwrap();
        assert_eq!(result.path, vec![0, 2, 3]);
        let expected = combined_cost(&net, &[0, 2, 3], &CostWeights::default());
        assert!((result.cost - expected).abs() < 1e-12);
    }

    #[test]
    fn test_cost_uses_given_weights() {
        let net = two_routes();
        let weights = CostWeights::new(0.0, 0.0, 1.0);
        let result = solve_baseline(&net, 0, 3, &weights).unwrap();
        // Path choice ignores weights; only the score changes.
        assert_eq!(result.path, vec![0, 2, 3]);
        assert!((result.cost - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_same_endpoint() {
        let net = two_routes();
        let result = solve_baseline(&net, 1, 1, &CostWeights::default()).unwrap();
        assert_eq!(result.path, vec![1]);
    }

    #[test]
    fn test_errors() {
        let mut net = two_routes();
        let lonely = net.add_node(NodeAttrs::new(1.0, 0.9)).unwrap();
        assert!(matches!(
            solve_baseline(&net, 0, lonely, &CostWeights::default()),
            Err(RouteError::NoPath { .. })
        ));
        assert!(matches!(
            solve_baseline(&net, 0, 42, &CostWeights::default()),
            Err(RouteError::UnknownNode(42))
        ));
    }
}
