//! Multi-objective path cost model.
//!
//! A path is scored on three components, all minimized:
//!
//! - **delay**: node processing delay plus link delay, in milliseconds
//! - **reliability cost**: `-ln(R)` where `R` is the product of every node
//!   and link reliability on the path
//! - **resource cost**: sum of `1 / bandwidth_mbps` over traversed links
//!
//! [`combined_cost`] is the weighted sum of the three and is the only
//! ranking and acceptance signal used by the optimizers.
//!
//! A consecutive pair that is not an edge (or an unknown node) scores
//! `+inf`, so a malformed path can never win a comparison.

use crate::error::{Result, RouteError};
use crate::graph::{EdgeAttrs, NodeId, Topology};

/// Weights of the three cost components.
///
/// # Examples
///
/// ```
/// use qos_route::cost::CostWeights;
///
/// let w = CostWeights::new(1.0, 0.05, 0.05);
/// assert!(w.validate().is_ok());
/// assert!(CostWeights::new(-1.0, 1.0, 1.0).validate().is_err());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostWeights {
    pub delay: f64,
    pub reliability: f64,
    pub resource: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            delay: 1.0,
            reliability: 1.0,
            resource: 1.0,
        }
    }
}

impl CostWeights {
    /// Delay-focused preset `(1.0, 0.05, 0.05)`.
    pub const DELAY_FOCUSED: CostWeights = CostWeights {
        delay: 1.0,
        reliability: 0.05,
        resource: 0.05,
    };

    /// Reliability-focused preset `(0.2, 5.0, 0.2)`.
    pub const RELIABILITY_FOCUSED: CostWeights = CostWeights {
        delay: 0.2,
        reliability: 5.0,
        resource: 0.2,
    };

    /// Bandwidth-focused preset `(0.2, 0.2, 20.0)`.
    pub const BANDWIDTH_FOCUSED: CostWeights = CostWeights {
        delay: 0.2,
        reliability: 0.2,
        resource: 20.0,
    };

    pub fn new(delay: f64, reliability: f64, resource: f64) -> Self {
        Self {
            delay,
            reliability,
            resource,
        }
    }

    /// Weights must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for (name, w) in [
            ("delay", self.delay),
            ("reliability", self.reliability),
            ("resource", self.resource),
        ] {
            if !(w >= 0.0) || !w.is_finite() {
                return Err(RouteError::InvalidConfig(format!(
                    "{name} weight must be finite and non-negative, got {w}"
                )));
            }
        }
        Ok(())
    }
}

/// Raw cost vector of a path.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathMetrics {
    /// Total delay in milliseconds.
    pub delay: f64,
    /// `-ln` of the end-to-end reliability.
    pub reliability_cost: f64,
    /// Sum of inverse link bandwidths.
    pub resource_cost: f64,
    /// Number of nodes on the path.
    pub length: usize,
}

impl PathMetrics {
    /// Weighted sum of the three cost components. `length` is not weighted.
    pub fn combined(&self, weights: &CostWeights) -> f64 {
        weights.delay * self.delay
            + weights.reliability * self.reliability_cost
            + weights.resource * self.resource_cost
    }
}

/// Total delay: every node's processing delay plus every traversed link's delay.
pub fn delay<G: Topology>(graph: &G, path: &[NodeId]) -> f64 {
    let mut total = 0.0;
    for &id in path {
        match graph.node(id) {
            Some(n) => total += n.processing_delay_ms,
            None => return f64::INFINITY,
        }
    }
    total + fold_links(graph, path, |e| e.link_delay_ms)
}

/// Reliability cost `-ln(R)`, with `R` the product of node and link
/// reliabilities. Zero only when every component is perfectly reliable.
pub fn reliability_cost<G: Topology>(graph: &G, path: &[NodeId]) -> f64 {
    let mut product = 1.0;
    for &id in path {
        match graph.node(id) {
            Some(n) => product *= n.node_reliability,
            None => return f64::INFINITY,
        }
    }
    for pair in path.windows(2) {
        match graph.edge(pair[0], pair[1]) {
            Some(e) => product *= e.link_reliability,
            None => return f64::INFINITY,
        }
    }
    let cost = -product.ln();
    // -ln(1) is -0.0
    if cost > 0.0 {
        cost
    } else {
        0.0
    }
}

/// Resource cost: sum of `1 / bandwidth_mbps` over traversed links.
///
/// Bandwidths are positive by [`Network`](crate::graph::Network) construction.
pub fn resource_cost<G: Topology>(graph: &G, path: &[NodeId]) -> f64 {
    fold_links(graph, path, |e| 1.0 / e.bandwidth_mbps)
}

/// Full cost vector of a path.
pub fn evaluate_path<G: Topology>(graph: &G, path: &[NodeId]) -> PathMetrics {
    PathMetrics {
        delay: delay(graph, path),
        reliability_cost: reliability_cost(graph, path),
        resource_cost: resource_cost(graph, path),
        length: path.len(),
    }
}

/// Weighted scalar cost used to rank and accept candidates.
pub fn combined_cost<G: Topology>(graph: &G, path: &[NodeId], weights: &CostWeights) -> f64 {
    evaluate_path(graph, path).combined(weights)
}

fn fold_links<G: Topology, F: Fn(&EdgeAttrs) -> f64>(graph: &G, path: &[NodeId], f: F) -> f64 {
    let mut total = 0.0;
    for pair in path.windows(2) {
        match graph.edge(pair[0], pair[1]) {
            Some(e) => total += f(e),
            None => return f64::INFINITY,
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeAttrs, Network, NodeAttrs};

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
    fn test_square_components() {
        let net = square();
        let m = evaluate_path(&net, &[0, 1, 2]);
        assert!((m.delay - 7.0).abs() < 1e-12);
        assert!((m.reliability_cost - (-(0.99f64.powi(5)).ln())).abs() < 1e-12);
        assert!((m.resource_cost - 0.02).abs() < 1e-12);
        assert_eq!(m.length, 3);
    }

    #[test]
    fn test_square_combined() {
        let net = square();
        let c = combined_cost(&net, &[0, 3, 2], &CostWeights::default());
        assert!((c - 7.0702).abs() < 1e-3, "got {c}");
        let same = combined_cost(&net, &[0, 1, 2], &CostWeights::default());
        assert!((c - same).abs() < 1e-12);
    }

    #[test]
    fn test_weights_scale_components() {
        let net = square();
        let only_delay = combined_cost(&net, &[0, 1, 2], &CostWeights::new(1.0, 0.0, 0.0));
        assert!((only_delay - 7.0).abs() < 1e-12);
        let only_res = combined_cost(&net, &[0, 1, 2], &CostWeights::new(0.0, 0.0, 2.0));
        assert!((only_res - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_single_node_path() {
        let net = square();
        let m = evaluate_path(&net, &[2]);
        assert!((m.delay - 1.0).abs() < 1e-12);
        assert!(m.resource_cost.abs() < 1e-15);
        assert!(m.reliability_cost > 0.0);
    }

    #[test]
    fn test_perfect_reliability_is_zero() {
        let mut net = Network::new();
        net.add_node(NodeAttrs::new(1.0, 1.0)).unwrap();
        net.add_node(NodeAttrs::new(1.0, 1.0)).unwrap();
        net.add_edge(0, 1, EdgeAttrs::new(10.0, 0.0, 1.0)).unwrap();
        let r = reliability_cost(&net, &[0, 1]);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn test_missing_edge_is_infinite() {
        let net = square();
        assert!(combined_cost(&net, &[0, 2], &CostWeights::default()).is_infinite());
        assert!(delay(&net, &[0, 9]).is_infinite());
    }

    #[test]
    fn test_presets() {
        for w in [
            CostWeights::DELAY_FOCUSED,
            CostWeights::RELIABILITY_FOCUSED,
            CostWeights::BANDWIDTH_FOCUSED,
        ] {
            assert!(w.validate().is_ok());
        }
        let net = square();
        let m = evaluate_path(&net, &[0, 1, 2]);
        let delay_heavy = m.combined(&CostWeights::DELAY_FOCUSED);
        assert!((delay_heavy - (7.0 + 0.05 * m.reliability_cost + 0.05 * 0.02)).abs() < 1e-12);
        let res_heavy = m.combined(&CostWeights::BANDWIDTH_FOCUSED);
        assert!((res_heavy - (1.4 + 0.2 * m.reliability_cost + 0.4)).abs() < 1e-12);
    }

    #[test]
    fn test_weights_validate() {
        assert!(CostWeights::default().validate().is_ok());
        assert!(CostWeights::new(0.0, 0.0, 0.0).validate().is_ok());
        assert!(CostWeights::new(f64::NAN, 1.0, 1.0).validate().is_err());
        assert!(CostWeights::new(1.0, f64::INFINITY, 1.0).validate().is_err());
    }

    mod properties {
        use super::*;
        use crate::graph::generator::{generate_network, GeneratorConfig};
        use crate::graph::shortest_path;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(32))]

            #[test]
            fn prop_costs_non_negative(seed in 0u64..500, s in 0usize..20, t in 0usize..20) {
                let net = generate_network(
                    &GeneratorConfig::default().with_node_count(20).with_edge_probability(0.15).with_seed(seed),
                ).unwrap();
                let path = shortest_path(&net, s, t).unwrap();
                prop_assert!(reliability_cost(&net, &path) >= 0.0);
                prop_assert!(resource_cost(&net, &path) >= 0.0);
                prop_assert!(delay(&net, &path) > 0.0);
            }
        }
    }
}
