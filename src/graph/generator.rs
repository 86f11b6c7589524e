//! Synthetic network generation.
//!
//! Builds an Erdős–Rényi G(n, p) graph, bridges any disconnected components
//! into one, and draws QoS attributes uniformly from configurable ranges.
//! The generator owns its own random stream, seeded independently of any
//! optimizer.

use super::search::connected_components;
use super::types::{EdgeAttrs, Network, NodeAttrs, Topology};
use crate::error::{Result, RouteError};
use crate::random::create_rng;
use rand::Rng;

/// Parameters of the synthetic network.
///
/// Attribute ranges are half-open `[lo, hi)`.
///
/// # Examples
///
/// ```
/// use qos_route::graph::generator::{generate_network, GeneratorConfig};
/// use qos_route::graph::Topology;
///
/// let config = GeneratorConfig::default()
///     .with_node_count(30)
///     .with_edge_probability(0.2)
///     .with_seed(7);
/// let net = generate_network(&config).unwrap();
/// assert_eq!(net.node_count(), 30);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of nodes.
    pub node_count: usize,
    /// Independent probability of each possible edge.
    pub edge_probability: f64,
    /// Seed of the generator's random stream.
    pub seed: u64,
    pub processing_delay_ms: (f64, f64),
    pub node_reliability: (f64, f64),
    pub bandwidth_mbps: (f64, f64),
    pub link_delay_ms: (f64, f64),
    pub link_reliability: (f64, f64),
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            node_count: 250,
            edge_probability: 0.4,
            seed: 42,
            processing_delay_ms: (0.5, 2.0),
            node_reliability: (0.95, 0.999),
            bandwidth_mbps: (100.0, 1000.0),
            link_delay_ms: (3.0, 15.0),
            link_reliability: (0.95, 0.999),
        }
    }
}

impl GeneratorConfig {
    pub fn with_node_count(mut self, n: usize) -> Self {
        self.node_count = n;
        self
    }

    pub fn with_edge_probability(mut self, p: f64) -> Self {
        self.edge_probability = p.clamp(0.0, 1.0);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.node_count == 0 {
            return Err(RouteError::InvalidConfig(
                "node_count must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(RouteError::InvalidConfig(format!(
                "edge_probability must be in [0, 1], got {}",
                self.edge_probability
            )));
        }
        let ranges = [
            ("processing_delay_ms", self.processing_delay_ms, false),
            ("node_reliability", self.node_reliability, true),
            ("bandwidth_mbps", self.bandwidth_mbps, false),
            ("link_reliability", self.link_reliability, true),
        ];
        for (name, (lo, hi), unit) in ranges {
            if !(lo > 0.0 && lo < hi) || (unit && hi > 1.0) {
                return Err(RouteError::InvalidConfig(format!(
                    "{name} range ({lo}, {hi}) is invalid"
                )));
            }
        }
        let (lo, hi) = self.link_delay_ms;
        if !(lo >= 0.0 && lo < hi) {
            return Err(RouteError::InvalidConfig(format!(
                "link_delay_ms range ({lo}, {hi}) is invalid"
            )));
        }
        Ok(())
    }
}

/// Generates a connected attributed network.
pub fn generate_network(config: &GeneratorConfig) -> Result<Network> {
    config.validate()?;
    let mut rng = create_rng(config.seed);
    let n = config.node_count;

    let mut net = Network::new();
    // All edge draws precede all attribute draws.
    let mut links = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.random_bool(config.edge_probability) {
                links.push((u, v));
            }
        }
    }

    for _ in 0..n {
        let attrs = NodeAttrs::new(
            uniform(&mut rng, config.processing_delay_ms),
            uniform(&mut rng, config.node_reliability),
        );
        net.add_node(attrs)?;
    }
    for (u, v) in links {
        net.add_edge(u, v, random_link(&mut rng, config))?;
    }

    let components = connected_components(&net);
    if components.len() > 1 {
        tracing::debug!(
            components = components.len(),
            "bridging disconnected components"
        );
        for pair in components.windows(2) {
            let u = pair[0][rng.random_range(0..pair[0].len())];
            let v = pair[1][rng.random_range(0..pair[1].len())];
            net.add_edge(u, v, random_link(&mut rng, config))?;
        }
    }

    tracing::info!(
        nodes = net.node_count(),
        edges = net.edge_count(),
        seed = config.seed,
        "generated network"
    );
    Ok(net)
}

fn random_link<R: Rng>(rng: &mut R, config: &GeneratorConfig) -> EdgeAttrs {
    EdgeAttrs::new(
        uniform(rng, config.bandwidth_mbps),
        uniform(rng, config.link_delay_ms),
        uniform(rng, config.link_reliability),
    )
}

fn uniform<R: Rng>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    rng.random_range(lo..hi)
}
