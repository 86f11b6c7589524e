//! Graph data model: attributes, the [`Topology`] capability, and [`Network`].

use crate::error::{Result, RouteError};
use std::collections::HashMap;

/// Node identifier. Nodes are numbered densely from zero.
pub type NodeId = usize;

/// QoS attributes of a node.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeAttrs {
    /// Processing delay in milliseconds. Positive.
    pub processing_delay_ms: f64,
    /// Probability the node forwards correctly, in (0, 1].
    pub node_reliability: f64,
}

impl NodeAttrs {
    pub fn new(processing_delay_ms: f64, node_reliability: f64) -> Self {
        Self {
            processing_delay_ms,
            node_reliability,
        }
    }
}

/// QoS attributes of an undirected link.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeAttrs {
    /// Link capacity in Mbps. Positive.
    pub bandwidth_mbps: f64,
    /// Propagation delay in milliseconds. Non-negative.
    pub link_delay_ms: f64,
    /// Probability the link delivers correctly, in (0, 1].
    pub link_reliability: f64,
}

impl EdgeAttrs {
    pub fn new(bandwidth_mbps: f64, link_delay_ms: f64, link_reliability: f64) -> Self {
        Self {
            bandwidth_mbps,
            link_delay_ms,
            link_reliability,
        }
    }
}

/// Read-only graph capability consumed by the cost model and optimizers.
///
/// Implementations must be immutable for the duration of any optimizer run.
/// The order of [`neighbors`](Topology::neighbors) determines BFS
/// tie-breaking, so it must be stable for results to be reproducible.
///
/// `Sync` because population evaluation may read the graph from several
/// threads when the `parallel` feature is enabled.
pub trait Topology: Sync {
    /// Number of nodes; valid ids are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Attributes of node `id`, or `None` if it does not exist.
    fn node(&self, id: NodeId) -> Option<&NodeAttrs>;

    /// Attributes of the undirected edge `{u, v}`, or `None` if absent.
    fn edge(&self, u: NodeId, v: NodeId) -> Option<&EdgeAttrs>;

    /// Nodes adjacent to `id`. Empty for unknown ids.
    fn neighbors(&self, id: NodeId) -> &[NodeId];

    /// Returns `true` if `id` names a node of this graph.
    fn contains(&self, id: NodeId) -> bool {
        id < self.node_count()
    }
}

/// Undirected adjacency-list network with QoS attributes.
///
/// # Examples
///
/// ```
/// use qos_route::graph::{EdgeAttrs, Network, NodeAttrs, Topology};
///
/// let mut net = Network::new();
/// let a = net.add_node(NodeAttrs::new(1.0, 0.99)).unwrap();
/// let b = net.add_node(NodeAttrs::new(1.0, 0.99)).unwrap();
/// net.add_edge(a, b, EdgeAttrs::new(100.0, 2.0, 0.99)).unwrap();
/// assert_eq!(net.neighbors(a), &[b]);
/// assert!(net.edge(b, a).is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Network {
    nodes: Vec<NodeAttrs>,
    adjacency: Vec<Vec<NodeId>>,
    edges: HashMap<(NodeId, NodeId), EdgeAttrs>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node and returns its id.
    pub fn add_node(&mut self, attrs: NodeAttrs) -> Result<NodeId> {
        if !(attrs.processing_delay_ms > 0.0) || !attrs.processing_delay_ms.is_finite() {
            return Err(RouteError::InvalidAttribute(format!(
                "processing_delay_ms must be positive, got {}",
                attrs.processing_delay_ms
            )));
        }
        check_reliability("node_reliability", attrs.node_reliability)?;

        let id = self.nodes.len();
        self.nodes.push(attrs);
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Adds the undirected edge `{u, v}`.
    ///
    /// Re-adding an existing edge replaces its attributes without touching
    /// adjacency order.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, attrs: EdgeAttrs) -> Result<()> {
        for id in [u, v] {
            if !self.contains(id) {
                return Err(RouteError::UnknownNode(id));
            }
        }
        if u == v {
            return Err(RouteError::InvalidAttribute(format!(
                "self loop on node {u}"
            )));
        }
        if !(attrs.bandwidth_mbps > 0.0) || !attrs.bandwidth_mbps.is_finite() {
            return Err(RouteError::InvalidAttribute(format!(
                "bandwidth_mbps must be positive, got {}",
                attrs.bandwidth_mbps
            )));
        }
        if !(attrs.link_delay_ms >= 0.0) || !attrs.link_delay_ms.is_finite() {
            return Err(RouteError::InvalidAttribute(format!(
                "link_delay_ms must be non-negative, got {}",
                attrs.link_delay_ms
            )));
        }
        check_reliability("link_reliability", attrs.link_reliability)?;

        if self.edges.insert(edge_key(u, v), attrs).is_none() {
            self.adjacency[u].push(v);
            self.adjacency[v].push(u);
        }
        Ok(())
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        0..self.nodes.len()
    }

    /// Iterates over edges as `(u, v, attrs)` with `u < v`, in adjacency order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, &EdgeAttrs)> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(u, adj)| {
            adj.iter()
                .copied()
                .filter(move |&v| u < v)
                .filter_map(move |v| self.edges.get(&(u, v)).map(|e| (u, v, e)))
        })
    }
}

impl Topology for Network {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, id: NodeId) -> Option<&NodeAttrs> {
        self.nodes.get(id)
    }

    fn edge(&self, u: NodeId, v: NodeId) -> Option<&EdgeAttrs> {
        self.edges.get(&edge_key(u, v))
    }

    fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Canonical key of an undirected edge.
pub(crate) fn edge_key(u: NodeId, v: NodeId) -> (NodeId, NodeId) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

fn check_reliability(name: &str, value: f64) -> Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(RouteError::InvalidAttribute(format!(
            "{name} must be in (0, 1], got {value}"
        )))
    }
}
