//! Lazy enumeration of simple paths in non-decreasing hop count.
//!
//! Yen's algorithm over unweighted BFS: after each accepted path, every
//! prefix ("root") spawns a spur search that avoids the root's nodes and the
//! edges already used by accepted paths sharing that root. Candidates are
//! kept in a min-heap keyed by hop count, then by discovery order.

use super::search::bfs_avoiding;
use super::types::{edge_key, NodeId, Topology};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

/// Iterator over the simple paths between two nodes, shortest first.
///
/// Yields nothing if either endpoint is unknown or they are disconnected.
///
/// # Examples
///
/// ```
/// use qos_route::graph::{EdgeAttrs, Network, NodeAttrs, ShortestSimplePaths};
///
/// let mut net = Network::new();
/// for _ in 0..4 {
///     net.add_node(NodeAttrs::new(1.0, 0.99)).unwrap();
/// }
/// for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
///     net.add_edge(u, v, EdgeAttrs::new(100.0, 2.0, 0.99)).unwrap();
/// }
/// let paths: Vec<_> = ShortestSimplePaths::new(&net, 0, 2).collect();
/// assert_eq!(paths.len(), 2);
/// ```
pub struct ShortestSimplePaths<'a, G: Topology> {
    graph: &'a G,
    source: NodeId,
    target: NodeId,
    accepted: Vec<Vec<NodeId>>,
    candidates: BinaryHeap<Reverse<(usize, usize, Vec<NodeId>)>>,
    seen: HashSet<Vec<NodeId>>,
    discovered: usize,
    started: bool,
}

impl<'a, G: Topology> ShortestSimplePaths<'a, G> {
    pub fn new(graph: &'a G, source: NodeId, target: NodeId) -> Self {
        Self {
            graph,
            source,
            target,
            accepted: Vec::new(),
            candidates: BinaryHeap::new(),
            seen: HashSet::new(),
            discovered: 0,
            started: false,
        }
    }

    /// Pushes spur deviations of the most recently accepted path.
    fn expand_last(&mut self) {
        let Some(last) = self.accepted.last() else {
            return;
        };
        let last = last.clone();

        for i in 0..last.len().saturating_sub(1) {
            let spur = last[i];
            let root = &last[..=i];

            let blocked_edges: HashSet<(NodeId, NodeId)> = self
                .accepted
                .iter()
                .filter(|p| p.len() > i + 1 && &p[..=i] == root)
                .map(|p| edge_key(p[i], p[i + 1]))
                .collect();
            let blocked_nodes: HashSet<NodeId> = root[..i].iter().copied().collect();

            if let Some(tail) =
                bfs_avoiding(self.graph, spur, self.target, &blocked_nodes, &blocked_edges)
            {
                let mut path = root[..i].to_vec();
                path.extend(tail);
                if self.seen.insert(path.clone()) {
                    self.discovered += 1;
                    self.candidates
                        .push(Reverse((path.len(), self.discovered, path)));
                }
            }
        }
    }
}

impl<G: Topology> Iterator for ShortestSimplePaths<'_, G> {
    type Item = Vec<NodeId>;

    fn next(&mut self) -> Option<Vec<NodeId>> {
        if !self.started {
            self.started = true;
            if !self.graph.contains(self.source) || !self.graph.contains(self.target) {
                return None;
            }
            let first = bfs_avoiding(
                self.graph,
                self.source,
                self.target,
                &HashSet::new(),
                &HashSet::new(),
            )?;
            self.seen.insert(first.clone());
            self.accepted.push(first.clone());
            return Some(first);
        }

        self.expand_last();
        let Reverse((_, _, path)) = self.candidates.pop()?;
        self.accepted.push(path.clone());
        Some(path)
    }
}
