//! Shortest-path and connectivity queries.
//!
//! Every path query returns a typed failure instead of an empty path:
//! [`RouteError::NoPath`] when the endpoints are disconnected and
//! [`RouteError::UnknownNode`] when an endpoint does not exist.

use super::types::{edge_key, EdgeAttrs, NodeId, Topology};
use crate::error::{Result, RouteError};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};

/// Unweighted shortest path (fewest hops) from `source` to `target`.
///
/// Ties are broken by neighbor order, so the result is deterministic for a
/// given graph. `source == target` yields `[source]`.
pub fn shortest_path<G: Topology>(graph: &G, source: NodeId, target: NodeId) -> Result<Vec<NodeId>> {
    check_endpoints(graph, source, target)?;
    bfs_avoiding(graph, source, target, &HashSet::new(), &HashSet::new())
        .ok_or(RouteError::NoPath {
            from: source,
            to: target,
        })
}

/// Returns `true` if `target` is reachable from `source`.
///
/// Unknown nodes are unreachable.
pub fn has_path<G: Topology>(graph: &G, source: NodeId, target: NodeId) -> bool {
    graph.contains(source)
        && graph.contains(target)
        && bfs_avoiding(graph, source, target, &HashSet::new(), &HashSet::new()).is_some()
}

/// Label-setting shortest path under a caller-supplied edge weight.
///
/// `weight(u, v, attrs)` must be non-negative. Among equal-cost labels the
/// one settled first wins.
pub fn dijkstra_path<G, F>(graph: &G, source: NodeId, target: NodeId, weight: F) -> Result<Vec<NodeId>>
where
    G: Topology,
    F: Fn(NodeId, NodeId, &EdgeAttrs) -> f64,
{
    check_endpoints(graph, source, target)?;

    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<NodeId>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();
    let mut seq = 0usize;

    dist[source] = 0.0;
    heap.push(Label {
        cost: 0.0,
        seq,
        node: source,
    });

    while let Some(Label { cost, node, .. }) = heap.pop() {
        if settled[node] {
            continue;
        }
        settled[node] = true;
        if node == target {
            break;
        }
        for &next in graph.neighbors(node) {
            if settled[next] {
                continue;
            }
            let Some(attrs) = graph.edge(node, next) else {
                continue;
            };
            let candidate = cost + weight(node, next, attrs);
            if candidate < dist[next] {
                dist[next] = candidate;
                prev[next] = Some(node);
                seq += 1;
                heap.push(Label {
                    cost: candidate,
                    seq,
                    node: next,
                });
            }
        }
    }

    if !settled[target] {
        return Err(RouteError::NoPath {
            from: source,
            to: target,
        });
    }
    Ok(backtrack(&prev, source, target))
}

/// Connected components, each sorted ascending, ordered by smallest member.
pub fn connected_components<G: Topology>(graph: &G) -> Vec<Vec<NodeId>> {
    let n = graph.node_count();
    let mut seen = vec![false; n];
    let mut components = Vec::new();

    for start in 0..n {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut component = vec![start];
        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            for &next in graph.neighbors(node) {
                if !seen[next] {
                    seen[next] = true;
                    component.push(next);
                    queue.push_back(next);
                }
            }
        }
        component.sort_unstable();
        components.push(component);
    }
    components
}

/// BFS that never enters `blocked_nodes` and never crosses `blocked_edges`
/// (canonical undirected keys). Used directly by simple-path enumeration.
pub(crate) fn bfs_avoiding<G: Topology>(
    graph: &G,
    source: NodeId,
    target: NodeId,
    blocked_nodes: &HashSet<NodeId>,
    blocked_edges: &HashSet<(NodeId, NodeId)>,
) -> Option<Vec<NodeId>> {
    if blocked_nodes.contains(&source) || blocked_nodes.contains(&target) {
        return None;
    }
    if source == target {
        return Some(vec![source]);
    }

    let n = graph.node_count();
    let mut prev: Vec<Option<NodeId>> = vec![None; n];
    let mut seen = vec![false; n];
    seen[source] = true;
    let mut queue = VecDeque::from([source]);

    while let Some(node) = queue.pop_front() {
        for &next in graph.neighbors(node) {
            if seen[next]
                || blocked_nodes.contains(&next)
                || blocked_edges.contains(&edge_key(node, next))
            {
                continue;
            }
            seen[next] = true;
            prev[next] = Some(node);
            if next == target {
                return Some(backtrack(&prev, source, target));
            }
            queue.push_back(next);
        }
    }
    None
}

fn check_endpoints<G: Topology>(graph: &G, source: NodeId, target: NodeId) -> Result<()> {
    for id in [source, target] {
        if !graph.contains(id) {
            return Err(RouteError::UnknownNode(id));
        }
    }
    Ok(())
}

fn backtrack(prev: &[Option<NodeId>], source: NodeId, target: NodeId) -> Vec<NodeId> {
    let mut path = vec![target];
    let mut node = target;
    while node != source {
        match prev[node] {
            Some(p) => {
                path.push(p);
                node = p;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Min-heap entry for Dijkstra; `seq` keeps equal costs in push order.
#[derive(Debug, Clone, Copy)]
struct Label {
    cost: f64,
    seq: usize,
    node: NodeId,
}

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Label {}

impl PartialOrd for Label {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Label {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the cheapest label first.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Network, NodeAttrs};

    /// Path 0-1-2-3 plus a shortcut 0-3 with a slow link.
    fn diamond() -> Network {
        let mut net = Network::new();
        for _ in 0..4 {
            net.add_node(NodeAttrs::new(1.0, 0.99)).unwrap();
        }
        net.add_edge(0, 1, EdgeAttrs::new(100.0, 1.0, 0.99)).unwrap();
        net.add_edge(1, 2, EdgeAttrs::new(100.0, 1.0, 0.99)).unwrap();
        net.add_edge(2, 3, EdgeAttrs::new(100.0, 1.0, 0.99)).unwrap();
        net.add_edge(0, 3, EdgeAttrs::new(100.0, 50.0, 0.99)).unwrap();
        net
    }

    #[test]
    fn test_bfs_fewest_hops() {
        let net = diamond();
        assert_eq!(shortest_path(&net, 0, 3).unwrap(), vec![0, 3]);
        assert_eq!(shortest_path(&net, 1, 3).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_same_endpoint() {
        let net = diamond();
        assert_eq!(shortest_path(&net, 2, 2).unwrap(), vec![2]);
    }

    #[test]
    fn test_dijkstra_prefers_low_weight() {
        let net = diamond();
        let path = dijkstra_path(&net, 0, 3, |_, _, e| e.link_delay_ms).unwrap();
        assert_eq!(path, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_no_path_is_typed() {
        let mut net = diamond();
        let lonely = net.add_node(NodeAttrs::new(1.0, 0.99)).unwrap();
        assert!(matches!(
            shortest_path(&net, 0, lonely),
            Err(RouteError::NoPath { from: 0, to }) if to == lonely
        ));
        assert!(matches!(
            dijkstra_path(&net, 0, lonely, |_, _, _| 1.0),
            Err(RouteError::NoPath { .. })
        ));
        assert!(!has_path(&net, 0, lonely));
        assert!(has_path(&net, 0, 2));
    }

    #[test]
    fn test_unknown_node() {
        let net = diamond();
        assert!(matches!(
            shortest_path(&net, 0, 42),
            Err(RouteError::UnknownNode(42))
        ));
        assert!(!has_path(&net, 42, 0));
    }

    #[test]
    fn test_components() {
        let mut net = diamond();
        net.add_node(NodeAttrs::new(1.0, 0.99)).unwrap();
        net.add_node(NodeAttrs::new(1.0, 0.99)).unwrap();
        net.add_edge(4, 5, EdgeAttrs::new(10.0, 1.0, 0.9)).unwrap();
        assert_eq!(
            connected_components(&net),
            vec![vec![0, 1, 2, 3], vec![4, 5]]
        );
    }

    #[test]
    fn test_bfs_avoiding_blocked_edge() {
        let net = diamond();
        let blocked: HashSet<_> = [edge_key(3, 0)].into_iter().collect();
        let path = bfs_avoiding(&net, 0, 3, &HashSet::new(), &blocked).unwrap();
        assert_eq!(path, vec![0, 1, 2, 3]);
    }
}
