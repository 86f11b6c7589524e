//! Feasibility-preserving path operators shared by the GA and SA.
//!
//! Every operator either returns a simple path from the input's source to
//! the input's target whose consecutive nodes are all adjacent, or reports
//! a [`Declined`] reason. Declines are never errors: the optimizers absorb
//! them by keeping the input (mutation) or copying a parent (crossover).
//!
//! # Operators
//!
//! - [`try_mutate`] / [`mutate`]: cut at a random interior node and regrow
//!   the tail with an unweighted shortest path
//! - [`crossover`]: splice two parents at a shared interior pivot node
//! - [`splice_via`]: route through an intermediate node (population fill)
//!
//! The regrown tail is unweighted (fewest hops) while selection is
//! cost-based. GA and SA share this neighborhood.

use crate::graph::{shortest_path, NodeId, Topology};
use rand::Rng;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Reason an operator did not produce a new path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Declined {
    /// The mutation-rate gate did not fire.
    #[error("mutation gate closed")]
    GateClosed,
    /// The path has no interior node to cut at.
    #[error("path too short to mutate")]
    TooShort,
    /// No path exists from the cut (or via) node to the target.
    #[error("no path to regrow the tail")]
    NoTail,
    /// The spliced sequence repeats a node.
    #[error("spliced path contains a cycle")]
    Cycle,
    /// The parents share no interior node.
    #[error("parents share no interior node")]
    NoCommonNode,
    /// The child does not run from the requested source to the target.
    #[error("child endpoints do not match source and target")]
    EndpointMismatch,
}

/// Checks the three path invariants: correct endpoints, every consecutive
/// pair adjacent, and no repeated node.
pub fn is_simple_path<G: Topology>(graph: &G, path: &[NodeId], source: NodeId, target: NodeId) -> bool {
    path.first() == Some(&source)
        && path.last() == Some(&target)
        && path.iter().all(|&id| graph.contains(id))
        && path.windows(2).all(|w| graph.edge(w[0], w[1]).is_some())
        && !has_repeat(path)
}

/// Mutation that reports why it declined.
///
/// With probability `rate` (clamped to `[0, 1]`), picks an interior index
/// uniformly, keeps the prefix before it, and appends a fresh unweighted
/// shortest path from the cut node to the path's last node.
pub fn try_mutate<G: Topology, R: Rng>(
    graph: &G,
    path: &[NodeId],
    rate: f64,
    rng: &mut R,
) -> Result<Vec<NodeId>, Declined> {
    if !rng.random_bool(rate.clamp(0.0, 1.0)) {
        return Err(Declined::GateClosed);
    }
    if path.len() <= 2 {
        return Err(Declined::TooShort);
    }

    let cut = rng.random_range(1..path.len() - 1);
    let target = path[path.len() - 1];
    let tail = shortest_path(graph, path[cut], target).map_err(|_| Declined::NoTail)?;

    let mut mutated = path[..cut].to_vec();
    mutated.extend(tail);
    if has_repeat(&mutated) {
        return Err(Declined::Cycle);
    }
    Ok(mutated)
}

/// Mutation as the optimizers use it: any decline returns the input unchanged.
pub fn mutate<G: Topology, R: Rng>(graph: &G, path: &[NodeId], rate: f64, rng: &mut R) -> Vec<NodeId> {
    try_mutate(graph, path, rate, rng).unwrap_or_else(|_| path.to_vec())
}

/// Single-pivot crossover.
///
/// Picks a pivot uniformly among interior nodes present in both parents
/// (candidates in `parent1` order) and joins `parent1` up to the pivot with
/// `parent2` from the pivot on. Crossing a path with itself reproduces it.
pub fn crossover<R: Rng>(
    parent1: &[NodeId],
    parent2: &[NodeId],
    source: NodeId,
    target: NodeId,
    rng: &mut R,
) -> Result<Vec<NodeId>, Declined> {
    // Interior node -> its index in parent2.
    let mut index2: HashMap<NodeId, usize> = HashMap::new();
    for (k, &id) in interior(parent2).iter().enumerate() {
        index2.entry(id).or_insert(k + 1);
    }
    let common: Vec<(usize, usize)> = interior(parent1)
        .iter()
        .enumerate()
        .filter_map(|(k, id)| index2.get(id).map(|&i2| (k + 1, i2)))
        .collect();
    if common.is_empty() {
        return Err(Declined::NoCommonNode);
    }

    let (i1, i2) = common[rng.random_range(0..common.len())];
    let mut child = parent1[..i1].to_vec();
    child.extend_from_slice(&parent2[i2..]);

    if child.first() != Some(&source) || child.last() != Some(&target) {
        return Err(Declined::EndpointMismatch);
    }
    if has_repeat(&child) {
        return Err(Declined::Cycle);
    }
    Ok(child)
}

/// Routes `source -> via -> target` by joining two unweighted shortest paths.
pub fn splice_via<G: Topology>(
    graph: &G,
    source: NodeId,
    via: NodeId,
    target: NodeId,
) -> Result<Vec<NodeId>, Declined> {
    let head = shortest_path(graph, source, via).map_err(|_| Declined::NoTail)?;
    let tail = shortest_path(graph, via, target).map_err(|_| Declined::NoTail)?;

    let mut path = head[..head.len() - 1].to_vec();
    path.extend(tail);
    if has_repeat(&path) {
        return Err(Declined::Cycle);
    }
    Ok(path)
}

fn interior(path: &[NodeId]) -> &[NodeId] {
    if path.len() <= 2 {
        &[]
    } else {
        &path[1..path.len() - 1]
    }
}

fn has_repeat(path: &[NodeId]) -> bool {
    let mut seen = HashSet::with_capacity(path.len());
    !path.iter().all(|id| seen.insert(*id))
}
