//! Initial population construction.
//!
//! 1. Draw simple paths in increasing hop count from
//!    [`ShortestSimplePaths`], up to `seed_path_cap`, skipping duplicates.
//! 2. If still short, route through random intermediate nodes with
//!    [`splice_via`] until full or `fill_attempts` runs out.
//! 3. If still short with at least two distinct paths, repeat the distinct
//!    paths in order until the population is full.

use super::config::GaConfig;
use crate::error::{Result, RouteError};
use crate::graph::{shortest_path, NodeId, ShortestSimplePaths, Topology};
use crate::operators::splice_via;
use rand::Rng;
use std::collections::HashSet;

/// Seeded population plus how many of its paths are distinct.
#[derive(Debug, Clone)]
pub(crate) struct SeedPopulation {
    pub paths: Vec<Vec<NodeId>>,
    pub distinct: usize,
}

/// Builds exactly `config.population_size` feasible paths.
///
/// # Errors
///
/// - [`RouteError::UnknownNode`] / [`RouteError::NoPath`] for bad endpoints
/// - [`RouteError::InfeasiblePopulation`] if fewer than 2 distinct simple
///   paths were found
pub(crate) fn initial_population<G: Topology, R: Rng>(
    graph: &G,
    source: NodeId,
    target: NodeId,
    config: &GaConfig,
    rng: &mut R,
) -> Result<SeedPopulation> {
    // Surfaces the typed endpoint failure before any enumeration.
    shortest_path(graph, source, target)?;

    let size = config.population_size;
    let mut paths: Vec<Vec<NodeId>> = Vec::with_capacity(size);
    let mut seen: HashSet<Vec<NodeId>> = HashSet::with_capacity(size);

    for path in ShortestSimplePaths::new(graph, source, target).take(config.seed_path_cap) {
        if seen.insert(path.clone()) {
            paths.push(path);
        }
        if paths.len() >= size {
            break;
        }
    }
    let from_generator = paths.len();

    let n = graph.node_count();
    let mut attempts = 0;
    while paths.len() < size && attempts < config.fill_attempts {
        attempts += 1;
        let via = rng.random_range(0..n);
        if let Ok(path) = splice_via(graph, source, via, target) {
            if seen.insert(path.clone()) {
                paths.push(path);
            }
        }
    }

    let distinct = paths.len();
    if distinct < 2 {
        return Err(RouteError::InfeasiblePopulation {
            found: distinct,
            required: 2,
        });
    }

    if distinct < size {
        tracing::warn!(
            distinct,
            population_size = size,
            "too few distinct paths; repeating seeds to fill population"
        );
        let mut i = 0;
        while paths.len() < size {
            paths.push(paths[i % distinct].clone());
            i += 1;
        }
    }

    tracing::debug!(
        from_generator,
        from_fill = distinct - from_generator,
        fill_attempts = attempts,
        "seeded population"
    );
    Ok(SeedPopulation { paths, distinct })
}
