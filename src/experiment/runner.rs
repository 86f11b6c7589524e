//! Sweep execution.

use super::config::ExperimentConfig;
use super::summary::{Stats, TrialSummary};
use crate::baseline::solve_baseline;
use crate::cost::evaluate_path;
use crate::error::{Result, RouteError};
use crate::ga::GaRunner;
use crate::graph::{has_path, NodeId, Topology};
use crate::random::create_rng;
use crate::sa::SaRunner;
use rand::Rng;
use std::collections::HashSet;
use std::fmt;
use std::time::Instant;

/// The algorithms compared by a sweep, in the order they run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Baseline,
    Genetic,
    Annealing,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Baseline, Algorithm::Genetic, Algorithm::Annealing];

    /// Short label used in CSV output.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Baseline => "baseline",
            Algorithm::Genetic => "ga",
            Algorithm::Annealing => "sa",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A routing request. `sample_id` starts at 1.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Demand {
    pub sample_id: usize,
    pub source: NodeId,
    pub target: NodeId,
    pub bandwidth_mbps: u32,
}

/// Draws `config.sample_count` distinct, connected demands.
///
/// Source and target are distinct nodes drawn uniformly; the bandwidth is
/// uniform over the inclusive demand range. Duplicate triples and
/// disconnected pairs are redrawn.
///
/// # Errors
///
/// [`RouteError::InvalidConfig`] if the graph has fewer than two nodes or
/// enough distinct connected demands cannot be drawn.
pub fn sample_demands<G: Topology, R: Rng>(
    graph: &G,
    config: &ExperimentConfig,
    rng: &mut R,
) -> Result<Vec<Demand>> {
    let n = graph.node_count();
    if n < 2 {
        return Err(RouteError::InvalidConfig(format!(
            "need at least 2 nodes to sample demands, graph has {n}"
        )));
    }

    let max_attempts = config.sample_count.saturating_mul(1000);
    let mut demands = Vec::with_capacity(config.sample_count);
    let mut seen = HashSet::new();
    let mut attempts = 0;

    while demands.len() < config.sample_count {
        if attempts == max_attempts {
            return Err(RouteError::InvalidConfig(format!(
                "drew only {} of {} distinct connected demands",
                demands.len(),
                config.sample_count
            )));
        }
        attempts += 1;

        let source = rng.random_range(0..n);
        let mut target = rng.random_range(0..n - 1);
        if target >= source {
            target += 1;
        }
        let bandwidth = rng.random_range(config.demand_min_mbps..=config.demand_max_mbps);

        if !seen.insert((source, target, bandwidth)) || !has_path(graph, source, target) {
            continue;
        }
        demands.push(Demand {
            sample_id: demands.len() + 1,
            source,
            target,
            bandwidth_mbps: bandwidth,
        });
    }
    Ok(demands)
}

/// Seed of one trial: `seed + repeat + 1000 * sample_id`.
pub fn trial_seed(seed: u64, sample_id: usize, repeat: usize) -> u64 {
    seed.wrapping_add(repeat as u64)
        .wrapping_add(1000u64.wrapping_mul(sample_id as u64))
}

/// Runs every algorithm `config.repeats` times on each sampled demand.
///
/// Rows are ordered by sample, then [`Algorithm::ALL`]. A sample whose pair
/// admits fewer than two simple paths cannot seed a GA population; it is
/// skipped with a warning and contributes no rows. Any other trial error
/// aborts the sweep.
pub fn run_experiment<G: Topology>(graph: &G, config: &ExperimentConfig) -> Result<Vec<TrialSummary>> {
    config.validate()?;

    let mut rng = create_rng(config.seed);
    let demands = sample_demands(graph, config, &mut rng)?;
    tracing::info!(
        samples = demands.len(),
        repeats = config.repeats,
        "starting experiment"
    );

    let mut rows = Vec::with_capacity(demands.len() * Algorithm::ALL.len());
    let mut skipped = 0usize;
    for demand in &demands {
        match run_sample(graph, demand, config) {
            Ok(sample_rows) => rows.extend(sample_rows),
            Err(RouteError::InfeasiblePopulation { found, required }) => {
                skipped += 1;
                tracing::warn!(
                    sample_id = demand.sample_id,
                    source = demand.source,
                    target = demand.target,
                    found,
                    required,
                    "skipping sample: too few simple paths for a GA population"
                );
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(rows = rows.len(), skipped, "experiment finished");
    Ok(rows)
}

/// All algorithms on one demand, in [`Algorithm::ALL`] order.
fn run_sample<G: Topology>(
    graph: &G,
    demand: &Demand,
    config: &ExperimentConfig,
) -> Result<Vec<TrialSummary>> {
    let mut rows = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        let mut costs = Vec::with_capacity(config.repeats);
        let mut delays = Vec::with_capacity(config.repeats);
        let mut reliabilities = Vec::with_capacity(config.repeats);
        let mut resources = Vec::with_capacity(config.repeats);
        let mut lengths = Vec::with_capacity(config.repeats);
        let mut runtimes = Vec::with_capacity(config.repeats);

        for repeat in 0..config.repeats {
            let seed = trial_seed(config.seed, demand.sample_id, repeat);

            let start = Instant::now();
            let path = solve(graph, demand, algorithm, config, seed)?;
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

            let metrics = evaluate_path(graph, &path);
            costs.push(metrics.combined(&config.weights));
            delays.push(metrics.delay);
            reliabilities.push(metrics.reliability_cost);
            resources.push(metrics.resource_cost);
            lengths.push(metrics.length as f64);
            runtimes.push(elapsed_ms);
        }

        let row = TrialSummary {
            demand: *demand,
            algorithm,
            total_cost: Stats::from_samples(&costs),
            delay: Stats::from_samples(&delays),
            reliability_cost: Stats::from_samples(&reliabilities),
            resource_cost: Stats::from_samples(&resources),
            path_length: Stats::from_samples(&lengths),
            runtime_ms: Stats::from_samples(&runtimes),
        };
        tracing::debug!(
            sample_id = demand.sample_id,
            algorithm = algorithm.label(),
            mean_cost = row.total_cost.mean,
            "sample finished"
        );
        rows.push(row);
    }
    Ok(rows)
}

fn solve<G: Topology>(
    graph: &G,
    demand: &Demand,
    algorithm: Algorithm,
    config: &ExperimentConfig,
    seed: u64,
) -> Result<Vec<NodeId>> {
    let (s, t) = (demand.source, demand.target);
    match algorithm {
        Algorithm::Baseline => Ok(solve_baseline(graph, s, t, &config.weights)?.path),
        Algorithm::Genetic => {
            let ga = config.ga.clone().with_weights(config.weights).with_seed(seed);
            Ok(GaRunner::run(graph, s, t, &ga)?.best_path)
        }
        Algorithm::Annealing => {
            let sa = config.sa.clone().with_weights(config.weights).with_seed(seed);
            Ok(SaRunner::run(graph, s, t, &sa)?.best_path)
        }
    }
}
