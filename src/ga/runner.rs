//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → elite selection → crossover → mutation → repeat.

use super::config::GaConfig;
use super::population::initial_population;
use super::types::Candidate;
use crate::cost::{combined_cost, CostWeights};
use crate::error::{Result, RouteError};
use crate::graph::{NodeId, Topology};
use crate::operators::{crossover, mutate};
use crate::random::create_rng;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best path found during the entire run.
    pub best_path: Vec<NodeId>,

    /// Combined cost of `best_path`.
    pub best_cost: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best-so-far cost after each generation. Non-increasing.
    pub cost_history: Vec<f64>,

    /// Distinct feasible paths in the seeded population.
    pub seed_paths: usize,

    /// Offspring that fell back to a parent copy because crossover declined.
    pub crossover_fallbacks: usize,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&network, source, target, &config)?;
/// println!("best cost: {}", result.best_cost);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA from `source` to `target`.
    ///
    /// The random stream is seeded once, here, and drives population fill,
    /// parent draws, pivots, fallbacks and mutation in that order.
    ///
    /// # Errors
    ///
    /// - [`RouteError::InvalidConfig`] if `config` fails validation
    /// - [`RouteError::UnknownNode`] / [`RouteError::NoPath`] for bad endpoints
    /// - [`RouteError::InfeasiblePopulation`] if fewer than 2 distinct seed
    ///   paths exist
    pub fn run<G: Topology>(
        graph: &G,
        source: NodeId,
        target: NodeId,
        config: &GaConfig,
    ) -> Result<GaResult> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        // 1. Initialize population
        let seeds = initial_population(graph, source, target, config, &mut rng)?;
        let mut population: Vec<Candidate> =
            seeds.paths.into_iter().map(Candidate::new).collect();

        let mut best: Option<Candidate> = None;
        let mut cost_history = Vec::with_capacity(config.generations);
        let mut crossover_fallbacks = 0usize;

        // 2. Evolutionary loop
        for gen in 0..config.generations {
            // Evaluate (elites already carry their cost)
            evaluate_population(graph, &mut population, &config.weights, config.parallel);

            // Rank; stable, so ties keep population order
            population.sort_by(|a, b| {
                a.rank_cost()
                    .partial_cmp(&b.rank_cost())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            population.truncate(config.elite_count);
            let elites = population;

            // Update running best
            let gen_best = &elites[0];
            if best
                .as_ref()
                .is_none_or(|b| gen_best.rank_cost() < b.rank_cost())
            {
                best = Some(gen_best.clone());
            }
            let best_cost = best.as_ref().map_or(f64::INFINITY, Candidate::rank_cost);
            cost_history.push(best_cost);

            tracing::debug!(
                generation = gen + 1,
                best_cost,
                elite_worst = elites[elites.len() - 1].rank_cost(),
                "ga generation"
            );

            // Reproduce: elites unchanged, then offspring from elite pairs
            let mut next_gen = elites.clone();
            while next_gen.len() < config.population_size {
                let (i, j) = distinct_pair(elites.len(), &mut rng);
                let (p1, p2) = (&elites[i].path, &elites[j].path);

                let child = match crossover(p1, p2, source, target, &mut rng) {
                    Ok(child) => child,
                    Err(_) => {
                        crossover_fallbacks += 1;
                        if rng.random_bool(0.5) {
                            p1.clone()
                        } else {
                            p2.clone()
                        }
                    }
                };

                let child = mutate(graph, &child, config.mutation_rate, &mut rng);
                next_gen.push(Candidate::new(child));
            }

            population = next_gen;
        }

        let best = best.ok_or_else(|| {
            RouteError::InvalidConfig("generations must be at least 1".into())
        })?;
        let best_cost = best.rank_cost();

        tracing::info!(
            source,
            target,
            best_cost,
            hops = best.path.len().saturating_sub(1),
            crossover_fallbacks,
            "ga finished"
        );

        Ok(GaResult {
            best_path: best.path,
            best_cost,
            generations: config.generations,
            cost_history,
            seed_paths: seeds.distinct,
            crossover_fallbacks,
        })
    }
}

/// Evaluate every candidate that has no cost yet.
#[cfg(feature = "parallel")]
fn evaluate_population<G: Topology>(
    graph: &G,
    population: &mut [Candidate],
    weights: &CostWeights,
    parallel: bool,
) {
    if parallel {
        population
            .par_iter_mut()
            .filter(|c| c.cost.is_none())
            .for_each(|c| c.cost = Some(combined_cost(graph, &c.path, weights)));
    } else {
        evaluate_sequential(graph, population, weights);
    }
}

/// Evaluate every candidate that has no cost yet.
#[cfg(not(feature = "parallel"))]
fn evaluate_population<G: Topology>(
    graph: &G,
    population: &mut [Candidate],
    weights: &CostWeights,
    _parallel: bool,
) {
    evaluate_sequential(graph, population, weights);
}

fn evaluate_sequential<G: Topology>(graph: &G, population: &mut [Candidate], weights: &CostWeights) {
    for c in population.iter_mut().filter(|c| c.cost.is_none()) {
        c.cost = Some(combined_cost(graph, &c.path, weights));
    }
}

/// Two distinct indices drawn uniformly from `0..n` (`n >= 2`).
fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    (i, j)
}

// ============================================================================
// Tests
// ============================================================================
