//! SA execution loop.

use super::config::SaConfig;
use crate::cost::combined_cost;
use crate::error::Result;
use crate::graph::{shortest_path, NodeId, Topology};
use crate::operators::try_mutate;
use crate::random::create_rng;
use rand::Rng;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best path found.
    pub best_path: Vec<NodeId>,

    /// Combined cost of `best_path`.
    pub best_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature after the last cooling step.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Iterations where the neighbor operator declined and the current
    /// path was proposed again.
    pub declined_moves: usize,

    /// Best cost before the first iteration and after each one.
    pub cost_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA from `source` to `target`.
    ///
    /// Starts from the unweighted shortest path. Each iteration proposes a
    /// neighbor by tail regrowth, accepts it by the Metropolis criterion,
    /// then cools geometrically.
    ///
    /// # Errors
    ///
    /// - [`RouteError::InvalidConfig`](crate::RouteError::InvalidConfig) if
    ///   `config` fails validation
    /// - [`RouteError::UnknownNode`](crate::RouteError::UnknownNode) /
    ///   [`RouteError::NoPath`](crate::RouteError::NoPath) for bad endpoints
    pub fn run<G: Topology>(
        graph: &G,
        source: NodeId,
        target: NodeId,
        config: &SaConfig,
    ) -> Result<SaResult> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        // Initialize
        let mut current = shortest_path(graph, source, target)?;
        let mut current_cost = combined_cost(graph, &current, &config.weights);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut declined_moves = 0usize;

        let mut cost_history = Vec::with_capacity(config.max_iterations + 1);
        cost_history.push(best_cost);

        for iteration in 0..config.max_iterations {
            let neighbor = match try_mutate(graph, &current, 1.0, &mut rng) {
                Ok(path) => path,
                Err(_) => {
                    declined_moves += 1;
                    current.clone()
                }
            };
            let neighbor_cost = combined_cost(graph, &neighbor, &config.weights);
            let delta = neighbor_cost - current_cost;

            // Metropolis acceptance criterion
            let accept = if delta <= 0.0 {
                if delta < 0.0 {
                    improving_moves += 1;
                }
                true
            } else {
                let probability = (-delta / temperature.max(config.temperature_floor)).exp();
                rng.random::<f64>() < probability
            };

            if accept {
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;
            }

            if current_cost < best_cost {
                best = current.clone();
                best_cost = current_cost;
                tracing::debug!(iteration, best_cost, temperature, "sa improved best");
            }

            cost_history.push(best_cost);

            // Cool down
            temperature *= config.alpha;
        }

        tracing::info!(
            source,
            target,
            best_cost,
            hops = best.len().saturating_sub(1),
            accepted_moves,
            final_temperature = temperature,
            "sa finished"
        );

        Ok(SaResult {
            best_path: best,
            best_cost,
            iterations: config.max_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            declined_moves,
            cost_history,
        })
    }
}
