//! Population member representation.

use crate::graph::NodeId;

/// A candidate path in the GA population.
///
/// `cost` is `None` until the path has been evaluated. Elites carry their
/// cost into the next generation so they are never re-evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Simple path from source to target.
    pub path: Vec<NodeId>,
    /// Combined cost, once evaluated.
    pub cost: Option<f64>,
}

impl Candidate {
    /// Wraps an unevaluated path.
    pub fn new(path: Vec<NodeId>) -> Self {
        Self { path, cost: None }
    }

    /// Cost for ranking; unevaluated candidates rank last.
    pub fn rank_cost(&self) -> f64 {
        self.cost.unwrap_or(f64::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unevaluated_ranks_last() {
        let mut c = Candidate::new(vec![0, 1]);
        assert!(c.rank_cost().is_infinite());
        c.cost = Some(3.5);
        assert!((c.rank_cost() - 3.5).abs() < 1e-15);
    }
}
