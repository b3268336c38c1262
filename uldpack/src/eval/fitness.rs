use serde::{Deserialize, Serialize};

use crate::entities::{Container, Item};
use crate::eval::is_placed_item_stable;

/// Multipliers applied to each term of the fitness function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyWeights {
    /// Per unit of weight above a container's capacity
    pub weight_excess: i64,
    /// Per placed item that is not stable
    pub instability: i64,
    /// Per economy item left unplaced
    pub unplaced_economy: i64,
    /// Per container holding a priority item, applied only once priority items are spread over more than one container
    pub priority_spread: i64,
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            weight_excess: 10,
            instability: 5,
            unplaced_economy: 50,
            priority_spread: 5000,
        }
    }
}

/// The raw, unweighted terms of the fitness function for a set of containers and items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FitnessBreakdown {
    /// Sum over all containers of the weight above their capacity
    pub excess_weight: u64,
    /// Number of placed items that are not stable within their container
    pub n_unstable: usize,
    /// Number of unplaced economy (non-priority) items
    pub n_unplaced_economy: usize,
    /// Number of containers holding at least one priority item
    pub n_priority_containers: usize,
}

impl FitnessBreakdown {
    pub fn new(containers: &[Container], items: &[Item]) -> Self {
        let excess_weight = containers.iter().map(|c| c.excess_weight()).sum();

        let n_unstable = containers
            .iter()
            .map(|c| {
                c.placed_items()
                    .iter()
                    .filter(|pi| !is_placed_item_stable(pi, c))
                    .count()
            })
            .sum();

        let n_unplaced_economy = items
            .iter()
            .filter(|i| !i.is_placed() && !i.priority)
            .count();

        let n_priority_containers = containers
            .iter()
            .filter(|c| c.holds_priority_item())
            .count();

        FitnessBreakdown {
            excess_weight,
            n_unstable,
            n_unplaced_economy,
            n_priority_containers,
        }
    }

    /// Sum of all weighted penalty terms
    pub fn penalty(&self, weights: &PenaltyWeights) -> i64 {
        let priority_spread = match self.n_priority_containers {
            0 | 1 => 0,
            n => weights.priority_spread * n as i64,
        };
        [
            weights.weight_excess * self.excess_weight as i64,
            weights.instability * self.n_unstable as i64,
            weights.unplaced_economy * self.n_unplaced_economy as i64,
            priority_spread,
        ]
        .iter()
        .sum()
    }

    /// The fitness score: the negated penalty, higher is better
    pub fn score(&self, weights: &PenaltyWeights) -> i64 {
        -self.penalty(weights)
    }
}

/// Scores a (partial) assignment of items to containers with the default [`PenaltyWeights`].
/// Never fails, also not when nothing is placed.
pub fn evaluate_fitness(containers: &[Container], items: &[Item]) -> i64 {
    evaluate_fitness_with(containers, items, &PenaltyWeights::default())
}

pub fn evaluate_fitness_with(
    containers: &[Container],
    items: &[Item],
    weights: &PenaltyWeights,
) -> i64 {
    FitnessBreakdown::new(containers, items).score(weights)
}
