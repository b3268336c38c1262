use std::time::Instant;

use crate::entities::{Container, Item};
use crate::eval::{FitnessBreakdown, PenaltyWeights};
use crate::util::assertions;

/// A complete assignment: the containers with their placed items, together with every item of the instance
/// (placed or not), so unplaced items can be scored as well.
#[derive(Debug, Clone)]
pub struct Solution {
    pub containers: Vec<Container>,
    /// All items, in the order of the instance
    pub items: Vec<Item>,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl Solution {
    pub fn new(containers: Vec<Container>, items: Vec<Item>) -> Self {
        let solution = Solution {
            containers,
            items,
            time_stamp: Instant::now(),
        };
        debug_assert!(assertions::solution_is_consistent(&solution));
        solution
    }

    /// Score of the solution with the default penalty weights, higher is better
    pub fn fitness(&self) -> i64 {
        self.fitness_with(&PenaltyWeights::default())
    }

    pub fn fitness_with(&self, weights: &PenaltyWeights) -> i64 {
        self.fitness_breakdown().score(weights)
    }

    pub fn fitness_breakdown(&self) -> FitnessBreakdown {
        FitnessBreakdown::new(&self.containers, &self.items)
    }

    pub fn n_placed(&self) -> usize {
        self.items.iter().filter(|i| i.is_placed()).count()
    }

    /// Number of containers holding at least one priority item
    pub fn priority_container_count(&self) -> usize {
        self.containers
            .iter()
            .filter(|c| c.holds_priority_item())
            .count()
    }

    /// Ratio of the volume of the placed items to the volume of the containers in use.
    /// 0.0 if nothing is placed.
    pub fn density(&self) -> f32 {
        let (placed, total) = self
            .containers
            .iter()
            .filter(|c| !c.is_empty())
            .fold((0, 0), |(p, t), c| (p + c.placed_volume(), t + c.volume()));
        match total {
            0 => 0.0,
            _ => placed as f32 / total as f32,
        }
    }

    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }
}
