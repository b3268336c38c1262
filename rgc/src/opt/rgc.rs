use std::cmp::Reverse;
use std::time::Instant;

use itertools::Itertools;
use log::{debug, info};
use rand::prelude::SmallRng;
use thousands::Separable;
use uldpack::construct::{generate_candidates, par_generate_candidates};
use uldpack::entities::{Instance, Solution};

use crate::config::RGCConfig;

/// Builds a population of independent candidate solutions, each one a greedy placement
/// of the items in a random order.
pub struct RGCOptimizer {
    pub instance: Instance,
    pub config: RGCConfig,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
}

/// The candidates constructed by a [`RGCOptimizer`] together with their scores
pub struct Population {
    pub candidates: Vec<Solution>,
    /// Score of every candidate, at the same index
    pub scores: Vec<i64>,
}

impl RGCOptimizer {
    pub fn new(instance: Instance, config: RGCConfig, rng: SmallRng) -> Self {
        debug_assert!(config.validate().is_ok());
        Self {
            instance,
            config,
            rng,
        }
    }

    pub fn solve(&mut self) -> Population {
        let start = Instant::now();
        let Instance { containers, items } = &self.instance;
        let n = self.config.n_candidates;

        info!(
            "[RGC] constructing {} candidates for {} items ({} priority) in {} containers",
            n,
            items.len(),
            self.instance.n_priority_items(),
            containers.len()
        );
        info!(
            "[RGC] item volume is {:.1}% of the total container volume",
            self.instance.total_item_volume() as f64 / self.instance.total_container_volume() as f64
                * 100.0
        );

        let candidates = match self.config.parallel {
            true => par_generate_candidates(containers, items, n, &mut self.rng),
            false => generate_candidates(containers, items, n, &mut self.rng),
        };

        let weights = &self.config.penalty_weights;
        let scores = candidates
            .iter()
            .map(|s| s.fitness_with(weights))
            .collect_vec();

        for (i, (sol, score)) in candidates.iter().zip(scores.iter()).enumerate() {
            debug!(
                "[RGC] candidate {i}: score {score}, {} placed, {:?}",
                sol.n_placed(),
                sol.fitness_breakdown()
            );
        }

        let population = Population { candidates, scores };
        if let Some((min, max)) = population.scores.iter().minmax().into_option() {
            let mean = population.scores.iter().sum::<i64>() as f64 / n as f64;
            info!(
                "[RGC] scores: worst {}, mean {:.1}, best {}",
                min.separate_with_commas(),
                mean,
                max.separate_with_commas()
            );
        }
        info!(
            "[RGC] construction finished in {:.3}ms ({} item placements)",
            start.elapsed().as_secs_f64() * 1000.0,
            population
                .candidates
                .iter()
                .map(|s| s.n_placed())
                .sum::<usize>()
                .separate_with_commas()
        );

        population
    }
}

impl Population {
    /// The first candidate with the highest score
    pub fn best(&self) -> Option<(&Solution, i64)> {
        self.scores
            .iter()
            .enumerate()
            .min_by_key(|(_, score)| Reverse(**score))
            .map(|(i, score)| (&self.candidates[i], *score))
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
