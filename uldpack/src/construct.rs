use itertools::Itertools;
use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::entities::{Container, Item, Solution};

/// Builds a single candidate solution from (copies of) the template containers and items.
///
/// The items are visited in a uniformly shuffled order. Containers are filled one after the other,
/// in the order given, each one attempting every item that has not been placed yet. There is no backtracking.
pub fn construct_solution(containers: &[Container], items: &[Item], rng: &mut impl Rng) -> Solution {
    let mut containers = containers.to_vec();
    let mut items = items.to_vec();

    let mut order = (0..items.len()).collect_vec();
    order.shuffle(rng);

    for container in containers.iter_mut() {
        for &i in &order {
            let item = &mut items[i];
            if item.is_placed() {
                continue;
            }
            if !container.try_place(item) {
                trace!("[CONSTR] item {} rejected by container {}", item.id, container.id);
            }
        }
        debug!(
            "[CONSTR] container {} holds {} items ({}/{} kg, density {:.3})",
            container.id,
            container.placed_items().len(),
            container.total_weight(),
            container.weight_capacity,
            container.density()
        );
    }

    Solution::new(containers, items)
}

/// Generates `count` independent candidate solutions, one after the other.
/// The templates are left untouched, every candidate works on its own copies.
pub fn generate_candidates(
    containers: &[Container],
    items: &[Item],
    count: usize,
    rng: &mut impl Rng,
) -> Vec<Solution> {
    (0..count)
        .map(|_| construct_solution(containers, items, rng))
        .collect_vec()
}

/// Generates `count` independent candidate solutions in parallel.
///
/// A seed for every candidate is drawn from `rng` up front, so the result only depends on the state of `rng`
/// and not on how the candidates are scheduled. It differs from the output of [`generate_candidates`] for the same `rng`.
#[cfg(feature = "parallel")]
pub fn par_generate_candidates(
    containers: &[Container],
    items: &[Item],
    count: usize,
    rng: &mut impl Rng,
) -> Vec<Solution> {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rayon::prelude::*;

    let seeds = (0..count).map(|_| rng.random::<u64>()).collect_vec();
    seeds
        .into_par_iter()
        .map(|seed| construct_solution(containers, items, &mut SmallRng::seed_from_u64(seed)))
        .collect()
}
