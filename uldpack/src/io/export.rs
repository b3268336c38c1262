use std::time::Instant;

use itertools::Itertools;

use crate::entities::{Item, Solution};
use crate::eval::PenaltyWeights;
use crate::io::ext_repr::{ExtPlacement, ExtSolution};

/// Exports a solution out of the library, scored with `weights`.
/// `epoch` is the reference point for the reported run time.
pub fn export(solution: &Solution, weights: &PenaltyWeights, epoch: Instant) -> ExtSolution {
    let breakdown = solution.fitness_breakdown();
    ExtSolution {
        score: breakdown.score(weights),
        placed_count: solution.n_placed(),
        priority_container_count: breakdown.n_priority_containers,
        placements: solution.items.iter().map(export_item).collect_vec(),
        breakdown,
        density: solution.density(),
        run_time_ms: solution
            .time_stamp
            .saturating_duration_since(epoch)
            .as_millis() as u64,
    }
}

pub fn export_item(item: &Item) -> ExtPlacement {
    ExtPlacement {
        item_id: item.id.clone(),
        container_id: item.container_id().map(String::from),
        position: item.position(),
    }
}
