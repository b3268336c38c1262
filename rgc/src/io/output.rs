use itertools::Itertools;
use serde::{Deserialize, Serialize};
use uldpack::entities::{Item, Solution};
use uldpack::eval::PenaltyWeights;
use uldpack::io::ext_repr::{ExtInstance, ExtSolution};

use crate::config::RGCConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct RGCOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: RGCConfig,
}

/// Renders the plain text report of a solution.
///
/// The first line holds `score,placed_count,priority_container_count`.
/// It is followed by one line per item, in instance order: `id,container_id,x0,y0,z0,x1,y1,z1`,
/// or `id,NONE,-1,-1,-1,-1,-1,-1` for items that were not placed.
pub fn format_report(solution: &Solution, weights: &PenaltyWeights) -> String {
    let summary = format!(
        "{},{},{}",
        solution.fitness_with(weights),
        solution.n_placed(),
        solution.priority_container_count()
    );
    std::iter::once(summary)
        .chain(solution.items.iter().map(format_item_line))
        .join("\n")
}

fn format_item_line(item: &Item) -> String {
    match (item.container_id(), item.position()) {
        (Some(container_id), Some(pos)) => {
            format!("{},{},{}", item.id, container_id, pos.iter().join(","))
        }
        _ => format!("{},NONE,-1,-1,-1,-1,-1,-1", item.id),
    }
}
