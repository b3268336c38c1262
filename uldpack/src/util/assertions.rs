//! Various checks to verify the correctness of the state of the system.
//! Used in `debug_assert!()` blocks and tests.

use itertools::Itertools;
use log::error;

use crate::entities::{Container, Solution};
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Cuboid, Dims, Point};

pub fn container_weight_matches(container: &Container) -> bool {
    let sum = container
        .placed_items()
        .iter()
        .map(|pi| pi.weight as u64)
        .sum::<u64>();
    if sum != container.total_weight() {
        error!(
            "container {}: running weight {} differs from sum of placed weights {}",
            container.id,
            container.total_weight(),
            sum
        );
        return false;
    }
    true
}

pub fn container_has_no_overlaps(container: &Container) -> bool {
    for (a, b) in container.placed_items().iter().tuple_combinations() {
        if a.cuboid.collides_with(&b.cuboid) {
            error!(
                "container {}: items {} {} and {} {} overlap",
                container.id, a.item_id, a.cuboid, b.item_id, b.cuboid
            );
            return false;
        }
    }
    true
}

pub fn container_encloses_items(container: &Container) -> bool {
    let bbox = container.bbox();
    container
        .placed_items()
        .iter()
        .all(|pi| bbox.encloses(&pi.cuboid))
}

/// Checks that the placement recorded on every item agrees with the records of the containers, and vice versa
pub fn solution_is_consistent(solution: &Solution) -> bool {
    for item in solution.items.iter() {
        if let Some(p) = item.placement() {
            let recorded = solution
                .container(&p.container_id)
                .map(|c| {
                    c.placed_items()
                        .iter()
                        .filter(|pi| pi.item_id == item.id && pi.cuboid == p.cuboid)
                        .count()
                })
                .unwrap_or(0);
            if recorded != 1 {
                error!(
                    "item {} claims to be in container {}, found {recorded} matching records",
                    item.id, p.container_id
                );
                return false;
            }
        }
    }
    let n_records = solution
        .containers
        .iter()
        .map(|c| c.placed_items().len())
        .sum::<usize>();

    n_records == solution.n_placed()
        && solution
            .containers
            .iter()
            .all(|c| container_weight_matches(c) && container_encloses_items(c))
}

/// Reference implementation of the placement search: tests every lattice point, x slowest and z fastest.
/// Much slower than [`Container::find_position`], only meant to validate it.
pub fn lattice_first_fit(container: &Container, dims: Dims) -> Option<Point> {
    if !dims.fits_within(&container.dims) {
        return None;
    }
    if container.is_empty() {
        return Some(Point::ORIGIN);
    }
    let bbox = container.bbox();
    (0..container.dims.length)
        .cartesian_product(0..container.dims.width)
        .cartesian_product(0..container.dims.height)
        .map(|((x, y), z)| Point(x, y, z))
        .find(|&origin| {
            let Point(x, y, z) = origin;
            let fits = x + dims.length <= bbox.x_max
                && y + dims.width <= bbox.y_max
                && z + dims.height <= bbox.z_max;
            fits && {
                let candidate = Cuboid::from_origin(origin, dims);
                container
                    .placed_items()
                    .iter()
                    .all(|pi| !pi.cuboid.collides_with(&candidate))
            }
        })
}
