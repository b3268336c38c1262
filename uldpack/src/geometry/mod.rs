pub mod geo_traits;
pub mod primitives;

use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Cuboid;

/// Returns true if the interiors of `a` and `b` intersect on all three axes.
/// Cuboids sharing only a face, edge or corner do not overlap.
pub fn overlaps(a: &Cuboid, b: &Cuboid) -> bool {
    a.collides_with(b)
}
