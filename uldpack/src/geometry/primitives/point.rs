use serde::{Deserialize, Serialize};

/// Lattice point inside a container, relative to the container's origin corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point(pub u32, pub u32, pub u32);

impl Point {
    pub const ORIGIN: Point = Point(0, 0, 0);
}
