use serde::{Deserialize, Serialize};

use crate::eval::FitnessBreakdown;

/// External representation of an [`Item`](crate::entities::Item).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtItem {
    /// Unique identifier of the item
    pub id: String,
    pub length: u32,
    pub width: u32,
    pub height: u32,
    pub weight: u32,
    /// Economy item if not specified
    #[serde(default)]
    pub priority: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub delay_cost: Option<u32>,
}

/// External representation of a [`Container`](crate::entities::Container).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtContainer {
    /// Unique identifier of the container
    pub id: String,
    pub length: u32,
    pub width: u32,
    pub height: u32,
    pub weight_capacity: u32,
}

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// Containers, in the order in which they are filled
    pub containers: Vec<ExtContainer>,
    pub items: Vec<ExtItem>,
}

/// Outcome of a single item in an [`ExtSolution`]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtPlacement {
    pub item_id: String,
    /// `None` if the item was not placed
    pub container_id: Option<String>,
    /// Origin and far corner `[x0, y0, z0, x1, y1, z1]`, `None` if the item was not placed
    pub position: Option<[u32; 6]>,
}

/// External representation of a [`Solution`](crate::entities::Solution).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Fitness of the solution, higher is better
    pub score: i64,
    pub placed_count: usize,
    /// Number of containers holding at least one priority item
    pub priority_container_count: usize,
    /// One entry per item of the instance, in the same order
    pub placements: Vec<ExtPlacement>,
    /// The unweighted terms making up the score
    pub breakdown: FitnessBreakdown,
    /// Volume of the placed items over the volume of the containers in use
    pub density: f32,
    /// Milliseconds between the reference epoch and the creation of the solution
    pub run_time_ms: u64,
}
