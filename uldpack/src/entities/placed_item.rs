use crate::entities::Item;
use crate::geometry::primitives::Cuboid;

/// Represents an [`Item`] that has been placed in a [`Container`](crate::entities::Container).
/// Refers back to the item through its id, the item itself stays with the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedItem {
    pub item_id: String,
    /// The space occupied by the item inside the container
    pub cuboid: Cuboid,
    pub weight: u32,
    pub priority: bool,
}

impl PlacedItem {
    pub fn new(item: &Item, cuboid: Cuboid) -> Self {
        PlacedItem {
            item_id: item.id.clone(),
            cuboid,
            weight: item.weight,
            priority: item.priority,
        }
    }
}
