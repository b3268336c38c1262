use crate::geometry::primitives::{Cuboid, Dims};

/// Cuboid item to be loaded into a [`Container`](crate::entities::Container).
/// Items are never rotated: `dims.length` runs along x, `dims.width` along y and `dims.height` along z.
#[derive(Clone, Debug)]
pub struct Item {
    pub id: String,
    pub dims: Dims,
    pub weight: u32,
    /// Priority items should all end up in the same container
    pub priority: bool,
    /// Cost of not shipping the item, only relevant for economy (non-priority) items
    pub delay_cost: Option<u32>,
    /// Set once by the container that accepts the item
    placement: Option<ItemPlacement>,
}

/// Where an [`Item`] ended up
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemPlacement {
    pub container_id: String,
    pub cuboid: Cuboid,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        length: u32,
        width: u32,
        height: u32,
        weight: u32,
        priority: bool,
        delay_cost: Option<u32>,
    ) -> Item {
        Item {
            id: id.into(),
            dims: Dims::new(length, width, height),
            weight,
            priority,
            delay_cost,
            placement: None,
        }
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    pub fn placement(&self) -> Option<&ItemPlacement> {
        self.placement.as_ref()
    }

    pub fn container_id(&self) -> Option<&str> {
        self.placement.as_ref().map(|p| p.container_id.as_str())
    }

    /// Origin and far corner of the placed item as `[x0, y0, z0, x1, y1, z1]`
    pub fn position(&self) -> Option<[u32; 6]> {
        self.placement.as_ref().map(|p| p.cuboid.corners())
    }

    pub(crate) fn set_placement(&mut self, placement: ItemPlacement) {
        assert!(
            self.placement.is_none(),
            "item {} is already placed in {:?}",
            self.id,
            self.container_id()
        );
        self.placement = Some(placement);
    }
}
