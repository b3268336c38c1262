use log::trace;

use crate::entities::{Item, ItemPlacement, PlacedItem};
use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::{Cuboid, Dims, Point};
use crate::util::assertions;

/// A Unit Load Device (ULD) in which [`Item`]s can be placed.
/// Keeps track of the items placed inside it, in placement order, and their total weight.
#[derive(Clone, Debug)]
pub struct Container {
    pub id: String,
    pub dims: Dims,
    pub weight_capacity: u32,
    placed_items: Vec<PlacedItem>,
    total_weight: u64,
}

impl Container {
    pub fn new(
        id: impl Into<String>,
        length: u32,
        width: u32,
        height: u32,
        weight_capacity: u32,
    ) -> Self {
        Container {
            id: id.into(),
            dims: Dims::new(length, width, height),
            weight_capacity,
            placed_items: vec![],
            total_weight: 0,
        }
    }

    /// Checks whether the item is small and light enough to be loaded, without looking for a position.
    pub fn can_accept(&self, item: &Item) -> bool {
        item.dims.fits_within(&self.dims)
            && self.total_weight + item.weight as u64 <= self.weight_capacity as u64
    }

    /// Searches for the first position at which a cuboid with `dims` fits inside the container
    /// without overlapping any placed item.
    ///
    /// Candidate origins are visited on the integer lattice with x varying slowest and z fastest,
    /// all ascending. Instead of probing every z, the scan jumps directly above the highest item
    /// blocking the current candidate, which yields the same first valid origin as probing them one by one.
    pub fn find_position(&self, dims: Dims) -> Option<Point> {
        if !dims.fits_within(&self.dims) {
            return None;
        }
        if self.placed_items.is_empty() {
            return Some(Point::ORIGIN);
        }

        let x_end = self.dims.length - dims.length;
        let y_end = self.dims.width - dims.width;
        let z_end = self.dims.height - dims.height;

        //items whose footprint overlaps the current (x, y) column
        let mut obstacles: Vec<&Cuboid> = Vec::with_capacity(self.placed_items.len());

        for x in 0..=x_end {
            for y in 0..=y_end {
                let column = Cuboid::new(
                    x,
                    y,
                    0,
                    x + dims.length,
                    y + dims.width,
                    self.dims.height,
                );
                obstacles.clear();
                obstacles.extend(
                    self.placed_items
                        .iter()
                        .map(|pi| &pi.cuboid)
                        .filter(|c| c.footprint_overlaps(&column)),
                );

                let mut z = 0;
                while z <= z_end {
                    let candidate = Cuboid::from_origin(Point(x, y, z), dims);
                    let blocked_until = obstacles
                        .iter()
                        .filter(|o| o.collides_with(&candidate))
                        .map(|o| o.z_max)
                        .max();
                    match blocked_until {
                        None => return Some(Point(x, y, z)),
                        Some(z_max) => z = z_max,
                    }
                }
            }
        }
        None
    }

    /// Places the item at the first valid position, if the container can accept it.
    /// Returns false, leaving both the item and the container untouched, if the item is already
    /// placed, too large or too heavy, or if no valid position exists.
    pub fn try_place(&mut self, item: &mut Item) -> bool {
        if item.is_placed() || !self.can_accept(item) {
            return false;
        }
        match self.find_position(item.dims) {
            Some(origin) => {
                self.place_item_at(item, origin);
                debug_assert!(assertions::container_has_no_overlaps(self));
                true
            }
            None => false,
        }
    }

    /// Places the item with its origin at `origin` and records the placement on both sides.
    /// Neither the weight capacity nor overlap with other items is checked, that is up to the caller.
    pub fn place_item_at(&mut self, item: &mut Item, origin: Point) {
        let Point(x, y, z) = origin;
        let dims = item.dims;
        //checked before building the cuboid, so its far corner cannot overflow
        assert!(
            dims.fits_within(&self.dims)
                && x <= self.dims.length - dims.length
                && y <= self.dims.width - dims.width
                && z <= self.dims.height - dims.height,
            "item {} ({dims}) at {origin:?} does not fit inside container {} ({})",
            item.id,
            self.id,
            self.dims
        );
        let cuboid = Cuboid::from_origin(origin, dims);
        debug_assert!(self.bbox().encloses(&cuboid));

        item.set_placement(ItemPlacement {
            container_id: self.id.clone(),
            cuboid,
        });
        self.placed_items.push(PlacedItem::new(item, cuboid));
        self.total_weight += item.weight as u64;

        trace!(
            "placed item {} at {} in container {} ({}/{} kg)",
            item.id, cuboid, self.id, self.total_weight, self.weight_capacity
        );
        debug_assert!(assertions::container_weight_matches(self));
    }

    /// Items placed in this container, in the order they were placed
    pub fn placed_items(&self) -> &[PlacedItem] {
        &self.placed_items
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Weight above the capacity of the container, 0 if within capacity
    pub fn excess_weight(&self) -> u64 {
        self.total_weight.saturating_sub(self.weight_capacity as u64)
    }

    pub fn is_empty(&self) -> bool {
        self.placed_items.is_empty()
    }

    pub fn holds_priority_item(&self) -> bool {
        self.placed_items.iter().any(|pi| pi.priority)
    }

    /// The interior of the container, in its own frame
    pub fn bbox(&self) -> Cuboid {
        Cuboid::from_origin(Point::ORIGIN, self.dims)
    }

    pub fn volume(&self) -> u64 {
        self.dims.volume()
    }

    pub fn placed_volume(&self) -> u64 {
        self.placed_items.iter().map(|pi| pi.cuboid.volume()).sum()
    }

    /// Ratio of the volume occupied by items to the volume of the container
    pub fn density(&self) -> f32 {
        self.placed_volume() as f32 / self.volume() as f32
    }
}
