use crate::entities::{Container, Item, PlacedItem};

/// Checks whether a placed item is stable with respect to the contents of `container`.
/// It is not if any item in the container sits strictly lower while being strictly lighter,
/// i.e. the subject is a heavier item resting above a lighter one.
/// Items that are not placed are trivially stable.
pub fn is_stable(item: &Item, container: &Container) -> bool {
    match item.placement() {
        None => true,
        Some(p) => load_is_supported(p.cuboid.z_min, item.weight, container),
    }
}

/// Same as [`is_stable`] for the container-side record of a placement
pub fn is_placed_item_stable(placed_item: &PlacedItem, container: &Container) -> bool {
    load_is_supported(placed_item.cuboid.z_min, placed_item.weight, container)
}

fn load_is_supported(z_min: u32, weight: u32, container: &Container) -> bool {
    !container
        .placed_items()
        .iter()
        .any(|other| z_min > other.cuboid.z_min && weight > other.weight)
}
