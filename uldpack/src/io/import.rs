use anyhow::{Context, Result, ensure};

use crate::entities::{Container, Instance, Item};
use crate::io::ext_repr::{ExtContainer, ExtInstance, ExtItem};

/// Imports an instance into the library
pub fn import(ext_instance: &ExtInstance) -> Result<Instance> {
    let containers = ext_instance
        .containers
        .iter()
        .map(import_container)
        .collect::<Result<Vec<Container>>>()?;

    let items = ext_instance
        .items
        .iter()
        .map(import_item)
        .collect::<Result<Vec<Item>>>()?;

    Instance::new(containers, items)
        .with_context(|| format!("invalid instance: {}", ext_instance.name))
}

pub fn import_item(ext_item: &ExtItem) -> Result<Item> {
    let ExtItem {
        id,
        length,
        width,
        height,
        weight,
        priority,
        delay_cost,
    } = ext_item;
    ensure!(
        *length > 0 && *width > 0 && *height > 0,
        "item {id} has non-positive extents: {length}x{width}x{height}"
    );
    Ok(Item::new(
        id.as_str(),
        *length,
        *width,
        *height,
        *weight,
        *priority,
        *delay_cost,
    ))
}

pub fn import_container(ext_container: &ExtContainer) -> Result<Container> {
    let ExtContainer {
        id,
        length,
        width,
        height,
        weight_capacity,
    } = ext_container;
    ensure!(
        *length > 0 && *width > 0 && *height > 0,
        "container {id} has non-positive extents: {length}x{width}x{height}"
    );
    Ok(Container::new(
        id.as_str(),
        *length,
        *width,
        *height,
        *weight_capacity,
    ))
}
