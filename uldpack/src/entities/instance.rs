use anyhow::{Result, ensure};
use itertools::Itertools;

use crate::entities::{Container, Item};

/// Instance of the ULD loading problem: a fixed set of containers and the items to load into them.
/// Serves as the template from which candidate solutions are constructed.
#[derive(Debug, Clone)]
pub struct Instance {
    /// Containers, in the order in which they are filled
    pub containers: Vec<Container>,
    pub items: Vec<Item>,
}

impl Instance {
    pub fn new(containers: Vec<Container>, items: Vec<Item>) -> Result<Self> {
        let dup_items = items.iter().map(|i| &i.id).duplicates().collect_vec();
        ensure!(dup_items.is_empty(), "duplicate item ids: {dup_items:?}");

        let dup_containers = containers.iter().map(|c| &c.id).duplicates().collect_vec();
        ensure!(
            dup_containers.is_empty(),
            "duplicate container ids: {dup_containers:?}"
        );
        ensure!(
            containers.iter().all(|c| c.is_empty()) && items.iter().all(|i| !i.is_placed()),
            "an instance cannot contain placed items"
        );

        Ok(Self { containers, items })
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn n_priority_items(&self) -> usize {
        self.items.iter().filter(|i| i.priority).count()
    }

    pub fn total_item_volume(&self) -> u64 {
        self.items.iter().map(|i| i.dims.volume()).sum()
    }

    pub fn total_container_volume(&self) -> u64 {
        self.containers.iter().map(|c| c.volume()).sum()
    }
}
