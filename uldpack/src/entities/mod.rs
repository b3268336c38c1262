mod container;
mod instance;
mod item;
mod placed_item;
mod solution;

#[doc(inline)]
pub use container::Container;

#[doc(inline)]
pub use instance::Instance;

#[doc(inline)]
pub use item::Item;

#[doc(inline)]
pub use item::ItemPlacement;

#[doc(inline)]
pub use placed_item::PlacedItem;

#[doc(inline)]
pub use solution::Solution;
