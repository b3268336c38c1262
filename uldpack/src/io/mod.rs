/// External (serializable) representations of instances and solutions
pub mod ext_repr;

mod export;
mod import;

#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use export::export_item;
#[doc(inline)]
pub use import::import;
#[doc(inline)]
pub use import::import_container;
#[doc(inline)]
pub use import::import_item;
