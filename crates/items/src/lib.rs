//! Item domain module.
//!
//! Pure domain types and validation for tracked possessions (no IO, no
//! storage): the `Item` record, the fixed `Category` and `Disposition`
//! sets, and the form-draft rules for creating an item.

pub mod category;
pub mod disposition;
pub mod item;

pub use category::Category;
pub use disposition::Disposition;
pub use item::{Item, ItemDraft};
