//! Data models.

mod item;

pub use item::{Item, ItemId, ItemStatus};
