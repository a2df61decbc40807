pub mod arc;
pub mod graph;
pub mod item;
pub mod wantlist;

pub use arc::Arc;
pub use graph::ItemGraph;
pub use item::{Item, ItemId};
pub use wantlist::Wantlist;
