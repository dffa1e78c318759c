//! Gallery embedding surface for the masonry layout engine.
//!
//! The engine itself is pure; this crate owns the state around it: the item
//! list, the responsive column policy, the measured container width, and the
//! cached layout result that is recomputed whenever a declared input
//! changes.

mod breakpoints;
mod item;
mod manifest;
mod metadata;
mod view;

pub use breakpoints::Breakpoints;
pub use item::GalleryItem;
pub use manifest::load_manifest;
pub use metadata::format_price;
pub use view::GalleryView;
