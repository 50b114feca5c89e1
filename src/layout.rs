//! Where things were drawn, so mouse clicks can find their button
//!
//! Rendering fills a `LayoutRegions` each frame; `region_at()` maps a click
//! back to a display or a keypad button.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
