//! Draw ordering: sort keys, per-level buffers, population and sorting.
//!
//! Static and dynamic objects share one index space. Indices below the
//! static count name static content, the rest name dynamic objects.

mod builder;
mod context;
mod sort_key;
mod sorter;

pub use builder::{populate_rooms, static_sort_key, PopulateStats};
pub use context::{DynamicQueue, RenderContext, MAX_OBJECTS};
pub use sort_key::{distance_metric, SortKey, DISTANCE_MASK, MATERIAL_SHIFT};
pub use sorter::sort_render_order;
