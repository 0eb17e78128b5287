//! # Level Data
//!
//! Immutable, load-once description of a level as the renderer sees it.
//!
//! - [`StaticContentItem`] and [`BoundingBoxS16`] are parallel arrays
//! - Each [`Room`] owns a contiguous [`StaticRange`] of static content
//! - [`Doorway`]s are undirected edges of the room graph

mod bounds;
mod content;
mod data;
mod rooms;

pub use bounds::{BoundingBoxS16, PortalQuad};
pub use content::{DisplayListHandle, MaterialIndex, StaticContentItem};
pub use data::LevelData;
pub use rooms::{Doorway, Room, StaticRange};

/// Maximum rooms per level (one bit each in the visited mask).
pub const MAX_ROOMS: usize = 64;
