//! # VESTIBULE Core
//!
//! Level data model for a room-and-portal renderer:
//! - Static content items with their material and precomputed display list
//! - Integer bounding boxes, parallel-indexed to the static content
//! - The room graph (rooms joined by doorways, each with a portal quad)
//!
//! ## Architecture Rules
//!
//! 1. **Validate once** - Structural limits are checked when a level is built,
//!    never in the frame loop
//! 2. **No per-frame allocation** - Working buffers are sized at load time
//! 3. **Read-only level data** - The renderer borrows, never copies
//!
//! ## Example
//!
//! ```rust,ignore
//! use vestibule_core::{LevelData, StaticContentItem, BoundingBoxS16};
//!
//! let level = LevelData::new(content, bounds, ranges, rooms, doorways)?;
//! assert!(level.room_count() <= vestibule_core::MAX_ROOMS);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod level;
pub mod math;
pub mod memory;

pub use error::{LevelError, LevelResult};
pub use level::{
    BoundingBoxS16, DisplayListHandle, Doorway, LevelData, MaterialIndex, PortalQuad, Room,
    StaticContentItem, StaticRange, MAX_ROOMS,
};
pub use memory::FixedBuffer;
