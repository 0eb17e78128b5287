//! # Level Error Types
//!
//! Everything that can be wrong with level data before it reaches the renderer.

use thiserror::Error;

/// Structural problems detected while building a [`LevelData`](crate::LevelData).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// The visited-rooms mask is 64 bits wide.
    #[error("too many rooms: {count} (limit {limit})")]
    TooManyRooms {
        /// Rooms in the level.
        count: usize,
        /// Maximum supported.
        limit: usize,
    },

    /// A static item references a material the sort key cannot encode.
    #[error("static item {item} uses material {material}, limit is {limit}")]
    MaterialOutOfRange {
        /// Static content index.
        item: usize,
        /// Offending material index.
        material: u16,
        /// Largest encodable material index.
        limit: u16,
    },

    /// Bounding boxes must be parallel to static content.
    #[error("{boxes} bounding boxes for {items} static items")]
    BoundingBoxCountMismatch {
        /// Static content count.
        items: usize,
        /// Bounding box count.
        boxes: usize,
    },

    /// Every room needs exactly one static range.
    #[error("{ranges} static ranges for {rooms} rooms")]
    RoomRangeCountMismatch {
        /// Room count.
        rooms: usize,
        /// Range count.
        ranges: usize,
    },

    /// A room's static range is inverted or runs past the static content.
    #[error("room {room} static range {min}..{max} out of bounds (static count {count})")]
    StaticRangeOutOfBounds {
        /// Room index.
        room: usize,
        /// Range start.
        min: u16,
        /// Range end (exclusive).
        max: u16,
        /// Static content count.
        count: usize,
    },

    /// Two rooms claim the same static items.
    #[error("rooms {first} and {second} have overlapping static ranges")]
    OverlappingStaticRanges {
        /// First room.
        first: usize,
        /// Second room.
        second: usize,
    },

    /// A doorway connects to a room that does not exist.
    #[error("doorway {doorway} references room {room}, level has {count} rooms")]
    InvalidDoorwayRoom {
        /// Doorway index.
        doorway: usize,
        /// Offending room index.
        room: u16,
        /// Room count.
        count: usize,
    },

    /// A room lists a doorway that does not exist.
    #[error("room {room} references doorway {doorway}, level has {count} doorways")]
    InvalidDoorwayIndex {
        /// Room index.
        room: usize,
        /// Offending doorway index.
        doorway: u16,
        /// Doorway count.
        count: usize,
    },

    /// Static and dynamic objects share a 16-bit index space.
    #[error("{static_count} static + {dynamic_count} dynamic objects exceed the index space ({limit})")]
    CapacityOverflow {
        /// Static content count.
        static_count: usize,
        /// Reserved dynamic slots.
        dynamic_count: usize,
        /// Maximum addressable objects.
        limit: usize,
    },
}

/// Result type for level operations.
pub type LevelResult<T> = Result<T, LevelError>;
