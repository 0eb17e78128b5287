//! The room graph.

use std::ops::Range;

use super::bounds::PortalQuad;

/// Contiguous run of static content owned by one room, `min..max`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticRange {
    /// First static index.
    pub min: u16,
    /// One past the last static index.
    pub max: u16,
}

impl StaticRange {
    /// Creates a range.
    #[must_use]
    pub const fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }

    /// Number of items in the range.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.max.saturating_sub(self.min) as usize
    }

    /// Returns true if the range holds nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.max <= self.min
    }

    /// As an index range.
    #[must_use]
    pub fn as_range(&self) -> Range<usize> {
        usize::from(self.min)..usize::from(self.max)
    }

    /// Returns true if two ranges share at least one index.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty() && !other.is_empty() && self.min < other.max && other.min < self.max
    }
}

/// A room: a node of the portal graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Room {
    /// Indices into the level's doorway list.
    pub doorways: Vec<u16>,
}

impl Room {
    /// Creates a room with the given doorways.
    #[must_use]
    pub fn new(doorways: Vec<u16>) -> Self {
        Self { doorways }
    }
}

/// Undirected edge between two rooms, seen through a portal quad.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Doorway {
    /// One side.
    pub room_a: u16,
    /// The other side.
    pub room_b: u16,
    /// Portal polygon tested against the frustum.
    pub quad: PortalQuad,
}

impl Doorway {
    /// Creates a doorway.
    #[must_use]
    pub const fn new(room_a: u16, room_b: u16, quad: PortalQuad) -> Self {
        Self {
            room_a,
            room_b,
            quad,
        }
    }

    /// The room reached by walking through this doorway from `from`.
    #[inline]
    #[must_use]
    pub const fn other_side(&self, from: u16) -> u16 {
        if from == self.room_a {
            self.room_b
        } else {
            self.room_a
        }
    }
}
