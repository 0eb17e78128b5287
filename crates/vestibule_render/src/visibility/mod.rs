//! Room visibility through the portal graph.
//!
//! Starting at the camera's room, walk doorways whose portal quad survives
//! frustum culling. The result is a [`RoomMask`] of potentially visible rooms.

use vestibule_core::{LevelData, MAX_ROOMS};

use crate::culling::FrustumCullingInfo;

/// One bit per room, bit `n` set when room `n` was reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RoomMask(pub u64);

impl RoomMask {
    /// No rooms.
    pub const EMPTY: Self = Self(0);

    /// Raw bits.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns true if `room` is in the mask. Rooms past the mask width never are.
    #[inline]
    #[must_use]
    pub const fn contains(self, room: u16) -> bool {
        (room as usize) < MAX_ROOMS && self.0 & (1 << room) != 0
    }

    /// Adds a room. Returns false if it was already present.
    #[inline]
    pub fn insert(&mut self, room: u16) -> bool {
        let bit = 1u64 << room;
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    /// Returns true if no room is set.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of rooms set.
    #[inline]
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Set rooms in ascending order.
    #[must_use]
    pub const fn iter(self) -> RoomIter {
        RoomIter { remaining: self.0 }
    }
}

impl IntoIterator for RoomMask {
    type Item = u16;
    type IntoIter = RoomIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the rooms of a [`RoomMask`].
#[derive(Debug, Clone)]
pub struct RoomIter {
    remaining: u64,
}

impl Iterator for RoomIter {
    type Item = u16;

    #[allow(clippy::cast_possible_truncation)]
    fn next(&mut self) -> Option<u16> {
        if self.remaining == 0 {
            return None;
        }
        let room = self.remaining.trailing_zeros();
        self.remaining &= self.remaining - 1;
        Some(room as u16)
    }
}

/// Collects every room reachable from `start_room` through unculled portals.
///
/// Depth-first with a fixed stack. A room is marked the moment it is
/// discovered, so it is pushed at most once and cyclic graphs terminate; the
/// stack therefore never holds more than [`MAX_ROOMS`] entries.
///
/// An out-of-range `start_room` yields an empty mask.
#[must_use]
pub fn determine_visible_rooms(
    level: &LevelData,
    culling: &FrustumCullingInfo,
    start_room: u16,
) -> RoomMask {
    let mut visited = RoomMask::EMPTY;
    if usize::from(start_room) >= level.room_count() {
        return visited;
    }

    let rooms = level.rooms();
    let doorways = level.doorways();

    let mut stack = [0u16; MAX_ROOMS];
    let mut depth = 0;

    visited.insert(start_room);
    stack[depth] = start_room;
    depth += 1;

    while depth > 0 {
        depth -= 1;
        let current = stack[depth];

        for &doorway_index in &rooms[usize::from(current)].doorways {
            let doorway = &doorways[usize::from(doorway_index)];

            if culling.is_quad_outside(&doorway.quad) {
                continue;
            }

            let next = doorway.other_side(current);
            if visited.insert(next) {
                stack[depth] = next;
                depth += 1;
            }
        }
    }

    visited
}

#[cfg(test)]
mod tests {
    use super::*;
    use vestibule_core::{Doorway, PortalQuad, Room, StaticRange};

    use crate::culling::Plane;

    /// Keeps everything with `z >= 0`.
    fn forward_frustum() -> FrustumCullingInfo {
        FrustumCullingInfo::new([0.0; 3], &[Plane::new([0.0, 0.0, 1.0], 0.0)])
    }

    fn quad_at_z(z: f32) -> PortalQuad {
        PortalQuad::axis_aligned(2, z, [-1.0, -1.0], [1.0, 1.0])
    }

    fn level(rooms: usize, doorways: Vec<Doorway>) -> LevelData {
        let mut room_list = vec![Room::default(); rooms];
        for (index, door) in doorways.iter().enumerate() {
            let index = u16::try_from(index).unwrap();
            room_list[usize::from(door.room_a)].doorways.push(index);
            room_list[usize::from(door.room_b)].doorways.push(index);
        }
        LevelData::new(
            vec![],
            vec![],
            vec![StaticRange::default(); rooms],
            room_list,
            doorways,
        )
        .unwrap()
    }

    #[test]
    fn test_mask_basics() {
        let mut mask = RoomMask::EMPTY;
        assert!(mask.is_empty());
        assert!(mask.insert(3));
        assert!(!mask.insert(3));
        assert!(mask.insert(63));
        assert!(mask.contains(3));
        assert!(mask.contains(63));
        assert!(!mask.contains(4));
        assert!(!mask.contains(64));
        assert_eq!(mask.count(), 2);
        assert_eq!(mask.bits(), (1 << 3) | (1 << 63));
        assert_eq!(mask.iter().collect::<Vec<_>>(), vec![3, 63]);
    }

    #[test]
    fn test_culled_portal_blocks_traversal() {
        let level = level(
            3,
            vec![
                Doorway::new(0, 1, quad_at_z(5.0)),
                Doorway::new(1, 2, quad_at_z(-5.0)),
            ],
        );
        let mask = determine_visible_rooms(&level, &forward_frustum(), 0);
        assert_eq!(mask.iter().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_cycle_terminates() {
        let level = level(
            4,
            vec![
                Doorway::new(0, 1, quad_at_z(1.0)),
                Doorway::new(1, 2, quad_at_z(1.0)),
                Doorway::new(2, 3, quad_at_z(1.0)),
                Doorway::new(3, 0, quad_at_z(1.0)),
                Doorway::new(2, 0, quad_at_z(1.0)),
            ],
        );
        let mask = determine_visible_rooms(&level, &forward_frustum(), 2);
        assert_eq!(mask, RoomMask(0b1111));
    }

    #[test]
    fn test_start_room_always_visible() {
        let level = level(2, vec![Doorway::new(0, 1, quad_at_z(-1.0))]);
        let mask = determine_visible_rooms(&level, &forward_frustum(), 1);
        assert_eq!(mask, RoomMask(0b10));
    }

    #[test]
    fn test_invalid_start_room() {
        let level = level(2, vec![]);
        assert!(determine_visible_rooms(&level, &forward_frustum(), 9).is_empty());
    }

    #[test]
    fn test_doorway_back_into_same_room() {
        let level = level(1, vec![Doorway::new(0, 0, quad_at_z(1.0))]);
        assert_eq!(determine_visible_rooms(&level, &forward_frustum(), 0), RoomMask(1));
    }
}
