//! Validated level data.

use super::bounds::BoundingBoxS16;
use super::content::{MaterialIndex, StaticContentItem};
use super::rooms::{Doorway, Room, StaticRange};
use super::MAX_ROOMS;
use crate::error::{LevelError, LevelResult};

/// All level data the renderer reads, checked once at construction.
///
/// After [`LevelData::new`] succeeds the following hold, and the frame loop
/// indexes without re-checking them:
/// - at most [`MAX_ROOMS`] rooms
/// - one bounding box per static item, one static range per room
/// - static ranges are in bounds and pairwise disjoint
/// - every material is encodable, every doorway/room reference resolves
#[derive(Debug, Clone)]
pub struct LevelData {
    static_content: Vec<StaticContentItem>,
    static_bounding_boxes: Vec<BoundingBoxS16>,
    room_static_ranges: Vec<StaticRange>,
    rooms: Vec<Room>,
    doorways: Vec<Doorway>,
}

impl LevelData {
    /// Builds and validates level data.
    ///
    /// # Errors
    ///
    /// Returns the first structural problem found, see [`LevelError`].
    pub fn new(
        static_content: Vec<StaticContentItem>,
        static_bounding_boxes: Vec<BoundingBoxS16>,
        room_static_ranges: Vec<StaticRange>,
        rooms: Vec<Room>,
        doorways: Vec<Doorway>,
    ) -> LevelResult<Self> {
        let level = Self {
            static_content,
            static_bounding_boxes,
            room_static_ranges,
            rooms,
            doorways,
        };
        level.validate()?;
        Ok(level)
    }

    fn validate(&self) -> LevelResult<()> {
        let room_count = self.rooms.len();
        let static_count = self.static_content.len();

        if room_count > MAX_ROOMS {
            return Err(LevelError::TooManyRooms {
                count: room_count,
                limit: MAX_ROOMS,
            });
        }

        if self.static_bounding_boxes.len() != static_count {
            return Err(LevelError::BoundingBoxCountMismatch {
                items: static_count,
                boxes: self.static_bounding_boxes.len(),
            });
        }

        if self.room_static_ranges.len() != room_count {
            return Err(LevelError::RoomRangeCountMismatch {
                rooms: room_count,
                ranges: self.room_static_ranges.len(),
            });
        }

        for (item, content) in self.static_content.iter().enumerate() {
            if let Some(material) = content.material {
                if !material.is_encodable() {
                    return Err(LevelError::MaterialOutOfRange {
                        item,
                        material: material.raw(),
                        limit: MaterialIndex::MAX,
                    });
                }
            }
        }

        for (room, range) in self.room_static_ranges.iter().enumerate() {
            if range.min > range.max || usize::from(range.max) > static_count {
                return Err(LevelError::StaticRangeOutOfBounds {
                    room,
                    min: range.min,
                    max: range.max,
                    count: static_count,
                });
            }
        }

        // At most 64 rooms, so the quadratic check is cheap.
        for (first, a) in self.room_static_ranges.iter().enumerate() {
            for (offset, b) in self.room_static_ranges[first + 1..].iter().enumerate() {
                if a.overlaps(b) {
                    return Err(LevelError::OverlappingStaticRanges {
                        first,
                        second: first + 1 + offset,
                    });
                }
            }
        }

        for (doorway, door) in self.doorways.iter().enumerate() {
            for room in [door.room_a, door.room_b] {
                if usize::from(room) >= room_count {
                    return Err(LevelError::InvalidDoorwayRoom {
                        doorway,
                        room,
                        count: room_count,
                    });
                }
            }
        }

        for (room, data) in self.rooms.iter().enumerate() {
            for &doorway in &data.doorways {
                if usize::from(doorway) >= self.doorways.len() {
                    return Err(LevelError::InvalidDoorwayIndex {
                        room,
                        doorway,
                        count: self.doorways.len(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Number of static content items.
    #[inline]
    #[must_use]
    pub fn static_count(&self) -> usize {
        self.static_content.len()
    }

    /// Number of rooms.
    #[inline]
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// All static content.
    #[inline]
    #[must_use]
    pub fn static_content(&self) -> &[StaticContentItem] {
        &self.static_content
    }

    /// Bounding boxes, parallel to [`Self::static_content`].
    #[inline]
    #[must_use]
    pub fn static_bounding_boxes(&self) -> &[BoundingBoxS16] {
        &self.static_bounding_boxes
    }

    /// Static range of a room.
    #[inline]
    #[must_use]
    pub fn room_static_range(&self, room: usize) -> StaticRange {
        self.room_static_ranges[room]
    }

    /// All rooms.
    #[inline]
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// All doorways.
    #[inline]
    #[must_use]
    pub fn doorways(&self) -> &[Doorway] {
        &self.doorways
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{DisplayListHandle, PortalQuad};

    fn item(material: u16) -> StaticContentItem {
        StaticContentItem::new(MaterialIndex::new(material), DisplayListHandle(0))
    }

    fn two_room_level() -> LevelResult<LevelData> {
        LevelData::new(
            vec![item(0), item(1), item(2)],
            vec![BoundingBoxS16::default(); 3],
            vec![StaticRange::new(0, 2), StaticRange::new(2, 3)],
            vec![Room::new(vec![0]), Room::new(vec![0])],
            vec![Doorway::new(0, 1, PortalQuad::default())],
        )
    }

    #[test]
    fn test_valid_level() {
        let level = two_room_level().unwrap();
        assert_eq!(level.static_count(), 3);
        assert_eq!(level.room_count(), 2);
        assert_eq!(level.room_static_range(1), StaticRange::new(2, 3));
    }

    #[test]
    fn test_too_many_rooms() {
        let rooms = vec![Room::default(); MAX_ROOMS + 1];
        let ranges = vec![StaticRange::default(); MAX_ROOMS + 1];
        let err = LevelData::new(vec![], vec![], ranges, rooms, vec![]).unwrap_err();
        assert_eq!(
            err,
            LevelError::TooManyRooms {
                count: 65,
                limit: 64
            }
        );
    }

    #[test]
    fn test_material_out_of_range() {
        let err = LevelData::new(
            vec![item(MaterialIndex::MAX + 1)],
            vec![BoundingBoxS16::default()],
            vec![StaticRange::new(0, 1)],
            vec![Room::default()],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, LevelError::MaterialOutOfRange { item: 0, .. }));
    }

    #[test]
    fn test_bounding_box_mismatch() {
        let err = LevelData::new(
            vec![item(0), item(0)],
            vec![BoundingBoxS16::default()],
            vec![StaticRange::new(0, 2)],
            vec![Room::default()],
            vec![],
        )
        .unwrap_err();
        assert_eq!(
            err,
            LevelError::BoundingBoxCountMismatch { items: 2, boxes: 1 }
        );
    }

    #[test]
    fn test_range_past_end() {
        let err = LevelData::new(
            vec![item(0)],
            vec![BoundingBoxS16::default()],
            vec![StaticRange::new(0, 2)],
            vec![Room::default()],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, LevelError::StaticRangeOutOfBounds { room: 0, .. }));
    }

    #[test]
    fn test_overlapping_ranges() {
        let err = LevelData::new(
            vec![item(0), item(0)],
            vec![BoundingBoxS16::default(); 2],
            vec![StaticRange::new(0, 2), StaticRange::new(1, 2)],
            vec![Room::default(), Room::default()],
            vec![],
        )
        .unwrap_err();
        assert_eq!(
            err,
            LevelError::OverlappingStaticRanges {
                first: 0,
                second: 1
            }
        );
    }

    #[test]
    fn test_bad_doorway_references() {
        let err = LevelData::new(
            vec![],
            vec![],
            vec![StaticRange::default()],
            vec![Room::new(vec![0])],
            vec![Doorway::new(0, 4, PortalQuad::default())],
        )
        .unwrap_err();
        assert!(matches!(err, LevelError::InvalidDoorwayRoom { room: 4, .. }));

        let err = LevelData::new(
            vec![],
            vec![],
            vec![StaticRange::default()],
            vec![Room::new(vec![2])],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, LevelError::InvalidDoorwayIndex { doorway: 2, .. }));
    }
}
