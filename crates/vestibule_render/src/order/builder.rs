//! Queues the static content of visible rooms.

use vestibule_core::math::dist_sqrd;
use vestibule_core::{LevelData, MaterialIndex};

use super::context::RenderContext;
use super::sort_key::{distance_metric, SortKey};
use crate::culling::FrustumCullingInfo;
use crate::visibility::RoomMask;

/// Counts from one population pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulateStats {
    /// Static items tested against the frustum.
    pub tested: u32,
    /// Static items rejected by the frustum.
    pub culled: u32,
    /// Static items queued for drawing.
    pub queued: u32,
}

/// Sort key for static item `index`, from its material and box center.
#[must_use]
pub fn static_sort_key(
    level: &LevelData,
    index: usize,
    culling: &FrustumCullingInfo,
    transparent_start: MaterialIndex,
) -> SortKey {
    let center = level.static_bounding_boxes()[index].center_f32();
    let distance = distance_metric(dist_sqrd(center, culling.camera_pos_scaled));
    // Level materials were checked when the level was built.
    SortKey::pack(
        level.static_content()[index].material,
        distance,
        transparent_start,
    )
}

/// Appends every unculled static item of every room in `visible_rooms`.
///
/// Rooms are walked in ascending index order, items in range order. Bits for
/// rooms the level does not have are ignored.
#[allow(clippy::cast_possible_truncation)]
pub fn populate_rooms(
    level: &LevelData,
    culling: &FrustumCullingInfo,
    visible_rooms: RoomMask,
    transparent_start: MaterialIndex,
    context: &mut RenderContext,
) -> PopulateStats {
    let mut stats = PopulateStats::default();
    let boxes = level.static_bounding_boxes();

    for room in visible_rooms {
        let room = usize::from(room);
        if room >= level.room_count() {
            break;
        }

        for index in level.room_static_range(room).as_range() {
            stats.tested += 1;

            if culling.is_box_outside(&boxes[index]) {
                stats.culled += 1;
                continue;
            }

            // Static indices fit u16: the context was sized for them.
            let key = static_sort_key(level, index, culling, transparent_start);
            if context.push_static(index as u16, key) {
                stats.queued += 1;
            }
        }
    }

    stats
}
