//! Static render pipeline orchestration.
//!
//! ```text
//! room visibility → populate static → populate dynamic → sort → emit
//! ```
//!
//! [`StaticRenderer`] owns the loaded level and its working buffers. Buffers
//! are allocated in [`StaticRenderer::load_level`] and reused every frame.

mod stats;

pub use stats::RenderStats;

use tracing::{debug, trace, warn};
use vestibule_core::LevelData;

use crate::config::RenderConfig;
use crate::culling::FrustumCullingInfo;
use crate::dynamic::DynamicScene;
use crate::emit::{emit_commands, CommandTarget, MaterialTable};
use crate::error::RenderResult;
use crate::order::{populate_rooms, RenderContext};
use crate::visibility::{determine_visible_rooms, RoomMask};

/// A level together with the buffers sized for it.
#[derive(Debug)]
struct LoadedLevel {
    data: LevelData,
    context: RenderContext,
}

/// Draws a level's static content, merged with a dynamic scene.
#[derive(Debug)]
pub struct StaticRenderer {
    /// Configuration.
    config: RenderConfig,
    /// Current level, if any.
    level: Option<LoadedLevel>,
    /// Statistics from the last frame.
    last_stats: RenderStats,
    /// Frames rendered since creation.
    frame_count: u64,
}

impl StaticRenderer {
    /// Creates a renderer with no level loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn new(config: RenderConfig) -> RenderResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            level: None,
            last_stats: RenderStats::default(),
            frame_count: 0,
        })
    }

    /// Loads a level, replacing any current one, and sizes the buffers for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the static content plus the configured dynamic
    /// slots do not fit the object index space. The previous level stays
    /// loaded in that case.
    pub fn load_level(&mut self, level: LevelData) -> RenderResult<()> {
        let context = RenderContext::new(level.static_count(), self.config.max_dynamic_objects)?;

        debug!(
            rooms = level.room_count(),
            static_items = level.static_count(),
            capacity = context.capacity(),
            "level loaded"
        );

        self.level = Some(LoadedLevel {
            data: level,
            context,
        });
        Ok(())
    }

    /// Drops the current level and its buffers.
    pub fn unload_level(&mut self) -> Option<LevelData> {
        let loaded = self.level.take()?;
        debug!(rooms = loaded.data.room_count(), "level unloaded");
        Some(loaded.data)
    }

    /// Returns true if a level is loaded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.level.is_some()
    }

    /// The loaded level.
    #[must_use]
    pub fn level(&self) -> Option<&LevelData> {
        self.level.as_ref().map(|loaded| &loaded.data)
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Statistics from the last frame.
    #[must_use]
    pub const fn last_stats(&self) -> RenderStats {
        self.last_stats
    }

    /// Frames rendered since creation.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Render order of the last frame, in draw order.
    #[must_use]
    pub fn render_order(&self) -> &[u16] {
        self.level
            .as_ref()
            .map_or(&[], |loaded| loaded.context.render_order())
    }

    /// Rooms reachable from `start_room` through unculled portals.
    ///
    /// Empty if no level is loaded.
    #[must_use]
    pub fn determine_visible_rooms(&self, culling: &FrustumCullingInfo, start_room: u16) -> RoomMask {
        self.level.as_ref().map_or(RoomMask::EMPTY, |loaded| {
            determine_visible_rooms(&loaded.data, culling, start_room)
        })
    }

    /// Renders one frame for an already computed room mask.
    ///
    /// Queues static content of `visible_rooms`, lets `dynamic` append its
    /// objects, sorts, and emits into `target`. Does nothing if no level is
    /// loaded.
    pub fn render<D, M>(
        &mut self,
        culling: &FrustumCullingInfo,
        visible_rooms: RoomMask,
        dynamic: &mut D,
        materials: &M,
        target: &mut dyn CommandTarget,
    ) -> RenderStats
    where
        D: DynamicScene + ?Sized,
        M: MaterialTable + ?Sized,
    {
        let Some(LoadedLevel { data, context }) = self.level.as_mut() else {
            self.last_stats = RenderStats::default();
            return self.last_stats;
        };

        let mut stats = RenderStats {
            rooms_visited: visible_rooms.count(),
            ..RenderStats::default()
        };

        context.begin_frame();
        let transparent_start = materials.transparent_start();

        stats.record_populate(populate_rooms(
            data,
            culling,
            visible_rooms,
            transparent_start,
            context,
        ));

        {
            let mut queue = context.dynamic_queue(transparent_start);
            dynamic.populate(culling, &mut queue);
            stats.dynamic_queued = u32::try_from(queue.queued()).unwrap_or(u32::MAX);
            stats.dynamic_rejected = u32::try_from(queue.rejected()).unwrap_or(u32::MAX);
        }

        if stats.dynamic_rejected > 0 {
            warn!(
                rejected = stats.dynamic_rejected,
                capacity = context.max_dynamic(),
                "dynamic objects dropped"
            );
        }

        context.sort();

        stats.record_emit(emit_commands(
            data,
            context.render_order(),
            &*dynamic,
            materials,
            target,
        ));

        self.frame_count += 1;
        if self.config.log_frame_stats {
            trace!(
                frame = self.frame_count,
                rooms = stats.rooms_visited,
                queued = stats.queued(),
                culled = stats.static_culled,
                binds = stats.material_binds,
                commands = stats.commands,
                "frame rendered"
            );
        }

        self.last_stats = stats;
        stats
    }

    /// Determines visible rooms from `start_room`, then renders them.
    pub fn render_frame<D, M>(
        &mut self,
        culling: &FrustumCullingInfo,
        start_room: u16,
        dynamic: &mut D,
        materials: &M,
        target: &mut dyn CommandTarget,
    ) -> RenderStats
    where
        D: DynamicScene + ?Sized,
        M: MaterialTable + ?Sized,
    {
        let visible_rooms = self.determine_visible_rooms(culling, start_room);
        self.render(culling, visible_rooms, dynamic, materials, target)
    }

    /// Builds culling state for a world-space camera using the configured scale.
    #[must_use]
    pub fn culling_info(&self, camera_pos: [f32; 3], planes: &[crate::culling::Plane]) -> FrustumCullingInfo {
        FrustumCullingInfo::from_world(camera_pos, planes, self.config.scene_scale)
    }
}
