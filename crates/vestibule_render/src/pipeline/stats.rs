//! Rendering statistics.

use crate::emit::EmitStats;
use crate::order::PopulateStats;

/// Counts from one rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Rooms in the visible mask.
    pub rooms_visited: u32,
    /// Static items tested against the frustum.
    pub static_tested: u32,
    /// Static items culled.
    pub static_culled: u32,
    /// Static items queued.
    pub static_queued: u32,
    /// Dynamic objects queued.
    pub dynamic_queued: u32,
    /// Dynamic pushes refused for lack of slots.
    pub dynamic_rejected: u32,
    /// Material binds emitted.
    pub material_binds: u32,
    /// Material reverts emitted.
    pub material_reverts: u32,
    /// Objects drawn, static and dynamic.
    pub draws: u32,
    /// Commands pushed to the target in total.
    pub commands: u32,
}

impl RenderStats {
    pub(crate) fn record_populate(&mut self, populate: PopulateStats) {
        self.static_tested = populate.tested;
        self.static_culled = populate.culled;
        self.static_queued = populate.queued;
    }

    pub(crate) fn record_emit(&mut self, emit: EmitStats) {
        self.material_binds = emit.binds;
        self.material_reverts = emit.reverts;
        self.draws = emit.static_draws + emit.dynamic_draws;
        self.commands = emit.commands;
    }

    /// Objects queued for drawing.
    #[must_use]
    pub const fn queued(&self) -> u32 {
        self.static_queued + self.dynamic_queued
    }

    /// Fraction of tested static items that were culled.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn cull_rate(&self) -> f32 {
        if self.static_tested > 0 {
            self.static_culled as f32 / self.static_tested as f32
        } else {
            0.0
        }
    }
}
