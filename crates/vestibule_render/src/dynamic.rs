//! Contract with the dynamic-object subsystem.
//!
//! The static pipeline never looks inside dynamic objects. It hands the
//! dynamic scene a [`DynamicQueue`] once per frame, then asks it for the
//! material and draw commands of whatever it queued.

use vestibule_core::MaterialIndex;

use crate::culling::FrustumCullingInfo;
use crate::emit::CommandTarget;
use crate::order::DynamicQueue;

/// Dynamic objects merged into the static draw stream.
///
/// Objects are pushed with their material and camera distance; the queue
/// builds the sort key with the same encoding and transparency threshold as
/// static content, so both interleave correctly. Each offset may be queued
/// once per frame.
pub trait DynamicScene {
    /// Culls dynamic objects and queues the visible ones. Called once per frame,
    /// after static population and before sorting.
    fn populate(&mut self, culling: &FrustumCullingInfo, queue: &mut DynamicQueue<'_>);

    /// Material of the dynamic object at `offset`.
    fn material_index(&self, offset: u16) -> Option<MaterialIndex>;

    /// Emits the draw commands of the dynamic object at `offset`.
    fn render_object(&self, offset: u16, target: &mut dyn CommandTarget);
}

/// A scene with no dynamic objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDynamicObjects;

impl DynamicScene for NoDynamicObjects {
    fn populate(&mut self, _culling: &FrustumCullingInfo, _queue: &mut DynamicQueue<'_>) {}

    fn material_index(&self, _offset: u16) -> Option<MaterialIndex> {
        None
    }

    fn render_object(&self, _offset: u16, _target: &mut dyn CommandTarget) {}
}
