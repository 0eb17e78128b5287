//! Per-level working buffers for draw ordering.

use vestibule_core::{FixedBuffer, LevelError, LevelResult, MaterialIndex};

use super::sort_key::SortKey;
use super::sorter::sort_render_order;

/// Number of distinct object indices (`u16`).
pub const MAX_OBJECTS: usize = u16::MAX as usize + 1;

/// Render order, merge scratch and sort keys for one loaded level.
///
/// Object indices below `static_count` are static content; the next
/// `max_dynamic` indices belong to the dynamic scene. Every buffer is sized
/// `static_count + max_dynamic` once, here, and only reset afterwards.
#[derive(Debug)]
pub struct RenderContext {
    static_count: usize,
    max_dynamic: usize,
    order: FixedBuffer<u16>,
    scratch: Box<[u16]>,
    keys: Box<[SortKey]>,
    /// One bit per dynamic slot, set once that slot is queued this frame.
    dynamic_queued: Box<[u64]>,
}

impl RenderContext {
    /// Allocates buffers for a level.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::CapacityOverflow`] if the combined object count
    /// does not fit the 16-bit index space.
    pub fn new(static_count: usize, max_dynamic: usize) -> LevelResult<Self> {
        let capacity = static_count
            .checked_add(max_dynamic)
            .filter(|&capacity| capacity <= MAX_OBJECTS)
            .ok_or(LevelError::CapacityOverflow {
                static_count,
                dynamic_count: max_dynamic,
                limit: MAX_OBJECTS,
            })?;

        Ok(Self {
            static_count,
            max_dynamic,
            order: FixedBuffer::new(capacity),
            scratch: vec![0; capacity].into_boxed_slice(),
            keys: vec![SortKey::default(); capacity].into_boxed_slice(),
            dynamic_queued: vec![0; max_dynamic.div_ceil(64)].into_boxed_slice(),
        })
    }

    /// Total object slots.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.order.capacity()
    }

    /// Static content count; also the first dynamic index.
    #[inline]
    #[must_use]
    pub const fn static_count(&self) -> usize {
        self.static_count
    }

    /// Reserved dynamic slots.
    #[inline]
    #[must_use]
    pub const fn max_dynamic(&self) -> usize {
        self.max_dynamic
    }

    /// Clears the render order for a new frame.
    #[inline]
    pub fn begin_frame(&mut self) {
        self.order.reset();
        self.dynamic_queued.fill(0);
    }

    /// Queues a static item with its key.
    ///
    /// Returns false if `index` is not a static index or the order is full.
    #[inline]
    pub fn push_static(&mut self, index: u16, key: SortKey) -> bool {
        let slot = usize::from(index);
        if slot >= self.static_count || !self.order.push(index) {
            return false;
        }
        self.keys[slot] = key;
        true
    }

    /// Hands out the dynamic slots for the dynamic scene to fill.
    ///
    /// Keys are encoded with `transparent_start`, the same threshold the
    /// static content was keyed with.
    pub fn dynamic_queue(&mut self, transparent_start: MaterialIndex) -> DynamicQueue<'_> {
        DynamicQueue {
            order: &mut self.order,
            keys: &mut self.keys,
            pushed: &mut self.dynamic_queued,
            transparent_start,
            static_count: self.static_count,
            max_dynamic: self.max_dynamic,
            queued: 0,
            rejected: 0,
        }
    }

    /// Sorts the queued order by key, stable, without allocating.
    pub fn sort(&mut self) {
        sort_render_order(self.order.as_mut_slice(), &mut self.scratch, &self.keys);
    }

    /// Number of queued objects.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if nothing is queued.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Queued object indices, in draw order once sorted.
    #[inline]
    #[must_use]
    pub fn render_order(&self) -> &[u16] {
        self.order.as_slice()
    }

    /// Key last stored for an object index.
    #[inline]
    #[must_use]
    pub fn key(&self, index: u16) -> SortKey {
        self.keys[usize::from(index)]
    }
}

/// Write access to the dynamic slots of a [`RenderContext`] for one frame.
///
/// Dynamic objects are addressed by offset; the queue translates them into
/// object indices past the static range.
#[derive(Debug)]
pub struct DynamicQueue<'a> {
    order: &'a mut FixedBuffer<u16>,
    keys: &'a mut [SortKey],
    pushed: &'a mut [u64],
    transparent_start: MaterialIndex,
    static_count: usize,
    max_dynamic: usize,
    queued: usize,
    rejected: usize,
}

impl DynamicQueue<'_> {
    /// Queues dynamic object `offset`, keyed like static content.
    ///
    /// Returns false, and counts the push as rejected, if `offset` is outside
    /// the reserved slots, was already queued this frame, or `material`
    /// does not fit a sort key.
    #[allow(clippy::cast_possible_truncation)]
    pub fn push(&mut self, offset: u16, material: Option<MaterialIndex>, distance: u32) -> bool {
        let slot = usize::from(offset);
        let (word, bit) = (slot / 64, 1u64 << (slot % 64));

        if slot >= self.max_dynamic || self.pushed[word] & bit != 0 {
            self.rejected += 1;
            return false;
        }

        let Some(key) = SortKey::from_material(material, distance, self.transparent_start) else {
            self.rejected += 1;
            return false;
        };

        // Capacity covers every static item plus every dynamic slot.
        let index = self.static_count + slot;
        if !self.order.push(index as u16) {
            self.rejected += 1;
            return false;
        }
        self.pushed[word] |= bit;
        self.keys[index] = key;
        self.queued += 1;
        true
    }

    /// Total queued objects, static and dynamic.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if nothing at all is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// First object index of the dynamic range.
    #[must_use]
    pub const fn static_count(&self) -> usize {
        self.static_count
    }

    /// Reserved dynamic slots.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.max_dynamic
    }

    /// Dynamic objects accepted so far.
    #[must_use]
    pub const fn queued(&self) -> usize {
        self.queued
    }

    /// Pushes refused so far.
    #[must_use]
    pub const fn rejected(&self) -> usize {
        self.rejected
    }
}
