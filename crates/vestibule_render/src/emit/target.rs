//! Where emitted commands go.

use vestibule_core::DisplayListHandle;

/// Sink for display-list calls.
///
/// The renderer only appends; buffer memory belongs to the implementor.
pub trait CommandTarget {
    /// Appends a call to `list`.
    fn push_display_list(&mut self, list: DisplayListHandle);
}

impl CommandTarget for Vec<DisplayListHandle> {
    #[inline]
    fn push_display_list(&mut self, list: DisplayListHandle) {
        self.push(list);
    }
}

/// Forwards to another target, counting calls.
pub(crate) struct CountingTarget<'a> {
    inner: &'a mut dyn CommandTarget,
    count: u32,
}

impl<'a> CountingTarget<'a> {
    pub(crate) fn new(inner: &'a mut dyn CommandTarget) -> Self {
        Self { inner, count: 0 }
    }

    pub(crate) const fn count(&self) -> u32 {
        self.count
    }
}

impl CommandTarget for CountingTarget<'_> {
    #[inline]
    fn push_display_list(&mut self, list: DisplayListHandle) {
        self.count += 1;
        self.inner.push_display_list(list);
    }
}
