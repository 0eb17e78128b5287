//! # Fixed Buffer
//!
//! A bump-style append buffer over storage allocated once.

/// Append-only buffer with a capacity fixed at construction.
///
/// Pushing is a store plus a length bump. [`FixedBuffer::reset`] forgets the
/// contents without touching the allocation, so the same buffer is reused
/// frame after frame.
///
/// # Example
///
/// ```rust,ignore
/// let mut order: FixedBuffer<u16> = FixedBuffer::new(256);
///
/// order.push(3);
/// order.push(7);
/// assert_eq!(order.as_slice(), &[3, 7]);
///
/// order.reset();
/// assert!(order.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct FixedBuffer<T> {
    /// The backing storage, always `capacity` long.
    storage: Box<[T]>,
    /// Number of live elements at the front of `storage`.
    len: usize,
}

impl<T: Copy + Default> FixedBuffer<T> {
    /// Creates a buffer holding up to `capacity` elements.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            storage: vec![T::default(); capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Total capacity in elements.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Number of live elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been pushed since the last reset.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Free slots left.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    /// Appends a value.
    ///
    /// Returns false, leaving the buffer unchanged, when it is full.
    #[inline]
    pub fn push(&mut self, value: T) -> bool {
        match self.storage.get_mut(self.len) {
            Some(slot) => {
                *slot = value;
                self.len += 1;
                true
            }
            None => false,
        }
    }

    /// Forgets all elements. The allocation is kept.
    #[inline]
    pub fn reset(&mut self) {
        self.len = 0;
    }

    /// Live elements.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.storage[..self.len]
    }

    /// Live elements, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage[..self.len]
    }
}
