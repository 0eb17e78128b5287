//! Static content items and the handles they carry.

use bytemuck::{Pod, Zeroable};

/// Index into the level's material table.
///
/// The sort key reserves 9 bits for the material field and keeps field 0 for
/// untextured content, so valid indices are `0..=MaterialIndex::MAX`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
pub struct MaterialIndex(pub u16);

impl MaterialIndex {
    /// Largest encodable material index.
    pub const MAX: u16 = 510;

    /// Number of encodable materials.
    pub const COUNT: usize = Self::MAX as usize + 1;

    /// Creates a material index.
    #[inline]
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Returns true if the sort key can encode this material.
    #[inline]
    #[must_use]
    pub const fn is_encodable(self) -> bool {
        self.0 <= Self::MAX
    }
}

/// Opaque reference to a precomputed command list.
///
/// The command target resolves handles; the renderer only forwards them.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct DisplayListHandle(pub u32);

/// One piece of static level geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticContentItem {
    /// Material to bind before drawing, `None` for untextured content.
    pub material: Option<MaterialIndex>,
    /// Draw commands for this item.
    pub display_list: DisplayListHandle,
}

impl StaticContentItem {
    /// Creates a textured item.
    #[must_use]
    pub const fn new(material: MaterialIndex, display_list: DisplayListHandle) -> Self {
        Self {
            material: Some(material),
            display_list,
        }
    }

    /// Creates an item drawn with whatever material is current.
    #[must_use]
    pub const fn untextured(display_list: DisplayListHandle) -> Self {
        Self {
            material: None,
            display_list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encodable_range() {
        let count = u16::try_from(MaterialIndex::COUNT).unwrap();
        assert!((0..count).all(|m| MaterialIndex::new(m).is_encodable()));
        assert!(!MaterialIndex::new(count).is_encodable());
        assert_eq!(MaterialIndex::new(MaterialIndex::MAX).raw(), 510);
    }

    #[test]
    fn test_untextured_item() {
        let item = StaticContentItem::untextured(DisplayListHandle(4));
        assert_eq!(item.material, None);
        assert_eq!(item.display_list, DisplayListHandle(4));
    }
}
