//! Packed draw-order keys.
//!
//! ```text
//!  31            23 22                          0
//! ┌────────────────┬─────────────────────────────┐
//! │ material field │          distance           │
//! └────────────────┴─────────────────────────────┘
//! ```
//!
//! Material field 0 is untextured content, field `m + 1` is material `m`.
//! Sorting ascending groups by material first, then by distance. For
//! transparent materials the distance is inverted, so far objects go first.

use vestibule_core::MaterialIndex;

/// Bit position of the material field.
pub const MATERIAL_SHIFT: u32 = 23;

/// Mask of the distance field.
pub const DISTANCE_MASK: u32 = 0x7F_FFFF;

/// Inversion base for back-to-front distances.
const TRANSPARENT_INVERT: u32 = 0x100_0000;

/// Material-major, distance-minor draw order key.
///
/// The material field is biased by one, so keys cannot be packed by hand as
/// `material << 23 | distance`; build them with [`SortKey::from_material`].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey(u32);

impl SortKey {
    /// Packs a material and a camera distance.
    ///
    /// Distances saturate at [`DISTANCE_MASK`]. Materials at or past
    /// `transparent_start` store `0x1000000 - distance` instead, with the
    /// distance clamped to at least 1 so the inversion cannot wrap.
    ///
    /// Returns `None` if `material` does not fit the material field.
    #[must_use]
    pub fn from_material(
        material: Option<MaterialIndex>,
        distance: u32,
        transparent_start: MaterialIndex,
    ) -> Option<Self> {
        match material {
            Some(material) if !material.is_encodable() => None,
            _ => Some(Self::pack(material, distance, transparent_start)),
        }
    }

    /// [`SortKey::from_material`] for materials already known to be encodable.
    pub(crate) fn pack(
        material: Option<MaterialIndex>,
        distance: u32,
        transparent_start: MaterialIndex,
    ) -> Self {
        let mut distance = distance.min(DISTANCE_MASK);

        let field = match material {
            Some(material) => {
                debug_assert!(material.is_encodable());
                if material >= transparent_start {
                    distance = (TRANSPARENT_INVERT - distance.max(1)) & DISTANCE_MASK;
                }
                u32::from(material.raw()) + 1
            }
            None => 0,
        };

        Self((field << MATERIAL_SHIFT) | distance)
    }

    /// Wraps an already packed value, as returned by [`SortKey::raw`].
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw packed value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Material this key groups under.
    #[allow(clippy::cast_possible_truncation)]
    #[inline]
    #[must_use]
    pub const fn material(self) -> Option<MaterialIndex> {
        match self.0 >> MATERIAL_SHIFT {
            0 => None,
            field => Some(MaterialIndex::new((field - 1) as u16)),
        }
    }

    /// Stored distance component, inverted for transparent materials.
    #[inline]
    #[must_use]
    pub const fn distance_bits(self) -> u32 {
        self.0 & DISTANCE_MASK
    }
}

/// Distance metric from a squared distance: `floor(sqrt(d²))`.
///
/// Negative or NaN input gives 0, huge input saturates.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[inline]
#[must_use]
pub fn distance_metric(distance_sqrd: f32) -> u32 {
    distance_sqrd.sqrt() as u32
}
