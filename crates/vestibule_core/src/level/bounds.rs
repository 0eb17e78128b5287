//! Bounding volumes stored in level data.

use bytemuck::{Pod, Zeroable};

use crate::math::Vec3;

/// Axis-aligned box in scaled integer scene space.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct BoundingBoxS16 {
    /// Minimum X.
    pub min_x: i16,
    /// Minimum Y.
    pub min_y: i16,
    /// Minimum Z.
    pub min_z: i16,
    /// Maximum X.
    pub max_x: i16,
    /// Maximum Y.
    pub max_y: i16,
    /// Maximum Z.
    pub max_z: i16,
}

impl BoundingBoxS16 {
    /// Creates a box from its two corners.
    #[must_use]
    pub const fn new(min: [i16; 3], max: [i16; 3]) -> Self {
        Self {
            min_x: min[0],
            min_y: min[1],
            min_z: min[2],
            max_x: max[0],
            max_y: max[1],
            max_z: max[2],
        }
    }

    /// Minimum corner.
    #[inline]
    #[must_use]
    pub const fn min(&self) -> [i16; 3] {
        [self.min_x, self.min_y, self.min_z]
    }

    /// Maximum corner.
    #[inline]
    #[must_use]
    pub const fn max(&self) -> [i16; 3] {
        [self.max_x, self.max_y, self.max_z]
    }

    /// Integer midpoint, `(min + max) >> 1` per axis.
    #[inline]
    #[must_use]
    pub fn center(&self) -> [i32; 3] {
        [
            (i32::from(self.min_x) + i32::from(self.max_x)) >> 1,
            (i32::from(self.min_y) + i32::from(self.max_y)) >> 1,
            (i32::from(self.min_z) + i32::from(self.max_z)) >> 1,
        ]
    }

    /// Midpoint as a float position, for distance computations.
    #[allow(clippy::cast_precision_loss)]
    #[inline]
    #[must_use]
    pub fn center_f32(&self) -> Vec3 {
        let c = self.center();
        [c[0] as f32, c[1] as f32, c[2] as f32]
    }
}

/// Four-cornered portal polygon in scaled scene space.
///
/// Corners are stored in winding order; the frustum test only needs the points.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PortalQuad {
    /// Corner positions.
    pub corners: [Vec3; 4],
}

impl PortalQuad {
    /// Creates a quad from four corners.
    #[must_use]
    pub const fn new(corners: [Vec3; 4]) -> Self {
        Self { corners }
    }

    /// Axis-aligned rectangle spanning `min..max` on the plane `axis = offset`.
    ///
    /// `axis` is 0 for X, 1 for Y, 2 for Z. The other two axes take the
    /// rectangle's extents in ascending order.
    #[must_use]
    pub fn axis_aligned(axis: usize, offset: f32, min: [f32; 2], max: [f32; 2]) -> Self {
        let (u, v) = match axis {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        };
        let w = axis.min(2);
        let mut corners = [[0.0; 3]; 4];
        let extents = [
            (min[0], min[1]),
            (max[0], min[1]),
            (max[0], max[1]),
            (min[0], max[1]),
        ];
        for (corner, (a, b)) in corners.iter_mut().zip(extents) {
            corner[w] = offset;
            corner[u] = a;
            corner[v] = b;
        }
        Self { corners }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_center_truncates() {
        let b = BoundingBoxS16::new([0, 1, -3], [3, 4, 0]);
        assert_eq!(b.center(), [1, 2, -2]);
    }

    #[test]
    fn test_box_center_no_i16_overflow() {
        let b = BoundingBoxS16::new([i16::MAX - 1, 0, 0], [i16::MAX, 0, 0]);
        assert_eq!(b.center()[0], i32::from(i16::MAX) - 1);
    }

    #[test]
    fn test_box_is_pod() {
        let boxes = [BoundingBoxS16::new([1, 2, 3], [4, 5, 6])];
        let raw: &[i16] = bytemuck::cast_slice(&boxes);
        assert_eq!(raw, &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_axis_aligned_quad() {
        let quad = PortalQuad::axis_aligned(2, 10.0, [-1.0, -2.0], [1.0, 2.0]);
        for corner in quad.corners {
            assert_eq!(corner[2], 10.0);
        }
        assert_eq!(quad.corners[0], [-1.0, -2.0, 10.0]);
        assert_eq!(quad.corners[2], [1.0, 2.0, 10.0]);
    }
}
