//! Small vector helpers over `[f32; 3]`.
//!
//! Positions stay plain arrays so they can be shared with `Pod` level data.

/// A point or direction in scaled scene space.
pub type Vec3 = [f32; 3];

/// Dot product.
#[inline]
#[must_use]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Squared distance between two points.
#[inline]
#[must_use]
pub fn dist_sqrd(a: Vec3, b: Vec3) -> f32 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    dx * dx + dy * dy + dz * dz
}

/// Scales a point uniformly.
#[inline]
#[must_use]
pub fn scale(v: Vec3, factor: f32) -> Vec3 {
    [v[0] * factor, v[1] * factor, v[2] * factor]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dist_sqrd() {
        assert_eq!(dist_sqrd([1.0, 2.0, 3.0], [4.0, 6.0, 3.0]), 25.0);
    }

    #[test]
    fn test_dot_and_scale() {
        assert_eq!(dot([1.0, 0.0, 2.0], [3.0, 5.0, 4.0]), 11.0);
        assert_eq!(scale([1.0, -2.0, 0.5], 2.0), [2.0, -4.0, 1.0]);
    }
}
