//! Frustum culling for room content and portals.
//!
//! Planes live in scaled scene space, the same integer space as the level's
//! bounding boxes. Both tests are conservative: something is rejected only
//! when it lies entirely behind a single plane.

use bytemuck::{Pod, Zeroable};
use vestibule_core::math::{dot, scale, Vec3};
use vestibule_core::{BoundingBoxS16, PortalQuad};

/// Maximum clipping planes per frustum.
pub const MAX_CLIPPING_PLANES: usize = 6;

/// A plane `normal · p + d = 0`, with the visible half-space on the positive side.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Plane {
    /// Plane normal, pointing into the frustum.
    pub normal: Vec3,
    /// Offset from origin.
    pub d: f32,
}

impl Plane {
    /// Creates a new plane.
    #[must_use]
    pub const fn new(normal: Vec3, d: f32) -> Self {
        Self { normal, d }
    }

    /// Plane through `point`, facing `normal`.
    #[must_use]
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        Self {
            normal,
            d: -dot(normal, point),
        }
    }

    /// Normalizes the plane.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = dot(self.normal, self.normal).sqrt();
        if len > 0.0 {
            Self {
                normal: scale(self.normal, 1.0 / len),
                d: self.d / len,
            }
        } else {
            self
        }
    }

    /// Signed distance from a point to the plane.
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        dot(self.normal, point) + self.d
    }
}

/// Per-frame culling state: camera position and clipping planes, both scaled.
#[derive(Debug, Clone, Copy)]
pub struct FrustumCullingInfo {
    /// Camera position in scaled scene space.
    pub camera_pos_scaled: Vec3,
    planes: [Plane; MAX_CLIPPING_PLANES],
    plane_count: usize,
}

impl FrustumCullingInfo {
    /// Creates culling state from planes already in scaled space.
    ///
    /// Planes past [`MAX_CLIPPING_PLANES`] are ignored.
    #[must_use]
    pub fn new(camera_pos_scaled: Vec3, planes: &[Plane]) -> Self {
        let plane_count = planes.len().min(MAX_CLIPPING_PLANES);
        let mut stored = [Plane::default(); MAX_CLIPPING_PLANES];
        stored[..plane_count].copy_from_slice(&planes[..plane_count]);
        Self {
            camera_pos_scaled,
            planes: stored,
            plane_count,
        }
    }

    /// Creates culling state from a world-space camera and planes.
    ///
    /// Scaling a point by `scene_scale` scales each plane offset by the same
    /// factor; normals are unchanged.
    #[must_use]
    pub fn from_world(camera_pos: Vec3, planes: &[Plane], scene_scale: f32) -> Self {
        let mut info = Self::new(scale(camera_pos, scene_scale), planes);
        for plane in &mut info.planes[..info.plane_count] {
            plane.d *= scene_scale;
        }
        info
    }

    /// Extracts the six frustum planes from a view-projection matrix.
    ///
    /// The matrix must map scaled scene space to clip space and be in
    /// column-major order.
    #[must_use]
    pub fn from_view_projection(m: &[[f32; 4]; 4], camera_pos_scaled: Vec3) -> Self {
        let row = |r: usize| [m[0][r], m[1][r], m[2][r], m[3][r]];
        let w = row(3);
        let combine = |other: [f32; 4], sign: f32| {
            Plane::new(
                [
                    w[0] + sign * other[0],
                    w[1] + sign * other[1],
                    w[2] + sign * other[2],
                ],
                w[3] + sign * other[3],
            )
            .normalized()
        };

        let planes = [
            // Left, right
            combine(row(0), 1.0),
            combine(row(0), -1.0),
            // Bottom, top
            combine(row(1), 1.0),
            combine(row(1), -1.0),
            // Near, far
            combine(row(2), 1.0),
            combine(row(2), -1.0),
        ];

        Self::new(camera_pos_scaled, &planes)
    }

    /// Active clipping planes.
    #[must_use]
    pub fn planes(&self) -> &[Plane] {
        &self.planes[..self.plane_count]
    }

    /// Returns true if the box is entirely outside the frustum.
    #[must_use]
    pub fn is_box_outside(&self, bounds: &BoundingBoxS16) -> bool {
        let min = bounds.min();
        let max = bounds.max();

        self.planes().iter().any(|plane| {
            // Corner furthest along the normal; if it is behind, all are.
            let mut corner = [0.0; 3];
            for axis in 0..3 {
                let extent = if plane.normal[axis] >= 0.0 {
                    max[axis]
                } else {
                    min[axis]
                };
                corner[axis] = f32::from(extent);
            }
            plane.distance_to_point(corner) < 0.0
        })
    }

    /// Returns true if the portal quad is entirely outside the frustum.
    #[must_use]
    pub fn is_quad_outside(&self, quad: &PortalQuad) -> bool {
        self.planes().iter().any(|plane| {
            quad.corners
                .iter()
                .all(|&corner| plane.distance_to_point(corner) < 0.0)
        })
    }
}
