//! Culling for room content and portals.
//!
//! Pure frustum predicates over scaled integer boxes and portal quads.

mod frustum;

pub use frustum::{FrustumCullingInfo, Plane, MAX_CLIPPING_PLANES};
