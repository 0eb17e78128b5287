//! # VESTIBULE Static Renderer
//!
//! Room-and-portal static renderer for indoor levels:
//! - Portal traversal decides which rooms can be seen
//! - Static content of those rooms is frustum culled and queued
//! - Dynamic objects join the same queue through [`DynamicScene`]
//! - One stable sort orders everything by material, then distance
//! - Emission binds each material once per run
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       FRAME PIPELINE                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Portal DFS → RoomMask → Populate static ─┐                  │
//! │                          Populate dynamic ┴→ Merge sort      │
//! │                                                ↓             │
//! │               Default material → Batched binds → Draw calls  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//!
//! - No allocations in the frame loop
//! - Level limits are validated at load, the frame path never fails
//! - Opaque front-to-back, transparent back-to-front

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod culling;
pub mod dynamic;
pub mod emit;
pub mod error;
pub mod order;
pub mod pipeline;
pub mod visibility;

pub use config::RenderConfig;
pub use culling::{FrustumCullingInfo, Plane, MAX_CLIPPING_PLANES};
pub use dynamic::{DynamicScene, NoDynamicObjects};
pub use emit::{emit_commands, CommandTarget, MaterialCommandTable, MaterialCommands, MaterialTable};
pub use error::{RenderError, RenderResult};
pub use order::{distance_metric, DynamicQueue, RenderContext, SortKey};
pub use pipeline::{RenderStats, StaticRenderer};
pub use visibility::{determine_visible_rooms, RoomMask};
