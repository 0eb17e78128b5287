//! # Memory Management
//!
//! Buffers sized once when a level loads and reused every frame.
//!
//! ## Design Philosophy
//!
//! During a frame:
//! - No heap allocations
//! - Resetting a buffer is a length store, never a free

mod fixed;

pub use fixed::FixedBuffer;
