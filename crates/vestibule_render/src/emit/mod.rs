//! Command emission.
//!
//! Turns a sorted render order into display-list calls, binding each
//! material once per run.

mod emitter;
mod material;
mod target;

pub use emitter::{emit_commands, EmitStats};
pub use material::{MaterialCommandTable, MaterialCommands, MaterialTable};
pub use target::CommandTarget;
