//! Engine module - driver-facing wrappers over the silent-no-op core.
//!
//! The core treats out-of-precondition calls as no-ops; drivers and tools
//! that want to know *why* a call did nothing use these wrappers instead.

pub mod act;

pub use act::{
    apply_booster, apply_buffer_click, apply_click, apply_restart, ActError,
};
