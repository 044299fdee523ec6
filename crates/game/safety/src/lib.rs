//! Numeric safety layer for bounded game quantities.
//!
//! `game-safety` is the last stop for every damage, timer, and progression
//! value the engine computes: raw candidates go in, values the storage
//! fields, UI, network sync, and save format can all represent come out.
//! Everything here is a pure function over its arguments — no state, no
//! I/O, no randomness — so the layer is trivially reentrant and safe to
//! call from any thread.
//!
//! # Calling convention
//!
//! Do candidate arithmetic in `i64` (the [`arith`] helpers handle the
//! common shapes), then clamp through the entry point matching the value's
//! semantic category as the final step before storing it. Clamping is
//! total and silent: out-of-range candidates are routine, not errors.
pub mod arith;
pub mod bounds;
pub mod capacity;
pub mod clamp;
pub mod error;

pub use arith::{add_clamped, div_or, mul_clamped, scale_clamped, sub_clamped};
pub use bounds::{QuantityKind, ValueBounds};
pub use capacity::{PoolCapacity, PoolStatus};
pub use clamp::{
    clamp, clamp_damage, clamp_experience, clamp_hit_points, clamp_mana, clamp_timer,
};
pub use error::BoundsError;
