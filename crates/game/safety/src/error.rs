//! Misconfiguration errors for runtime-built bounds.
//!
//! The built-in [`ValueBounds`](crate::ValueBounds) table is validated at
//! compile time, so these errors can only come from bounds assembled at
//! runtime (modding hooks, balance experiments). They indicate a programming
//! defect, not a recoverable game condition.

/// Rejected [`ValueBounds`](crate::ValueBounds) configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoundsError {
    /// `min` exceeds `max`; clamping against such a range is nonsensical.
    #[error("inverted bounds: min {min} exceeds max {max}")]
    InvertedRange { min: i32, max: i32 },

    /// `max` sits inside the headroom margin below `i32::MAX`, so a
    /// downstream offset addition could overflow the storage field.
    #[error("bounds max {max} leaves less than the required headroom below i32::MAX")]
    InsufficientHeadroom { max: i32 },
}
