//! Widened arithmetic that clamps as it computes.
//!
//! These helpers discharge the wide-intermediate obligation of the clamp
//! calling convention in one step: operands are widened to `i64`, where no
//! sum or product of two `i32` game values can wrap, and the result is
//! clamped into the caller's bounds before narrowing back.
//!
//! Formulas:
//! - `add_clamped(b, x, y)` = clamp(x + y)
//! - `mul_clamped(b, x, y)` = clamp(x × y)
//! - `scale_clamped(b, x, p)` = clamp((x × p) / 100)

use crate::bounds::ValueBounds;

/// Adds two values and clamps the sum into `bounds`.
#[inline]
pub const fn add_clamped(bounds: ValueBounds, a: i32, b: i32) -> i32 {
    bounds.clamp(a as i64 + b as i64)
}

/// Subtracts `b` from `a` and clamps the difference into `bounds`.
///
/// With a zero-floored category this is the usual "apply damage to a pool"
/// shape: the result never goes negative.
#[inline]
pub const fn sub_clamped(bounds: ValueBounds, a: i32, b: i32) -> i32 {
    bounds.clamp(a as i64 - b as i64)
}

/// Multiplies two values and clamps the product into `bounds`.
#[inline]
pub const fn mul_clamped(bounds: ValueBounds, a: i32, b: i32) -> i32 {
    bounds.clamp(a as i64 * b as i64)
}

/// Scales a value by an integer percentage and clamps into `bounds`.
///
/// `percent` is the full multiplier: 150 means ×1.5, 100 is identity,
/// 50 halves. Truncating integer division, matching the rest of the
/// engine's fixed-point style.
///
/// ```
/// use game_safety::{ValueBounds, scale_clamped};
///
/// // Critical hit: 80 damage × 250% = 200
/// assert_eq!(scale_clamped(ValueBounds::DAMAGE, 80, 250), 200);
/// // A huge multiplier saturates instead of wrapping
/// assert_eq!(scale_clamped(ValueBounds::DAMAGE, 9_000, 1_000), 9_999);
/// ```
#[inline]
pub const fn scale_clamped(bounds: ValueBounds, value: i32, percent: i32) -> i32 {
    bounds.clamp(value as i64 * percent as i64 / 100)
}

/// Divides `a` by `b`, returning `default` when `b` is zero.
///
/// The quotient is computed in `i64` and saturated on narrowing, so
/// `i32::MIN / -1` yields `i32::MAX` rather than overflowing.
#[inline]
pub const fn div_or(a: i32, b: i32, default: i32) -> i32 {
    if b == 0 {
        return default;
    }
    let quotient = a as i64 / b as i64;
    if quotient > i32::MAX as i64 {
        i32::MAX
    } else {
        quotient as i32
    }
}
