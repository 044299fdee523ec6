//! Limit-constant table and the clamp primitive.
//!
//! Every bounded quantity in the simulation (damage, timers, resource pools,
//! experience) belongs to a [`QuantityKind`] with fixed [`ValueBounds`].
//! Upstream logic computes a raw candidate in `i64`, and [`ValueBounds::clamp`]
//! maps it onto the representable range as the final step before the value is
//! stored or displayed.

use crate::error::BoundsError;

// ============================================================================
// Quantity Categories
// ============================================================================

/// Semantic category of a bounded game quantity.
///
/// Each category owns one [`ValueBounds`] entry. Callers pick the category
/// that matches what the value *means*, not where it was computed: a spell's
/// burn duration is `TimerTicks` even though the damage formula produced it.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum QuantityKind {
    /// Damage dealt by one hit, before application to a resource pool.
    Damage,
    /// Countdown and duration values measured in scheduler ticks.
    TimerTicks,
    /// Health pool values (current and maximum).
    HitPoints,
    /// Mana pool values (current and maximum).
    Mana,
    /// Accumulated experience and experience deltas.
    Experience,
}

impl QuantityKind {
    /// Total number of categories.
    pub const COUNT: usize = 5;

    /// Returns all categories in declaration order.
    pub const fn all() -> [QuantityKind; Self::COUNT] {
        [
            QuantityKind::Damage,
            QuantityKind::TimerTicks,
            QuantityKind::HitPoints,
            QuantityKind::Mana,
            QuantityKind::Experience,
        ]
    }

    /// Returns the bounds entry for this category.
    #[inline]
    pub const fn bounds(self) -> ValueBounds {
        match self {
            QuantityKind::Damage => ValueBounds::DAMAGE,
            QuantityKind::TimerTicks => ValueBounds::TIMER_TICKS,
            QuantityKind::HitPoints => ValueBounds::HIT_POINTS,
            QuantityKind::Mana => ValueBounds::MANA,
            QuantityKind::Experience => ValueBounds::EXPERIENCE,
        }
    }
}

// ============================================================================
// Bounds
// ============================================================================

/// Inclusive range a quantity must lie in after clamping.
///
/// Bounds are chosen to fit the 32-bit signed fields the simulation stores
/// bounded quantities in, with headroom below `i32::MAX` so a downstream
/// addition of a small fixed constant (a display offset, a rounding nudge)
/// cannot overflow the storage field.
///
/// # Design Rationale
///
/// Different categories require different ranges:
/// - **Damage**: [0, 9999] matches what combat math and the damage readout
///   can represent; a critical multiplier routinely lands above this and is
///   expected to saturate.
/// - **Timer ticks**: [0, 65535] — a u16-width range; a negative countdown
///   has no game meaning, so the floor is zero.
/// - **Hit points / mana**: [0, 32767] — pools are persisted in
///   int16-compatible save fields.
/// - **Experience**: [0, 2_000_000_000] — wide, but still ~7% short of
///   `i32::MAX`.
///
/// # Usage
/// ```
/// use game_safety::{QuantityKind, ValueBounds};
///
/// let raw: i64 = 15_000; // critical hit, legitimately out of range
/// assert_eq!(ValueBounds::DAMAGE.clamp(raw), 9_999);
/// assert_eq!(QuantityKind::Damage.bounds().clamp(42), 42);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueBounds {
    pub min: i32,
    pub max: i32,
}

impl ValueBounds {
    /// Minimum distance kept between `max` and `i32::MAX`.
    ///
    /// Guarantees that `clamped + small_constant` stays representable for any
    /// downstream constant up to this size.
    pub const HEADROOM: i32 = 4_096;

    /// Damage bounds [0, 9999].
    pub const DAMAGE: Self = Self { min: 0, max: 9_999 };

    /// Timer bounds [0, 65535]. Negative countdowns clamp to zero.
    pub const TIMER_TICKS: Self = Self { min: 0, max: 65_535 };

    /// Hit point bounds [0, 32767], int16-compatible for save fields.
    pub const HIT_POINTS: Self = Self { min: 0, max: 32_767 };

    /// Mana bounds [0, 32767], int16-compatible for save fields.
    pub const MANA: Self = Self { min: 0, max: 32_767 };

    /// Experience bounds [0, 2_000_000_000].
    pub const EXPERIENCE: Self = Self {
        min: 0,
        max: 2_000_000_000,
    };

    /// Builds bounds at runtime, rejecting misconfiguration.
    ///
    /// An inverted range or a `max` inside the headroom margin is a
    /// programming defect, surfaced eagerly here rather than silently
    /// clamped against later.
    pub const fn new(min: i32, max: i32) -> Result<Self, BoundsError> {
        if min > max {
            return Err(BoundsError::InvertedRange { min, max });
        }
        if max > i32::MAX - Self::HEADROOM {
            return Err(BoundsError::InsufficientHeadroom { max });
        }
        Ok(Self { min, max })
    }

    /// Clamps a raw candidate value into this range.
    ///
    /// Total over all of `i64`: below `min` returns `min`, above `max`
    /// returns `max`, anything in between passes through unchanged. The
    /// widened parameter type is deliberate — callers must perform their
    /// pre-clamp arithmetic in `i64`, where no product or sum of 32-bit
    /// game values can wrap, and the compiler holds them to it.
    ///
    /// Out-of-range input is the routine case this function exists for,
    /// not an anomaly; nothing is logged or signaled.
    #[inline]
    pub const fn clamp(self, raw: i64) -> i32 {
        if raw < self.min as i64 {
            self.min
        } else if raw > self.max as i64 {
            self.max
        } else {
            // Narrowing is lossless: raw lies between two i32 bounds.
            raw as i32
        }
    }

    /// Returns true if `value` already lies within this range.
    #[inline]
    pub const fn contains(self, value: i64) -> bool {
        value >= self.min as i64 && value <= self.max as i64
    }
}

// Every built-in table entry must be well-formed: non-inverted and with
// headroom under i32::MAX. A bad entry fails the build, not the game.
const _: () = {
    let table = QuantityKind::all();
    let mut i = 0;
    while i < table.len() {
        let bounds = table[i].bounds();
        assert!(bounds.min <= bounds.max);
        assert!(bounds.max <= i32::MAX - ValueBounds::HEADROOM);
        i += 1;
    }
};
