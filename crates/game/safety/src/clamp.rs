//! Per-category clamp entry points.
//!
//! One function per semantic category, all sharing the
//! [`ValueBounds::clamp`] algorithm. Combat, timer, and progression code
//! call the entry point matching the quantity it just computed as the last
//! step before storing the value.
//!
//! The `i64` parameter is the calling convention, not a convenience: do the
//! candidate arithmetic (additions, multiplier application) in `i64` so it
//! cannot wrap before the clamp sees it. The clamp cannot repair a value
//! that already wrapped upstream.

use crate::bounds::{QuantityKind, ValueBounds};

/// Clamps a raw value into the bounds of the given category.
///
/// Table-driven form of the per-category entry points below; useful when the
/// category is data rather than known at the call site.
#[inline]
pub const fn clamp(kind: QuantityKind, raw: i64) -> i32 {
    kind.bounds().clamp(raw)
}

/// Clamps a computed damage value into [`ValueBounds::DAMAGE`].
///
/// ```
/// use game_safety::clamp_damage;
///
/// // A critical multiplier pushing damage past the cap is routine input.
/// assert_eq!(clamp_damage(15_000), 9_999);
/// assert_eq!(clamp_damage(250), 250);
/// ```
#[inline]
pub const fn clamp_damage(raw: i64) -> i32 {
    ValueBounds::DAMAGE.clamp(raw)
}

/// Clamps a countdown or duration into [`ValueBounds::TIMER_TICKS`].
///
/// ```
/// use game_safety::clamp_timer;
///
/// // A timer that underflowed past expiry floors at zero.
/// assert_eq!(clamp_timer(-5), 0);
/// ```
#[inline]
pub const fn clamp_timer(raw: i64) -> i32 {
    ValueBounds::TIMER_TICKS.clamp(raw)
}

/// Clamps a health value into [`ValueBounds::HIT_POINTS`].
#[inline]
pub const fn clamp_hit_points(raw: i64) -> i32 {
    ValueBounds::HIT_POINTS.clamp(raw)
}

/// Clamps a mana value into [`ValueBounds::MANA`].
#[inline]
pub const fn clamp_mana(raw: i64) -> i32 {
    ValueBounds::MANA.clamp(raw)
}

/// Clamps an experience total or delta into [`ValueBounds::EXPERIENCE`].
#[inline]
pub const fn clamp_experience(raw: i64) -> i32 {
    ValueBounds::EXPERIENCE.clamp(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overdriven_damage_saturates_at_cap() {
        // 15000 raw damage → 9999 stored
        assert_eq!(clamp_damage(15_000), 9_999);
    }

    #[test]
    fn underflowed_timer_floors_at_zero() {
        // -5 remaining ticks → 0 stored
        assert_eq!(clamp_timer(-5), 0);
    }

    #[test]
    fn generic_form_matches_dedicated_entry_points() {
        let samples = [i64::MIN, -7, 0, 1_234, 99_999, i64::MAX];
        for &raw in &samples {
            assert_eq!(clamp(QuantityKind::Damage, raw), clamp_damage(raw));
            assert_eq!(clamp(QuantityKind::TimerTicks, raw), clamp_timer(raw));
            assert_eq!(clamp(QuantityKind::HitPoints, raw), clamp_hit_points(raw));
            assert_eq!(clamp(QuantityKind::Mana, raw), clamp_mana(raw));
            assert_eq!(clamp(QuantityKind::Experience, raw), clamp_experience(raw));
        }
    }

    #[test]
    fn experience_keeps_headroom_below_i32_max() {
        let capped = clamp_experience(i64::MAX);
        assert_eq!(capped, 2_000_000_000);
        // Room for a downstream display offset without overflow
        assert!(capped.checked_add(ValueBounds::HEADROOM).is_some());
    }

    #[test]
    fn clamp_usable_in_const_context() {
        const BASE_REGEN: i32 = clamp_mana(120);
        assert_eq!(BASE_REGEN, 120);
    }
}
