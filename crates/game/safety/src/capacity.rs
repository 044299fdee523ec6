//! Occupancy guards for fixed-size entity pools.
//!
//! The engine keeps monsters and missiles in capacity-limited pools. These
//! guards answer "is there room for another?" from a caller-supplied
//! occupancy count, keeping a reserve free for operations that must not fail
//! mid-turn (death effects, scripted spawns).
//!
//! Rule: no spawn call without a passing guard check first.

/// Capacity configuration for one entity pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolCapacity {
    /// Hard size of the backing pool.
    pub limit: usize,
    /// Slots kept free for operations that must not fail.
    pub reserve: usize,
}

impl PoolCapacity {
    /// Usage percentage above which a pool counts as in the danger zone.
    pub const DANGER_ZONE_PERCENT: u8 = 80;

    /// Monster pool: 200 slots, 10 reserved.
    pub const MONSTERS: Self = Self {
        limit: 200,
        reserve: 10,
    };

    /// Missile pool: 500 slots, no reserve.
    pub const MISSILES: Self = Self {
        limit: 500,
        reserve: 0,
    };

    /// Builds a capacity configuration.
    ///
    /// Panics if `limit` is zero or `reserve` does not leave at least one
    /// usable slot — a misconfigured pool is a programming defect and fails
    /// at first use, not later when a spawn silently never succeeds.
    pub const fn new(limit: usize, reserve: usize) -> Self {
        assert!(limit > 0);
        assert!(reserve < limit);
        Self { limit, reserve }
    }

    /// Slots usable by ordinary spawns, `limit - reserve`.
    #[inline]
    pub const fn headroom(self) -> usize {
        self.limit - self.reserve
    }

    /// Returns true if one more entity fits without touching the reserve.
    #[inline]
    pub const fn can_add(self, occupied: usize) -> bool {
        occupied < self.headroom()
    }

    /// Returns true if `count` more entities fit without touching the reserve.
    #[inline]
    pub const fn can_add_many(self, occupied: usize, count: usize) -> bool {
        occupied.saturating_add(count) <= self.headroom()
    }

    /// Current usage as a percentage of the hard limit, saturated to 100.
    #[inline]
    pub const fn usage_percent(self, occupied: usize) -> u8 {
        let percent = occupied.saturating_mul(100) / self.limit;
        if percent > 100 { 100 } else { percent as u8 }
    }

    /// Returns true once usage crosses [`Self::DANGER_ZONE_PERCENT`].
    #[inline]
    pub const fn in_danger_zone(self, occupied: usize) -> bool {
        self.usage_percent(occupied) > Self::DANGER_ZONE_PERCENT
    }

    /// Snapshot of all guard answers for one occupancy reading.
    #[inline]
    pub const fn status(self, occupied: usize) -> PoolStatus {
        PoolStatus {
            usage_percent: self.usage_percent(occupied),
            in_danger_zone: self.in_danger_zone(occupied),
            can_add: self.can_add(occupied),
        }
    }
}

/// Guard answers for one pool at one point in time.
///
/// Computed, never stored: take a fresh status after any spawn or removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolStatus {
    /// Usage percentage, 0..=100.
    pub usage_percent: u8,
    /// Usage crossed the danger threshold.
    pub in_danger_zone: bool,
    /// One more entity fits outside the reserve.
    pub can_add: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monster_pool_refuses_spawns_into_the_reserve() {
        let pool = PoolCapacity::MONSTERS;
        // headroom = 200 - 10 = 190
        assert!(pool.can_add(0));
        assert!(pool.can_add(189));
        assert!(!pool.can_add(190));
        assert!(!pool.can_add(200));
    }

    #[test]
    fn single_and_batch_guards_agree_at_the_fencepost() {
        let pool = PoolCapacity::MONSTERS;
        for occupied in 185..=195 {
            assert_eq!(pool.can_add(occupied), pool.can_add_many(occupied, 1));
        }
    }

    #[test]
    fn batch_guard_counts_the_whole_group() {
        let pool = PoolCapacity::MISSILES;
        // headroom = 500
        assert!(pool.can_add_many(490, 10));
        assert!(!pool.can_add_many(491, 10));
        assert!(!pool.can_add_many(usize::MAX, 1));
    }

    #[test]
    fn usage_percent_saturates_at_one_hundred() {
        let pool = PoolCapacity::MONSTERS;
        assert_eq!(pool.usage_percent(0), 0);
        assert_eq!(pool.usage_percent(100), 50);
        assert_eq!(pool.usage_percent(200), 100);
        assert_eq!(pool.usage_percent(10_000), 100);
        assert_eq!(pool.usage_percent(usize::MAX), 100);
    }

    #[test]
    fn danger_zone_opens_above_eighty_percent() {
        let pool = PoolCapacity::MISSILES;
        // 400/500 = 80% — at the threshold, not past it
        assert!(!pool.in_danger_zone(400));
        // 405/500 = 81%
        assert!(pool.in_danger_zone(405));
    }

    #[test]
    fn status_snapshot_matches_individual_guards() {
        let pool = PoolCapacity::MONSTERS;
        let status = pool.status(170);
        assert_eq!(status.usage_percent, 85);
        assert!(status.in_danger_zone);
        assert!(status.can_add);

        let full = pool.status(195);
        assert!(!full.can_add);
    }

    #[test]
    fn custom_pool_construction_validates_reserve() {
        let pool = PoolCapacity::new(64, 4);
        assert_eq!(pool.headroom(), 60);
    }

    #[test]
    #[should_panic]
    fn reserve_consuming_whole_pool_is_rejected() {
        let _ = PoolCapacity::new(8, 8);
    }
}
