//! Pure pricing and leveling math.
//!
//! Upgrade prices grow geometrically with the owned level; profile levels
//! walk an ascending threshold table that extends by doubling past its
//! last entry. Everything here is deterministic and stateless.

use super::constants::*;

/// Price curve for a repeatable upgrade.
#[derive(Debug, Clone, Copy)]
pub struct UpgradeConfig {
    pub base_price: f64,
    pub price_multiplier: f64,
    /// Flat rate increase granted per purchased level.
    pub effect: f64,
}

pub const CLICK_UPGRADE: UpgradeConfig = UpgradeConfig {
    base_price: CLICK_UPGRADE_BASE_PRICE,
    price_multiplier: CLICK_UPGRADE_PRICE_MULTIPLIER,
    effect: CLICK_UPGRADE_EFFECT,
};

pub const AUTO_UPGRADE: UpgradeConfig = UpgradeConfig {
    base_price: AUTO_UPGRADE_BASE_PRICE,
    price_multiplier: AUTO_UPGRADE_PRICE_MULTIPLIER,
    effect: AUTO_UPGRADE_EFFECT,
};

/// Price of the next purchase of an upgrade currently at `level`.
pub fn upgrade_price(base: f64, multiplier: f64, level: u32) -> f64 {
    (base * multiplier.powi(level as i32)).floor()
}

/// Price of the next purchase for a configured upgrade.
pub fn config_price(config: &UpgradeConfig, level: u32) -> f64 {
    upgrade_price(config.base_price, config.price_multiplier, level)
}

/// Profile level for a lifetime point total.
///
/// Monotonic in `total` and independent of call history: the same total
/// always yields the same level.
pub fn level_for_total_points(total: f64) -> u32 {
    let mut level = 1;
    for (i, &threshold) in LEVEL_THRESHOLDS.iter().enumerate() {
        if total >= threshold {
            level = i as u32 + 1;
        } else {
            return level;
        }
    }

    // Past the table: each further level doubles the previous threshold.
    let mut threshold = LEVEL_THRESHOLDS[LEVEL_THRESHOLDS.len() - 1];
    while level < MAX_LEVEL {
        threshold *= 2.0;
        if total >= threshold {
            level += 1;
        } else {
            break;
        }
    }
    level
}

/// Points required to hold `level`. Inverse of [`level_for_total_points`].
pub fn threshold_for_level(level: u32) -> f64 {
    if level == 0 {
        return 0.0;
    }
    let len = LEVEL_THRESHOLDS.len() as u32;
    if level <= len {
        return LEVEL_THRESHOLDS[(level - 1) as usize];
    }
    LEVEL_THRESHOLDS[(len - 1) as usize] * 2f64.powi((level - len) as i32)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_price_non_decreasing_in_level(
            base in 1.0f64..1000.0,
            multiplier in 1.0f64..3.0,
            level in 0u32..40,
        ) {
            prop_assert!(
                upgrade_price(base, multiplier, level + 1)
                    >= upgrade_price(base, multiplier, level)
            );
        }

        #[test]
        fn prop_level_monotonic_in_total(a in 0.0f64..1e10, b in 0.0f64..1e10) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(level_for_total_points(lo) <= level_for_total_points(hi));
        }

        #[test]
        fn prop_level_never_overshoots_points(total in 0.0f64..1e10) {
            let level = level_for_total_points(total);
            prop_assert!(threshold_for_level(level) <= total);
        }

        #[test]
        fn prop_threshold_round_trip(level in 1u32..MAX_LEVEL) {
            // The exact threshold for a level must map back to that level.
            prop_assert_eq!(level_for_total_points(threshold_for_level(level)), level);
        }
    }
}
