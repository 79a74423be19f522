//! Offline earnings.
//!
//! Passive production credited for time spent away, at reduced efficiency
//! and capped duration. The result is only surfaced; the player claims or
//! discards it explicitly.

use super::constants::{MAX_OFFLINE_SECONDS, MIN_OFFLINE_DISPLAY_SECONDS, OFFLINE_EFFICIENCY};

/// What the player would earn for a period away from the game.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OfflineEarnings {
    /// Actual time away, uncapped.
    pub time_away_seconds: i64,
    pub points_earned: f64,
    /// The cap applied to the credited window.
    pub max_offline_seconds: i64,
}

/// Compute offline earnings for `elapsed_seconds` away at `effective_rate`
/// points per second (passive rate with the global multiplier applied).
pub fn calculate_offline_earnings(elapsed_seconds: i64, effective_rate: f64) -> OfflineEarnings {
    if elapsed_seconds <= 0 || effective_rate <= 0.0 {
        return OfflineEarnings {
            max_offline_seconds: MAX_OFFLINE_SECONDS,
            ..OfflineEarnings::default()
        };
    }

    let credited = elapsed_seconds.min(MAX_OFFLINE_SECONDS);
    let points_earned = (credited as f64 * effective_rate * OFFLINE_EFFICIENCY).floor();

    OfflineEarnings {
        time_away_seconds: elapsed_seconds,
        points_earned,
        max_offline_seconds: MAX_OFFLINE_SECONDS,
    }
}

impl OfflineEarnings {
    /// Whether the result is worth presenting: some points were earned and
    /// the absence was long enough to not be a page reload.
    pub fn should_surface(&self) -> bool {
        self.points_earned > 0.0 && self.time_away_seconds >= MIN_OFFLINE_DISPLAY_SECONDS
    }
}
