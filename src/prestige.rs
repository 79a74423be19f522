//! Prestige: a voluntary deep reset that trades current run progress for
//! a permanently higher requirement curve, while historical totals only
//! ever grow.

use crate::core::constants::{
    MAX_PRESTIGE_HISTORY, PRESTIGE_BASE_REQUIREMENT, PRESTIGE_REQUIREMENT_MULTIPLIER,
};
use serde::{Deserialize, Serialize};

/// One performed prestige, newest kept first in the history log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrestigeRecord {
    /// Prestige number (1, 2, 3...).
    pub number: u32,
    /// Epoch ms when it happened.
    pub timestamp: i64,
    pub points_at_prestige: f64,
    pub clicks_at_prestige: u64,
}

/// Prestige level plus cumulative historical totals. All counters are
/// monotonic; only a full game reset zeroes them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrestigeState {
    pub level: u32,
    pub total_historic_points: f64,
    pub total_historic_clicks: u64,
    pub total_historic_items: u64,
    pub total_historic_missions: u64,
    /// Newest first, capped at [`MAX_PRESTIGE_HISTORY`].
    pub history: Vec<PrestigeRecord>,
}

/// Lifetime points required to prestige from `level`.
pub fn required_points(level: u32) -> f64 {
    PRESTIGE_BASE_REQUIREMENT * PRESTIGE_REQUIREMENT_MULTIPLIER.powi(level as i32)
}

/// Whether the player's lifetime earnings meet the current requirement.
pub fn can_prestige(prestige: &PrestigeState, total_points_earned: f64) -> bool {
    total_points_earned >= required_points(prestige.level)
}

impl PrestigeState {
    /// Push a record at the front of the log, evicting the oldest past
    /// the cap.
    pub fn push_record(&mut self, record: PrestigeRecord) {
        self.history.insert(0, record);
        self.history.truncate(MAX_PRESTIGE_HISTORY);
    }

    pub fn requirement(&self) -> f64 {
        required_points(self.level)
    }
}
