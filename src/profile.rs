//! Player identity and lifetime statistics.

use crate::core::constants::{DEFAULT_AVATAR, DEFAULT_PLAYER_NAME, MAX_SESSION_HISTORY};
use serde::{Deserialize, Serialize};

/// Who the player is plus the lifetime counters that drive leveling,
/// missions and the prestige gate. Survives prestige only partially:
/// name and avatar are kept, the counters reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerProfile {
    pub name: String,
    pub avatar: String,
    pub total_clicks: u64,
    pub total_points_earned: f64,
    pub total_time_played: u64,
    /// Derived from `total_points_earned`; reconciled on load, never
    /// authoritative on its own.
    pub level: u32,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            name: DEFAULT_PLAYER_NAME.to_string(),
            avatar: DEFAULT_AVATAR.to_string(),
            total_clicks: 0,
            total_points_earned: 0.0,
            total_time_played: 0,
            level: 1,
        }
    }
}

impl PlayerProfile {
    /// Set the display name, falling back to the default when blank.
    pub fn set_name(&mut self, name: &str) {
        let trimmed = name.trim();
        self.name = if trimmed.is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            trimmed.to_string()
        };
    }

    pub fn set_avatar(&mut self, avatar: &str) {
        self.avatar = avatar.to_string();
    }
}

/// One finished play session, kept in a short history ring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSession {
    /// Session start timestamp (epoch ms), doubles as the id.
    pub id: i64,
    pub duration: u64,
    pub clicks: u64,
    pub points_earned: f64,
}

/// Detailed lifetime counters, independent of the profile's. Unlike the
/// profile these survive prestige untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedStats {
    pub total_clicks: u64,
    /// Most clicks landed within a single second.
    pub best_click_streak: u32,
    pub total_points_earned: f64,
    pub manual_points_earned: f64,
    pub auto_points_earned: f64,
    pub total_time_played: u64,
    /// Seconds spent actively clicking (clicks in quick succession).
    pub active_time: u64,
    pub total_sessions: u64,
    /// Chronological, capped; oldest entries evicted first.
    pub session_history: Vec<GameSession>,
}

impl AdvancedStats {
    /// Append a session, evicting the oldest past the cap.
    pub fn record_session(&mut self, session: GameSession) {
        self.session_history.push(session);
        if self.session_history.len() > MAX_SESSION_HISTORY {
            let excess = self.session_history.len() - MAX_SESSION_HISTORY;
            self.session_history.drain(..excess);
        }
    }
}
