//! The versioned save envelope.
//!
//! Everything persisted lives in one [`SaveData`] record. Every container
//! is `#[serde(default)]` so unknown fields are ignored and missing
//! fields fall back to component defaults, the tolerance that lets old
//! saves keep loading as the schema grows.

use crate::core::constants::SAVE_VERSION;
use crate::core::game_state::{GameSettings, GameState};
use crate::prestige::PrestigeState;
use crate::profile::{AdvancedStats, PlayerProfile};
use crate::progression::ProgressionState;
use serde::{Deserialize, Serialize};

/// Persisted mission state: only the completed ids. Progress is derived
/// and recomputed on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionsSave {
    pub completed_ids: Vec<String>,
}

/// The single persisted record containing all sub-state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    pub version: u32,
    /// Epoch ms of the last successful save.
    pub last_save_time: i64,
    /// Epoch ms of the last moment the session was active; offline
    /// earnings measure from here.
    pub last_active_time: i64,
    pub game: GameState,
    pub settings: GameSettings,
    pub profile: PlayerProfile,
    pub stats: AdvancedStats,
    pub missions: MissionsSave,
    pub prestige: PrestigeState,
    pub progression: ProgressionState,
}

/// Upgrade an envelope of any older version to the current one, one
/// version step at a time. Known fields are preserved; fields a version
/// did not have take their defaults.
pub fn migrate(mut data: SaveData) -> SaveData {
    // v1 -> v2: last_active_time introduced; backfill from the last save
    // time so offline earnings have an anchor.
    if data.version < 2 {
        if data.last_active_time == 0 {
            data.last_active_time = data.last_save_time;
        }
        data.version = 2;
    }

    debug_assert_eq!(data.version, SAVE_VERSION);
    data
}

/// Migrate only when the envelope is older than the current version.
pub fn migrate_if_needed(data: SaveData) -> SaveData {
    if data.version < SAVE_VERSION {
        migrate(data)
    } else {
        data
    }
}
