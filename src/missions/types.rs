//! Mission system types.

use serde::{Deserialize, Serialize};

/// Which lifetime metric a mission tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionType {
    Clicks,
    Points,
    Purchase,
    Upgrade,
    Time,
    Prestige,
}

/// Difficulty band, for presentation ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MissionRank {
    Bronze,
    Silver,
    Gold,
    Diamond,
    Master,
}

/// Static definition of a mission. Ids are stable across save versions.
#[derive(Debug, Clone, Copy)]
pub struct MissionDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub mission_type: MissionType,
    pub rank: MissionRank,
    /// Points granted exactly once on completion.
    pub reward: f64,
    pub target: f64,
}

/// Runtime view of a mission: live progress plus the one-way completed
/// flag. Progress is derived, never persisted.
#[derive(Debug, Clone)]
pub struct Mission {
    pub def: &'static MissionDef,
    pub progress: f64,
    pub completed: bool,
    pub completed_at: Option<i64>,
}

impl Mission {
    pub fn fraction_complete(&self) -> f64 {
        if self.def.target <= 0.0 {
            return 1.0;
        }
        (self.progress / self.def.target).min(1.0)
    }
}
