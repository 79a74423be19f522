//! Mission tracking.
//!
//! Missions move one way: `pending -> completed`. Progress is recomputed
//! from the authoritative counters on every relevant state change and
//! clamped to the target, so stored progress can never drift from actual
//! achievement. Only the set of completed ids persists.

pub mod data;
pub mod types;

pub use data::MISSIONS;
pub use types::{Mission, MissionDef, MissionRank, MissionType};

/// Snapshot of every metric missions and unlock predicates read.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricSnapshot {
    pub total_clicks: u64,
    pub total_points: f64,
    /// Sum of both upgrade levels.
    pub total_upgrades: u32,
    /// Owned shop item count.
    pub total_purchases: usize,
    /// Lifetime seconds played.
    pub total_time: u64,
    pub prestige_level: u32,
    pub completed_missions: usize,
}

impl MetricSnapshot {
    fn value_for(&self, mission_type: MissionType) -> f64 {
        match mission_type {
            MissionType::Clicks => self.total_clicks as f64,
            MissionType::Points => self.total_points,
            MissionType::Upgrade => self.total_upgrades as f64,
            MissionType::Purchase => self.total_purchases as f64,
            MissionType::Time => self.total_time as f64,
            MissionType::Prestige => self.prestige_level as f64,
        }
    }
}

/// Live mission state: the full catalog with derived progress plus the
/// persisted completed-id set.
#[derive(Debug)]
pub struct MissionTracker {
    missions: Vec<Mission>,
    completed_ids: Vec<String>,
}

impl MissionTracker {
    /// Build the runtime list from the catalog and a persisted
    /// completed-id set. Unknown ids are kept (a newer catalog may know
    /// them) but never re-granted.
    pub fn new(completed_ids: Vec<String>) -> Self {
        let missions = MISSIONS
            .iter()
            .map(|def| Mission {
                def,
                progress: 0.0,
                completed: completed_ids.iter().any(|id| id == def.id),
                completed_at: None,
            })
            .collect();
        Self {
            missions,
            completed_ids,
        }
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    pub fn completed_ids(&self) -> &[String] {
        &self.completed_ids
    }

    pub fn completed_count(&self) -> usize {
        self.missions.iter().filter(|m| m.completed).count()
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.completed_ids.iter().any(|owned| owned == id)
    }

    /// Recompute `progress = min(metric, target)` for every pending
    /// mission and complete the ones that reached their target. Returns
    /// the newly completed defs; re-running after completion is a no-op
    /// for already-completed missions.
    pub fn update_progress(
        &mut self,
        metrics: &MetricSnapshot,
        now_ms: i64,
    ) -> Vec<&'static MissionDef> {
        let mut newly_completed = Vec::new();

        for mission in &mut self.missions {
            if mission.completed {
                continue;
            }

            let value = metrics.value_for(mission.def.mission_type);
            mission.progress = value.min(mission.def.target);

            if mission.progress >= mission.def.target {
                mission.completed = true;
                mission.completed_at = Some(now_ms);
                self.completed_ids.push(mission.def.id.to_string());
                newly_completed.push(mission.def);
            }
        }

        newly_completed
    }

    /// Forget all completions and progress (full game reset).
    pub fn reset(&mut self) {
        *self = Self::new(Vec::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clicks_metrics(clicks: u64) -> MetricSnapshot {
        MetricSnapshot {
            total_clicks: clicks,
            ..MetricSnapshot::default()
        }
    }

    #[test]
    fn test_progress_clamped_to_target() {
        let mut tracker = MissionTracker::new(Vec::new());
        tracker.update_progress(&clicks_metrics(7), 0);

        let mission = tracker
            .missions()
            .iter()
            .find(|m| m.def.id == "first_clicks")
            .unwrap();
        assert_eq!(mission.progress, 7.0);
        assert!(!mission.completed);

        // Overshooting clamps progress at the target.
        let mut tracker = MissionTracker::new(Vec::new());
        let completed = tracker.update_progress(&clicks_metrics(50), 0);
        assert!(completed.iter().any(|def| def.id == "first_clicks"));
        let mission = tracker
            .missions()
            .iter()
            .find(|m| m.def.id == "first_clicks")
            .unwrap();
        assert_eq!(mission.progress, 10.0);
        assert!(mission.completed);
    }

    #[test]
    fn test_completion_is_one_way_and_once() {
        let mut tracker = MissionTracker::new(Vec::new());
        let first = tracker.update_progress(&clicks_metrics(10), 1);
        assert_eq!(first.len(), 1);
        assert!(tracker.is_completed("first_clicks"));

        // Re-running never re-grants or un-completes.
        let second = tracker.update_progress(&clicks_metrics(10), 2);
        assert!(second.is_empty());
        assert_eq!(
            tracker
                .completed_ids()
                .iter()
                .filter(|id| *id == "first_clicks")
                .count(),
            1
        );
    }

    #[test]
    fn test_persisted_completions_not_regranted() {
        let mut tracker = MissionTracker::new(vec!["first_clicks".to_string()]);
        let completed = tracker.update_progress(&clicks_metrics(10_000), 0);
        assert!(!completed.iter().any(|def| def.id == "first_clicks"));
        // Other click missions still complete normally.
        assert!(completed.iter().any(|def| def.id == "click_beginner"));
    }

    #[test]
    fn test_metric_sources() {
        let metrics = MetricSnapshot {
            total_clicks: 1,
            total_points: 2.0,
            total_upgrades: 3,
            total_purchases: 4,
            total_time: 5,
            prestige_level: 6,
            completed_missions: 0,
        };
        assert_eq!(metrics.value_for(MissionType::Clicks), 1.0);
        assert_eq!(metrics.value_for(MissionType::Points), 2.0);
        assert_eq!(metrics.value_for(MissionType::Upgrade), 3.0);
        assert_eq!(metrics.value_for(MissionType::Purchase), 4.0);
        assert_eq!(metrics.value_for(MissionType::Time), 5.0);
        assert_eq!(metrics.value_for(MissionType::Prestige), 6.0);
    }

    #[test]
    fn test_reset_clears_completions() {
        let mut tracker = MissionTracker::new(Vec::new());
        tracker.update_progress(&clicks_metrics(100), 0);
        assert!(tracker.completed_count() > 0);

        tracker.reset();
        assert_eq!(tracker.completed_count(), 0);
        assert!(tracker.completed_ids().is_empty());
    }

    #[test]
    fn test_catalog_ids_unique() {
        for (i, a) in MISSIONS.iter().enumerate() {
            for b in &MISSIONS[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate mission id {}", a.id);
            }
        }
    }
}
