//! Stage and theme progression.
//!
//! Stage advancement is strictly sequential: only the immediate successor
//! of the current stage is examined on each recheck, chaining forward
//! while requirements keep being met, so stages can never be skipped.
//! Themes unlock either with a stage or independently through their own
//! requirement. Unlock sets are append-only; membership is never revoked.

pub mod data;
pub mod types;

pub use data::{find_stage, find_theme, STAGES, THEMES};
pub use types::{StageDef, StageRequirement, ThemeDef, ThemeRequirement};

use crate::missions::MetricSnapshot;
use serde::{Deserialize, Serialize};

/// Everything a recheck unlocked, for event emission.
#[derive(Debug, Default)]
pub struct UnlockReport {
    pub stages: Vec<(&'static StageDef, usize)>,
    pub themes: Vec<&'static ThemeDef>,
}

impl UnlockReport {
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty() && self.themes.is_empty()
    }
}

/// Persisted progression state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionState {
    /// Index into [`STAGES`]; monotonic non-decreasing.
    pub current_stage: usize,
    pub unlocked_stages: Vec<String>,
    pub unlocked_themes: Vec<String>,
    /// Always a member of `unlocked_themes`.
    pub active_theme: String,
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self {
            current_stage: 0,
            unlocked_stages: vec![STAGES[0].id.to_string()],
            unlocked_themes: vec![THEMES[0].id.to_string()],
            active_theme: THEMES[0].id.to_string(),
        }
    }
}

impl ProgressionState {
    pub fn current_stage_def(&self) -> &'static StageDef {
        STAGES.get(self.current_stage).unwrap_or(&STAGES[0])
    }

    pub fn next_stage_def(&self) -> Option<&'static StageDef> {
        STAGES.get(self.current_stage + 1)
    }

    pub fn is_stage_unlocked(&self, id: &str) -> bool {
        self.unlocked_stages.iter().any(|owned| owned == id)
    }

    pub fn is_theme_unlocked(&self, id: &str) -> bool {
        self.unlocked_themes.iter().any(|owned| owned == id)
    }

    /// Advance through consecutive stages whose requirements are met,
    /// unlocking each stage's listed themes along the way.
    pub fn check_stage_unlocks(&mut self, metrics: &MetricSnapshot) -> UnlockReport {
        let mut report = UnlockReport::default();

        while let Some(stage) = STAGES.get(self.current_stage + 1) {
            if !stage.requirement.is_met(metrics) {
                break;
            }
            self.current_stage += 1;
            if !self.is_stage_unlocked(stage.id) {
                self.unlocked_stages.push(stage.id.to_string());
            }
            for theme_id in stage.unlock_themes {
                if let Some(theme) = self.unlock_theme(theme_id) {
                    report.themes.push(theme);
                }
            }
            report.stages.push((stage, self.current_stage));
        }

        report
    }

    /// Evaluate every theme's own requirement, independent of the stage
    /// chain. Returns the newly unlocked themes.
    pub fn check_theme_unlocks(&mut self, metrics: &MetricSnapshot) -> Vec<&'static ThemeDef> {
        let mut newly_unlocked = Vec::new();

        for theme in &THEMES {
            if self.is_theme_unlocked(theme.id) {
                continue;
            }
            let met = match theme.requirement {
                ThemeRequirement::Free => true,
                ThemeRequirement::Stage(stage_id) => self.is_stage_unlocked(stage_id),
                ThemeRequirement::Missions(value) => metrics.completed_missions >= value,
                ThemeRequirement::Prestige(value) => metrics.prestige_level >= value,
                ThemeRequirement::Clicks(value) => metrics.total_clicks >= value,
                ThemeRequirement::Points(value) => metrics.total_points >= value,
            };
            if met {
                self.unlocked_themes.push(theme.id.to_string());
                newly_unlocked.push(theme);
            }
        }

        newly_unlocked
    }

    /// Switch the active theme. Refused unless the theme is unlocked.
    pub fn set_active_theme(&mut self, id: &str) -> bool {
        if !self.is_theme_unlocked(id) {
            return false;
        }
        self.active_theme = id.to_string();
        true
    }

    fn unlock_theme(&mut self, id: &str) -> Option<&'static ThemeDef> {
        if self.is_theme_unlocked(id) {
            return None;
        }
        let theme = find_theme(id)?;
        self.unlocked_themes.push(theme.id.to_string());
        Some(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_one_stage_and_theme() {
        let progression = ProgressionState::default();
        assert_eq!(progression.current_stage, 0);
        assert_eq!(progression.unlocked_stages, vec!["stage_1"]);
        assert_eq!(progression.unlocked_themes, vec!["theme_neon_violet"]);
        assert_eq!(progression.active_theme, "theme_neon_violet");
    }

    #[test]
    fn test_stage_advances_when_next_requirement_met() {
        let mut progression = ProgressionState::default();
        let metrics = MetricSnapshot {
            total_clicks: 100,
            ..MetricSnapshot::default()
        };

        let report = progression.check_stage_unlocks(&metrics);
        assert_eq!(report.stages.len(), 1);
        assert_eq!(progression.current_stage, 1);
        assert!(progression.is_stage_unlocked("stage_2"));
        // stage_2 brings its theme along.
        assert!(progression.is_theme_unlocked("theme_ocean"));
    }

    #[test]
    fn test_stages_cannot_be_skipped() {
        let mut progression = ProgressionState::default();
        // stage_3 (1,000 points) is satisfied but stage_2 (100 clicks)
        // is not; advancement must stall before stage_2.
        let metrics = MetricSnapshot {
            total_points: 5_000.0,
            ..MetricSnapshot::default()
        };

        let report = progression.check_stage_unlocks(&metrics);
        assert!(report.stages.is_empty());
        assert_eq!(progression.current_stage, 0);
        assert!(!progression.is_stage_unlocked("stage_3"));
    }

    #[test]
    fn test_stage_chain_advances_through_consecutive_stages() {
        let mut progression = ProgressionState::default();
        // Satisfies stage_2 (100 clicks) and stage_3 (1,000 points) but
        // not stage_4 (5 missions).
        let metrics = MetricSnapshot {
            total_clicks: 250,
            total_points: 2_000.0,
            ..MetricSnapshot::default()
        };

        let report = progression.check_stage_unlocks(&metrics);
        assert_eq!(report.stages.len(), 2);
        assert_eq!(progression.current_stage, 2);
        assert!(progression.is_stage_unlocked("stage_2"));
        assert!(progression.is_stage_unlocked("stage_3"));
        assert!(!progression.is_stage_unlocked("stage_4"));
    }

    #[test]
    fn test_theme_unlocks_independently() {
        let mut progression = ProgressionState::default();
        let metrics = MetricSnapshot {
            total_clicks: 500,
            ..MetricSnapshot::default()
        };

        let newly = progression.check_theme_unlocks(&metrics);
        assert!(newly.iter().any(|theme| theme.id == "theme_light"));
        assert!(progression.is_theme_unlocked("theme_light"));

        // Already unlocked: not reported again.
        let again = progression.check_theme_unlocks(&metrics);
        assert!(!again.iter().any(|theme| theme.id == "theme_light"));
    }

    #[test]
    fn test_set_active_theme_requires_unlock() {
        let mut progression = ProgressionState::default();
        assert!(!progression.set_active_theme("theme_gold"));
        assert_eq!(progression.active_theme, "theme_neon_violet");

        progression.unlocked_themes.push("theme_gold".to_string());
        assert!(progression.set_active_theme("theme_gold"));
        assert_eq!(progression.active_theme, "theme_gold");
    }

    #[test]
    fn test_unlocks_are_append_only() {
        let mut progression = ProgressionState::default();
        let metrics = MetricSnapshot {
            total_clicks: 100,
            ..MetricSnapshot::default()
        };
        progression.check_stage_unlocks(&metrics);
        let stages_before = progression.unlocked_stages.clone();
        let themes_before = progression.unlocked_themes.clone();

        // A later recheck with lower metrics never removes anything.
        progression.check_stage_unlocks(&MetricSnapshot::default());
        progression.check_theme_unlocks(&MetricSnapshot::default());
        assert_eq!(progression.unlocked_stages, stages_before);
        assert_eq!(progression.unlocked_themes, themes_before);
    }

    #[test]
    fn test_catalog_theme_references_resolve() {
        for stage in &STAGES {
            for theme_id in stage.unlock_themes {
                assert!(
                    find_theme(theme_id).is_some(),
                    "stage {} references unknown theme {}",
                    stage.id,
                    theme_id
                );
            }
        }
        for theme in &THEMES {
            if let ThemeRequirement::Stage(stage_id) = theme.requirement {
                assert!(
                    find_stage(stage_id).is_some(),
                    "theme {} references unknown stage {}",
                    theme.id,
                    stage_id
                );
            }
        }
    }
}
