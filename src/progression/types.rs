//! Stage and theme catalog types.

use crate::missions::MetricSnapshot;

/// Requirement gating a stage, evaluated against lifetime metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StageRequirement {
    Points(f64),
    Clicks(u64),
    Missions(usize),
    Prestige(u32),
    Purchases(usize),
    Upgrades(u32),
}

impl StageRequirement {
    pub fn is_met(&self, metrics: &MetricSnapshot) -> bool {
        match *self {
            StageRequirement::Points(value) => metrics.total_points >= value,
            StageRequirement::Clicks(value) => metrics.total_clicks >= value,
            StageRequirement::Missions(value) => metrics.completed_missions >= value,
            StageRequirement::Prestige(value) => metrics.prestige_level >= value,
            StageRequirement::Purchases(value) => metrics.total_purchases >= value,
            StageRequirement::Upgrades(value) => metrics.total_upgrades >= value,
        }
    }
}

/// One entry in the ordered stage catalog.
#[derive(Debug, Clone, Copy)]
pub struct StageDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub requirement: StageRequirement,
    /// Theme ids unlocked together with the stage.
    pub unlock_themes: &'static [&'static str],
}

/// Requirement gating a theme, independent of the stage chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThemeRequirement {
    Free,
    /// Unlocked once the named stage is unlocked.
    Stage(&'static str),
    Missions(usize),
    Prestige(u32),
    Clicks(u64),
    Points(f64),
}

/// A selectable cosmetic theme.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub requirement: ThemeRequirement,
}
