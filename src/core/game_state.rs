use serde::{Deserialize, Serialize};

/// The two repeatable upgrade tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeKind {
    Click,
    Auto,
}

/// Core gameplay state for the current run.
///
/// Mutated only through [`ClickerGame`](crate::core::game::ClickerGame)
/// operations; replaced wholesale on reset or prestige.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    pub score: f64,
    pub points_per_click: f64,
    pub points_per_second: f64,
    pub click_upgrade_level: u32,
    pub auto_upgrade_level: u32,
    /// Ids of owned shop items, unique, insertion-ordered.
    pub purchased_items: Vec<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            score: 0.0,
            points_per_click: 1.0,
            points_per_second: 0.0,
            click_upgrade_level: 0,
            auto_upgrade_level: 0,
            purchased_items: Vec::new(),
        }
    }
}

impl GameState {
    pub fn owns_item(&self, id: &str) -> bool {
        self.purchased_items.iter().any(|owned| owned == id)
    }
}

/// Presentation theme toggle carried in the settings block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiTheme {
    #[default]
    Dark,
    Light,
}

/// Player-tunable settings, persisted with the rest of the save.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub sound_enabled: bool,
    pub animations_enabled: bool,
    pub theme: UiTheme,
    pub confirm_purchases: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            animations_enabled: true,
            theme: UiTheme::Dark,
            confirm_purchases: true,
        }
    }
}
