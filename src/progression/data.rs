//! Static stage and theme catalogs.

use super::types::{StageDef, StageRequirement, ThemeDef, ThemeRequirement};

pub static STAGES: [StageDef; 10] = [
    StageDef {
        id: "stage_1",
        name: "Novice",
        description: "You begin your clicking journey",
        requirement: StageRequirement::Points(0.0),
        unlock_themes: &["theme_neon_violet"],
    },
    StageDef {
        id: "stage_2",
        name: "Apprentice",
        description: "You have shown dedication",
        requirement: StageRequirement::Clicks(100),
        unlock_themes: &["theme_ocean"],
    },
    StageDef {
        id: "stage_3",
        name: "Practitioner",
        description: "Your skills are improving",
        requirement: StageRequirement::Points(1_000.0),
        unlock_themes: &["theme_forest"],
    },
    StageDef {
        id: "stage_4",
        name: "Expert",
        description: "You master the art of the click",
        requirement: StageRequirement::Missions(5),
        unlock_themes: &["theme_sunset"],
    },
    StageDef {
        id: "stage_5",
        name: "Veteran",
        description: "Your experience is remarkable",
        requirement: StageRequirement::Points(10_000.0),
        unlock_themes: &["theme_cherry"],
    },
    StageDef {
        id: "stage_6",
        name: "Master",
        description: "You have reached mastery",
        requirement: StageRequirement::Prestige(1),
        unlock_themes: &["theme_gold"],
    },
    StageDef {
        id: "stage_7",
        name: "Legend",
        description: "Your name will be remembered",
        requirement: StageRequirement::Missions(15),
        unlock_themes: &["theme_galaxy"],
    },
    StageDef {
        id: "stage_8",
        name: "Mythic",
        description: "You have transcended the limits",
        requirement: StageRequirement::Prestige(3),
        unlock_themes: &["theme_rainbow"],
    },
    StageDef {
        id: "stage_9",
        name: "Immortal",
        description: "Your power is boundless",
        requirement: StageRequirement::Points(500_000.0),
        unlock_themes: &["theme_void"],
    },
    StageDef {
        id: "stage_10",
        name: "Click Deity",
        description: "You have achieved absolute perfection",
        requirement: StageRequirement::Prestige(10),
        unlock_themes: &["theme_divine"],
    },
];

pub static THEMES: [ThemeDef; 11] = [
    ThemeDef {
        id: "theme_neon_violet",
        name: "Neon Violet",
        description: "The classic look",
        requirement: ThemeRequirement::Free,
    },
    ThemeDef {
        id: "theme_ocean",
        name: "Deep Ocean",
        description: "Dive into the depths",
        requirement: ThemeRequirement::Stage("stage_2"),
    },
    ThemeDef {
        id: "theme_forest",
        name: "Enchanted Forest",
        description: "The magic of nature",
        requirement: ThemeRequirement::Stage("stage_3"),
    },
    ThemeDef {
        id: "theme_sunset",
        name: "Sunset",
        description: "Warm dusk colors",
        requirement: ThemeRequirement::Stage("stage_4"),
    },
    ThemeDef {
        id: "theme_cherry",
        name: "Cherry Blossom",
        description: "Delicate spring beauty",
        requirement: ThemeRequirement::Stage("stage_5"),
    },
    ThemeDef {
        id: "theme_gold",
        name: "Imperial Gold",
        description: "The luxury of champions",
        requirement: ThemeRequirement::Stage("stage_6"),
    },
    ThemeDef {
        id: "theme_galaxy",
        name: "Galaxy",
        description: "Colors of the cosmos",
        requirement: ThemeRequirement::Stage("stage_7"),
    },
    ThemeDef {
        id: "theme_rainbow",
        name: "Rainbow",
        description: "The full spectrum",
        requirement: ThemeRequirement::Stage("stage_8"),
    },
    ThemeDef {
        id: "theme_void",
        name: "Absolute Void",
        description: "The deepest dark",
        requirement: ThemeRequirement::Stage("stage_9"),
    },
    ThemeDef {
        id: "theme_divine",
        name: "Divine",
        description: "Celestial light",
        requirement: ThemeRequirement::Stage("stage_10"),
    },
    ThemeDef {
        id: "theme_light",
        name: "Light Mode",
        description: "A bright theme for daytime",
        requirement: ThemeRequirement::Clicks(500),
    },
];

/// Look up a theme by id.
pub fn find_theme(id: &str) -> Option<&'static ThemeDef> {
    THEMES.iter().find(|theme| theme.id == id)
}

/// Look up a stage by id.
pub fn find_stage(id: &str) -> Option<&'static StageDef> {
    STAGES.iter().find(|stage| stage.id == id)
}
