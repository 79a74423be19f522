// Save format
pub const SAVE_VERSION: u32 = 2;
pub const MASTER_SAVE_KEY: &str = "save";

// Legacy layout: one key per sub-state, predating the single envelope.
pub const LEGACY_STATE_KEY: &str = "state";
pub const LEGACY_SETTINGS_KEY: &str = "settings";
pub const LEGACY_PROFILE_KEY: &str = "profile";
pub const LEGACY_STATS_KEY: &str = "stats";
pub const LEGACY_MISSIONS_KEY: &str = "missions";
pub const LEGACY_PRESTIGE_KEY: &str = "prestige";
pub const LEGACY_PROGRESSION_KEY: &str = "progression";
pub const LEGACY_KEYS: [&str; 7] = [
    LEGACY_STATE_KEY,
    LEGACY_SETTINGS_KEY,
    LEGACY_PROFILE_KEY,
    LEGACY_STATS_KEY,
    LEGACY_MISSIONS_KEY,
    LEGACY_PRESTIGE_KEY,
    LEGACY_PROGRESSION_KEY,
];

// Upgrade pricing: price = floor(base * multiplier^level)
pub const CLICK_UPGRADE_BASE_PRICE: f64 = 10.0;
pub const CLICK_UPGRADE_PRICE_MULTIPLIER: f64 = 1.5;
pub const CLICK_UPGRADE_EFFECT: f64 = 1.0;
pub const AUTO_UPGRADE_BASE_PRICE: f64 = 50.0;
pub const AUTO_UPGRADE_PRICE_MULTIPLIER: f64 = 1.8;
pub const AUTO_UPGRADE_EFFECT: f64 = 1.0;

// Passive production period (host timer)
pub const AUTO_TICK_INTERVAL_MS: u64 = 1000;

// Profile leveling: points required for each level, index 0 = level 1.
// Beyond the last entry each further level doubles the previous threshold.
pub const LEVEL_THRESHOLDS: [f64; 13] = [
    0.0,
    100.0,
    500.0,
    1_000.0,
    2_500.0,
    5_000.0,
    10_000.0,
    25_000.0,
    50_000.0,
    100_000.0,
    250_000.0,
    500_000.0,
    1_000_000.0,
];
pub const MAX_LEVEL: u32 = 100;

// Prestige requirement: base * multiplier^level
pub const PRESTIGE_BASE_REQUIREMENT: f64 = 100_000.0;
pub const PRESTIGE_REQUIREMENT_MULTIPLIER: f64 = 2.0;
pub const MAX_PRESTIGE_HISTORY: usize = 20;

// Session stats
pub const MAX_SESSION_HISTORY: usize = 10;
pub const MIN_SESSION_RECORD_SECONDS: u64 = 10;
// A click within this window of the previous one counts as active play time.
pub const ACTIVE_CLICK_WINDOW_MS: i64 = 2000;

// Offline earnings
pub const MAX_OFFLINE_SECONDS: i64 = 8 * 60 * 60;
pub const OFFLINE_EFFICIENCY: f64 = 0.5;
pub const MIN_OFFLINE_DISPLAY_SECONDS: i64 = 60;

// Autosave cadence
pub const AUTOSAVE_INTERVAL_SECONDS: u64 = 30;

// Profile defaults
pub const DEFAULT_PLAYER_NAME: &str = "Player";
pub const DEFAULT_AVATAR: &str = "star";
