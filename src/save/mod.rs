//! Central save manager.
//!
//! Owns a [`KeyValueStore`] and speaks only in [`SaveData`] envelopes.
//! Loading upgrades older envelopes in place, assembles an envelope from
//! the legacy multi-key layout when no envelope exists yet, and treats
//! any malformed stored data as absent. Nothing in here panics: faults
//! are logged and degrade to `None`/`false`.

pub mod schema;
pub mod store;

pub use schema::{MissionsSave, SaveData};
pub use store::{FileStore, KeyValueStore, MemoryStore};

use crate::core::constants::*;
use chrono::Utc;
use std::io;

pub struct SaveManager {
    store: Box<dyn KeyValueStore>,
}

impl SaveManager {
    /// Save manager over the platform config directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self::with_store(Box::new(FileStore::new()?)))
    }

    /// Save manager over any store; tests inject a [`MemoryStore`].
    pub fn with_store(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the envelope, upgrading or migrating as needed. `None` means
    /// no usable data exists and the caller should start from defaults.
    pub fn load(&mut self) -> Option<SaveData> {
        let Some(raw) = self.store.get(MASTER_SAVE_KEY) else {
            return self.migrate_legacy_layout();
        };

        match serde_json::from_str::<SaveData>(&raw) {
            Ok(data) if data.version < SAVE_VERSION => {
                log::info!(
                    "upgrading save from v{} to v{}",
                    data.version,
                    SAVE_VERSION
                );
                let upgraded = schema::migrate(data);
                self.persist(&upgraded);
                Some(upgraded)
            }
            Ok(data) => Some(data),
            Err(err) => {
                log::warn!("discarding malformed save: {err}");
                None
            }
        }
    }

    /// Persist an envelope, stamping version and save time. Returns
    /// whether the write succeeded; gameplay continues in memory either
    /// way.
    pub fn save(&mut self, mut data: SaveData) -> bool {
        data.version = SAVE_VERSION;
        data.last_save_time = Utc::now().timestamp_millis();
        self.persist(&data)
    }

    /// The full envelope as a transportable text blob.
    pub fn export(&mut self) -> Option<String> {
        let data = self.load()?;
        serde_json::to_string_pretty(&data).ok()
    }

    /// Replace stored data with an imported blob. Rejected, leaving the
    /// store untouched, unless the blob carries the required sub-objects.
    pub fn import(&mut self, blob: &str) -> bool {
        let value: serde_json::Value = match serde_json::from_str(blob) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("import rejected, not valid JSON: {err}");
                return false;
            }
        };

        let has_required = ["game", "profile", "settings"]
            .iter()
            .all(|key| value.get(key).is_some_and(|v| v.is_object()));
        if !has_required {
            log::warn!("import rejected, missing required sub-objects");
            return false;
        }

        let data: SaveData = match serde_json::from_value(value) {
            Ok(data) => data,
            Err(err) => {
                log::warn!("import rejected, malformed structure: {err}");
                return false;
            }
        };

        self.persist(&schema::migrate_if_needed(data))
    }

    /// Remove the envelope and every legacy key.
    pub fn reset(&mut self) {
        self.store.remove(MASTER_SAVE_KEY);
        for key in LEGACY_KEYS {
            self.store.remove(key);
        }
    }

    fn persist(&mut self, data: &SaveData) -> bool {
        let serialized = match serde_json::to_string(data) {
            Ok(serialized) => serialized,
            Err(err) => {
                log::error!("failed to serialize save: {err}");
                return false;
            }
        };
        match self.store.set(MASTER_SAVE_KEY, &serialized) {
            Ok(()) => true,
            Err(err) => {
                log::error!("failed to write save: {err}");
                false
            }
        }
    }

    /// Assemble an envelope from the pre-envelope layout where each
    /// sub-state lived under its own key. Requires at least the game
    /// state key; anything else missing takes defaults. On success the
    /// envelope is persisted and the legacy keys are deleted.
    fn migrate_legacy_layout(&mut self) -> Option<SaveData> {
        let raw_state = self.store.get(LEGACY_STATE_KEY)?;
        let game = match serde_json::from_str(&raw_state) {
            Ok(game) => game,
            Err(err) => {
                log::warn!("discarding malformed legacy game state: {err}");
                return None;
            }
        };

        let now = Utc::now().timestamp_millis();
        let data = SaveData {
            version: SAVE_VERSION,
            last_save_time: now,
            last_active_time: now,
            game,
            settings: self.legacy_section(LEGACY_SETTINGS_KEY),
            profile: self.legacy_section(LEGACY_PROFILE_KEY),
            stats: self.legacy_section(LEGACY_STATS_KEY),
            missions: self.legacy_section(LEGACY_MISSIONS_KEY),
            prestige: self.legacy_section(LEGACY_PRESTIGE_KEY),
            progression: self.legacy_section(LEGACY_PROGRESSION_KEY),
        };

        if !self.persist(&data) {
            // Keep the legacy keys so nothing is lost; retry next load.
            return Some(data);
        }
        for key in LEGACY_KEYS {
            self.store.remove(key);
        }
        log::info!("migrated legacy multi-key save to envelope");
        Some(data)
    }

    fn legacy_section<T: Default + serde::de::DeserializeOwned>(&self, key: &str) -> T {
        match self.store.get(key) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => T::default(),
        }
    }
}
