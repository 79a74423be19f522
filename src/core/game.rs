//! The game engine.
//!
//! [`ClickerGame`] owns every sub-state and is the only mutation path:
//! the host wires clicks, timers and UI to the operations here and
//! re-renders from the read accessors. After every mutation the engine
//! deterministically recomputes mission progress and stage/theme unlocks,
//! then announces what happened on the event bus.

use crate::core::constants::*;
use crate::core::game_state::{GameSettings, GameState, UiTheme, UpgradeKind};
use crate::core::leveling::{config_price, level_for_total_points, AUTO_UPGRADE, CLICK_UPGRADE};
use crate::core::offline::{calculate_offline_earnings, OfflineEarnings};
use crate::events::{EventBus, EventKind, GameEvent, PointsSource, Subscription};
use crate::missions::{MetricSnapshot, Mission, MissionTracker};
use crate::prestige::{self, PrestigeRecord, PrestigeState};
use crate::profile::{AdvancedStats, GameSession, PlayerProfile};
use crate::progression::ProgressionState;
use crate::save::{MissionsSave, SaveData, SaveManager};
use crate::shop::{find_item, ShopEffect};
use chrono::Utc;

/// Counters for the session currently running, reset every launch.
#[derive(Debug)]
struct SessionCounters {
    start_time_ms: i64,
    clicks: u64,
    points_earned: f64,
    last_click_time_ms: i64,
    clicks_in_last_second: u32,
    current_streak: u32,
}

impl SessionCounters {
    fn new(now_ms: i64) -> Self {
        Self {
            start_time_ms: now_ms,
            clicks: 0,
            points_earned: 0.0,
            last_click_time_ms: 0,
            clicks_in_last_second: 0,
            current_streak: 0,
        }
    }
}

pub struct ClickerGame {
    state: GameState,
    settings: GameSettings,
    profile: PlayerProfile,
    stats: AdvancedStats,
    session: SessionCounters,
    missions: MissionTracker,
    prestige: PrestigeState,
    progression: ProgressionState,
    /// Global score multiplier, derived from owned multiplier items.
    /// Never persisted; recomputed from the purchase list on load.
    multiplier: f64,
    /// Cosmetic tags from owned visual items, likewise derived.
    visual_tags: Vec<&'static str>,
    pending_offline: Option<OfflineEarnings>,
    /// Anchor for offline earnings, consumed by the first check.
    last_active_ms: Option<i64>,
    ticker_restart: bool,
    seconds_since_autosave: u64,
    save: SaveManager,
    bus: EventBus,
}

impl ClickerGame {
    /// Build the engine from whatever the save manager finds: a current
    /// envelope, a migrated one, or defaults.
    pub fn new(mut save: SaveManager) -> Self {
        let now_ms = Utc::now().timestamp_millis();
        let loaded = save.load();
        let last_active_ms = loaded.as_ref().map(|data| data.last_active_time);
        let data = loaded.unwrap_or_default();

        let mut profile = data.profile;
        // The stored level is a cache; the point total is the truth.
        profile.level = level_for_total_points(profile.total_points_earned);

        let mut stats = data.stats;
        stats.total_sessions += 1;

        let mut game = Self {
            state: data.game,
            settings: data.settings,
            profile,
            stats,
            session: SessionCounters::new(now_ms),
            missions: MissionTracker::new(data.missions.completed_ids),
            prestige: data.prestige,
            progression: data.progression,
            multiplier: 1.0,
            visual_tags: Vec::new(),
            pending_offline: None,
            last_active_ms,
            ticker_restart: true,
            seconds_since_autosave: 0,
            save,
            bus: EventBus::new(),
        };
        game.apply_purchased_item_effects();
        game.react_to_progress();
        game
    }

    // ── Event bus ───────────────────────────────────────────────

    pub fn on(
        &mut self,
        kind: EventKind,
        handler: impl FnMut(&GameEvent) + 'static,
    ) -> Subscription {
        self.bus.on(kind, handler)
    }

    pub fn off(&mut self, subscription: Subscription) {
        self.bus.off(subscription);
    }

    // ── Core operations ─────────────────────────────────────────

    /// Manual click. Always succeeds; returns the points earned.
    pub fn click(&mut self) -> f64 {
        let now_ms = Utc::now().timestamp_millis();
        let previous = self.state.score;
        let points = self.state.points_per_click * self.multiplier;
        self.state.score += points;

        self.profile.total_clicks += 1;
        self.record_points_earned(points);

        self.stats.total_clicks += 1;
        self.stats.manual_points_earned += points;
        self.stats.total_points_earned += points;

        self.session.clicks += 1;
        self.session.points_earned += points;
        self.session.clicks_in_last_second += 1;
        if self.session.last_click_time_ms > 0
            && now_ms - self.session.last_click_time_ms < ACTIVE_CLICK_WINDOW_MS
        {
            self.stats.active_time += 1;
        }
        self.session.last_click_time_ms = now_ms;

        self.bus.emit(&GameEvent::ClickPerformed {
            points,
            total_clicks: self.profile.total_clicks,
        });
        self.emit_points_changed(previous, PointsSource::Click);
        self.react_to_progress();
        points
    }

    /// Buy the next level of an upgrade. Refuses (no-op, `false`) when
    /// the score does not cover the current price.
    pub fn buy_upgrade(&mut self, kind: UpgradeKind) -> bool {
        let price = self.upgrade_price_for(kind);
        if self.state.score < price {
            return false;
        }

        let previous = self.state.score;
        self.state.score -= price;
        let new_level = match kind {
            UpgradeKind::Click => {
                self.state.click_upgrade_level += 1;
                self.state.points_per_click += CLICK_UPGRADE.effect;
                self.state.click_upgrade_level
            }
            UpgradeKind::Auto => {
                self.state.auto_upgrade_level += 1;
                self.state.points_per_second += AUTO_UPGRADE.effect;
                self.ticker_restart = true;
                self.state.auto_upgrade_level
            }
        };

        self.bus.emit(&GameEvent::UpgradePurchased {
            kind,
            new_level,
            price,
        });
        self.emit_points_changed(previous, PointsSource::Purchase);
        self.react_to_progress();
        true
    }

    /// Buy a one-off shop item. Refuses when the id is unknown, the item
    /// is already owned, or the score does not cover the price.
    pub fn buy_shop_item(&mut self, id: &str) -> bool {
        let Some(item) = find_item(id) else {
            return false;
        };
        if self.state.owns_item(item.id) || self.state.score < item.price {
            return false;
        }

        let previous = self.state.score;
        self.state.score -= item.price;
        self.state.purchased_items.push(item.id.to_string());

        match item.effect {
            ShopEffect::ClickBonus(bonus) => self.state.points_per_click += bonus,
            ShopEffect::AutoBonus(bonus) => {
                self.state.points_per_second += bonus;
                self.ticker_restart = true;
            }
            ShopEffect::Visual(tag) => {
                if !self.visual_tags.contains(&tag) {
                    self.visual_tags.push(tag);
                }
            }
            ShopEffect::Multiplier(factor) => self.multiplier *= factor,
        }

        self.bus.emit(&GameEvent::ShopItemPurchased {
            item_id: item.id,
            new_score: self.state.score,
        });
        self.emit_points_changed(previous, PointsSource::Purchase);
        self.react_to_progress();
        true
    }

    /// One period of passive production. The host calls this once per
    /// [`AUTO_TICK_INTERVAL_MS`] while the session is active.
    pub fn auto_tick(&mut self) {
        if self.state.points_per_second <= 0.0 {
            return;
        }
        let previous = self.state.score;
        let points = self.state.points_per_second * self.multiplier;
        self.state.score += points;

        self.record_points_earned(points);
        self.stats.auto_points_earned += points;
        self.stats.total_points_earned += points;
        self.session.points_earned += points;

        self.emit_points_changed(previous, PointsSource::Auto);
        self.react_to_progress();
    }

    /// One second of wall-clock time: lifetime clocks, click-streak
    /// bookkeeping, and a recheck so time missions complete while idle.
    pub fn clock_tick(&mut self) {
        self.profile.total_time_played += 1;
        self.stats.total_time_played += 1;

        if self.session.clicks_in_last_second > self.stats.best_click_streak {
            self.stats.best_click_streak = self.session.clicks_in_last_second;
        }
        self.session.current_streak = self.session.clicks_in_last_second;
        self.session.clicks_in_last_second = 0;

        self.react_to_progress();
    }

    /// Autosave cadence; call once per second alongside [`clock_tick`].
    pub fn autosave_tick(&mut self) {
        self.seconds_since_autosave += 1;
        if self.seconds_since_autosave >= AUTOSAVE_INTERVAL_SECONDS {
            self.seconds_since_autosave = 0;
            self.save_all();
        }
    }

    /// Whether the passive-production rate changed since last asked.
    /// The host cancels and re-arms its production timer when true, so
    /// stale timers never stack.
    pub fn take_ticker_restart(&mut self) -> bool {
        std::mem::take(&mut self.ticker_restart)
    }

    /// Destructive full reset: every sub-state back to defaults, all
    /// stored keys cleared. The caller is responsible for confirming.
    pub fn reset_all(&mut self) {
        let now_ms = Utc::now().timestamp_millis();
        self.state = GameState::default();
        self.settings = GameSettings::default();
        self.profile = PlayerProfile::default();
        self.stats = AdvancedStats::default();
        self.session = SessionCounters::new(now_ms);
        self.missions.reset();
        self.prestige = PrestigeState::default();
        self.progression = ProgressionState::default();
        self.multiplier = 1.0;
        self.visual_tags.clear();
        self.pending_offline = None;
        self.last_active_ms = None;
        self.ticker_restart = true;

        self.save.reset();

        self.bus.emit(&GameEvent::GameReset);
        self.bus.emit(&GameEvent::PointsChanged {
            previous: 0.0,
            current: 0.0,
            delta: 0.0,
            source: PointsSource::Reset,
        });
    }

    // ── Prestige ────────────────────────────────────────────────

    pub fn can_prestige(&self) -> bool {
        prestige::can_prestige(&self.prestige, self.profile.total_points_earned)
    }

    pub fn prestige_requirement(&self) -> f64 {
        self.prestige.requirement()
    }

    /// Prestige: bank lifetime totals into history, raise the level, and
    /// reset the run while keeping identity and all historical state.
    /// Refuses (no-op, `false`) below the requirement.
    pub fn perform_prestige(&mut self) -> bool {
        if !self.can_prestige() {
            return false;
        }
        let now_ms = Utc::now().timestamp_millis();
        let points_at_prestige = self.profile.total_points_earned;
        let clicks_at_prestige = self.profile.total_clicks;

        self.prestige.total_historic_points += points_at_prestige;
        self.prestige.total_historic_clicks += clicks_at_prestige;
        self.prestige.total_historic_items += self.state.purchased_items.len() as u64;
        self.prestige.level += 1;
        self.prestige.push_record(PrestigeRecord {
            number: self.prestige.level,
            timestamp: now_ms,
            points_at_prestige,
            clicks_at_prestige,
        });

        // Scoped reset: gameplay and profile counters go, identity stays.
        let name = std::mem::take(&mut self.profile.name);
        let avatar = std::mem::take(&mut self.profile.avatar);
        self.state = GameState::default();
        self.profile = PlayerProfile {
            name,
            avatar,
            ..PlayerProfile::default()
        };
        self.multiplier = 1.0;
        self.visual_tags.clear();
        self.ticker_restart = true;

        self.bus.emit(&GameEvent::PrestigePerformed {
            new_level: self.prestige.level,
            points_at_prestige,
            clicks_at_prestige,
        });
        self.react_to_progress();
        self.save_all();
        true
    }

    // ── Offline earnings ────────────────────────────────────────

    /// Compute earnings for the gap since the last session. Call once
    /// after construction (and after subscribing); the result stays
    /// pending until claimed or discarded.
    pub fn check_offline_earnings(&mut self) -> Option<OfflineEarnings> {
        let last_active_ms = self.last_active_ms.take()?;
        let rate = self.state.points_per_second * self.multiplier;
        if rate <= 0.0 {
            return None;
        }
        let now_ms = Utc::now().timestamp_millis();
        let elapsed_seconds = (now_ms - last_active_ms) / 1000;
        let earnings = calculate_offline_earnings(elapsed_seconds, rate);
        if !earnings.should_surface() {
            return None;
        }
        self.pending_offline = Some(earnings);
        self.bus.emit(&GameEvent::OfflineEarningsCalculated {
            time_away_seconds: earnings.time_away_seconds,
            points_earned: earnings.points_earned,
        });
        Some(earnings)
    }

    pub fn pending_offline_earnings(&self) -> Option<OfflineEarnings> {
        self.pending_offline
    }

    /// Apply the pending offline earnings to score and lifetime
    /// counters. Refuses when nothing is pending.
    pub fn claim_offline_earnings(&mut self) -> bool {
        let Some(earnings) = self.pending_offline.take() else {
            return false;
        };
        let previous = self.state.score;
        self.state.score += earnings.points_earned;
        self.record_points_earned(earnings.points_earned);
        self.stats.total_points_earned += earnings.points_earned;
        self.stats.auto_points_earned += earnings.points_earned;
        self.session.points_earned += earnings.points_earned;

        self.bus.emit(&GameEvent::OfflineEarningsClaimed {
            points_earned: earnings.points_earned,
        });
        self.emit_points_changed(previous, PointsSource::Offline);
        self.react_to_progress();
        self.save_all();
        true
    }

    /// Drop the pending offline earnings unclaimed.
    pub fn discard_offline_earnings(&mut self) {
        self.pending_offline = None;
    }

    // ── Themes, settings, identity ──────────────────────────────

    /// Switch the active theme. Refused unless unlocked.
    pub fn set_active_theme(&mut self, id: &str) -> bool {
        let previous = self.progression.active_theme.clone();
        if !self.progression.set_active_theme(id) {
            return false;
        }
        self.bus.emit(&GameEvent::ThemeChanged {
            previous,
            current: id.to_string(),
        });
        self.save_all();
        true
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.settings.sound_enabled = enabled;
        self.bus.emit(&GameEvent::SettingsChanged {
            setting: "sound_enabled",
        });
    }

    pub fn set_animations_enabled(&mut self, enabled: bool) {
        self.settings.animations_enabled = enabled;
        self.bus.emit(&GameEvent::SettingsChanged {
            setting: "animations_enabled",
        });
    }

    pub fn set_confirm_purchases(&mut self, enabled: bool) {
        self.settings.confirm_purchases = enabled;
        self.bus.emit(&GameEvent::SettingsChanged {
            setting: "confirm_purchases",
        });
    }

    pub fn set_ui_theme(&mut self, theme: UiTheme) {
        self.settings.theme = theme;
        self.bus.emit(&GameEvent::SettingsChanged { setting: "theme" });
    }

    pub fn set_player_name(&mut self, name: &str) {
        self.profile.set_name(name);
        self.save_all();
    }

    pub fn set_player_avatar(&mut self, avatar: &str) {
        self.profile.set_avatar(avatar);
        self.save_all();
    }

    // ── Persistence ─────────────────────────────────────────────

    /// Assemble and persist the full envelope. Idempotent; safe to call
    /// redundantly from autosave, visibility loss and teardown.
    pub fn save_all(&mut self) -> bool {
        let envelope = self.envelope();
        let saved = self.save.save(envelope);
        if saved {
            self.bus.emit(&GameEvent::SaveCompleted {
                timestamp: Utc::now().timestamp_millis(),
            });
        }
        saved
    }

    /// Session teardown: record the session in the stats ring (when it
    /// was long enough to matter) and save.
    pub fn end_session(&mut self) -> bool {
        let now_ms = Utc::now().timestamp_millis();
        let duration = ((now_ms - self.session.start_time_ms) / 1000).max(0) as u64;
        if duration > MIN_SESSION_RECORD_SECONDS && self.session.clicks > 0 {
            self.stats.record_session(GameSession {
                id: self.session.start_time_ms,
                duration,
                clicks: self.session.clicks,
                points_earned: self.session.points_earned,
            });
        }
        self.save_all()
    }

    /// The stored envelope as a transportable text blob.
    pub fn export_save(&mut self) -> Option<String> {
        self.save.export()
    }

    /// Replace the stored envelope with an imported blob. The running
    /// game is not rehydrated; the caller rebuilds it to pick up the
    /// imported state. Returns `false` (store untouched) for blobs
    /// missing the required structure.
    pub fn import_save(&mut self, blob: &str) -> bool {
        self.save.import(blob)
    }

    // ── Read accessors ──────────────────────────────────────────

    pub fn score(&self) -> f64 {
        self.state.score
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    pub fn stats(&self) -> &AdvancedStats {
        &self.stats
    }

    pub fn missions(&self) -> &[Mission] {
        self.missions.missions()
    }

    pub fn completed_mission_count(&self) -> usize {
        self.missions.completed_count()
    }

    pub fn prestige(&self) -> &PrestigeState {
        &self.prestige
    }

    pub fn progression(&self) -> &ProgressionState {
        &self.progression
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub fn effective_points_per_click(&self) -> f64 {
        self.state.points_per_click * self.multiplier
    }

    pub fn effective_points_per_second(&self) -> f64 {
        self.state.points_per_second * self.multiplier
    }

    pub fn upgrade_price_for(&self, kind: UpgradeKind) -> f64 {
        match kind {
            UpgradeKind::Click => config_price(&CLICK_UPGRADE, self.state.click_upgrade_level),
            UpgradeKind::Auto => config_price(&AUTO_UPGRADE, self.state.auto_upgrade_level),
        }
    }

    pub fn can_afford_upgrade(&self, kind: UpgradeKind) -> bool {
        self.state.score >= self.upgrade_price_for(kind)
    }

    pub fn can_afford_item(&self, id: &str) -> bool {
        find_item(id).is_some_and(|item| self.state.score >= item.price)
    }

    pub fn current_click_streak(&self) -> u32 {
        self.session.current_streak
    }

    /// Cosmetic tags from owned visual items, for the presentation layer.
    pub fn visual_tags(&self) -> &[&'static str] {
        &self.visual_tags
    }

    // ── Internals ───────────────────────────────────────────────

    /// Re-derive the multiplier and visual tags from the owned item
    /// list. Click/auto bonuses are already baked into the saved rates.
    fn apply_purchased_item_effects(&mut self) {
        for id in &self.state.purchased_items {
            let Some(item) = find_item(id) else {
                continue;
            };
            match item.effect {
                ShopEffect::Visual(tag) => {
                    if !self.visual_tags.contains(&tag) {
                        self.visual_tags.push(tag);
                    }
                }
                ShopEffect::Multiplier(factor) => self.multiplier *= factor,
                ShopEffect::ClickBonus(_) | ShopEffect::AutoBonus(_) => {}
            }
        }
    }

    fn metrics(&self) -> MetricSnapshot {
        MetricSnapshot {
            total_clicks: self.profile.total_clicks,
            total_points: self.profile.total_points_earned,
            total_upgrades: self.state.click_upgrade_level + self.state.auto_upgrade_level,
            total_purchases: self.state.purchased_items.len(),
            total_time: self.profile.total_time_played,
            prestige_level: self.prestige.level,
            completed_missions: self.missions.completed_count(),
        }
    }

    fn record_points_earned(&mut self, points: f64) {
        self.profile.total_points_earned += points;
        let new_level = level_for_total_points(self.profile.total_points_earned);
        if new_level > self.profile.level {
            let previous_level = self.profile.level;
            self.profile.level = new_level;
            self.bus.emit(&GameEvent::LevelUp {
                previous_level,
                new_level,
                total_points: self.profile.total_points_earned,
            });
        }
    }

    fn emit_points_changed(&mut self, previous: f64, source: PointsSource) {
        let current = self.state.score;
        self.bus.emit(&GameEvent::PointsChanged {
            previous,
            current,
            delta: current - previous,
            source,
        });
    }

    /// Recompute mission progress, grant new rewards, and chain stage
    /// and theme unlocks. New completions and unlocks persist at once.
    fn react_to_progress(&mut self) {
        let now_ms = Utc::now().timestamp_millis();
        let metrics = self.metrics();
        let newly_completed = self.missions.update_progress(&metrics, now_ms);
        for def in &newly_completed {
            let previous = self.state.score;
            self.state.score += def.reward;
            self.prestige.total_historic_missions += 1;
            self.bus.emit(&GameEvent::MissionCompleted {
                mission_id: def.id,
                reward: def.reward,
            });
            self.emit_points_changed(previous, PointsSource::Reward);
        }

        // Completed-mission count may have just changed; resnapshot.
        let metrics = self.metrics();
        let report = self.progression.check_stage_unlocks(&metrics);
        for (stage, index) in &report.stages {
            self.bus.emit(&GameEvent::StageUnlocked {
                stage_id: stage.id,
                stage_index: *index,
            });
        }
        for theme in &report.themes {
            self.bus.emit(&GameEvent::ThemeUnlocked { theme_id: theme.id });
        }
        let new_themes = self.progression.check_theme_unlocks(&metrics);
        for theme in &new_themes {
            self.bus.emit(&GameEvent::ThemeUnlocked { theme_id: theme.id });
        }

        if !newly_completed.is_empty() || !report.is_empty() || !new_themes.is_empty() {
            self.save_all();
        }
    }

    fn envelope(&self) -> SaveData {
        SaveData {
            version: SAVE_VERSION,
            // Stamped by the save manager.
            last_save_time: 0,
            last_active_time: Utc::now().timestamp_millis(),
            game: self.state.clone(),
            settings: self.settings.clone(),
            profile: self.profile.clone(),
            stats: self.stats.clone(),
            missions: MissionsSave {
                completed_ids: self.missions.completed_ids().to_vec(),
            },
            prestige: self.prestige.clone(),
            progression: self.progression.clone(),
        }
    }
}
