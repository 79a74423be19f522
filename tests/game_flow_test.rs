//! Integration test: core gameplay loop
//!
//! Clicks, upgrades, shop purchases, passive production and reset,
//! including the mission rewards and unlocks they trigger, all over an
//! in-memory store.

use clicker::save::MemoryStore;
use clicker::{ClickerGame, SaveManager, UpgradeKind};

fn game_with_store(store: &MemoryStore) -> ClickerGame {
    ClickerGame::new(SaveManager::with_store(Box::new(store.clone())))
}

#[test]
fn test_fresh_game_defaults() {
    let store = MemoryStore::new();
    let game = game_with_store(&store);

    assert_eq!(game.score(), 0.0);
    assert_eq!(game.state().points_per_click, 1.0);
    assert_eq!(game.state().points_per_second, 0.0);
    assert_eq!(game.profile().level, 1);
    assert_eq!(game.progression().active_theme, "theme_neon_violet");
    assert_eq!(game.completed_mission_count(), 0);
    assert!(game.pending_offline_earnings().is_none());
}

#[test]
fn test_hundred_clicks_with_rewards_and_unlocks() {
    let store = MemoryStore::new();
    let mut game = game_with_store(&store);

    for _ in 0..100 {
        game.click();
    }

    // 100 clicked points plus mission rewards: first_clicks (25 at ten
    // clicks), click_beginner (100) and points_starter (50) at the
    // hundredth.
    assert_eq!(game.score(), 275.0);
    assert_eq!(game.profile().total_clicks, 100);
    assert_eq!(game.profile().total_points_earned, 100.0);
    assert_eq!(game.completed_mission_count(), 3);

    // 100 lifetime points reach level 2.
    assert_eq!(game.profile().level, 2);

    // 100 clicks advance the stage chain to stage_2, which brings its
    // theme along.
    assert_eq!(game.progression().current_stage, 1);
    assert!(game.progression().is_stage_unlocked("stage_2"));
    assert!(game.progression().is_theme_unlocked("theme_ocean"));
}

#[test]
fn test_upgrades_increase_rates_and_prices() {
    let store = MemoryStore::new();
    let mut game = game_with_store(&store);

    for _ in 0..100 {
        game.click();
    }
    let score_before = game.score();

    assert!(game.buy_upgrade(UpgradeKind::Click));
    // Price 10 spent, first-upgrade mission grants 20.
    assert_eq!(game.score(), score_before - 10.0 + 20.0);
    assert_eq!(game.state().points_per_click, 2.0);
    assert_eq!(game.upgrade_price_for(UpgradeKind::Click), 15.0);

    // A click now earns the upgraded amount.
    let before = game.score();
    game.click();
    assert_eq!(game.score(), before + 2.0);
}

#[test]
fn test_passive_production_with_ticker_restart() {
    let store = MemoryStore::new();
    let mut game = game_with_store(&store);
    game.take_ticker_restart();

    for _ in 0..100 {
        game.click();
    }
    assert!(game.buy_upgrade(UpgradeKind::Auto));
    assert_eq!(game.state().points_per_second, 1.0);
    // The rate changed: the host must re-arm its production timer.
    assert!(game.take_ticker_restart());

    let before = game.score();
    game.auto_tick();
    game.auto_tick();
    assert_eq!(game.score(), before + 2.0);
    assert_eq!(game.stats().auto_points_earned, 2.0);
    assert_eq!(game.stats().manual_points_earned, 100.0);
}

#[test]
fn test_theme_switch_requires_unlock() {
    let store = MemoryStore::new();
    let mut game = game_with_store(&store);

    assert!(!game.set_active_theme("theme_ocean"));

    for _ in 0..100 {
        game.click();
    }
    assert!(game.set_active_theme("theme_ocean"));
    assert_eq!(game.progression().active_theme, "theme_ocean");

    // Never revoked, still refused for locked themes.
    assert!(!game.set_active_theme("theme_divine"));
    assert_eq!(game.progression().active_theme, "theme_ocean");
}

#[test]
fn test_state_survives_reload() {
    let store = MemoryStore::new();
    let mut game = game_with_store(&store);

    for _ in 0..100 {
        game.click();
    }
    game.buy_upgrade(UpgradeKind::Click);
    assert!(game.end_session());

    let reloaded = game_with_store(&store);
    assert_eq!(reloaded.score(), game.score());
    assert_eq!(reloaded.profile().total_clicks, 100);
    assert_eq!(reloaded.state().click_upgrade_level, 1);
    assert_eq!(reloaded.state().points_per_click, 2.0);
    assert_eq!(
        reloaded.completed_mission_count(),
        game.completed_mission_count()
    );
    assert!(reloaded.progression().is_stage_unlocked("stage_2"));
    // Each load is a new session.
    assert_eq!(reloaded.stats().total_sessions, 2);
}

#[test]
fn test_reset_all_clears_everything_including_storage() {
    let store = MemoryStore::new();
    let mut game = game_with_store(&store);

    for _ in 0..100 {
        game.click();
    }
    game.end_session();
    assert!(!store.is_empty());

    game.reset_all();
    assert!(store.is_empty());
    assert_eq!(game.score(), 0.0);
    assert_eq!(game.profile().total_clicks, 0);
    assert_eq!(game.completed_mission_count(), 0);
    assert_eq!(game.progression().current_stage, 0);

    // A fresh load starts from defaults.
    let reloaded = game_with_store(&store);
    assert_eq!(reloaded.score(), 0.0);
    assert_eq!(reloaded.profile().level, 1);
}
