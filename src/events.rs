//! Typed event fabric.
//!
//! Game operations announce state transitions as [`GameEvent`] values on
//! an [`EventBus`]. Dispatch is synchronous fan-out in subscription order;
//! a panicking handler is caught and logged so the remaining handlers for
//! the same event still run. The bus serves external observers (UI,
//! analyzers); cross-component reactions inside the engine are direct
//! calls, not subscriptions.

use crate::core::game_state::UpgradeKind;
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Where a score change came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointsSource {
    Click,
    Auto,
    Purchase,
    /// Mission reward grants. Deliberately distinct from `Click` so
    /// click-keyed observers never see synthetic clicks.
    Reward,
    Offline,
    Reset,
}

/// A state transition announced by the engine.
#[derive(Debug, Clone)]
pub enum GameEvent {
    ClickPerformed {
        points: f64,
        total_clicks: u64,
    },
    PointsChanged {
        previous: f64,
        current: f64,
        delta: f64,
        source: PointsSource,
    },
    UpgradePurchased {
        kind: UpgradeKind,
        new_level: u32,
        price: f64,
    },
    ShopItemPurchased {
        item_id: &'static str,
        new_score: f64,
    },
    MissionCompleted {
        mission_id: &'static str,
        reward: f64,
    },
    LevelUp {
        previous_level: u32,
        new_level: u32,
        total_points: f64,
    },
    PrestigePerformed {
        new_level: u32,
        points_at_prestige: f64,
        clicks_at_prestige: u64,
    },
    StageUnlocked {
        stage_id: &'static str,
        stage_index: usize,
    },
    ThemeUnlocked {
        theme_id: &'static str,
    },
    ThemeChanged {
        previous: String,
        current: String,
    },
    OfflineEarningsCalculated {
        time_away_seconds: i64,
        points_earned: f64,
    },
    OfflineEarningsClaimed {
        points_earned: f64,
    },
    SettingsChanged {
        setting: &'static str,
    },
    GameReset,
    SaveCompleted {
        timestamp: i64,
    },
}

/// Discriminant used to key subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ClickPerformed,
    PointsChanged,
    UpgradePurchased,
    ShopItemPurchased,
    MissionCompleted,
    LevelUp,
    PrestigePerformed,
    StageUnlocked,
    ThemeUnlocked,
    ThemeChanged,
    OfflineEarningsCalculated,
    OfflineEarningsClaimed,
    SettingsChanged,
    GameReset,
    SaveCompleted,
}

impl GameEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::ClickPerformed { .. } => EventKind::ClickPerformed,
            GameEvent::PointsChanged { .. } => EventKind::PointsChanged,
            GameEvent::UpgradePurchased { .. } => EventKind::UpgradePurchased,
            GameEvent::ShopItemPurchased { .. } => EventKind::ShopItemPurchased,
            GameEvent::MissionCompleted { .. } => EventKind::MissionCompleted,
            GameEvent::LevelUp { .. } => EventKind::LevelUp,
            GameEvent::PrestigePerformed { .. } => EventKind::PrestigePerformed,
            GameEvent::StageUnlocked { .. } => EventKind::StageUnlocked,
            GameEvent::ThemeUnlocked { .. } => EventKind::ThemeUnlocked,
            GameEvent::ThemeChanged { .. } => EventKind::ThemeChanged,
            GameEvent::OfflineEarningsCalculated { .. } => EventKind::OfflineEarningsCalculated,
            GameEvent::OfflineEarningsClaimed { .. } => EventKind::OfflineEarningsClaimed,
            GameEvent::SettingsChanged { .. } => EventKind::SettingsChanged,
            GameEvent::GameReset => EventKind::GameReset,
            GameEvent::SaveCompleted { .. } => EventKind::SaveCompleted,
        }
    }
}

type Handler = Box<dyn FnMut(&GameEvent)>;

/// Handle returned by [`EventBus::on`], used to unsubscribe.
#[derive(Debug, Clone, Copy)]
pub struct Subscription {
    kind: EventKind,
    id: u64,
}

/// Publish/subscribe dispatcher keyed by [`EventKind`].
#[derive(Default)]
pub struct EventBus {
    listeners: HashMap<EventKind, Vec<(u64, Handler)>>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a handler for one event kind.
    pub fn on(&mut self, kind: EventKind, handler: impl FnMut(&GameEvent) + 'static) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners
            .entry(kind)
            .or_default()
            .push((id, Box::new(handler)));
        Subscription { kind, id }
    }

    /// Remove a previously registered handler.
    pub fn off(&mut self, subscription: Subscription) {
        if let Some(handlers) = self.listeners.get_mut(&subscription.kind) {
            handlers.retain(|(id, _)| *id != subscription.id);
        }
    }

    /// Deliver an event to every handler registered for its kind, in
    /// subscription order. A panicking handler is logged and skipped.
    pub fn emit(&mut self, event: &GameEvent) {
        let Some(handlers) = self.listeners.get_mut(&event.kind()) else {
            return;
        };
        for (_, handler) in handlers.iter_mut() {
            if catch_unwind(AssertUnwindSafe(|| handler(event))).is_err() {
                log::error!("event handler panicked while handling {:?}", event.kind());
            }
        }
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }

    /// Drop every handler for every event.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn click_event() -> GameEvent {
        GameEvent::ClickPerformed {
            points: 1.0,
            total_clicks: 1,
        }
    }

    #[test]
    fn test_emit_reaches_subscribers_in_order() {
        let mut bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let seen = Rc::clone(&seen);
            bus.on(EventKind::ClickPerformed, move |_| {
                seen.borrow_mut().push(tag);
            });
        }

        bus.emit(&click_event());
        assert_eq!(*seen.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_emit_only_matching_kind() {
        let mut bus = EventBus::new();
        let hits = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&hits);
        bus.on(EventKind::GameReset, move |_| {
            *counter.borrow_mut() += 1;
        });

        bus.emit(&click_event());
        assert_eq!(*hits.borrow(), 0);

        bus.emit(&GameEvent::GameReset);
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let mut bus = EventBus::new();
        let hits = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&hits);
        let sub = bus.on(EventKind::ClickPerformed, move |_| {
            *counter.borrow_mut() += 1;
        });

        bus.emit(&click_event());
        bus.off(sub);
        bus.emit(&click_event());

        assert_eq!(*hits.borrow(), 1);
        assert_eq!(bus.listener_count(EventKind::ClickPerformed), 0);
    }

    #[test]
    fn test_panicking_handler_does_not_starve_others() {
        let mut bus = EventBus::new();
        let hits = Rc::new(RefCell::new(0));

        bus.on(EventKind::ClickPerformed, |_| {
            panic!("subscriber bug");
        });
        let counter = Rc::clone(&hits);
        bus.on(EventKind::ClickPerformed, move |_| {
            *counter.borrow_mut() += 1;
        });

        bus.emit(&click_event());
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut bus = EventBus::new();
        bus.on(EventKind::ClickPerformed, |_| {});
        bus.on(EventKind::PointsChanged, |_| {});

        bus.clear();
        assert_eq!(bus.listener_count(EventKind::ClickPerformed), 0);
        assert_eq!(bus.listener_count(EventKind::PointsChanged), 0);
    }
}
