//! Clicker: the progression and save-state engine of an incremental
//! game.
//!
//! The crate owns the arithmetic model (score accumulation, upgrade
//! pricing, shop effects, missions, prestige resets, stage and theme
//! unlocks, offline earnings) and the versioned persistence behind it.
//! Rendering, input handling and timer scheduling belong to the host: it
//! invokes the operations on [`ClickerGame`], re-renders from the read
//! accessors, and subscribes to the [`events`] bus for reactions.

pub mod core;
pub mod events;
pub mod missions;
pub mod prestige;
pub mod profile;
pub mod progression;
pub mod save;
pub mod shop;

pub use crate::core::game::ClickerGame;
pub use crate::core::game_state::{GameSettings, GameState, UiTheme, UpgradeKind};
pub use crate::core::offline::OfflineEarnings;
pub use crate::save::SaveManager;
