//! Core game state, math and engine.

pub mod constants;
pub mod game;
pub mod game_state;
pub mod leveling;
pub mod offline;
