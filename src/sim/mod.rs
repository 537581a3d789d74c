//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time is passed in, never read from a clock
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod catalog;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use catalog::{Effect, FruitColor, FruitType, LEVELS, Level, TRAP_MARKER};
pub use collision::{bounce_head, fruits_in_reach, hits_wall, self_collision_index};
pub use spawn::{fill_fruits, spawn_fruit};
pub use state::{
    Direction, EndReason, Fruit, GameEvent, GamePhase, GameState, Snake, StatusMessage,
};
pub use tick::{TickInput, tick};
