//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One atomic step per tick, never yielding mid-tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::runner_obstacle_overlap;
pub use spawn::{advance_spawner, difficulty, game_speed, spawn_obstacle};
pub use state::{GameState, Obstacle, RunPhase, Runner};
pub use tick::{TickInput, tick};
