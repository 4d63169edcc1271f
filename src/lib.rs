//! Dash Runner - a side-scrolling obstacle-dodging runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, run state)
//! - `tuning`: Data-driven game balance
//! - `renderer`: Canvas 2D rendering (wasm only)
//! - `platform`: Frame-loop scheduling (wasm only)
//! - `ui`: Score banner tiers

pub mod sim;
pub mod tuning;
pub mod ui;

#[cfg(target_arch = "wasm32")]
pub mod platform;
#[cfg(target_arch = "wasm32")]
pub mod renderer;

pub use tuning::Tuning;
