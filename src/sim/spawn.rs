//! Obstacle scheduling
//!
//! Decides per tick whether to spawn, and manufactures spawn geometry.
//! A single difficulty scalar derived from the score drives both the
//! scroll speed and the spawn cadence.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GameState, Obstacle};
use crate::tuning::Tuning;

/// Difficulty scalar: monotonically non-decreasing in score, clamped at
/// the configured cap.
pub fn difficulty(score: u32, tuning: &Tuning) -> f32 {
    (1.0 + score as f32 * tuning.difficulty_score_factor).min(tuning.difficulty_cap)
}

/// Scroll speed for the current score
pub fn game_speed(score: u32, tuning: &Tuning) -> f32 {
    tuning.base_speed * difficulty(score, tuning)
}

/// Manufacture one obstacle: width and height drawn independently from the
/// configured uniform ranges, base resting exactly on the ground line,
/// entering at the right field edge.
pub fn spawn_obstacle(rng: &mut Pcg32, tuning: &Tuning) -> Obstacle {
    let width = rng.random_range(tuning.obstacle_width_min..tuning.obstacle_width_max);
    let height = rng.random_range(tuning.obstacle_height_min..tuning.obstacle_height_max);

    Obstacle {
        pos: Vec2::new(tuning.field_width, tuning.ground_y() - height),
        size: Vec2::new(width, height),
    }
}

/// Advance the spawn timer by one tick, appending a new obstacle once it
/// exceeds `base_spawn_interval / difficulty`. Higher difficulty means a
/// shorter effective interval. Overlap between obstacles is permitted.
pub fn advance_spawner(state: &mut GameState, tuning: &Tuning, difficulty: f32) {
    state.spawn_timer += 1;
    if state.spawn_timer as f32 > tuning.base_spawn_interval / difficulty {
        let obstacle = spawn_obstacle(&mut state.rng, tuning);
        state.obstacles.push(obstacle);
        state.spawn_timer = 0;
    }
}
