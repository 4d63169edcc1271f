//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`], fixed at construction and
//! never mutated mid-run. Defaults are the shipped balance; a JSON blob
//! can override individual fields for playtesting.

use serde::{Deserialize, Serialize};

/// Gameplay configuration constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Scroll speed at difficulty 1
    pub base_speed: f32,
    /// Jump impulse magnitude (applied as negative vertical velocity)
    pub jump_impulse: f32,
    /// Fixed horizontal position of the runner
    pub runner_x: f32,
    /// Runner collision/draw radius
    pub runner_radius: f32,
    /// Ground line offset from the bottom of the field
    pub ground_offset: f32,
    /// Ticks between spawns at difficulty 1
    pub base_spawn_interval: f32,
    /// Difficulty gained per score point
    pub difficulty_score_factor: f32,
    /// Difficulty ceiling
    pub difficulty_cap: f32,
    pub obstacle_width_min: f32,
    pub obstacle_width_max: f32,
    pub obstacle_height_min: f32,
    pub obstacle_height_max: f32,
    pub field_width: f32,
    pub field_height: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.7,
            base_speed: 5.0,
            jump_impulse: 15.0,
            runner_x: 75.0,
            runner_radius: 25.0,
            ground_offset: 20.0,
            base_spawn_interval: 60.0,
            difficulty_score_factor: 0.01,
            difficulty_cap: 3.0,
            obstacle_width_min: 20.0,
            obstacle_width_max: 40.0,
            obstacle_height_min: 20.0,
            obstacle_height_max: 50.0,
            field_width: 600.0,
            field_height: 300.0,
        }
    }
}

impl Tuning {
    /// Vertical position of the ground line
    pub fn ground_y(&self) -> f32 {
        self.field_height - self.ground_offset
    }

    /// Parse a (possibly partial) JSON override; missing fields keep their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_balance() {
        let tuning = Tuning::default();
        assert_eq!(tuning.gravity, 0.7);
        assert_eq!(tuning.jump_impulse, 15.0);
        assert_eq!(tuning.difficulty_cap, 3.0);
        assert_eq!(tuning.ground_y(), 280.0);
    }

    #[test]
    fn test_partial_json_override() {
        let tuning = Tuning::from_json(r#"{"gravity": 1.2, "base_speed": 8.0}"#).unwrap();
        assert_eq!(tuning.gravity, 1.2);
        assert_eq!(tuning.base_speed, 8.0);
        // Untouched fields keep defaults
        assert_eq!(tuning.jump_impulse, 15.0);
        assert_eq!(tuning.field_width, 600.0);
    }

    #[test]
    fn test_bad_json_is_rejected() {
        assert!(Tuning::from_json("not json").is_err());
    }
}
