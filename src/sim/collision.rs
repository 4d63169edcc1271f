//! Collision detection between the runner and obstacles
//!
//! The overlap test is an axis-aligned proximity check: the circular
//! runner is compared against the obstacle's half-extents grown by the
//! runner radius. This is deliberately permissive near the corners (it is
//! not exact circle/rectangle intersection) and must stay that way -
//! tightening it would change the observed difficulty.

use glam::Vec2;

use super::state::Obstacle;

/// True if the runner body overlaps the obstacle under the proximity test:
/// `|dx| < radius + width/2` and `|dy| < radius + height/2`.
pub fn runner_obstacle_overlap(runner_pos: Vec2, runner_radius: f32, obstacle: &Obstacle) -> bool {
    let half = obstacle.size * 0.5;
    let delta = (runner_pos - obstacle.center()).abs();

    delta.x < runner_radius + half.x && delta.y < runner_radius + half.y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obstacle(x: f32, y: f32, w: f32, h: f32) -> Obstacle {
        Obstacle {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[test]
    fn test_overlap_at_ground_level() {
        // Runner at (75, 255) radius 25; obstacle spans x in [70, 90],
        // y in [250, 280] - a hit
        let hit = runner_obstacle_overlap(
            Vec2::new(75.0, 255.0),
            25.0,
            &obstacle(70.0, 250.0, 20.0, 30.0),
        );
        assert!(hit);
    }

    #[test]
    fn test_miss_horizontally() {
        // Same obstacle far to the right
        let hit = runner_obstacle_overlap(
            Vec2::new(75.0, 255.0),
            25.0,
            &obstacle(300.0, 250.0, 20.0, 30.0),
        );
        assert!(!hit);
    }

    #[test]
    fn test_miss_while_airborne() {
        // Runner high above the obstacle: horizontal spans overlap but the
        // vertical gap exceeds radius + half-height
        let hit = runner_obstacle_overlap(
            Vec2::new(75.0, 150.0),
            25.0,
            &obstacle(60.0, 250.0, 30.0, 30.0),
        );
        assert!(!hit);
    }

    #[test]
    fn test_exact_touch_is_not_a_hit() {
        // Obstacle center at x = 110: |dx| = 35 == radius + half-width,
        // and the comparison is strict
        let hit = runner_obstacle_overlap(
            Vec2::new(75.0, 255.0),
            25.0,
            &obstacle(100.0, 250.0, 20.0, 30.0),
        );
        assert!(!hit);
    }
}
