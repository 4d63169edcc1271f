//! Per-frame simulation tick
//!
//! Core loop that advances a run deterministically. One tick is a single
//! atomic unit: integrate physics, advance the spawner, translate and
//! prune obstacles, detect collisions, update the score.

use super::collision::runner_obstacle_overlap;
use super::spawn::{advance_spawner, difficulty};
use super::state::{GameState, RunPhase};
use crate::tuning::Tuning;

/// Input for a single tick. The jump flag is a one-shot latch: device
/// events may set it at any time between ticks, and the driver clears it
/// after the tick consumes it.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump trigger (space / touch)
    pub jump: bool,
}

/// Advance the run by one tick.
///
/// Ticking a terminated run is a no-op: nothing moves, spawns or scores
/// until an explicit restart. On collision the run terminates immediately
/// and the remaining obstacles are not processed this tick.
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning) {
    if state.phase == RunPhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    let difficulty = difficulty(state.score, tuning);
    let game_speed = tuning.base_speed * difficulty;

    if input.jump {
        state.runner.jump(tuning.jump_impulse);
    }
    state.runner.integrate(tuning.gravity, tuning.ground_y());

    advance_spawner(state, tuning, difficulty);

    let runner_pos = state.runner.pos;
    let runner_radius = state.runner.radius;

    // Reverse insertion order so removal during iteration is safe
    for i in (0..state.obstacles.len()).rev() {
        let obstacle = &mut state.obstacles[i];
        obstacle.pos.x -= game_speed;

        if runner_obstacle_overlap(runner_pos, runner_radius, obstacle) {
            state.phase = RunPhase::GameOver;
            log::info!(
                "run over after {} ticks, final score {}",
                state.time_ticks,
                state.score
            );
            return;
        }

        if state.obstacles[i].past_left_edge() {
            state.obstacles.remove(i);
            state.score += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Obstacle;
    use glam::Vec2;
    use proptest::prelude::*;

    fn obstacle(x: f32, y: f32, w: f32, h: f32) -> Obstacle {
        Obstacle {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[test]
    fn test_jump_trajectory() {
        // Ground line 280, radius 25, gravity 0.7, impulse 15
        let tuning = Tuning::default();
        let mut state = GameState::new(1, &tuning);
        let floor = 255.0;
        assert_eq!(state.runner.pos.y, floor);

        let jump = TickInput { jump: true };
        tick(&mut state, &jump, &tuning);

        // Impulse applies before integration: position drops by 15, then
        // gravity brings the velocity to -14.3
        assert!(state.runner.airborne);
        assert_eq!(state.runner.pos.y, floor - 15.0);
        assert!((state.runner.vel_y - (-14.3)).abs() < 1e-4);

        // Integrate until the body lands again; the floor must never be
        // exceeded along the way
        let coast = TickInput::default();
        let mut landed = false;
        for _ in 0..200 {
            tick(&mut state, &coast, &tuning);
            assert!(state.runner.pos.y <= floor);
            if !state.runner.airborne {
                landed = true;
                break;
            }
        }
        assert!(landed);
        assert_eq!(state.runner.pos.y, floor);
        assert_eq!(state.runner.vel_y, 0.0);
    }

    #[test]
    fn test_midair_jump_is_ignored() {
        let tuning = Tuning::default();
        let mut a = GameState::new(2, &tuning);
        let mut b = GameState::new(2, &tuning);

        let jump = TickInput { jump: true };
        let coast = TickInput::default();

        tick(&mut a, &jump, &tuning);
        tick(&mut b, &jump, &tuning);

        // One run spams jump while airborne, the other coasts
        tick(&mut a, &jump, &tuning);
        tick(&mut b, &coast, &tuning);

        assert_eq!(a.runner, b.runner);
    }

    #[test]
    fn test_score_on_pass_off_screen() {
        let tuning = Tuning::default();
        let mut state = GameState::new(3, &tuning);
        // Trailing edge crosses the left boundary this tick (speed 5)
        state.obstacles.push(obstacle(2.0, 260.0, 2.0, 20.0));

        tick(&mut state, &TickInput::default(), &tuning);

        assert_eq!(state.score, 1);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.phase, RunPhase::Running);
    }

    #[test]
    fn test_collision_terminates_run() {
        let tuning = Tuning::default();
        let mut state = GameState::new(4, &tuning);
        state.score = 7;
        // Dead ahead of the runner after one translation
        state.obstacles.push(obstacle(80.0, 250.0, 20.0, 30.0));

        tick(&mut state, &TickInput::default(), &tuning);

        assert_eq!(state.phase, RunPhase::GameOver);
        assert!(state.terminated());
        // Score frozen at its value at collision time
        assert_eq!(state.score, 7);
    }

    #[test]
    fn test_collision_skips_remaining_obstacles() {
        let tuning = Tuning::default();
        let mut state = GameState::new(4, &tuning);
        // First-spawned obstacle is about to scroll off and would score,
        // but the later-spawned one (processed first, reverse order)
        // collides and ends the tick early
        state.obstacles.push(obstacle(1.0, 260.0, 2.0, 20.0));
        state.obstacles.push(obstacle(80.0, 250.0, 20.0, 30.0));

        tick(&mut state, &TickInput::default(), &tuning);

        assert_eq!(state.phase, RunPhase::GameOver);
        assert_eq!(state.score, 0);
        assert_eq!(state.obstacles.len(), 2);
    }

    #[test]
    fn test_terminated_run_is_frozen() {
        let tuning = Tuning::default();
        let mut state = GameState::new(4, &tuning);
        state.obstacles.push(obstacle(80.0, 250.0, 20.0, 30.0));
        tick(&mut state, &TickInput::default(), &tuning);
        assert!(state.terminated());

        let snapshot = (
            state.runner.clone(),
            state.obstacles.clone(),
            state.score,
            state.spawn_timer,
            state.time_ticks,
        );
        for _ in 0..10 {
            tick(&mut state, &TickInput { jump: true }, &tuning);
        }
        assert_eq!(state.runner, snapshot.0);
        assert_eq!(state.obstacles, snapshot.1);
        assert_eq!(state.score, snapshot.2);
        assert_eq!(state.spawn_timer, snapshot.3);
        assert_eq!(state.time_ticks, snapshot.4);
    }

    #[test]
    fn test_restart_matches_fresh_state() {
        let tuning = Tuning::default();
        let mut state = GameState::new(11, &tuning);
        let jump = TickInput { jump: true };
        for i in 0..300 {
            let input = if i % 40 == 0 {
                jump.clone()
            } else {
                TickInput::default()
            };
            tick(&mut state, &input, &tuning);
        }

        // Restart is wholesale reinitialization
        state = GameState::new(11, &tuning);
        let fresh = GameState::new(11, &tuning);
        assert_eq!(state.runner, fresh.runner);
        assert_eq!(state.obstacles, fresh.obstacles);
        assert_eq!(state.score, fresh.score);
        assert_eq!(state.spawn_timer, fresh.spawn_timer);
        assert_eq!(state.time_ticks, fresh.time_ticks);
        assert_eq!(state.phase, fresh.phase);
        assert_eq!(state.rng, fresh.rng);
    }

    #[test]
    fn test_scroll_speed_follows_difficulty() {
        let tuning = Tuning::default();
        let mut state = GameState::new(12, &tuning);
        state.score = 300; // difficulty capped at 3
        state.obstacles.push(obstacle(400.0, 250.0, 20.0, 30.0));

        tick(&mut state, &TickInput::default(), &tuning);

        assert_eq!(state.obstacles[0].pos.x, 400.0 - tuning.base_speed * 3.0);
    }

    proptest! {
        #[test]
        fn prop_floor_never_exceeded(jumps in proptest::collection::vec(any::<bool>(), 1..300)) {
            let tuning = Tuning::default();
            let floor = tuning.ground_y() - tuning.runner_radius;
            let mut state = GameState::new(0xDA5, &tuning);

            for jump in jumps {
                tick(&mut state, &TickInput { jump }, &tuning);
                prop_assert!(state.runner.pos.y <= floor);
                if !state.runner.airborne {
                    prop_assert_eq!(state.runner.pos.y, floor);
                }
                if state.terminated() {
                    break;
                }
            }
        }

        #[test]
        fn prop_difficulty_capped(score in any::<u32>()) {
            let tuning = Tuning::default();
            let d = crate::sim::spawn::difficulty(score, &tuning);
            prop_assert!(d >= 1.0);
            prop_assert!(d <= tuning.difficulty_cap);
        }
    }
}
