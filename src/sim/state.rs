//! Run state and core simulation types
//!
//! Everything the tick driver mutates lives here. The run state owns the
//! runner, the active obstacles and the seeded RNG; outside the simulation
//! it is read-only (the renderer and HUD only look at it).

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Active gameplay, ticking once per frame
    Running,
    /// Run ended by a collision; state is frozen until restart
    GameOver,
}

/// The player-controlled body. Horizontal position is fixed; only the
/// vertical axis is simulated.
#[derive(Debug, Clone, PartialEq)]
pub struct Runner {
    pub pos: Vec2,
    pub radius: f32,
    /// Signed vertical velocity, positive = downward
    pub vel_y: f32,
    /// True from the jump trigger until the body rests on the ground again
    pub airborne: bool,
}

impl Runner {
    /// A runner resting on the ground line
    pub fn at_rest(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.runner_x, tuning.ground_y() - tuning.runner_radius),
            radius: tuning.runner_radius,
            vel_y: 0.0,
            airborne: false,
        }
    }

    /// Vertical position at which the body rests on the ground line
    pub fn floor_y(&self, ground_y: f32) -> f32 {
        ground_y - self.radius
    }

    /// Trigger a jump. No-op while airborne (no double-jump, no buffering).
    pub fn jump(&mut self, impulse: f32) {
        if !self.airborne {
            self.vel_y = -impulse;
            self.airborne = true;
        }
    }

    /// One physics step: integrate velocity, apply gravity, clamp to the
    /// ground floor. The ground line is a hard floor; landing snaps the
    /// body onto it, zeroes the velocity and clears the airborne flag.
    pub fn integrate(&mut self, gravity: f32, ground_y: f32) {
        self.pos.y += self.vel_y;
        self.vel_y += gravity;

        let floor = self.floor_y(ground_y);
        if self.pos.y > floor {
            self.pos.y = floor;
            self.vel_y = 0.0;
            self.airborne = false;
        }
    }
}

/// A static-width rectangular hazard. `pos` is the top-left corner; the
/// base always sits exactly on the ground line.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// True once the trailing edge has passed the left field boundary
    pub fn past_left_edge(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

/// Complete run state (deterministic given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Geometry RNG, seeded from `seed`
    pub rng: Pcg32,
    pub runner: Runner,
    /// Active obstacles, insertion order = spawn order
    pub obstacles: Vec<Obstacle>,
    /// Ticks since the last spawn
    pub spawn_timer: u32,
    /// One point per obstacle that scrolled off the left edge
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: RunPhase,
}

impl GameState {
    /// Create a fresh run: runner at rest, no obstacles, score zero.
    /// Restart is this same constructor with a new seed.
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            runner: Runner::at_rest(tuning),
            obstacles: Vec::new(),
            spawn_timer: 0,
            score: 0,
            time_ticks: 0,
            phase: RunPhase::Running,
        }
    }

    pub fn terminated(&self) -> bool {
        self.phase == RunPhase::GameOver
    }
}
