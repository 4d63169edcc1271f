//! Canvas 2D rendering
//!
//! Read-only consumer of the run state: per frame it clears the field,
//! draws the runner as a filled circle, each obstacle as a filled
//! rectangle, and the ground line as a horizontal stroke. Colors are
//! presentational and confined to this module.

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::sim::GameState;
use crate::tuning::Tuning;

const RUNNER_FILL: &str = "#34D399";
const OBSTACLE_FILL: &str = "#1a95a5";
const GROUND_STROKE: &str = "#9CA3AF";
const GROUND_WIDTH: f64 = 2.0;

/// Owns the 2D drawing context of the game canvas
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    /// Grab the 2D context. A canvas without one is a precondition
    /// violation - there is no degraded mode for a game missing its
    /// display.
    pub fn new(canvas: &HtmlCanvasElement) -> Self {
        let ctx = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into::<CanvasRenderingContext2d>()
            .expect("not a 2d context");

        Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        }
    }

    /// Draw one frame of the run state
    pub fn render(&self, state: &GameState, tuning: &Tuning) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);

        // Runner
        self.ctx.set_fill_style_str(RUNNER_FILL);
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            state.runner.pos.x as f64,
            state.runner.pos.y as f64,
            state.runner.radius as f64,
            0.0,
            TAU,
        );
        self.ctx.fill();

        // Obstacles
        self.ctx.set_fill_style_str(OBSTACLE_FILL);
        for obstacle in &state.obstacles {
            self.ctx.fill_rect(
                obstacle.pos.x as f64,
                obstacle.pos.y as f64,
                obstacle.size.x as f64,
                obstacle.size.y as f64,
            );
        }

        // Ground line
        let ground_y = tuning.ground_y() as f64;
        self.ctx.begin_path();
        self.ctx.move_to(0.0, ground_y);
        self.ctx.line_to(self.width, ground_y);
        self.ctx.set_stroke_style_str(GROUND_STROKE);
        self.ctx.set_line_width(GROUND_WIDTH);
        self.ctx.stroke();
    }
}
