use serde::{Deserialize, Serialize};

use outline_core::Point;

/// Horizontal reflection applied while drawing one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mirror {
    /// Reflected across the longitudinal axis (x negated).
    Left,
    /// Drawn as dumped.
    Right,
}

impl Mirror {
    /// Sign multiplied into model x coordinates.
    pub fn sign(self) -> f64 {
        match self {
            Mirror::Left => -1.0,
            Mirror::Right => 1.0,
        }
    }
}

/// Maps model coordinates onto the canvas, with the model origin at the canvas center.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CanvasTransform {
    /// Pixels per model unit.
    pub scale: f64,
    /// Canvas width in pixels.
    pub canvas_width: f64,
    /// Canvas height in pixels.
    pub canvas_height: f64,
}

impl CanvasTransform {
    pub fn new(scale: f64, canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            scale,
            canvas_width: canvas_width as f64,
            canvas_height: canvas_height as f64,
        }
    }

    /// Canvas x coordinate for model x under `mirror`.
    pub fn model_to_canvas_x(&self, x: f64, mirror: Mirror) -> f64 {
        // half-widths stay fractional so both mirror passes share one center
        mirror.sign() * x * self.scale + self.canvas_width / 2.0
    }

    /// Canvas y coordinate for model y.
    pub fn model_to_canvas_y(&self, y: f64) -> f64 {
        y * self.scale + self.canvas_height / 2.0
    }

    pub fn to_canvas(&self, p: &Point, mirror: Mirror) -> Point {
        Point::new(self.model_to_canvas_x(p.x, mirror), self.model_to_canvas_y(p.y))
    }
}
