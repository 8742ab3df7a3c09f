use serde::{Deserialize, Serialize};

use crate::error::OutlineError;

/// A 2D point in model units (or canvas pixels once transformed).
///
/// Serialized as a two-element array `[x, y]`, the layout used by outline dumps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Margin in pixels added to each canvas dimension so boundary strokes are never clipped.
pub const CANVAS_MARGIN: u32 = 4;

/// Maximum absolute extent of a point set along each axis, measured from the model origin.
///
/// Unlike a bounding box this is symmetric by construction: the canvas has to
/// hold both the outline and its mirror image around the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Extent {
    pub max_abs_x: f64,
    pub max_abs_y: f64,
}

impl Extent {
    pub fn new(max_abs_x: f64, max_abs_y: f64) -> Self {
        Self {
            max_abs_x,
            max_abs_y,
        }
    }

    /// Extent of a single point list. An empty list yields a zero extent.
    pub fn from_points(points: &[Point]) -> Self {
        let mut extent = Self::default();
        extent.include(points);
        extent
    }

    /// Grow the extent to cover every point in `points`.
    pub fn include(&mut self, points: &[Point]) {
        for p in points {
            self.max_abs_x = self.max_abs_x.max(p.x.abs());
            self.max_abs_y = self.max_abs_y.max(p.y.abs());
        }
    }

    /// Canvas size `(width, height)` in pixels needed to draw this extent and its
    /// horizontal mirror at `scale` pixels per model unit.
    ///
    /// `scale` must be positive. Zero, negative or NaN scales are not rejected
    /// here and collapse to a margin-only canvas.
    ///
    /// Fails with [`OutlineError::CanvasTooLarge`] when a side does not fit in
    /// `u32` or the RGB pixel buffer would not be addressable.
    pub fn canvas_size(&self, scale: f64) -> Result<(u32, u32), OutlineError> {
        let too_large = || OutlineError::CanvasTooLarge {
            max_abs_x: self.max_abs_x,
            max_abs_y: self.max_abs_y,
            scale,
        };
        let width = span_pixels(self.max_abs_x, scale).ok_or_else(too_large)?;
        let height = span_pixels(self.max_abs_y, scale).ok_or_else(too_large)?;

        (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(3))
            .filter(|&bytes| bytes <= isize::MAX as usize)
            .ok_or_else(too_large)?;

        Ok((width, height))
    }
}

fn span_pixels(max_abs: f64, scale: f64) -> Option<u32> {
    let span = (max_abs * scale * 2.0).round();
    if span > (u32::MAX - CANVAS_MARGIN) as f64 {
        return None;
    }
    // `as` saturates: negative and NaN spans become 0
    Some(span as u32 + CANVAS_MARGIN)
}
