//! # Outline Renderer
//!
//! Rasterizes a validated outline dump: sizes a canvas around the model
//! origin, then strokes every part twice, once mirrored across the
//! longitudinal axis and once as dumped, with flat one-pixel lines.

pub mod canvas;
pub mod plan;
pub mod raster;
pub mod transform;

pub use canvas::Canvas;
pub use plan::{RenderItem, RenderPlan};
pub use raster::{draw_polyline, render_outline, render_with_plan};
pub use transform::{CanvasTransform, Mirror};
