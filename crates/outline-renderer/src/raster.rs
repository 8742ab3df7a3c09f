use log::{debug, info};

use outline_core::{OutlineError, PartColor, Point, ValidatedDump};

use crate::canvas::Canvas;
use crate::plan::RenderPlan;
use crate::transform::{CanvasTransform, Mirror};

/// Stroke a polyline through `points` under `mirror`. Returns the number of segments drawn.
///
/// Fewer than two points draws nothing.
pub fn draw_polyline(
    canvas: &mut Canvas,
    transform: &CanvasTransform,
    points: &[Point],
    mirror: Mirror,
    color: PartColor,
) -> usize {
    let positions: Vec<Point> = points.iter().map(|p| transform.to_canvas(p, mirror)).collect();
    for w in positions.windows(2) {
        canvas.draw_line(w[0], w[1], color);
    }
    positions.len().saturating_sub(1)
}

/// Execute `plan` against a canvas sized for the dump at `scale` pixels per model unit.
///
/// `scale` must be positive. Fails when the canvas would be too large to allocate.
pub fn render_with_plan(
    dump: &ValidatedDump<'_>,
    scale: f64,
    plan: &RenderPlan,
) -> Result<Canvas, OutlineError> {
    let extent = dump.extent();
    let (width, height) = extent.canvas_size(scale)?;
    debug!(
        "max |x| = {}, max |y| = {}, scale {} -> {}x{} canvas",
        extent.max_abs_x, extent.max_abs_y, scale, width, height
    );

    let mut canvas = Canvas::new(width, height);
    let transform = CanvasTransform::new(scale, width, height);

    let mut segments = 0;
    for item in &plan.items {
        let drawn = draw_polyline(
            &mut canvas,
            &transform,
            dump.points(item.part),
            item.mirror,
            item.part.color(),
        );
        debug!("{:?} pass: {} segments of {}", item.mirror, drawn, item.part);
        segments += drawn;
    }

    info!(
        "Rendered {} segments from {} onto {}x{} canvas",
        segments,
        dump.source_path(),
        width,
        height
    );
    Ok(canvas)
}

/// Render the outline and its horizontal mirror image.
pub fn render_outline(dump: &ValidatedDump<'_>, scale: f64) -> Result<Canvas, OutlineError> {
    render_with_plan(dump, scale, &RenderPlan::mirrored())
}
