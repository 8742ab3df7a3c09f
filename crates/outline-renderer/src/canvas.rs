use image::{Rgb, RgbImage};

use outline_core::{PartColor, Point};

/// Background of a fresh canvas.
pub const BACKGROUND: PartColor = PartColor::WHITE;

/// RGB raster surface, origin at the top-left corner.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// A canvas of `width` x `height` pixels filled with [`BACKGROUND`].
    ///
    /// Panics if the pixel buffer size overflows; size it with
    /// [`outline_core::Extent::canvas_size`], which rejects such extents.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Rgb(BACKGROUND.to_rgb_array())),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Color at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<PartColor> {
        self.image
            .get_pixel_checked(x, y)
            .map(|Rgb([r, g, b])| PartColor::new(*r, *g, *b))
    }

    /// Set one pixel. Coordinates outside the surface are ignored.
    pub fn put_pixel(&mut self, x: i64, y: i64, color: PartColor) {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, Rgb(color.to_rgb_array()));
    }

    /// Draw a one-pixel aliased line, both endpoints included.
    ///
    /// Endpoints are rounded to the nearest pixel and the segment is walked
    /// with integer Bresenham steps. Later strokes overwrite earlier ones.
    pub fn draw_line(&mut self, from: Point, to: Point, color: PartColor) {
        let (mut x, mut y) = (from.x.round() as i64, from.y.round() as i64);
        let (x1, y1) = (to.x.round() as i64, to.y.round() as i64);

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Number of pixels that differ from the background.
    pub fn stroked_pixel_count(&self) -> usize {
        let background = Rgb(BACKGROUND.to_rgb_array());
        self.image.pixels().filter(|p| **p != background).count()
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }
}
