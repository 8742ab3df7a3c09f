use thiserror::Error;

use crate::part::PartId;

#[derive(Error, Debug, PartialEq)]
pub enum OutlineError {
    #[error("Aircraft file '{source_path}' failed outline parsing ({log_lines} messages logged), nothing to plot")]
    ExtractionFailed { source_path: String, log_lines: usize },

    #[error("Part '{part}' of '{source_path}' is not a list of [x, y] pairs: {message}")]
    MalformedPart {
        source_path: String,
        part: PartId,
        message: String,
    },

    #[error("Canvas for extent ({max_abs_x}, {max_abs_y}) at scale {scale} is too large to allocate")]
    CanvasTooLarge {
        max_abs_x: f64,
        max_abs_y: f64,
        scale: f64,
    },
}
