use std::fs::{self, File};
use std::io::{self, BufWriter, Cursor, Seek, Write};
use std::path::Path;

use image::ImageFormat;
use log::{info, warn};
use thiserror::Error;

use outline_renderer::Canvas;

#[derive(Error, Debug)]
pub enum ImageWriteError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Cannot determine a writable image format for '{0}'")]
    UnsupportedFormat(String),
}

/// Image format implied by the extension of `path`.
pub fn output_format(path: &Path) -> Result<ImageFormat, ImageWriteError> {
    let unsupported = || ImageWriteError::UnsupportedFormat(path.display().to_string());
    let format = ImageFormat::from_path(path).map_err(|_| unsupported())?;
    if !format.writing_enabled() {
        return Err(unsupported());
    }
    Ok(format)
}

/// Encodes canvases into a seekable byte sink.
pub struct ImageWriter<W: Write + Seek> {
    writer: W,
    format: ImageFormat,
}

impl<W: Write + Seek> ImageWriter<W> {
    pub fn new(writer: W, format: ImageFormat) -> Self {
        Self { writer, format }
    }

    pub fn write(&mut self, canvas: &Canvas) -> Result<(), ImageWriteError> {
        canvas.as_image().write_to(&mut self.writer, self.format)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Encode `canvas` in memory.
pub fn encode_canvas(canvas: &Canvas, format: ImageFormat) -> Result<Vec<u8>, ImageWriteError> {
    let mut writer = ImageWriter::new(Cursor::new(Vec::new()), format);
    writer.write(canvas)?;
    Ok(writer.into_inner().into_inner())
}

/// Write `canvas` to `path`, removing the file again if encoding fails part way.
///
/// The format is resolved before the file is created, so an unsupported
/// extension never leaves anything behind.
pub fn save_canvas(canvas: &Canvas, path: &Path) -> Result<(), ImageWriteError> {
    let format = output_format(path)?;
    let file = File::create(path)?;

    let mut writer = ImageWriter::new(BufWriter::new(file), format);
    if let Err(e) = writer.write(canvas) {
        if let Err(remove_err) = fs::remove_file(path) {
            warn!("could not remove partial image {}: {}", path.display(), remove_err);
        }
        return Err(e);
    }

    info!(
        "Saved {}x{} {:?} image to {}",
        canvas.width(),
        canvas.height(),
        format,
        path.display()
    );
    Ok(())
}
