//! # plot-outline
//!
//! Command line front end: `plot-outline <dump.json> <output-image> <scale>`.
//! Loads an outline dump, validates it, renders the mirrored outline and
//! saves the image. Every failure is logged and mapped to its own exit status:
//! 1 extraction failed, 2 usage, 3 unreadable or malformed dump, 4 image not
//! saved, 5 canvas too large.

use std::path::PathBuf;

use log::{error, info};
use thiserror::Error;

use outline_core::OutlineError;
use outline_io::{read_dump_file, save_canvas, DumpError, ImageWriteError};
use outline_renderer::render_outline;

pub const USAGE: &str =
    "Call with 1. path to JSON file, 2. path to output file, 3. scale factor";

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("{0}")]
    Usage(String),

    #[error("Scale factor must be a positive number, got '{0}'")]
    InvalidScale(String),

    #[error(transparent)]
    Extraction(#[from] OutlineError),

    #[error("Failed to load outline dump: {0}")]
    Dump(#[from] DumpError),

    #[error("Failed to save image: {0}")]
    Image(#[from] ImageWriteError),
}

impl PlotError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PlotError::Extraction(OutlineError::ExtractionFailed { .. }) => 1,
            PlotError::Usage(_) | PlotError::InvalidScale(_) => 2,
            PlotError::Dump(_) | PlotError::Extraction(OutlineError::MalformedPart { .. }) => 3,
            PlotError::Image(_) => 4,
            PlotError::Extraction(OutlineError::CanvasTooLarge { .. }) => 5,
        }
    }
}

/// Positional invocation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub dump_path: PathBuf,
    pub out_path: PathBuf,
    /// Pixels per model unit.
    pub scale: f64,
}

impl Args {
    /// Parse the arguments following the program name.
    pub fn parse(args: &[String]) -> Result<Self, PlotError> {
        let [dump_path, out_path, scale] = args else {
            return Err(PlotError::Usage(USAGE.to_string()));
        };

        let scale = match scale.parse::<f64>() {
            Ok(v) if v.is_finite() && v > 0.0 => v,
            _ => return Err(PlotError::InvalidScale(scale.clone())),
        };

        Ok(Self {
            dump_path: PathBuf::from(dump_path),
            out_path: PathBuf::from(out_path),
            scale,
        })
    }
}

/// Load, validate, render and save. Nothing is written unless the dump validates.
pub fn plot(args: &Args) -> Result<(), PlotError> {
    let dump = read_dump_file(&args.dump_path)?;
    let valid = dump.validate()?;
    let canvas = render_outline(&valid, args.scale)?;
    save_canvas(&canvas, &args.out_path)?;
    Ok(())
}

/// Run the tool on `args` (program name excluded) and return the exit status.
pub fn run(args: &[String]) -> i32 {
    match Args::parse(args).and_then(|args| plot(&args)) {
        Ok(()) => {
            info!("Done");
            0
        }
        Err(e) => {
            error!("{}", e);
            e.exit_code()
        }
    }
}
