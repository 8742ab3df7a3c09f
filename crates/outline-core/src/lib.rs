//! # Outline Core
//!
//! Data model for aircraft outline dumps: the three named parts and their
//! stroke colors, the dump record produced by the upstream extractor, dump
//! validation, and the symmetric extent used to size the output canvas.

pub mod dump;
pub mod error;
pub mod geometry;
pub mod part;

pub use dump::{GeometryDump, ValidatedDump};
pub use error::OutlineError;
pub use geometry::{Extent, Point};
pub use part::{PartColor, PartId};
