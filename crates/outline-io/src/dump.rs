use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use log::debug;
use thiserror::Error;

use outline_core::GeometryDump;

#[derive(Error, Debug)]
pub enum DumpError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid outline dump: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decodes one outline dump from a byte stream.
pub struct DumpReader<R: Read> {
    reader: R,
}

impl<R: Read> DumpReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read the whole stream as a single JSON dump.
    pub fn read(&mut self) -> Result<GeometryDump, DumpError> {
        let dump: GeometryDump = serde_json::from_reader(&mut self.reader)?;
        debug!(
            "decoded dump of {} (success: {}, {} log lines)",
            dump.source_path,
            dump.success,
            dump.log.len()
        );
        Ok(dump)
    }
}

/// Open and decode the dump at `path`.
pub fn read_dump_file(path: &Path) -> Result<GeometryDump, DumpError> {
    let file = File::open(path)?;
    DumpReader::new(BufReader::new(file)).read()
}

#[cfg(test)]
mod tests {
    use super::*;
    use outline_core::PartId;

    #[test]
    fn test_read_from_stream() {
        let json = br#"{"file": "c172.acf", "success": true, "log": [],
            "fuselage": [[0.0, -4.0], [0.5, 4.0]], "extra_key": 1}"#;
        let dump = DumpReader::new(&json[..]).read().unwrap();
        assert_eq!(dump.source_path, "c172.acf");
        let valid = dump.validate().unwrap();
        assert_eq!(valid.points(PartId::Fuselage).len(), 2);
    }

    #[test]
    fn test_truncated_json_is_rejected() {
        let json = br#"{"file": "c172.acf", "success": tr"#;
        let err = DumpReader::new(&json[..]).read().unwrap_err();
        assert!(matches!(err, DumpError::Json(_)));
    }

    #[test]
    fn test_malformed_coordinate_is_rejected() {
        let json = br#"{"file": "x.acf", "success": true, "log": [], "main_wing": [[1.0]]}"#;
        assert!(matches!(
            DumpReader::new(&json[..]).read(),
            Err(DumpError::Json(_))
        ));
    }
}
