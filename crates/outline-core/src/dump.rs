use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::OutlineError;
use crate::geometry::{Extent, Point};
use crate::part::PartId;

/// Outline geometry as dumped by the upstream aircraft file extractor.
///
/// Part coordinate lists are only meaningful when `success` is set. They are
/// kept as undecoded JSON until [`GeometryDump::validate`] has checked the flag,
/// so a failed dump with absent or garbage parts still loads and reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryDump {
    /// Aircraft file the outline was extracted from.
    #[serde(rename = "file")]
    pub source_path: String,
    /// Whether extraction succeeded.
    pub success: bool,
    /// Messages logged by the extractor, in emission order.
    #[serde(default)]
    pub log: Vec<String>,
    /// Half wing span in model units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semispan: Option<f64>,
    /// Overall length in model units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wingtip: Option<Value>,
    #[serde(default)]
    fuselage: Value,
    #[serde(default)]
    main_wing: Value,
    #[serde(default)]
    stab_wing: Value,
}

impl GeometryDump {
    /// A successful dump with no geometry yet.
    pub fn new(source_path: &str) -> Self {
        Self {
            source_path: source_path.to_string(),
            success: true,
            log: Vec::new(),
            semispan: None,
            length: None,
            wingtip: None,
            fuselage: Value::Null,
            main_wing: Value::Null,
            stab_wing: Value::Null,
        }
    }

    /// A dump whose extraction failed.
    pub fn failed(source_path: &str) -> Self {
        Self {
            success: false,
            ..Self::new(source_path)
        }
    }

    pub fn with_part(mut self, part: PartId, points: Vec<Point>) -> Self {
        let pairs = points.iter().map(|p| Value::from(vec![p.x, p.y])).collect();
        *self.part_mut(part) = Value::Array(pairs);
        self
    }

    pub fn with_log_line(mut self, line: &str) -> Self {
        self.log.push(line.to_string());
        self
    }

    /// Wing tip position, when present and well formed.
    pub fn wingtip(&self) -> Option<Point> {
        self.wingtip
            .as_ref()
            .and_then(|raw| Point::deserialize(raw).ok())
    }

    fn raw_part(&self, part: PartId) -> &Value {
        match part {
            PartId::Fuselage => &self.fuselage,
            PartId::MainWing => &self.main_wing,
            PartId::StabWing => &self.stab_wing,
        }
    }

    fn part_mut(&mut self, part: PartId) -> &mut Value {
        match part {
            PartId::Fuselage => &mut self.fuselage,
            PartId::MainWing => &mut self.main_wing,
            PartId::StabWing => &mut self.stab_wing,
        }
    }

    /// Decode one part's coordinate list. An absent or `null` list is empty.
    fn decode_part(&self, part: PartId) -> Result<Vec<Point>, OutlineError> {
        let raw = self.raw_part(part);
        if raw.is_null() {
            return Ok(Vec::new());
        }
        Vec::<Point>::deserialize(raw).map_err(|e| OutlineError::MalformedPart {
            source_path: self.source_path.clone(),
            part,
            message: e.to_string(),
        })
    }

    /// Write provenance and extractor messages to the diagnostic log.
    pub fn report(&self) {
        info!("Outline dump was created from {}", self.source_path);
        if !self.log.is_empty() {
            info!("The following messages were logged during outline parsing:");
            for line in &self.log {
                warn!("  {}", line);
            }
        }
    }

    /// Report the dump, gate on the success flag, then decode the part lists.
    ///
    /// Log messages alone never fail validation. Part lists of a failed dump
    /// are never looked at.
    pub fn validate(&self) -> Result<ValidatedDump<'_>, OutlineError> {
        self.report();
        if !self.success {
            return Err(OutlineError::ExtractionFailed {
                source_path: self.source_path.clone(),
                log_lines: self.log.len(),
            });
        }

        if let Some(semispan) = self.semispan {
            debug!("semispan: {}", semispan);
        }
        if let Some(length) = self.length {
            debug!("length: {}", length);
        }
        if let Some(tip) = self.wingtip() {
            debug!("wingtip: ({}, {})", tip.x, tip.y);
        }

        Ok(ValidatedDump {
            dump: self,
            parts: [
                self.decode_part(PartId::Fuselage)?,
                self.decode_part(PartId::MainWing)?,
                self.decode_part(PartId::StabWing)?,
            ],
        })
    }

    // ── Serialization ────────────────────────────────────────────────

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// A dump whose `success` flag has been checked. Only this view exposes part geometry.
#[derive(Debug, Clone)]
pub struct ValidatedDump<'a> {
    dump: &'a GeometryDump,
    /// Decoded part lists, indexed by `PartId as usize`.
    parts: [Vec<Point>; 3],
}

impl<'a> ValidatedDump<'a> {
    pub fn source_path(&self) -> &'a str {
        &self.dump.source_path
    }

    /// Ordered vertices of a part's polyline.
    pub fn points(&self, part: PartId) -> &[Point] {
        &self.parts[part as usize]
    }

    /// All parts with their vertices, in drawing order.
    pub fn parts(&self) -> impl Iterator<Item = (PartId, &[Point])> + '_ {
        PartId::ALL.into_iter().map(move |part| (part, self.points(part)))
    }

    /// Symmetric extent over every point of every part.
    pub fn extent(&self) -> Extent {
        let mut extent = Extent::default();
        for (_, points) in self.parts() {
            extent.include(points);
        }
        extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP_DUMP: &str = r#"{
        "file": "aircraft/step.acf",
        "log": ["wing 2 ignored"],
        "success": true,
        "semispan": 10.0,
        "length": 4.0,
        "wingtip": [10.0, 2.0],
        "fuselage": [[0.0, 0.0], [10.0, 0.0], [10.0, 2.0]],
        "main_wing": [],
        "stab_wing": [[-1.0, -3.5]]
    }"#;

    #[test]
    fn test_parse_successful_dump() {
        let dump = GeometryDump::from_json(STEP_DUMP).unwrap();
        assert_eq!(dump.source_path, "aircraft/step.acf");
        assert_eq!(dump.log, vec!["wing 2 ignored".to_string()]);
        assert_eq!(dump.wingtip(), Some(Point::new(10.0, 2.0)));

        let valid = dump.validate().unwrap();
        assert_eq!(valid.points(PartId::Fuselage).len(), 3);
        assert!(valid.points(PartId::MainWing).is_empty());
        assert_eq!(valid.points(PartId::StabWing), &[Point::new(-1.0, -3.5)]);
    }

    #[test]
    fn test_failed_dump_without_parts_parses() {
        let json = r#"{
            "file": "broken.acf",
            "log": ["no fuselage found", "giving up"],
            "success": false
        }"#;
        let dump = GeometryDump::from_json(json).unwrap();
        assert!(!dump.success);
        assert_eq!(
            dump.validate().unwrap_err(),
            OutlineError::ExtractionFailed {
                source_path: "broken.acf".to_string(),
                log_lines: 2,
            }
        );
    }

    #[test]
    fn test_failed_dump_ignores_garbage_parts() {
        let json = r#"{
            "file": "broken.acf",
            "log": ["no fuselage"],
            "success": false,
            "fuselage": null,
            "main_wing": "n/a",
            "stab_wing": [[1.0]],
            "wingtip": "unknown"
        }"#;
        let dump = GeometryDump::from_json(json).unwrap();
        assert_eq!(dump.wingtip(), None);
        assert_eq!(
            dump.validate().unwrap_err(),
            OutlineError::ExtractionFailed {
                source_path: "broken.acf".to_string(),
                log_lines: 1,
            }
        );
    }

    #[test]
    fn test_failed_dump_builder_fails_validation() {
        let dump = GeometryDump::failed("x.acf")
            .with_log_line("bad wing")
            .with_part(PartId::Fuselage, vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        assert!(matches!(
            dump.validate(),
            Err(OutlineError::ExtractionFailed { log_lines: 1, .. })
        ));
    }

    #[test]
    fn test_malformed_part_of_successful_dump_is_rejected() {
        let json = r#"{"file": "odd.acf", "success": true, "log": [], "main_wing": [[1.0]]}"#;
        let dump = GeometryDump::from_json(json).unwrap();
        match dump.validate().unwrap_err() {
            OutlineError::MalformedPart { part, source_path, .. } => {
                assert_eq!(part, PartId::MainWing);
                assert_eq!(source_path, "odd.acf");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_null_part_of_successful_dump_is_empty() {
        let json = r#"{"file": "a.acf", "success": true, "log": [], "fuselage": null}"#;
        let dump = GeometryDump::from_json(json).unwrap();
        assert!(dump.validate().unwrap().points(PartId::Fuselage).is_empty());
    }

    #[test]
    fn test_log_lines_do_not_fail_validation() {
        let dump = GeometryDump::new("a.acf")
            .with_log_line("unknown wing type")
            .with_log_line("stab skipped");
        assert!(dump.validate().is_ok());
    }

    #[test]
    fn test_extent_covers_all_parts() {
        let dump = GeometryDump::from_json(STEP_DUMP).unwrap();
        let extent = dump.validate().unwrap().extent();
        assert!((extent.max_abs_x - 10.0).abs() < 1e-10);
        assert!((extent.max_abs_y - 3.5).abs() < 1e-10);
    }

    #[test]
    fn test_parts_in_drawing_order() {
        let dump = GeometryDump::new("a.acf");
        let valid = dump.validate().unwrap();
        let order: Vec<PartId> = valid.parts().map(|(part, _)| part).collect();
        assert_eq!(order, PartId::ALL.to_vec());
    }

    #[test]
    fn test_json_roundtrip_keeps_part_order() {
        let dump = GeometryDump::new("plane.acf").with_part(
            PartId::MainWing,
            vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)],
        );
        let json = dump.to_json().unwrap();
        let restored = GeometryDump::from_json(&json).unwrap();
        assert_eq!(restored, dump);
    }
}
