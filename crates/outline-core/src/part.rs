use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three named geometry groups of an aircraft outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartId {
    Fuselage,
    MainWing,
    StabWing,
}

impl PartId {
    /// Every part, in drawing order.
    pub const ALL: [PartId; 3] = [PartId::Fuselage, PartId::MainWing, PartId::StabWing];

    /// Key of the part's coordinate list in an outline dump.
    pub fn key(self) -> &'static str {
        match self {
            PartId::Fuselage => "fuselage",
            PartId::MainWing => "main_wing",
            PartId::StabWing => "stab_wing",
        }
    }

    /// Stroke color of the part.
    pub fn color(self) -> PartColor {
        PART_COLORS[self as usize]
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// RGB stroke color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PartColor {
    pub const BLACK: PartColor = PartColor::new(0, 0, 0);
    pub const BLUE: PartColor = PartColor::new(0, 0, 255);
    pub const RED: PartColor = PartColor::new(255, 0, 0);
    pub const WHITE: PartColor = PartColor::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgb_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Indexed by `PartId as usize`.
const PART_COLORS: [PartColor; 3] = [PartColor::BLACK, PartColor::BLUE, PartColor::RED];
