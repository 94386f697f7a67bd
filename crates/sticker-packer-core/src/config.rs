use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::model::PrintableArea;

/// Width/height of one piece, millimetres.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PieceSize {
    pub width: f64,
    pub height: f64,
}

impl PieceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Piece dimensions contributed by every record.
///
/// `front` is the primary cover panel and `fold` the strip stacked under it;
/// the expander emits the two as one composite sticker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Dimensions {
    pub edge: PieceSize,
    pub face: PieceSize,
    pub front: PieceSize,
    pub fold: PieceSize,
    pub back: PieceSize,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            edge: PieceSize::new(58.0, 3.0),
            face: PieceSize::new(36.0, 53.0),
            front: PieceSize::new(68.0, 65.0),
            fold: PieceSize::new(68.0, 3.0),
            back: PieceSize::new(68.0, 58.0),
        }
    }
}

/// Placement options.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LayoutOptions {
    /// Minimum gap between placed stickers, millimetres.
    pub element_spacing: f64,
    /// Allow 90° rotation where it helps a piece fit.
    pub allow_rotation: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            element_spacing: 2.0,
            allow_rotation: true,
        }
    }
}

/// Page size, millimetres.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Paper {
    pub width: f64,
    pub height: f64,
}

impl Paper {
    pub const A4: Paper = Paper {
        width: 210.0,
        height: 297.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Paper {
    fn default() -> Self {
        Paper::A4
    }
}

/// Print margins, millimetres.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Margins {
    pub fn uniform(v: f64) -> Self {
        Self {
            top: v,
            bottom: v,
            left: v,
            right: v,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        // 0.25 in, a common printer hardware margin
        Margins::uniform(6.35)
    }
}

/// Printer-facing options.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PrintOptions {
    #[serde(default)]
    pub margins: Margins,
}

/// Fully-resolved layout settings.
///
/// Defaulting of partial user input is the caller's job (the CLI does it via
/// serde defaults); the engine reads these fields as-is and never falls back.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub layout: LayoutOptions,
    #[serde(default)]
    pub paper: Paper,
    #[serde(default)]
    pub print: PrintOptions,
}

impl Settings {
    /// Usable page region: paper minus margins, origin at the top-left
    /// margin corner. Recomputed on every call so it always reflects the
    /// current settings. A zero or negative result is legal input and simply
    /// means nothing can be placed.
    pub fn printable_area(&self) -> PrintableArea {
        let m = &self.print.margins;
        PrintableArea {
            width: self.paper.width - m.left - m.right,
            height: self.paper.height - m.top - m.bottom,
            offset_x: m.left,
            offset_y: m.top,
        }
    }

    /// Create a fluent builder for `Settings`.
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }

    /// Validates that every numeric field is finite and sensibly signed.
    ///
    /// This is an opt-in check for settings loaded from external input; the
    /// layout functions accept any values and let unfittable pieces fall out
    /// as failures. Margins that consume the whole page are legal here.
    pub fn validate(&self) -> Result<()> {
        if !self.paper.width.is_finite()
            || !self.paper.height.is_finite()
            || self.paper.width <= 0.0
            || self.paper.height <= 0.0
        {
            return Err(LayoutError::InvalidPaper {
                width: self.paper.width,
                height: self.paper.height,
            });
        }
        let m = &self.print.margins;
        let non_negative = [
            ("print.margins.top", m.top),
            ("print.margins.bottom", m.bottom),
            ("print.margins.left", m.left),
            ("print.margins.right", m.right),
            ("layout.element_spacing", self.layout.element_spacing),
        ];
        for (name, v) in non_negative {
            if !v.is_finite() || v < 0.0 {
                return Err(LayoutError::InvalidSettings(format!(
                    "{name} must be a non-negative number, got {v}"
                )));
            }
        }
        let d = &self.dimensions;
        let pieces = [
            ("edge", d.edge),
            ("face", d.face),
            ("front", d.front),
            ("fold", d.fold),
            ("back", d.back),
        ];
        for (name, p) in pieces {
            if !p.width.is_finite() || !p.height.is_finite() || p.width < 0.0 || p.height < 0.0 {
                return Err(LayoutError::InvalidSettings(format!(
                    "dimensions.{name} must have non-negative width/height, got {}x{}",
                    p.width, p.height
                )));
            }
        }
        Ok(())
    }
}

/// Builder for [`Settings`] for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct SettingsBuilder {
    cfg: Settings,
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self {
            cfg: Settings::default(),
        }
    }
    pub fn paper(mut self, width: f64, height: f64) -> Self {
        self.cfg.paper = Paper::new(width, height);
        self
    }
    pub fn margins(mut self, top: f64, bottom: f64, left: f64, right: f64) -> Self {
        self.cfg.print.margins = Margins {
            top,
            bottom,
            left,
            right,
        };
        self
    }
    pub fn uniform_margins(mut self, v: f64) -> Self {
        self.cfg.print.margins = Margins::uniform(v);
        self
    }
    pub fn element_spacing(mut self, v: f64) -> Self {
        self.cfg.layout.element_spacing = v;
        self
    }
    pub fn allow_rotation(mut self, v: bool) -> Self {
        self.cfg.layout.allow_rotation = v;
        self
    }
    pub fn dimensions(mut self, v: Dimensions) -> Self {
        self.cfg.dimensions = v;
        self
    }
    pub fn edge(mut self, width: f64, height: f64) -> Self {
        self.cfg.dimensions.edge = PieceSize::new(width, height);
        self
    }
    pub fn face(mut self, width: f64, height: f64) -> Self {
        self.cfg.dimensions.face = PieceSize::new(width, height);
        self
    }
    pub fn front(mut self, width: f64, height: f64) -> Self {
        self.cfg.dimensions.front = PieceSize::new(width, height);
        self
    }
    pub fn fold(mut self, width: f64, height: f64) -> Self {
        self.cfg.dimensions.fold = PieceSize::new(width, height);
        self
    }
    pub fn back(mut self, width: f64, height: f64) -> Self {
        self.cfg.dimensions.back = PieceSize::new(width, height);
        self
    }
    pub fn build(self) -> Settings {
        self.cfg
    }
}
