use serde::{Deserialize, Serialize};

use crate::config::PieceSize;

/// Axis-aligned rectangle (millimetres). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
    /// Right edge coordinate (`x + w`).
    pub fn right(&self) -> f64 {
        self.x + self.w
    }
    /// Bottom edge coordinate (`y + h`).
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
    pub fn area(&self) -> f64 {
        self.w * self.h
    }
    /// Returns true if `r` is fully inside `self` (edges may coincide).
    pub fn contains(&self, r: &Rect) -> bool {
        r.x >= self.x && r.y >= self.y && r.right() <= self.right() && r.bottom() <= self.bottom()
    }
    /// Returns true if a `w`×`h` piece plus a `spacing` margin on its right
    /// and bottom sides fits inside this rectangle.
    pub fn fits(&self, w: f64, h: f64, spacing: f64) -> bool {
        self.w >= w + spacing && self.h >= h + spacing
    }
}

/// The four fixed-purpose pieces every record contributes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StickerKind {
    /// Narrow strip along the case edge.
    Spine,
    /// Small label on the medium itself.
    Face,
    /// Cover panel plus the fold-over strip stacked under it.
    Front,
    /// Rear panel.
    Back,
}

impl StickerKind {
    /// Expansion order; also the piece order within one record's bundle.
    pub const ALL: [StickerKind; 4] = [
        StickerKind::Spine,
        StickerKind::Face,
        StickerKind::Front,
        StickerKind::Back,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StickerKind::Spine => "spine",
            StickerKind::Face => "face",
            StickerKind::Front => "front",
            StickerKind::Back => "back",
        }
    }
}

impl std::fmt::Display for StickerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One source record (an album) to lay out.
///
/// `payload` is carried through to every sticker the record contributes and
/// is never interpreted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputRecord<P = ()> {
    pub id: String,
    pub payload: P,
}

impl InputRecord<()> {
    /// Record with an id and no payload.
    pub fn bare(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            payload: (),
        }
    }
}

/// Sub-part sizes of the front composite, kept so renderers can draw the
/// fold line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FrontParts {
    pub image: PieceSize,
    pub fold: PieceSize,
}

/// One placeable rectangle, pre-placement. Dimensions are nominal
/// (unrotated), in millimetres.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sticker<P = ()> {
    /// `"{owner_id}-{kind}"`.
    pub id: String,
    pub owner_id: String,
    pub kind: StickerKind,
    pub width: f64,
    pub height: f64,
    /// Opaque reference back to the owning record.
    pub payload: P,
    /// Sub-rectangle breakdown, present only for the front composite.
    pub parts: Option<FrontParts>,
}

impl<P> Sticker<P> {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// A sticker with its final placement on the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedSticker<P = ()> {
    /// The source sticker; keeps the nominal (pre-rotation) dimensions.
    pub sticker: Sticker<P>,
    /// Final placement in page coordinates (offset by the printable-area
    /// origin); `w`/`h` are post-rotation.
    pub frame: Rect,
    /// True if the sticker was rotated 90° when placed.
    pub rotated: bool,
}

impl<P> PlacedSticker<P> {
    /// Rotation applied at placement, in degrees.
    pub fn rotation_degrees(&self) -> u32 {
        if self.rotated { 90 } else { 0 }
    }
}

/// Usable page region after subtracting print margins. Derived from
/// [`Settings`](crate::config::Settings) on every call, never cached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PrintableArea {
    pub width: f64,
    pub height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl PrintableArea {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
    /// A degenerate area fits nothing; callers should treat it as
    /// "zero capacity", not as an error.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Output of a layout run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutResult<P = ()> {
    /// Successfully placed stickers, in placement order.
    pub stickers: Vec<PlacedSticker<P>>,
    /// Stickers that could not be placed anywhere.
    pub failed: Vec<Sticker<P>>,
    /// True iff every requested sticker was placed.
    pub fits: bool,
    /// Number of stickers requested (`stickers.len() + failed.len()`).
    pub requested: usize,
}

impl<P> LayoutResult<P> {
    pub fn placed_count(&self) -> usize {
        self.stickers.len()
    }
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }
}

/// Statistics about a layout run, including page capacity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Number of input records.
    pub records: usize,
    /// Pieces requested (four per record).
    pub total_pieces: usize,
    pub placed: usize,
    pub failed: usize,
    pub fits_on_page: bool,
    /// Share of the printable area covered by placed stickers, percent.
    /// Zero when the printable area is degenerate.
    pub efficiency: f64,
    /// Maximum number of whole records the page can hold.
    pub max_capacity: usize,
}

impl LayoutStats {
    /// Returns a human-readable one-line summary.
    pub fn summary(&self) -> String {
        format!(
            "Records: {}, Pieces: {}/{} placed, Fits: {}, Efficiency: {:.1}%, Capacity: {}",
            self.records,
            self.placed,
            self.total_pieces,
            self.fits_on_page,
            self.efficiency,
            self.max_capacity,
        )
    }
}
