//! Core library for laying out album sticker sheets.
//!
//! Each input record contributes four fixed-purpose stickers (spine, face,
//! front with its fold strip, back). The engine packs them onto the printable
//! region of a page using a largest-first, best-area-fit guillotine heuristic
//! with optional 90° rotation, and reports placement, overflow and capacity
//! statistics. All distances are millimetres.
//!
//! Quick example:
//! ```
//! use sticker_packer_core::prelude::*;
//!
//! let settings = Settings::default();
//! let records = vec![InputRecord::bare("album-1")];
//! let result = calculate_layout(&records, &settings);
//! assert!(result.fits);
//! assert_eq!(result.placed_count(), 4);
//! ```

pub mod config;
pub mod error;
pub mod expand;
pub mod model;
pub mod packer;
pub mod pipeline;

pub use config::*;
pub use error::*;
pub use expand::*;
pub use model::*;
pub use packer::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `sticker_packer_core::prelude::*` brings the primary APIs into
/// scope.
pub mod prelude {
    pub use crate::config::{
        Dimensions, LayoutOptions, Margins, Paper, PieceSize, PrintOptions, Settings,
        SettingsBuilder,
    };
    pub use crate::expand::{expand_record, expand_records};
    pub use crate::model::{
        FrontParts, InputRecord, LayoutResult, LayoutStats, PlacedSticker, PrintableArea, Rect,
        Sticker, StickerKind,
    };
    pub use crate::packer::{OverlapViolation, SheetPacker, overlap_violations};
    pub use crate::pipeline::{
        MAX_CAPACITY_TRIALS, calculate_layout, calculate_max_capacity, layout_stats,
    };
}
