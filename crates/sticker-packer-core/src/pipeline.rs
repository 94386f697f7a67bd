use std::cmp::Ordering;

use tracing::{debug, instrument, warn};

use crate::config::Settings;
use crate::expand::expand_records;
use crate::model::{InputRecord, LayoutResult, LayoutStats};
use crate::packer::{SheetPacker, overlap_violations};

/// Hard ceiling on capacity-estimation trials.
pub const MAX_CAPACITY_TRIALS: usize = 20;

/// Lays out every sticker contributed by `records` on one page.
///
/// Pure function of its inputs: the free-space bookkeeping lives and dies
/// inside this call, and identical inputs always produce identical output.
/// Unfittable stickers are reported in `failed`, never as an error.
#[instrument(skip_all, fields(records = records.len()))]
pub fn calculate_layout<P: Clone>(
    records: &[InputRecord<P>],
    settings: &Settings,
) -> LayoutResult<P> {
    let area = settings.printable_area();
    let spacing = settings.layout.element_spacing;

    let mut stickers = expand_records(records, &settings.dimensions);
    let requested = stickers.len();
    // Largest first; the stable sort keeps input order for equal areas. NaN
    // areas compare as equal, so a malformed piece stays in place and fails
    // its fit checks instead of poisoning the order.
    stickers.sort_by(|a, b| b.area().partial_cmp(&a.area()).unwrap_or(Ordering::Equal));

    let mut packer = SheetPacker::new(area, spacing, settings.layout.allow_rotation);
    let mut placed = Vec::with_capacity(requested);
    let mut failed = Vec::new();
    for sticker in stickers {
        match packer.place(sticker) {
            Ok(p) => placed.push(p),
            Err(s) => failed.push(s),
        }
    }

    if cfg!(debug_assertions) {
        for v in overlap_violations(&placed, spacing) {
            warn!(first = %v.first, second = %v.second, "placed stickers violate spacing");
        }
    }

    let fits = failed.is_empty();
    debug!(
        placed = placed.len(),
        failed = failed.len(),
        fits,
        "layout complete"
    );
    LayoutResult {
        stickers: placed,
        failed,
        fits,
        requested,
    }
}

/// Maximum number of whole records (four stickers each) one page can hold.
///
/// Runs trial layouts with growing synthetic record counts and stops at the
/// first count that overflows, or after [`MAX_CAPACITY_TRIALS`] trials.
/// Recomputed on every call; settings may have changed in between.
pub fn calculate_max_capacity(settings: &Settings) -> usize {
    let mut best = 0;
    for n in 1..=MAX_CAPACITY_TRIALS {
        let records: Vec<InputRecord> = (1..=n)
            .map(|i| InputRecord::bare(format!("capacity-{i}")))
            .collect();
        if calculate_layout(&records, settings).fits {
            best = n;
        } else {
            break;
        }
    }
    best
}

/// Layout statistics for `records` under `settings`: placement counts, area
/// efficiency and page capacity in one report.
pub fn layout_stats<P: Clone>(records: &[InputRecord<P>], settings: &Settings) -> LayoutStats {
    let result = calculate_layout(records, settings);
    let area = settings.printable_area();
    let used: f64 = result.stickers.iter().map(|p| p.frame.area()).sum();
    let efficiency = if area.is_degenerate() {
        0.0
    } else {
        used / area.area() * 100.0
    };
    LayoutStats {
        records: records.len(),
        total_pieces: result.requested,
        placed: result.placed_count(),
        failed: result.failed_count(),
        fits_on_page: result.fits,
        efficiency,
        max_capacity: calculate_max_capacity(settings),
    }
}
