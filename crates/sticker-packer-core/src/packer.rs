use crate::model::{PlacedSticker, PrintableArea, Rect, Sticker};

/// Tolerance for shared edges reached through float addition.
const EDGE_EPS: f64 = 1e-6;

/// Greedy guillotine packer for one sheet.
///
/// Owns the free-rectangle list for a single layout run; nothing is shared
/// across runs. Pieces are offered one at a time (largest-first ordering is
/// the caller's job). Each piece goes into the free rectangle wasting the
/// least area, preferring the unrotated orientation, with `spacing` charged
/// against the right and bottom of the consumed footprint so subsequent
/// placements keep the gap.
pub struct SheetPacker {
    area: PrintableArea,
    spacing: f64,
    allow_rotation: bool,
    free: Vec<Rect>,
    used: Vec<Rect>,
}

impl SheetPacker {
    pub fn new(area: PrintableArea, spacing: f64, allow_rotation: bool) -> Self {
        Self {
            area,
            spacing,
            allow_rotation,
            free: vec![Rect::new(0.0, 0.0, area.width, area.height)],
            used: Vec::new(),
        }
    }

    /// Current free rectangles, printable-area-local, in list order.
    pub fn free_rects(&self) -> &[Rect] {
        &self.free
    }

    /// Footprints consumed so far (sticker plus spacing), printable-area-local.
    pub fn used_rects(&self) -> &[Rect] {
        &self.used
    }

    /// Picks the free rectangle and orientation wasting the least area.
    ///
    /// Scans free rectangles in list order, unrotated before rotated, keeping
    /// the first strictly-better candidate; equal-waste ties therefore
    /// resolve to the earliest free rectangle and the 0° orientation.
    fn choose(&self, w: f64, h: f64) -> Option<(usize, bool)> {
        let mut best = None;
        let mut best_waste = f64::INFINITY;
        for (i, fr) in self.free.iter().enumerate() {
            if fr.fits(w, h, self.spacing) {
                let waste = fr.area() - w * h;
                if waste < best_waste {
                    best_waste = waste;
                    best = Some((i, false));
                }
            }
            if self.allow_rotation && fr.fits(h, w, self.spacing) {
                let waste = fr.area() - h * w;
                if waste < best_waste {
                    best_waste = waste;
                    best = Some((i, true));
                }
            }
        }
        best
    }

    /// Attempts to place one sticker flush at the top-left corner of the best
    /// free rectangle. On success the consumed rectangle is split and the
    /// free list pruned; on failure the sticker is handed back unchanged and
    /// no state is touched.
    pub fn place<P>(&mut self, sticker: Sticker<P>) -> Result<PlacedSticker<P>, Sticker<P>> {
        let Some((idx, rotated)) = self.choose(sticker.width, sticker.height) else {
            return Err(sticker);
        };
        let (fw, fh) = if rotated {
            (sticker.height, sticker.width)
        } else {
            (sticker.width, sticker.height)
        };
        let fr = self.free[idx];
        let frame = Rect::new(
            self.area.offset_x + fr.x,
            self.area.offset_y + fr.y,
            fw,
            fh,
        );
        self.consume(idx, fw + self.spacing, fh + self.spacing);
        Ok(PlacedSticker {
            sticker,
            frame,
            rotated,
        })
    }

    /// Splits the consumed rectangle into right/bottom remainders and prunes
    /// contained duplicates. `Vec::remove` keeps the list in insertion order,
    /// which the tie-break in `choose` depends on.
    fn consume(&mut self, idx: usize, used_w: f64, used_h: f64) {
        let fr = self.free.remove(idx);
        // The remainders deliberately overlap: the bottom one spans the full
        // original width, including the region under the right one. Pruning
        // keeps the list bounded.
        if fr.w > used_w {
            self.free
                .push(Rect::new(fr.x + used_w, fr.y, fr.w - used_w, fr.h));
        }
        if fr.h > used_h {
            self.free
                .push(Rect::new(fr.x, fr.y + used_h, fr.w, fr.h - used_h));
        }
        self.prune_free_list();
        self.used.push(Rect::new(fr.x, fr.y, used_w, used_h));
    }

    /// Drops every free rectangle fully contained in another. Runs after
    /// every placement, not batched, since the next placement queries the
    /// current list.
    fn prune_free_list(&mut self) {
        let mut i = 0;
        while i < self.free.len() {
            let mut remove_i = false;
            let mut j = i + 1;
            while j < self.free.len() {
                let a = self.free[i];
                let b = self.free[j];
                if b.contains(&a) {
                    remove_i = true;
                    break;
                }
                if a.contains(&b) {
                    self.free.remove(j);
                    continue;
                }
                j += 1;
            }
            if remove_i {
                self.free.remove(i);
            } else {
                i += 1;
            }
        }
    }
}

/// One spacing violation between two placed stickers, identified by their
/// sticker ids. A correct placement run yields none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapViolation {
    pub first: String,
    pub second: String,
}

/// Checks every pair of placed stickers for spacing violations: each frame
/// is expanded by `spacing / 2` on all sides and tested for intersection.
///
/// Diagnostic only: callers log or assert on the result, never alter the
/// layout. Frames whose expanded edges merely touch (the gap is exactly
/// `spacing`, up to float roundoff) do not count.
pub fn overlap_violations<P>(placed: &[PlacedSticker<P>], spacing: f64) -> Vec<OverlapViolation> {
    let mut violations = Vec::new();
    for i in 0..placed.len() {
        for j in (i + 1)..placed.len() {
            let a = &placed[i].frame;
            let b = &placed[j].frame;
            let overlap_x = a.right().min(b.right()) - a.x.max(b.x) + spacing;
            let overlap_y = a.bottom().min(b.bottom()) - a.y.max(b.y) + spacing;
            if overlap_x > EDGE_EPS && overlap_y > EDGE_EPS {
                violations.push(OverlapViolation {
                    first: placed[i].sticker.id.clone(),
                    second: placed[j].sticker.id.clone(),
                });
            }
        }
    }
    violations
}
