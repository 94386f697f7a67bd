use sticker_packer_core::prelude::*;

fn piece(id: &str, w: f64, h: f64) -> Sticker<()> {
    Sticker {
        id: id.into(),
        owner_id: id.into(),
        kind: StickerKind::Face,
        width: w,
        height: h,
        payload: (),
        parts: None,
    }
}

fn area(w: f64, h: f64) -> PrintableArea {
    PrintableArea {
        width: w,
        height: h,
        offset_x: 0.0,
        offset_y: 0.0,
    }
}

#[test]
fn rotates_when_only_rotated_fits() {
    let mut p = SheetPacker::new(area(16.0, 12.0), 0.0, true);
    let placed = p
        .place(piece("r", 8.0, 14.0))
        .expect("rotated fit should succeed");
    assert!(placed.rotated);
    assert_eq!(placed.rotation_degrees(), 90);
    assert_eq!(placed.frame.w, 14.0);
    assert_eq!(placed.frame.h, 8.0);
    // nominal dimensions survive for downstream un-rotation
    assert_eq!(placed.sticker.width, 8.0);
    assert_eq!(placed.sticker.height, 14.0);
}

#[test]
fn rotation_disabled_rejects_tall_piece() {
    let mut p = SheetPacker::new(area(16.0, 12.0), 0.0, false);
    assert!(p.place(piece("r", 8.0, 14.0)).is_err());
}

#[test]
fn unrotated_wins_equal_waste_ties() {
    // A square free area accepts both orientations with identical waste;
    // the 0° orientation must be kept.
    let mut p = SheetPacker::new(area(20.0, 20.0), 0.0, true);
    let placed = p.place(piece("r", 10.0, 6.0)).unwrap();
    assert!(!placed.rotated);
    assert_eq!(placed.rotation_degrees(), 0);
    assert_eq!(placed.frame.w, 10.0);
    assert_eq!(placed.frame.h, 6.0);
}

#[test]
fn final_dims_swap_exactly_when_rotated() {
    let settings = Settings::default();
    let records: Vec<_> = (1..=3)
        .map(|i| InputRecord::bare(format!("a{i}")))
        .collect();
    let result = calculate_layout(&records, &settings);
    assert!(!result.stickers.is_empty());
    for p in &result.stickers {
        if p.rotated {
            assert_eq!(p.frame.w, p.sticker.height, "{}", p.sticker.id);
            assert_eq!(p.frame.h, p.sticker.width, "{}", p.sticker.id);
        } else {
            assert_eq!(p.frame.w, p.sticker.width, "{}", p.sticker.id);
            assert_eq!(p.frame.h, p.sticker.height, "{}", p.sticker.id);
        }
    }
}

#[test]
fn spacing_counts_against_the_fit() {
    // 10x10 piece in a 11x11 area: fine without spacing, rejected with it.
    let mut loose = SheetPacker::new(area(11.0, 11.0), 0.0, true);
    assert!(loose.place(piece("a", 10.0, 10.0)).is_ok());

    let mut tight = SheetPacker::new(area(11.0, 11.0), 2.0, true);
    assert!(tight.place(piece("b", 10.0, 10.0)).is_err());
}
