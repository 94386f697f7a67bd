use sticker_packer_core::prelude::*;

#[test]
fn record_expands_to_four_fixed_pieces() {
    let dims = Dimensions::default();
    let stickers = expand_record(&InputRecord::bare("album-7"), &dims);
    assert_eq!(stickers.len(), 4);
    let kinds: Vec<_> = stickers.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, StickerKind::ALL);
    for s in &stickers {
        assert_eq!(s.owner_id, "album-7");
        assert_eq!(s.id, format!("album-7-{}", s.kind));
    }
}

#[test]
fn simple_pieces_copy_their_configured_size() {
    let dims = Dimensions::default();
    let stickers = expand_record(&InputRecord::bare("a"), &dims);
    let by_kind = |k: StickerKind| stickers.iter().find(|s| s.kind == k).unwrap();

    let spine = by_kind(StickerKind::Spine);
    assert_eq!((spine.width, spine.height), (dims.edge.width, dims.edge.height));
    let face = by_kind(StickerKind::Face);
    assert_eq!((face.width, face.height), (dims.face.width, dims.face.height));
    let back = by_kind(StickerKind::Back);
    assert_eq!((back.width, back.height), (dims.back.width, dims.back.height));
}

#[test]
fn front_is_panel_plus_fold() {
    let dims = Dimensions::default();
    let stickers = expand_record(&InputRecord::bare("a"), &dims);
    let front = stickers
        .iter()
        .find(|s| s.kind == StickerKind::Front)
        .unwrap();
    assert_eq!(front.width, dims.front.width);
    assert_eq!(front.height, dims.front.height + dims.fold.height);

    let parts = front.parts.expect("front carries its part breakdown");
    assert_eq!(parts.image, dims.front);
    assert_eq!(parts.fold, dims.fold);

    // only the front is composite
    assert!(
        stickers
            .iter()
            .filter(|s| s.kind != StickerKind::Front)
            .all(|s| s.parts.is_none())
    );
}

#[test]
fn payload_is_carried_through() {
    let record = InputRecord {
        id: "a".to_string(),
        payload: "Lush Life".to_string(),
    };
    let stickers = expand_record(&record, &Dimensions::default());
    assert!(stickers.iter().all(|s| s.payload == "Lush Life"));
}

#[test]
fn expansion_preserves_record_order() {
    let records = [InputRecord::bare("x"), InputRecord::bare("y")];
    let stickers = expand_records(&records, &Dimensions::default());
    assert_eq!(stickers.len(), 8);
    assert!(stickers[..4].iter().all(|s| s.owner_id == "x"));
    assert!(stickers[4..].iter().all(|s| s.owner_id == "y"));
}

#[test]
fn parts_survive_placement() {
    let settings = Settings::default();
    let result = calculate_layout(&[InputRecord::bare("a")], &settings);
    let front = result
        .stickers
        .iter()
        .find(|p| p.sticker.kind == StickerKind::Front)
        .expect("front fits on A4");
    let parts = front.sticker.parts.expect("parts carried through placement");
    assert_eq!(parts.image, settings.dimensions.front);
    assert_eq!(parts.fold, settings.dimensions.fold);
}
