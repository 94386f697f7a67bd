use crate::config::Dimensions;
use crate::model::{FrontParts, InputRecord, Sticker, StickerKind};

/// Expands one record into its four stickers.
///
/// Piece sizes come straight from `dims`. The front sticker is the cover
/// panel and the fold strip stacked vertically; its `parts` keeps the
/// breakdown so renderers can draw the fold line. Always succeeds; a
/// malformed dimension value flows through and fails at placement instead.
pub fn expand_record<P: Clone>(record: &InputRecord<P>, dims: &Dimensions) -> Vec<Sticker<P>> {
    StickerKind::ALL
        .iter()
        .map(|&kind| {
            let (width, height, parts) = match kind {
                StickerKind::Spine => (dims.edge.width, dims.edge.height, None),
                StickerKind::Face => (dims.face.width, dims.face.height, None),
                StickerKind::Front => (
                    dims.front.width,
                    dims.front.height + dims.fold.height,
                    Some(FrontParts {
                        image: dims.front,
                        fold: dims.fold,
                    }),
                ),
                StickerKind::Back => (dims.back.width, dims.back.height, None),
            };
            Sticker {
                id: format!("{}-{}", record.id, kind),
                owner_id: record.id.clone(),
                kind,
                width,
                height,
                payload: record.payload.clone(),
                parts,
            }
        })
        .collect()
}

/// Expands every record, preserving record order then kind order.
pub fn expand_records<P: Clone>(records: &[InputRecord<P>], dims: &Dimensions) -> Vec<Sticker<P>> {
    records
        .iter()
        .flat_map(|r| expand_record(r, dims))
        .collect()
}
