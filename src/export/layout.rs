use eframe::egui::{pos2, vec2, Rect, Vec2};

use super::ExportCard;
use crate::ui_constants::export as consts;

/// Pure sheet geometry: where the title sits and where each card box goes,
/// all in points (pre-scale).
pub struct SheetLayout<'a> {
    pub size: Vec2,
    pub title_center: eframe::egui::Pos2,
    pub boxes: Vec<CardBox<'a>>,
}

pub struct CardBox<'a> {
    pub rect: Rect,
    pub card: &'a ExportCard,
}

/// Lays the cards out row-major, `COLUMNS` per row, on a fixed-width sheet
/// whose height grows with the row count. An empty snapshot yields no boxes.
pub fn layout_sheet(cards: &[ExportCard]) -> SheetLayout<'_> {
    let cols = consts::COLUMNS;
    let inner_w = consts::SHEET_WIDTH - 2.0 * consts::MARGIN;
    let card_w = (inner_w - (cols as f32 - 1.0) * consts::CARD_GAP) / cols as f32;
    let card_h = card_w * 4.0 / 3.0;

    let rows = cards.len().div_ceil(cols);
    let grid_h = rows as f32 * card_h + rows.saturating_sub(1) as f32 * consts::CARD_GAP;
    let height = consts::MARGIN + consts::TITLE_BLOCK + grid_h + consts::MARGIN;

    let grid_top = consts::MARGIN + consts::TITLE_BLOCK;
    let boxes = cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let (r, c) = (i / cols, i % cols);
            let x = consts::MARGIN + c as f32 * (card_w + consts::CARD_GAP);
            let y = grid_top + r as f32 * (card_h + consts::CARD_GAP);
            CardBox {
                rect: Rect::from_min_size(pos2(x, y), vec2(card_w, card_h)),
                card,
            }
        })
        .collect();

    SheetLayout {
        size: vec2(consts::SHEET_WIDTH, height),
        title_center: pos2(consts::SHEET_WIDTH / 2.0, consts::MARGIN + 16.0),
        boxes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn cards(n: usize) -> Vec<ExportCard> {
        (1..=n)
            .map(|seq| ExportCard {
                seq,
                text: "Loyalty",
                label: "Virtues".to_string(),
                category: Category::Virtue,
            })
            .collect()
    }

    #[test]
    fn empty_snapshot_yields_no_boxes() {
        let cs = cards(0);
        let sheet = layout_sheet(&cs);
        assert!(sheet.boxes.is_empty());
    }

    #[test]
    fn boxes_are_row_major_five_per_row() {
        let cs = cards(12);
        let sheet = layout_sheet(&cs);
        assert_eq!(sheet.boxes.len(), 12);
        for (i, b) in sheet.boxes.iter().enumerate() {
            assert_eq!(b.card.seq, i + 1);
        }
        // first row shares y, sixth box starts the second row
        let y0 = sheet.boxes[0].rect.min.y;
        assert_eq!(sheet.boxes[4].rect.min.y, y0);
        assert!(sheet.boxes[5].rect.min.y > y0);
        assert_eq!(sheet.boxes[5].rect.min.x, sheet.boxes[0].rect.min.x);
    }

    #[test]
    fn sheet_grows_with_row_count() {
        let one_row = layout_sheet(&cards(5)).size.y;
        let two_rows = layout_sheet(&cards(6)).size.y;
        assert!(two_rows > one_row);
        assert_eq!(
            layout_sheet(&cards(1)).size.x,
            crate::ui_constants::export::SHEET_WIDTH
        );
    }

    #[test]
    fn boxes_stay_inside_the_sheet() {
        let cs = cards(14);
        let sheet = layout_sheet(&cs);
        for b in &sheet.boxes {
            assert!(b.rect.min.x >= 0.0 && b.rect.min.y >= 0.0);
            assert!(b.rect.max.x <= sheet.size.x + 0.5);
            assert!(b.rect.max.y <= sheet.size.y + 0.5);
        }
    }
}
