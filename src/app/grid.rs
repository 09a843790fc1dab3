use eframe::egui;

use crate::deck::Card;
use crate::localization::translate;
use crate::ui_constants::{GRID_CARD_WIDTH, GRID_GAP};
use crate::views::cards::grid_card;

/// Virtualized deck grid: only rows intersecting the visible viewport are
/// drawn. Cards have a fixed 3:4 aspect so row height is stable.
impl super::ValueDeckApp {
    pub(super) fn draw_deck_grid(&mut self, ui: &mut egui::Ui) {
        let visible: Vec<Card> = self.deck.visible(&self.filter).copied().collect();
        if visible.is_empty() {
            ui.add_space(80.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(translate("empty-grid"))
                        .italics()
                        .color(egui::Color32::from_gray(150)),
                );
            });
            return;
        }

        let avail = ui.available_width();
        let cols = (((avail + GRID_GAP) / (GRID_CARD_WIDTH + GRID_GAP)).floor() as usize).max(1);
        let used = cols as f32 * GRID_CARD_WIDTH + (cols as f32 - 1.0) * GRID_GAP;
        let left_pad = ((avail - used) / 2.0).max(0.0);

        let card_h = GRID_CARD_WIDTH * 4.0 / 3.0;
        let row_h = card_h + GRID_GAP;
        let total_rows = visible.len().div_ceil(cols);

        // Which rows intersect the current clip rect
        let start_y = ui.cursor().min.y;
        let clip = ui.clip_rect();
        let overscan: isize = 1;
        let first = (((clip.top() - start_y) / row_h).floor() as isize - overscan).max(0) as usize;
        let last = (((clip.bottom() - start_y) / row_h).ceil() as isize + overscan)
            .clamp(0, total_rows as isize) as usize;
        let first = first.min(last);

        let top_skip = first as f32 * row_h;
        if top_skip > 0.0 {
            ui.add_space(top_skip);
        }

        for r in first..last {
            ui.horizontal(|ui| {
                ui.add_space(left_pad);
                ui.spacing_mut().item_spacing.x = GRID_GAP;
                for card in visible.iter().skip(r * cols).take(cols) {
                    let selected = self.selection.contains(card.id);
                    if grid_card(ui, card, selected, GRID_CARD_WIDTH).clicked() {
                        self.selection.toggle(card.id);
                    }
                }
            });
            ui.add_space(GRID_GAP);
        }

        // Trailing space so the scroll height covers the skipped rows
        let bottom_skip = (total_rows - last) as f32 * row_h;
        if bottom_skip > 0.0 {
            ui.add_space(bottom_skip);
        }
    }
}
