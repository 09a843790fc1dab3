use eframe::egui::{self, RichText};

use crate::deck::{CardId, Deck};
use crate::localization::{translate, translate_with};
use crate::model::{DragState, SelectionOrder, Side};
use crate::ui_constants::spacing;
use crate::views::cards::selected_tile;

pub struct SelectionBarAction {
    pub download_clicked: bool,
}

/// Bottom panel with the selected tiles in order. The caller only draws it
/// when the selection is non-empty. Drag events observed on the tiles are fed
/// into the drag state machine; the actual reorder happens on pointer
/// release via `DragState::drop_onto`.
pub fn draw_selection_bar(
    ctx: &egui::Context,
    deck: &Deck,
    selection: &mut SelectionOrder,
    drag: &mut DragState,
    export_busy: bool,
    export_error: Option<&str>,
) -> SelectionBarAction {
    let mut action = SelectionBarAction {
        download_clicked: false,
    };

    egui::TopBottomPanel::bottom("selection_bar")
        .frame(
            egui::Frame::none()
                .fill(egui::Color32::from_rgb(255, 255, 255))
                .inner_margin(egui::Margin::symmetric(spacing::LARGE, spacing::MEDIUM)),
        )
        .show(ctx, |ui| {
            draw_bar_header(ui, selection, drag, export_busy, &mut action);
            if let Some(err) = export_error {
                ui.colored_label(
                    egui::Color32::from_rgb(200, 60, 60),
                    translate_with("export-failed", &[("reason", err.to_string())]),
                );
            }
            ui.add_space(spacing::SMALL);
            draw_tiles(ui, deck, selection, drag);
            ui.add_space(spacing::SMALL);
        });

    action
}

fn draw_bar_header(
    ui: &mut egui::Ui,
    selection: &mut SelectionOrder,
    drag: &mut DragState,
    export_busy: bool,
    action: &mut SelectionBarAction,
) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(translate_with(
                "selected-count",
                &[("count", selection.len().to_string())],
            ))
            .strong(),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .small_button(format!("🗑 {}", translate("action-clear")))
                .clicked()
            {
                selection.clear();
                drag.cancel();
            }

            ui.add_space(spacing::MEDIUM);

            let label = if export_busy {
                translate("action-downloading")
            } else {
                translate("action-download")
            };
            let download = ui.add_enabled(
                !export_busy && !selection.is_empty(),
                egui::Button::new(format!("💾 {label}")).small(),
            );
            if export_busy {
                ui.add(egui::Spinner::new().size(14.0));
            }
            if download.clicked() {
                action.download_clicked = true;
            }
        });
    });
}

fn draw_tiles(
    ui: &mut egui::Ui,
    deck: &Deck,
    selection: &mut SelectionOrder,
    drag: &mut DragState,
) {
    let ids: Vec<_> = selection.iter().collect();
    let pointer = ui.input(|i| i.pointer.latest_pos());
    let mut remove: Option<CardId> = None;
    let mut hovered_tile = false;

    let scroll_rect = egui::ScrollArea::horizontal()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 12.0;
                for id in ids {
                    let Some(card) = deck.card(id) else { continue };

                    let dragging = drag.dragged() == Some(id);
                    let indicator = drag.target().filter(|t| t.id == id).map(|t| t.side);
                    let tile = selected_tile(ui, card, dragging, indicator);

                    if tile.remove_clicked {
                        remove = Some(id);
                        continue;
                    }
                    if tile.response.drag_started() {
                        drag.begin(id);
                    }
                    if drag.is_dragging() {
                        if let Some(pos) = pointer {
                            let rect = tile.response.rect;
                            if rect.contains(pos) {
                                hovered_tile = true;
                                // Hovering the dragged tile itself keeps the
                                // previous target (self-target is ignored).
                                if !dragging {
                                    let side = if pos.x < rect.center().x {
                                        Side::Left
                                    } else {
                                        Side::Right
                                    };
                                    drag.hover(id, side);
                                }
                            }
                        }
                    }
                }
            })
        })
        .inner_rect;

    if let Some(id) = remove {
        selection.remove(id);
        if drag.dragged() == Some(id) {
            drag.cancel();
        }
    }

    if drag.is_dragging() {
        // Pointer over the bar's empty space cancels the pending insertion.
        if let Some(pos) = pointer {
            if !hovered_tile && scroll_rect.contains(pos) {
                drag.clear_target();
            }
        }
        if ui.input(|i| i.pointer.any_released()) {
            drag.drop_onto(selection);
        }
        ui.ctx().request_repaint();
    }
}
