// Application state and per-frame update. The state tree is owned here and
// handed to the views by mutable reference; every transition goes through the
// model types in src/model.

use eframe::{egui, App};

use crate::deck::Deck;
use crate::model::{CategoryFilter, DragState, SelectionOrder};
use crate::views::header::draw_header;
use crate::views::selection_bar::draw_selection_bar;

mod errors_ui;
mod export;
mod grid;
mod logs_ui;

use export::ExportState;

pub struct ValueDeckApp {
    deck: Deck,
    filter: CategoryFilter,
    selection: SelectionOrder,
    drag: DragState,
    export: ExportState,
}

impl Default for ValueDeckApp {
    fn default() -> Self {
        // One-time shuffle at startup; ids stay stable, only display order moves.
        let mut deck = Deck::new();
        deck.shuffle(&mut rand::thread_rng());
        Self {
            deck,
            filter: CategoryFilter::default(),
            selection: SelectionOrder::default(),
            drag: DragState::default(),
            export: ExportState::new(),
        }
    }
}

impl App for ValueDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if crate::logger::take_new_flag() {
            ctx.request_repaint();
        }

        self.poll_export(ctx);

        let header = draw_header(ctx, &mut self.filter);
        if header.shuffle {
            self.deck.shuffle(&mut rand::thread_rng());
        }
        if header.logs {
            logs_ui::open_logs();
            ctx.request_repaint();
        }

        // Bottom bar slides in only while something is selected.
        if !self.selection.is_empty() {
            let bar = draw_selection_bar(
                ctx,
                &self.deck,
                &mut self.selection,
                &mut self.drag,
                self.export.in_progress,
                self.export.last_error.as_deref(),
            );
            if bar.download_clicked {
                self.start_export(ctx);
            }
        } else {
            self.drag.cancel();
        }

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(egui::Color32::from_rgb(245, 245, 244))
                    .inner_margin(crate::ui_constants::spacing::LARGE),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.draw_deck_grid(ui);
                    });
            });

        logs_ui::draw_logs_viewport(ctx);
        errors_ui::draw_errors_button(ctx);
        errors_ui::draw_errors_viewport(ctx);
    }
}
