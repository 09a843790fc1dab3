// Errors viewport and floating "Errors" button. Export failures land here so
// the user sees them without digging through the logs.

use eframe::egui;
use lazy_static::lazy_static;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

const MAX_ERRORS: usize = 200;

lazy_static! {
    static ref ERRORS: Mutex<VecDeque<String>> = Mutex::new(VecDeque::new());
}

static ERRORS_OPEN: AtomicBool = AtomicBool::new(false);

pub(super) fn append_error(msg: impl Into<String>) {
    if let Ok(mut q) = ERRORS.lock() {
        q.push_back(msg.into());
        if q.len() > MAX_ERRORS {
            q.pop_front();
        }
    }
}

fn len() -> usize {
    ERRORS.lock().map(|q| q.len()).unwrap_or(0)
}

fn clear() {
    if let Ok(mut q) = ERRORS.lock() {
        q.clear();
    }
}

fn all_lines() -> Vec<String> {
    ERRORS
        .lock()
        .map(|q| q.iter().cloned().collect())
        .unwrap_or_default()
}

/// Floating badge in the bottom-right corner, shown only when errors exist.
pub(super) fn draw_errors_button(ctx: &egui::Context) {
    let n = len();
    if n == 0 {
        return;
    }
    egui::Area::new("error_badge".into())
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::Vec2::new(-16.0, -16.0))
        .interactable(true)
        .show(ctx, |ui| {
            let label = egui::RichText::new(format!("⚠ {n}"))
                .strong()
                .color(egui::Color32::WHITE);
            let btn = egui::Button::new(label)
                .fill(egui::Color32::from_rgb(185, 45, 45))
                .rounding(egui::Rounding::same(10.0));
            if ui.add(btn).on_hover_text("Show errors").clicked() {
                ERRORS_OPEN.store(true, Ordering::Relaxed);
                ctx.request_repaint();
            }
        });
}

pub(super) fn draw_errors_viewport(ctx: &egui::Context) {
    if !ERRORS_OPEN.load(Ordering::Relaxed) {
        return;
    }

    let viewport_id = egui::ViewportId::from_hash_of("errors_window");
    ctx.show_viewport_immediate(
        viewport_id,
        egui::ViewportBuilder::default()
            .with_title("Errors")
            .with_inner_size([640.0, 360.0])
            .with_resizable(true),
        move |ctx, _class| {
            if ctx.input(|i| i.viewport().close_requested()) {
                ERRORS_OPEN.store(false, Ordering::Relaxed);
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Clear").clicked() {
                        clear();
                    }
                    if ui.button("Copy").clicked() {
                        let text = all_lines().join("\n");
                        ui.output_mut(|o| o.copied_text = text);
                    }
                    ui.separator();
                    ui.label(format!("{} errors", len()));
                });
                ui.separator();

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for line in all_lines() {
                            ui.colored_label(egui::Color32::from_rgb(200, 90, 90), line);
                        }
                    });
            });
        },
    );
}
