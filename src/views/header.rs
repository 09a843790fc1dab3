use eframe::egui::{self, RichText};

use crate::localization::{translate, translate_with};
use crate::model::CategoryFilter;
use crate::types::Category;
use crate::ui_constants::spacing;

pub struct HeaderAction {
    pub shuffle: bool,
    pub logs: bool,
}

fn filter_summary(filter: &CategoryFilter) -> String {
    if filter.shows_all() {
        translate("filter-all")
    } else if filter.is_empty() {
        translate("filter-none")
    } else {
        translate_with("filter-some", &[("count", filter.count().to_string())])
    }
}

/// Top panel: title, instruction copy, shuffle button and the category
/// filter dropdown with its live summary label.
pub fn draw_header(ctx: &egui::Context, filter: &mut CategoryFilter) -> HeaderAction {
    let mut action = HeaderAction {
        shuffle: false,
        logs: false,
    };

    egui::TopBottomPanel::top("header")
        .frame(
            egui::Frame::none()
                .fill(egui::Color32::from_rgb(250, 250, 249))
                .inner_margin(egui::Margin::symmetric(spacing::LARGE, spacing::MEDIUM)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(spacing::SMALL);
                ui.heading(RichText::new(translate("app-title")).strong());
                ui.label(
                    RichText::new(translate("app-instructions"))
                        .small()
                        .color(egui::Color32::from_gray(120)),
                );
                ui.add_space(spacing::MEDIUM);
            });

            ui.horizontal(|ui| {
                // Center the action row without relying on vertical_centered
                let row_w = 320.0;
                ui.add_space((ui.available_width() - row_w).max(0.0) / 2.0);

                if ui
                    .button(format!("🔀 {}", translate("action-shuffle")))
                    .clicked()
                {
                    action.shuffle = true;
                }

                ui.add_space(spacing::MEDIUM);

                ui.menu_button(format!("▼ {}", filter_summary(filter)), |ui| {
                    ui.set_min_width(180.0);
                    for cat in Category::ALL {
                        let style = cat.style();
                        let mut shown = filter.shows(cat);
                        let label = format!("{} {}", style.icon, cat.label());
                        if ui.checkbox(&mut shown, label).changed() {
                            filter.toggle(cat);
                        }
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .small_button(translate("action-logs"))
                        .clicked()
                    {
                        action.logs = true;
                    }
                });
            });
            ui.add_space(spacing::SMALL);
        });

    action
}
