use eframe::egui::{
    self, text::LayoutJob, Align2, Color32, CursorIcon, FontId, Response, Rounding, Sense, Stroke,
    TextFormat, Ui,
};

use crate::deck::Card;
use crate::model::Side;
use crate::ui_constants::{DROP_INDICATOR_WIDTH, TILE_HEIGHT, TILE_WIDTH};

pub struct TileResponse {
    pub response: Response,
    pub remove_clicked: bool,
}

/// Compact draggable tile for the bottom selection bar. `dragging` dims the
/// tile while its drag session is active; `indicator` paints the insertion
/// bar beside the current drop target.
pub fn selected_tile(
    ui: &mut Ui,
    card: &Card,
    dragging: bool,
    indicator: Option<Side>,
) -> TileResponse {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(TILE_WIDTH, TILE_HEIGHT), Sense::click_and_drag());

    let alpha = if dragging { 0.3 } else { 1.0 };
    let dim = |c: Color32| c.gamma_multiply(alpha);

    let style = card.category.style();
    let painter = ui.painter().clone();
    painter.rect(
        rect,
        Rounding::same(8.0),
        dim(Color32::WHITE),
        Stroke::new(1.0, dim(Color32::from_gray(214))),
    );

    let mut job = LayoutJob::default();
    job.wrap.max_width = rect.width() - 16.0;
    job.append(
        card.text,
        0.0,
        TextFormat {
            font_id: FontId::proportional(10.0),
            color: dim(Color32::from_rgb(68, 64, 60)),
            ..Default::default()
        },
    );
    let galley = ui.fonts(|f| f.layout_job(job));
    painter.galley(rect.min + egui::vec2(8.0, 10.0), galley, Color32::from_gray(60));

    painter.text(
        rect.right_bottom() + egui::vec2(-8.0, -6.0),
        Align2::RIGHT_BOTTOM,
        style.icon,
        FontId::proportional(12.0),
        dim(style.accent),
    );

    // Insertion indicator on the side the drop would land on
    if let Some(side) = indicator {
        let x = match side {
            Side::Left => rect.min.x - 5.0,
            Side::Right => rect.max.x + 5.0,
        };
        painter.rect_filled(
            egui::Rect::from_min_max(
                egui::pos2(x - DROP_INDICATOR_WIDTH / 2.0, rect.min.y),
                egui::pos2(x + DROP_INDICATOR_WIDTH / 2.0, rect.max.y),
            ),
            Rounding::same(2.0),
            Color32::from_gray(41),
        );
    }

    // Hover-only remove button in the top-right corner
    let mut remove_clicked = false;
    let btn_rect = egui::Rect::from_center_size(rect.right_top() + egui::vec2(-2.0, 2.0), egui::vec2(16.0, 16.0));
    let btn_id = ui.id().with(("tile_remove", card.id));
    let btn = ui.interact(btn_rect, btn_id, Sense::click());
    if response.hovered() || btn.hovered() {
        painter.circle_filled(btn_rect.center(), 8.0, Color32::from_gray(41));
        painter.text(
            btn_rect.center(),
            Align2::CENTER_CENTER,
            "✕",
            FontId::proportional(10.0),
            Color32::WHITE,
        );
        remove_clicked = btn.clicked();
    }

    let response = response.on_hover_cursor(if dragging {
        CursorIcon::Grabbing
    } else {
        CursorIcon::Grab
    });

    TileResponse {
        response,
        remove_clicked,
    }
}
