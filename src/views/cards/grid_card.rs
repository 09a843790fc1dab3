use eframe::egui::{
    self, text::LayoutJob, Align, Align2, Color32, CursorIcon, FontId, Response, Rounding, Sense,
    Stroke, TextFormat, Ui,
};

use crate::deck::Card;

/// Fixed-size grid card with centered text and a category footer. Selected
/// cards render pressed-in: tinted fill, accent stroke, struck-through text.
/// Returns the click response; the caller toggles selection.
pub fn grid_card(ui: &mut Ui, card: &Card, selected: bool, width: f32) -> Response {
    let size = egui::vec2(width, width * 4.0 / 3.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let style = card.category.style();
    let (fill, stroke) = if selected {
        (card.category.tint(), Stroke::new(2.0, style.accent))
    } else if response.hovered() {
        (Color32::WHITE, Stroke::new(1.0, Color32::from_gray(168)))
    } else {
        let border =
            Color32::from_rgba_unmultiplied(style.accent.r(), style.accent.g(), style.accent.b(), 60);
        (Color32::WHITE, Stroke::new(1.0, border))
    };

    let painter = ui.painter();
    painter.rect(rect, Rounding::same(10.0), fill, stroke);

    // Centered multi-line text; embedded '\n' is part of the card wording.
    let ink = if selected {
        Color32::from_gray(120)
    } else {
        Color32::from_rgb(41, 37, 36)
    };
    let mut fmt = TextFormat {
        font_id: FontId::proportional(15.0),
        color: ink,
        ..Default::default()
    };
    if selected {
        fmt.strikethrough = Stroke::new(1.0, Color32::from_gray(150));
    }
    let mut job = LayoutJob::default();
    job.halign = Align::Center;
    job.wrap.max_width = rect.width() - 20.0;
    job.append(card.text, 0.0, fmt);
    let galley = ui.fonts(|f| f.layout_job(job));

    let footer_h = 26.0;
    let content_center = (rect.min.y + rect.max.y - footer_h) / 2.0;
    painter.galley(
        egui::pos2(rect.center().x, content_center - galley.size().y / 2.0),
        galley,
        ink,
    );

    // Footer: category label on the left, icon on the right
    painter.text(
        rect.left_bottom() + egui::vec2(10.0, -8.0),
        Align2::LEFT_BOTTOM,
        card.category.label().to_uppercase(),
        FontId::proportional(9.0),
        Color32::from_gray(150),
    );
    painter.text(
        rect.right_bottom() + egui::vec2(-10.0, -8.0),
        Align2::RIGHT_BOTTOM,
        style.icon,
        FontId::proportional(13.0),
        style.accent,
    );

    response.on_hover_cursor(CursorIcon::PointingHand)
}
