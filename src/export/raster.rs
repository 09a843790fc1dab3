// Software rasterizer for the export sheet: rounded-rect card frames drawn
// with a signed-distance test, glyphs blitted straight from epaint's font
// atlas, result encoded as JPEG.

use std::io::Cursor;
use std::sync::Arc;

use eframe::egui::epaint::text::{FontDefinitions, Fonts, LayoutJob};
use eframe::egui::epaint::{FontImage, Galley};
use eframe::egui::{pos2, Align, Color32, FontId, Pos2, Rect};
use image::codecs::jpeg::JpegEncoder;
use image::{RgbImage, RgbaImage};

use super::layout::SheetLayout;
use super::ExportError;

const PAGE_BG: Color32 = Color32::from_rgb(245, 245, 244);
const CARD_BG: Color32 = Color32::WHITE;
const INK: Color32 = Color32::from_rgb(41, 37, 36);
const SEQ_INK: Color32 = Color32::from_rgb(214, 211, 209);
const LABEL_INK: Color32 = Color32::from_rgb(168, 162, 158);
const RULE_INK: Color32 = Color32::from_rgb(231, 229, 228);

const CARD_ROUNDING: f32 = 12.0;
const FOOTER_HEIGHT: f32 = 44.0;

struct Canvas {
    img: RgbaImage,
    ppp: f32,
}

impl Canvas {
    fn new(width_pts: f32, height_pts: f32, ppp: f32, bg: Color32) -> Self {
        let w = (width_pts * ppp).round().max(1.0) as u32;
        let h = (height_pts * ppp).round().max(1.0) as u32;
        let img = RgbaImage::from_pixel(w, h, image::Rgba([bg.r(), bg.g(), bg.b(), 255]));
        Self { img, ppp }
    }

    fn blend(&mut self, x: i32, y: i32, color: Color32, coverage: f32) {
        if x < 0 || y < 0 || x >= self.img.width() as i32 || y >= self.img.height() as i32 {
            return;
        }
        let a = coverage.clamp(0.0, 1.0) * color.a() as f32 / 255.0;
        if a <= 0.0 {
            return;
        }
        let px = self.img.get_pixel_mut(x as u32, y as u32);
        for (ch, src) in [color.r(), color.g(), color.b()].into_iter().enumerate() {
            px.0[ch] = (src as f32 * a + px.0[ch] as f32 * (1.0 - a)).round() as u8;
        }
    }

    /// Signed distance from point `(x, y)` to the border of the rounded rect,
    /// negative inside.
    fn rounded_rect_sdf(rect: Rect, radius: f32, x: f32, y: f32) -> f32 {
        let half = rect.size() / 2.0;
        let c = rect.center();
        let qx = (x - c.x).abs() - (half.x - radius);
        let qy = (y - c.y).abs() - (half.y - radius);
        let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
        outside + qx.max(qy).min(0.0) - radius
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color32) {
        self.for_each_px_in(rect.expand(1.0), |canvas, x, y, px, py| {
            let d = Self::rounded_rect_sdf(rect, radius, px, py);
            canvas.blend(x, y, color, 0.5 - d * canvas.ppp);
        });
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, width: f32, color: Color32) {
        self.for_each_px_in(rect.expand(width + 1.0), |canvas, x, y, px, py| {
            let d = Self::rounded_rect_sdf(rect, radius, px, py).abs();
            canvas.blend(x, y, color, (width / 2.0 - d) * canvas.ppp + 0.5);
        });
    }

    fn hline(&mut self, x0: f32, x1: f32, y: f32, width: f32, color: Color32) {
        let rect = Rect::from_min_max(pos2(x0, y - width / 2.0), pos2(x1, y + width / 2.0));
        self.fill_rounded_rect(rect, 0.0, color);
    }

    fn for_each_px_in(&mut self, area: Rect, mut f: impl FnMut(&mut Self, i32, i32, f32, f32)) {
        let x0 = ((area.min.x * self.ppp).floor() as i32).max(0);
        let y0 = ((area.min.y * self.ppp).floor() as i32).max(0);
        let x1 = ((area.max.x * self.ppp).ceil() as i32).min(self.img.width() as i32);
        let y1 = ((area.max.y * self.ppp).ceil() as i32).min(self.img.height() as i32);
        for y in y0..y1 {
            for x in x0..x1 {
                // sample at the pixel center, in points
                let px = (x as f32 + 0.5) / self.ppp;
                let py = (y as f32 + 0.5) / self.ppp;
                f(self, x, y, px, py);
            }
        }
    }

    /// Blits a laid-out galley whose anchor is `origin` (interpretation of the
    /// anchor follows the job's halign, as in egui painting).
    fn draw_galley(&mut self, atlas: &FontImage, origin: Pos2, galley: &Galley, color: Color32) {
        let atlas_w = atlas.size[0];
        for row in &galley.rows {
            for glyph in &row.glyphs {
                let uv = glyph.uv_rect;
                if uv.max[0] <= uv.min[0] || uv.max[1] <= uv.min[1] {
                    continue; // whitespace
                }
                let base_x =
                    ((origin.x + glyph.pos.x + uv.offset.x) * self.ppp).round() as i32;
                let base_y =
                    ((origin.y + glyph.pos.y + uv.offset.y) * self.ppp).round() as i32;
                for ty in uv.min[1]..uv.max[1] {
                    for tx in uv.min[0]..uv.max[0] {
                        let coverage = atlas.pixels[ty as usize * atlas_w + tx as usize];
                        self.blend(
                            base_x + (tx - uv.min[0]) as i32,
                            base_y + (ty - uv.min[1]) as i32,
                            color,
                            coverage,
                        );
                    }
                }
            }
        }
    }
}

fn centered_job(text: &str, font: FontId, wrap_width: f32) -> LayoutJob {
    // The color recorded in the job is ignored; we tint at blit time.
    let mut job = LayoutJob::simple(text.to_owned(), font, Color32::WHITE, wrap_width);
    job.halign = Align::Center;
    job
}

fn plain_job(text: &str, font: FontId) -> LayoutJob {
    LayoutJob::simple_singleline(text.to_owned(), font, Color32::WHITE)
}

/// Draws the whole sheet into an RGBA canvas at `scale` pixels per point.
pub(super) fn rasterize(title: &str, sheet: &SheetLayout<'_>, scale: f32) -> RgbaImage {
    let fonts = Fonts::new(scale, 8 * 1024, FontDefinitions::default());
    let mut canvas = Canvas::new(sheet.size.x, sheet.size.y, scale, PAGE_BG);

    // Lay out all text first so the atlas contains every glyph before we
    // read the font image.
    let title_galley = fonts.layout_job(centered_job(title, FontId::proportional(30.0), sheet.size.x));
    let mut per_card: Vec<(Arc<Galley>, Arc<Galley>, Arc<Galley>, Arc<Galley>)> = Vec::new();
    for b in &sheet.boxes {
        let seq = fonts.layout_job(plain_job(&b.card.seq.to_string(), FontId::proportional(26.0)));
        let text = fonts.layout_job(centered_job(
            b.card.text,
            FontId::proportional(20.0),
            b.rect.width() - 28.0,
        ));
        let label = fonts.layout_job(plain_job(&b.card.label, FontId::proportional(12.0)));
        let icon = fonts.layout_job(plain_job(b.card.category.style().icon, FontId::proportional(16.0)));
        per_card.push((seq, text, label, icon));
    }
    let atlas = fonts.image();

    canvas.draw_galley(&atlas, sheet.title_center, &title_galley, INK);

    for (b, (seq, text, label, icon)) in sheet.boxes.iter().zip(&per_card) {
        let accent = b.card.category.style().accent;
        let border = Color32::from_rgba_unmultiplied(accent.r(), accent.g(), accent.b(), 76);

        canvas.fill_rounded_rect(b.rect, CARD_ROUNDING, CARD_BG);
        canvas.stroke_rounded_rect(b.rect, CARD_ROUNDING, 1.5, border);

        // 1-based sequence number, top-left
        canvas.draw_galley(&atlas, b.rect.min + eframe::egui::vec2(16.0, 10.0), seq, SEQ_INK);

        // card text, centered in the space above the footer
        let content_bottom = b.rect.max.y - FOOTER_HEIGHT;
        let text_top = (b.rect.min.y + content_bottom) / 2.0 - text.size().y / 2.0;
        canvas.draw_galley(&atlas, pos2(b.rect.center().x, text_top), text, INK);

        // footer: rule, category label, icon
        canvas.hline(
            b.rect.min.x + 12.0,
            b.rect.max.x - 12.0,
            content_bottom,
            1.0,
            RULE_INK,
        );
        let footer_y = content_bottom + (FOOTER_HEIGHT - label.size().y) / 2.0;
        canvas.draw_galley(&atlas, pos2(b.rect.min.x + 14.0, footer_y), label, LABEL_INK);
        let icon_x = b.rect.max.x - 14.0 - icon.size().x;
        let icon_y = content_bottom + (FOOTER_HEIGHT - icon.size().y) / 2.0;
        canvas.draw_galley(&atlas, pos2(icon_x, icon_y), icon, accent);
    }

    canvas.img
}

/// Encodes the canvas as an opaque JPEG at the given quality.
pub(super) fn encode_jpeg(img: RgbaImage, quality: u8) -> Result<Vec<u8>, ExportError> {
    let (w, h) = img.dimensions();
    let rgb_img = RgbImage::from_fn(w, h, |x, y| {
        let p = img.get_pixel(x, y);
        image::Rgb([p.0[0], p.0[1], p.0[2]])
    });

    let mut buffer = Vec::new();
    {
        let mut cursor = Cursor::new(&mut buffer);
        let mut encoder = JpegEncoder::new_with_quality(&mut cursor, quality);
        encoder.encode_image(&rgb_img)?;
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{layout_sheet, ExportCard};
    use crate::types::Category;

    #[test]
    fn rasterized_sheet_has_scaled_dimensions() {
        let cards = vec![ExportCard {
            seq: 1,
            text: "Deep friendship",
            label: "Relationships".to_string(),
            category: Category::Relationship,
        }];
        let sheet = layout_sheet(&cards);
        let img = rasterize("Title", &sheet, 2.0);
        assert_eq!(img.width(), (sheet.size.x * 2.0).round() as u32);
        assert_eq!(img.height(), (sheet.size.y * 2.0).round() as u32);
        // background is opaque and matches the page color at a corner
        assert_eq!(img.get_pixel(0, 0).0, [245, 245, 244, 255]);
    }

    #[test]
    fn card_interior_is_painted_white() {
        let cards = vec![ExportCard {
            seq: 1,
            text: "",
            label: String::new(),
            category: Category::Work,
        }];
        let sheet = layout_sheet(&cards);
        let img = rasterize("", &sheet, 1.0);
        let c = sheet.boxes[0].rect.center();
        assert_eq!(img.get_pixel(c.x as u32, c.y as u32).0, [255, 255, 255, 255]);
    }
}
