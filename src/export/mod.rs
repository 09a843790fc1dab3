// Export pipeline: snapshot the selection, lay the cards out on a fixed-width
// sheet, rasterize it at 2x and encode as JPEG.
//
// Text is shaped and rasterized with epaint's own font stack so the output
// matches the on-screen typography without a second font pipeline.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::deck::Deck;
use crate::model::SelectionOrder;
use crate::types::Category;
use crate::ui_constants::export as consts;

mod layout;
mod raster;

pub use layout::{layout_sheet, SheetLayout};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("jpeg encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("writing {} failed: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// One selected card, frozen at export trigger time. The label is localized
/// up front because rasterization runs off the UI thread.
#[derive(Debug, Clone)]
pub struct ExportCard {
    /// 1-based position in the selection order
    pub seq: usize,
    pub text: &'static str,
    pub label: String,
    pub category: Category,
}

/// A complete export request, detached from live app state.
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub title: String,
    pub cards: Vec<ExportCard>,
    pub path: PathBuf,
}

/// Freezes the current selection order into export cards. Ids not present in
/// the deck are skipped (unreachable for a well-formed selection).
pub fn snapshot(deck: &Deck, selection: &SelectionOrder) -> Vec<ExportCard> {
    selection
        .iter()
        .filter_map(|id| deck.card(id))
        .enumerate()
        .map(|(i, card)| ExportCard {
            seq: i + 1,
            text: card.text,
            label: card.category.label(),
            category: card.category,
        })
        .collect()
}

/// Renders the sheet and returns the encoded JPEG bytes.
pub fn render_to_jpeg(title: &str, cards: &[ExportCard]) -> Result<Vec<u8>, ExportError> {
    let sheet = layout_sheet(cards);
    let canvas = raster::rasterize(title, &sheet, consts::SCALE);
    raster::encode_jpeg(canvas, consts::JPEG_QUALITY)
}

/// Full pipeline: render, encode and write to `path`.
pub fn render_and_save(job: &ExportJob) -> Result<(), ExportError> {
    let bytes = render_to_jpeg(&job.title, &job.cards)?;
    write_bytes(&job.path, &bytes)
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    std::fs::write(path, bytes).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(n: usize) -> Vec<ExportCard> {
        (1..=n)
            .map(|seq| ExportCard {
                seq,
                text: "Inner peace",
                label: "Self & life".to_string(),
                category: Category::SelfLife,
            })
            .collect()
    }

    #[test]
    fn snapshot_follows_selection_order() {
        let deck = Deck::new();
        let mut sel = SelectionOrder::default();
        for id in [5, 12, 40] {
            sel.toggle(id);
        }
        let snap = snapshot(&deck, &sel);
        assert_eq!(snap.len(), 3);
        assert_eq!(snap[0].seq, 1);
        assert_eq!(snap[2].seq, 3);
        assert_eq!(snap[0].text, deck.card(5).unwrap().text);
        assert_eq!(snap[1].text, deck.card(12).unwrap().text);
    }

    #[test]
    fn jpeg_bytes_have_jfif_magic() {
        let bytes = render_to_jpeg("My cards", &cards(3)).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8], "not a JPEG stream");
    }
}
