// The two card presentations: full grid card and compact selected tile.

mod grid_card;
mod tile;

pub use grid_card::grid_card;
pub use tile::{selected_tile, TileResponse};
