// Layout constants gathered in one place instead of magic numbers scattered
// across the views.

/// Grid card width in logical pixels; height follows the 3:4 card aspect.
pub const GRID_CARD_WIDTH: f32 = 180.0;

/// Gap between cards in the grid
pub const GRID_GAP: f32 = 16.0;

/// Compact tile size in the bottom selection bar
pub const TILE_WIDTH: f32 = 96.0;
pub const TILE_HEIGHT: f32 = 128.0;

/// Width of the insertion indicator painted beside a drop target
pub const DROP_INDICATOR_WIDTH: f32 = 3.0;

/// UI spacing constants
pub mod spacing {
    pub const SMALL: f32 = 4.0;
    pub const MEDIUM: f32 = 8.0;
    pub const LARGE: f32 = 16.0;
}

/// Export sheet geometry (in points; rasterized at `SCALE`)
pub mod export {
    /// Fixed sheet width
    pub const SHEET_WIDTH: f32 = 1200.0;

    /// Outer margin around the sheet content
    pub const MARGIN: f32 = 64.0;

    /// Cards per row on the sheet
    pub const COLUMNS: usize = 5;

    /// Gap between cards on the sheet
    pub const CARD_GAP: f32 = 24.0;

    /// Vertical space reserved for the sheet title
    pub const TITLE_BLOCK: f32 = 96.0;

    /// Device scale multiplier for rasterization
    pub const SCALE: f32 = 2.0;

    /// JPEG quality (0-100)
    pub const JPEG_QUALITY: u8 = 90;

    /// Fixed output filename offered in the save dialog
    pub const FILE_NAME: &str = "value-navigation-cards-my-picks.jpg";
}
