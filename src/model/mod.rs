// View-state containers, kept free of egui so every transition is unit
// testable without a pointer device.

pub mod drag;
pub mod filter;
pub mod selection;

pub use drag::{DragState, DropTarget, Side};
pub use filter::CategoryFilter;
pub use selection::SelectionOrder;
