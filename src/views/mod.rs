pub mod cards;
pub mod header;
pub mod selection_bar;
