pub mod text;
pub mod tile;
