pub mod assets;
pub mod config;
pub mod error;
pub mod glyphs;
pub mod renderer;

pub use error::{Error, Result};

/// Built-in 6×8 bitmap font atlas embedded at compile time.
pub const DEFAULT_FONT_ATLAS: &[u8] = include_bytes!("../resources/font_6x8.png");

/// Glyph map for the built-in font atlas (char-keyed JSON, see `Font::from_atlas_json`).
pub const DEFAULT_FONT_GLYPHS: &str = include_str!("../resources/font_6x8.json");
