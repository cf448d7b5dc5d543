use image::{Rgba, RgbaImage};

use crate::config::GenConfig;
use crate::renderer::text::{draw_text, Font};

/// Ink used for the code label.
pub const LABEL_COLOR: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xFF]);

/// A fully transparent `width` × `height` canvas.
pub fn blank_tile(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]))
}

/// Placeholder tile for `code`: the code in black from the top-left corner
/// on a transparent background, sized by `cfg`.
///
/// Text that runs past the tile edge is clipped.  An empty code yields an
/// empty (fully transparent) tile.
pub fn synthesize_tile(code: &str, font: &Font, cfg: &GenConfig) -> RgbaImage {
    let mut img = blank_tile(cfg.tile_width, cfg.tile_height);
    draw_text(&mut img, code, font, [0.0, 0.0], cfg.font_size, LABEL_COLOR);
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_tile_is_sized_and_clear() {
        let img = blank_tile(48, 32);
        assert_eq!(img.dimensions(), (48, 32));
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn synthesize_with_empty_font_is_blank() {
        let font = Font {
            glyphs: Default::default(),
            line_height: 8,
            atlas: RgbaImage::new(1, 1),
        };
        let cfg = GenConfig::default().with_tile_size(16, 16);
        assert_eq!(synthesize_tile("g", &font, &cfg), blank_tile(16, 16));
    }
}
