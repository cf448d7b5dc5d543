use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use serde::Deserialize;

use crate::error::{Error, Result};

// ── Vec2 / GlyphQuad ──────────────────────────────────────────────────────────

/// Canvas-space 2D position `[x, y]` in pixels.
pub type Vec2 = [f32; 2];

/// A single placed glyph produced by [`layout_text`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphQuad {
    /// Character this quad draws.
    pub ch: char,
    /// Top-left corner on the canvas in pixels.
    pub position: Vec2,
    /// Scaled size on the canvas in pixels.
    pub size: Vec2,
    /// Source rectangle in the atlas page: `[x, y, width, height]`.
    pub source: [u32; 4],
}

// ── layout_text ───────────────────────────────────────────────────────────────

/// Place every renderable character of `text` on the canvas.
///
/// # Parameters
/// - `start_pos` — top-left origin of the text block in canvas pixels.
/// - `font_size` — desired line height in pixels.  All glyph dimensions are
///   scaled uniformly by `font_size / font.line_height`.
///
/// # Skipping rules
/// - `'\n'` resets the X cursor to `start_pos.x` and advances Y by one
///   scaled line height; it produces no quad.
/// - Characters absent from `font.glyphs` are silently skipped.
/// - Returns no quads when `font.line_height` is zero.
pub fn layout_text(text: &str, font: &Font, start_pos: Vec2, font_size: f32) -> Vec<GlyphQuad> {
    if font.line_height == 0 {
        return Vec::new();
    }

    let scale = font_size / font.line_height as f32;
    let mut quads = Vec::new();

    let mut current_x = start_pos[0];
    let mut current_y = start_pos[1];

    for ch in text.chars() {
        if ch == '\n' {
            current_x = start_pos[0];
            current_y += font.line_height as f32 * scale;
            continue;
        }

        let Some(glyph) = font.glyphs.get(&ch) else {
            continue;
        };

        quads.push(GlyphQuad {
            ch,
            position: [
                current_x + glyph.x_offset as f32 * scale,
                current_y + glyph.y_offset as f32 * scale,
            ],
            size: [glyph.width as f32 * scale, glyph.height as f32 * scale],
            source: [glyph.x, glyph.y, glyph.width, glyph.height],
        });

        current_x += glyph.x_advance as f32 * scale;
    }

    quads
}

// ── draw_text ─────────────────────────────────────────────────────────────────

/// Rasterize `text` onto `canvas` in `color`.
///
/// Each quad from [`layout_text`] is filled with nearest-neighbour samples of
/// its atlas rectangle.  The atlas alpha channel is the glyph coverage; the
/// result is blended source-over, so a transparent canvas stays transparent
/// wherever no glyph lands.  Pixels falling outside the canvas are dropped.
pub fn draw_text(
    canvas: &mut RgbaImage,
    text: &str,
    font: &Font,
    start_pos: Vec2,
    font_size: f32,
    color: Rgba<u8>,
) {
    let (canvas_w, canvas_h) = canvas.dimensions();

    for quad in layout_text(text, font, start_pos, font_size) {
        let [src_x, src_y, src_w, src_h] = quad.source;
        if src_w == 0 || src_h == 0 {
            continue;
        }

        let dst_x0 = quad.position[0].round() as i64;
        let dst_y0 = quad.position[1].round() as i64;
        let dst_w = quad.size[0].round() as i64;
        let dst_h = quad.size[1].round() as i64;

        for dy in 0..dst_h {
            let y = dst_y0 + dy;
            if y < 0 || y >= canvas_h as i64 {
                continue;
            }
            let sy = src_y + ((dy * src_h as i64) / dst_h).min(src_h as i64 - 1) as u32;

            for dx in 0..dst_w {
                let x = dst_x0 + dx;
                if x < 0 || x >= canvas_w as i64 {
                    continue;
                }
                let sx = src_x + ((dx * src_w as i64) / dst_w).min(src_w as i64 - 1) as u32;

                let Some(sample) = font.atlas.get_pixel_checked(sx, sy) else {
                    continue;
                };
                let coverage = sample.0[3];
                if coverage == 0 {
                    continue;
                }

                let dst = canvas.get_pixel_mut(x as u32, y as u32);
                *dst = blend_over(*dst, color, coverage);
            }
        }
    }
}

/// Source-over composite of `color` (scaled by `coverage`) on top of `dst`.
pub fn blend_over(dst: Rgba<u8>, color: Rgba<u8>, coverage: u8) -> Rgba<u8> {
    let src_a = (color.0[3] as f32 / 255.0) * (coverage as f32 / 255.0);
    let dst_a = dst.0[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let mut out = [0u8; 4];
    for c in 0..3 {
        let s = color.0[c] as f32 * src_a;
        let d = dst.0[c] as f32 * dst_a * (1.0 - src_a);
        out[c] = ((s + d) / out_a).round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgba(out)
}

// ── Glyph ────────────────────────────────────────────────────────────────────

/// Atlas rectangle and pen metrics of one character.
#[derive(Debug, Clone)]
pub struct Glyph {
    pub id: char,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub x_offset: i32,
    pub y_offset: i32,
    pub x_advance: u32,
}

// ── Font ─────────────────────────────────────────────────────────────────────

/// Label used in errors about the embedded font.
const BUILTIN: &str = "<builtin font>";

/// A bitmap font: glyph metrics from a JSON descriptor plus the atlas page
/// the glyph rectangles point into.
pub struct Font {
    pub glyphs: HashMap<char, Glyph>,
    /// Unscaled line height; `font_size / line_height` is the draw scale.
    pub line_height: u32,
    /// Glyph bitmaps; coverage is read from the alpha channel.
    pub atlas: RgbaImage,
}

impl Font {
    /// The configured font file, or the embedded 6×8 font when `path` is
    /// `None`.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// The 6×8 font compiled into the binary.
    pub fn builtin() -> Result<Self> {
        let atlas = image::load_from_memory(crate::DEFAULT_FONT_ATLAS)
            .map_err(|e| Error::FontAtlas(PathBuf::from(BUILTIN), e))?
            .to_rgba8();
        Self::from_atlas_json(crate::DEFAULT_FONT_GLYPHS, atlas)
            .map_err(|e| Error::FontParse(PathBuf::from(BUILTIN), e))
    }

    /// Load a font from a descriptor on disk.
    ///
    /// A JSON object with a `glyphs` array is a full descriptor
    /// ([`Font::from_json`]); anything else is read as a char-keyed atlas map
    /// ([`Font::from_atlas_json`]).  The atlas page is the descriptor's
    /// `page` field resolved against the descriptor's directory, or the
    /// descriptor path with a `.png` extension.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::FontOpen(path.to_path_buf(), e))?;
        let header: serde_json::Value = serde_json::from_str(&json)
            .map_err(|e| Error::FontParse(path.to_path_buf(), e))?;

        let font = if header.get("glyphs").is_some_and(|g| g.is_array()) {
            let page = match header.get("page").and_then(|p| p.as_str()) {
                Some(page) => path.parent().unwrap_or(Path::new("")).join(page),
                None => default_page(path),
            };
            Self::from_json(&json, load_page(&page)?)
        } else {
            Self::from_atlas_json(&json, load_page(&default_page(path))?)
        }
        .map_err(|e| Error::FontParse(path.to_path_buf(), e))?;

        log::debug!("loaded font {:?} ({} glyphs)", path, font.glyphs.len());
        Ok(font)
    }

    /// Full descriptor JSON paired with its decoded atlas page.  Code points
    /// that are not Unicode scalar values are dropped.
    pub fn from_json(json: &str, atlas: RgbaImage) -> std::result::Result<Self, serde_json::Error> {
        let raw: RawFont = serde_json::from_str(json)?;

        if let (Some(tw), Some(th)) = (raw.texture_width, raw.texture_height) {
            if (tw, th) != atlas.dimensions() {
                log::warn!(
                    "font descriptor says {tw}x{th} but its page is {}x{}",
                    atlas.width(), atlas.height()
                );
            }
        }

        let glyphs = raw
            .glyphs
            .into_iter()
            .filter_map(|g| {
                char::from_u32(g.id).map(|ch| {
                    (ch, Glyph {
                        id: ch,
                        x: g.x,
                        y: g.y,
                        width: g.width,
                        height: g.height,
                        x_offset: g.x_offset,
                        y_offset: g.y_offset,
                        x_advance: g.x_advance,
                    })
                })
            })
            .collect();

        Ok(Self { glyphs, line_height: raw.line_height, atlas })
    }

    /// Char-keyed atlas map, one fixed cell per character:
    ///
    /// ```json
    /// { "A": { "x": 0, "y": 0, "w": 6, "h": 8 }, ... }
    /// ```
    ///
    /// The cell width is the advance, offsets are zero and the tallest cell
    /// is the line height.  Keys longer than one character are ignored.
    pub fn from_atlas_json(json: &str, atlas: RgbaImage) -> std::result::Result<Self, serde_json::Error> {
        let raw: HashMap<String, AtlasEntry> = serde_json::from_str(json)?;
        let line_height = raw.values().map(|e| e.h).max().unwrap_or(0);

        let glyphs = raw
            .into_iter()
            .filter_map(|(key, entry)| {
                let mut chars = key.chars();
                let ch = chars.next()?;
                if chars.next().is_some() { return None; }

                Some((ch, Glyph {
                    id: ch,
                    x: entry.x,
                    y: entry.y,
                    width:    entry.w,
                    height:   entry.h,
                    x_offset: 0,
                    y_offset: 0,
                    x_advance: entry.w,
                }))
            })
            .collect();

        Ok(Self { glyphs, line_height, atlas })
    }
}

fn default_page(descriptor: &Path) -> PathBuf {
    descriptor.with_extension("png")
}

fn load_page(page: &Path) -> Result<RgbaImage> {
    image::open(page)
        .map(|img| img.to_rgba8())
        .map_err(|e| Error::FontAtlas(page.to_path_buf(), e))
}

// ── JSON layouts ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RawGlyph {
    /// Unicode code point.
    id: u32,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    x_offset: i32,
    y_offset: i32,
    x_advance: u32,
}

#[derive(Deserialize)]
struct RawFont {
    line_height: u32,
    texture_width: Option<u32>,
    texture_height: Option<u32>,
    glyphs: Vec<RawGlyph>,
}

#[derive(Deserialize)]
struct AtlasEntry { x: u32, y: u32, w: u32, h: u32 }

// ── Tests ─────────────────────────────────────────────────────────────────────
