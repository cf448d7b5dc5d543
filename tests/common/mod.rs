#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

/// Per-test scratch directory under the system temp dir, removed on drop.
pub struct Scratch(PathBuf);

impl Scratch {
    pub fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("tilegen-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Sorted file names directly inside `sub` (or the root when empty).
    pub fn list(&self, sub: &str) -> Vec<String> {
        let dir = if sub.is_empty() { self.0.clone() } else { self.0.join(sub) };
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

/// Side length of every glyph cell in [`write_block_font`].
pub const CELL: u32 = 8;

/// Atlas page with one fully opaque white `CELL`×`CELL` block per char,
/// laid out left to right.
pub fn block_atlas(chars: &str) -> RgbaImage {
    let n = chars.chars().count().max(1) as u32;
    RgbaImage::from_pixel(CELL * n, CELL, Rgba([0xFF, 0xFF, 0xFF, 0xFF]))
}

/// Descriptor JSON (full format) matching [`block_atlas`].
pub fn block_descriptor(chars: &str, page: Option<&str>) -> String {
    let glyphs: Vec<String> = chars
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            format!(
                r#"{{ "id": {}, "x": {}, "y": 0, "width": {CELL}, "height": {CELL},
                     "x_offset": 0, "y_offset": 0, "x_advance": {CELL} }}"#,
                ch as u32,
                i as u32 * CELL
            )
        })
        .collect();
    let page = page.map(|p| format!(r#""page": "{p}","#)).unwrap_or_default();
    format!(r#"{{ "line_height": {CELL}, {page} "glyphs": [{}] }}"#, glyphs.join(","))
}

/// Write `font.json` + `font.png` into `dir` and return the descriptor path.
pub fn write_block_font(dir: &Path, chars: &str) -> PathBuf {
    let json = dir.join("font.json");
    std::fs::write(&json, block_descriptor(chars, None)).unwrap();
    block_atlas(chars).save(dir.join("font.png")).unwrap();
    json
}
