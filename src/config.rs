use std::path::PathBuf;

// ── GenConfig ─────────────────────────────────────────────────────────────────

/// Settings shared by the `gen` and `clean` runs.
///
/// - **tile** dimensions are the pixel size of every synthesized image and
///   the `w` / `h` fields of the mapping document.
/// - **font** settings are only consulted when a tile has no override.
/// - **directories** are resolved relative to the process working directory.
#[derive(Clone, Debug, PartialEq)]
pub struct GenConfig {
    /// Width of each tile in pixels.
    pub tile_width: u32,
    /// Height of each tile in pixels.
    pub tile_height: u32,
    /// Bitmap font descriptor (JSON); the built-in 6×8 font when `None`.
    pub font_path: Option<PathBuf>,
    /// Rendered line height of the code text in pixels.
    pub font_size: f32,
    /// Directory searched for hand-authored replacement tiles.
    pub override_dir: PathBuf,
    /// Directory the tiles are written to and removed from.
    pub out_dir: PathBuf,
    /// Leading part of every tile filename.
    pub prefix: String,
}

impl Default for GenConfig {
    /// 48 × 48 tiles, built-in font at 12 px (every code fits the width),
    /// `part-` prefix, overrides in `override/`, output into the working
    /// directory.
    fn default() -> Self {
        Self {
            tile_width:   48,
            tile_height:  48,
            font_path:    None,
            font_size:    12.0,
            override_dir: PathBuf::from("override"),
            out_dir:      PathBuf::from("."),
            prefix:       String::from("part-"),
        }
    }
}

impl GenConfig {
    pub fn with_tile_size(mut self, width: u32, height: u32) -> Self {
        self.tile_width = width;
        self.tile_height = height;
        self
    }

    pub fn with_font(mut self, path: impl Into<PathBuf>, size: f32) -> Self {
        self.font_path = Some(path.into());
        self.font_size = size;
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_override_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.override_dir = dir.into();
        self
    }

    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
