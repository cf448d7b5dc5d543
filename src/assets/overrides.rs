use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::assets::naming::{padding_width, tile_file_name};
use crate::config::GenConfig;
use crate::glyphs::GlyphEntry;

/// Path of the hand-authored replacement for `file_name`, if one exists.
pub fn find_override(override_dir: &Path, file_name: &str) -> Option<PathBuf> {
    let candidate = override_dir.join(file_name);
    candidate.is_file().then_some(candidate)
}

/// Files directly inside the override directory that no table entry will
/// ever pick up, sorted by path.
///
/// A missing directory simply has no strays.  Unreadable entries are
/// skipped.
pub fn stray_overrides(table: &[GlyphEntry], cfg: &GenConfig) -> Vec<PathBuf> {
    let width = padding_width(table.len());
    let expected: HashSet<String> = table
        .iter()
        .enumerate()
        .map(|(i, g)| tile_file_name(&cfg.prefix, i, g.code, width))
        .collect();

    let mut strays: Vec<PathBuf> = walkdir::WalkDir::new(&cfg.override_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.file_name()
                .to_str()
                .is_none_or(|name| !expected.contains(name))
        })
        .map(|e| e.into_path())
        .collect();

    strays.sort();
    strays
}
