use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::assets::mapping::MappingDocument;
use crate::assets::naming::{padding_width, tile_file_name};
use crate::assets::overrides::{find_override, stray_overrides};
use crate::config::GenConfig;
use crate::error::{Error, Result};
use crate::glyphs::GlyphEntry;
use crate::renderer::text::Font;
use crate::renderer::tile::synthesize_tile;

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// How a single tile came to exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TileSource {
    /// Copied verbatim from this override file.
    Copied(PathBuf),
    /// Rendered from the code text.
    Synthesized,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileOutcome {
    pub index: usize,
    pub path: PathBuf,
    pub source: TileSource,
}

/// Result of a complete `gen` run.
#[derive(Clone, Debug)]
pub struct GenerateReport {
    pub mapping: MappingDocument,
    pub tiles: Vec<TileOutcome>,
}

/// Result of removing one tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Removal {
    Removed,
    /// Nothing was there.
    Absent,
    /// The file exists but could not be removed.
    Failed(ErrorKind),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Write one tile per table row into `cfg.out_dir` and build the mapping
/// document.
///
/// Rows are processed in order.  An override with the tile's filename wins
/// over synthesis and is copied byte-for-byte.  The font is loaded the first
/// time a row needs synthesis, so a fully overridden table works without
/// one.  Any error aborts the run; tiles written before the failure are left
/// in place.
pub fn generate(table: &[GlyphEntry], cfg: &GenConfig) -> Result<GenerateReport> {
    let width = padding_width(table.len());

    std::fs::create_dir_all(&cfg.out_dir)
        .map_err(|e| Error::CreateDir(cfg.out_dir.clone(), e))?;

    for stray in stray_overrides(table, cfg) {
        log::warn!("override {:?} does not match any tile; ignoring", stray);
    }

    let mut font: Option<Font> = None;
    let mut mapping = MappingDocument::new(cfg.tile_width, cfg.tile_height);
    let mut tiles = Vec::with_capacity(table.len());

    for (index, glyph) in table.iter().enumerate() {
        let file_name = tile_file_name(&cfg.prefix, index, glyph.code, width);
        let path = cfg.out_dir.join(&file_name);

        let source = match find_override(&cfg.override_dir, &file_name) {
            Some(src) => {
                check_override_size(&src, cfg);
                std::fs::copy(&src, &path).map_err(|e| Error::OverrideCopy(src.clone(), e))?;
                TileSource::Copied(src)
            }
            None => {
                let font: &Font = match &mut font {
                    Some(f) => f,
                    slot => slot.insert(Font::resolve(cfg.font_path.as_deref())?),
                };
                synthesize_tile(glyph.code, font, cfg)
                    .save(&path)
                    .map_err(|e| Error::TileSave(path.clone(), e))?;
                TileSource::Synthesized
            }
        };

        log::info!("{:?} ({}) <- {:?}", path, glyph.name, source);
        mapping.insert(index, glyph.name);
        tiles.push(TileOutcome { index, path, source });
    }

    let copied = tiles.iter().filter(|t| matches!(t.source, TileSource::Copied(_))).count();
    log::info!("generated {} tiles ({} from overrides)", tiles.len(), copied);

    Ok(GenerateReport { mapping, tiles })
}

/// Overrides are copied as-is; a size mismatch is only worth a warning.
fn check_override_size(src: &Path, cfg: &GenConfig) {
    match image::image_dimensions(src) {
        Ok((w, h)) if (w, h) != (cfg.tile_width, cfg.tile_height) => log::warn!(
            "override {:?} is {w}x{h}, tiles are {}x{}",
            src, cfg.tile_width, cfg.tile_height
        ),
        Ok(_) => {}
        Err(e) => log::warn!("override {:?} is not a readable image: {e}", src),
    }
}

// ── clean ─────────────────────────────────────────────────────────────────────

/// Remove every tile `generate` would write for `table`.  Never fails;
/// returns one [`Removal`] per row in table order.
pub fn clean(table: &[GlyphEntry], cfg: &GenConfig) -> Vec<Removal> {
    let width = padding_width(table.len());

    let removals: Vec<Removal> = table
        .iter()
        .enumerate()
        .map(|(index, glyph)| {
            let path = cfg.out_dir.join(tile_file_name(&cfg.prefix, index, glyph.code, width));
            delete_if_exists(&path)
        })
        .collect();

    let removed = removals.iter().filter(|r| **r == Removal::Removed).count();
    log::info!("removed {} of {} tiles", removed, table.len());
    removals
}

/// Delete `path`, treating "not found" as success.
pub fn delete_if_exists(path: &Path) -> Removal {
    match std::fs::remove_file(path) {
        Ok(()) => Removal::Removed,
        Err(e) if e.kind() == ErrorKind::NotFound => Removal::Absent,
        Err(e) => {
            log::warn!("could not remove {:?}: {e}", path);
            Removal::Failed(e.kind())
        }
    }
}
