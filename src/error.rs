use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a generation run.
///
/// Cleanup never produces one of these; see
/// [`delete_if_exists`](crate::assets::generator::delete_if_exists).
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to open font {0:?}")]
    FontOpen(PathBuf, #[source] std::io::Error),

    #[error("failed to parse font descriptor {0:?}")]
    FontParse(PathBuf, #[source] serde_json::Error),

    #[error("failed to load font atlas page {0:?}")]
    FontAtlas(PathBuf, #[source] image::ImageError),

    #[error("failed to copy override {0:?}")]
    OverrideCopy(PathBuf, #[source] std::io::Error),

    #[error("failed to save tile {0:?}")]
    TileSave(PathBuf, #[source] image::ImageError),

    #[error("failed to create output directory {0:?}")]
    CreateDir(PathBuf, #[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
