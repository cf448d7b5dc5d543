use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use tilegen::assets::generator::{clean, generate};
use tilegen::config::GenConfig;
use tilegen::glyphs::GLYPHS;

#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Args {
    #[clap(subcommand)]
    command: Command,

    /// Tile width in pixels
    #[clap(long, default_value_t = GenConfig::default().tile_width)]
    width: u32,

    /// Tile height in pixels
    #[clap(long, default_value_t = GenConfig::default().tile_height)]
    height: u32,

    /// Bitmap font descriptor (JSON); the atlas page is looked up next to it.
    /// Uses the built-in 6x8 font when omitted
    #[clap(long)]
    font: Option<PathBuf>,

    /// Rendered text height in pixels
    #[clap(long, default_value_t = GenConfig::default().font_size)]
    font_size: f32,

    /// Directory holding hand-authored replacement tiles
    #[clap(long, default_value_os_t = GenConfig::default().override_dir)]
    override_dir: PathBuf,

    /// Directory the tiles are written to
    #[clap(long, default_value_os_t = GenConfig::default().out_dir)]
    out_dir: PathBuf,

    /// Filename prefix of every tile
    #[clap(long, default_value_t = GenConfig::default().prefix)]
    prefix: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write every tile and print the index-to-name mapping to stdout
    Gen,
    /// Delete every tile `gen` writes
    Clean,
}

impl Args {
    fn config(&self) -> GenConfig {
        let cfg = GenConfig::default()
            .with_tile_size(self.width, self.height)
            .with_font_size(self.font_size)
            .with_override_dir(&self.override_dir)
            .with_out_dir(&self.out_dir)
            .with_prefix(&self.prefix);

        match &self.font {
            Some(font) => cfg.with_font(font, self.font_size),
            None => cfg,
        }
    }
}

fn main() -> Result<()> {
    // stdout is reserved for the mapping document.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();
    let cfg = args.config();

    match args.command {
        Command::Gen => {
            let report = generate(GLYPHS, &cfg).context("tile generation failed")?;
            println!("{}", report.mapping.to_json()?);
        }
        Command::Clean => {
            clean(GLYPHS, &cfg);
        }
    }

    Ok(())
}
