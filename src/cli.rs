use std::path::PathBuf;

use chunk::ChunkFile;
use clap::{Parser, Subcommand};
use col::Palette;
use eyre::WrapErr;
use log::{error, info};

use tileatlas::{
    config::{parse_config, parse_config_from_file},
    modules::{sprite_source::BshSpriteSource, tile_atlas::TileAtlasCreator},
    utils::img_stuffs::{palette_swatch, save_png},
};

/// Pixels per palette entry in the swatch.
const SWATCH_SCALE: u32 = 16;

pub enum CliRes {
    Ok,
    Err,
}

#[derive(Debug, Parser)]
#[command(version, about = "Packs game sprite files into tile atlas pages", long_about = None)]
struct TileAtlasCli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Creates atlas pages for every configured category and tier
    Create {
        /// Path to config.toml. Defaults to the one next to the executable
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Also writes every sprite as its own png
        #[arg(long)]
        create_pngs: bool,
    },
    /// Lists the chunks of a container file
    Chunks {
        /// Path to any chunked file (.col, .bsh, ...)
        path: PathBuf,
    },
    /// Writes the colors of a palette file as a png
    Palette {
        /// Path to .col file
        path: PathBuf,
        /// Output .png
        out: PathBuf,
    },
}

fn create(config: Option<PathBuf>, create_pngs: bool) -> eyre::Result<()> {
    let mut config = match config {
        Some(path) => parse_config_from_file(&path)
            .wrap_err_with(|| format!("cannot read config `{}`", path.display()))?,
        None => parse_config().wrap_err("cannot read config.toml next to the executable")?,
    };

    if create_pngs {
        config.create_pngs = true;
        config.validate()?;
    }

    let reports = TileAtlasCreator::new(config, BshSpriteSource).run()?;

    for report in reports {
        if report.dropped > 0 {
            info!(
                "{} {}: {} sprites did not fit",
                report.category, report.tier, report.dropped
            );
        }
    }

    Ok(())
}

fn chunks(path: PathBuf) -> eyre::Result<()> {
    let file = ChunkFile::open_from_file(&path)?;

    println!("{}: {} chunks", path.display(), file.chunk_count());

    for (index, chunk) in file.chunks().iter().enumerate() {
        println!("{:>4} {:<16} {}", index, chunk.id, chunk.len());
    }

    Ok(())
}

fn palette(path: PathBuf, out: PathBuf) -> eyre::Result<()> {
    let palette = Palette::open_from_file(&path)
        .wrap_err_with(|| format!("cannot read palette `{}`", path.display()))?;

    save_png(&palette_swatch(&palette, SWATCH_SCALE), &out)?;

    info!("Wrote {}", out.display());

    Ok(())
}

pub fn cli() -> CliRes {
    let cli = TileAtlasCli::parse();

    let res = match cli.command {
        Commands::Create {
            config,
            create_pngs,
        } => create(config, create_pngs),
        Commands::Chunks { path } => chunks(path),
        Commands::Palette { path, out } => palette(path, out),
    };

    match res {
        Ok(_) => CliRes::Ok,
        Err(err) => {
            error!("{:?}", err);
            CliRes::Err
        }
    }
}
