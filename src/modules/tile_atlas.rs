//! Runs the whole conversion: palette once, then every category and tier.
use std::path::PathBuf;

use col::Palette;
use eyre::WrapErr;
use log::info;

use crate::{
    config::{AtlasConfig, Config, TierConfig},
    modules::{
        atlas_pack::{pack_atlas, GridGeometry, PackedAtlas},
        atlas_write::write_atlas,
        sprite_source::SpriteSource,
    },
    utils::{img_stuffs::write_sprite_pngs, misc::resolve_case_insensitive},
};

pub struct TileAtlasCreator<S: SpriteSource> {
    config: Config,
    source: S,
}

/// What one tier run produced.
pub struct TierReport {
    pub category: String,
    pub tier: String,
    pub out_dir: PathBuf,
    pub pages: usize,
    pub placed: usize,
    pub dropped: usize,
}

impl<S: SpriteSource> TileAtlasCreator<S> {
    pub fn new(config: Config, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn log_banner(&self) {
        let config = &self.config;

        info!("-----------------------------------------------");
        info!("|           Tile Atlas Images Creator         |");
        info!("-----------------------------------------------");
        info!("Root path: {}", config.root_path.display());
        info!("Create pngs: {}", config.create_pngs);
        if let Some(png_out_path) = &config.png_out_path {
            info!("Png out path: {}", png_out_path.display());
        }
        info!("Atlas out path: {}", config.atlas_out_path.display());
        info!("-----------------------------------------------");
    }

    pub fn read_palette(&self) -> eyre::Result<Palette> {
        let path = resolve_case_insensitive(&self.config.root_path, &self.config.palette);

        info!("Read the color palette from {}", path.display());

        Palette::open_from_file(&path)
            .wrap_err_with(|| format!("cannot read palette `{}`", path.display()))
    }

    /// Decode, pack and write one tier of one category.
    ///
    /// Sprites and pages are dropped before returning.
    pub fn create_tier(
        &self,
        palette: &Palette,
        atlas: &AtlasConfig,
        tier: &TierConfig,
    ) -> eyre::Result<TierReport> {
        info!("Tile Atlas {} {} images creation ...", atlas.category, tier.tier);

        let sprite_path = resolve_case_insensitive(&self.config.root_path, &tier.path);
        let sprites = self.source.decode(&sprite_path, palette, tier.tier)?;

        if self.config.create_pngs {
            if let Some(png_out_path) = &self.config.png_out_path {
                let dir = png_out_path.join(tier.tier.name()).join(&atlas.category);

                write_sprite_pngs(&dir, &sprites)?;
            }
        }

        let (cell_width, cell_height) = tier.cell_size.resolve(&sprites);
        let geometry = GridGeometry::new(tier.pages, tier.rows, cell_width, cell_height)
            .wrap_err_with(|| format!("{} {}", atlas.category, tier.tier))?;

        let packed: PackedAtlas = pack_atlas(&sprites, geometry, self.config.overflow)
            .wrap_err_with(|| format!("{} {}", atlas.category, tier.tier))?;
        drop(sprites);

        let out_dir = self
            .config
            .atlas_out_path
            .join(tier.tier.name())
            .join(&atlas.category);

        write_atlas(&out_dir, &packed)?;

        info!(
            "{} {}: {} sprites on {} pages of {}x{} into {}",
            atlas.category,
            tier.tier,
            packed.placed(),
            packed.pages.len(),
            geometry.page_width(),
            geometry.page_height(),
            out_dir.display()
        );

        Ok(TierReport {
            category: atlas.category.clone(),
            tier: tier.tier.name().to_string(),
            out_dir,
            pages: packed.pages.len(),
            placed: packed.placed(),
            dropped: packed.dropped,
        })
    }

    /// Stops at the first error.
    pub fn run(&self) -> eyre::Result<Vec<TierReport>> {
        self.log_banner();

        let palette = self.read_palette()?;
        let mut reports = vec![];

        info!("Start Tile Atlas Images creation ...");

        for atlas in &self.config.atlases {
            for tier in &atlas.tiers {
                reports.push(self.create_tier(&palette, atlas, tier)?);
            }
        }

        info!("The Tile Atlas Images have been created successfully.");

        Ok(reports)
    }
}
