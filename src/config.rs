//! Parses config file
use std::{
    env,
    fs::OpenOptions,
    io::Read,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    err,
    modules::{
        atlas_pack::{CellSizePolicy, OverflowPolicy},
        sprite_source::Tier,
    },
    utils::constants::{default_atlases, PALETTE_PATH},
};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TierConfig {
    pub tier: Tier,
    /// Sprite container, relative to `root_path`.
    pub path: PathBuf,
    pub pages: u32,
    pub rows: u32,
    pub cell_size: CellSizePolicy,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AtlasConfig {
    /// Output directory name under each tier.
    pub category: String,
    #[serde(rename = "tier")]
    pub tiers: Vec<TierConfig>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Game installation folder.
    pub root_path: PathBuf,
    pub atlas_out_path: PathBuf,
    /// Where single sprites go when `create_pngs` is set.
    pub png_out_path: Option<PathBuf>,
    #[serde(default)]
    pub create_pngs: bool,
    #[serde(default = "default_palette")]
    pub palette: PathBuf,
    #[serde(default)]
    pub overflow: OverflowPolicy,
    #[serde(rename = "atlas", default = "default_atlases")]
    pub atlases: Vec<AtlasConfig>,
}

fn default_palette() -> PathBuf {
    PathBuf::from(PALETTE_PATH)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("."),
            atlas_out_path: PathBuf::from("atlas"),
            png_out_path: None,
            create_pngs: false,
            palette: default_palette(),
            overflow: OverflowPolicy::default(),
            atlases: default_atlases(),
        }
    }
}

pub static CONFIG_FILE_NAME: &str = "config.toml";

/// Parse `config.toml` in the same folder as the binary
pub fn parse_config() -> eyre::Result<Config> {
    let path = match env::current_exe() {
        Ok(path) => match path.parent() {
            Some(parent) => parent.join(CONFIG_FILE_NAME),
            None => PathBuf::from(CONFIG_FILE_NAME),
        },
        Err(_) => PathBuf::from(CONFIG_FILE_NAME),
    };

    parse_config_from_file(path.as_path())
}

pub fn parse_config_from_file(path: &Path) -> eyre::Result<Config> {
    let mut file = OpenOptions::new().read(true).open(path.as_os_str())?;
    let mut buffer = String::new();

    file.read_to_string(&mut buffer)?;

    let root = path.parent().unwrap_or(Path::new("."));

    parse_config_from_str(&buffer, root)
}

/// Relative paths in the config are relative to `root`.
pub fn parse_config_from_str(s: &str, root: &Path) -> eyre::Result<Config> {
    let config: Config = toml::from_str(s)?;

    let relative_to_root = |path: PathBuf| {
        if path.is_relative() {
            root.join(path)
        } else {
            path
        }
    };

    let config = Config {
        root_path: relative_to_root(config.root_path),
        atlas_out_path: relative_to_root(config.atlas_out_path),
        png_out_path: config.png_out_path.map(relative_to_root),
        ..config
    };

    config.validate()?;

    Ok(config)
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        if self.create_pngs && self.png_out_path.is_none() {
            return err!("`create_pngs` is set but `png_out_path` is missing");
        }

        for atlas in &self.atlases {
            if atlas.category.is_empty() {
                return err!("atlas category name is empty");
            }

            for tier in &atlas.tiers {
                if tier.pages == 0 || tier.rows == 0 {
                    return err!(
                        "{} {}: pages and rows must be at least 1",
                        atlas.category,
                        tier.tier
                    );
                }

                if let CellSizePolicy::Fixed { width, height } = tier.cell_size {
                    if width == 0 || height == 0 {
                        return err!(
                            "{} {}: cell size must be at least 1x1",
                            atlas.category,
                            tier.tier
                        );
                    }
                }
            }
        }

        Ok(())
    }
}
