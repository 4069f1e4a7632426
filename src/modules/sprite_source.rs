use std::{fmt, path::Path};

use bsh::BshFile;
use col::Palette;
use eyre::WrapErr;
use image::RgbaImage;
use log::debug;
use serde::Deserialize;

/// Detail level of the game graphics. Every tier ships its own sprite file.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Low detail.
    Sgfx,
    /// Medium detail.
    Mgfx,
    /// High detail.
    Gfx,
}

impl Tier {
    /// Directory name of the tier in the output.
    pub fn name(&self) -> &'static str {
        match self {
            Tier::Sgfx => "sgfx",
            Tier::Mgfx => "mgfx",
            Tier::Gfx => "gfx",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Turns a sprite container into images, in container order.
pub trait SpriteSource {
    fn decode(&self, path: &Path, palette: &Palette, tier: Tier) -> eyre::Result<Vec<RgbaImage>>;
}

/// Reads `.bsh` sprite files.
pub struct BshSpriteSource;

impl SpriteSource for BshSpriteSource {
    fn decode(&self, path: &Path, palette: &Palette, tier: Tier) -> eyre::Result<Vec<RgbaImage>> {
        let bsh = BshFile::open_from_file(path)
            .wrap_err_with(|| format!("cannot decode sprites of `{}`", path.display()))?;

        debug!(
            "decoded {} {} sprites from {}",
            bsh.textures.len(),
            tier,
            path.display()
        );

        Ok(bsh
            .textures
            .iter()
            .map(|texture| texture.to_rgba8(palette))
            .collect())
    }
}

#[cfg(test)]
mod test {
    use bsh::BshTexture;

    use super::*;

    #[test]
    fn bsh_source_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("STADTFLD.BSH");

        let file = BshFile {
            textures: (1..=3)
                .map(|i| BshTexture {
                    width: i,
                    height: i * 2,
                    kind: 0,
                    pixels: vec![Some(i as u8); (i * i * 2) as usize],
                })
                .collect(),
        };
        std::fs::write(&path, file.write_to_bytes().unwrap()).unwrap();

        let palette = Palette::from_rgb([1, 2, 3]);
        let sprites = BshSpriteSource.decode(&path, &palette, Tier::Gfx).unwrap();

        let dimensions: Vec<_> = sprites.iter().map(|s| s.dimensions()).collect();
        assert_eq!(dimensions, vec![(1, 2), (2, 4), (3, 6)]);
        assert_eq!(sprites[2].get_pixel(2, 5).0, [1, 2, 3, 255]);
    }

    #[test]
    fn bsh_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let palette = Palette::from_rgb([0, 0, 0]);

        let res = BshSpriteSource.decode(&dir.path().join("nope.bsh"), &palette, Tier::Sgfx);

        assert!(res.is_err());
    }

    #[test]
    fn tier_names() {
        let names: Vec<_> = [Tier::Sgfx, Tier::Mgfx, Tier::Gfx]
            .iter()
            .map(|tier| tier.to_string())
            .collect();

        assert_eq!(names, vec!["sgfx", "mgfx", "gfx"]);
    }
}
