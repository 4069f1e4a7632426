use std::path::Path;

use col::{Palette, PALETTE_SIZE};
use eyre::WrapErr;
use image::{imageops, ImageFormat, RgbaImage};

/// Entries per swatch row.
const SWATCH_COLUMNS: u32 = 16;

pub fn save_png(img: &RgbaImage, path: &Path) -> eyre::Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .wrap_err_with(|| format!("cannot write `{}`", path.display()))
}

/// Writes every sprite as `{index}.png` into `dir`.
pub fn write_sprite_pngs(dir: &Path, sprites: &[RgbaImage]) -> eyre::Result<()> {
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("cannot create `{}`", dir.display()))?;

    for (index, sprite) in sprites.iter().enumerate() {
        save_png(sprite, &dir.join(format!("{}.png", index)))?;
    }

    Ok(())
}

/// 16x16 grid of palette entries, each entry a `scale` sized square.
pub fn palette_swatch(palette: &Palette, scale: u32) -> RgbaImage {
    let scale = scale.max(1);
    let rows = PALETTE_SIZE as u32 / SWATCH_COLUMNS;

    let swatch = RgbaImage::from_fn(SWATCH_COLUMNS, rows, |x, y| {
        palette.rgba((x + y * SWATCH_COLUMNS) as u8).into()
    });

    imageops::resize(
        &swatch,
        SWATCH_COLUMNS * scale,
        rows * scale,
        imageops::FilterType::Nearest,
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn swatch_layout() {
        let mut colors = [0xFF000000u32; PALETTE_SIZE];
        colors[17] = 0xFF112233;

        let swatch = palette_swatch(&Palette::new(colors), 4);

        assert_eq!(swatch.dimensions(), (64, 64));
        // entry 17 is row 1, column 1
        assert_eq!(swatch.get_pixel(5, 5).0, [0x11, 0x22, 0x33, 255]);
        assert_eq!(swatch.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn sprite_pngs() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("png/gfx/stadtfld");
        let sprites = vec![RgbaImage::new(2, 3), RgbaImage::new(4, 1)];

        write_sprite_pngs(&out, &sprites).unwrap();

        let second = image::open(out.join("1.png")).unwrap();
        assert_eq!((second.width(), second.height()), (4, 1));
        assert!(out.join("0.png").exists());
    }
}
