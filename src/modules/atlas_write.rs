use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::Path,
};

use eyre::WrapErr;
use log::debug;
use nom::{
    bytes::complete::tag,
    character::complete::{multispace0, u32 as parse_u32},
    combinator::all_consuming,
    sequence::{delimited, preceded, separated_pair},
    IResult, Parser,
};

use crate::{
    err,
    modules::atlas_pack::PackedAtlas,
    utils::{
        constants::{HEIGHTS_FILE_NAME, INFO_FILE_NAME},
        img_stuffs::save_png,
    },
};

/// Cell geometry and heights as a renderer reads them back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasInfo {
    pub cell_width: u32,
    pub cell_height: u32,
    pub heights: Vec<u32>,
}

fn write_text(path: &Path, text: &str) -> eyre::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)
        .wrap_err_with(|| format!("cannot create `{}`", path.display()))?;

    file.write_all(text.as_bytes())
        .and_then(|_| file.flush())
        .wrap_err_with(|| format!("cannot write `{}`", path.display()))?;

    Ok(())
}

/// Writes `{n}.png` for every page, `info.txt` and, if anything was placed,
/// `heights.txt` into `out_dir`.
///
/// Nothing is cleaned up on failure.
pub fn write_atlas(out_dir: &Path, atlas: &PackedAtlas) -> eyre::Result<()> {
    fs::create_dir_all(out_dir)
        .wrap_err_with(|| format!("cannot create `{}`", out_dir.display()))?;

    for (index, page) in atlas.pages.iter().enumerate() {
        let path = out_dir.join(format!("{}.png", index));

        debug!("writing {}", path.display());
        save_png(page, &path)?;
    }

    let info = format!(
        "maxX: {}, maxY: {}\n",
        atlas.geometry.cell_width(),
        atlas.geometry.cell_height()
    );
    write_text(&out_dir.join(INFO_FILE_NAME), &info)?;

    let heights_path = out_dir.join(HEIGHTS_FILE_NAME);

    if atlas.heights.is_empty() {
        // leftover from an earlier run would describe sprites that are not there
        if heights_path.exists() {
            fs::remove_file(&heights_path)
                .wrap_err_with(|| format!("cannot remove `{}`", heights_path.display()))?;
        }
    } else {
        let heights = atlas
            .heights
            .iter()
            .map(|height| format!("{}\n", height))
            .collect::<String>();

        write_text(&heights_path, &heights)?;
    }

    Ok(())
}

fn parse_info(i: &str) -> IResult<&str, (u32, u32)> {
    all_consuming(delimited(
        multispace0,
        separated_pair(
            preceded(tag("maxX: "), parse_u32),
            tag(", "),
            preceded(tag("maxY: "), parse_u32),
        ),
        multispace0,
    ))
    .parse(i)
}

/// Reads `info.txt` and `heights.txt` of one atlas directory.
///
/// A missing `heights.txt` means no sprite was placed.
pub fn read_atlas_info(dir: &Path) -> eyre::Result<AtlasInfo> {
    let info_path = dir.join(INFO_FILE_NAME);
    let info = fs::read_to_string(&info_path)
        .wrap_err_with(|| format!("cannot read `{}`", info_path.display()))?;

    let Ok((_, (cell_width, cell_height))) = parse_info(&info) else {
        return err!("malformed `{}`: {:?}", info_path.display(), info);
    };

    let heights_path = dir.join(HEIGHTS_FILE_NAME);
    let heights = if heights_path.exists() {
        fs::read_to_string(&heights_path)
            .wrap_err_with(|| format!("cannot read `{}`", heights_path.display()))?
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.trim()
                    .parse::<u32>()
                    .wrap_err_with(|| format!("bad height `{}` in `{}`", line, heights_path.display()))
            })
            .collect::<eyre::Result<Vec<u32>>>()?
    } else {
        vec![]
    };

    Ok(AtlasInfo {
        cell_width,
        cell_height,
        heights,
    })
}
