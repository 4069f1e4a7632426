use std::{ffi::OsStr, path::Path};

use chunk::ChunkFile;
use nom::Parser;

use crate::{
    error::PaletteError,
    parser::parse_colors,
    types::{Palette, PALETTE_CHUNK_ID, PALETTE_ENTRY_LENGTH, PALETTE_SIZE},
};

const PALETTE_CHUNK_COUNT: usize = 1;

impl Palette {
    pub fn open_from_bytes(i: &[u8]) -> Result<Palette, PaletteError> {
        let file = ChunkFile::from_bytes(i)?;

        Self::from_chunk_file(&file)
    }

    pub fn open_from_file(path: impl AsRef<OsStr> + AsRef<Path>) -> Result<Palette, PaletteError> {
        let file = ChunkFile::open_from_file(path)?;

        Self::from_chunk_file(&file)
    }

    /// Checks that the file is exactly one `COL` chunk and reads the colors.
    pub fn from_chunk_file(file: &ChunkFile) -> Result<Palette, PaletteError> {
        if file.chunk_count() != PALETTE_CHUNK_COUNT {
            return Err(PaletteError::ChunkCount {
                expect: PALETTE_CHUNK_COUNT,
                have: file.chunk_count(),
            });
        }

        let chunk = file.chunk(0)?;

        if !file.chunk_has_id(0, PALETTE_CHUNK_ID)? {
            return Err(PaletteError::ChunkId {
                expect: PALETTE_CHUNK_ID.to_string(),
                have: chunk.id.clone(),
            });
        }

        let (_, colors) =
            parse_colors
                .parse(chunk.data.as_slice())
                .map_err(|_| PaletteError::PayloadSize {
                    expect: PALETTE_SIZE * PALETTE_ENTRY_LENGTH,
                    have: chunk.data.len(),
                })?;

        let mut res = [0u32; PALETTE_SIZE];
        res.copy_from_slice(&colors);

        Ok(Palette::new(res))
    }
}
