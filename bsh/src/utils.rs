use std::{ffi::OsStr, path::Path};

use chunk::ChunkFile;
use col::Palette;
use image::RgbaImage;

use crate::{
    error::BshError,
    parser::parse_bsh,
    types::{BshFile, BshTexture, BSH_CHUNK_ID},
};

impl BshFile {
    pub fn open_from_bytes(i: &[u8]) -> Result<BshFile, BshError> {
        let file = ChunkFile::from_bytes(i)?;

        Self::from_chunk_file(&file)
    }

    pub fn open_from_file(path: impl AsRef<OsStr> + AsRef<Path>) -> Result<BshFile, BshError> {
        let file = ChunkFile::open_from_file(path)?;

        Self::from_chunk_file(&file)
    }

    /// Only the first chunk carries sprites.
    pub fn from_chunk_file(file: &ChunkFile) -> Result<BshFile, BshError> {
        if file.chunk_count() == 0 {
            return Err(BshError::MissingChunk);
        }

        let chunk = file.chunk(0)?;

        if chunk.id != BSH_CHUNK_ID {
            return Err(BshError::ChunkId {
                expect: BSH_CHUNK_ID.to_string(),
                have: chunk.id.clone(),
            });
        }

        parse_bsh(&chunk.data)
    }

    /// Largest width and largest height over all sprites.
    pub fn max_dimensions(&self) -> (u32, u32) {
        self.textures.iter().fold((0, 0), |(w, h), texture| {
            (w.max(texture.width), h.max(texture.height))
        })
    }
}

impl BshTexture {
    pub fn to_rgba8(&self, palette: &Palette) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            match self.pixels[(x + y * self.width) as usize] {
                Some(color_index) => palette.rgba(color_index).into(),
                None => [0, 0, 0, 0].into(),
            }
        })
    }
}
