use std::path::{Path, PathBuf};

use crate::error::ChunkError;

/// Size of the NUL padded id field.
pub const CHUNK_ID_LENGTH: usize = 16;
/// Size of the payload length field.
pub const CHUNK_LENGTH_LENGTH: usize = 4;
pub const CHUNK_HEADER_LENGTH: usize = CHUNK_ID_LENGTH + CHUNK_LENGTH_LENGTH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Id up to the first NUL. Whatever follows the NUL is dropped.
    pub id: String,
    pub data: Vec<u8>,
}

/// All chunks of one file, in file order.
///
/// The whole file is parsed when the struct is built and never touched again.
#[derive(Debug, Clone, Default)]
pub struct ChunkFile {
    pub(crate) path: Option<PathBuf>,
    pub(crate) chunks: Vec<Chunk>,
}

impl Chunk {
    pub fn new(id: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl ChunkFile {
    pub fn new(chunks: Vec<Chunk>) -> Self {
        Self { path: None, chunks }
    }

    /// Path the chunks were read from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn chunk(&self, index: usize) -> Result<&Chunk, ChunkError> {
        self.chunks.get(index).ok_or(ChunkError::IndexOutOfRange {
            index,
            count: self.chunks.len(),
        })
    }

    pub fn chunk_has_id(&self, index: usize, id: &str) -> Result<bool, ChunkError> {
        Ok(self.chunk(index)?.id == id)
    }
}
