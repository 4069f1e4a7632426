use std::{ffi::OsStr, path::Path};

use crate::{error::ChunkError, parser::parse_chunks, ChunkFile};

impl ChunkFile {
    pub fn from_bytes(i: &[u8]) -> Result<Self, ChunkError> {
        let chunks = parse_chunks(i)?;

        Ok(Self { path: None, chunks })
    }

    pub fn open_from_file(path: impl AsRef<OsStr> + AsRef<Path>) -> Result<Self, ChunkError> {
        let path: &Path = path.as_ref();

        let bytes = std::fs::read(path).map_err(|source| ChunkError::IOError {
            path: path.to_path_buf(),
            source,
        })?;

        let mut res = Self::from_bytes(&bytes)?;
        res.path = Some(path.to_path_buf());

        Ok(res)
    }
}
