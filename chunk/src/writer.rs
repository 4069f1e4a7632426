use std::{fs::OpenOptions, io::Write, path::Path};

use byte_writer::ByteWriter;

use crate::{
    error::ChunkError,
    types::{Chunk, ChunkFile, CHUNK_HEADER_LENGTH, CHUNK_ID_LENGTH},
};

/// The length field is signed, so payloads stop at `i32::MAX` bytes.
pub(crate) fn payload_length(id: &str, length: usize) -> Result<i32, ChunkError> {
    i32::try_from(length).map_err(|_| ChunkError::PayloadTooLarge {
        id: id.to_string(),
        length,
    })
}

impl Chunk {
    fn write_to_writer(&self, writer: &mut ByteWriter) -> Result<(), ChunkError> {
        let length = payload_length(&self.id, self.data.len())?;

        writer.append_padded_string(&self.id, CHUNK_ID_LENGTH);
        writer.append_i32(length);
        writer.append_u8_slice(&self.data);

        Ok(())
    }

    /// Id longer than 16 bytes is cut off.
    pub fn write_to_bytes(&self) -> Result<Vec<u8>, ChunkError> {
        let mut writer = ByteWriter::with_capacity(CHUNK_HEADER_LENGTH + self.data.len());

        self.write_to_writer(&mut writer)?;

        Ok(writer.data)
    }
}

impl ChunkFile {
    pub fn write_to_bytes(&self) -> Result<Vec<u8>, ChunkError> {
        let mut writer = ByteWriter::new();

        for chunk in &self.chunks {
            chunk.write_to_writer(&mut writer)?;
        }

        Ok(writer.data)
    }

    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), ChunkError> {
        let path = path.as_ref();
        let io_err = |source| ChunkError::IOError {
            path: path.to_path_buf(),
            source,
        };

        let bytes = self.write_to_bytes()?;

        let mut file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(path)
            .map_err(io_err)?;

        file.write_all(&bytes).map_err(io_err)?;
        file.flush().map_err(io_err)?;

        Ok(())
    }
}
