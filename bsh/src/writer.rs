use byte_writer::ByteWriter;
use chunk::{Chunk, ChunkFile};

use crate::{
    error::BshError,
    types::{BshFile, BshTexture, BSH_CHUNK_ID, END_MARKER, END_OF_ROW},
};

// Run lengths must never collide with the markers.
const MAX_TRANSPARENT_RUN: usize = END_OF_ROW as usize - 1;
const MAX_PIXEL_RUN: usize = u8::MAX as usize;

impl BshTexture {
    fn write_pixels(&self, writer: &mut ByteWriter) {
        let width = self.width as usize;

        if width == 0 {
            writer.append_u8(END_MARKER);
            return;
        }

        for (row_index, row) in self.pixels.chunks(width).enumerate() {
            let mut x = 0;

            while x < row.len() {
                // rest of the row is transparent, nothing to write
                if row[x..].iter().all(Option::is_none) {
                    break;
                }

                let transparent = row[x..]
                    .iter()
                    .take(MAX_TRANSPARENT_RUN)
                    .take_while(|pixel| pixel.is_none())
                    .count();
                x += transparent;

                let colors: Vec<u8> = row[x..]
                    .iter()
                    .take(MAX_PIXEL_RUN)
                    .map_while(|pixel| *pixel)
                    .collect();
                x += colors.len();

                writer.append_u8(transparent as u8);
                writer.append_u8(colors.len() as u8);
                writer.append_u8_slice(&colors);
            }

            if row_index + 1 < self.height as usize {
                writer.append_u8(END_OF_ROW);
            }
        }

        writer.append_u8(END_MARKER);
    }

    fn write_to_writer(&self, writer: &mut ByteWriter) {
        let start = writer.get_offset();

        writer.append_u32(self.width);
        writer.append_u32(self.height);
        writer.append_u32(self.kind);
        // header plus pixel stream, patched below
        writer.append_u32(0);

        self.write_pixels(writer);

        let length = (writer.get_offset() - start) as u32;
        writer.replace_with_u32(start + 12, length);
    }
}

impl BshFile {
    /// Offset table followed by the sprites in order.
    pub fn write_to_chunk(&self) -> Chunk {
        let mut writer = ByteWriter::new();

        // offsets are known only once each sprite is written
        for _ in &self.textures {
            writer.append_u32(0);
        }

        for (index, texture) in self.textures.iter().enumerate() {
            let offset = writer.get_offset() as u32;

            writer.replace_with_u32(index * 4, offset);
            texture.write_to_writer(&mut writer);
        }

        Chunk::new(BSH_CHUNK_ID, writer.data)
    }

    pub fn write_to_bytes(&self) -> Result<Vec<u8>, BshError> {
        Ok(ChunkFile::new(vec![self.write_to_chunk()]).write_to_bytes()?)
    }
}
