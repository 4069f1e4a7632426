//! Color palette files
//!
//! A palette file is a chunk file with a single `COL` chunk. The chunk holds
//! 256 entries of 4 bytes: red, green, blue and one unused byte.
pub mod error;
mod parser;
mod types;
mod utils;

pub use types::*;

#[cfg(test)]
mod test {
    use chunk::{Chunk, ChunkFile};

    use crate::{error::PaletteError, Palette, PALETTE_CHUNK_ID, PALETTE_SIZE};

    fn known_payload() -> Vec<u8> {
        (0..PALETTE_SIZE)
            .flat_map(|i| {
                let i = i as u8;
                // 4th byte is garbage on purpose
                [i, i.wrapping_mul(3), 255 - i, 0xCD]
            })
            .collect()
    }

    fn palette_bytes(chunks: Vec<Chunk>) -> Vec<u8> {
        ChunkFile::new(chunks).write_to_bytes().unwrap()
    }

    #[test]
    fn decode_known_values() {
        let bytes = palette_bytes(vec![Chunk::new(PALETTE_CHUNK_ID, known_payload())]);
        let palette = Palette::open_from_bytes(&bytes).unwrap();

        for i in 0..PALETTE_SIZE {
            let (r, g, b) = (i as u32, (i as u8).wrapping_mul(3) as u32, 255 - i as u32);

            assert_eq!(palette.get(i as u8), 0xFF000000 | (r << 16) | (g << 8) | b);
        }
    }

    #[test]
    fn rgba_channels() {
        let mut payload = vec![0u8; PALETTE_SIZE * 4];
        payload[4..8].copy_from_slice(&[10, 20, 30, 0]);

        let bytes = palette_bytes(vec![Chunk::new(PALETTE_CHUNK_ID, payload)]);
        let palette = Palette::open_from_bytes(&bytes).unwrap();

        assert_eq!(palette.rgba(1), [10, 20, 30, 255]);
        assert_eq!(palette.rgba(0), [0, 0, 0, 255]);
    }

    #[test]
    fn extra_bytes_are_ignored() {
        let mut payload = known_payload();
        payload.extend_from_slice(&[1, 2, 3, 4, 5]);

        let bytes = palette_bytes(vec![Chunk::new(PALETTE_CHUNK_ID, payload)]);

        assert!(Palette::open_from_bytes(&bytes).is_ok());
    }

    #[test]
    fn same_bytes_same_palette() {
        let bytes = palette_bytes(vec![Chunk::new(PALETTE_CHUNK_ID, known_payload())]);

        let left = Palette::open_from_bytes(&bytes).unwrap();
        let right = Palette::open_from_bytes(&bytes).unwrap();

        assert_eq!(left, right);
    }

    #[test]
    fn two_chunks() {
        let bytes = palette_bytes(vec![
            Chunk::new(PALETTE_CHUNK_ID, known_payload()),
            Chunk::new(PALETTE_CHUNK_ID, known_payload()),
        ]);

        let err = Palette::open_from_bytes(&bytes).unwrap_err();

        assert!(matches!(
            err,
            PaletteError::ChunkCount { expect: 1, have: 2 }
        ));
        assert!(err.to_string().contains("chunk count"));
    }

    #[test]
    fn no_chunk() {
        let err = Palette::open_from_bytes(&[]).unwrap_err();

        assert!(matches!(
            err,
            PaletteError::ChunkCount { expect: 1, have: 0 }
        ));
    }

    #[test]
    fn wrong_id() {
        let bytes = palette_bytes(vec![Chunk::new("BSH", known_payload())]);

        let err = Palette::open_from_bytes(&bytes).unwrap_err();

        assert!(matches!(err, PaletteError::ChunkId { .. }));
        assert!(err.to_string().contains("chunk id"));
    }

    #[test]
    fn short_payload() {
        let mut payload = known_payload();
        payload.truncate(PALETTE_SIZE * 4 - 1);

        let bytes = palette_bytes(vec![Chunk::new(PALETTE_CHUNK_ID, payload)]);

        let err = Palette::open_from_bytes(&bytes).unwrap_err();

        assert!(matches!(
            err,
            PaletteError::PayloadSize {
                expect: 1024,
                have: 1023
            }
        ));
        assert!(err.to_string().contains("payload size"));
    }

    #[test]
    fn truncated_file() {
        let mut bytes = palette_bytes(vec![Chunk::new(PALETTE_CHUNK_ID, known_payload())]);
        bytes.truncate(100);

        let err = Palette::open_from_bytes(&bytes).unwrap_err();

        assert!(matches!(err, PaletteError::Chunk { .. }));
    }

    #[test]
    fn gray() {
        let palette = Palette::from_rgb([128, 128, 128]);

        assert!(palette.colors().iter().all(|&c| c == 0xFF808080));
    }
}
