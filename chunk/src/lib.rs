//! Chunked container files
//!
//! Every binary file of the game is a plain sequence of chunks. A chunk is a
//! 16 byte id padded with NUL, a 4 byte little-endian signed length and then
//! exactly `length` bytes of payload. There is no file header and no
//! alignment between chunks.
pub mod error;
mod parser;
mod types;
mod utils;
mod writer;

pub use error::{ChunkError, ChunkField};
pub use parser::parse_chunk;
pub use types::*;

#[cfg(test)]
mod test {
    use crate::{Chunk, ChunkError, ChunkField, ChunkFile, CHUNK_HEADER_LENGTH};

    fn sample_file() -> ChunkFile {
        ChunkFile::new(vec![
            Chunk::new("COL", vec![1, 2, 3, 4, 5, 6, 7, 8]),
            Chunk::new("EMPTY", vec![]),
            Chunk::new("BSH", (0..=255).collect()),
        ])
    }

    #[test]
    fn round_trip_in_order() {
        let original = sample_file();
        let bytes = original.write_to_bytes().unwrap();

        let parsed = ChunkFile::from_bytes(&bytes).unwrap();

        assert_eq!(parsed.chunk_count(), 3);

        for (left, right) in original.chunks().iter().zip(parsed.chunks()) {
            assert_eq!(left.id, right.id);
            assert_eq!(left.data, right.data);
        }
    }

    #[test]
    fn consumes_header_plus_length() {
        let chunk = Chunk::new("COL", vec![9; 7]);
        let bytes = chunk.write_to_bytes().unwrap();

        assert_eq!(bytes.len(), CHUNK_HEADER_LENGTH + 7);

        // trailing bytes belong to the next chunk
        let mut stream = bytes.clone();
        stream.extend_from_slice(&[0xAA; 3]);

        let (rest, parsed) = crate::parse_chunk(&stream).unwrap();
        assert_eq!(parsed.data, vec![9; 7]);
        assert_eq!(rest, &[0xAA; 3]);
    }

    #[test]
    fn empty_file_has_no_chunks() {
        let file = ChunkFile::from_bytes(&[]).unwrap();

        assert_eq!(file.chunk_count(), 0);
        assert!(file.chunks().is_empty());
    }

    #[test]
    fn zero_length_chunk() {
        let bytes = Chunk::new("NIX", vec![]).write_to_bytes().unwrap();
        let file = ChunkFile::from_bytes(&bytes).unwrap();

        assert_eq!(file.chunk_count(), 1);
        assert_eq!(file.chunk(0).unwrap().id, "NIX");
        assert!(file.chunk(0).unwrap().data.is_empty());
    }

    #[test]
    fn id_stops_at_first_nul() {
        let mut bytes = Chunk::new("COL", vec![]).write_to_bytes().unwrap();
        // garbage after the terminator is padding and never validated
        bytes[4..16].copy_from_slice(b"junkjunkjunk");

        let file = ChunkFile::from_bytes(&bytes).unwrap();

        assert_eq!(file.chunk(0).unwrap().id, "COL");
    }

    #[test]
    fn truncated_anywhere_fails() {
        let bytes = sample_file().write_to_bytes().unwrap();

        // chunk boundaries are the only places where a cut is clean
        let boundaries = [0, 28, 48, 48 + 20 + 256];

        for cut in 0..bytes.len() {
            let res = ChunkFile::from_bytes(&bytes[..cut]);

            if boundaries.contains(&cut) {
                assert!(res.is_ok(), "cut at {cut} should be clean");
            } else {
                assert!(
                    matches!(res, Err(ChunkError::Truncated { .. })),
                    "cut at {cut} should be truncated"
                );
            }
        }
    }

    #[test]
    fn truncated_payload_reports_counts() {
        let bytes = Chunk::new("BSH", vec![0; 100]).write_to_bytes().unwrap();

        let err = ChunkFile::from_bytes(&bytes[..60]).unwrap_err();

        match err {
            ChunkError::Truncated {
                id,
                field,
                expected,
                available,
            } => {
                assert_eq!(id.as_deref(), Some("BSH"));
                assert_eq!(field, ChunkField::Payload);
                assert_eq!(expected, 100);
                assert_eq!(available, 40);
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn truncated_id_has_no_name() {
        let err = ChunkFile::from_bytes(b"COL\0\0").unwrap_err();

        match err {
            ChunkError::Truncated {
                id,
                field,
                expected,
                available,
            } => {
                assert!(id.is_none());
                assert_eq!(field, ChunkField::Id);
                assert_eq!(expected, 16);
                assert_eq!(available, 5);
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn negative_length() {
        let mut bytes = Chunk::new("COL", vec![]).write_to_bytes().unwrap();
        bytes[16..20].copy_from_slice(&(-4i32).to_le_bytes());

        let err = ChunkFile::from_bytes(&bytes).unwrap_err();

        assert!(matches!(err, ChunkError::InvalidLength { length: -4, .. }));
    }

    #[test]
    fn payload_length_fits_signed_field() {
        use crate::writer::payload_length;

        assert_eq!(payload_length("BSH", 100).unwrap(), 100);
        assert_eq!(payload_length("BSH", i32::MAX as usize).unwrap(), i32::MAX);
        assert!(matches!(
            payload_length("BSH", i32::MAX as usize + 1),
            Err(ChunkError::PayloadTooLarge { .. })
        ));
    }

    #[test]
    fn long_id_is_cut() {
        let bytes = Chunk::new("ABCDEFGHIJKLMNOPQRS", vec![1])
            .write_to_bytes()
            .unwrap();

        assert_eq!(bytes.len(), CHUNK_HEADER_LENGTH + 1);
        assert_eq!(&bytes[..16], b"ABCDEFGHIJKLMNOP");
    }

    #[test]
    fn chunk_lookup() {
        let file = sample_file();

        assert!(file.chunk_has_id(0, "COL").unwrap());
        assert!(!file.chunk_has_id(1, "COL").unwrap());
        assert!(file.chunk_has_id(2, "BSH").unwrap());

        assert!(matches!(
            file.chunk(3),
            Err(ChunkError::IndexOutOfRange { index: 3, count: 3 })
        ));
        assert!(file.chunk_has_id(7, "COL").is_err());
    }

    #[test]
    fn open_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("STADTFLD.COL");

        sample_file().write_to_file(&path).unwrap();

        let file = ChunkFile::open_from_file(&path).unwrap();

        assert_eq!(file.chunk_count(), 3);
        assert_eq!(file.path(), Some(path.as_path()));
    }

    #[test]
    fn open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.bsh");

        let err = ChunkFile::open_from_file(&path).unwrap_err();

        match err {
            ChunkError::IOError { path: err_path, .. } => assert_eq!(err_path, path),
            other => panic!("unexpected error {other}"),
        }
    }
}
