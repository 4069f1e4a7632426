use chunk::ChunkError;

#[derive(Debug, thiserror::Error)]
pub enum BshError {
    #[error("Sprite file has no chunk")]
    MissingChunk,
    #[error("Invalid sprite chunk id. Expect ({expect}). Have ({have})")]
    ChunkId { expect: String, have: String },
    #[error("Failed to parse sprite offset table")]
    ParseOffsets,
    #[error("Failed to parse header of sprite {index} at offset {offset}")]
    ParseTextureHeader { index: usize, offset: u32 },
    #[error("Invalid dimensions of sprite {index}: {width}x{height}")]
    InvalidDimensions {
        index: usize,
        width: u32,
        height: u32,
    },
    #[error("Pixel data of sprite {index} ends without end marker")]
    UnexpectedEnd { index: usize },
    #[error("Pixel ({x}, {y}) of sprite {index} is outside of {width}x{height}")]
    PixelOutOfBounds {
        index: usize,
        x: usize,
        y: usize,
        width: u32,
        height: u32,
    },
    #[error("Error reading sprite file: {source}")]
    Chunk {
        #[from]
        source: ChunkError,
    },
}
