use chunk::ChunkError;

#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    #[error("Invalid palette chunk count. Expect ({expect}). Have ({have})")]
    ChunkCount { expect: usize, have: usize },
    #[error("Invalid palette chunk id. Expect ({expect}). Have ({have})")]
    ChunkId { expect: String, have: String },
    #[error("Invalid palette payload size. Expect at least ({expect}). Have ({have})")]
    PayloadSize { expect: usize, have: usize },
    #[error("Error reading palette file: {source}")]
    Chunk {
        #[from]
        source: ChunkError,
    },
}
