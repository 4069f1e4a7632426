use std::{fmt, path::PathBuf};

/// Which part of a chunk was being read when the data ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkField {
    Id,
    Length,
    Payload,
}

impl fmt::Display for ChunkField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkField::Id => write!(f, "id"),
            ChunkField::Length => write!(f, "length"),
            ChunkField::Payload => write!(f, "payload"),
        }
    }
}

fn display_id(id: &Option<String>) -> String {
    match id {
        Some(id) => format!(" `{}`", id),
        None => String::new(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChunkError {
    #[error(
        "Truncated chunk{}: expected {expected} bytes of {field}, only {available} available",
        display_id(.id)
    )]
    Truncated {
        id: Option<String>,
        field: ChunkField,
        expected: usize,
        available: usize,
    },
    #[error("Invalid length for chunk `{id}`: {length}")]
    InvalidLength { id: String, length: i32 },
    #[error("Payload of chunk `{id}` is too large: {length} bytes")]
    PayloadTooLarge { id: String, length: usize },
    #[error("Chunk index out of range. Index ({index}). Have ({count})")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("Cannot read `{}`: {source}", .path.display())]
    IOError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
