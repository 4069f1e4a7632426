//! BSH sprite files
//!
//! The first chunk holds an offset table followed by run-length encoded
//! sprites. Each sprite has a 16 byte header (width, height, type, length)
//! and then a stream of `(transparent count, pixel count, palette indices...)`
//! runs, broken by `0xFE` at each row end and closed by `0xFF`.
pub mod error;
mod parser;
mod types;
mod utils;
mod writer;

pub use types::*;
