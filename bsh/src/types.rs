/// Ends the pixel data of one sprite.
pub const END_MARKER: u8 = 0xFF;
/// Ends the current pixel row.
pub const END_OF_ROW: u8 = 0xFE;
pub const BSH_CHUNK_ID: &str = "BSH";
/// width, height, type, length
pub const TEXTURE_HEADER_LENGTH: usize = 16;
/// Largest `width * height` the decoder accepts. Far above any sprite the
/// game ships.
pub const MAX_TEXTURE_PIXELS: usize = 1 << 24;

pub struct BshTextureHeader {
    pub width: u32,
    pub height: u32,
    /// Unused by the decoder, kept for writing back.
    pub kind: u32,
    /// Byte length stored in the file. Not trusted when decoding.
    pub length: u32,
}

/// One decoded sprite. `None` is a transparent pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BshTexture {
    pub width: u32,
    pub height: u32,
    pub kind: u32,
    pub pixels: Vec<Option<u8>>,
}

#[derive(Debug, Clone, Default)]
pub struct BshFile {
    pub textures: Vec<BshTexture>,
}
