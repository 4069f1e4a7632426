/// Number of palette entries.
pub const PALETTE_SIZE: usize = 256;
/// Bytes per palette entry in the file. The last one is unused.
pub const PALETTE_ENTRY_LENGTH: usize = 4;
pub const PALETTE_CHUNK_ID: &str = "COL";

/// 256 colors packed as `0xAARRGGBB`. Alpha is always 255.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette([u32; PALETTE_SIZE]);

impl Palette {
    pub fn new(colors: [u32; PALETTE_SIZE]) -> Self {
        Self(colors)
    }

    /// Every entry set to the same color.
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        Self([pack_rgb(rgb[0], rgb[1], rgb[2]); PALETTE_SIZE])
    }

    pub fn colors(&self) -> &[u32; PALETTE_SIZE] {
        &self.0
    }

    pub fn get(&self, index: u8) -> u32 {
        self.0[index as usize]
    }

    /// Entry as `[r, g, b, a]`.
    pub fn rgba(&self, index: u8) -> [u8; 4] {
        let [a, r, g, b] = self.get(index).to_be_bytes();

        [r, g, b, a]
    }
}

pub(crate) fn pack_rgb(red: u8, green: u8, blue: u8) -> u32 {
    (0xFF << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32
}
