//! Little-endian byte buffer shared by the file writers.

#[derive(Debug, Default)]
pub struct ByteWriter {
    pub data: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Where the next byte goes.
    pub fn get_offset(&self) -> usize {
        self.data.len()
    }

    pub fn append_u8(&mut self, i: u8) {
        self.data.push(i);
    }

    pub fn append_u32(&mut self, i: u32) {
        self.data.extend(i.to_le_bytes());
    }

    pub fn append_i32(&mut self, i: i32) {
        self.data.extend(i.to_le_bytes());
    }

    pub fn append_u8_slice(&mut self, i: &[u8]) {
        self.data.extend_from_slice(i);
    }

    /// Writes `s` into a field of `length` bytes, cut off or padded with NUL.
    pub fn append_padded_string(&mut self, s: &str, length: usize) {
        let bytes = s.as_bytes();
        let written = bytes.len().min(length);

        self.data.extend_from_slice(&bytes[..written]);
        self.data.resize(self.data.len() + length - written, 0);
    }

    /// Overwrites bytes that were already appended.
    pub fn replace(&mut self, start: usize, slice: &[u8]) {
        self.data[start..start + slice.len()].copy_from_slice(slice);
    }

    pub fn replace_with_u32(&mut self, start: usize, val: u32) {
        self.replace(start, &val.to_le_bytes());
    }
}
