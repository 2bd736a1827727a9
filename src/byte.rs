use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum WriteError {
    ValueTooLarge(String),
}

impl Display for WriteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteError::ValueTooLarge(message) => write!(f, "Value too large: {}", message),
        }
    }
}

impl std::error::Error for WriteError {}

#[derive(Debug)]
pub enum ReadError {
    NotEnoughBytes(String),
}

impl Display for ReadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadError::NotEnoughBytes(message) => write!(f, "Not enough bytes: {}", message),
        }
    }
}

impl std::error::Error for ReadError {}

/// Append-only big-endian byte buffer.
#[derive(Debug, Default)]
pub struct ByteWriter {
    bytes: Vec<u8>,
}

impl ByteWriter {
    #[inline(always)]
    pub fn new() -> Self {
        ByteWriter { bytes: Vec::new() }
    }

    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        ByteWriter {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Writes the low `width` bytes of `value` in big-endian order.
    #[inline(always)]
    pub fn put_uint(&mut self, value: u64, width: usize) -> Result<(), WriteError> {
        if width < 8 && value >= 1u64 << (width * 8) {
            return Err(WriteError::ValueTooLarge(format!(
                "Value {} exceeds the maximum for {} bytes",
                value, width
            )));
        }

        self.bytes.extend_from_slice(&value.to_be_bytes()[8 - width..]);
        Ok(())
    }

    #[inline(always)]
    pub fn put_u8(&mut self, value: u8) {
        self.bytes.push(value);
    }

    #[inline(always)]
    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline(always)]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Cursor over a borrowed byte slice. Reads never look past what they consume.
#[derive(Debug)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> ByteReader<'a> {
    #[inline(always)]
    pub fn new(bytes: &'a [u8]) -> Self {
        ByteReader { bytes, position: 0 }
    }

    #[inline(always)]
    pub fn take(&mut self, count: usize) -> Result<&'a [u8], ReadError> {
        let available = self.bytes.len() - self.position;
        if count > available {
            return Err(ReadError::NotEnoughBytes(format!(
                "Requested {} bytes, but only {} bytes available",
                count, available
            )));
        }

        let slice = &self.bytes[self.position..self.position + count];
        self.position += count;
        Ok(slice)
    }

    /// Reads `width` bytes as a big-endian unsigned integer, `width` <= 8.
    #[inline(always)]
    pub fn take_uint(&mut self, width: usize) -> Result<u64, ReadError> {
        let slice = self.take(width)?;
        let mut buffer = [0u8; 8];
        buffer[8 - width..].copy_from_slice(slice);
        Ok(u64::from_be_bytes(buffer))
    }

    #[inline(always)]
    pub fn take_u8(&mut self) -> Result<u8, ReadError> {
        Ok(self.take(1)?[0])
    }

    /// Total bytes consumed so far.
    #[inline(always)]
    pub fn consumed(&self) -> usize {
        self.position
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }
}
