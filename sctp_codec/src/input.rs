use crate::Decoder;
use derive_more::From;

/// A decoder input the caller allocates first and fills afterwards, e.g. straight from a
/// socket or a host runtime's memory copy.
#[derive(From)]
pub struct OwnedInput {
    buffer: Box<[u8]>,
}

impl OwnedInput {
    /// A zeroed buffer of exactly `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            buffer: vec![0u8; size].into_boxed_slice(),
        }
    }

    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn decoder(&self) -> Decoder<'_> {
        Decoder::new(&self.buffer)
    }
}

impl From<Vec<u8>> for OwnedInput {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            buffer: bytes.into_boxed_slice(),
        }
    }
}
