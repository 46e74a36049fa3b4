use thiserror::Error;

pub type SctpResult<T> = Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Encoding error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Decoding error: {0}")]
    Decode(#[from] DecodeError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The write would run past the preallocated buffer.
    #[error("Capacity exceeded: {needed} bytes needed, {available} available")]
    CapacityExceeded { needed: usize, available: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// A header whose low nibble names no field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown field type {0}")]
pub struct UnknownFieldType(pub u8);

/// Every variant carries the absolute offset into the input where the problem was found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Unexpected end of stream at offset {offset}: {needed} more bytes needed")]
    EndOfStream { offset: usize, needed: usize },

    #[error("LEB128 overflow at offset {offset}: value exceeds 64 bits")]
    Overflow { offset: usize },

    #[error("Unknown field type {code} at offset {offset}")]
    UnknownType { code: u8, offset: usize },
}

impl DecodeError {
    pub fn offset(&self) -> usize {
        match self {
            Self::EndOfStream { offset, .. }
            | Self::Overflow { offset }
            | Self::UnknownType { offset, .. } => *offset,
        }
    }
}
