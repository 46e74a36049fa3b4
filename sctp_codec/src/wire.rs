use derive_more::{Deref, From};
use crate::UnknownFieldType;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use std::fmt;

pub const TYPE_MASK: u8 = 0x0F;
pub const META_MASK: u8 = 0xF0;
pub const META_SHIFT: u32 = 4;

/// Vector meta value meaning "the length follows as a ULEB128".
pub const VECTOR_LARGE_FLAG: u8 = 0x0F;

/// Largest value a `Short` field can carry in its meta nibble.
pub const SHORT_MAX: u8 = 0x0F;

/// The one code in the tag space that no field uses.
pub const RESERVED_CODE: u8 = 14;

/// The low nibble of every header byte.
///
/// Code 14 is reserved and has no variant, so converting a header that carries it fails.
#[repr(u8)]
#[derive(PartialEq, Eq, Hash, Clone, Copy, FromPrimitive, ToPrimitive, Debug)]
pub enum FieldType {
    Int8 = 0,
    UInt8 = 1,
    Int16 = 2,
    UInt16 = 3,
    Int32 = 4,
    UInt32 = 5,
    Int64 = 6,
    UInt64 = 7,
    ULeb128 = 8,
    SLeb128 = 9,
    Float32 = 10,
    Float64 = 11,
    Short = 12,
    Vector = 13,
    Eof = 15,
}

/// How the bytes following a header are laid out, per field type.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum PayloadLayout {
    /// Exactly this many little-endian bytes.
    Fixed(usize),
    /// A LEB128 sequence; its length is whatever the encoding consumes.
    Leb128,
    /// The value lives in the meta nibble. No payload.
    Inline,
    /// Inline length in meta, or a ULEB128 length when meta is the large flag.
    Vector,
    /// Nothing follows.
    Empty,
}

impl TryFrom<Header> for FieldType {
    type Error = UnknownFieldType;
    fn try_from(header: Header) -> Result<Self, UnknownFieldType> {
        let code = header.type_code();
        FieldType::from_u8(code).ok_or(UnknownFieldType(code))
    }
}

impl FieldType {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn payload_layout(self) -> PayloadLayout {
        match self {
            Self::Int8 | Self::UInt8 => PayloadLayout::Fixed(1),
            Self::Int16 | Self::UInt16 => PayloadLayout::Fixed(2),
            Self::Int32 | Self::UInt32 | Self::Float32 => PayloadLayout::Fixed(4),
            Self::Int64 | Self::UInt64 | Self::Float64 => PayloadLayout::Fixed(8),
            Self::ULeb128 | Self::SLeb128 => PayloadLayout::Leb128,
            Self::Short => PayloadLayout::Inline,
            Self::Vector => PayloadLayout::Vector,
            Self::Eof => PayloadLayout::Empty,
        }
    }

    /// The byte size of a decoded value of this type, as reported by the decoder.
    ///
    /// LEB128 types report the 8 bytes of their in-memory value, not the wire length.
    /// `Vector` has no fixed size.
    pub fn value_size(self) -> Option<usize> {
        match self {
            Self::Int8 | Self::UInt8 | Self::Short => Some(1),
            Self::Int16 | Self::UInt16 => Some(2),
            Self::Int32 | Self::UInt32 | Self::Float32 => Some(4),
            Self::Int64 | Self::UInt64 | Self::Float64 | Self::ULeb128 | Self::SLeb128 => Some(8),
            Self::Eof => Some(0),
            Self::Vector => None,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int8 => "INT8",
            Self::UInt8 => "UINT8",
            Self::Int16 => "INT16",
            Self::UInt16 => "UINT16",
            Self::Int32 => "INT32",
            Self::UInt32 => "UINT32",
            Self::Int64 => "INT64",
            Self::UInt64 => "UINT64",
            Self::ULeb128 => "ULEB128",
            Self::SLeb128 => "SLEB128",
            Self::Float32 => "FLOAT32",
            Self::Float64 => "FLOAT64",
            Self::Short => "SHORT",
            Self::Vector => "VECTOR",
            Self::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// One header byte: `type | meta << 4`.
#[derive(From, Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct Header(u8);

impl Header {
    /// `meta` must fit in a nibble. Callers validate user-supplied values before getting here.
    pub fn new(field_type: FieldType, meta: u8) -> Self {
        debug_assert!(meta <= 0x0F);
        Self(field_type.code() | (meta << META_SHIFT))
    }

    pub fn type_code(&self) -> u8 {
        self.0 & TYPE_MASK
    }

    pub fn meta(&self) -> u8 {
        (self.0 & META_MASK) >> META_SHIFT
    }
}
