use crate::FieldType;
use std::fmt;

/// One decoded field.
///
/// `Vector` borrows from the decoder's input; copy the bytes out if they must outlive it.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum FieldValue<'a> {
    Int8(i8),
    UInt8(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    ULeb128(u64),
    SLeb128(i64),
    Float32(f32),
    Float64(f64),
    /// 0 to 15 inclusive.
    Short(u8),
    Vector(&'a [u8]),
    Eof,
}

impl<'a> FieldValue<'a> {
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Int8(_) => FieldType::Int8,
            Self::UInt8(_) => FieldType::UInt8,
            Self::Int16(_) => FieldType::Int16,
            Self::UInt16(_) => FieldType::UInt16,
            Self::Int32(_) => FieldType::Int32,
            Self::UInt32(_) => FieldType::UInt32,
            Self::Int64(_) => FieldType::Int64,
            Self::UInt64(_) => FieldType::UInt64,
            Self::ULeb128(_) => FieldType::ULeb128,
            Self::SLeb128(_) => FieldType::SLeb128,
            Self::Float32(_) => FieldType::Float32,
            Self::Float64(_) => FieldType::Float64,
            Self::Short(_) => FieldType::Short,
            Self::Vector(_) => FieldType::Vector,
            Self::Eof => FieldType::Eof,
        }
    }

    /// Byte size of the decoded value: the payload length for vectors,
    /// the in-memory width for everything else.
    pub fn size(&self) -> usize {
        match self {
            Self::Vector(bytes) => bytes.len(),
            other => other.field_type().value_size().unwrap_or(0),
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }

    /// Equality that compares floats by bit pattern, so NaN payloads and signed zeros are
    /// told apart.
    pub fn bit_eq(&self, other: &FieldValue<'_>) -> bool {
        match (self, other) {
            (Self::Int8(slf), FieldValue::Int8(oth)) => slf == oth,
            (Self::UInt8(slf), FieldValue::UInt8(oth)) => slf == oth,
            (Self::Int16(slf), FieldValue::Int16(oth)) => slf == oth,
            (Self::UInt16(slf), FieldValue::UInt16(oth)) => slf == oth,
            (Self::Int32(slf), FieldValue::Int32(oth)) => slf == oth,
            (Self::UInt32(slf), FieldValue::UInt32(oth)) => slf == oth,
            (Self::Int64(slf), FieldValue::Int64(oth)) => slf == oth,
            (Self::UInt64(slf), FieldValue::UInt64(oth)) => slf == oth,
            (Self::ULeb128(slf), FieldValue::ULeb128(oth)) => slf == oth,
            (Self::SLeb128(slf), FieldValue::SLeb128(oth)) => slf == oth,
            (Self::Float32(slf), FieldValue::Float32(oth)) => slf.to_bits() == oth.to_bits(),
            (Self::Float64(slf), FieldValue::Float64(oth)) => slf.to_bits() == oth.to_bits(),
            (Self::Short(slf), FieldValue::Short(oth)) => slf == oth,
            (Self::Vector(slf), FieldValue::Vector(oth)) => slf == oth,
            (Self::Eof, FieldValue::Eof) => true,
            _ => false,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_type())?;
        match self {
            Self::Int8(v) => write!(f, " {v}"),
            Self::UInt8(v) => write!(f, " {v}"),
            Self::Int16(v) => write!(f, " {v}"),
            Self::UInt16(v) => write!(f, " {v}"),
            Self::Int32(v) => write!(f, " {v}"),
            Self::UInt32(v) => write!(f, " {v}"),
            Self::Int64(v) => write!(f, " {v}"),
            Self::UInt64(v) => write!(f, " {v}"),
            Self::ULeb128(v) => write!(f, " {v}"),
            Self::SLeb128(v) => write!(f, " {v}"),
            Self::Float32(v) => write!(f, " {v:?}"),
            Self::Float64(v) => write!(f, " {v:?}"),
            Self::Short(v) => write!(f, " {v}"),
            Self::Vector(bytes) => {
                write!(f, " [{}] ", bytes.len())?;
                for byte in bytes.iter() {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            Self::Eof => Ok(()),
        }
    }
}
