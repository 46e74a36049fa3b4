use crate::leb128::{self, MAX_LEB128_LEN};
use crate::wire::{FieldType, Header, PayloadLayout, SHORT_MAX, VECTOR_LARGE_FLAG};
use crate::{EncodeError, FieldValue};
use derive_more::Deref;

/// Bytes appended by one `add_*` call, header included.
#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct WriteLen(usize);

/// Append-only writer over a buffer whose capacity is fixed at construction.
///
/// Each `add_*` call either appends one complete field or, on error, leaves the buffer untouched.
/// [`Encoder::data`] is therefore always a sequence of whole fields.
pub struct Encoder {
    buffer: Box<[u8]>,
    position: usize,
}

impl Encoder {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: vec![0u8; capacity].into_boxed_slice(),
            position: 0,
        }
    }

    /// Everything written so far.
    pub fn data(&self) -> &[u8] {
        &self.buffer[..self.position]
    }

    pub fn size(&self) -> usize {
        self.position
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    /// Rewinds to an empty stream, keeping the allocation.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    pub fn into_bytes(self) -> Vec<u8> {
        let mut bytes = self.buffer.into_vec();
        bytes.truncate(self.position);
        bytes
    }

    pub fn add_int8(&mut self, value: i8) -> Result<WriteLen, EncodeError> {
        self.add_fixed(FieldType::Int8, value.to_le_bytes())
    }
    pub fn add_uint8(&mut self, value: u8) -> Result<WriteLen, EncodeError> {
        self.add_fixed(FieldType::UInt8, value.to_le_bytes())
    }
    pub fn add_int16(&mut self, value: i16) -> Result<WriteLen, EncodeError> {
        self.add_fixed(FieldType::Int16, value.to_le_bytes())
    }
    pub fn add_uint16(&mut self, value: u16) -> Result<WriteLen, EncodeError> {
        self.add_fixed(FieldType::UInt16, value.to_le_bytes())
    }
    pub fn add_int32(&mut self, value: i32) -> Result<WriteLen, EncodeError> {
        self.add_fixed(FieldType::Int32, value.to_le_bytes())
    }
    pub fn add_uint32(&mut self, value: u32) -> Result<WriteLen, EncodeError> {
        self.add_fixed(FieldType::UInt32, value.to_le_bytes())
    }
    pub fn add_int64(&mut self, value: i64) -> Result<WriteLen, EncodeError> {
        self.add_fixed(FieldType::Int64, value.to_le_bytes())
    }
    pub fn add_uint64(&mut self, value: u64) -> Result<WriteLen, EncodeError> {
        self.add_fixed(FieldType::UInt64, value.to_le_bytes())
    }
    pub fn add_float32(&mut self, value: f32) -> Result<WriteLen, EncodeError> {
        self.add_fixed(FieldType::Float32, value.to_le_bytes())
    }
    pub fn add_float64(&mut self, value: f64) -> Result<WriteLen, EncodeError> {
        self.add_fixed(FieldType::Float64, value.to_le_bytes())
    }

    pub fn add_uleb128(&mut self, value: u64) -> Result<WriteLen, EncodeError> {
        let mut buf = [0u8; MAX_LEB128_LEN];
        let len = leb128::encode_uleb128(value, &mut buf);
        self.write_field(Header::new(FieldType::ULeb128, 0), &buf[..len])
    }

    pub fn add_sleb128(&mut self, value: i64) -> Result<WriteLen, EncodeError> {
        let mut buf = [0u8; MAX_LEB128_LEN];
        let len = leb128::encode_sleb128(value, &mut buf);
        self.write_field(Header::new(FieldType::SLeb128, 0), &buf[..len])
    }

    /// `value` must be at most 15. It is stored in the header; no payload follows.
    pub fn add_short(&mut self, value: u8) -> Result<WriteLen, EncodeError> {
        if value > SHORT_MAX {
            tracing::debug!(value, "SCTP encoder rejected short value");
            return Err(EncodeError::InvalidArgument(format!(
                "short value must be <= {SHORT_MAX}, got {value}"
            )));
        }
        self.write_field(Header::new(FieldType::Short, value), &[])
    }

    /// Reserves a vector field of `length` bytes and returns the zeroed payload region
    /// for the caller to fill in place.
    pub fn add_vector(&mut self, length: usize) -> Result<&mut [u8], EncodeError> {
        let mut len_prefix = [0u8; MAX_LEB128_LEN];
        let (header, len_prefix_len) = if length < VECTOR_LARGE_FLAG as usize {
            (Header::new(FieldType::Vector, length as u8), 0)
        } else {
            let len_prefix_len = leb128::encode_uleb128(length as u64, &mut len_prefix);
            (Header::new(FieldType::Vector, VECTOR_LARGE_FLAG), len_prefix_len)
        };

        self.ensure_capacity(length.saturating_add(1 + len_prefix_len))?;
        self.put(&[*header]);
        self.put(&len_prefix[..len_prefix_len]);

        let start = self.position;
        self.position += length;
        let region = &mut self.buffer[start..self.position];
        region.fill(0);
        Ok(region)
    }

    /// Appends an already-encoded stream verbatim.
    ///
    /// Nothing is checked: `bytes` must be a sequence of complete fields, otherwise the
    /// resulting stream is malformed. Normally `bytes` is another encoder's [`Encoder::data`].
    pub fn add_raw(&mut self, bytes: &[u8]) -> Result<WriteLen, EncodeError> {
        self.ensure_capacity(bytes.len())?;
        self.put(bytes);
        Ok(WriteLen(bytes.len()))
    }

    pub fn add_eof(&mut self) -> Result<WriteLen, EncodeError> {
        self.write_field(Header::new(FieldType::Eof, 0), &[])
    }

    /// Appends `value` through the matching `add_*` call. Vector bytes are copied.
    pub fn add_value(&mut self, value: &FieldValue<'_>) -> Result<WriteLen, EncodeError> {
        match *value {
            FieldValue::Int8(v) => self.add_int8(v),
            FieldValue::UInt8(v) => self.add_uint8(v),
            FieldValue::Int16(v) => self.add_int16(v),
            FieldValue::UInt16(v) => self.add_uint16(v),
            FieldValue::Int32(v) => self.add_int32(v),
            FieldValue::UInt32(v) => self.add_uint32(v),
            FieldValue::Int64(v) => self.add_int64(v),
            FieldValue::UInt64(v) => self.add_uint64(v),
            FieldValue::ULeb128(v) => self.add_uleb128(v),
            FieldValue::SLeb128(v) => self.add_sleb128(v),
            FieldValue::Float32(v) => self.add_float32(v),
            FieldValue::Float64(v) => self.add_float64(v),
            FieldValue::Short(v) => self.add_short(v),
            FieldValue::Vector(bytes) => {
                let start = self.position;
                self.add_vector(bytes.len())?.copy_from_slice(bytes);
                Ok(WriteLen(self.position - start))
            }
            FieldValue::Eof => self.add_eof(),
        }
    }

    fn add_fixed<const LEN: usize>(
        &mut self,
        field_type: FieldType,
        bytes: [u8; LEN],
    ) -> Result<WriteLen, EncodeError> {
        debug_assert_eq!(field_type.payload_layout(), PayloadLayout::Fixed(LEN));
        self.write_field(Header::new(field_type, 0), &bytes)
    }

    fn write_field(&mut self, header: Header, payload: &[u8]) -> Result<WriteLen, EncodeError> {
        let w_len = 1 + payload.len();
        self.ensure_capacity(w_len)?;
        self.put(&[*header]);
        self.put(payload);
        Ok(WriteLen(w_len))
    }

    fn ensure_capacity(&self, needed: usize) -> Result<(), EncodeError> {
        let available = self.remaining();
        if needed > available {
            tracing::debug!(needed, available, "SCTP encoder rejected write");
            return Err(EncodeError::CapacityExceeded { needed, available });
        }
        Ok(())
    }

    fn put(&mut self, bytes: &[u8]) {
        let end = self.position + bytes.len();
        self.buffer[self.position..end].copy_from_slice(bytes);
        self.position = end;
    }
}
