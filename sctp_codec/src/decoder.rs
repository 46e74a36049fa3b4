use crate::leb128;
use crate::wire::{FieldType, Header, VECTOR_LARGE_FLAG};
use crate::{DecodeError, FieldValue, UnknownFieldType};

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum DecoderState {
    /// More fields may follow.
    Ready,
    /// An EOF field was read, or the input ran out on a field boundary.
    Done,
    /// A field was malformed. The rest of the input is not trusted.
    Failed(DecodeError),
}

/// Field-at-a-time reader over a borrowed byte slice.
///
/// The decoder never copies: vector payloads are handed out as subslices of the input, valid
/// for as long as the input is.
pub struct Decoder<'a> {
    input: &'a [u8],
    position: usize,
    state: DecoderState,
    last: Option<FieldValue<'a>>,
}

impl<'a> From<&'a [u8]> for Decoder<'a> {
    fn from(input: &'a [u8]) -> Self {
        Self::new(input)
    }
}

impl<'a> Decoder<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            position: 0,
            state: DecoderState::Ready,
            last: None,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }
    pub fn size(&self) -> usize {
        self.input.len()
    }
    pub fn remaining(&self) -> usize {
        self.input.len() - self.position
    }
    pub fn state(&self) -> &DecoderState {
        &self.state
    }
    pub fn is_done(&self) -> bool {
        self.state == DecoderState::Done
    }

    pub fn last_value(&self) -> Option<FieldValue<'a>> {
        self.last
    }
    pub fn last_type(&self) -> Option<FieldType> {
        self.last.map(|value| value.field_type())
    }
    pub fn last_size(&self) -> usize {
        self.last.map_or(0, |value| value.size())
    }

    /// Parses exactly one field.
    ///
    /// Returns [`FieldValue::Eof`] both for an explicit EOF field and for a cleanly exhausted
    /// input, and keeps returning it afterwards. After an error, every later call returns
    /// the same error without reading further.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<FieldValue<'a>, DecodeError> {
        match &self.state {
            DecoderState::Ready => {}
            DecoderState::Done => return Ok(FieldValue::Eof),
            DecoderState::Failed(err) => return Err(err.clone()),
        }

        match self.read_field() {
            Ok(value) => {
                tracing::trace!(position = self.position, field = %value, "SCTP field decoded");
                if value.is_eof() {
                    self.state = DecoderState::Done;
                }
                self.last = Some(value);
                Ok(value)
            }
            Err(err) => {
                tracing::debug!(%err, "SCTP decoder failed");
                self.state = DecoderState::Failed(err.clone());
                self.last = None;
                Err(err)
            }
        }
    }

    /// Pushes every field, the terminating EOF included, to `handler`.
    ///
    /// Stops at the first decode error or the first handler error.
    pub fn run<F, E>(&mut self, mut handler: F) -> Result<(), E>
    where
        F: FnMut(FieldValue<'a>) -> Result<(), E>,
        E: From<DecodeError>,
    {
        loop {
            let value = self.next()?;
            handler(value)?;
            if value.is_eof() {
                return Ok(());
            }
        }
    }

    /// Iterates over the fields preceding EOF. An error is yielded once, then iteration ends.
    pub fn fields(&mut self) -> Fields<'_, 'a> {
        Fields {
            decoder: self,
            finished: false,
        }
    }

    /// Reads one field at `self.position`, which only moves once the whole field was read.
    fn read_field(&mut self) -> Result<FieldValue<'a>, DecodeError> {
        let mut cursor = self.position;
        if cursor >= self.input.len() {
            return Ok(FieldValue::Eof);
        }

        let header_offset = cursor;
        let header = Header::from(self.take_array::<1>(&mut cursor)?[0]);
        let field_type =
            FieldType::try_from(header).map_err(|UnknownFieldType(code)| {
                DecodeError::UnknownType {
                    code,
                    offset: header_offset,
                }
            })?;

        let value = match field_type {
            FieldType::Int8 => FieldValue::Int8(i8::from_le_bytes(self.take_array(&mut cursor)?)),
            FieldType::UInt8 => {
                FieldValue::UInt8(u8::from_le_bytes(self.take_array(&mut cursor)?))
            }
            FieldType::Int16 => {
                FieldValue::Int16(i16::from_le_bytes(self.take_array(&mut cursor)?))
            }
            FieldType::UInt16 => {
                FieldValue::UInt16(u16::from_le_bytes(self.take_array(&mut cursor)?))
            }
            FieldType::Int32 => {
                FieldValue::Int32(i32::from_le_bytes(self.take_array(&mut cursor)?))
            }
            FieldType::UInt32 => {
                FieldValue::UInt32(u32::from_le_bytes(self.take_array(&mut cursor)?))
            }
            FieldType::Int64 => {
                FieldValue::Int64(i64::from_le_bytes(self.take_array(&mut cursor)?))
            }
            FieldType::UInt64 => {
                FieldValue::UInt64(u64::from_le_bytes(self.take_array(&mut cursor)?))
            }
            FieldType::Float32 => {
                FieldValue::Float32(f32::from_le_bytes(self.take_array(&mut cursor)?))
            }
            FieldType::Float64 => {
                FieldValue::Float64(f64::from_le_bytes(self.take_array(&mut cursor)?))
            }
            FieldType::ULeb128 => {
                FieldValue::ULeb128(leb128::decode_uleb128(self.input, &mut cursor)?)
            }
            FieldType::SLeb128 => {
                FieldValue::SLeb128(leb128::decode_sleb128(self.input, &mut cursor)?)
            }
            FieldType::Short => FieldValue::Short(header.meta()),
            FieldType::Vector => {
                let len = if header.meta() == VECTOR_LARGE_FLAG {
                    let len = leb128::decode_uleb128(self.input, &mut cursor)?;
                    // Larger than the address space can only mean the input is short.
                    usize::try_from(len).unwrap_or(usize::MAX)
                } else {
                    header.meta() as usize
                };
                FieldValue::Vector(self.take(&mut cursor, len)?)
            }
            FieldType::Eof => FieldValue::Eof,
        };

        self.position = cursor;
        Ok(value)
    }

    fn take(&self, cursor: &mut usize, len: usize) -> Result<&'a [u8], DecodeError> {
        let input: &'a [u8] = self.input;
        let available = input.len() - *cursor;
        if len > available {
            return Err(DecodeError::EndOfStream {
                offset: *cursor,
                needed: len - available,
            });
        }
        let bytes = &input[*cursor..*cursor + len];
        *cursor += len;
        Ok(bytes)
    }

    fn take_array<const LEN: usize>(&self, cursor: &mut usize) -> Result<[u8; LEN], DecodeError> {
        let mut buf = [0u8; LEN];
        buf.copy_from_slice(self.take(cursor, LEN)?);
        Ok(buf)
    }
}

pub struct Fields<'d, 'a> {
    decoder: &'d mut Decoder<'a>,
    finished: bool,
}

impl<'d, 'a> Iterator for Fields<'d, 'a> {
    type Item = Result<FieldValue<'a>, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.decoder.next() {
            Ok(FieldValue::Eof) => {
                self.finished = true;
                None
            }
            Ok(value) => Some(Ok(value)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}
