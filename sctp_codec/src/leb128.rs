//! LEB128 variable-length integers.
//!
//! Each byte carries 7 bits of the value, least significant group first.
//! The high bit (0x80) is set on every byte except the last.

use crate::DecodeError;

/// `ceil(64 / 7)`
pub const MAX_LEB128_LEN: usize = 10;

const CONTINUATION: u8 = 0x80;
const LOW_BITS: u8 = 0x7F;
const SIGN_BIT: u8 = 0x40;

/// Returns the number of bytes written at the front of `buf`. Always at least 1.
pub fn encode_uleb128(mut value: u64, buf: &mut [u8; MAX_LEB128_LEN]) -> usize {
    let mut len = 0;
    loop {
        let mut byte = (value as u8) & LOW_BITS;
        value >>= 7;
        if value != 0 {
            byte |= CONTINUATION;
        }
        buf[len] = byte;
        len += 1;
        if value == 0 {
            return len;
        }
    }
}

/// Minimal-length signed encoding: stops as soon as the remaining bits are pure sign extension
/// of the last emitted byte's bit 6.
pub fn encode_sleb128(mut value: i64, buf: &mut [u8; MAX_LEB128_LEN]) -> usize {
    let mut len = 0;
    loop {
        let mut byte = (value as u8) & LOW_BITS;
        value >>= 7;
        let done = (value == 0 && byte & SIGN_BIT == 0) || (value == -1 && byte & SIGN_BIT != 0);
        if !done {
            byte |= CONTINUATION;
        }
        buf[len] = byte;
        len += 1;
        if done {
            return len;
        }
    }
}

/// Decodes starting at `*pos`. On success `*pos` is moved past the sequence;
/// on failure it is left where it was.
///
/// A tenth byte is accepted as long as it ends the sequence. Only its lowest bit lands in
/// the result; anything above bit 63 is dropped.
pub fn decode_uleb128(input: &[u8], pos: &mut usize) -> Result<u64, DecodeError> {
    let mut cursor = *pos;
    let mut result: u64 = 0;
    let mut shift: u32 = 0;
    loop {
        let byte = read_byte(input, &mut cursor)?;
        result |= u64::from(byte & LOW_BITS) << shift;
        if byte & CONTINUATION == 0 {
            break;
        }
        shift += 7;
        if shift >= 64 {
            return Err(DecodeError::Overflow { offset: cursor });
        }
    }
    *pos = cursor;
    Ok(result)
}

/// Same accumulation as [`decode_uleb128`], then sign-extends from bit 6 of the final byte.
pub fn decode_sleb128(input: &[u8], pos: &mut usize) -> Result<i64, DecodeError> {
    let mut cursor = *pos;
    let mut result: u64 = 0;
    let mut shift: u32 = 0;
    loop {
        let byte = read_byte(input, &mut cursor)?;
        result |= u64::from(byte & LOW_BITS) << shift;
        shift += 7;
        if byte & CONTINUATION == 0 {
            if shift < 64 && byte & SIGN_BIT != 0 {
                result |= u64::MAX << shift;
            }
            break;
        }
        if shift >= 64 {
            return Err(DecodeError::Overflow { offset: cursor });
        }
    }
    *pos = cursor;
    Ok(result as i64)
}

fn read_byte(input: &[u8], cursor: &mut usize) -> Result<u8, DecodeError> {
    match input.get(*cursor) {
        None => Err(DecodeError::EndOfStream {
            offset: *cursor,
            needed: 1,
        }),
        Some(&byte) => {
            *cursor += 1;
            Ok(byte)
        }
    }
}
