use anyhow::Result;
use sctp_codec::{Decoder, EncodeError, Encoder};
use std::io::Write;

pub const SAMPLE_VECTOR: &[u8] = b"hello sctp";

/// One field of every kind, in type-code order, then EOF.
pub fn encode_sample(capacity: usize) -> Result<Encoder, EncodeError> {
    let mut enc = Encoder::new(capacity);
    enc.add_int8(-120)?;
    enc.add_uint8(200)?;
    enc.add_int16(-30_000)?;
    enc.add_uint16(65000)?;
    enc.add_int32(-2_000_000_000)?;
    enc.add_uint32(0xDEADBEEF)?;
    enc.add_int64(i64::MIN)?;
    enc.add_uint64(9_000_000_000_000_000_000)?;
    enc.add_uleb128(1_234_567_890_123)?;
    enc.add_sleb128(-9_876_543_210_987)?;
    enc.add_float32(123.456)?;
    enc.add_float64(-0.5)?;
    enc.add_short(10)?;
    enc.add_vector(SAMPLE_VECTOR.len())?
        .copy_from_slice(SAMPLE_VECTOR);
    enc.add_eof()?;
    Ok(enc)
}

/// Writes one line per field, EOF included, and returns how many fields were read.
///
/// Lines already written stay written when a malformed field is hit.
pub fn dump(bytes: &[u8], w: &mut impl Write) -> Result<usize> {
    let mut count = 0;
    Decoder::new(bytes).run(|value| -> Result<()> {
        writeln!(w, "{count:>4}  {value}")?;
        count += 1;
        Ok(())
    })?;
    Ok(count)
}
