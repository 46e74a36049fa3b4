//! Field generators and encode/decode helpers shared by the integration tests.

use rand::Rng;
use sctp_codec::{Decoder, Encoder, FieldValue, SctpResult};

/// An owned field. Lets generated vector payloads live in the test, not in a decoder input.
#[derive(Clone, Debug)]
pub enum SampleField {
    Scalar(FieldValue<'static>),
    Vector(Vec<u8>),
}

impl SampleField {
    pub fn as_value(&self) -> FieldValue<'_> {
        match self {
            Self::Scalar(value) => *value,
            Self::Vector(bytes) => FieldValue::Vector(bytes),
        }
    }
}

/// The number of bytes `value` occupies on the wire.
pub fn wire_len(value: &FieldValue<'_>) -> SctpResult<usize> {
    let mut enc = Encoder::new(1 + 10 + value.size());
    enc.add_value(value)?;
    Ok(enc.size())
}

/// Encodes `values` into an encoder sized exactly for them.
pub fn encode_fields(values: &[FieldValue<'_>], with_eof: bool) -> SctpResult<Encoder> {
    let mut capacity = usize::from(with_eof);
    for value in values {
        capacity += wire_len(value)?;
    }

    let mut enc = Encoder::new(capacity);
    for value in values {
        enc.add_value(value)?;
    }
    if with_eof {
        enc.add_eof()?;
    }
    assert_eq!(enc.remaining(), 0);
    Ok(enc)
}

/// Every field in `bytes`, the terminating EOF included.
pub fn decode_fields(bytes: &[u8]) -> SctpResult<Vec<FieldValue<'_>>> {
    let mut values = vec![];
    Decoder::new(bytes).run(|value| -> SctpResult<()> {
        values.push(value);
        Ok(())
    })?;
    Ok(values)
}

/// Decodes `bytes` and re-encodes every field, EOF included.
pub fn transcode(bytes: &[u8]) -> SctpResult<Vec<u8>> {
    let mut enc = Encoder::new(bytes.len() + 1);
    let mut dec = Decoder::new(bytes);
    loop {
        let value = dec.next()?;
        enc.add_value(&value)?;
        if value.is_eof() {
            return Ok(enc.into_bytes());
        }
    }
}

pub fn assert_bit_eq(expected: &[FieldValue<'_>], actual: &[FieldValue<'_>]) {
    assert_eq!(expected.len(), actual.len(), "\n{expected:?}\n{actual:?}\n");
    for (exp, act) in expected.iter().zip(actual) {
        assert!(exp.bit_eq(act), "\n{exp:?}\n{act:?}\n");
    }
}

pub fn extreme_values() -> Vec<FieldValue<'static>> {
    vec![
        FieldValue::Int8(i8::MIN),
        FieldValue::Int8(i8::MAX),
        FieldValue::UInt8(0),
        FieldValue::UInt8(u8::MAX),
        FieldValue::Int16(i16::MIN),
        FieldValue::Int16(i16::MAX),
        FieldValue::UInt16(u16::MAX),
        FieldValue::Int32(i32::MIN),
        FieldValue::Int32(i32::MAX),
        FieldValue::UInt32(u32::MAX),
        FieldValue::Int64(i64::MIN),
        FieldValue::Int64(i64::MAX),
        FieldValue::UInt64(0),
        FieldValue::UInt64(u64::MAX),
        FieldValue::ULeb128(0),
        FieldValue::ULeb128(u64::MAX),
        FieldValue::SLeb128(i64::MIN),
        FieldValue::SLeb128(i64::MAX),
        FieldValue::Float32(0.0),
        FieldValue::Float32(-0.0),
        FieldValue::Float32(f32::from_bits(0x7FC0_0000)),
        FieldValue::Float32(f32::from_bits(0xFF80_0001)),
        FieldValue::Float32(f32::MIN),
        FieldValue::Float32(f32::MAX),
        FieldValue::Float32(f32::MIN_POSITIVE),
        FieldValue::Float32(f32::NEG_INFINITY),
        FieldValue::Float64(0.0),
        FieldValue::Float64(-0.0),
        FieldValue::Float64(f64::from_bits(0x7FF8_0000_0000_0001)),
        FieldValue::Float64(f64::MIN),
        FieldValue::Float64(f64::MAX),
        FieldValue::Float64(f64::MIN_POSITIVE),
        FieldValue::Float64(f64::INFINITY),
        FieldValue::Short(0),
        FieldValue::Short(15),
        FieldValue::Vector(b""),
        FieldValue::Vector(b"fourteen bytes"),
        FieldValue::Vector(b"fifteen bytes!!"),
    ]
}

/// Any field type but EOF, with a random value.
pub fn random_field(rng: &mut impl Rng) -> SampleField {
    let value = match rng.gen_range(0..14) {
        0 => FieldValue::Int8(rng.gen()),
        1 => FieldValue::UInt8(rng.gen()),
        2 => FieldValue::Int16(rng.gen()),
        3 => FieldValue::UInt16(rng.gen()),
        4 => FieldValue::Int32(rng.gen()),
        5 => FieldValue::UInt32(rng.gen()),
        6 => FieldValue::Int64(rng.gen()),
        7 => FieldValue::UInt64(rng.gen()),
        8 => FieldValue::ULeb128(rng.gen::<u64>() >> rng.gen_range(0..64)),
        9 => FieldValue::SLeb128(rng.gen::<i64>() >> rng.gen_range(0..64)),
        10 => FieldValue::Float32(f32::from_bits(rng.gen())),
        11 => FieldValue::Float64(f64::from_bits(rng.gen())),
        12 => FieldValue::Short(rng.gen_range(0..=15)),
        _ => {
            let len = rng.gen_range(0..300);
            let bytes = (0..len).map(|_| rng.gen()).collect();
            return SampleField::Vector(bytes);
        }
    };
    SampleField::Scalar(value)
}
