use anyhow::Result;
use itertools::Itertools;
use rand::seq::SliceRandom;
use sctp_codec::{Decoder, FieldValue};
use sctp_codec_tests::{
    assert_bit_eq, decode_fields, encode_fields, extreme_values, random_field, transcode,
    SampleField,
};

fn verify(values: &[FieldValue<'_>]) -> Result<()> {
    let enc = encode_fields(values, true)?;

    let decoded = decode_fields(enc.data())?;
    let (last, fields) = decoded.split_last().expect("run always reports EOF");
    assert_eq!(*last, FieldValue::Eof);
    assert_bit_eq(values, fields);

    assert_eq!(transcode(enc.data())?, enc.data());

    Ok(())
}

#[test]
fn extremes() -> Result<()> {
    let values = extreme_values();
    for value in values.iter() {
        verify(&[*value])?;
    }
    verify(&values)?;
    Ok(())
}

fn gen_int8() -> FieldValue<'static> {
    FieldValue::Int8(-120)
}
fn gen_uint16() -> FieldValue<'static> {
    FieldValue::UInt16(65000)
}
fn gen_int32() -> FieldValue<'static> {
    FieldValue::Int32(-2_000_000_000)
}
fn gen_uint64() -> FieldValue<'static> {
    FieldValue::UInt64(9_000_000_000_000_000_000)
}
fn gen_uleb128() -> FieldValue<'static> {
    FieldValue::ULeb128(1_234_567_890_123)
}
fn gen_sleb128() -> FieldValue<'static> {
    FieldValue::SLeb128(-9_876_543_210_987)
}
fn gen_float32() -> FieldValue<'static> {
    FieldValue::Float32(123.456)
}
fn gen_short() -> FieldValue<'static> {
    FieldValue::Short(10)
}
fn gen_vector() -> FieldValue<'static> {
    FieldValue::Vector(b"hello sctp")
}

#[test]
fn every_combination_in_any_order() -> Result<()> {
    let mut rand_rng = rand::thread_rng();

    let gen_fns = [
        gen_int8,
        gen_uint16,
        gen_int32,
        gen_uint64,
        gen_uleb128,
        gen_sleb128,
        gen_float32,
        gen_short,
        gen_vector,
    ];

    for mut gen_fns in gen_fns.iter().powerset() {
        let values = gen_fns.iter().map(|gen| gen()).collect::<Vec<_>>();
        verify(&values)?;

        gen_fns.shuffle(&mut rand_rng);
        let values = gen_fns.iter().map(|gen| gen()).collect::<Vec<_>>();
        verify(&values)?;
    }

    Ok(())
}

#[test]
fn random_streams() -> Result<()> {
    let mut rand_rng = rand::thread_rng();

    for len in [0, 1, 2, 17, 256] {
        let samples = (0..len)
            .map(|_| random_field(&mut rand_rng))
            .collect::<Vec<SampleField>>();
        let values = samples.iter().map(|s| s.as_value()).collect::<Vec<_>>();
        verify(&values)?;
    }

    Ok(())
}

#[test]
fn pull_and_push_agree() -> Result<()> {
    let values = extreme_values();
    let enc = encode_fields(&values, false)?;

    let mut pulled = vec![];
    let mut dec = Decoder::new(enc.data());
    loop {
        let value = dec.next()?;
        assert_eq!(dec.last_size(), value.size());
        assert_eq!(dec.last_type(), Some(value.field_type()));
        pulled.push(value);
        if value.is_eof() {
            break;
        }
    }

    assert_bit_eq(&decode_fields(enc.data())?, &pulled);
    Ok(())
}
