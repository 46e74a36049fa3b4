use anyhow::Result;
use itertools::Itertools;
use sctp_codec::{Encoder, FieldValue};
use sctp_codec_tests::{decode_fields, encode_fields, extreme_values};

#[test]
fn raw_append_is_byte_identical() -> Result<()> {
    let a = FieldValue::UInt32(0xDEADBEEF);
    let b = FieldValue::Vector(b"spliced payload!");
    let c = FieldValue::SLeb128(-300);

    let direct = encode_fields(&[a, b, c], true)?;

    let inner = encode_fields(&[b, c], false)?;
    let mut outer = Encoder::new(direct.size());
    outer.add_value(&a)?;
    assert_eq!(*outer.add_raw(inner.data())?, inner.size());
    outer.add_eof()?;

    assert_eq!(direct.data(), outer.data());
    Ok(())
}

#[test]
fn any_split_point_composes() -> Result<()> {
    let values = extreme_values();
    let direct = encode_fields(&values, true)?;

    for (lo, hi) in (0..=values.len()).tuple_combinations() {
        let head = encode_fields(&values[..lo], false)?;
        let middle = encode_fields(&values[lo..hi], false)?;
        let tail = encode_fields(&values[hi..], true)?;

        let mut spliced = Encoder::new(direct.size());
        spliced.add_raw(head.data())?;
        spliced.add_raw(middle.data())?;
        spliced.add_raw(tail.data())?;

        assert_eq!(direct.data(), spliced.data(), "{lo} {hi}");
    }
    Ok(())
}

#[test]
fn spliced_stream_decodes_flat() -> Result<()> {
    let inner = encode_fields(&[FieldValue::Short(1), FieldValue::Short(2)], false)?;

    let mut outer = Encoder::new(16);
    outer.add_int8(-1)?;
    outer.add_raw(inner.data())?;
    outer.add_int8(1)?;

    assert_eq!(
        decode_fields(outer.data())?,
        vec![
            FieldValue::Int8(-1),
            FieldValue::Short(1),
            FieldValue::Short(2),
            FieldValue::Int8(1),
            FieldValue::Eof,
        ]
    );
    Ok(())
}
