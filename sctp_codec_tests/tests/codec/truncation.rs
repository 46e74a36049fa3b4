use anyhow::Result;
use sctp_codec::{DecodeError, Decoder, DecoderState, FieldValue};
use sctp_codec_tests::{encode_fields, extreme_values, wire_len};

/// Cuts each multi-byte field at every interior offset and checks that the decoder reports
/// `EndOfStream` for that field, after yielding every complete field before it.
#[test]
fn every_interior_cut_fails() -> Result<()> {
    let values = extreme_values();
    let enc = encode_fields(&values, true)?;
    let bytes = enc.data();

    let mut field_start = 0;
    for (field_i, value) in values.iter().enumerate() {
        let field_len = wire_len(value)?;

        for cut in field_start + 1..field_start + field_len {
            let mut dec = Decoder::new(&bytes[..cut]);
            for expected in &values[..field_i] {
                assert!(dec.next()?.bit_eq(expected));
            }

            let err = dec.next().expect_err("truncated field must not decode");
            match err {
                DecodeError::EndOfStream { offset, needed } => {
                    assert!(offset <= cut, "{value:?} cut at {cut}");
                    assert!(needed > 0);
                }
                other => panic!("{value:?} cut at {cut}: {other:?}"),
            }
            assert!(matches!(dec.state(), DecoderState::Failed(_)));
            assert_eq!(dec.last_value(), None);
            assert_eq!(dec.position(), field_start);
        }

        field_start += field_len;
    }
    Ok(())
}

#[test]
fn cut_on_field_boundary_is_clean() -> Result<()> {
    let values = [FieldValue::UInt16(7), FieldValue::Short(3)];
    let enc = encode_fields(&values, false)?;
    let bytes = enc.data();

    let mut dec = Decoder::new(&bytes[..3]);
    assert_eq!(dec.next()?, FieldValue::UInt16(7));
    assert_eq!(dec.next()?, FieldValue::Eof);
    assert!(dec.is_done());
    Ok(())
}

#[test]
fn header_only_fields_cannot_be_truncated() -> Result<()> {
    for value in [FieldValue::Short(15), FieldValue::Vector(&[]), FieldValue::Eof] {
        let enc = encode_fields(&[value], false)?;
        assert_eq!(enc.size(), 1);
        assert_eq!(Decoder::new(enc.data()).next()?, value);
    }
    Ok(())
}
