use anyhow::Result;
use sctp_codec::wire::VECTOR_LARGE_FLAG;
use sctp_codec::{Decoder, Encoder, FieldValue};

fn encode_vector(len: usize) -> Result<Encoder> {
    let mut enc = Encoder::new(len + 16);
    let region = enc.add_vector(len)?;
    for (i, byte) in region.iter_mut().enumerate() {
        *byte = i as u8;
    }
    Ok(enc)
}

#[test]
fn inline_up_to_fourteen() -> Result<()> {
    for len in 0..15 {
        let enc = encode_vector(len)?;
        assert_eq!(enc.size(), 1 + len);
        assert_eq!(enc.data()[0] >> 4, len as u8);

        let mut dec = Decoder::new(enc.data());
        let value = dec.next()?;
        assert_eq!(value, FieldValue::Vector(&enc.data()[1..]));
        assert_eq!(dec.last_size(), len);
    }
    Ok(())
}

#[test]
fn fifteen_uses_length_prefix() -> Result<()> {
    let enc = encode_vector(15)?;
    assert_eq!(enc.data()[0], 0x0D | (VECTOR_LARGE_FLAG << 4));
    assert_eq!(enc.data()[1], 15);
    assert_eq!(enc.size(), 2 + 15);

    let mut dec = Decoder::new(enc.data());
    match dec.next()? {
        FieldValue::Vector(bytes) => {
            assert_eq!(bytes.len(), 15);
            assert_eq!(bytes, &enc.data()[2..]);
        }
        other => panic!("{other:?}"),
    }
    Ok(())
}

#[test]
fn multi_byte_length_prefix() -> Result<()> {
    for len in [127, 128, 16_384, 100_000] {
        let enc = encode_vector(len)?;
        let prefix_len = enc.size() - 1 - len;
        assert_eq!(prefix_len, if len < 128 { 1 } else if len < 16_384 { 2 } else { 3 });

        let mut dec = Decoder::new(enc.data());
        assert_eq!(dec.next()?.size(), len);
        assert_eq!(dec.next()?, FieldValue::Eof);
    }
    Ok(())
}

#[test]
fn empty_vector() -> Result<()> {
    let mut enc = Encoder::new(2);
    assert!(enc.add_vector(0)?.is_empty());
    enc.add_eof()?;
    assert_eq!(enc.data(), &[0x0D, 0x0F]);

    let mut dec = Decoder::new(enc.data());
    assert_eq!(dec.next()?, FieldValue::Vector(&[]));
    assert_eq!(dec.last_size(), 0);
    assert_eq!(dec.next()?, FieldValue::Eof);
    Ok(())
}

#[test]
fn views_borrow_the_input() -> Result<()> {
    let enc = encode_vector(20)?;
    let bytes = enc.data();

    let view = Decoder::new(bytes).next()?;
    match view {
        FieldValue::Vector(payload) => {
            assert_eq!(payload.as_ptr(), bytes[2..].as_ptr());
        }
        other => panic!("{other:?}"),
    }
    Ok(())
}
