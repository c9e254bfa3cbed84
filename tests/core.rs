use dynval_cbor::{decode, encode, CborError, Encoder, ErrorCode, ErrorKind, Value};

#[test]
fn decode_is_unimplemented() {
    for input in [&[][..], &[0xf6][..], &[0xbf, 0x61, b'a', 0x01, 0xff][..]] {
        let err = decode(input).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unimplemented);
        assert_eq!(err.kind(), ErrorKind::Unimplemented);
    }
    let err = decode(&[0x00]).unwrap_err();
    assert_eq!(err.to_string(), "cbor decode failed: unimplemented");
}

#[test]
fn unsupported_kind_is_invalid_input() {
    let err = encode(&Value::Unsupported).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidType);
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(err.offset, 0);
    assert_eq!(err.to_string(), "cbor encode failed at 0: invalid type");
}

#[test]
fn nested_unsupported_aborts_whole_encode() {
    let v = Value::map(vec![
        ("ok".into(), Value::Array(vec![1.into(), 2.into()])),
        ("bad".into(), Value::Unsupported),
    ]);
    let err = encode(&v).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidType);
    // bf 62 'o' 'k' 82 01 02 63 'b' 'a' 'd'
    assert_eq!(err.offset, 11);
}

#[test]
fn encoder_is_reusable_after_failure() {
    let mut enc = Encoder::new();
    enc.value(&Value::from("first")).unwrap();
    let before = enc.as_bytes().to_vec();

    let bad = Value::Array(vec![Value::Null; 3].into_iter().chain([Value::Unsupported]).collect());
    assert!(enc.value(&bad).is_err());
    assert_eq!(enc.as_bytes(), &before[..]);

    enc.value(&Value::Bool(true)).unwrap();
    let mut expected = before;
    expected.push(0xf5);
    assert_eq!(enc.into_vec(), expected);
}

#[cfg(feature = "std")]
#[test]
fn error_implements_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<CborError>();
}

#[test]
fn encoder_and_values_are_send() {
    fn assert_send<T: Send>() {}
    assert_send::<Encoder>();
    assert_send::<Value>();
}

#[test]
fn concurrent_encodes_are_independent() {
    let handles: Vec<_> = (0..4)
        .map(|t| {
            std::thread::spawn(move || {
                let v: Value = (0..1_000).map(|i| Value::from(i * t)).collect();
                encode(&v).unwrap()
            })
        })
        .collect();
    for (t, h) in handles.into_iter().enumerate() {
        let bytes = h.join().unwrap();
        let v: Value = (0..1_000).map(|i| Value::from(i * t as i32)).collect();
        assert_eq!(bytes, encode(&v).unwrap());
    }
}

#[test]
fn type_names_are_stable() {
    assert_eq!(Value::Undefined.type_name(), "undefined");
    assert_eq!(Value::Pointer(1).type_name(), "pointer");
    assert_eq!(Value::LightFunc(1).type_name(), "lightfunc");
    assert_eq!(Value::Map(vec![]).type_name(), "map");
}
