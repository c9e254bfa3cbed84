use std::thread;

use dynval_cbor::{encode, encode_with_limits, EncodeLimits, ErrorCode, Value, DEFAULT_MAX_DEPTH};

// Dropping a deeply nested `Value` recurses; give those tests room.
fn with_big_stack(f: impl FnOnce() + Send + 'static) {
    thread::Builder::new()
        .stack_size(256 << 20)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap();
}

fn nested_arrays(levels: usize) -> Value {
    let mut v = Value::Array(vec![]);
    for _ in 1..levels {
        v = Value::Array(vec![v]);
    }
    v
}

fn nested_maps(levels: usize) -> Value {
    let mut v = Value::Map(vec![]);
    for _ in 1..levels {
        v = Value::map(vec![("k".into(), v)]);
    }
    v
}

#[test]
fn deep_arrays_fail_with_resource_exhaustion_by_default() {
    with_big_stack(|| {
        let v = nested_arrays(10_000);
        let err = encode(&v).unwrap_err();
        assert_eq!(err.code, ErrorCode::DepthLimitExceeded);
        assert!(err.is_resource_exhausted());
        assert_eq!(err.offset, DEFAULT_MAX_DEPTH);
    });
}

#[test]
fn deep_arrays_succeed_within_configured_depth() {
    with_big_stack(|| {
        let v = nested_arrays(10_000);
        let limits = EncodeLimits::default().with_max_depth(10_000);
        let bytes = encode_with_limits(&v, limits).unwrap();

        assert_eq!(bytes.len(), 10_000);
        assert!(bytes[..9_999].iter().all(|&b| b == 0x81));
        assert_eq!(bytes[9_999], 0x80);

        let limits = EncodeLimits::default().with_max_depth(9_999);
        let err = encode_with_limits(&v, limits).unwrap_err();
        assert_eq!(err.code, ErrorCode::DepthLimitExceeded);
    });
}

#[test]
fn deep_maps_nest_correctly() {
    with_big_stack(|| {
        let levels = 2_000;
        let v = nested_maps(levels);
        let limits = EncodeLimits::default().with_max_depth(levels);
        let bytes = encode_with_limits(&v, limits).unwrap();

        let mut expected = Vec::new();
        for _ in 1..levels {
            expected.extend_from_slice(&[0xbf, 0x61, b'k']);
        }
        expected.push(0xbf);
        expected.extend(std::iter::repeat(0xff).take(levels));
        assert_eq!(bytes, expected);
    });
}

#[test]
fn depth_limit_applies_to_map_keys() {
    let v = Value::map(vec![(Value::Array(vec![Value::Array(vec![])]), Value::Null)]);
    let limits = EncodeLimits::default().with_max_depth(2);
    let err = encode_with_limits(&v, limits).unwrap_err();
    assert_eq!(err.code, ErrorCode::DepthLimitExceeded);

    let limits = EncodeLimits::default().with_max_depth(3);
    assert_eq!(
        encode_with_limits(&v, limits).unwrap(),
        [0xbf, 0x81, 0x80, 0xf6, 0xff]
    );
}

#[test]
fn siblings_do_not_accumulate_depth() {
    let wide = Value::Array(vec![Value::Array(vec![Value::Array(vec![])]); 500]);
    let limits = EncodeLimits::default().with_max_depth(3);
    let bytes = encode_with_limits(&wide, limits).unwrap();
    assert_eq!(&bytes[..3], &[0x99, 0x01, 0xf4]);
    assert_eq!(bytes.len(), 3 + 500 * 2);
}
