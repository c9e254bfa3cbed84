#![cfg(feature = "serde")]

use dynval_cbor::{encode, Value};

#[test]
fn json_objects_keep_document_order_and_duplicates() {
    let v: Value = serde_json::from_str(r#"{"z":1,"a":2,"z":3}"#).unwrap();
    assert_eq!(
        v,
        Value::map(vec![
            ("z".into(), 1.into()),
            ("a".into(), 2.into()),
            ("z".into(), 3.into()),
        ])
    );
}

#[test]
fn json_scalars_map_to_values() {
    let v: Value = serde_json::from_str(r#"[null, true, -7, 0.25, "s", 4294967296]"#).unwrap();
    assert_eq!(
        v,
        Value::Array(vec![
            Value::Null,
            Value::Bool(true),
            Value::Number(-7.0),
            Value::Number(0.25),
            Value::text("s"),
            Value::Number(4_294_967_296.0),
        ])
    );
}

#[test]
fn parsed_json_encodes() {
    let v: Value = serde_json::from_str(r#"{"a":1}"#).unwrap();
    assert_eq!(encode(&v).unwrap(), [0xbf, 0x61, b'a', 0x01, 0xff]);

    let v: Value = serde_json::from_str(r#"[-1, 1.5, {}]"#).unwrap();
    assert_eq!(
        encode(&v).unwrap(),
        [0x83, 0x20, 0xfb, 0x3f, 0xf8, 0, 0, 0, 0, 0, 0, 0xbf, 0xff]
    );
}

#[test]
fn values_serialize_to_json() {
    let v = Value::map(vec![
        ("u".into(), Value::Undefined),
        ("p".into(), Value::Pointer(0x1000)),
        ("f".into(), Value::LightFunc(1)),
        ("n".into(), Value::Number(2.0)),
        ("b".into(), Value::buffer(vec![1u8, 2])),
    ]);
    assert_eq!(
        serde_json::to_string(&v).unwrap(),
        r#"{"u":null,"p":null,"f":{},"n":2.0,"b":[1,2]}"#
    );
}

#[test]
fn serialize_rejects_what_json_cannot_hold() {
    assert!(serde_json::to_string(&Value::Unsupported).is_err());
    assert!(serde_json::to_string(&Value::Text(vec![0xff, 0xfe])).is_err());
}
