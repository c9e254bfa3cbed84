#![no_main]

use libfuzzer_sys::fuzz_target;

use dynval_cbor::{encode_with_limits, EncodeLimits, Value};

fuzz_target!(|data: &[u8]| {
    let Ok(v) = serde_json::from_slice::<Value>(data) else {
        return;
    };
    let limits = EncodeLimits::default()
        .with_max_depth(64)
        .with_max_output_bytes(1 << 20);
    if let Ok(bytes) = encode_with_limits(&v, limits) {
        assert!(!bytes.is_empty());
    }
});
