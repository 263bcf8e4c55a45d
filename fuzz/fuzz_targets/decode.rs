#![no_main]
use libfuzzer_sys::fuzz_target;

use binsniff::{Format, ParseOptions};

fuzz_target!(|data: &[u8]| {
    let strict = binsniff::decode(data);
    let permissive = binsniff::decode_with_opts(data, &ParseOptions::permissive());
    match strict {
        Ok(result) => assert_eq!(Some(result), permissive.ok()),
        Err(err) => {
            assert!(err.is_short_read());
            if data.len() >= 4 {
                assert_ne!(binsniff::peek_bytes(&[data[0], data[1], data[2], data[3]]), Format::Unknown);
            }
        }
    }
});
