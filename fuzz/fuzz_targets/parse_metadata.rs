#![no_main]
use libfuzzer_sys::fuzz_target;

use binsniff::Metadata;

fuzz_target!(|data: &[u8]| {
    let mut metadata = Metadata::new();
    if let Ok(format) = binsniff::parse(data, &mut metadata) {
        if format == binsniff::Format::Unknown {
            assert!(metadata.is_empty());
        }
    }
    for name in metadata.names() {
        assert_eq!(metadata.get_all(name).len(), 1);
    }
});
