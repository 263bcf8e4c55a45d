#[macro_use]
extern crate afl;

fn main() {
    fuzz!(|data: &[u8]| {
        if let Ok(result) = binsniff::decode(data) {
            let mut metadata = binsniff::Metadata::new();
            result.write_to(&mut metadata);
            if result.format == binsniff::Format::Unknown {
                assert!(metadata.is_empty());
            }
        }
    });
}
