//! # libbinsniff
//!
//! Sniffs the container format of an executable or object binary from its first 4 bytes, and
//! decodes the fixed header of that format into metadata: architecture, word size, byte order,
//! object kind, platform and, for PE, the link time.
//!
//! Supported are:
//!
//! * PE (32 bit and 64 bit), and old style DOS `MZ` executables
//! * ELF (32 bit and 64 bit, either byte order)
//! * thin Mach-o (32 bit and 64 bit, either byte order)
//!
//! Input is any [`std::io::Read`], consumed strictly forward. Only the header is read - at most a
//! few hundred bytes for a PE, 20 for ELF, 16 for Mach-o - and the rest of the stream is left to
//! the caller.
//!
//! # Example
//!
//! ```rust
//! use binsniff::{Format, Machine, Bits};
//!
//! let elf: &[u8] = &[
//!     0x7f, b'E', b'L', b'F', 2, 1, 1, 3, 0, 0, 0, 0, 0, 0, 0, 0,
//!     2, 0, 0x3e, 0,
//! ];
//! let result = binsniff::decode(elf).unwrap();
//! assert_eq!(result.format, Format::Elf);
//! assert_eq!(result.architecture.machine, Some(Machine::X86_64));
//! assert_eq!(result.architecture.bits, Some(Bits::B64));
//! assert_eq!(result.content_type, Some("application/x-executable"));
//! ```
//!
//! Something that is not a binary at all is not an error:
//!
//! ```rust
//! let result = binsniff::decode(&b"%PDF-1.7"[..]).unwrap();
//! assert_eq!(result.format, binsniff::Format::Unknown);
//! assert_eq!(result.content_type, None);
//! ```
//!
//! # Feature Usage
//!
//! Each format decoder sits behind a feature: `elf`, `mach` and `pe`, all on by default. With a
//! decoder compiled out its format is still recognized, but nothing past the magic is decoded.

#[macro_use]
extern crate quick_error;

use std::io::Read;

use log::debug;

pub mod cursor;
pub mod error;
pub mod metadata;
pub mod object;
pub mod options;

#[cfg(feature = "elf")]
pub mod elf;

#[cfg(feature = "mach")]
pub mod mach;

#[cfg(feature = "pe")]
pub mod pe;

pub use crate::cursor::ByteCursor;
pub use crate::metadata::{Metadata, MetadataSink};
pub use crate::object::{
    Architecture, Bits, DecodeResult, Endianness, Format, Machine, ObjectKind, Platform, RawHeader,
};
pub use crate::options::{ParseMode, ParseOptions};

use crate::options::Permissive;

/// Every media type a decode can produce
pub const SUPPORTED_TYPES: &[&str] = &[
    "application/x-msdownload",
    "application/x-elf",
    "application/x-object",
    "application/x-executable",
    "application/x-sharedlib",
    "application/x-coredump",
    "application/x-mach-o",
    "application/x-mach-o-object",
    "application/x-mach-o-executable",
    "application/x-mach-o-fvmlib",
    "application/x-mach-o-core",
    "application/x-mach-o-preload",
    "application/x-mach-o-dylib",
    "application/x-mach-o-dylinker",
    "application/x-mach-o-bundle",
    "application/x-mach-o-dylib-stub",
    "application/x-mach-o-dsym",
    "application/x-mach-o-kext-bundle",
];

/// Size of the magic [`peek_bytes`] looks at
pub const SIZEOF_MAGIC: usize = 4;

/// Peeks at `bytes`, and returns the binary format they introduce, if any
pub fn peek_bytes(bytes: &[u8; SIZEOF_MAGIC]) -> Format {
    match *bytes {
        [b'M', b'Z', _, _] => Format::PE,
        [0x7f, b'E', b'L', b'F'] => Format::Elf,
        [0xcf | 0xce, 0xfa, 0xed, 0xfe] => Format::Mach,
        [0xfe, 0xed, 0xfa, 0xcf | 0xce] => Format::Mach,
        _ => Format::Unknown,
    }
}

/// Reads 4 bytes from `reader` and peeks at them. The stream is left right after the magic
pub fn peek<R: Read>(reader: R) -> error::Result<Format> {
    let mut cursor = ByteCursor::new(reader);
    Ok(peek_bytes(&cursor.read_array()?))
}

/// Sniff and decode the binary at the front of `reader`
pub fn decode<R: Read>(reader: R) -> error::Result<DecodeResult> {
    decode_with_opts(reader, &ParseOptions::default())
}

/// Sniff and decode the binary at the front of `reader`, with the given options
pub fn decode_with_opts<R: Read>(reader: R, opts: &ParseOptions) -> error::Result<DecodeResult> {
    let mut result = DecodeResult::new(Format::Unknown);
    decode_into(reader, opts, &mut result)?;
    Ok(result)
}

/// Sniff and decode the binary at the front of `reader`, and write what was learned into `sink`.
///
/// Fields decoded before a failure are still written to `sink`; the failure is returned
/// afterwards.
pub fn parse<R: Read>(reader: R, sink: &mut dyn MetadataSink) -> error::Result<Format> {
    parse_with_opts(reader, sink, &ParseOptions::default())
}

/// Like [`parse`], with the given options
pub fn parse_with_opts<R: Read>(
    reader: R,
    sink: &mut dyn MetadataSink,
    opts: &ParseOptions,
) -> error::Result<Format> {
    let mut result = DecodeResult::new(Format::Unknown);
    let decoded = decode_into(reader, opts, &mut result);
    result.write_to(sink);
    decoded.map(|()| result.format)
}

fn decode_into<R: Read>(
    reader: R,
    opts: &ParseOptions,
    result: &mut DecodeResult,
) -> error::Result<()> {
    let mut cursor = ByteCursor::new(reader);
    decode_header(&mut cursor, result)
        .or_permissive_and_default(opts.parse_mode.is_permissive(), "truncated header")
}

fn decode_header<R: Read>(
    cursor: &mut ByteCursor<R>,
    result: &mut DecodeResult,
) -> error::Result<()> {
    let magic = cursor.read_array::<SIZEOF_MAGIC>()?;
    result.format = peek_bytes(&magic);
    debug!("magic {:x?}: {}", magic, result.format);
    match result.format {
        #[cfg(feature = "pe")]
        Format::PE => pe::decode(magic, cursor, result),
        #[cfg(feature = "elf")]
        Format::Elf => elf::decode(magic, cursor, result),
        #[cfg(feature = "mach")]
        Format::Mach => mach::decode(magic, cursor, result),
        Format::Unknown => Ok(()),
        #[allow(unreachable_patterns)]
        format => {
            debug!("{} support is not compiled in", format);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_magic_families() {
        assert_eq!(peek_bytes(b"MZ\x90\x00"), Format::PE);
        assert_eq!(peek_bytes(b"\x7fELF"), Format::Elf);
        assert_eq!(peek_bytes(&[0xcf, 0xfa, 0xed, 0xfe]), Format::Mach);
        assert_eq!(peek_bytes(&[0xce, 0xfa, 0xed, 0xfe]), Format::Mach);
        assert_eq!(peek_bytes(&[0xfe, 0xed, 0xfa, 0xcf]), Format::Mach);
        assert_eq!(peek_bytes(&[0xfe, 0xed, 0xfa, 0xce]), Format::Mach);
        // fat Mach-o, java class files
        assert_eq!(peek_bytes(&[0xca, 0xfe, 0xba, 0xbe]), Format::Unknown);
        assert_eq!(peek_bytes(b"\x7fELG"), Format::Unknown);
        assert_eq!(peek_bytes(b"ZM\x00\x00"), Format::Unknown);
    }

    #[test]
    fn unknown_magic_sets_nothing() {
        let samples: [[u8; 4]; 5] = [
            *b"%PDF",
            *b"PK\x03\x04",
            [0; 4],
            [0xff; 4],
            [0xfe, 0xed, 0xfa, 0xcd],
        ];
        for sample in samples {
            let result = decode(&sample[..]).unwrap();
            assert_eq!(result, DecodeResult::new(Format::Unknown));
        }
    }

    #[test]
    fn every_4_byte_prefix_is_total() {
        // exhaustive over the first two bytes, with the last two taken from each magic family
        for tail in [[0u8, 0], *b"LF", [0xed, 0xfe], [0xfa, 0xcf]] {
            for first in 0..=u8::MAX {
                for second in 0..=u8::MAX {
                    let sample = [first, second, tail[0], tail[1]];
                    match decode(&sample[..]) {
                        Ok(result) => assert_eq!(result.format, Format::Unknown),
                        Err(err) => {
                            assert!(err.is_short_read());
                            assert_ne!(peek_bytes(&sample), Format::Unknown);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn too_short_for_a_magic() {
        let err = decode(&b"MZ"[..]).unwrap_err();
        assert!(err.is_short_read());
        let result = decode_with_opts(&b"MZ"[..], &ParseOptions::permissive()).unwrap();
        assert_eq!(result.format, Format::Unknown);
    }

    #[test]
    fn supported_types_are_unique() {
        for (i, mime) in SUPPORTED_TYPES.iter().enumerate() {
            assert!(!SUPPORTED_TYPES[i + 1..].contains(mime));
        }
        assert_eq!(SUPPORTED_TYPES.len(), 18);
    }

    #[test]
    fn peek_leaves_the_rest() {
        let mut bytes: &[u8] = b"\x7fELF\x02\x01";
        assert_eq!(peek(&mut bytes).unwrap(), Format::Elf);
        assert_eq!(bytes, &[0x02, 0x01]);
    }
}
