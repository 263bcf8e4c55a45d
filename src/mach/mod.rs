//! The Mach-o header sniffer
//!
//! Only thin binaries are recognized; the fat/universal magic is left to the caller. Load commands
//! are never read.

pub mod constants;
pub mod header;

use std::io::Read;

use log::debug;

use crate::cursor::ByteCursor;
use crate::error;
use crate::object::{Bits, DecodeResult, Endianness, RawHeader};

pub use self::constants::cputype;

/// Returns a big endian magical number
pub fn peek(bytes: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*bytes)
}

/// Decode the header of a Mach-o binary whose 4 magic bytes have already been consumed.
///
/// The byte order named by the magic is used for every following field.
pub fn decode<R: Read>(
    magic: [u8; 4],
    cursor: &mut ByteCursor<R>,
    result: &mut DecodeResult,
) -> error::Result<()> {
    let (le, is_64_magic) = match header::parse_magic(peek(&magic)) {
        Some(parsed) => parsed,
        None => {
            debug!("{:x?} is not a thin Mach-o magic", magic);
            return Ok(());
        }
    };
    result.architecture.endianness = Some(if le.is_little() {
        Endianness::Little
    } else {
        Endianness::Big
    });

    let cputype = cursor.read_u32(le)?;
    result.architecture.machine = Some(cputype::cputype_to_machine(cputype));
    // only the ABI flag makes a word size claim, whatever the magic says
    if cputype::is_64(cputype) {
        result.architecture.bits = Some(Bits::B64);
    }
    debug!(
        "cputype: {} ({:#x})",
        cputype::get_arch_name_from_type(cputype).unwrap_or("unknown"),
        cputype
    );

    let cpusubtype = cursor.read_u32(le)?;
    let filetype = cursor.read_u32(le)?;
    let (kind, content_type) = header::filetype_to_kind(filetype);
    debug!("filetype: {}", header::filetype_to_str(filetype));
    result.kind = Some(kind);
    result.raw = Some(RawHeader::Mach(header::Header {
        magic: if is_64_magic {
            header::MH_MAGIC_64
        } else {
            header::MH_MAGIC
        },
        cputype,
        cpusubtype,
        filetype,
    }));
    result.content_type = Some(content_type);
    Ok(())
}
