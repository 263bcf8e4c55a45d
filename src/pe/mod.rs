//! A PE32 and PE32+ header sniffer
//!
//! Only the COFF file header is decoded: its machine code and link timestamp. Everything after it
//! (optional header, sections, imports) is left in the stream.

pub mod header;

use std::io::Read;

use log::debug;

use crate::cursor::ByteCursor;
use crate::error;
use crate::object::{DecodeResult, ObjectKind, Platform, RawHeader};

/// Media type of every PE image that carries a valid PE header
pub const PE_EXE: &str = "application/x-msdownload";

/// Decode the header of a DOS/PE binary whose 4 magic bytes have already been consumed.
///
/// A `e_lfanew` outside of `[PE_POINTER_MIN, PE_POINTER_MAX]`, or a missing `PE\0\0`
/// signature, is an old-style DOS executable: decoding stops early and `result` is left as is.
pub fn decode<R: Read>(
    magic: [u8; 4],
    cursor: &mut ByteCursor<R>,
    result: &mut DecodeResult,
) -> error::Result<()> {
    debug_assert_eq!(magic[..2], header::DOS_MAGIC);
    cursor.skip(header::PE_POINTER_OFFSET - magic.len() as u64)?;
    let pe_pointer = cursor.read_u32(scroll::LE)?;
    debug!("e_lfanew: {:#x}", pe_pointer);
    if !(header::PE_POINTER_MIN..=header::PE_POINTER_MAX).contains(&pe_pointer) {
        debug!("e_lfanew {:#x} is implausible, treating as DOS executable", pe_pointer);
        return Ok(());
    }
    cursor.skip(u64::from(pe_pointer).saturating_sub(header::DOS_STUB_OFFSET))?;

    let block = cursor.read_array::<{ header::SIZEOF_PE_MAGIC + header::SIZEOF_COFF_HEADER }>()?;
    let coff = match header::CoffHeader::parse(&block)? {
        Some(coff) => coff,
        None => {
            debug!("no PE signature at {:#x}, treating as DOS executable", pe_pointer);
            return Ok(());
        }
    };
    debug!(
        "COFF header: machine {} ({:#x}), {} sections",
        header::machine_to_str(coff.machine),
        coff.machine,
        coff.number_of_sections
    );

    result.architecture = header::machine_to_architecture(coff.machine);
    result.created = chrono::DateTime::from_timestamp(i64::from(coff.time_date_stamp), 0);
    result.platform = Some(Platform::Windows);
    result.kind = Some(ObjectKind::Executable);
    result.raw = Some(RawHeader::PE(coff));
    result.content_type = Some(PE_EXE);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Bits, Endianness, Format, Machine};

    /// A DOS header with `e_lfanew` = `pe_pointer`, followed by a PE signature and COFF header
    fn image(pe_pointer: u32, machine: u16, timestamp: u32) -> Vec<u8> {
        let mut bytes = vec![0u8; pe_pointer.max(0x40) as usize];
        bytes[..2].copy_from_slice(b"MZ");
        bytes[0x3c..0x40].copy_from_slice(&pe_pointer.to_le_bytes());
        bytes.extend_from_slice(b"PE\0\0");
        bytes.extend_from_slice(&machine.to_le_bytes());
        bytes.extend_from_slice(&3u16.to_le_bytes());
        bytes.extend_from_slice(&timestamp.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 8]);
        bytes.extend_from_slice(&0xf0u16.to_le_bytes());
        bytes.extend_from_slice(&0x22u16.to_le_bytes());
        bytes
    }

    fn run(bytes: &[u8]) -> error::Result<DecodeResult> {
        let mut cursor = ByteCursor::new(bytes);
        let magic = cursor.read_array::<4>()?;
        let mut result = DecodeResult::new(Format::PE);
        decode(magic, &mut cursor, &mut result)?;
        Ok(result)
    }

    #[test]
    fn x86_64_image() {
        let result = run(&image(0x80, header::COFF_MACHINE_X86_64, 0x5215_8fd9)).unwrap();
        assert_eq!(result.content_type, Some(PE_EXE));
        assert_eq!(result.platform, Some(Platform::Windows));
        assert_eq!(result.kind, Some(ObjectKind::Executable));
        assert_eq!(result.architecture.machine, Some(Machine::X86_64));
        assert_eq!(result.architecture.bits, Some(Bits::B64));
        assert_eq!(result.architecture.endianness, Some(Endianness::Little));
        assert_eq!(
            result.created.map(|created| created.timestamp()),
            Some(0x5215_8fd9)
        );
        match result.raw {
            Some(RawHeader::PE(coff)) => {
                assert_eq!(coff.number_of_sections, 3);
                assert_eq!(coff.size_of_optional_header, 0xf0);
                assert_eq!(coff.characteristics, 0x22);
            }
            other => panic!("unexpected raw header {:?}", other),
        }
    }

    #[test]
    fn smallest_plausible_pointer_skips_nothing() {
        // e_lfanew = 0x3f overlaps the pointer itself; the PE block is read right after it
        let mut bytes = vec![0u8; 0x40];
        bytes[..2].copy_from_slice(b"MZ");
        bytes[0x3c..0x40].copy_from_slice(&0x3fu32.to_le_bytes());
        bytes.extend_from_slice(b"PE\0\0");
        bytes.extend_from_slice(&header::COFF_MACHINE_X86.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 18]);
        let result = run(&bytes).unwrap();
        assert_eq!(result.architecture.machine, Some(Machine::X86));
        assert_eq!(result.content_type, Some(PE_EXE));
    }

    #[test]
    fn implausible_pointer_is_dos() {
        for pe_pointer in [0u32, 0x3e, 4097, 0xffff_ffff] {
            let mut bytes = vec![0u8; 0x40];
            bytes[..2].copy_from_slice(b"MZ");
            bytes[0x3c..0x40].copy_from_slice(&pe_pointer.to_le_bytes());
            let result = run(&bytes).unwrap();
            assert_eq!(result.content_type, None);
            assert_eq!(result.platform, None);
            assert!(result.architecture.is_empty());
        }
    }

    #[test]
    fn missing_signature_is_dos() {
        let mut bytes = image(0x80, header::COFF_MACHINE_X86, 0);
        bytes[0x80] = b'N';
        let result = run(&bytes).unwrap();
        assert_eq!(result.content_type, None);
        assert!(result.raw.is_none());
    }

    #[test]
    fn truncated_coff_header() {
        let mut bytes = image(0x100, header::COFF_MACHINE_X86, 0);
        bytes.truncate(0x100 + 10);
        let err = run(&bytes).unwrap_err();
        assert!(err.is_short_read());
    }

    #[test]
    fn truncated_stub() {
        let bytes = image(0x400, header::COFF_MACHINE_X86, 0);
        let err = run(&bytes[..0x200]).unwrap_err();
        assert!(err.is_short_read());
    }
}
