//! The ELF identification and type/machine sniffer
//!
//! Reads the 16 byte `e_ident` and the two `u16`s after it; the rest of the ELF header, and the
//! program and section headers, are never touched.

pub mod header;

use std::io::Read;

use log::debug;

use crate::cursor::ByteCursor;
use crate::error;
use crate::object::{Bits, DecodeResult, Endianness, ObjectKind, RawHeader};

pub const ELF_GENERAL: &str = "application/x-elf";
pub const ELF_OBJECT: &str = "application/x-object";
pub const ELF_EXECUTABLE: &str = "application/x-executable";
pub const ELF_SHAREDLIB: &str = "application/x-sharedlib";
pub const ELF_COREDUMP: &str = "application/x-coredump";

/// The media type for an ELF object of `kind`
pub fn content_type(kind: ObjectKind) -> &'static str {
    match kind {
        ObjectKind::Object => ELF_OBJECT,
        ObjectKind::Executable => ELF_EXECUTABLE,
        ObjectKind::SharedLibrary => ELF_SHAREDLIB,
        ObjectKind::CoreDump => ELF_COREDUMP,
        _ => ELF_GENERAL,
    }
}

/// Decode the header of an ELF object whose 4 magic bytes have already been consumed.
pub fn decode<R: Read>(
    magic: [u8; 4],
    cursor: &mut ByteCursor<R>,
    result: &mut DecodeResult,
) -> error::Result<()> {
    debug_assert_eq!(&magic, header::ELFMAG);
    let mut ident = header::Ident {
        class: cursor.read_u8()?,
        ..Default::default()
    };
    result.architecture.bits = match ident.class {
        header::ELFCLASS32 => Some(Bits::B32),
        header::ELFCLASS64 => Some(Bits::B64),
        _ => None,
    };

    ident.data = cursor.read_u8()?;
    result.architecture.endianness = match ident.data {
        header::ELFDATA2LSB => Some(Endianness::Little),
        header::ELFDATA2MSB => Some(Endianness::Big),
        _ => None,
    };
    // anything but an explicit LSB is read big endian
    let le = if ident.data == header::ELFDATA2LSB {
        scroll::LE
    } else {
        scroll::BE
    };
    debug!(
        "ELF class {} data {:#x}",
        header::class_to_str(ident.class),
        ident.data
    );

    ident.version = cursor.read_u8()?;
    ident.osabi = cursor.read_u8()?;
    ident.abiversion = cursor.read_u8()?;
    // both zero means the producer did not say
    if ident.osabi != 0 || ident.abiversion != 0 {
        result.platform = header::osabi_to_platform(ident.osabi);
        debug!("OS/ABI {} -> {:?}", ident.osabi, result.platform);
    }
    cursor.skip((header::SIZEOF_IDENT - header::EI_PAD) as u64)?;

    ident.e_type = cursor.read_u16(le)?;
    let kind = header::et_to_kind(ident.e_type);
    debug!("e_type: {}", header::et_to_str(ident.e_type));
    result.kind = Some(kind);
    result.content_type = Some(content_type(kind));

    ident.e_machine = cursor.read_u16(le)?;
    result.architecture.machine = Some(header::machine_to_machine(ident.e_machine));
    debug!("e_machine: {:#x}", ident.e_machine);
    result.raw = Some(RawHeader::Elf(ident));
    Ok(())
}
