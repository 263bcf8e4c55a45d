//! A Mach-o header prefix: magic, cputype, cpusubtype and filetype

use crate::mach::constants::cputype::{CpuSubType, CpuType};
use crate::object::ObjectKind;

/// Mach Header magic constant
pub const MH_MAGIC: u32 = 0xfeed_face;
pub const MH_CIGAM: u32 = 0xcefa_edfe;
/// Mach Header magic constant for 64-bit
pub const MH_MAGIC_64: u32 = 0xfeed_facf;
pub const MH_CIGAM_64: u32 = 0xcffa_edfe;

// Constants for the filetype field of the mach_header
/// relocatable object file
pub const MH_OBJECT: u32 = 0x1;
/// demand paged executable file
pub const MH_EXECUTE: u32 = 0x2;
/// fixed VM shared library file
pub const MH_FVMLIB: u32 = 0x3;
/// core file
pub const MH_CORE: u32 = 0x4;
/// preloaded executable file
pub const MH_PRELOAD: u32 = 0x5;
/// dynamically bound shared library
pub const MH_DYLIB: u32 = 0x6;
/// dynamic link editor
pub const MH_DYLINKER: u32 = 0x7;
/// dynamically bound bundle file
pub const MH_BUNDLE: u32 = 0x8;
/// shared library stub for static linking only, no section contents
pub const MH_DYLIB_STUB: u32 = 0x9;
/// companion file with only debug sections
pub const MH_DSYM: u32 = 0xa;
/// x86_64 kexts
pub const MH_KEXT_BUNDLE: u32 = 0xb;

pub const MACH_O: &str = "application/x-mach-o";
pub const MACH_O_OBJECT: &str = "application/x-mach-o-object";
pub const MACH_O_EXECUTABLE: &str = "application/x-mach-o-executable";
pub const MACH_O_FVMLIB: &str = "application/x-mach-o-fvmlib";
pub const MACH_O_CORE: &str = "application/x-mach-o-core";
pub const MACH_O_PRELOAD: &str = "application/x-mach-o-preload";
pub const MACH_O_DYLIB: &str = "application/x-mach-o-dylib";
pub const MACH_O_DYLINKER: &str = "application/x-mach-o-dylinker";
pub const MACH_O_BUNDLE: &str = "application/x-mach-o-bundle";
pub const MACH_O_DYLIB_STUB: &str = "application/x-mach-o-dylib-stub";
pub const MACH_O_DSYM: &str = "application/x-mach-o-dsym";
pub const MACH_O_KEXT_BUNDLE: &str = "application/x-mach-o-kext-bundle";

/// filetype, the kind it denotes, and that kind's media type
pub static FILE_TYPES: &[(u32, ObjectKind, &str)] = &[
    (MH_OBJECT, ObjectKind::Object, MACH_O_OBJECT),
    (MH_EXECUTE, ObjectKind::Executable, MACH_O_EXECUTABLE),
    (MH_FVMLIB, ObjectKind::FixedVmLibrary, MACH_O_FVMLIB),
    (MH_CORE, ObjectKind::CoreDump, MACH_O_CORE),
    (MH_PRELOAD, ObjectKind::Preload, MACH_O_PRELOAD),
    (MH_DYLIB, ObjectKind::SharedLibrary, MACH_O_DYLIB),
    (MH_DYLINKER, ObjectKind::DynamicLinker, MACH_O_DYLINKER),
    (MH_BUNDLE, ObjectKind::Bundle, MACH_O_BUNDLE),
    (MH_DYLIB_STUB, ObjectKind::DylibStub, MACH_O_DYLIB_STUB),
    (MH_DSYM, ObjectKind::DebugSymbols, MACH_O_DSYM),
    (MH_KEXT_BUNDLE, ObjectKind::KextBundle, MACH_O_KEXT_BUNDLE),
];

/// The kind and media type of `filetype`, falling back to a generic Mach-o
pub fn filetype_to_kind(filetype: u32) -> (ObjectKind, &'static str) {
    FILE_TYPES
        .iter()
        .find(|(code, _, _)| *code == filetype)
        .map_or((ObjectKind::Other(filetype), MACH_O), |(_, kind, mime)| {
            (*kind, *mime)
        })
}

pub fn filetype_to_str(filetype: u32) -> &'static str {
    match filetype {
        MH_OBJECT => "OBJECT",
        MH_EXECUTE => "EXECUTE",
        MH_FVMLIB => "FVMLIB",
        MH_CORE => "CORE",
        MH_PRELOAD => "PRELOAD",
        MH_DYLIB => "DYLIB",
        MH_DYLINKER => "DYLINKER",
        MH_BUNDLE => "BUNDLE",
        MH_DYLIB_STUB => "DYLIB_STUB",
        MH_DSYM => "DSYM",
        MH_KEXT_BUNDLE => "KEXT_BUNDLE",
        _ => "UNKNOWN FILETYPE",
    }
}

/// The leading fields of a `mach_header` or `mach_header_64`, in host order
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub struct Header {
    /// `MH_MAGIC` or `MH_MAGIC_64`
    pub magic: u32,
    pub cputype: CpuType,
    pub cpusubtype: CpuSubType,
    pub filetype: u32,
}

/// Byte order and word size of a Mach-o file, derived from its first 4 bytes.
///
/// `magic` is those bytes read big endian, as produced by [`peek`](super::peek).
/// Returns `None` for anything that is not a thin Mach-o magic.
pub fn parse_magic(magic: u32) -> Option<(scroll::Endian, bool)> {
    match magic {
        MH_MAGIC => Some((scroll::BE, false)),
        MH_MAGIC_64 => Some((scroll::BE, true)),
        MH_CIGAM => Some((scroll::LE, false)),
        MH_CIGAM_64 => Some((scroll::LE, true)),
        _ => None,
    }
}
