use crate::object::{Machine, ObjectKind, Platform};

/// The ELF magic number.
pub const ELFMAG: &[u8; 4] = b"\x7FELF";

/// File class byte index.
pub const EI_CLASS: usize = 4;
/// Invalid class.
pub const ELFCLASSNONE: u8 = 0;
/// 32-bit objects.
pub const ELFCLASS32: u8 = 1;
/// 64-bit objects.
pub const ELFCLASS64: u8 = 2;

/// Data encoding byte index.
pub const EI_DATA: usize = 5;
/// Invalid data encoding.
pub const ELFDATANONE: u8 = 0;
/// 2's complement, little endian.
pub const ELFDATA2LSB: u8 = 1;
/// 2's complement, big endian.
pub const ELFDATA2MSB: u8 = 2;

/// File version byte index.
pub const EI_VERSION: usize = 6;
/// OS ABI identification.
pub const EI_OSABI: usize = 7;
/// ABI version.
pub const EI_ABIVERSION: usize = 8;
/// Byte index of padding bytes.
pub const EI_PAD: usize = 9;
/// Number of bytes in an identifier.
pub const SIZEOF_IDENT: usize = 16;

/// UNIX System V ABI.
pub const ELFOSABI_SYSV: u8 = 0;
/// HP-UX.
pub const ELFOSABI_HPUX: u8 = 1;
/// NetBSD.
pub const ELFOSABI_NETBSD: u8 = 2;
/// Object uses GNU ELF extensions.
pub const ELFOSABI_LINUX: u8 = 3;
/// Sun Solaris.
pub const ELFOSABI_SOLARIS: u8 = 6;
/// IBM AIX.
pub const ELFOSABI_AIX: u8 = 7;
/// SGI Irix.
pub const ELFOSABI_IRIX: u8 = 8;
/// FreeBSD.
pub const ELFOSABI_FREEBSD: u8 = 9;
/// Compaq TRU64 UNIX.
pub const ELFOSABI_TRU64: u8 = 10;
/// OpenBSD.
pub const ELFOSABI_OPENBSD: u8 = 12;
/// ARM EABI.
pub const ELFOSABI_ARM_AEABI: u8 = 64;
/// ARM.
pub const ELFOSABI_ARM: u8 = 97;
/// Standalone (embedded) application.
pub const ELFOSABI_STANDALONE: u8 = 255;

/// No file type.
pub const ET_NONE: u16 = 0;
/// Relocatable file.
pub const ET_REL: u16 = 1;
/// Executable file.
pub const ET_EXEC: u16 = 2;
/// Shared object file.
pub const ET_DYN: u16 = 3;
/// Core file.
pub const ET_CORE: u16 = 4;

/// SUN SPARC
pub const EM_SPARC: u16 = 2;
/// Intel 80386
pub const EM_386: u16 = 3;
/// Motorola m68k family
pub const EM_68K: u16 = 4;
/// Motorola m88k family
pub const EM_88K: u16 = 5;
/// Intel 80860
pub const EM_860: u16 = 7;
/// MIPS R3000 big-endian
pub const EM_MIPS: u16 = 8;
/// MIPS R3000 little-endian
pub const EM_MIPS_RS3_LE: u16 = 10;
/// Sun's "v8plus"
pub const EM_SPARC32PLUS: u16 = 18;
/// PowerPC
pub const EM_PPC: u16 = 20;
/// PowerPC 64-bit
pub const EM_PPC64: u16 = 21;
/// IBM S390
pub const EM_S390: u16 = 22;
/// ARM
pub const EM_ARM: u16 = 40;
/// Digital Alpha
pub const EM_FAKE_ALPHA: u16 = 41;
/// SPARC v9 64-bit
pub const EM_SPARCV9: u16 = 43;
/// Intel Merced
pub const EM_IA_64: u16 = 50;
/// AMD x86-64 architecture
pub const EM_X86_64: u16 = 62;
/// Digital VAX
pub const EM_VAX: u16 = 75;
/// Mitsubishi M32R
pub const EM_M32R: u16 = 88;
/// Digital Alpha, unofficial value
pub const EM_ALPHA: u16 = 0x9026;

/// The identification bytes after the magic, plus the first two fields of the header proper.
///
/// `e_type` and `e_machine` are in the byte order named by `data`.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub struct Ident {
    pub class: u8,
    pub data: u8,
    pub version: u8,
    pub osabi: u8,
    pub abiversion: u8,
    pub e_type: u16,
    pub e_machine: u16,
}

/// OS/ABI bytes we can name; only consulted when the OS/ABI or ABI version byte is non-zero
pub static OSABIS: &[(u8, Platform)] = &[
    (ELFOSABI_SYSV, Platform::SysV),
    (ELFOSABI_HPUX, Platform::HpUx),
    (ELFOSABI_NETBSD, Platform::NetBSD),
    (ELFOSABI_LINUX, Platform::Linux),
    (ELFOSABI_SOLARIS, Platform::Solaris),
    (ELFOSABI_AIX, Platform::AIX),
    (ELFOSABI_IRIX, Platform::IRIX),
    (ELFOSABI_FREEBSD, Platform::FreeBSD),
    (ELFOSABI_TRU64, Platform::Tru64),
    // reported as FreeBSD for compatibility with existing metadata consumers
    (ELFOSABI_OPENBSD, Platform::FreeBSD),
    (ELFOSABI_ARM_AEABI, Platform::ARM),
    (ELFOSABI_ARM, Platform::ARM),
    (ELFOSABI_STANDALONE, Platform::Embedded),
];

pub static MACHINES: &[(u16, Machine)] = &[
    (EM_SPARC, Machine::SPARC),
    (EM_SPARC32PLUS, Machine::SPARC),
    (EM_SPARCV9, Machine::SPARC),
    (EM_386, Machine::X86),
    (EM_68K, Machine::M68K),
    (EM_88K, Machine::M88K),
    (EM_MIPS, Machine::MIPS),
    (EM_MIPS_RS3_LE, Machine::MIPS),
    // reported as S370 for compatibility with existing metadata consumers
    (EM_860, Machine::S370),
    (EM_PPC, Machine::PPC),
    (EM_PPC64, Machine::PPC),
    (EM_S390, Machine::S390),
    (EM_ARM, Machine::ARM),
    (EM_FAKE_ALPHA, Machine::Alpha),
    (EM_ALPHA, Machine::Alpha),
    (EM_IA_64, Machine::IA64),
    (EM_X86_64, Machine::X86_64),
    (EM_VAX, Machine::VAX),
    (EM_M32R, Machine::M32R),
];

pub static OBJECT_TYPES: &[(u16, ObjectKind)] = &[
    (ET_REL, ObjectKind::Object),
    (ET_EXEC, ObjectKind::Executable),
    (ET_DYN, ObjectKind::SharedLibrary),
    (ET_CORE, ObjectKind::CoreDump),
];

/// Map an OS/ABI byte to a platform, if we know it
pub fn osabi_to_platform(osabi: u8) -> Option<Platform> {
    OSABIS
        .iter()
        .find(|(code, _)| *code == osabi)
        .map(|(_, platform)| *platform)
}

pub fn machine_to_machine(e_machine: u16) -> Machine {
    MACHINES
        .iter()
        .find(|(code, _)| *code == e_machine)
        .map_or(Machine::Unknown, |(_, machine)| *machine)
}

pub fn et_to_kind(e_type: u16) -> ObjectKind {
    OBJECT_TYPES
        .iter()
        .find(|(code, _)| *code == e_type)
        .map_or(ObjectKind::Other(u32::from(e_type)), |(_, kind)| *kind)
}

/// Convert a ELF class byte to the associated string.
#[inline]
pub fn class_to_str(et: u8) -> &'static str {
    match et {
        ELFCLASSNONE => "NONE",
        ELFCLASS32 => "ELF32",
        ELFCLASS64 => "ELF64",
        _ => "UNKNOWN_CLASS",
    }
}

/// Convert an ET value to their associated string.
#[inline]
pub fn et_to_str(et: u16) -> &'static str {
    match et {
        ET_NONE => "NONE",
        ET_REL => "REL",
        ET_EXEC => "EXEC",
        ET_DYN => "DYN",
        ET_CORE => "CORE",
        _ => "UNKNOWN_ET",
    }
}
