use scroll::{Pread, SizeWith};

use crate::error;
use crate::object::{Architecture, Machine};

/// `"MZ"`, the DOS executable signature
#[doc(alias("IMAGE_DOS_SIGNATURE"))]
pub const DOS_MAGIC: [u8; 2] = *b"MZ";
/// e_lfanew: pointer to PE header, always at offset 0x3c
pub const PE_POINTER_OFFSET: u64 = 0x3c;
/// Where the DOS stub, and so the fields after `e_lfanew`, begins
pub const DOS_STUB_OFFSET: u64 = PE_POINTER_OFFSET + (core::mem::size_of::<u32>() as u64);
/// Smallest plausible `e_lfanew`; anything lower overlaps the DOS header
pub const PE_POINTER_MIN: u32 = 0x3f;
/// Largest `e_lfanew` we are willing to skip forward to. It may legally go anywhere, but
/// real linkers keep it within the first page
pub const PE_POINTER_MAX: u32 = 4096;

/// PE\0\0, little endian
pub const PE_MAGIC: u32 = 0x0000_4550;
pub const SIZEOF_PE_MAGIC: usize = 4;
pub const SIZEOF_COFF_HEADER: usize = 20;

/// COFF Header
#[repr(C)]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Pread, SizeWith)]
pub struct CoffHeader {
    /// The machine type
    pub machine: u16,
    pub number_of_sections: u16,
    /// Seconds since the Unix epoch at link time
    pub time_date_stamp: u32,
    pub pointer_to_symbol_table: u32,
    pub number_of_symbol_table: u32,
    pub size_of_optional_header: u16,
    pub characteristics: u16,
}

impl CoffHeader {
    /// Parse the PE signature and the COFF header following it out of `bytes`.
    ///
    /// Returns `Ok(None)` when the signature is not `PE\0\0`, i.e. this is an old-style DOS
    /// executable rather than a PE.
    pub fn parse(bytes: &[u8; SIZEOF_PE_MAGIC + SIZEOF_COFF_HEADER]) -> error::Result<Option<Self>> {
        let bytes = &bytes[..];
        let signature: u32 = bytes.pread_with(0, scroll::LE)?;
        if signature != PE_MAGIC {
            return Ok(None);
        }
        Ok(Some(bytes.pread_with(SIZEOF_PE_MAGIC, scroll::LE)?))
    }
}

/// Intel 386
pub const COFF_MACHINE_X86: u16 = 0x14c;
/// MIPS little-endian R3000
pub const COFF_MACHINE_R3000: u16 = 0x162;
/// MIPS little endian
pub const COFF_MACHINE_R4000: u16 = 0x166;
/// MIPS little-endian R10000
pub const COFF_MACHINE_R10000: u16 = 0x168;
/// MIPS little-endian WCE v2
pub const COFF_MACHINE_WCEMIPSV2: u16 = 0x169;
/// Alpha AXP
pub const COFF_MACHINE_ALPHA: u16 = 0x184;
/// Hitachi SH3
pub const COFF_MACHINE_SH3: u16 = 0x1a2;
/// Hitachi SH3 DSP
pub const COFF_MACHINE_SH3DSP: u16 = 0x1a3;
/// Hitachi SH4
pub const COFF_MACHINE_SH4: u16 = 0x1a6;
/// Hitachi SH5
pub const COFF_MACHINE_SH5: u16 = 0x1a8;
/// ARM little endian
pub const COFF_MACHINE_ARM: u16 = 0x1c0;
/// ARM Thumb-2 little endian
pub const COFF_MACHINE_ARMNT: u16 = 0x1c4;
/// Power PC little endian
pub const COFF_MACHINE_POWERPC: u16 = 0x1f0;
/// Power PC with floating point support
pub const COFF_MACHINE_POWERPCFP: u16 = 0x1f1;
/// Intel Itanium processor family
pub const COFF_MACHINE_IA64: u16 = 0x200;
/// MIPS16
pub const COFF_MACHINE_MIPS16: u16 = 0x266;
/// Motorola 68000 series
pub const COFF_MACHINE_M68K: u16 = 0x268;
/// Alpha AXP 64-bit
pub const COFF_MACHINE_ALPHA64: u16 = 0x284;
/// MIPS with FPU
pub const COFF_MACHINE_MIPSFPU: u16 = 0x366;
/// MIPS16 with FPU
pub const COFF_MACHINE_MIPSFPU16: u16 = 0x466;
/// EFI byte code
pub const COFF_MACHINE_EBC: u16 = 0xebc;
/// x64
pub const COFF_MACHINE_X86_64: u16 = 0x8664;
/// Mitsubishi M32R little endian
pub const COFF_MACHINE_M32R: u16 = 0x9041;

use crate::object::Bits::{B16, B32, B64};
use crate::object::Endianness::{Big, Little};

/// Every COFF machine code we can name, with the word size and byte order it implies
pub static MACHINES: &[(u16, Architecture)] = &[
    (COFF_MACHINE_X86, Architecture::new(Machine::X86, B32, Little)),
    (COFF_MACHINE_X86_64, Architecture::new(Machine::X86_64, B64, Little)),
    (COFF_MACHINE_IA64, Architecture::new(Machine::IA64, B64, Little)),
    (COFF_MACHINE_ALPHA, Architecture::new(Machine::Alpha, B32, Little)),
    (COFF_MACHINE_ALPHA64, Architecture::new(Machine::Alpha, B64, Little)),
    (COFF_MACHINE_ARM, Architecture::new(Machine::ARM, B32, Little)),
    (COFF_MACHINE_ARMNT, Architecture::new(Machine::ARM, B32, Little)),
    (COFF_MACHINE_M68K, Architecture::new(Machine::M68K, B32, Big)),
    (COFF_MACHINE_MIPS16, Architecture::new(Machine::MIPS, B16, Big)),
    (COFF_MACHINE_MIPSFPU, Architecture::new(Machine::MIPS, B16, Big)),
    (COFF_MACHINE_MIPSFPU16, Architecture::new(Machine::MIPS, B16, Big)),
    (COFF_MACHINE_R3000, Architecture::new(Machine::MIPS, B16, Little)),
    (COFF_MACHINE_R4000, Architecture::new(Machine::MIPS, B16, Little)),
    (COFF_MACHINE_R10000, Architecture::new(Machine::MIPS, B16, Little)),
    (COFF_MACHINE_WCEMIPSV2, Architecture::new(Machine::MIPS, B16, Little)),
    (COFF_MACHINE_POWERPC, Architecture::new(Machine::PPC, B32, Little)),
    (COFF_MACHINE_POWERPCFP, Architecture::new(Machine::PPC, B32, Little)),
    (COFF_MACHINE_SH3, Architecture::new(Machine::SH3, B32, Big)),
    (COFF_MACHINE_SH3DSP, Architecture::new(Machine::SH3, B32, Big)),
    (COFF_MACHINE_SH5, Architecture::new(Machine::SH3, B32, Big)),
    (COFF_MACHINE_SH4, Architecture::new(Machine::SH4, B32, Big)),
    (COFF_MACHINE_M32R, Architecture::new(Machine::M32R, B32, Big)),
    (COFF_MACHINE_EBC, Architecture::bare(Machine::EFI)),
];

/// Look `machine` up in [`MACHINES`]; unknown codes make no word size or byte order claim
pub fn machine_to_architecture(machine: u16) -> Architecture {
    MACHINES
        .iter()
        .find(|(code, _)| *code == machine)
        .map(|(_, arch)| *arch)
        .unwrap_or(Architecture::bare(Machine::Unknown))
}

/// Convert machine to str representation
pub fn machine_to_str(machine: u16) -> &'static str {
    match machine {
        COFF_MACHINE_X86 => "X86",
        COFF_MACHINE_R3000 => "R3000",
        COFF_MACHINE_R4000 => "R4000",
        COFF_MACHINE_R10000 => "R10000",
        COFF_MACHINE_WCEMIPSV2 => "WCE_MIPS_V2",
        COFF_MACHINE_ALPHA => "ALPHA",
        COFF_MACHINE_SH3 => "SH3",
        COFF_MACHINE_SH3DSP => "SH3DSP",
        COFF_MACHINE_SH4 => "SH4",
        COFF_MACHINE_SH5 => "SH5",
        COFF_MACHINE_ARM => "ARM",
        COFF_MACHINE_ARMNT => "ARM_NT",
        COFF_MACHINE_POWERPC => "POWERPC",
        COFF_MACHINE_POWERPCFP => "POWERCFP",
        COFF_MACHINE_IA64 => "IA64",
        COFF_MACHINE_MIPS16 => "MIPS_16",
        COFF_MACHINE_M68K => "M68K",
        COFF_MACHINE_ALPHA64 => "ALPHA64",
        COFF_MACHINE_MIPSFPU => "MIPS_FPU",
        COFF_MACHINE_MIPSFPU16 => "MIPS_FPU_16",
        COFF_MACHINE_EBC => "EBC",
        COFF_MACHINE_X86_64 => "X86_64",
        COFF_MACHINE_M32R => "M32R",
        _ => "COFF_UNKNOWN",
    }
}
