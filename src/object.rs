//! The strongly typed description of a sniffed binary.
//!
//! Every decoder fills in a [`DecodeResult`]; anything a format's header does not carry stays
//! `None` rather than being defaulted.

use core::fmt;

use chrono::{DateTime, Utc};

/// The container format, as determined by the leading magic bytes
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Format {
    /// A DOS `MZ` executable, possibly carrying a PE header
    PE,
    /// An ELF object
    Elf,
    /// A thin (single architecture) Mach-o object
    Mach,
    /// None of the above
    Unknown,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Format::PE => "PE",
            Format::Elf => "ELF",
            Format::Mach => "Mach-O",
            Format::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// The machine architecture an object targets, across all three formats
#[allow(non_camel_case_types)]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Machine {
    X86,
    X86_64,
    IA64,
    ARM,
    PPC,
    SPARC,
    MIPS,
    M68K,
    M88K,
    Alpha,
    VAX,
    S370,
    S390,
    SH3,
    SH4,
    M32R,
    EFI,
    Unknown,
}

impl Machine {
    /// The display name used in metadata
    pub fn as_str(self) -> &'static str {
        match self {
            Machine::X86 => "x86-32",
            Machine::X86_64 => "x86-64",
            Machine::IA64 => "IA-64",
            Machine::ARM => "ARM",
            Machine::PPC => "PPC",
            Machine::SPARC => "SPARC",
            Machine::MIPS => "MIPS",
            Machine::M68K => "Motorola-68000",
            Machine::M88K => "Motorola-88000",
            Machine::Alpha => "Alpha",
            Machine::VAX => "VAX",
            Machine::S370 => "IBM-S370",
            Machine::S390 => "IBM-S390",
            Machine::SH3 => "SH3",
            Machine::SH4 => "SH4",
            Machine::M32R => "Mitsubishi-M32R",
            Machine::EFI => "EFI",
            Machine::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The word size an object claims
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Bits {
    /// Only the PE MIPS16 machine codes claim this
    B16,
    B32,
    B64,
}

impl Bits {
    pub fn as_u8(self) -> u8 {
        match self {
            Bits::B16 => 16,
            Bits::B32 => 32,
            Bits::B64 => 64,
        }
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Byte order of the object's multi-byte fields
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    pub fn as_str(self) -> &'static str {
        match self {
            Endianness::Little => "Little",
            Endianness::Big => "Big",
        }
    }
}

impl From<Endianness> for scroll::Endian {
    fn from(endianness: Endianness) -> Self {
        match endianness {
            Endianness::Little => scroll::LE,
            Endianness::Big => scroll::BE,
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Machine, word size and byte order, as far as the header tells.
///
/// Each field is only `Some` once the decoder has actually read it; a machine code the tables
/// do not know is `Some(Machine::Unknown)`.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Default)]
pub struct Architecture {
    pub machine: Option<Machine>,
    pub bits: Option<Bits>,
    pub endianness: Option<Endianness>,
}

impl Architecture {
    /// A machine with no word size or byte order claim
    pub const fn bare(machine: Machine) -> Self {
        Architecture {
            machine: Some(machine),
            bits: None,
            endianness: None,
        }
    }

    pub const fn new(machine: Machine, bits: Bits, endianness: Endianness) -> Self {
        Architecture {
            machine: Some(machine),
            bits: Some(bits),
            endianness: Some(endianness),
        }
    }

    /// Whether nothing at all is known
    pub fn is_empty(&self) -> bool {
        self.machine.is_none() && self.bits.is_none() && self.endianness.is_none()
    }
}

/// What kind of object the binary is
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum ObjectKind {
    /// A relocatable object file
    Object,
    Executable,
    SharedLibrary,
    CoreDump,
    /// Mach-o fixed VM shared library
    FixedVmLibrary,
    /// Mach-o preloaded executable
    Preload,
    /// Mach-o dynamic link editor
    DynamicLinker,
    Bundle,
    /// Mach-o shared library stub for static linking only
    DylibStub,
    /// Mach-o companion file with only debug sections
    DebugSymbols,
    KextBundle,
    /// A kind the format's table does not know, with the raw header value
    Other(u32),
}

/// The operating system or ABI an object was built for
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Platform {
    SysV,
    HpUx,
    NetBSD,
    Linux,
    Solaris,
    AIX,
    IRIX,
    FreeBSD,
    Tru64,
    /// ARM EABI
    ARM,
    Embedded,
    Windows,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::SysV => "System V",
            Platform::HpUx => "HP-UX",
            Platform::NetBSD => "NetBSD",
            Platform::Linux => "Linux",
            Platform::Solaris => "Solaris",
            Platform::AIX => "AIX",
            Platform::IRIX => "IRIX",
            Platform::FreeBSD => "FreeBSD",
            Platform::Tru64 => "Tru64",
            Platform::ARM => "ARM",
            Platform::Embedded => "Embedded",
            Platform::Windows => "Windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header fields that are read but carry no metadata of their own
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum RawHeader {
    #[cfg(feature = "pe")]
    PE(crate::pe::header::CoffHeader),
    #[cfg(feature = "elf")]
    Elf(crate::elf::header::Ident),
    #[cfg(feature = "mach")]
    Mach(crate::mach::header::Header),
}

/// Everything learned about a single binary
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DecodeResult {
    pub format: Format,
    /// The media type of the object, set once it has been classified
    pub content_type: Option<&'static str>,
    pub architecture: Architecture,
    pub kind: Option<ObjectKind>,
    pub platform: Option<Platform>,
    /// PE link time
    pub created: Option<DateTime<Utc>>,
    pub raw: Option<RawHeader>,
}

impl DecodeResult {
    /// An empty result for `format`
    pub fn new(format: Format) -> Self {
        DecodeResult {
            format,
            content_type: None,
            architecture: Architecture::default(),
            kind: None,
            platform: None,
            created: None,
            raw: None,
        }
    }

    /// Whether a decoder got far enough to classify the object
    pub fn is_classified(&self) -> bool {
        self.content_type.is_some()
    }
}
