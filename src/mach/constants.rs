//! Mach-o cpu type constants

pub mod cputype {
    use crate::object::Machine;

    /// An alias for u32
    pub type CpuType = u32;
    /// An alias for u32
    pub type CpuSubType = u32;

    /// the mask for CPU feature flags
    pub const CPU_ARCH_MASK: CpuType = 0xff00_0000;
    /// 64 bit ABI
    pub const CPU_ARCH_ABI64: CpuType = 0x0100_0000;

    // CPU Types
    pub const CPU_TYPE_ANY: CpuType = !0;
    pub const CPU_TYPE_VAX: CpuType = 1;
    pub const CPU_TYPE_MC680X0: CpuType = 6;
    pub const CPU_TYPE_X86: CpuType = 7;
    pub const CPU_TYPE_X86_64: CpuType = CPU_TYPE_X86 | CPU_ARCH_ABI64;
    pub const CPU_TYPE_MIPS: CpuType = 8;
    pub const CPU_TYPE_ARM: CpuType = 12;
    pub const CPU_TYPE_ARM64: CpuType = CPU_TYPE_ARM | CPU_ARCH_ABI64;
    pub const CPU_TYPE_MC88000: CpuType = 13;
    pub const CPU_TYPE_SPARC: CpuType = 14;
    pub const CPU_TYPE_POWERPC: CpuType = 18;

    /// Whether the cputype carries the 64 bit ABI flag
    #[inline]
    pub fn is_64(cputype: CpuType) -> bool {
        cputype & CPU_ARCH_MASK == CPU_ARCH_ABI64
    }

    pub static CPU_TYPES: &[(CpuType, Machine)] = &[
        (CPU_TYPE_VAX, Machine::VAX),
        (CPU_TYPE_MC680X0, Machine::M68K),
        (CPU_TYPE_X86, Machine::X86),
        (CPU_TYPE_X86_64, Machine::X86_64),
        (CPU_TYPE_MIPS, Machine::MIPS),
        (CPU_TYPE_ARM, Machine::ARM),
        (CPU_TYPE_ARM64, Machine::ARM),
        (CPU_TYPE_MC88000, Machine::M88K),
        (CPU_TYPE_SPARC, Machine::SPARC),
        (CPU_TYPE_POWERPC, Machine::PPC),
    ];

    pub fn cputype_to_machine(cputype: CpuType) -> Machine {
        CPU_TYPES
            .iter()
            .find(|(code, _)| *code == cputype)
            .map_or(Machine::Unknown, |(_, machine)| *machine)
    }

    /// Get the architecture name from cputype, if known
    pub fn get_arch_name_from_type(cputype: CpuType) -> Option<&'static str> {
        match cputype {
            CPU_TYPE_VAX => Some("vax"),
            CPU_TYPE_MC680X0 => Some("m68k"),
            CPU_TYPE_X86 => Some("i386"),
            CPU_TYPE_X86_64 => Some("x86_64"),
            CPU_TYPE_MIPS => Some("mips"),
            CPU_TYPE_ARM => Some("arm"),
            CPU_TYPE_ARM64 => Some("arm64"),
            CPU_TYPE_MC88000 => Some("m88k"),
            CPU_TYPE_SPARC => Some("sparc"),
            CPU_TYPE_POWERPC => Some("ppc"),
            _ => None,
        }
    }

}
