use binsniff::pe::{self, header};
use binsniff::{Bits, Endianness, Format, Machine, ObjectKind, Platform, RawHeader};

/// The first 0xe8 bytes of csrss.exe: DOS header, stub, rich header, PE signature and COFF header
const CRSS_HEADER: [u8; 0xe8] = [
    0x4d, 0x5a, 0x90, 0x00, 0x03, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0xff, 0xff, 0x00,
    0x00, 0xb8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xd0, 0x00, 0x00, 0x00, 0x0e, 0x1f, 0xba, 0x0e, 0x00, 0xb4, 0x09, 0xcd, 0x21, 0xb8, 0x01,
    0x4c, 0xcd, 0x21, 0x54, 0x68, 0x69, 0x73, 0x20, 0x70, 0x72, 0x6f, 0x67, 0x72, 0x61, 0x6d,
    0x20, 0x63, 0x61, 0x6e, 0x6e, 0x6f, 0x74, 0x20, 0x62, 0x65, 0x20, 0x72, 0x75, 0x6e, 0x20,
    0x69, 0x6e, 0x20, 0x44, 0x4f, 0x53, 0x20, 0x6d, 0x6f, 0x64, 0x65, 0x2e, 0x0d, 0x0d, 0x0a,
    0x24, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xaa, 0x4a, 0xc3, 0xeb, 0xee, 0x2b, 0xad,
    0xb8, 0xee, 0x2b, 0xad, 0xb8, 0xee, 0x2b, 0xad, 0xb8, 0xee, 0x2b, 0xac, 0xb8, 0xfe, 0x2b,
    0xad, 0xb8, 0x33, 0xd4, 0x66, 0xb8, 0xeb, 0x2b, 0xad, 0xb8, 0x33, 0xd4, 0x63, 0xb8, 0xea,
    0x2b, 0xad, 0xb8, 0x33, 0xd4, 0x7a, 0xb8, 0xed, 0x2b, 0xad, 0xb8, 0x33, 0xd4, 0x64, 0xb8,
    0xef, 0x2b, 0xad, 0xb8, 0x33, 0xd4, 0x61, 0xb8, 0xef, 0x2b, 0xad, 0xb8, 0x52, 0x69, 0x63,
    0x68, 0xee, 0x2b, 0xad, 0xb8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x50, 0x45,
    0x00, 0x00, 0x4c, 0x01, 0x05, 0x00, 0xd9, 0x8f, 0x15, 0x52, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xe0, 0x00, 0x02, 0x01,
];

/// A minimal image with `e_lfanew` = 0x80 and the given machine
fn image(machine: u16) -> Vec<u8> {
    let mut bytes = vec![0u8; 0x80];
    bytes[..2].copy_from_slice(b"MZ");
    bytes[0x3c..0x40].copy_from_slice(&0x80u32.to_le_bytes());
    bytes.extend_from_slice(b"PE\0\0");
    bytes.extend_from_slice(&machine.to_le_bytes());
    bytes.extend_from_slice(&[0u8; 18]);
    bytes
}

#[test]
fn crss_header() {
    let result = binsniff::decode(&CRSS_HEADER[..]).unwrap();
    assert_eq!(result.format, Format::PE);
    assert_eq!(result.content_type, Some(pe::PE_EXE));
    assert_eq!(result.platform, Some(Platform::Windows));
    assert_eq!(result.kind, Some(ObjectKind::Executable));
    assert_eq!(result.architecture.machine, Some(Machine::X86));
    assert_eq!(result.architecture.bits, Some(Bits::B32));
    assert_eq!(result.architecture.endianness, Some(Endianness::Little));
    let created = result.created.unwrap();
    assert_eq!(created.timestamp(), 0x5215_8fd9);
    match result.raw {
        Some(RawHeader::PE(coff)) => {
            assert_eq!(coff.machine, header::COFF_MACHINE_X86);
            assert_eq!(coff.number_of_sections, 5);
            assert_eq!(coff.size_of_optional_header, 0xe0);
        }
        other => panic!("unexpected raw header {:?}", other),
    }
}

#[test]
fn remainder_is_left_in_the_stream() {
    let mut bytes = CRSS_HEADER.to_vec();
    bytes.extend_from_slice(b"optional header");
    let mut stream = &bytes[..];
    binsniff::decode(&mut stream).unwrap();
    assert_eq!(stream, b"optional header");
}

#[test]
fn machine_table() {
    let cases = [
        (0x8664, Machine::X86_64, Some(Bits::B64), Some(Endianness::Little)),
        (0x200, Machine::IA64, Some(Bits::B64), Some(Endianness::Little)),
        (0x284, Machine::Alpha, Some(Bits::B64), Some(Endianness::Little)),
        (0x1c4, Machine::ARM, Some(Bits::B32), Some(Endianness::Little)),
        (0x268, Machine::M68K, Some(Bits::B32), Some(Endianness::Big)),
        (0x466, Machine::MIPS, Some(Bits::B16), Some(Endianness::Big)),
        (0x169, Machine::MIPS, Some(Bits::B16), Some(Endianness::Little)),
        (0x1f1, Machine::PPC, Some(Bits::B32), Some(Endianness::Little)),
        (0x1a8, Machine::SH3, Some(Bits::B32), Some(Endianness::Big)),
        (0x1a6, Machine::SH4, Some(Bits::B32), Some(Endianness::Big)),
        (0x9041, Machine::M32R, Some(Bits::B32), Some(Endianness::Big)),
        (0xebc, Machine::EFI, None, None),
        (0x9999, Machine::Unknown, None, None),
        (0xaa64, Machine::Unknown, None, None),
    ];
    for (code, machine, bits, endianness) in cases {
        let result = binsniff::decode(&image(code)[..]).unwrap();
        assert_eq!(result.architecture.machine, Some(machine), "{:#x}", code);
        assert_eq!(result.architecture.bits, bits, "{:#x}", code);
        assert_eq!(result.architecture.endianness, endianness, "{:#x}", code);
        assert_eq!(result.content_type, Some(pe::PE_EXE));
    }
}

#[test]
fn implausible_pe_pointer_regardless_of_what_follows() {
    for pe_pointer in [0u32, 0x20, 0x3e, 0x1001, 0x8000_0000] {
        let mut bytes = image(0x8664);
        bytes[0x3c..0x40].copy_from_slice(&pe_pointer.to_le_bytes());
        let result = binsniff::decode(&bytes[..]).unwrap();
        assert_eq!(result.format, Format::PE);
        assert_eq!(result.content_type, None, "{:#x}", pe_pointer);
        assert!(result.architecture.is_empty());
        assert!(result.raw.is_none());
    }
}

#[test]
fn pointer_at_the_upper_bound() {
    let mut bytes = vec![0u8; 4096];
    bytes[..2].copy_from_slice(b"MZ");
    bytes[0x3c..0x40].copy_from_slice(&4096u32.to_le_bytes());
    bytes.extend_from_slice(b"PE\0\0");
    bytes.extend_from_slice(&header::COFF_MACHINE_ARM.to_le_bytes());
    bytes.extend_from_slice(&[0u8; 18]);
    let result = binsniff::decode(&bytes[..]).unwrap();
    assert_eq!(result.architecture.machine, Some(Machine::ARM));
}

#[test]
fn old_style_dos_executable() {
    let mut bytes = image(0x14c);
    bytes[0x80..0x84].copy_from_slice(b"LE\0\0");
    let result = binsniff::decode(&bytes[..]).unwrap();
    assert_eq!(result.format, Format::PE);
    assert_eq!(result.content_type, None);
    assert_eq!(result.platform, None);
}

#[test]
fn truncated_dos_header() {
    let err = binsniff::decode(&CRSS_HEADER[..0x30]).unwrap_err();
    assert!(err.is_short_read());
    let result =
        binsniff::decode_with_opts(&CRSS_HEADER[..0x30], &binsniff::ParseOptions::permissive())
            .unwrap();
    assert_eq!(result.format, Format::PE);
    assert_eq!(result.content_type, None);
}
