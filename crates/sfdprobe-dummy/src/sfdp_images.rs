//! Canned SFDP images

/// SFDP region of a Macronix MX25L12835F (16 MiB, SFDP revision 1.6)
///
/// A 16 DWORD Basic Flash Parameter Table at 0x30 and a 4 DWORD Macronix
/// vendor table at 0x110.
#[rustfmt::skip]
pub const MX25L12835F_SFDP: [u8; 0x120] = [
    // @0x00: SFDP header - "SFDP", revision 1.6, NPH=1, legacy access
    0x53, 0x46, 0x44, 0x50, 0x06, 0x01, 0x01, 0xFF,
    // @0x08: BFPT header - rev 1.6, 16 DWORDs, pointer 0x000030
    0x00, 0x06, 0x01, 0x10, 0x30, 0x00, 0x00, 0xFF,
    // @0x10: Macronix header - rev 1.0, 4 DWORDs, pointer 0x000110
    0xC2, 0x00, 0x01, 0x04, 0x10, 0x01, 0x00, 0xFF,
    // @0x18: unused
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    // @0x30: BFPT DWORDs 1-16
    0xE5, 0x20, 0xF3, 0xFF, 0xFF, 0xFF, 0xFF, 0x07,
    0x44, 0xEB, 0x08, 0x6B, 0x08, 0x3B, 0x04, 0xBB,
    0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0xFF,
    0xFF, 0xFF, 0x44, 0xEB, 0x0C, 0x20, 0x0F, 0x52,
    0x10, 0xD8, 0x00, 0xFF, 0xD6, 0x49, 0xC5, 0x00,
    0x82, 0xDF, 0x04, 0xE3, 0x44, 0x03, 0x67, 0x38,
    0x30, 0xB0, 0x30, 0xB0, 0xF7, 0xBD, 0xD5, 0x5C,
    0x4A, 0x9E, 0x29, 0xFF, 0xF0, 0x50, 0xF9, 0x85,
    // @0x70: unused
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    // @0x110: Macronix DWORDs 1-4
    0x00, 0x36, 0x00, 0x27, 0x9D, 0xF9, 0xC0, 0x64,
    0x85, 0xCB, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];
