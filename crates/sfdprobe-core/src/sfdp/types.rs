//! On-chip SFDP structures
//!
//! The SFDP region starts with an 8-byte header followed by a directory of
//! 8-byte parameter headers, each pointing at one parameter table. All
//! multi-byte fields are little-endian.

use core::fmt;

use crate::spi::SpiCommand;

/// "SFDP" read as a little-endian u32
pub const SFDP_SIGNATURE: u32 = u32::from_le_bytes(*b"SFDP");

/// Highest valid byte offset in the SFDP address space
///
/// RDSFDP always carries a 3-byte address.
pub const SFDP_MAX_ADDRESS: u64 = SpiCommand::MAX_ADDRESS as u64;

/// Size of the SFDP header and of each parameter header
pub const HEADER_LEN: usize = 8;

/// Basic Flash Parameter Table
pub const PARAM_ID_BASIC: u16 = 0xFF00;
/// Sector Map Table
pub const PARAM_ID_SECTOR_MAP: u16 = 0xFF81;
/// 4-byte Address Instruction Table
pub const PARAM_ID_4BYTE_ADDR: u16 = 0xFF84;
/// xSPI Profile 1.0 Table
pub const PARAM_ID_XSPI_1_0: u16 = 0xFF05;
/// Status, Control and Configuration Register Map
pub const PARAM_ID_SCCR_MAP: u16 = 0xFF87;

/// Name of a JEDEC-assigned parameter table ID
pub fn param_id_name(id: u16) -> Option<&'static str> {
    Some(match id {
        PARAM_ID_BASIC => "Basic Flash Parameters",
        PARAM_ID_SECTOR_MAP => "Sector Map",
        PARAM_ID_4BYTE_ADDR => "4-Byte Address Instructions",
        PARAM_ID_XSPI_1_0 => "xSPI Profile 1.0",
        PARAM_ID_SCCR_MAP => "Register Map",
        _ => return None,
    })
}

/// Revision of the SFDP header or of a parameter table
///
/// Ordered by major, then minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct SfdpRevision {
    /// Major revision
    pub major: u8,
    /// Minor revision
    pub minor: u8,
}

impl SfdpRevision {
    /// First published revision
    pub const JESD216: Self = Self::new(1, 0);
    /// JESD216A
    pub const JESD216A: Self = Self::new(1, 5);
    /// JESD216B
    pub const JESD216B: Self = Self::new(1, 6);

    /// Build a revision from its parts
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    /// Whether `self` is `other` or newer
    pub fn at_least(&self, other: SfdpRevision) -> bool {
        *self >= other
    }

    // Minor comes first on the wire
    fn from_wire(minor: u8, major: u8) -> Self {
        Self::new(major, minor)
    }
}

impl fmt::Display for SfdpRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// The header at SFDP offset 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SfdpHeader {
    /// Signature word, [`SFDP_SIGNATURE`] on a conforming chip
    pub signature: u32,
    /// SFDP revision
    pub revision: SfdpRevision,
    /// Number of parameter headers minus one
    pub nph: u8,
    /// Access protocol byte (0xFF on legacy chips)
    pub access_protocol: u8,
}

impl SfdpHeader {
    /// Decode the header
    pub fn parse(raw: &[u8; HEADER_LEN]) -> Self {
        let [s0, s1, s2, s3, minor, major, nph, access_protocol] = *raw;
        Self {
            signature: u32::from_le_bytes([s0, s1, s2, s3]),
            revision: SfdpRevision::from_wire(minor, major),
            nph,
            access_protocol,
        }
    }

    /// Whether the signature matches
    pub fn is_valid(&self) -> bool {
        self.signature == SFDP_SIGNATURE
    }

    /// Number of entries in the parameter header directory
    pub fn num_param_headers(&self) -> usize {
        usize::from(self.nph) + 1
    }
}

/// One entry of the parameter header directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParameterHeader {
    /// Table ID, MSB in the high byte
    pub id: u16,
    /// Table revision
    pub revision: SfdpRevision,
    /// Table length in DWORDs
    pub length_dwords: u8,
    /// SFDP offset of the first table byte
    pub table_pointer: u32,
}

impl ParameterHeader {
    /// Decode a directory entry
    pub fn parse(raw: &[u8; HEADER_LEN]) -> Self {
        let [id_lsb, minor, major, length_dwords, p0, p1, p2, id_msb] = *raw;
        Self {
            id: u16::from_le_bytes([id_lsb, id_msb]),
            revision: SfdpRevision::from_wire(minor, major),
            length_dwords,
            table_pointer: u32::from_le_bytes([p0, p1, p2, 0]),
        }
    }

    /// Table length in bytes
    pub fn length_bytes(&self) -> usize {
        usize::from(self.length_dwords) * 4
    }

    /// SFDP offset one past the last table byte
    pub fn end(&self) -> u64 {
        u64::from(self.table_pointer) + self.length_bytes() as u64
    }

    /// Whether this entry describes the Basic Flash Parameter Table
    pub fn is_basic(&self) -> bool {
        self.id == PARAM_ID_BASIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sfdp_header_parse() {
        let raw = [0x53, 0x46, 0x44, 0x50, 0x06, 0x01, 0x01, 0xFF];
        let header = SfdpHeader::parse(&raw);

        assert!(header.is_valid());
        assert_eq!(header.signature, 0x5044_4653);
        assert_eq!(header.revision, SfdpRevision::JESD216B);
        assert_eq!(header.num_param_headers(), 2);
        assert_eq!(header.access_protocol, 0xFF);
    }

    #[test]
    fn test_param_header_parse() {
        let raw = [0x00, 0x06, 0x01, 0x10, 0x30, 0x00, 0x00, 0xFF];
        let header = ParameterHeader::parse(&raw);

        assert!(header.is_basic());
        assert_eq!(header.revision, SfdpRevision::new(1, 6));
        assert_eq!(header.length_bytes(), 64);
        assert_eq!(header.table_pointer, 0x30);
        assert_eq!(header.end(), 0x70);
    }

    #[test]
    fn test_vendor_param_header() {
        // Macronix: ID 0xFFC2, 4 DWORDs at 0x110
        let raw = [0xC2, 0x00, 0x01, 0x04, 0x10, 0x01, 0x00, 0xFF];
        let header = ParameterHeader::parse(&raw);

        assert_eq!(header.id, 0xFFC2);
        assert!(!header.is_basic());
        assert_eq!(header.table_pointer, 0x110);
        assert_eq!(param_id_name(header.id), None);
        assert_eq!(param_id_name(PARAM_ID_BASIC), Some("Basic Flash Parameters"));
    }

    #[test]
    fn test_revision_ordering() {
        assert!(SfdpRevision::new(1, 6).at_least(SfdpRevision::JESD216A));
        assert!(!SfdpRevision::JESD216.at_least(SfdpRevision::JESD216A));
        assert!(SfdpRevision::new(2, 0).at_least(SfdpRevision::new(1, 9)));
        assert_eq!(SfdpRevision::new(1, 6).to_string(), "1.6");
    }

    #[test]
    fn test_max_address() {
        assert_eq!(SFDP_MAX_ADDRESS, 0xFF_FFFF);
    }
}
