//! Named bit fields inside SFDP parameter tables
//!
//! A [`Param`] locates a value by table ID rather than table index, so the
//! same lookup works regardless of where a chip places its tables.

use super::types::{SfdpRevision, PARAM_ID_BASIC};

/// A bit field inside a parameter table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    /// Short name used for display and CLI lookup
    pub name: &'static str,
    /// Parameter table ID
    pub table: u16,
    /// Oldest table revision defining this field
    pub min_revision: SfdpRevision,
    /// DWORD index within the table (0-based)
    pub dword: usize,
    /// Position of the lowest bit
    pub shift: u32,
    /// Width of the field in bits
    pub bits: u32,
}

impl Param {
    const fn bfpt(name: &'static str, dword: usize, shift: u32, bits: u32) -> Self {
        Self {
            name,
            table: PARAM_ID_BASIC,
            min_revision: SfdpRevision::JESD216,
            dword,
            shift,
            bits,
        }
    }

    /// Extract this field from a DWORD
    pub fn extract(&self, dword: u32) -> u64 {
        let value = (dword as u64) >> self.shift;
        if self.bits >= 32 {
            value
        } else {
            value & ((1u64 << self.bits) - 1)
        }
    }

    /// Look up a known parameter by name
    pub fn by_name(name: &str) -> Option<&'static Param> {
        KNOWN_PARAMS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

// ============================================================================
// Basic Flash Parameter Table, DWORD 1
// ============================================================================

/// Block/sector erase sizes (01b: 4 KiB erase uniformly available)
pub const BLOCK_SECTOR_ERASE_SIZE: Param = Param::bfpt("block_sector_erase_size", 0, 0, 2);
/// Write granularity (0: 1 byte, 1: 64 bytes or more)
pub const WRITE_GRANULARITY: Param = Param::bfpt("write_granularity", 0, 2, 1);
/// Status register is volatile and needs a write enable first
pub const WRITE_ENABLE_INSTRUCTION_REQUIRED: Param =
    Param::bfpt("write_enable_instruction_required", 0, 3, 1);
/// Write enable opcode for volatile status register (0: 0x50, 1: 0x06)
pub const WRITE_ENABLE_OPCODE_SELECT: Param = Param::bfpt("write_enable_opcode_select", 0, 4, 1);
/// 4 KiB erase opcode
pub const ERASE_4K_OPCODE: Param = Param::bfpt("erase_4k_opcode", 0, 8, 8);
/// Supports 1-1-2 fast read
pub const FAST_READ_112: Param = Param::bfpt("fast_read_112", 0, 16, 1);
/// Address bytes (00b: 3 only, 01b: 3 or 4, 10b: 4 only)
pub const ADDRESS_BYTES: Param = Param::bfpt("address_bytes", 0, 17, 2);
/// Supports double transfer rate clocking
pub const DTR_CLOCKING: Param = Param::bfpt("dtr_clocking", 0, 19, 1);
/// Supports 1-2-2 fast read
pub const FAST_READ_122: Param = Param::bfpt("fast_read_122", 0, 20, 1);
/// Supports 1-4-4 fast read
pub const FAST_READ_144: Param = Param::bfpt("fast_read_144", 0, 21, 1);
/// Supports 1-1-4 fast read
pub const FAST_READ_114: Param = Param::bfpt("fast_read_114", 0, 22, 1);

// ============================================================================
// Basic Flash Parameter Table, DWORD 2
// ============================================================================

/// Raw flash memory density field
///
/// See [`Sfdp::density_bytes`](super::Sfdp::density_bytes) for the decoded value.
pub const FLASH_MEMORY_DENSITY: Param = Param::bfpt("flash_memory_density", 1, 0, 32);

/// All parameters known by name
pub const KNOWN_PARAMS: &[Param] = &[
    BLOCK_SECTOR_ERASE_SIZE,
    WRITE_GRANULARITY,
    WRITE_ENABLE_INSTRUCTION_REQUIRED,
    WRITE_ENABLE_OPCODE_SELECT,
    ERASE_4K_OPCODE,
    FAST_READ_112,
    ADDRESS_BYTES,
    DTR_CLOCKING,
    FAST_READ_122,
    FAST_READ_144,
    FAST_READ_114,
    FLASH_MEMORY_DENSITY,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract() {
        let dword = 0xFFF3_20E5;
        assert_eq!(BLOCK_SECTOR_ERASE_SIZE.extract(dword), 0b01);
        assert_eq!(ERASE_4K_OPCODE.extract(dword), 0x20);
        assert_eq!(FAST_READ_112.extract(dword), 1);
        assert_eq!(ADDRESS_BYTES.extract(dword), 0b01);
        assert_eq!(FLASH_MEMORY_DENSITY.extract(0x07FF_FFFF), 0x07FF_FFFF);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(Param::by_name("erase_4k_opcode"), Some(&ERASE_4K_OPCODE));
        assert_eq!(Param::by_name("ERASE_4K_OPCODE"), Some(&ERASE_4K_OPCODE));
        assert_eq!(Param::by_name("nonexistent"), None);
    }
}
