//! JEDEC SPI flash opcodes

/// Read the SFDP region, 3-byte address
pub const RDSFDP: u8 = 0x5A;

/// Dummy clocks between the RDSFDP address and the first data byte
pub const RDSFDP_DUMMY_CYCLES: u8 = 8;
