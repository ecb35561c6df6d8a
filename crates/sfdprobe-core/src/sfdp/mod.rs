//! SFDP (Serial Flash Discoverable Parameters) access
//!
//! This module implements reading SFDP data structures as defined by
//! JEDEC JESD216. SFDP provides a standardized way for flash chips to
//! describe their capabilities.
//!
//! # Overview
//!
//! SFDP data is stored in a reserved area of the flash chip and can be
//! read using the RDSFDP command (0x5A). The structure contains:
//!
//! - An SFDP header with signature and revision info
//! - One or more parameter headers describing available tables
//! - Parameter tables containing capability information
//!
//! [`SfdpReader`] turns byte-range reads into RDSFDP transfers, and
//! [`Sfdp`] holds the parsed image with DWORD and parameter accessors.
//!
//! # Usage
//!
//! ```ignore
//! use sfdprobe_core::sfdp::{self, Sfdp, SfdpReader};
//!
//! let sfdp: Sfdp = Sfdp::read(&mut SfdpReader::new(&mut master))?;
//! println!("Flash size: {} bytes", sfdp.density_bytes()?);
//! println!("4K erase opcode: 0x{:02X}", sfdp.param(&sfdp::ERASE_4K_OPCODE)?);
//! ```

mod image;
#[cfg(test)]
pub(crate) mod mock;
mod param;
mod reader;
mod types;

pub use image::Sfdp;
pub use param::*;
pub use reader::{check_range, ReadAt, SfdpReader};
pub use types::*;
