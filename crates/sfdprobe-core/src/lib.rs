//! sfdprobe-core - SFDP acquisition for SPI flash chips
//!
//! This crate reads the Serial Flash Discoverable Parameters (SFDP) region of
//! a SPI flash chip through a programmer implementing [`programmer::SpiMaster`].
//! It is made of three layers:
//!
//! - [`sfdp::SfdpReader`] - bounded random-access reads over the SFDP address
//!   space, split into transfers the programmer can handle
//! - [`flash::Flash`] - owns the programmer and acquires the SFDP image once,
//!   remembering the outcome for the rest of the session
//! - [`sfdp::Sfdp`] - the parsed image, with DWORD and parameter accessors
//!
//! # Example
//!
//! ```ignore
//! use sfdprobe_core::flash::Flash;
//!
//! let flash = Flash::new(master);
//! let sfdp = flash.sfdp()?;
//! println!("SFDP revision {}", sfdp.header().revision);
//! println!("BFPT DWORD 1: 0x{:08X}", sfdp.dword(0, 0)?);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod error;
pub mod flash;
pub mod programmer;
pub mod sfdp;
pub mod spi;

pub use error::{Error, Result};
