//! SPI command structure and opcodes
//!
//! This module provides the command type handed to programmers and the
//! JEDEC opcodes used by this crate.

mod command;
pub mod opcodes;

pub use command::SpiCommand;
pub use opcodes::*;
