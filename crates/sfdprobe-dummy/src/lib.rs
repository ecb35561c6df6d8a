//! sfdprobe-dummy - In-memory flash emulator for testing
//!
//! This crate provides a dummy programmer that serves a flash chip's SFDP
//! region from memory. It records every exchange and can be told to fail,
//! which makes it useful for testing without real hardware.

mod error;
mod sfdp_images;

pub use error::{DummyError, Result};
pub use sfdp_images::MX25L12835F_SFDP;

use sfdprobe_core::programmer::SpiMaster;
use sfdprobe_core::spi::{opcodes, SpiCommand};

/// Configuration for the dummy flash
#[derive(Debug, Clone)]
pub struct DummyConfig {
    /// Contents of the SFDP region, starting at SFDP address 0
    pub sfdp: Vec<u8>,
    /// Largest read served by one exchange (0 for unlimited)
    pub max_read_len: usize,
}

impl Default for DummyConfig {
    fn default() -> Self {
        Self {
            sfdp: MX25L12835F_SFDP.to_vec(),
            max_read_len: 4096,
        }
    }
}

/// One exchange seen by the dummy flash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    /// Bytes clocked out before the read phase (opcode, address, dummy)
    pub header: Vec<u8>,
    /// Number of bytes in the read phase
    pub read_len: usize,
}

impl Transfer {
    /// The opcode of this exchange
    pub fn opcode(&self) -> u8 {
        self.header[0]
    }

    /// The address sent with this exchange
    pub fn address(&self) -> Option<u32> {
        SpiCommand::decode_address(&self.header)
    }
}

/// Dummy flash programmer
///
/// Answers RDSFDP from [`DummyConfig::sfdp`]. Reads past the end of the
/// SFDP region return 0xFF, like an unimplemented area on a real chip.
pub struct DummyFlash {
    config: DummyConfig,
    transfers: Vec<Transfer>,
    force_error: Option<DummyError>,
}

impl DummyFlash {
    /// Create a new dummy flash with the given configuration
    pub fn new(config: DummyConfig) -> Self {
        Self {
            config,
            transfers: Vec::new(),
            force_error: None,
        }
    }

    /// Create a new dummy flash with default configuration (MX25L12835F)
    pub fn new_default() -> Self {
        Self::new(DummyConfig::default())
    }

    /// Get the configuration
    pub fn config(&self) -> &DummyConfig {
        &self.config
    }

    /// Replace the SFDP region
    pub fn set_sfdp(&mut self, sfdp: Vec<u8>) {
        self.config.sfdp = sfdp;
    }

    /// Every exchange executed so far, including failed ones
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    /// Make every following exchange fail with `err`, or succeed again with `None`
    pub fn force_error(&mut self, err: Option<DummyError>) {
        self.force_error = err;
    }

    fn record(&mut self, cmd: &SpiCommand<'_>) {
        let mut header = [0u8; SpiCommand::MAX_HEADER_LEN];
        let len = cmd.encode_header(&mut header);
        self.transfers.push(Transfer {
            header: header[..len].to_vec(),
            read_len: cmd.read_buf.len(),
        });
    }

    fn handle_read_sfdp(&self, cmd: &mut SpiCommand<'_>) -> Result<()> {
        let addr = cmd.address as usize;
        for (i, byte) in cmd.read_buf.iter_mut().enumerate() {
            *byte = self.config.sfdp.get(addr + i).copied().unwrap_or(0xFF);
        }
        Ok(())
    }
}

impl SpiMaster for DummyFlash {
    type Error = DummyError;

    fn max_read_len(&self) -> usize {
        self.config.max_read_len
    }

    fn execute(&mut self, cmd: &mut SpiCommand<'_>) -> Result<()> {
        self.record(cmd);
        if let Some(err) = &self.force_error {
            log::trace!("dummy: failing opcode 0x{:02X}: {}", cmd.opcode, err);
            return Err(err.clone());
        }

        match cmd.opcode {
            opcodes::RDSFDP => self.handle_read_sfdp(cmd),
            opcode => Err(DummyError::UnsupportedOpcode(opcode)),
        }
    }
}
