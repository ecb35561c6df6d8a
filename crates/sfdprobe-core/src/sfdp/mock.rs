//! Scripted programmer used by the unit tests

use thiserror::Error;

use crate::programmer::SpiMaster;
use crate::spi::{opcodes, SpiCommand};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct MockError(String);

impl MockError {
    pub fn new(msg: &str) -> Self {
        Self(msg.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub opcode: u8,
    pub address: u32,
    pub dummy_cycles: u8,
    pub len: usize,
}

/// Serves RDSFDP reads from `image`, 0xFF past its end
pub struct MockMaster {
    pub image: Vec<u8>,
    pub max_read_len: usize,
    pub transfers: Vec<Transfer>,
    pub fail: Option<MockError>,
    fail_after: Option<(usize, MockError)>,
}

impl MockMaster {
    pub fn new(image: Vec<u8>) -> Self {
        Self {
            image,
            max_read_len: 0,
            transfers: Vec::new(),
            fail: None,
            fail_after: None,
        }
    }

    pub fn with_max_read_len(mut self, len: usize) -> Self {
        self.max_read_len = len;
        self
    }

    /// Let `ok` transfers succeed, then fail every following one
    pub fn fail_after(mut self, ok: usize, err: MockError) -> Self {
        self.fail_after = Some((ok, err));
        self
    }
}

impl SpiMaster for MockMaster {
    type Error = MockError;

    fn max_read_len(&self) -> usize {
        self.max_read_len
    }

    fn execute(&mut self, cmd: &mut SpiCommand<'_>) -> Result<(), MockError> {
        self.transfers.push(Transfer {
            opcode: cmd.opcode,
            address: cmd.address,
            dummy_cycles: cmd.dummy_cycles,
            len: cmd.read_buf.len(),
        });

        if let Some(err) = &self.fail {
            return Err(err.clone());
        }
        if let Some((ok, err)) = &self.fail_after {
            if self.transfers.len() > *ok {
                return Err(err.clone());
            }
        }
        assert_eq!(cmd.opcode, opcodes::RDSFDP);

        let addr = cmd.address as usize;
        for (i, byte) in cmd.read_buf.iter_mut().enumerate() {
            *byte = self.image.get(addr + i).copied().unwrap_or(0xFF);
        }
        Ok(())
    }
}
