//! The programmer seam

use crate::spi::SpiCommand;

/// A programmer able to run one SPI exchange at a time
///
/// [`execute`](SpiMaster::execute) either fills `cmd.read_buf` completely or
/// fails with the programmer's own error, which callers in this crate pass
/// back unchanged as [`Error::Transport`](crate::error::Error::Transport).
///
/// ```ignore
/// impl SpiMaster for Bridge {
///     type Error = io::Error;
///
///     fn max_read_len(&self) -> usize {
///         64
///     }
///
///     fn execute(&mut self, cmd: &mut SpiCommand<'_>) -> Result<(), io::Error> {
///         let mut header = [0u8; SpiCommand::MAX_HEADER_LEN];
///         let len = cmd.encode_header(&mut header);
///         self.write_then_read(&header[..len], cmd.read_buf)
///     }
/// }
/// ```
pub trait SpiMaster {
    /// Error returned when an exchange fails
    type Error;

    /// Largest read phase a single exchange may carry, 0 for no limit
    fn max_read_len(&self) -> usize;

    /// Run one exchange: send opcode, address and dummy cycles, then fill
    /// `cmd.read_buf`
    fn execute(&mut self, cmd: &mut SpiCommand<'_>) -> Result<(), Self::Error>;
}

impl<M: SpiMaster + ?Sized> SpiMaster for &mut M {
    type Error = M::Error;

    fn max_read_len(&self) -> usize {
        (**self).max_read_len()
    }

    fn execute(&mut self, cmd: &mut SpiCommand<'_>) -> Result<(), Self::Error> {
        (**self).execute(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sfdp::mock::MockMaster;
    use crate::spi::opcodes;

    fn read_through<M: SpiMaster>(mut master: M) -> Result<[u8; 2], M::Error> {
        let mut buf = [0u8; 2];
        let mut cmd = SpiCommand::read_3b(opcodes::RDSFDP, 1, &mut buf);
        master.execute(&mut cmd)?;
        Ok(buf)
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut master = MockMaster::new(vec![0x10, 0x20, 0x30]).with_max_read_len(7);
        assert_eq!((&mut master).max_read_len(), 7);
        assert_eq!(read_through(&mut master).unwrap(), [0x20, 0x30]);
        assert_eq!(master.transfers.len(), 1);
    }
}
