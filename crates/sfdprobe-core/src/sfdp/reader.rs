//! Bounded random-access reads over the SFDP address space

use crate::error::Error;
use crate::programmer::SpiMaster;
use crate::spi::{opcodes, SpiCommand};

use super::types::SFDP_MAX_ADDRESS;

/// Random-access byte source
///
/// `read_at` fills `buf` with bytes starting at `offset` and returns how many
/// bytes were written. Implementations may return fewer bytes than requested
/// only when the source ends before `buf` is full.
pub trait ReadAt {
    /// Error returned when the read fails
    type Error;

    /// Read bytes starting at `offset` into `buf`
    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> Result<usize, Self::Error>;
}

impl ReadAt for &[u8] {
    type Error = core::convert::Infallible;

    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> Result<usize, Self::Error> {
        let start = match usize::try_from(offset) {
            Ok(start) if start < self.len() => start,
            _ => return Ok(0),
        };
        let len = core::cmp::min(buf.len(), self.len() - start);
        buf[..len].copy_from_slice(&self[start..start + len]);
        Ok(len)
    }
}

impl<R: ReadAt + ?Sized> ReadAt for &mut R {
    type Error = R::Error;

    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> Result<usize, Self::Error> {
        (**self).read_at(buf, offset)
    }
}

/// Check that `len` bytes starting at `offset` fit below [`SFDP_MAX_ADDRESS`]
///
/// An empty range only requires `offset` itself to be valid.
pub fn check_range<E>(offset: u64, len: usize) -> Result<(), Error<E>> {
    let last = offset.saturating_add((len as u64).saturating_sub(1));
    if offset > SFDP_MAX_ADDRESS || last > SFDP_MAX_ADDRESS {
        return Err(Error::AddressOutOfRange { addr: offset });
    }
    Ok(())
}

/// Reader for the SFDP address space of a chip
///
/// Each call to [`read_at`](SfdpReader::read_at) is checked against
/// [`SFDP_MAX_ADDRESS`] before anything is sent to the programmer, then split
/// into RDSFDP transfers of at most [`SpiMaster::max_read_len`] bytes.
/// The reader keeps no state between calls.
pub struct SfdpReader<M> {
    master: M,
}

impl<M: SpiMaster> SfdpReader<M> {
    /// Create a reader on top of a programmer
    ///
    /// Pass `&mut master` to keep ownership of the programmer.
    pub fn new(master: M) -> Self {
        Self { master }
    }

    /// Give back the programmer
    pub fn into_inner(self) -> M {
        self.master
    }

    /// Read `buf.len()` bytes of SFDP data starting at `offset`
    ///
    /// Returns the number of bytes read, which is always `buf.len()` on
    /// success. A programmer failure aborts the read and is returned as
    /// [`Error::Transport`] without further context.
    pub fn read_at(&mut self, buf: &mut [u8], offset: u64) -> Result<usize, Error<M::Error>> {
        check_range(offset, buf.len())?;
        if buf.is_empty() {
            return Ok(0);
        }

        let chunk_size = match self.master.max_read_len() {
            0 => buf.len(),
            max => max,
        };

        let mut addr = offset;
        for chunk in buf.chunks_mut(chunk_size) {
            log::trace!("RDSFDP 0x{:06X} ({} bytes)", addr, chunk.len());

            let len = chunk.len();
            // check_range keeps every chunk address within 24 bits
            let mut cmd = SpiCommand::read_3b(opcodes::RDSFDP, addr as u32, chunk)
                .with_dummy_cycles(opcodes::RDSFDP_DUMMY_CYCLES);
            self.master.execute(&mut cmd).map_err(Error::Transport)?;
            addr += len as u64;
        }

        Ok(buf.len())
    }
}

impl<M: SpiMaster> ReadAt for SfdpReader<M> {
    type Error = Error<M::Error>;

    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> Result<usize, Self::Error> {
        SfdpReader::read_at(self, buf, offset)
    }
}
