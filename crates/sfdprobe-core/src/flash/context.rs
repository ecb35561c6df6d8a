//! Per-chip session state

use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::OnceCell;

use crate::error::Error;
use crate::programmer::SpiMaster;
use crate::sfdp::{Param, Sfdp, SfdpReader};

/// A flash chip reached through a programmer
///
/// The SFDP image is acquired by the first call to [`sfdp`](Flash::sfdp) and
/// the outcome, success or failure, is kept for the lifetime of this value.
/// A failed acquisition is never retried: every later call returns the same
/// error without touching the programmer. Create a new `Flash` to start a new
/// session.
///
/// The programmer sits behind a mutex, so one exchange is in flight at a
/// time, and concurrent first callers of `sfdp` wait for a single
/// acquisition.
pub struct Flash<M: SpiMaster> {
    master: Mutex<M>,
    sfdp: OnceCell<Result<Sfdp, Error<M::Error>>>,
}

impl<M: SpiMaster> Flash<M>
where
    M::Error: Clone,
{
    /// Start a session on a programmer
    pub fn new(master: M) -> Self {
        Self {
            master: Mutex::new(master),
            sfdp: OnceCell::new(),
        }
    }

    /// Lock the programmer
    ///
    /// Do not call [`sfdp`](Flash::sfdp) or [`read_sfdp`](Flash::read_sfdp)
    /// from the same thread while the guard is held.
    pub fn master(&self) -> MutexGuard<'_, M> {
        self.master.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// End the session and give back the programmer
    pub fn into_inner(self) -> M {
        self.master
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Read raw SFDP bytes at `offset`, bypassing the cache
    ///
    /// See [`SfdpReader::read_at`].
    pub fn read_sfdp(&self, buf: &mut [u8], offset: u64) -> Result<usize, Error<M::Error>> {
        let mut master = self.master();
        SfdpReader::new(&mut *master).read_at(buf, offset)
    }

    /// The chip's SFDP image
    ///
    /// Only the first call talks to the programmer.
    pub fn sfdp(&self) -> Result<&Sfdp, Error<M::Error>> {
        self.sfdp
            .get_or_init(|| self.acquire())
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Whether the SFDP acquisition has already happened
    pub fn is_cached(&self) -> bool {
        self.sfdp.get().is_some()
    }

    /// Read DWORD `dword` of SFDP table `table`
    ///
    /// Fails with the acquisition error if the SFDP image could not be read.
    pub fn dword(&self, table: usize, dword: usize) -> Result<u32, Error<M::Error>> {
        Ok(self.sfdp()?.dword(table, dword)?)
    }

    /// Look up an SFDP parameter
    pub fn param(&self, param: &Param) -> Result<u64, Error<M::Error>> {
        Ok(self.sfdp()?.param(param)?)
    }

    fn acquire(&self) -> Result<Sfdp, Error<M::Error>> {
        log::debug!("Acquiring SFDP image");
        let mut master = self.master();
        let sfdp = Sfdp::read::<_, M::Error>(&mut SfdpReader::new(&mut *master))?;
        log::debug!(
            "SFDP revision {} with {} parameter table(s)",
            sfdp.header().revision,
            sfdp.tables().len()
        );
        Ok(sfdp)
    }
}
