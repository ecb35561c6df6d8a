//! Error types for sfdprobe-core
//!
//! [`Error`] is generic over the programmer's own error type so that
//! transport failures reach the caller unchanged.

use core::convert::Infallible;

use thiserror::Error;

use crate::sfdp::{SfdpRevision, SFDP_MAX_ADDRESS};

/// Errors raised while resolving data inside a parsed SFDP image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SfdpError {
    /// No parameter header exists at this index
    #[error("SFDP table {table} does not exist")]
    TableNotFound {
        /// Requested table index
        table: usize,
    },

    /// The DWORD does not lie within the table or the image
    #[error("DWORD {dword} is out of bounds for SFDP table {table}")]
    OutOfBounds {
        /// Table index
        table: usize,
        /// DWORD index within the table
        dword: usize,
    },

    /// No table with this ID and a sufficient revision exists
    #[error("no SFDP table with ID 0x{id:04X} and a compatible revision")]
    ParamNotFound {
        /// Parameter table ID
        id: u16,
    },

    /// BFPT DWORD 2 does not encode a usable density
    #[error("invalid flash density field 0x{0:08X}")]
    InvalidDensity(u32),
}

/// Core error type, generic over the transport error `E`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error<E> {
    /// The last byte of a read would lie past [`SFDP_MAX_ADDRESS`]
    #[error("SFDP address {addr:#x} out of range (max {max:#x})", max = SFDP_MAX_ADDRESS)]
    AddressOutOfRange {
        /// Starting offset of the rejected read
        addr: u64,
    },

    /// Failure reported by the programmer, passed through unchanged
    #[error(transparent)]
    Transport(E),

    /// The SFDP header does not carry the "SFDP" signature
    #[error("invalid SFDP signature 0x{0:08X}")]
    InvalidSignature(u32),

    /// The SFDP major revision is not supported
    #[error("unsupported SFDP revision {0}")]
    UnsupportedRevision(SfdpRevision),

    /// A reader returned fewer bytes than requested
    #[error("short SFDP read at {addr:#x}: expected {expected} bytes, got {got}")]
    ShortRead {
        /// Starting offset of the read
        addr: u64,
        /// Number of bytes requested
        expected: usize,
        /// Number of bytes returned
        got: usize,
    },

    /// Lookup inside the parsed image failed
    #[error(transparent)]
    Sfdp(#[from] SfdpError),
}

impl<E> From<Infallible> for Error<E> {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}

/// Result type alias using the core [`Error`]
pub type Result<T, E> = core::result::Result<T, Error<E>>;
