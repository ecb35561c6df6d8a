//! Flash chip session
//!
//! [`Flash`] owns a programmer for the lifetime of a chip session and
//! acquires the chip's SFDP image on first use.

mod context;

pub use context::Flash;
