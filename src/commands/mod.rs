//! CLI command implementations
//!
//! Every command works on a [`Flash`](sfdprobe_core::flash::Flash) session.
//! `dump`, `dword` and `param` go through the session's SFDP cache, `read`
//! talks to the chip directly.

mod dump;
mod lookup;
mod read;

pub use dump::run_dump;
pub use lookup::{list_params, run_dword, run_param};
pub use read::run_read;

/// Result type shared by the commands
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;
