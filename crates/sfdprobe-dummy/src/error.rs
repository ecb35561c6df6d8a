//! Error types for the dummy flash

use thiserror::Error;

/// Dummy flash errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DummyError {
    /// Failure injected with [`DummyFlash::force_error`](crate::DummyFlash::force_error)
    #[error("{0}")]
    Forced(String),

    /// Opcode not emulated
    #[error("unsupported opcode 0x{0:02X}")]
    UnsupportedOpcode(u8),
}

impl DummyError {
    /// Build an injected failure carrying `msg`
    pub fn forced(msg: impl Into<String>) -> Self {
        Self::Forced(msg.into())
    }
}

/// Result type for dummy flash operations
pub type Result<T> = std::result::Result<T, DummyError>;
