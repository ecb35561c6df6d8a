//! Programmer traits and abstractions
//!
//! This module defines the transport capability every programmer provides
//! to reach a flash chip.

mod traits;

pub use traits::*;
