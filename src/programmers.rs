//! Programmer selection
//!
//! Programmers are named with a string of the form
//! `name` or `name:key1=value1,key2=value2`.

use std::collections::HashMap;
use std::path::PathBuf;

use sfdprobe_dummy::{DummyConfig, DummyError, DummyFlash};
use thiserror::Error;

/// Errors raised while opening a programmer
#[derive(Debug, Error)]
pub enum ProgrammerError {
    /// The programmer name is not known
    #[error("Unknown programmer: {0} (available: dummy)")]
    Unknown(String),

    /// An option is not of the form key=value
    #[error("Invalid parameter format: '{0}' (expected key=value)")]
    InvalidFormat(String),

    /// An option is not understood by the programmer
    #[error("Unknown parameter '{key}' for programmer {programmer}")]
    UnknownParameter { programmer: String, key: String },

    /// An option value could not be parsed
    #[error("Invalid value '{value}' for parameter '{key}'")]
    InvalidValue { key: String, value: String },

    /// The SFDP image file could not be read
    #[error("Failed to read SFDP image {}: {source}", path.display())]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parsed programmer parameters
#[derive(Debug, PartialEq, Eq)]
pub struct ProgrammerParams {
    /// Programmer name
    pub name: String,
    /// Key-value parameters
    pub params: HashMap<String, String>,
}

/// Parse a programmer string into name and parameters
pub fn parse_programmer_params(s: &str) -> Result<ProgrammerParams, ProgrammerError> {
    let (name, opts_str) = s.split_once(':').unwrap_or((s, ""));

    let mut params = HashMap::new();
    if !opts_str.is_empty() {
        for opt in opts_str.split(',') {
            let (key, value) = opt
                .split_once('=')
                .ok_or_else(|| ProgrammerError::InvalidFormat(opt.to_string()))?;
            params.insert(key.to_string(), value.to_string());
        }
    }

    Ok(ProgrammerParams {
        name: name.to_string(),
        params,
    })
}

/// Open the programmer named by `programmer`
pub fn open_programmer(programmer: &str) -> Result<DummyFlash, ProgrammerError> {
    let params = parse_programmer_params(programmer)?;

    match params.name.as_str() {
        "dummy" => open_dummy(&params),
        _ => Err(ProgrammerError::Unknown(params.name)),
    }
}

/// Build the dummy emulator
///
/// Options:
/// - `image=<file>` - SFDP region contents (default: MX25L12835F)
/// - `maxread=<n>` - largest read per exchange, 0 for unlimited
/// - `fail=<message>` - make every exchange fail with this message
fn open_dummy(params: &ProgrammerParams) -> Result<DummyFlash, ProgrammerError> {
    let mut config = DummyConfig::default();
    let mut fail = None;

    for (key, value) in &params.params {
        match key.as_str() {
            "image" => {
                let path = PathBuf::from(value);
                config.sfdp = std::fs::read(&path)
                    .map_err(|source| ProgrammerError::ImageRead { path, source })?;
                log::debug!("Loaded {} byte SFDP image from {}", config.sfdp.len(), value);
            }
            "maxread" => {
                config.max_read_len = value.parse().map_err(|_| ProgrammerError::InvalidValue {
                    key: key.clone(),
                    value: value.clone(),
                })?;
            }
            "fail" => fail = Some(DummyError::forced(value.as_str())),
            _ => {
                return Err(ProgrammerError::UnknownParameter {
                    programmer: params.name.clone(),
                    key: key.clone(),
                })
            }
        }
    }

    let mut flash = DummyFlash::new(config);
    flash.force_error(fail);
    Ok(flash)
}
