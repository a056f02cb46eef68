use std::path::PathBuf;

use avr_pwm::{Pin, PwmError};
use thiserror::Error;

/// Errors reported by the inspection tool.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("{pin}: {source}")]
    Pwm { pin: Pin, source: PwmError },
    #[error("unknown {kind} '{value}'")]
    UnknownName { kind: &'static str, value: String },
    #[error("--pin is required unless --config or --list is given")]
    MissingPin,
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl InspectError {
    pub(crate) fn pwm(pin: Pin) -> impl FnOnce(PwmError) -> InspectError {
        move |source| InspectError::Pwm { pin, source }
    }
}
