//! Error types for PWM configuration requests

use core::fmt;

/// Result type used by every encoder operation
pub type PwmResult<T> = Result<T, PwmError>;

/// Reasons a PWM configuration request is rejected
///
/// Every variant is returned before any register is written, except
/// [`PwmError::InvalidFrequency`], which is reported after the clock-select
/// field has been cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmError {
    /// Pin is not PWM-capable on the active board
    InvalidPin,
    /// Frequency is not achievable on the pin's timer
    InvalidFrequency,
    /// Duty cycle percentage outside `0..=100`
    InvalidDutyCycleValue,
    /// Raw enumerated value outside every known case
    UndefinedValue,
    /// Operation declared but not available on this board
    Unsupported,
    /// GPIO collaborator refused to configure the pin
    Gpio,
}

impl fmt::Display for PwmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PwmError::InvalidPin => write!(f, "Pin is not PWM-capable on this board"),
            PwmError::InvalidFrequency => write!(f, "Frequency not available on this timer"),
            PwmError::InvalidDutyCycleValue => write!(f, "Duty cycle must be within 0..=100"),
            PwmError::UndefinedValue => write!(f, "Undefined enumerated value"),
            PwmError::Unsupported => write!(f, "Operation not supported"),
            PwmError::Gpio => write!(f, "GPIO pin configuration failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PwmError {}

#[cfg(feature = "defmt")]
impl defmt::Format for PwmError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PwmError::InvalidPin => defmt::write!(fmt, "InvalidPin"),
            PwmError::InvalidFrequency => defmt::write!(fmt, "InvalidFrequency"),
            PwmError::InvalidDutyCycleValue => defmt::write!(fmt, "InvalidDutyCycleValue"),
            PwmError::UndefinedValue => defmt::write!(fmt, "UndefinedValue"),
            PwmError::Unsupported => defmt::write!(fmt, "Unsupported"),
            PwmError::Gpio => defmt::write!(fmt, "Gpio"),
        }
    }
}

impl embedded_hal::pwm::Error for PwmError {
    fn kind(&self) -> embedded_hal::pwm::ErrorKind {
        embedded_hal::pwm::ErrorKind::Other
    }
}
