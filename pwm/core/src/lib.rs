#![no_std]
#![forbid(unsafe_code)]

//! # PWM Core
//!
//! Board-agnostic encoder for AVR-style timer PWM. It translates a request
//! such as "pin 6, fast PWM, 976 Hz, 25 %, non-inverted" into bit patterns
//! for the timer's control and compare registers.
//!
//! - [`BoardProfile`] holds the pin→timer table and the per-timer encoding
//!   tables of one board.
//! - [`RegisterBlock`] is the register backend: real hardware on target,
//!   [`mock::MockRegisters`] on the host.
//! - [`Pwm`] performs the operations.
//!
//! Waveform mode and output type fall back to a safe default (bits cleared)
//! when a timer has no entry for the requested value. Frequency and duty
//! cycle are validated strictly and rejected with a [`PwmError`].

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod board;
pub mod channel;
pub mod config;
pub mod driver;
pub mod error;
pub mod frequency;
pub mod gpio;
pub mod mode;
pub mod pin;
pub mod register;
pub mod shared;
pub mod units;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use board::{AdvancedRule, BoardProfile, CompareOutputBits, TimerProfile};
pub use channel::PwmChannel;
pub use config::PwmSignalConfig;
pub use driver::{Pwm, RegisterSnapshot};
pub use error::{PwmError, PwmResult};
pub use frequency::{ClockSelect, FrequencyChoice};
pub use gpio::PinDirection;
pub use mode::{AdvancedMode, OutputType, WaveformMode};
pub use pin::{Channel, CounterWidth, Pin, PinAssignment, Timer};
pub use register::{BitField, ControlBits, Register, RegisterBlock, RegisterKind};
pub use shared::SharedPwm;
pub use units::{FromValueType, Hertz, MilliHertz};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests;
