#![no_std]

//! # AVR PWM
//!
//! Entry point for firmware: re-exports [`pwm_core`] and binds it to the
//! board chosen with a Cargo feature.
//!
//! ```toml
//! [dependencies]
//! avr-pwm = { version = "0.1", default-features = false, features = ["uno", "avr"] }
//! ```
//!
//! ```ignore
//! use avr_pwm::{board, FrequencyChoice, OutputType, Pwm, WaveformMode};
//!
//! let regs = unsafe { avr_pwm::Registers::steal() };
//! let mut pwm = avr_pwm::pwm(regs);
//! let pin = avr_pwm::pins::D6;
//! pwm.set_mode(pin, WaveformMode::Fast)?;
//! pwm.set_freq(pin, FrequencyChoice::Hz976_56)?;
//! pwm.set_duty_cycle(pin, 25)?;
//! pwm.set_output_type(pin, OutputType::Enabled)?;
//! ```

#[cfg(not(any(feature = "uno")))]
compile_error!("avr-pwm: select a board feature, e.g. `uno`");

pub use pwm_core::*;

#[cfg(feature = "uno")]
use pwm_uno as active;

/// PWM-capable pins of the selected board
pub mod pins {
    #[cfg(feature = "uno")]
    pub use pwm_uno::{D10, D11, D3, D5, D6, D9};
}

/// Register bit positions of the selected board's MCU
pub use active::bits;

/// Memory-mapped registers of the selected board
#[cfg(feature = "avr")]
pub use active::Atmega328p as Registers;

/// Profile of the board selected at compile time
pub fn board() -> &'static BoardProfile {
    &active::UNO
}

/// Encoder for the selected board
pub fn pwm<R: RegisterBlock>(regs: R) -> Pwm<R> {
    Pwm::new(board(), regs)
}
