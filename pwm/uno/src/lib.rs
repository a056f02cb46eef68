#![no_std]
#![cfg_attr(not(feature = "avr"), forbid(unsafe_code))]

//! # Arduino Uno PWM profile
//!
//! Pin and timer tables for the ATmega328P at 16 MHz.
//!
//! | Pin | Timer  | Channel | Width  |
//! |-----|--------|---------|--------|
//! | D6  | Timer0 | A       | 8-bit  |
//! | D5  | Timer0 | B       | 8-bit  |
//! | D9  | Timer1 | A       | 16-bit |
//! | D10 | Timer1 | B       | 16-bit |
//! | D11 | Timer2 | A       | 8-bit  |
//! | D3  | Timer2 | B       | 8-bit  |
//!
//! ## Features
//! - `avr` - [`Atmega328p`] register block for the real device
//! - `defmt` - `defmt::Format` for pwm-core types

pub mod bits;
pub mod timers;

#[cfg(feature = "avr")]
pub mod atmega328p;

#[cfg(feature = "avr")]
pub use atmega328p::Atmega328p;

use pwm_core::{BoardProfile, Channel, Hertz, Pin, PinAssignment, Timer, TimerProfile};

pub const D3: Pin = Pin::new(3);
pub const D5: Pin = Pin::new(5);
pub const D6: Pin = Pin::new(6);
pub const D9: Pin = Pin::new(9);
pub const D10: Pin = Pin::new(10);
pub const D11: Pin = Pin::new(11);

/// System clock of the Uno
pub const CLOCK: Hertz = Hertz(16_000_000);

static PINS: [PinAssignment; 6] = [
    PinAssignment::new(D3, Timer::Timer2, Channel::B),
    PinAssignment::new(D5, Timer::Timer0, Channel::B),
    PinAssignment::new(D6, Timer::Timer0, Channel::A),
    PinAssignment::new(D9, Timer::Timer1, Channel::A),
    PinAssignment::new(D10, Timer::Timer1, Channel::B),
    PinAssignment::new(D11, Timer::Timer2, Channel::A),
];

static TIMERS: [TimerProfile; 3] = [timers::TIMER0, timers::TIMER1, timers::TIMER2];

/// Arduino Uno board profile
pub static UNO: BoardProfile = BoardProfile {
    name: "Arduino Uno",
    clock: CLOCK,
    pins: &PINS,
    timers: &TIMERS,
};
