//! Host-side stand-ins for timer registers and GPIO
//!
//! Available in tests and with the `mock` feature.

use crate::error::{PwmError, PwmResult};
use crate::gpio::PinDirection;
use crate::pin::Pin;
use crate::register::{Register, RegisterBlock};

/// In-memory register file that counts writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockRegisters {
    values: [u16; Register::COUNT],
    writes: usize,
}

impl MockRegisters {
    /// All registers zero, as after reset
    pub const fn new() -> Self {
        Self {
            values: [0; Register::COUNT],
            writes: 0,
        }
    }

    /// Preload `register` without counting a write
    pub fn with_value(mut self, register: Register, value: u16) -> Self {
        self.values[register.index()] = value;
        self
    }

    /// Current value of `register`
    pub fn value(&self, register: Register) -> u16 {
        self.values[register.index()]
    }

    /// Number of writes since creation or the last reset
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn reset_write_count(&mut self) {
        self.writes = 0;
    }
}

impl Default for MockRegisters {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterBlock for MockRegisters {
    fn read(&self, register: Register) -> u16 {
        self.values[register.index()]
    }

    fn write(&mut self, register: Register, value: u16) {
        self.values[register.index()] = value;
        self.writes += 1;
    }
}

/// Records which pins were switched to output
#[derive(Debug, Default)]
pub struct MockGpio {
    outputs: heapless::Vec<Pin, 32>,
    refuse: Option<Pin>,
}

impl MockGpio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail `set_output` for `pin`
    pub fn refusing(pin: Pin) -> Self {
        Self {
            outputs: heapless::Vec::new(),
            refuse: Some(pin),
        }
    }

    /// Pins configured as outputs, in call order
    pub fn outputs(&self) -> &[Pin] {
        &self.outputs
    }
}

impl PinDirection for MockGpio {
    fn set_output(&mut self, pin: Pin) -> PwmResult<()> {
        if self.refuse == Some(pin) {
            return Err(PwmError::Gpio);
        }
        self.outputs.push(pin).map_err(|_| PwmError::Gpio)
    }
}
