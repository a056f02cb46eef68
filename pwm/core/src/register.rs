//! Typed access to timer control and compare registers
//!
//! Encoders never touch memory directly. They describe each change as a
//! [`BitField`] (bits to clear, bits to set) and hand it to a
//! [`RegisterBlock`], which is either real hardware or a mock.

use core::fmt;

use crate::pin::{Channel, Timer};

/// Register role within a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterKind {
    /// Control register A: waveform bits and compare-output connection
    ControlA,
    /// Control register B: waveform bits and clock select
    ControlB,
    /// Compare register for channel A
    CompareA,
    /// Compare register for channel B
    CompareB,
    /// Input-capture register
    InputCapture,
}

impl RegisterKind {
    /// Registers per timer
    pub const COUNT: usize = 5;

    const fn slot(self) -> usize {
        match self {
            RegisterKind::ControlA => 0,
            RegisterKind::ControlB => 1,
            RegisterKind::CompareA => 2,
            RegisterKind::CompareB => 3,
            RegisterKind::InputCapture => 4,
        }
    }
}

/// A single timer register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Register {
    pub timer: Timer,
    pub kind: RegisterKind,
}

impl Register {
    /// Number of distinct registers across all timers
    pub const COUNT: usize = Timer::ALL.len() * RegisterKind::COUNT;

    pub const fn new(timer: Timer, kind: RegisterKind) -> Self {
        Self { timer, kind }
    }

    pub const fn control_a(timer: Timer) -> Self {
        Self::new(timer, RegisterKind::ControlA)
    }

    pub const fn control_b(timer: Timer) -> Self {
        Self::new(timer, RegisterKind::ControlB)
    }

    /// Compare register feeding `channel`
    pub const fn compare(timer: Timer, channel: Channel) -> Self {
        match channel {
            Channel::A => Self::new(timer, RegisterKind::CompareA),
            Channel::B => Self::new(timer, RegisterKind::CompareB),
        }
    }

    pub const fn input_capture(timer: Timer) -> Self {
        Self::new(timer, RegisterKind::InputCapture)
    }

    /// Every register of `timer`
    pub const fn all_of(timer: Timer) -> [Register; RegisterKind::COUNT] {
        [
            Self::control_a(timer),
            Self::control_b(timer),
            Self::compare(timer, Channel::A),
            Self::compare(timer, Channel::B),
            Self::input_capture(timer),
        ]
    }

    /// Dense index in `0..Register::COUNT`
    pub const fn index(self) -> usize {
        self.timer.index() as usize * RegisterKind::COUNT + self.kind.slot()
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.timer.index();
        match self.kind {
            RegisterKind::ControlA => write!(f, "TCCR{}A", n),
            RegisterKind::ControlB => write!(f, "TCCR{}B", n),
            RegisterKind::CompareA => write!(f, "OCR{}A", n),
            RegisterKind::CompareB => write!(f, "OCR{}B", n),
            RegisterKind::InputCapture => write!(f, "ICR{}", n),
        }
    }
}

/// Read-modify-write description: `new = (old & !clear) | set`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitField {
    pub set: u8,
    pub clear: u8,
}

impl BitField {
    /// Touches nothing
    pub const EMPTY: BitField = BitField { set: 0, clear: 0 };

    pub const fn new(set: u8, clear: u8) -> Self {
        Self { set, clear }
    }

    /// Only set `mask`
    pub const fn set(mask: u8) -> Self {
        Self { set: mask, clear: 0 }
    }

    /// Only clear `mask`
    pub const fn clear(mask: u8) -> Self {
        Self { set: 0, clear: mask }
    }

    pub const fn is_empty(self) -> bool {
        self.set == 0 && self.clear == 0
    }

    /// Apply to a register value
    pub const fn apply(self, value: u16) -> u16 {
        (value & !(self.clear as u16)) | self.set as u16
    }

    /// Compose: `other` is applied after `self`
    pub const fn then(self, other: BitField) -> BitField {
        BitField {
            set: (self.set & !other.clear) | other.set,
            clear: (self.clear & !other.set) | other.clear,
        }
    }
}

/// Bit pattern spanning a timer's control register pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlBits {
    pub a: BitField,
    pub b: BitField,
}

impl ControlBits {
    pub const EMPTY: ControlBits = ControlBits {
        a: BitField::EMPTY,
        b: BitField::EMPTY,
    };

    pub const fn new(a: BitField, b: BitField) -> Self {
        Self { a, b }
    }

    pub const fn is_empty(self) -> bool {
        self.a.is_empty() && self.b.is_empty()
    }
}

/// Backing store for timer registers
///
/// Accesses are not atomic: [`modify`](RegisterBlock::modify) is a plain
/// read followed by a write. See [`SharedPwm`](crate::SharedPwm) for callers
/// that touch the same timer from interrupt context.
pub trait RegisterBlock {
    /// Read the current value of `register`
    fn read(&self, register: Register) -> u16;

    /// Overwrite `register`
    fn write(&mut self, register: Register, value: u16);

    /// Read, transform and write back
    fn modify<F>(&mut self, register: Register, f: F)
    where
        F: FnOnce(u16) -> u16,
        Self: Sized,
    {
        let value = self.read(register);
        self.write(register, f(value));
    }

    /// Apply a bit field; an empty field performs no access
    fn apply(&mut self, register: Register, field: BitField)
    where
        Self: Sized,
    {
        if field.is_empty() {
            return;
        }
        self.modify(register, |value| field.apply(value));
    }
}

impl<R: RegisterBlock> RegisterBlock for &mut R {
    fn read(&self, register: Register) -> u16 {
        (**self).read(register)
    }

    fn write(&mut self, register: Register, value: u16) {
        (**self).write(register, value)
    }
}
