//! Pins, timers and the compare channels that connect them

use core::fmt;

/// Physical I/O pin, identified by its board pin number
///
/// Any value can be constructed; whether it is PWM-capable is decided by the
/// active [`BoardProfile`](crate::BoardProfile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Pin(u8);

impl Pin {
    /// Create a pin from its board number
    pub const fn new(number: u8) -> Self {
        Pin(number)
    }

    /// Board pin number
    pub const fn number(self) -> u8 {
        self.0
    }
}

impl From<u8> for Pin {
    fn from(number: u8) -> Self {
        Pin(number)
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Pin {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "D{}", self.0);
    }
}

/// Hardware timer unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Timer {
    Timer0,
    Timer1,
    Timer2,
}

impl Timer {
    /// Every timer, in index order
    pub const ALL: [Timer; 3] = [Timer::Timer0, Timer::Timer1, Timer::Timer2];

    /// Timer number as used in register names
    pub const fn index(self) -> u8 {
        match self {
            Timer::Timer0 => 0,
            Timer::Timer1 => 1,
            Timer::Timer2 => 2,
        }
    }
}

impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timer{}", self.index())
    }
}

/// Output-compare channel within a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    A,
    B,
}

impl Channel {
    pub(crate) const fn slot(self) -> usize {
        match self {
            Channel::A => 0,
            Channel::B => 1,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::A => write!(f, "A"),
            Channel::B => write!(f, "B"),
        }
    }
}

/// Counter resolution of a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CounterWidth {
    Eight,
    Sixteen,
}

impl CounterWidth {
    /// Largest value the compare register can hold
    pub const fn max_count(self) -> u16 {
        match self {
            CounterWidth::Eight => 0xFF,
            CounterWidth::Sixteen => 0xFFFF,
        }
    }

    /// Scale a percentage into the compare range, rounding down
    ///
    /// The caller validates `percent <= 100`.
    pub const fn scale_percent(self, percent: u8) -> u16 {
        (percent as u32 * self.max_count() as u32 / 100) as u16
    }
}

/// Which timer and compare channel drive a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinAssignment {
    pub pin: Pin,
    pub timer: Timer,
    pub channel: Channel,
}

impl PinAssignment {
    pub const fn new(pin: Pin, timer: Timer, channel: Channel) -> Self {
        Self { pin, timer, channel }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_percent_floors() {
        assert_eq!(CounterWidth::Eight.scale_percent(0), 0);
        assert_eq!(CounterWidth::Eight.scale_percent(25), 63);
        assert_eq!(CounterWidth::Eight.scale_percent(50), 127);
        assert_eq!(CounterWidth::Eight.scale_percent(100), 255);
        assert_eq!(CounterWidth::Sixteen.scale_percent(50), 32767);
        assert_eq!(CounterWidth::Sixteen.scale_percent(100), 65535);
    }

    #[test]
    fn test_timer_index() {
        let indices: [u8; 3] = Timer::ALL.map(Timer::index);
        assert_eq!(indices, [0, 1, 2]);
    }
}
