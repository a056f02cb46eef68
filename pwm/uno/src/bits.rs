//! ATmega328P timer register bit positions

// TCCR0A / TCCR1A / TCCR2A
pub const COMNA1: u8 = 7;
pub const COMNA0: u8 = 6;
pub const COMNB1: u8 = 5;
pub const COMNB0: u8 = 4;

pub const WGM00: u8 = 0;
pub const WGM01: u8 = 1;
pub const WGM10: u8 = 0;
pub const WGM11: u8 = 1;
pub const WGM20: u8 = 0;
pub const WGM21: u8 = 1;

// TCCR0B / TCCR1B / TCCR2B
pub const WGM02: u8 = 3;
pub const WGM12: u8 = 3;
pub const WGM13: u8 = 4;
pub const WGM22: u8 = 3;

pub const CS0: u8 = 0;
pub const CS1: u8 = 1;
pub const CS2: u8 = 2;

/// Mask with bit `n` set
pub const fn bv(n: u8) -> u8 {
    1 << n
}

/// Clock-select field, identical in all three timers
pub const CLOCK_SELECT_MASK: u8 = bv(CS2) | bv(CS1) | bv(CS0);
