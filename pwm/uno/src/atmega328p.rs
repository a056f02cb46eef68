//! Memory-mapped timer registers of the ATmega328P

use core::ptr;

use pwm_core::{Register, RegisterBlock, RegisterKind, Timer};

/// Register block backed by the device's data space
///
/// 16-bit registers go through the shared TEMP latch: the high byte is
/// written first and the low byte read first. Interrupt handlers that touch
/// Timer1 16-bit registers must not run in between.
pub struct Atmega328p {
    _private: (),
}

impl Atmega328p {
    /// Take the timer registers
    ///
    /// # Safety
    /// Only one instance may exist, and nothing else may access the timer
    /// registers while it is alive.
    pub unsafe fn steal() -> Self {
        Self { _private: () }
    }

    /// Data-space address and whether the register is 16 bits wide
    const fn address(register: Register) -> (usize, bool) {
        match (register.timer, register.kind) {
            (Timer::Timer0, RegisterKind::ControlA) => (0x44, false),
            (Timer::Timer0, RegisterKind::ControlB) => (0x45, false),
            (Timer::Timer0, RegisterKind::CompareA) => (0x47, false),
            (Timer::Timer0, RegisterKind::CompareB) => (0x48, false),
            // Timer0 has no input capture; reads return the counter.
            (Timer::Timer0, RegisterKind::InputCapture) => (0x46, false),
            (Timer::Timer1, RegisterKind::ControlA) => (0x80, false),
            (Timer::Timer1, RegisterKind::ControlB) => (0x81, false),
            (Timer::Timer1, RegisterKind::InputCapture) => (0x86, true),
            (Timer::Timer1, RegisterKind::CompareA) => (0x88, true),
            (Timer::Timer1, RegisterKind::CompareB) => (0x8A, true),
            (Timer::Timer2, RegisterKind::ControlA) => (0xB0, false),
            (Timer::Timer2, RegisterKind::ControlB) => (0xB1, false),
            (Timer::Timer2, RegisterKind::CompareA) => (0xB3, false),
            (Timer::Timer2, RegisterKind::CompareB) => (0xB4, false),
            // Timer2 has no input capture; reads return the counter.
            (Timer::Timer2, RegisterKind::InputCapture) => (0xB2, false),
        }
    }
}

impl RegisterBlock for Atmega328p {
    fn read(&self, register: Register) -> u16 {
        let (addr, wide) = Self::address(register);
        unsafe {
            let low = ptr::read_volatile(addr as *const u8) as u16;
            if wide {
                let high = ptr::read_volatile((addr + 1) as *const u8) as u16;
                (high << 8) | low
            } else {
                low
            }
        }
    }

    fn write(&mut self, register: Register, value: u16) {
        let (addr, wide) = Self::address(register);
        if !wide && matches!(register.kind, RegisterKind::InputCapture) {
            log::warn!("pwm: {} has no input capture register", register.timer);
            return;
        }
        unsafe {
            if wide {
                ptr::write_volatile((addr + 1) as *mut u8, (value >> 8) as u8);
            }
            ptr::write_volatile(addr as *mut u8, value as u8);
        }
    }
}
