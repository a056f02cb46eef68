//! Opt-in serialisation of encoder access
//!
//! [`Pwm`] does not lock anything. Firmware that configures the same timer
//! from `main` and from an interrupt handler can park the encoder in a
//! [`SharedPwm`] and reach it only inside a critical section.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::driver::Pwm;
use crate::register::RegisterBlock;

/// Encoder guarded by a critical section, suitable for a `static`
pub struct SharedPwm<R> {
    inner: Mutex<RefCell<Option<Pwm<R>>>>,
}

impl<R: RegisterBlock> SharedPwm<R> {
    /// Empty slot
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Place `pwm` in the slot, returning the previous encoder
    pub fn install(&self, pwm: Pwm<R>) -> Option<Pwm<R>> {
        critical_section::with(|cs| self.inner.borrow(cs).replace(Some(pwm)))
    }

    /// Take the encoder back out
    pub fn take(&self) -> Option<Pwm<R>> {
        critical_section::with(|cs| self.inner.borrow(cs).take())
    }

    /// Run `f` on the encoder with interrupts masked
    ///
    /// Returns `None` when nothing is installed.
    pub fn with<T>(&self, f: impl FnOnce(&mut Pwm<R>) -> T) -> Option<T> {
        critical_section::with(|cs| {
            let mut slot = self.inner.borrow_ref_mut(cs);
            slot.as_mut().map(f)
        })
    }
}

impl<R: RegisterBlock> Default for SharedPwm<R> {
    fn default() -> Self {
        Self::new()
    }
}
