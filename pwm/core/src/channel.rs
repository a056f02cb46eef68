//! `embedded-hal` adapter for a single compare channel

use embedded_hal::pwm::{ErrorType, SetDutyCycle};

use crate::error::PwmError;
use crate::pin::{CounterWidth, PinAssignment};
use crate::register::{Register, RegisterBlock};

/// Compare channel of one pin, borrowed from a [`Pwm`](crate::Pwm)
///
/// Duty values are raw compare counts in `0..=max_duty_cycle()`.
pub struct PwmChannel<'a, R> {
    regs: &'a mut R,
    assignment: PinAssignment,
    width: CounterWidth,
}

impl<'a, R: RegisterBlock> PwmChannel<'a, R> {
    pub(crate) fn new(regs: &'a mut R, assignment: PinAssignment, width: CounterWidth) -> Self {
        Self {
            regs,
            assignment,
            width,
        }
    }

    /// Pin, timer and channel behind this handle
    pub fn assignment(&self) -> PinAssignment {
        self.assignment
    }

    /// Current compare count
    pub fn duty(&self) -> u16 {
        self.regs.read(self.register())
    }

    fn register(&self) -> Register {
        Register::compare(self.assignment.timer, self.assignment.channel)
    }
}

impl<R: RegisterBlock> ErrorType for PwmChannel<'_, R> {
    type Error = PwmError;
}

impl<R: RegisterBlock> SetDutyCycle for PwmChannel<'_, R> {
    fn max_duty_cycle(&self) -> u16 {
        self.width.max_count()
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        if duty > self.width.max_count() {
            return Err(PwmError::InvalidDutyCycleValue);
        }
        let register = self.register();
        self.regs.write(register, duty);
        Ok(())
    }
}
