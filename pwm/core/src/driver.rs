//! Timer configuration encoder
//!
//! [`Pwm`] turns abstract requests (pin, mode, frequency, duty cycle, output
//! type) into register writes using the tables of a [`BoardProfile`].
//!
//! Every operation resolves the pin first. A pin that is not PWM-capable
//! fails with [`PwmError::InvalidPin`] before any register is touched.
//!
//! # Preemption
//!
//! Each operation is a sequence of plain read-modify-write accesses. The
//! caller must not run two operations on the same timer concurrently, e.g.
//! one from `main` and one from an interrupt handler. [`SharedPwm`] offers an
//! opt-in critical-section wrapper for that case.
//!
//! [`SharedPwm`]: crate::SharedPwm

use core::convert::TryFrom;

use log::{debug, trace, warn};

use crate::board::{BoardProfile, TimerProfile};
use crate::channel::PwmChannel;
use crate::config::PwmSignalConfig;
use crate::error::{PwmError, PwmResult};
use crate::frequency::FrequencyChoice;
use crate::gpio::PinDirection;
use crate::mode::{AdvancedMode, OutputType, WaveformMode};
use crate::pin::{Pin, PinAssignment, Timer};
use crate::register::{BitField, ControlBits, Register, RegisterBlock};
use crate::units::Hertz;

/// Register image of every timer a board implements
pub type RegisterSnapshot = heapless::Vec<(Register, u16), { Register::COUNT }>;

/// PWM encoder bound to a board and a register backend
pub struct Pwm<R> {
    board: &'static BoardProfile,
    regs: R,
}

impl<R: RegisterBlock> Pwm<R> {
    /// Create an encoder for `board` writing through `regs`
    pub const fn new(board: &'static BoardProfile, regs: R) -> Self {
        Self { board, regs }
    }

    /// Active board
    pub fn board(&self) -> &'static BoardProfile {
        self.board
    }

    /// Register backend
    pub fn registers(&self) -> &R {
        &self.regs
    }

    /// Give the register backend back
    pub fn release(self) -> R {
        self.regs
    }

    /// Timer that drives `pin`
    pub fn resolve_timer(&self, pin: Pin) -> PwmResult<Timer> {
        self.resolve(pin).map(|a| a.timer)
    }

    /// Timer and compare channel that drive `pin`
    pub fn resolve(&self, pin: Pin) -> PwmResult<PinAssignment> {
        self.lookup(pin).map(|(assignment, _)| assignment)
    }

    fn lookup(&self, pin: Pin) -> PwmResult<(PinAssignment, &'static TimerProfile)> {
        self.board.timer_for(pin).map_err(|err| {
            debug!("pwm: rejecting pin {}: {}", pin.number(), err);
            err
        })
    }

    fn apply_control(&mut self, timer: Timer, bits: ControlBits) {
        trace!(
            "pwm: {} set={:#04x} clear={:#04x}, set={:#04x} clear={:#04x}",
            timer,
            bits.a.set,
            bits.a.clear,
            bits.b.set,
            bits.b.clear
        );
        self.regs.apply(Register::control_a(timer), bits.a);
        self.regs.apply(Register::control_b(timer), bits.b);
    }

    /// Select the waveform generation mode of `pin`'s timer
    ///
    /// Modes the timer has no entry for clear every waveform bit, which
    /// leaves the timer in normal mode. Prescaler and compare registers are
    /// not touched.
    pub fn set_mode(&mut self, pin: Pin, mode: WaveformMode) -> PwmResult<()> {
        let (assignment, profile) = self.lookup(pin)?;
        let bits = match profile.mode_bits(mode) {
            Some(bits) => bits,
            None => {
                warn!(
                    "pwm: {} has no {} mode, clearing waveform bits",
                    assignment.timer, mode
                );
                profile.reset_mode
            }
        };
        self.apply_control(assignment.timer, bits);
        debug!("pwm: pin {} mode {}", pin.number(), mode);
        Ok(())
    }

    /// [`set_mode`](Self::set_mode) from a raw mode number
    pub fn set_mode_raw(&mut self, pin: Pin, raw: u8) -> PwmResult<()> {
        self.lookup(pin)?;
        let mode = WaveformMode::try_from(raw)?;
        self.set_mode(pin, mode)
    }

    /// Apply `mode`, then layer the timer-specific refinement `setting`
    ///
    /// The base mode is always re-applied first because some refinements
    /// only make sense relative to the base pattern. Settings that do not
    /// apply to this (timer, mode) pair leave the base mode as is.
    pub fn set_advanced_mode(
        &mut self,
        pin: Pin,
        mode: WaveformMode,
        setting: AdvancedMode,
    ) -> PwmResult<()> {
        self.set_mode(pin, mode)?;
        let (assignment, profile) = self.lookup(pin)?;
        match profile.advanced_bits(mode, setting) {
            Some(bits) => self.apply_control(assignment.timer, bits),
            None => trace!("pwm: {} ignores {} in {} mode", assignment.timer, setting, mode),
        }
        debug!("pwm: pin {} mode {} ({})", pin.number(), mode, setting);
        Ok(())
    }

    /// [`set_advanced_mode`](Self::set_advanced_mode) from raw numbers
    pub fn set_advanced_mode_raw(&mut self, pin: Pin, mode: u8, setting: u8) -> PwmResult<()> {
        self.lookup(pin)?;
        let mode = WaveformMode::try_from(mode)?;
        let setting = AdvancedMode::try_from(setting)?;
        self.set_advanced_mode(pin, mode, setting)
    }

    /// Select the prescaler that yields `choice` on `pin`'s timer
    ///
    /// The clock-select field is cleared first, unconditionally. If the
    /// timer cannot produce `choice`, the field stays cleared (timer
    /// stopped) and [`PwmError::InvalidFrequency`] is returned.
    pub fn set_freq(&mut self, pin: Pin, choice: FrequencyChoice) -> PwmResult<()> {
        let (assignment, profile) = self.lookup(pin)?;
        let control_b = Register::control_b(assignment.timer);
        self.regs
            .apply(control_b, BitField::clear(profile.clock_select_mask));

        let cs = profile.clock_select(choice).ok_or_else(|| {
            debug!("pwm: {} cannot produce {}", assignment.timer, choice);
            PwmError::InvalidFrequency
        })?;
        self.regs.apply(control_b, BitField::set(cs.bits));
        debug!(
            "pwm: pin {} frequency {} (clk/{})",
            pin.number(),
            choice,
            cs.divisor
        );
        Ok(())
    }

    /// [`set_freq`](Self::set_freq) from a whole-hertz value
    pub fn set_freq_hz(&mut self, pin: Pin, hz: Hertz) -> PwmResult<()> {
        let (assignment, profile) = self.lookup(pin)?;
        match profile.frequency_for_hz(hz) {
            Some(choice) => self.set_freq(pin, choice),
            None => {
                self.regs.apply(
                    Register::control_b(assignment.timer),
                    BitField::clear(profile.clock_select_mask),
                );
                debug!("pwm: {} cannot produce {}", assignment.timer, hz);
                Err(PwmError::InvalidFrequency)
            }
        }
    }

    /// [`set_freq`](Self::set_freq) by prescaler divisor (1, 8, 64, ...)
    ///
    /// Divisors the timer does not offer clear the clock-select field and
    /// return [`PwmError::InvalidFrequency`].
    pub fn set_prescaler(&mut self, pin: Pin, divisor: u16) -> PwmResult<()> {
        let (assignment, profile) = self.lookup(pin)?;
        match profile.frequency_for_divisor(divisor) {
            Some(choice) => self.set_freq(pin, choice),
            None => {
                self.regs.apply(
                    Register::control_b(assignment.timer),
                    BitField::clear(profile.clock_select_mask),
                );
                debug!("pwm: {} has no clk/{} prescaler", assignment.timer, divisor);
                Err(PwmError::InvalidFrequency)
            }
        }
    }

    /// Write `percent` of the counter range into `pin`'s compare register
    ///
    /// The value is `percent * max / 100` rounded down, where `max` is 255
    /// for 8-bit timers and 65535 for 16-bit timers.
    pub fn set_duty_cycle(&mut self, pin: Pin, percent: u8) -> PwmResult<()> {
        let (assignment, profile) = self.lookup(pin)?;
        if percent > 100 {
            debug!("pwm: rejecting duty cycle {}%", percent);
            return Err(PwmError::InvalidDutyCycleValue);
        }
        let value = profile.width.scale_percent(percent);
        self.regs
            .write(Register::compare(assignment.timer, assignment.channel), value);
        debug!("pwm: pin {} duty {}% ({})", pin.number(), percent, value);
        Ok(())
    }

    /// Raw compare register value of `pin`
    pub fn duty_cycle(&self, pin: Pin) -> PwmResult<u16> {
        let assignment = self.resolve(pin)?;
        Ok(self
            .regs
            .read(Register::compare(assignment.timer, assignment.channel)))
    }

    /// Connect `pin`'s compare channel to the pin with the given polarity
    pub fn set_output_type(&mut self, pin: Pin, output: OutputType) -> PwmResult<()> {
        let (assignment, profile) = self.lookup(pin)?;
        let bits = profile.output_bits(assignment.channel, output);
        self.regs.apply(Register::control_a(assignment.timer), bits);
        debug!("pwm: pin {} output {}", pin.number(), output);
        Ok(())
    }

    /// [`set_output_type`](Self::set_output_type) from a raw number
    ///
    /// Unknown values disconnect the channel instead of failing.
    pub fn set_output_type_raw(&mut self, pin: Pin, raw: u8) -> PwmResult<()> {
        let (assignment, profile) = self.lookup(pin)?;
        match OutputType::try_from(raw) {
            Ok(output) => self.set_output_type(pin, output),
            Err(_) => {
                warn!("pwm: unknown output type {}, disconnecting", raw);
                self.regs.apply(
                    Register::control_a(assignment.timer),
                    profile.output_disconnect(assignment.channel),
                );
                Ok(())
            }
        }
    }

    /// Phase-shift `pin`'s waveform
    ///
    /// Not available: no board implements phase offsets yet.
    pub fn set_offset(&mut self, pin: Pin, _percent: u8) -> PwmResult<()> {
        self.lookup(pin)?;
        Err(PwmError::Unsupported)
    }

    /// Make `config.pin` an output and apply the whole configuration
    ///
    /// Order: pin direction, mode (advanced when given), frequency, duty
    /// cycle, output type. The pin, frequency and duty cycle are validated
    /// up front, so a rejected configuration writes nothing.
    pub fn init<G: PinDirection>(&mut self, config: &PwmSignalConfig, gpio: &mut G) -> PwmResult<()> {
        let (_, profile) = self.lookup(config.pin)?;
        if profile.clock_select(config.frequency).is_none() {
            return Err(PwmError::InvalidFrequency);
        }
        if config.duty_cycle > 100 {
            return Err(PwmError::InvalidDutyCycleValue);
        }
        gpio.set_output(config.pin)?;
        match config.advanced {
            Some(setting) => self.set_advanced_mode(config.pin, config.mode, setting)?,
            None => self.set_mode(config.pin, config.mode)?,
        }
        self.set_freq(config.pin, config.frequency)?;
        self.set_duty_cycle(config.pin, config.duty_cycle)?;
        self.set_output_type(config.pin, config.output)?;
        debug!("pwm: pin {} initialised", config.pin.number());
        Ok(())
    }

    /// `embedded-hal` handle for `pin`'s compare channel
    pub fn channel(&mut self, pin: Pin) -> PwmResult<PwmChannel<'_, R>> {
        let (assignment, profile) = self.lookup(pin)?;
        Ok(PwmChannel::new(&mut self.regs, assignment, profile.width))
    }

    /// Current value of every register of the board's timers
    ///
    /// A timer listed more than once in the board profile appears once.
    pub fn snapshot(&self) -> RegisterSnapshot {
        let mut image = RegisterSnapshot::new();
        for profile in self.board.timers {
            if image.iter().any(|(r, _)| r.timer == profile.timer) {
                warn!("pwm: {} listed twice in board {}", profile.timer, self.board.name);
                continue;
            }
            for register in Register::all_of(profile.timer) {
                // Distinct timers never exceed the capacity.
                let _ = image.push((register, self.regs.read(register)));
            }
        }
        image
    }
}
