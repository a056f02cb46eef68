//! Declarative board description
//!
//! A [`BoardProfile`] supplies everything that differs between boards: which
//! pins are PWM-capable, which timer and channel drive each of them, and the
//! per-timer tables that turn modes, frequencies and output types into bit
//! patterns. The encoder in [`crate::driver`] only walks these tables.

use crate::error::{PwmError, PwmResult};
use crate::frequency::{ClockSelect, FrequencyChoice};
use crate::mode::{AdvancedMode, OutputType, WaveformMode};
use crate::pin::{Channel, CounterWidth, Pin, PinAssignment, Timer};
use crate::register::{BitField, ControlBits};
use crate::units::{Hertz, MilliHertz};

/// Overlay applied by `set_advanced_mode` after the base mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvancedRule {
    /// Base mode this rule applies to, `None` for every mode
    pub mode: Option<WaveformMode>,
    pub setting: AdvancedMode,
    pub bits: ControlBits,
}

impl AdvancedRule {
    pub const fn new(mode: WaveformMode, setting: AdvancedMode, bits: ControlBits) -> Self {
        Self {
            mode: Some(mode),
            setting,
            bits,
        }
    }

    pub const fn any_mode(setting: AdvancedMode, bits: ControlBits) -> Self {
        Self {
            mode: None,
            setting,
            bits,
        }
    }

    fn matches(&self, mode: WaveformMode, setting: AdvancedMode) -> bool {
        self.setting == setting && self.mode.map_or(true, |m| m == mode)
    }
}

/// Compare-output connection bits of one channel in control register A
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOutputBits {
    /// COMx1
    pub high: u8,
    /// COMx0
    pub low: u8,
}

impl CompareOutputBits {
    pub const fn new(high: u8, low: u8) -> Self {
        Self { high, low }
    }

    /// Both connection bits
    pub const fn mask(self) -> u8 {
        self.high | self.low
    }

    /// Pattern for `output`
    pub const fn encode(self, output: OutputType) -> BitField {
        match output {
            OutputType::Disabled => BitField::clear(self.mask()),
            OutputType::ToggleOnCompare => BitField::new(self.low, self.high),
            OutputType::Enabled => BitField::new(self.high, self.low),
            OutputType::Inverted => BitField::set(self.mask()),
        }
    }
}

/// Everything the encoder needs to know about one timer
#[derive(Debug, Clone, Copy)]
pub struct TimerProfile {
    pub timer: Timer,
    pub width: CounterWidth,
    /// Waveform patterns for the modes this timer expresses directly
    pub modes: &'static [(WaveformMode, ControlBits)],
    /// Safe default: clears every waveform bit
    pub reset_mode: ControlBits,
    /// Refinements layered by `set_advanced_mode`; first match wins
    pub advanced: &'static [AdvancedRule],
    /// Clock-select field inside control register B
    pub clock_select_mask: u8,
    pub frequencies: &'static [(FrequencyChoice, ClockSelect)],
    /// Connection bits for channel A and channel B
    pub outputs: [CompareOutputBits; 2],
}

impl TimerProfile {
    /// Pattern for `mode`, `None` when this timer has no entry for it
    pub fn mode_bits(&self, mode: WaveformMode) -> Option<ControlBits> {
        self.modes
            .iter()
            .find(|(m, _)| *m == mode)
            .map(|(_, bits)| *bits)
    }

    /// Overlay for `setting` on top of `mode`, `None` when it does not apply
    pub fn advanced_bits(&self, mode: WaveformMode, setting: AdvancedMode) -> Option<ControlBits> {
        self.advanced
            .iter()
            .find(|rule| rule.matches(mode, setting))
            .map(|rule| rule.bits)
    }

    /// Clock-select entry for `choice`
    pub fn clock_select(&self, choice: FrequencyChoice) -> Option<ClockSelect> {
        self.frequencies
            .iter()
            .find(|(f, _)| *f == choice)
            .map(|(_, cs)| *cs)
    }

    /// Frequency whose whole-hertz value equals `hz`
    pub fn frequency_for_hz(&self, hz: Hertz) -> Option<FrequencyChoice> {
        self.frequencies
            .iter()
            .map(|(f, _)| *f)
            .find(|f| f.nominal().whole_hertz() == hz)
    }

    /// Frequency produced by the prescaler dividing the clock by `divisor`
    pub fn frequency_for_divisor(&self, divisor: u16) -> Option<FrequencyChoice> {
        self.frequencies
            .iter()
            .find(|(_, cs)| cs.divisor == divisor)
            .map(|(f, _)| *f)
    }

    /// Output frequency produced by `cs` given the board clock and the
    /// counter period (`TOP + 1` for single-slope, `2 * TOP` for dual-slope)
    pub fn output_frequency(clock: Hertz, cs: ClockSelect, period: u32) -> MilliHertz {
        let ticks = cs.divisor as u64 * period as u64;
        MilliHertz((clock.0 as u64 * 1_000 / ticks) as u32)
    }

    /// Connection pattern for `output` on `channel`
    pub fn output_bits(&self, channel: Channel, output: OutputType) -> BitField {
        self.outputs[channel.slot()].encode(output)
    }

    /// Pattern disconnecting `channel`
    pub fn output_disconnect(&self, channel: Channel) -> BitField {
        BitField::clear(self.outputs[channel.slot()].mask())
    }
}

/// Pin, timer and encoding tables of one board
#[derive(Debug, Clone, Copy)]
pub struct BoardProfile {
    pub name: &'static str,
    /// Timer input clock
    pub clock: Hertz,
    pub pins: &'static [PinAssignment],
    pub timers: &'static [TimerProfile],
}

impl BoardProfile {
    /// Timer and channel driving `pin`
    pub fn resolve(&self, pin: Pin) -> PwmResult<PinAssignment> {
        self.pins
            .iter()
            .find(|a| a.pin == pin)
            .copied()
            .ok_or(PwmError::InvalidPin)
    }

    /// Profile of `timer`, if the board implements it
    pub fn timer(&self, timer: Timer) -> Option<&TimerProfile> {
        self.timers.iter().find(|t| t.timer == timer)
    }

    /// Assignment and timer profile for `pin`
    ///
    /// A pin whose timer has no profile is treated as not PWM-capable.
    pub fn timer_for(&self, pin: Pin) -> PwmResult<(PinAssignment, &TimerProfile)> {
        let assignment = self.resolve(pin)?;
        let profile = self.timer(assignment.timer).ok_or(PwmError::InvalidPin)?;
        Ok((assignment, profile))
    }

    /// Pins driven by `timer`
    pub fn pins_of(&self, timer: Timer) -> impl Iterator<Item = Pin> + '_ {
        self.pins
            .iter()
            .filter(move |a| a.timer == timer)
            .map(|a| a.pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUT: CompareOutputBits = CompareOutputBits::new(1 << 7, 1 << 6);

    #[test]
    fn test_compare_output_encoding() {
        assert_eq!(OUT.encode(OutputType::Disabled).apply(0xFF), 0x3F);
        assert_eq!(OUT.encode(OutputType::ToggleOnCompare).apply(0x00), 0x40);
        assert_eq!(OUT.encode(OutputType::Enabled).apply(0x40), 0x80);
        assert_eq!(OUT.encode(OutputType::Inverted).apply(0x00), 0xC0);
    }

    #[test]
    fn test_output_frequency() {
        let cs = ClockSelect::new(0b011, 64);
        let f = TimerProfile::output_frequency(Hertz(16_000_000), cs, 256);
        assert_eq!(f, MilliHertz(976_562));
    }
}
