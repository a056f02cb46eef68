//! Complete configuration of one PWM output

use crate::frequency::FrequencyChoice;
use crate::mode::{AdvancedMode, OutputType, WaveformMode};
use crate::pin::Pin;

/// Settings applied together by [`Pwm::init`](crate::Pwm::init)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PwmSignalConfig {
    pub pin: Pin,
    pub mode: WaveformMode,
    /// Refinement applied through `set_advanced_mode`, if any
    #[cfg_attr(feature = "serde", serde(default))]
    pub advanced: Option<AdvancedMode>,
    pub output: OutputType,
    /// Percentage in `0..=100`
    pub duty_cycle: u8,
    pub frequency: FrequencyChoice,
}

impl PwmSignalConfig {
    /// Non-inverted output in `mode`, everything else left to the builder
    pub const fn new(pin: Pin, mode: WaveformMode, frequency: FrequencyChoice) -> Self {
        Self {
            pin,
            mode,
            advanced: None,
            output: OutputType::Enabled,
            duty_cycle: 0,
            frequency,
        }
    }

    pub const fn with_advanced(mut self, setting: AdvancedMode) -> Self {
        self.advanced = Some(setting);
        self
    }

    pub const fn with_output(mut self, output: OutputType) -> Self {
        self.output = output;
        self
    }

    pub const fn with_duty_cycle(mut self, percent: u8) -> Self {
        self.duty_cycle = percent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = PwmSignalConfig::new(Pin::new(9), WaveformMode::Fast, FrequencyChoice::Hz490_2)
            .with_advanced(AdvancedMode::TenBit)
            .with_output(OutputType::Inverted)
            .with_duty_cycle(40);

        assert_eq!(config.pin, Pin::new(9));
        assert_eq!(config.advanced, Some(AdvancedMode::TenBit));
        assert_eq!(config.output, OutputType::Inverted);
        assert_eq!(config.duty_cycle, 40);
    }
}
