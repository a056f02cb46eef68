//! Waveform generation modes, advanced refinements and output types

use core::convert::TryFrom;
use core::fmt;

use crate::error::PwmError;

/// Counting pattern of a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum WaveformMode {
    /// Count up to the fixed maximum and wrap
    Normal = 0,
    /// Single-slope PWM
    Fast = 1,
    /// Dual-slope PWM, symmetric around TOP
    PhaseCorrect = 2,
    /// Clear the counter when it matches TOP
    ClearTimerOnCompare = 3,
    /// Dual-slope PWM with TOP updated at BOTTOM
    PhaseFrequencyCorrect = 4,
}

impl WaveformMode {
    pub const ALL: [WaveformMode; 5] = [
        WaveformMode::Normal,
        WaveformMode::Fast,
        WaveformMode::PhaseCorrect,
        WaveformMode::ClearTimerOnCompare,
        WaveformMode::PhaseFrequencyCorrect,
    ];
}

impl TryFrom<u8> for WaveformMode {
    type Error = PwmError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(WaveformMode::Normal),
            1 => Ok(WaveformMode::Fast),
            2 => Ok(WaveformMode::PhaseCorrect),
            3 => Ok(WaveformMode::ClearTimerOnCompare),
            4 => Ok(WaveformMode::PhaseFrequencyCorrect),
            _ => Err(PwmError::UndefinedValue),
        }
    }
}

impl fmt::Display for WaveformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WaveformMode::Normal => "normal",
            WaveformMode::Fast => "fast",
            WaveformMode::PhaseCorrect => "phase-correct",
            WaveformMode::ClearTimerOnCompare => "ctc",
            WaveformMode::PhaseFrequencyCorrect => "phase-frequency-correct",
        };
        f.write_str(name)
    }
}

/// Timer-specific refinement layered on top of a [`WaveformMode`]
///
/// Each setting only has an effect for some (timer, mode) pairs; the board
/// tables list those pairs and everything else is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AdvancedMode {
    /// 8-bit timers: TOP fixed at the counter maximum, OCxA as plain PWM
    CompareOutputDisconnect = 0,
    /// 8-bit timers: TOP taken from OCRxA so OCxA can toggle on match
    CompareOutputToggle = 1,
    /// 16-bit timer: 8-bit resolution
    EightBit = 2,
    /// 16-bit timer: 9-bit resolution
    NineBit = 3,
    /// 16-bit timer: 10-bit resolution
    TenBit = 4,
    /// 16-bit timer: TOP taken from the input-capture register
    TopInputCapture = 5,
    /// 16-bit timer: TOP taken from compare register A
    TopCompareA = 6,
}

impl AdvancedMode {
    pub const ALL: [AdvancedMode; 7] = [
        AdvancedMode::CompareOutputDisconnect,
        AdvancedMode::CompareOutputToggle,
        AdvancedMode::EightBit,
        AdvancedMode::NineBit,
        AdvancedMode::TenBit,
        AdvancedMode::TopInputCapture,
        AdvancedMode::TopCompareA,
    ];
}

impl TryFrom<u8> for AdvancedMode {
    type Error = PwmError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(AdvancedMode::CompareOutputDisconnect),
            1 => Ok(AdvancedMode::CompareOutputToggle),
            2 => Ok(AdvancedMode::EightBit),
            3 => Ok(AdvancedMode::NineBit),
            4 => Ok(AdvancedMode::TenBit),
            5 => Ok(AdvancedMode::TopInputCapture),
            6 => Ok(AdvancedMode::TopCompareA),
            _ => Err(PwmError::UndefinedValue),
        }
    }
}

impl fmt::Display for AdvancedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AdvancedMode::CompareOutputDisconnect => "compare-output-disconnect",
            AdvancedMode::CompareOutputToggle => "compare-output-toggle",
            AdvancedMode::EightBit => "8-bit",
            AdvancedMode::NineBit => "9-bit",
            AdvancedMode::TenBit => "10-bit",
            AdvancedMode::TopInputCapture => "top-input-capture",
            AdvancedMode::TopCompareA => "top-compare-a",
        };
        f.write_str(name)
    }
}

/// How a compare-match event reaches the physical pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum OutputType {
    /// Pin disconnected from the timer
    #[default]
    Disabled = 0,
    /// Non-inverted PWM
    Enabled = 1,
    /// Inverted PWM
    Inverted = 2,
    /// Toggle the pin on every compare match
    ToggleOnCompare = 3,
}

impl OutputType {
    pub const ALL: [OutputType; 4] = [
        OutputType::Disabled,
        OutputType::Enabled,
        OutputType::Inverted,
        OutputType::ToggleOnCompare,
    ];
}

impl TryFrom<u8> for OutputType {
    type Error = PwmError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(OutputType::Disabled),
            1 => Ok(OutputType::Enabled),
            2 => Ok(OutputType::Inverted),
            3 => Ok(OutputType::ToggleOnCompare),
            _ => Err(PwmError::UndefinedValue),
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputType::Disabled => "disabled",
            OutputType::Enabled => "enabled",
            OutputType::Inverted => "inverted",
            OutputType::ToggleOnCompare => "toggle",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_mode_conversion() {
        for mode in WaveformMode::ALL {
            assert_eq!(WaveformMode::try_from(mode as u8), Ok(mode));
        }
        assert_eq!(WaveformMode::try_from(5), Err(PwmError::UndefinedValue));
    }

    #[test]
    fn test_raw_advanced_conversion() {
        for setting in AdvancedMode::ALL {
            assert_eq!(AdvancedMode::try_from(setting as u8), Ok(setting));
        }
        assert_eq!(AdvancedMode::try_from(7), Err(PwmError::UndefinedValue));
    }

    #[test]
    fn test_raw_output_conversion() {
        assert_eq!(OutputType::try_from(2), Ok(OutputType::Inverted));
        assert_eq!(OutputType::try_from(200), Err(PwmError::UndefinedValue));
    }
}
