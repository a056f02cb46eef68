use std::fmt::Display;
use std::fs;
use std::path::Path;

use avr_pwm::{
    AdvancedMode, Hertz, OutputType, Pin, PinDirection, Pwm, PwmSignalConfig, RegisterBlock,
    WaveformMode,
};

use crate::error::InspectError;

/// Operations requested on the command line for a single pin.
///
/// Applied in the same order as `Pwm::init`: mode (with the advanced
/// setting, if any), frequency, duty cycle, output type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub pin: Pin,
    pub mode: Option<WaveformMode>,
    pub advanced: Option<AdvancedMode>,
    pub freq: Option<Hertz>,
    /// Clock divisor, used instead of `freq`
    pub prescaler: Option<u16>,
    pub duty: Option<u8>,
    pub output: Option<OutputType>,
}

impl Request {
    pub fn new(pin: Pin) -> Self {
        Self {
            pin,
            mode: None,
            advanced: None,
            freq: None,
            prescaler: None,
            duty: None,
            output: None,
        }
    }

    pub fn apply<R: RegisterBlock>(&self, pwm: &mut Pwm<R>) -> Result<(), InspectError> {
        let pin = self.pin;
        let err = || InspectError::pwm(pin);

        match (self.mode, self.advanced) {
            (Some(mode), Some(setting)) => pwm.set_advanced_mode(pin, mode, setting),
            // A refinement alone applies on top of normal mode.
            (None, Some(setting)) => pwm.set_advanced_mode(pin, WaveformMode::Normal, setting),
            (Some(mode), None) => pwm.set_mode(pin, mode),
            (None, None) => pwm.resolve(pin).map(|_| ()),
        }
        .map_err(err())?;

        if let Some(hz) = self.freq {
            pwm.set_freq_hz(pin, hz).map_err(err())?;
        }
        if let Some(divisor) = self.prescaler {
            pwm.set_prescaler(pin, divisor).map_err(err())?;
        }
        if let Some(percent) = self.duty {
            pwm.set_duty_cycle(pin, percent).map_err(err())?;
        }
        if let Some(output) = self.output {
            pwm.set_output_type(pin, output).map_err(err())?;
        }
        Ok(())
    }
}

/// Match `value` against the display names of `all`, or a raw number.
fn parse_named<T>(kind: &'static str, all: &[T], value: &str) -> Result<T, InspectError>
where
    T: Copy + Display + TryFrom<u8>,
{
    let wanted = value.trim().to_ascii_lowercase();
    if let Some(found) = all.iter().find(|v| v.to_string() == wanted) {
        return Ok(*found);
    }
    wanted
        .parse::<u8>()
        .ok()
        .and_then(|raw| T::try_from(raw).ok())
        .ok_or_else(|| InspectError::UnknownName {
            kind,
            value: value.to_string(),
        })
}

/// `fast`, `phase-correct`, `ctc`, ... or the raw mode number.
pub fn parse_mode(value: &str) -> Result<WaveformMode, InspectError> {
    parse_named("mode", &WaveformMode::ALL, value)
}

/// `10-bit`, `top-input-capture`, ... or the raw setting number.
pub fn parse_advanced(value: &str) -> Result<AdvancedMode, InspectError> {
    parse_named("setting", &AdvancedMode::ALL, value)
}

/// `enabled`, `inverted`, `toggle`, `disabled` or the raw number.
pub fn parse_output(value: &str) -> Result<OutputType, InspectError> {
    parse_named("output type", &OutputType::ALL, value)
}

/// Parse a JSON array of signal configurations.
pub fn parse_configs(json: &str) -> Result<Vec<PwmSignalConfig>, InspectError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_configs(path: &Path) -> Result<Vec<PwmSignalConfig>, InspectError> {
    let json = fs::read_to_string(path).map_err(|source| InspectError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_configs(&json)
}

/// Run `Pwm::init` for every configuration, stopping at the first failure.
pub fn apply_configs<R: RegisterBlock, G: PinDirection>(
    pwm: &mut Pwm<R>,
    configs: &[PwmSignalConfig],
    gpio: &mut G,
) -> Result<(), InspectError> {
    for config in configs {
        pwm.init(config, gpio).map_err(InspectError::pwm(config.pin))?;
    }
    Ok(())
}
