//! Value type tests for pwm-core

use pwm_core::{
    AdvancedMode, FrequencyChoice, FromValueType, Hertz, MilliHertz, OutputType, Pin, PwmError,
    WaveformMode,
};

#[test]
fn test_error_display() {
    assert_eq!(
        PwmError::InvalidDutyCycleValue.to_string(),
        "Duty cycle must be within 0..=100"
    );
    assert_eq!(PwmError::InvalidPin.to_string(), "Pin is not PWM-capable on this board");
}

#[test]
fn test_error_is_embedded_hal_error() {
    use embedded_hal::pwm::{Error, ErrorKind};
    assert_eq!(PwmError::InvalidFrequency.kind(), ErrorKind::Other);
}

#[test]
fn test_frequency_units() {
    assert_eq!(Hertz::from(16u32.MHz()), Hertz(16_000_000));
    assert_eq!(Hertz::from(31u32.kHz()), 31_000u32.Hz());
    assert_eq!(MilliHertz::from(Hertz(490)), MilliHertz(490_000));
}

#[test]
fn test_nominal_frequency_display() {
    assert_eq!(FrequencyChoice::Hz31372_55.to_string(), "31372.55Hz");
    assert_eq!(FrequencyChoice::Hz490_2.to_string(), "490.2Hz");
    assert_eq!(FrequencyChoice::Hz62500.to_string(), "62500Hz");
    assert_eq!(FrequencyChoice::Hz7812_5.to_string(), "7812.5Hz");
}

#[test]
fn test_whole_hertz_truncates() {
    assert_eq!(FrequencyChoice::Hz980_39.nominal().whole_hertz(), Hertz(980));
    assert_eq!(FrequencyChoice::Hz30_64.nominal().whole_hertz(), Hertz(30));
}

#[test]
fn test_enum_display() {
    assert_eq!(WaveformMode::PhaseCorrect.to_string(), "phase-correct");
    assert_eq!(AdvancedMode::TenBit.to_string(), "10-bit");
    assert_eq!(OutputType::ToggleOnCompare.to_string(), "toggle");
    assert_eq!(Pin::new(11).to_string(), "D11");
}

#[test]
fn test_output_type_default_is_disabled() {
    assert_eq!(OutputType::default(), OutputType::Disabled);
}
