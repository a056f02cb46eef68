use avr_pwm::mock::MockRegisters;
use avr_pwm::{pins, WaveformMode};

use crate::{board_listing, Report};

#[test]
fn report_marks_changed_registers() {
    let mut pwm = avr_pwm::pwm(MockRegisters::new());
    let before = pwm.snapshot();
    pwm.set_mode(pins::D9, WaveformMode::Fast).unwrap();
    pwm.set_duty_cycle(pins::D10, 100).unwrap();

    let report = Report::capture(&before, &pwm);
    assert_eq!(report.board, "Arduino Uno");
    assert_eq!(report.registers.len(), 15);

    let changed: Vec<(&str, u16)> = report
        .changed()
        .map(|e| (e.name.as_str(), e.value))
        .collect();
    assert_eq!(changed, [("TCCR1A", 0x01), ("TCCR1B", 0x08), ("OCR1B", 0xFFFF)]);
}

#[test]
fn report_json() {
    let pwm = avr_pwm::pwm(MockRegisters::new());
    let report = Report::capture(&pwm.snapshot(), &pwm);

    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(value["board"], "Arduino Uno");
    assert_eq!(value["registers"][0]["name"], "TCCR0A");
    assert_eq!(value["registers"][0]["timer"], "Timer0");
    assert_eq!(value["registers"][0]["changed"], false);
}

#[test]
fn text_output_lists_every_register() {
    colored::control::set_override(false);
    let pwm = avr_pwm::pwm(MockRegisters::new());
    let text = Report::capture(&pwm.snapshot(), &pwm).render_text();

    assert!(text.starts_with("Arduino Uno\n"));
    assert!(text.contains("  Timer1\n"));
    assert!(text.contains("ICR1"));
    assert_eq!(text.lines().count(), 1 + 3 + 15);
}

#[test]
fn board_listing_shows_frequencies() {
    colored::control::set_override(false);
    let listing = board_listing(avr_pwm::board());

    assert!(listing.starts_with("Arduino Uno (16000000Hz)"));
    assert!(listing.contains("Timer2 8-bit  pins D3/B, D11/A"));
    assert!(listing.contains("980.39Hz  clk/32   CS=011"));
    assert!(listing.contains("Timer1 16-bit pins D9/A, D10/B"));
}
