//! Register image rendering

use std::fmt::Write;

use avr_pwm::{BoardProfile, CounterWidth, Pwm, RegisterBlock, RegisterSnapshot};
use colored::Colorize;
use serde::Serialize;

/// One register of the image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterEntry {
    pub name: String,
    pub timer: String,
    pub value: u16,
    /// Differs from the value before the run
    pub changed: bool,
}

/// Register image of a board after a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub board: String,
    pub registers: Vec<RegisterEntry>,
}

impl Report {
    /// Compare the encoder's current registers against `before`.
    pub fn capture<R: RegisterBlock>(before: &RegisterSnapshot, pwm: &Pwm<R>) -> Self {
        let registers = pwm
            .snapshot()
            .iter()
            .map(|(register, value)| {
                let old = before
                    .iter()
                    .find(|(r, _)| r == register)
                    .map(|(_, v)| *v);
                RegisterEntry {
                    name: register.to_string(),
                    timer: register.timer.to_string(),
                    value: *value,
                    changed: old != Some(*value),
                }
            })
            .collect();
        Self {
            board: pwm.board().name.to_string(),
            registers,
        }
    }

    pub fn changed(&self) -> impl Iterator<Item = &RegisterEntry> {
        self.registers.iter().filter(|e| e.changed)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable table, changed registers highlighted.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.board.bold());
        let mut timer = "";
        for entry in &self.registers {
            if entry.timer != timer {
                timer = entry.timer.as_str();
                let _ = writeln!(out, "  {}", timer.cyan());
            }
            let line = format!(
                "{:<7} {:#06x} {:>5}  {:#010b}",
                entry.name, entry.value, entry.value, entry.value & 0xFF
            );
            if entry.changed {
                let _ = writeln!(out, "    {}", line.green().bold());
            } else {
                let _ = writeln!(out, "    {}", line.dimmed());
            }
        }
        out
    }
}

fn width_name(width: CounterWidth) -> &'static str {
    match width {
        CounterWidth::Eight => "8-bit",
        CounterWidth::Sixteen => "16-bit",
    }
}

/// Pins, timers and selectable frequencies of `board`.
pub fn board_listing(board: &BoardProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", board.name.bold(), board.clock);
    for profile in board.timers {
        let pins: Vec<String> = board
            .pins
            .iter()
            .filter(|a| a.timer == profile.timer)
            .map(|a| format!("{}/{}", a.pin, a.channel))
            .collect();
        let _ = writeln!(
            out,
            "  {} {:<6} pins {}",
            profile.timer.to_string().cyan(),
            width_name(profile.width),
            pins.join(", ")
        );
        for (choice, cs) in profile.frequencies {
            let _ = writeln!(
                out,
                "    {:>11}  clk/{:<4} CS={:03b}",
                choice.to_string(),
                cs.divisor,
                cs.bits
            );
        }
    }
    out
}
