//! Host-side inspection of PWM register encodings.
//!
//! Runs the encoder of the selected board against the mock register block
//! and reports the resulting register image, so a configuration can be
//! checked against the datasheet without hardware.

mod error;
mod report;
mod request;

pub use error::InspectError;
pub use report::{board_listing, RegisterEntry, Report};
pub use request::{
    apply_configs, load_configs, parse_advanced, parse_configs, parse_mode, parse_output, Request,
};

use log::LevelFilter;

/// Logger for the encoder's `log` output: warnings by default, `-v` debug,
/// `-vv` trace.
pub fn logger(verbose: u8) -> env_logger::Builder {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).format_timestamp(None);
    builder
}

#[cfg(test)]
mod tests;
