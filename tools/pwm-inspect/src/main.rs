use std::path::PathBuf;

use anyhow::Result;
use avr_pwm::mock::{MockGpio, MockRegisters};
use avr_pwm::{Hertz, Pin};
use clap::Parser;
use pwm_inspect::{
    apply_configs, board_listing, load_configs, logger, parse_advanced, parse_mode,
    parse_output, InspectError, Report, Request,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Show the timer registers a PWM configuration produces"
)]
struct Opts {
    /// Arduino pin number
    #[arg(long)]
    pin: Option<u8>,

    /// Waveform mode: normal, fast, phase-correct, ctc, phase-frequency-correct
    #[arg(long)]
    mode: Option<String>,

    /// Timer-specific refinement, e.g. 10-bit or top-input-capture
    #[arg(long)]
    setting: Option<String>,

    /// Frequency in whole hertz, e.g. 490 or 976
    #[arg(long, value_name = "HZ")]
    freq: Option<u32>,

    /// Prescaler divisor instead of a frequency, e.g. 64
    #[arg(long, value_name = "DIVISOR", conflicts_with = "freq")]
    prescaler: Option<u16>,

    /// Duty cycle in percent
    #[arg(long, value_name = "PERCENT")]
    duty: Option<u8>,

    /// Output type: enabled, inverted, toggle, disabled
    #[arg(long)]
    output: Option<String>,

    /// JSON array of signal configurations, applied with init
    #[arg(long, value_name = "FILE", conflicts_with = "pin")]
    config: Option<PathBuf>,

    /// Print the register image as JSON
    #[arg(long)]
    json: bool,

    /// List the board's pins, timers and frequencies
    #[arg(long)]
    list: bool,

    /// Show the encoder's log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Opts {
    fn request(&self) -> Result<Request, InspectError> {
        let pin = self.pin.ok_or(InspectError::MissingPin)?;
        let mut request = Request::new(Pin::new(pin));
        request.mode = self.mode.as_deref().map(parse_mode).transpose()?;
        request.advanced = self.setting.as_deref().map(parse_advanced).transpose()?;
        request.freq = self.freq.map(Hertz);
        request.prescaler = self.prescaler;
        request.duty = self.duty;
        request.output = self.output.as_deref().map(parse_output).transpose()?;
        Ok(request)
    }
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    logger(opts.verbose).init();

    let board = avr_pwm::board();
    if opts.list {
        print!("{}", board_listing(board));
        return Ok(());
    }

    let mut pwm = avr_pwm::pwm(MockRegisters::new());
    let before = pwm.snapshot();

    if let Some(path) = &opts.config {
        let configs = load_configs(path)?;
        let mut gpio = MockGpio::new();
        apply_configs(&mut pwm, &configs, &mut gpio)?;
        let pins: Vec<String> = gpio.outputs().iter().map(|p| p.to_string()).collect();
        eprintln!("outputs: {}", pins.join(", "));
    } else {
        opts.request()?.apply(&mut pwm)?;
    }

    let report = Report::capture(&before, &pwm);
    if opts.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
