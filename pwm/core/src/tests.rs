//! Encoder tests against a small synthetic board

use embedded_hal::pwm::SetDutyCycle;

use crate::mock::{MockGpio, MockRegisters};
use crate::*;

const FAST: ControlBits = ControlBits::new(BitField::new(0b11, 0), BitField::EMPTY);
const RESET: ControlBits = ControlBits::new(BitField::clear(0b11), BitField::clear(0b1000));
const TOGGLE_TOP: ControlBits = ControlBits::new(BitField::EMPTY, BitField::set(0b1000));

const TEST_TIMERS: [TimerProfile; 2] = [
    TimerProfile {
        timer: Timer::Timer0,
        width: CounterWidth::Eight,
        modes: &[(WaveformMode::Fast, FAST)],
        reset_mode: RESET,
        advanced: &[AdvancedRule::new(
            WaveformMode::Fast,
            AdvancedMode::CompareOutputToggle,
            TOGGLE_TOP,
        )],
        clock_select_mask: 0b111,
        frequencies: &[
            (FrequencyChoice::Hz62500, ClockSelect::new(0b001, 1)),
            (FrequencyChoice::Hz976_56, ClockSelect::new(0b011, 64)),
        ],
        outputs: [
            CompareOutputBits::new(1 << 7, 1 << 6),
            CompareOutputBits::new(1 << 5, 1 << 4),
        ],
    },
    TimerProfile {
        timer: Timer::Timer1,
        width: CounterWidth::Sixteen,
        modes: &[(WaveformMode::Fast, FAST)],
        reset_mode: RESET,
        advanced: &[],
        clock_select_mask: 0b111,
        frequencies: &[(FrequencyChoice::Hz490_2, ClockSelect::new(0b011, 64))],
        outputs: [
            CompareOutputBits::new(1 << 7, 1 << 6),
            CompareOutputBits::new(1 << 5, 1 << 4),
        ],
    },
];

static TEST_BOARD: BoardProfile = BoardProfile {
    name: "test",
    clock: Hertz(16_000_000),
    pins: &[
        PinAssignment::new(Pin::new(1), Timer::Timer0, Channel::A),
        PinAssignment::new(Pin::new(2), Timer::Timer0, Channel::B),
        PinAssignment::new(Pin::new(3), Timer::Timer1, Channel::A),
        // Timer2 has no profile on this board.
        PinAssignment::new(Pin::new(4), Timer::Timer2, Channel::A),
    ],
    timers: &TEST_TIMERS,
};

fn pwm() -> Pwm<MockRegisters> {
    Pwm::new(&TEST_BOARD, MockRegisters::new())
}

fn tccr_a(pwm: &Pwm<MockRegisters>, timer: Timer) -> u16 {
    pwm.registers().value(Register::control_a(timer))
}

fn tccr_b(pwm: &Pwm<MockRegisters>, timer: Timer) -> u16 {
    pwm.registers().value(Register::control_b(timer))
}

#[test]
fn test_unknown_pin_writes_nothing() {
    let mut pwm = pwm();
    let pin = Pin::new(42);

    assert_eq!(pwm.resolve_timer(pin), Err(PwmError::InvalidPin));
    assert_eq!(pwm.set_mode(pin, WaveformMode::Fast), Err(PwmError::InvalidPin));
    assert_eq!(
        pwm.set_advanced_mode(pin, WaveformMode::Fast, AdvancedMode::TenBit),
        Err(PwmError::InvalidPin)
    );
    assert_eq!(pwm.set_freq(pin, FrequencyChoice::Hz62500), Err(PwmError::InvalidPin));
    assert_eq!(pwm.set_duty_cycle(pin, 101), Err(PwmError::InvalidPin));
    assert_eq!(pwm.set_output_type(pin, OutputType::Enabled), Err(PwmError::InvalidPin));
    assert_eq!(pwm.set_offset(pin, 10), Err(PwmError::InvalidPin));
    assert_eq!(pwm.registers().write_count(), 0);
}

#[test]
fn test_pin_on_unimplemented_timer_is_invalid() {
    let mut pwm = pwm();
    assert_eq!(pwm.set_duty_cycle(Pin::new(4), 10), Err(PwmError::InvalidPin));
    assert_eq!(pwm.registers().write_count(), 0);
}

#[test]
fn test_missing_mode_falls_back_to_reset() {
    let regs = MockRegisters::new()
        .with_value(Register::control_a(Timer::Timer0), 0b1000_0011)
        .with_value(Register::control_b(Timer::Timer0), 0b0000_1011);
    let mut pwm = Pwm::new(&TEST_BOARD, regs);

    pwm.set_mode(Pin::new(1), WaveformMode::PhaseCorrect).unwrap();

    assert_eq!(tccr_a(&pwm, Timer::Timer0), 0b1000_0000);
    assert_eq!(tccr_b(&pwm, Timer::Timer0), 0b0000_0011);
}

#[test]
fn test_raw_values() {
    let mut pwm = pwm();
    assert_eq!(pwm.set_mode_raw(Pin::new(1), 9), Err(PwmError::UndefinedValue));
    assert_eq!(
        pwm.set_advanced_mode_raw(Pin::new(1), 1, 99),
        Err(PwmError::UndefinedValue)
    );
    assert_eq!(pwm.set_mode_raw(Pin::new(9), 9), Err(PwmError::InvalidPin));
    assert_eq!(pwm.registers().write_count(), 0);

    pwm.set_mode_raw(Pin::new(1), WaveformMode::Fast as u8).unwrap();
    assert_eq!(tccr_a(&pwm, Timer::Timer0), 0b11);
}

#[test]
fn test_advanced_mode_composes_base_and_overlay() {
    let mut composed = pwm();
    composed
        .set_advanced_mode(Pin::new(2), WaveformMode::Fast, AdvancedMode::CompareOutputToggle)
        .unwrap();

    let mut manual = pwm();
    manual.set_mode(Pin::new(2), WaveformMode::Fast).unwrap();
    let mut regs = manual.release();
    regs.apply(Register::control_b(Timer::Timer0), TOGGLE_TOP.b);
    let manual = Pwm::new(&TEST_BOARD, regs);

    assert_eq!(composed.snapshot(), manual.snapshot());
}

#[test]
fn test_advanced_setting_without_rule_is_noop() {
    let mut pwm = pwm();
    pwm.set_advanced_mode(Pin::new(3), WaveformMode::Fast, AdvancedMode::NineBit)
        .unwrap();
    assert_eq!(tccr_a(&pwm, Timer::Timer1), 0b11);
    assert_eq!(tccr_b(&pwm, Timer::Timer1), 0);
}

#[test]
fn test_invalid_frequency_leaves_clock_select_cleared() {
    let regs = MockRegisters::new().with_value(Register::control_b(Timer::Timer1), 0b1000_0101);
    let mut pwm = Pwm::new(&TEST_BOARD, regs);

    assert_eq!(
        pwm.set_freq(Pin::new(3), FrequencyChoice::Hz62500),
        Err(PwmError::InvalidFrequency)
    );
    assert_eq!(tccr_b(&pwm, Timer::Timer1), 0b1000_0000);
}

#[test]
fn test_frequency_by_hertz() {
    let mut pwm = pwm();
    pwm.set_freq_hz(Pin::new(1), Hertz(976)).unwrap();
    assert_eq!(tccr_b(&pwm, Timer::Timer0), 0b011);

    assert_eq!(
        pwm.set_freq_hz(Pin::new(1), Hertz(1000)),
        Err(PwmError::InvalidFrequency)
    );
    assert_eq!(tccr_b(&pwm, Timer::Timer0), 0);
}

#[test]
fn test_duty_cycle_scaling_depends_on_width() {
    let mut pwm = pwm();
    pwm.set_duty_cycle(Pin::new(1), 100).unwrap();
    pwm.set_duty_cycle(Pin::new(3), 100).unwrap();

    assert_eq!(pwm.duty_cycle(Pin::new(1)), Ok(255));
    assert_eq!(pwm.duty_cycle(Pin::new(3)), Ok(65535));
    assert_eq!(pwm.duty_cycle(Pin::new(2)), Ok(0));
}

#[test]
fn test_raw_output_type_falls_back_to_disconnect() {
    let mut pwm = pwm();
    pwm.set_output_type(Pin::new(2), OutputType::Inverted).unwrap();
    pwm.set_output_type(Pin::new(1), OutputType::Enabled).unwrap();
    assert_eq!(tccr_a(&pwm, Timer::Timer0), 0b1011_0000);

    pwm.set_output_type_raw(Pin::new(2), 77).unwrap();
    assert_eq!(tccr_a(&pwm, Timer::Timer0), 0b1000_0000);
}

#[test]
fn test_offset_is_unsupported() {
    let mut pwm = pwm();
    assert_eq!(pwm.set_offset(Pin::new(1), 25), Err(PwmError::Unsupported));
    assert_eq!(pwm.registers().write_count(), 0);
}

#[test]
fn test_init_configures_gpio_then_registers() {
    let mut pwm = pwm();
    let mut gpio = MockGpio::new();
    let config = PwmSignalConfig::new(Pin::new(1), WaveformMode::Fast, FrequencyChoice::Hz976_56)
        .with_duty_cycle(50);

    pwm.init(&config, &mut gpio).unwrap();

    assert_eq!(gpio.outputs(), &[Pin::new(1)]);
    assert_eq!(tccr_a(&pwm, Timer::Timer0), 0b1000_0011);
    assert_eq!(tccr_b(&pwm, Timer::Timer0), 0b011);
    assert_eq!(pwm.duty_cycle(Pin::new(1)), Ok(127));
}

#[test]
fn test_init_rejects_before_writing() {
    let mut pwm = pwm();
    let mut gpio = MockGpio::new();

    let bad_freq = PwmSignalConfig::new(Pin::new(3), WaveformMode::Fast, FrequencyChoice::Hz62500);
    assert_eq!(pwm.init(&bad_freq, &mut gpio), Err(PwmError::InvalidFrequency));

    let bad_duty = PwmSignalConfig::new(Pin::new(3), WaveformMode::Fast, FrequencyChoice::Hz490_2)
        .with_duty_cycle(150);
    assert_eq!(pwm.init(&bad_duty, &mut gpio), Err(PwmError::InvalidDutyCycleValue));

    let mut refusing = MockGpio::refusing(Pin::new(3));
    let good = PwmSignalConfig::new(Pin::new(3), WaveformMode::Fast, FrequencyChoice::Hz490_2);
    assert_eq!(pwm.init(&good, &mut refusing), Err(PwmError::Gpio));

    assert!(gpio.outputs().is_empty());
    assert_eq!(pwm.registers().write_count(), 0);
}

#[test]
fn test_channel_set_duty_cycle() {
    let mut pwm = pwm();
    {
        let mut channel = pwm.channel(Pin::new(3)).unwrap();
        assert_eq!(channel.max_duty_cycle(), 0xFFFF);
        channel.set_duty_cycle_percent(25).unwrap();
        assert_eq!(channel.duty(), 16383);
    }
    let mut channel = pwm.channel(Pin::new(2)).unwrap();
    assert_eq!(channel.max_duty_cycle(), 0xFF);
    assert_eq!(channel.set_duty_cycle(256), Err(PwmError::InvalidDutyCycleValue));
    channel.set_duty_cycle_fully_on().unwrap();
    assert_eq!(pwm.duty_cycle(Pin::new(2)), Ok(255));
}

#[test]
fn test_snapshot_covers_implemented_timers() {
    let pwm = pwm();
    let snapshot = pwm.snapshot();
    assert_eq!(snapshot.len(), 10);
    assert!(snapshot.iter().all(|(r, _)| r.timer != Timer::Timer2));
}

#[test]
fn test_snapshot_lists_repeated_timer_once() {
    static REPEATED: [TimerProfile; 4] = [
        TEST_TIMERS[0],
        TEST_TIMERS[1],
        TEST_TIMERS[0],
        TEST_TIMERS[1],
    ];
    static BOARD: BoardProfile = BoardProfile {
        name: "repeated",
        clock: Hertz(16_000_000),
        pins: &[],
        timers: &REPEATED,
    };

    let snapshot = Pwm::new(&BOARD, MockRegisters::new()).snapshot();
    assert_eq!(snapshot.len(), 10);
    for (i, (a, _)) in snapshot.iter().enumerate() {
        assert!(snapshot[i + 1..].iter().all(|(b, _)| b != a));
    }
}

#[test]
fn test_prescaler_selection() {
    let mut pwm = pwm();
    pwm.set_prescaler(Pin::new(1), 64).unwrap();
    assert_eq!(tccr_b(&pwm, Timer::Timer0), 0b011);

    assert_eq!(pwm.set_prescaler(Pin::new(1), 8), Err(PwmError::InvalidFrequency));
    assert_eq!(tccr_b(&pwm, Timer::Timer0), 0);
    assert_eq!(pwm.set_prescaler(Pin::new(9), 64), Err(PwmError::InvalidPin));
}

#[test]
fn test_shared_pwm() {
    static SHARED: SharedPwm<MockRegisters> = SharedPwm::new();

    assert_eq!(SHARED.with(|_| ()), None);
    assert!(SHARED.install(pwm()).is_none());

    let result = SHARED.with(|pwm| pwm.set_duty_cycle(Pin::new(1), 100));
    assert_eq!(result, Some(Ok(())));

    let pwm = SHARED.take().unwrap();
    assert_eq!(pwm.duty_cycle(Pin::new(1)), Ok(255));
    assert!(SHARED.take().is_none());
}
