//! Encoding tables for the three ATmega328P timers

use pwm_core::{
    AdvancedMode::{
        CompareOutputDisconnect, CompareOutputToggle, NineBit, TenBit, TopCompareA,
        TopInputCapture,
    },
    AdvancedRule, BitField, ClockSelect, CompareOutputBits, ControlBits, CounterWidth,
    FrequencyChoice, Timer, TimerProfile,
    WaveformMode::{ClearTimerOnCompare, Fast, Normal, PhaseCorrect, PhaseFrequencyCorrect},
};

use crate::bits::*;

const fn a(field: BitField) -> ControlBits {
    ControlBits::new(field, BitField::EMPTY)
}

const fn b(field: BitField) -> ControlBits {
    ControlBits::new(BitField::EMPTY, field)
}

const COMPARE_OUTPUTS: [CompareOutputBits; 2] = [
    CompareOutputBits::new(bv(COMNA1), bv(COMNA0)),
    CompareOutputBits::new(bv(COMNB1), bv(COMNB0)),
];

// Timer0: 8-bit, OC0A = D6, OC0B = D5

const T0_RESET: ControlBits = ControlBits::new(
    BitField::clear(bv(WGM01) | bv(WGM00)),
    BitField::clear(bv(WGM02)),
);

/// Base pattern in TCCR0A; WGM02 is cleared so a previous toggle overlay
/// does not survive a mode change.
const fn t0(field: BitField) -> ControlBits {
    ControlBits::new(field, BitField::clear(bv(WGM02)))
}

pub const TIMER0: TimerProfile = TimerProfile {
    timer: Timer::Timer0,
    width: CounterWidth::Eight,
    modes: &[
        (Normal, T0_RESET),
        (Fast, t0(BitField::set(bv(WGM01) | bv(WGM00)))),
        (PhaseCorrect, t0(BitField::new(bv(WGM00), bv(WGM01)))),
        (ClearTimerOnCompare, t0(BitField::new(bv(WGM01), bv(WGM00)))),
    ],
    reset_mode: T0_RESET,
    advanced: &[
        AdvancedRule::new(Fast, CompareOutputToggle, b(BitField::set(bv(WGM02)))),
        AdvancedRule::new(PhaseCorrect, CompareOutputToggle, b(BitField::set(bv(WGM02)))),
        AdvancedRule::any_mode(CompareOutputDisconnect, b(BitField::clear(bv(WGM02)))),
    ],
    clock_select_mask: CLOCK_SELECT_MASK,
    frequencies: &[
        (FrequencyChoice::Hz62500, ClockSelect::new(bv(CS0), 1)),
        (FrequencyChoice::Hz7812_5, ClockSelect::new(bv(CS1), 8)),
        (FrequencyChoice::Hz976_56, ClockSelect::new(bv(CS1) | bv(CS0), 64)),
        (FrequencyChoice::Hz244_14, ClockSelect::new(bv(CS2), 256)),
        (FrequencyChoice::Hz61_04, ClockSelect::new(bv(CS2) | bv(CS0), 1024)),
    ],
    outputs: COMPARE_OUTPUTS,
};

// Timer1: 16-bit, OC1A = D9, OC1B = D10

const T1_RESET: ControlBits = ControlBits::new(
    BitField::clear(bv(WGM11) | bv(WGM10)),
    BitField::clear(bv(WGM13) | bv(WGM12)),
);

pub const TIMER1: TimerProfile = TimerProfile {
    timer: Timer::Timer1,
    width: CounterWidth::Sixteen,
    modes: &[
        (Normal, T1_RESET),
        // WGM 5: fast PWM, 8-bit
        (
            Fast,
            ControlBits::new(
                BitField::new(bv(WGM10), bv(WGM11)),
                BitField::new(bv(WGM12), bv(WGM13)),
            ),
        ),
        // WGM 1: phase correct, 8-bit
        (
            PhaseCorrect,
            ControlBits::new(
                BitField::new(bv(WGM10), bv(WGM11)),
                BitField::clear(bv(WGM13) | bv(WGM12)),
            ),
        ),
        // WGM 12: CTC, TOP = ICR1
        (
            ClearTimerOnCompare,
            ControlBits::new(
                BitField::clear(bv(WGM11) | bv(WGM10)),
                BitField::set(bv(WGM13) | bv(WGM12)),
            ),
        ),
        // WGM 9: phase and frequency correct, TOP = OCR1A
        (
            PhaseFrequencyCorrect,
            ControlBits::new(
                BitField::new(bv(WGM10), bv(WGM11)),
                BitField::new(bv(WGM13), bv(WGM12)),
            ),
        ),
    ],
    reset_mode: T1_RESET,
    advanced: &[
        AdvancedRule::new(Fast, NineBit, a(BitField::new(bv(WGM11), bv(WGM10)))),
        AdvancedRule::new(PhaseCorrect, NineBit, a(BitField::new(bv(WGM11), bv(WGM10)))),
        AdvancedRule::new(Fast, TenBit, a(BitField::set(bv(WGM11) | bv(WGM10)))),
        AdvancedRule::new(PhaseCorrect, TenBit, a(BitField::set(bv(WGM11) | bv(WGM10)))),
        // WGM 14
        AdvancedRule::new(
            Fast,
            TopInputCapture,
            ControlBits::new(
                BitField::new(bv(WGM11), bv(WGM10)),
                BitField::set(bv(WGM13) | bv(WGM12)),
            ),
        ),
        // WGM 10
        AdvancedRule::new(
            PhaseCorrect,
            TopInputCapture,
            ControlBits::new(
                BitField::new(bv(WGM11), bv(WGM10)),
                BitField::set(bv(WGM13)),
            ),
        ),
        // WGM 8
        AdvancedRule::new(
            PhaseFrequencyCorrect,
            TopInputCapture,
            a(BitField::clear(bv(WGM10))),
        ),
        // WGM 15
        AdvancedRule::new(
            Fast,
            TopCompareA,
            ControlBits::new(
                BitField::set(bv(WGM11) | bv(WGM10)),
                BitField::set(bv(WGM13) | bv(WGM12)),
            ),
        ),
        // WGM 11
        AdvancedRule::new(
            PhaseCorrect,
            TopCompareA,
            ControlBits::new(BitField::set(bv(WGM11)), BitField::set(bv(WGM13))),
        ),
        // WGM 4
        AdvancedRule::new(
            ClearTimerOnCompare,
            TopCompareA,
            b(BitField::clear(bv(WGM13))),
        ),
    ],
    clock_select_mask: CLOCK_SELECT_MASK,
    frequencies: &[
        (FrequencyChoice::Hz31372_55, ClockSelect::new(bv(CS0), 1)),
        (FrequencyChoice::Hz3921_16, ClockSelect::new(bv(CS1), 8)),
        (FrequencyChoice::Hz490_2, ClockSelect::new(bv(CS1) | bv(CS0), 64)),
        (FrequencyChoice::Hz122_55, ClockSelect::new(bv(CS2), 256)),
        (FrequencyChoice::Hz30_64, ClockSelect::new(bv(CS2) | bv(CS0), 1024)),
    ],
    outputs: COMPARE_OUTPUTS,
};

// Timer2: 8-bit, OC2A = D11, OC2B = D3

const T2_RESET: ControlBits = ControlBits::new(
    BitField::clear(bv(WGM21) | bv(WGM20)),
    BitField::clear(bv(WGM22)),
);

/// Base pattern in TCCR2A with WGM22 cleared
const fn t2(field: BitField) -> ControlBits {
    ControlBits::new(field, BitField::clear(bv(WGM22)))
}

const T2_CTC: ControlBits = t2(BitField::new(bv(WGM21), bv(WGM20)));

pub const TIMER2: TimerProfile = TimerProfile {
    timer: Timer::Timer2,
    width: CounterWidth::Eight,
    modes: &[
        (Normal, T2_RESET),
        (Fast, t2(BitField::set(bv(WGM21) | bv(WGM20)))),
        (PhaseCorrect, t2(BitField::new(bv(WGM20), bv(WGM21)))),
        (ClearTimerOnCompare, T2_CTC),
        (PhaseFrequencyCorrect, T2_CTC),
    ],
    reset_mode: T2_RESET,
    advanced: &[
        AdvancedRule::new(Fast, CompareOutputToggle, b(BitField::set(bv(WGM22)))),
        AdvancedRule::new(PhaseCorrect, CompareOutputToggle, b(BitField::set(bv(WGM22)))),
        AdvancedRule::any_mode(CompareOutputDisconnect, b(BitField::clear(bv(WGM22)))),
    ],
    clock_select_mask: CLOCK_SELECT_MASK,
    // Timer2 has the extra /32 and /128 prescalers.
    frequencies: &[
        (FrequencyChoice::Hz31372_55, ClockSelect::new(bv(CS0), 1)),
        (FrequencyChoice::Hz3921_16, ClockSelect::new(bv(CS1), 8)),
        (FrequencyChoice::Hz980_39, ClockSelect::new(bv(CS1) | bv(CS0), 32)),
        (FrequencyChoice::Hz490_2, ClockSelect::new(bv(CS2), 64)),
        (FrequencyChoice::Hz245_1, ClockSelect::new(bv(CS2) | bv(CS0), 128)),
        (FrequencyChoice::Hz122_55, ClockSelect::new(bv(CS2) | bv(CS1), 256)),
        (FrequencyChoice::Hz30_64, ClockSelect::new(bv(CS2) | bv(CS1) | bv(CS0), 1024)),
    ],
    outputs: COMPARE_OUTPUTS,
};
