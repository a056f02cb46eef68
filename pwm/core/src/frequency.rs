//! Discrete PWM frequencies and the prescaler selections that produce them

use core::fmt;

use crate::units::MilliHertz;

/// One of the frequencies a timer can produce at a 16 MHz input clock
///
/// The value set is the union over all timers. Each timer accepts only the
/// subset listed in its [`TimerProfile`](crate::TimerProfile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrequencyChoice {
    Hz31372_55,
    Hz3921_16,
    Hz980_39,
    Hz490_2,
    Hz245_1,
    Hz122_55,
    Hz30_64,
    Hz62500,
    Hz7812_5,
    Hz976_56,
    Hz244_14,
    Hz61_04,
}

impl FrequencyChoice {
    pub const ALL: [FrequencyChoice; 12] = [
        FrequencyChoice::Hz31372_55,
        FrequencyChoice::Hz3921_16,
        FrequencyChoice::Hz980_39,
        FrequencyChoice::Hz490_2,
        FrequencyChoice::Hz245_1,
        FrequencyChoice::Hz122_55,
        FrequencyChoice::Hz30_64,
        FrequencyChoice::Hz62500,
        FrequencyChoice::Hz7812_5,
        FrequencyChoice::Hz976_56,
        FrequencyChoice::Hz244_14,
        FrequencyChoice::Hz61_04,
    ];

    /// Nominal output frequency
    pub const fn nominal(self) -> MilliHertz {
        let mhz = match self {
            FrequencyChoice::Hz31372_55 => 31_372_550,
            FrequencyChoice::Hz3921_16 => 3_921_160,
            FrequencyChoice::Hz980_39 => 980_390,
            FrequencyChoice::Hz490_2 => 490_200,
            FrequencyChoice::Hz245_1 => 245_100,
            FrequencyChoice::Hz122_55 => 122_550,
            FrequencyChoice::Hz30_64 => 30_640,
            FrequencyChoice::Hz62500 => 62_500_000,
            FrequencyChoice::Hz7812_5 => 7_812_500,
            FrequencyChoice::Hz976_56 => 976_560,
            FrequencyChoice::Hz244_14 => 244_140,
            FrequencyChoice::Hz61_04 => 61_040,
        };
        MilliHertz(mhz)
    }
}

impl fmt::Display for FrequencyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.nominal(), f)
    }
}

/// Clock-select field value together with the divisor it selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockSelect {
    /// Bits written into the clock-select field
    pub bits: u8,
    /// Prescaler ratio applied to the input clock
    pub divisor: u16,
}

impl ClockSelect {
    pub const fn new(bits: u8, divisor: u16) -> Self {
        Self { bits, divisor }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominal_values_are_distinct() {
        for (i, a) in FrequencyChoice::ALL.iter().enumerate() {
            for b in &FrequencyChoice::ALL[i + 1..] {
                assert_ne!(a.nominal(), b.nominal());
            }
        }
    }
}
