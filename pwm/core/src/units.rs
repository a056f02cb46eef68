//! Frequency units
//!
//! ```
//! use pwm_core::units::{FromValueType, Hertz};
//!
//! assert_eq!(16u32.MHz(), Hertz(16_000_000));
//! assert_eq!(Hertz::from(2u32.kHz()), Hertz(2_000));
//! ```

use core::fmt;

macro_rules! define_frequency {
    ($( ($quantity:ident, $unit:ident, $print_unit:literal, $factor:expr), )+) => {
        $(
            #[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash, Default)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            pub struct $quantity(pub u32);

            impl $quantity {
                /// Value in whole hertz
                pub const fn to_hertz(self) -> Hertz {
                    Hertz(self.0 * $factor)
                }
            }

            impl From<$quantity> for u32 {
                fn from(x: $quantity) -> Self {
                    x.0
                }
            }

            impl fmt::Debug for $quantity {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    write!(f, "{}{}", self.0, $print_unit)
                }
            }

            impl fmt::Display for $quantity {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    write!(f, "{}{}", self.0, $print_unit)
                }
            }

            #[cfg(feature = "defmt")]
            impl defmt::Format for $quantity {
                fn format(&self, fmt: defmt::Formatter) {
                    defmt::write!(fmt, "{}{}", self.0, $print_unit);
                }
            }
        )*

        /// Extension methods turning integers into frequency quantities
        pub trait FromValueType {
            $(
                #[allow(non_snake_case)]
                fn $unit(self) -> $quantity;
            )*
        }

        impl FromValueType for u32 {
            $(
                fn $unit(self) -> $quantity {
                    $quantity(self)
                }
            )*
        }
    };
}

define_frequency! {
    (Hertz, Hz, "Hz", 1),
    (KiloHertz, kHz, "kHz", 1_000),
    (MegaHertz, MHz, "MHz", 1_000_000),
}

impl From<KiloHertz> for Hertz {
    fn from(x: KiloHertz) -> Self {
        x.to_hertz()
    }
}

impl From<MegaHertz> for Hertz {
    fn from(x: MegaHertz) -> Self {
        x.to_hertz()
    }
}

impl PartialEq<Hertz> for MegaHertz {
    fn eq(&self, other: &Hertz) -> bool {
        self.to_hertz() == *other
    }
}

impl PartialEq<MegaHertz> for Hertz {
    fn eq(&self, other: &MegaHertz) -> bool {
        *self == other.to_hertz()
    }
}

/// Frequency with millihertz resolution, used for nominal PWM frequencies
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MilliHertz(pub u32);

impl MilliHertz {
    /// Whole hertz, truncating the fractional part
    pub const fn whole_hertz(self) -> Hertz {
        Hertz(self.0 / 1_000)
    }
}

impl From<Hertz> for MilliHertz {
    fn from(x: Hertz) -> Self {
        MilliHertz(x.0 * 1_000)
    }
}

impl fmt::Debug for MilliHertz {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for MilliHertz {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let hz = self.0 / 1_000;
        let frac = self.0 % 1_000;
        if frac == 0 {
            write!(f, "{}Hz", hz)
        } else {
            let mut digits = frac;
            let mut width = 3;
            while digits % 10 == 0 {
                digits /= 10;
                width -= 1;
            }
            write!(f, "{}.{:0width$}Hz", hz, digits, width = width)
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MilliHertz {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}mHz", self.0);
    }
}
