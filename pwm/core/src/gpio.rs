//! GPIO collaborator used by `Pwm::init`
//!
//! Pin direction is owned by the board's GPIO driver. The encoder only asks
//! for a pin to become an output before its timer starts driving it.

use crate::error::PwmResult;
use crate::pin::Pin;

/// Configures pin direction
pub trait PinDirection {
    /// Make `pin` a push-pull output
    fn set_output(&mut self, pin: Pin) -> PwmResult<()>;
}

impl<G: PinDirection> PinDirection for &mut G {
    fn set_output(&mut self, pin: Pin) -> PwmResult<()> {
        (**self).set_output(pin)
    }
}
