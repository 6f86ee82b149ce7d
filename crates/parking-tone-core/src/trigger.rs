//! Sensor trigger pulse
//!
//! The rangefinder starts a ranging cycle on a short low pulse of its trigger
//! line, which idles high. Pulse timing uses a blocking microsecond delay: the
//! caller busy-waits, so this must not be used from interrupt context.

use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::constants::TRIGGER_PULSE_US;

/// Trigger line plus the blocking delay used to shape the pulse
pub struct TriggerPulse<P, D> {
    pin: P,
    delay: D,
    width_us: u32,
}

impl<P: OutputPin, D: DelayNs> TriggerPulse<P, D> {
    /// Take the trigger pin and drive it to its idle (high) level
    pub fn new(mut pin: P, delay: D) -> Result<Self, P::Error> {
        pin.set_high()?;
        Ok(Self {
            pin,
            delay,
            width_us: TRIGGER_PULSE_US,
        })
    }

    /// Override the pulse width
    pub fn with_width_us(mut self, width_us: u32) -> Self {
        self.width_us = width_us;
        self
    }

    /// Pulse the trigger line: low for the pulse width, then high for the same
    /// time before returning
    pub fn fire(&mut self) -> Result<(), P::Error> {
        self.pin.set_low()?;
        self.pause(self.width_us);
        self.pin.set_high()?;
        self.pause(self.width_us);
        Ok(())
    }

    /// Block for `us` microseconds
    pub fn pause(&mut self, us: u32) {
        self.delay.delay_us(us);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;
    use std::{cell::RefCell, rc::Rc, vec::Vec};

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Step {
        Low,
        High,
        Wait(u32),
    }

    type Log = Rc<RefCell<Vec<Step>>>;

    struct LogPin(Log);

    impl ErrorType for LogPin {
        type Error = Infallible;
    }

    impl OutputPin for LogPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.0.borrow_mut().push(Step::Low);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.0.borrow_mut().push(Step::High);
            Ok(())
        }
    }

    struct LogDelay(Log);

    impl DelayNs for LogDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.0.borrow_mut().push(Step::Wait(ns / 1000));
        }

        fn delay_us(&mut self, us: u32) {
            self.0.borrow_mut().push(Step::Wait(us));
        }
    }

    #[test]
    fn idles_high_after_construction() {
        let log: Log = Rc::default();
        let _pulse = TriggerPulse::new(LogPin(log.clone()), LogDelay(log.clone())).unwrap();
        assert_eq!(*log.borrow(), [Step::High]);
    }

    #[test]
    fn fire_shapes_low_pulse() {
        let log: Log = Rc::default();
        let mut pulse = TriggerPulse::new(LogPin(log.clone()), LogDelay(log.clone())).unwrap();
        log.borrow_mut().clear();

        pulse.fire().unwrap();
        assert_eq!(
            *log.borrow(),
            [
                Step::Low,
                Step::Wait(TRIGGER_PULSE_US),
                Step::High,
                Step::Wait(TRIGGER_PULSE_US),
            ]
        );
    }

    #[test]
    fn custom_width() {
        let log: Log = Rc::default();
        let mut pulse = TriggerPulse::new(LogPin(log.clone()), LogDelay(log.clone()))
            .unwrap()
            .with_width_us(10);
        log.borrow_mut().clear();

        pulse.fire().unwrap();
        assert_eq!(log.borrow()[1], Step::Wait(10));
        assert_eq!(log.borrow()[3], Step::Wait(10));
    }
}
