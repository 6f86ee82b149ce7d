//! Square wave tone generation
//!
//! The speaker is driven by toggling a plain output pin on every update event
//! of a periodic timer, so the audible wave runs at half the update rate.
//!
//! # Timer model
//! [`ToneTimer`] mirrors an up-counting hardware timer: the counter runs from
//! zero to the period register and raises an update event when it wraps, i.e.
//! every `reload + 1` ticks of [`TONE_TIMER_HZ`]. The firmware realises the same
//! update interval with an async ticker; tests step it with [`ToneTimer::tick`].
//!
//! # States
//! - Disabled: timer stopped, counter zero, pin low (initial state)
//! - Running: timer reloaded with `TONE_PERIOD / frequency`
//!
//! Reconfiguration takes `&mut self`, so the update handler can never observe a
//! half-applied period.

use embedded_hal::digital::OutputPin;

use crate::constants::{TONE_PERIOD, TONE_TIMER_HZ};

/// Request from the sampling loop to the tone generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToneCommand {
    /// Retune to a committed frequency
    Play(u16),
    /// No object in range
    Silence,
}

/// Tone generator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToneState {
    Disabled,
    /// Running at the committed frequency
    Running(u16),
}

/// Periodic timer driving the tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneTimer {
    enabled: bool,
    update_interrupt: bool,
    counter: u16,
    reload: u16,
}

impl ToneTimer {
    /// A stopped timer loaded with the base period
    pub const fn new() -> Self {
        Self {
            enabled: false,
            update_interrupt: false,
            counter: 0,
            reload: TONE_PERIOD,
        }
    }

    /// Stop counting and mask the update interrupt
    pub fn stop(&mut self) {
        self.update_interrupt = false;
        self.enabled = false;
    }

    pub fn reset_counter(&mut self) {
        self.counter = 0;
    }

    /// Load the period register
    pub fn set_reload(&mut self, reload: u16) {
        self.reload = reload;
    }

    /// Start counting with the update interrupt unmasked
    pub fn start(&mut self) {
        self.enabled = true;
        self.update_interrupt = true;
    }

    pub fn is_running(&self) -> bool {
        self.enabled && self.update_interrupt
    }

    pub fn counter(&self) -> u16 {
        self.counter
    }

    /// Current period register value
    pub fn reload(&self) -> u16 {
        self.reload
    }

    /// Time between two update events (µs)
    pub fn update_interval_us(&self) -> u64 {
        (u64::from(self.reload) + 1) * 1_000_000 / u64::from(TONE_TIMER_HZ)
    }

    /// Advance the counter by one timer tick.
    ///
    /// Returns `true` when the tick raises an update interrupt.
    pub fn tick(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        if self.counter >= self.reload {
            self.counter = 0;
            self.update_interrupt
        } else {
            self.counter += 1;
            false
        }
    }
}

impl Default for ToneTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Speaker driver owning the output pin, the timer and the edge flag
pub struct ToneGenerator<P> {
    pin: P,
    timer: ToneTimer,
    rising_edge: bool,
    state: ToneState,
}

impl<P: OutputPin> ToneGenerator<P> {
    /// Create a silent generator. The pin should already be low.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            timer: ToneTimer::new(),
            rising_edge: true,
            state: ToneState::Disabled,
        }
    }

    pub fn apply(&mut self, command: ToneCommand) -> Result<(), P::Error> {
        match command {
            ToneCommand::Play(frequency) => {
                self.commit(frequency);
                Ok(())
            }
            ToneCommand::Silence => self.silence(),
        }
    }

    /// Retune the timer to a committed frequency.
    ///
    /// Zero cannot be represented as a period and is ignored.
    pub fn commit(&mut self, frequency: u16) {
        if frequency == 0 {
            return;
        }
        self.timer.stop();
        self.timer.reset_counter();
        self.timer.set_reload(TONE_PERIOD / frequency);
        self.timer.start();
        self.state = ToneState::Running(frequency);
    }

    /// Stop the timer and release the speaker
    pub fn silence(&mut self) -> Result<(), P::Error> {
        self.timer.stop();
        self.timer.reset_counter();
        self.state = ToneState::Disabled;
        self.rising_edge = true;
        self.pin.set_low()
    }

    /// Timer update handler: toggle the speaker pin
    pub fn on_update(&mut self) -> Result<(), P::Error> {
        if !self.timer.is_running() {
            return Ok(());
        }
        if self.rising_edge {
            self.pin.set_high()?;
        } else {
            self.pin.set_low()?;
        }
        self.rising_edge = !self.rising_edge;
        Ok(())
    }

    /// Step the timer one tick and run the update handler if it fires
    pub fn tick(&mut self) -> Result<bool, P::Error> {
        let update = self.timer.tick();
        if update {
            self.on_update()?;
        }
        Ok(update)
    }

    pub fn state(&self) -> ToneState {
        self.state
    }

    pub fn timer(&self) -> &ToneTimer {
        &self.timer
    }

    pub fn rising_edge(&self) -> bool {
        self.rising_edge
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }
}
