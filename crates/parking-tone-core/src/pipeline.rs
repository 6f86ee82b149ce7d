//! Sampling loop state
//!
//! [`RangeTone`] owns everything the sampling loop keeps between passes: the
//! current sample window and the hysteresis history. Each ADC reading goes in
//! through [`RangeTone::on_sample`]; a [`ToneCommand`] comes out whenever the
//! speaker needs to change.

use crate::{
    hysteresis::Hysteresis,
    mapper::{self, Mapping},
    sampler::SampleWindow,
};

pub use crate::tone::ToneCommand;

/// What a completed sample window produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WindowReport {
    /// Truncated mean of the window
    pub average_code: u16,
    pub mapping: Mapping,
    /// Command for the tone generator, if any
    pub command: Option<ToneCommand>,
}

/// Loop driver state: sample window plus hysteresis
#[derive(Debug, Default)]
pub struct RangeTone {
    window: SampleWindow,
    hysteresis: Hysteresis,
}

impl RangeTone {
    pub const fn new() -> Self {
        Self {
            window: SampleWindow::new(),
            hysteresis: Hysteresis::new(),
        }
    }

    /// Feed one ADC reading.
    ///
    /// Returns a report once the reading completes a sample window.
    pub fn on_sample(&mut self, code: u16) -> Option<WindowReport> {
        let batch = self.window.record(code)?;
        let average_code = mapper::average(batch);
        let mapping = mapper::frequency_for(average_code);

        let command = match mapping {
            // Out of range skips hysteresis entirely
            Mapping::NoObject => Some(ToneCommand::Silence),
            Mapping::Tone(frequency) => self.hysteresis.offer(frequency).map(ToneCommand::Play),
        };

        Some(WindowReport {
            average_code,
            mapping,
            command,
        })
    }

    /// Readings collected towards the current window
    pub fn samples_pending(&self) -> usize {
        self.window.len()
    }

    /// Instantaneous frequencies collected towards the current hysteresis batch
    pub fn frequencies_pending(&self) -> usize {
        self.hysteresis.pending()
    }
}
