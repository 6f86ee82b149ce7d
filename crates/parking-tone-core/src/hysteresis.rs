//! Tone hysteresis
//!
//! A single noisy window must not retune the speaker. Instantaneous frequencies
//! are collected in batches of [`HYSTERESIS_WINDOW`]; a batch commits only if
//! every value in it is identical, otherwise it is dropped.

use heapless::Vec;

use crate::constants::HYSTERESIS_WINDOW;

/// Batch of the most recent in-range instantaneous frequencies
#[derive(Debug, Default)]
pub struct Hysteresis {
    history: Vec<u16, HYSTERESIS_WINDOW>,
}

impl Hysteresis {
    pub const fn new() -> Self {
        Self { history: Vec::new() }
    }

    /// Add an instantaneous frequency.
    ///
    /// Returns the frequency to commit once a full batch of equal values has
    /// been seen. The history is emptied after every full batch, whether it
    /// committed or not.
    pub fn offer(&mut self, frequency: u16) -> Option<u16> {
        // Cannot fail: the history is emptied whenever it fills up
        let _ = self.history.push(frequency);
        if !self.history.is_full() {
            return None;
        }

        let first = self.history[0];
        let stable = self.history.iter().all(|&f| f == first);
        self.history.clear();

        stable.then_some(first)
    }

    /// Frequencies waiting in the current batch
    pub fn pending(&self) -> usize {
        self.history.len()
    }
}
