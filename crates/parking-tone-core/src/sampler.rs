//! Raw sample accumulation
//!
//! Collects ADC codes into a fixed window. Once the window is full the whole
//! batch is handed out and the next reading starts a fresh batch.

use heapless::Vec;

use crate::constants::SAMPLE_WINDOW;

/// Fixed-capacity window of raw ADC codes
#[derive(Debug, Default)]
pub struct SampleWindow {
    samples: Vec<u16, SAMPLE_WINDOW>,
}

impl SampleWindow {
    /// Create an empty window
    pub const fn new() -> Self {
        Self { samples: Vec::new() }
    }

    /// Store a reading.
    ///
    /// Returns the full batch when this reading completes the window. The
    /// count is reset on the next call, so the returned batch stays readable
    /// until then.
    pub fn record(&mut self, code: u16) -> Option<&[u16]> {
        if self.samples.is_full() {
            self.samples.clear();
        }
        // Cannot fail: a full window was cleared above
        let _ = self.samples.push(code);

        if self.samples.is_full() {
            Some(self.samples.as_slice())
        } else {
            None
        }
    }

    /// Readings collected towards the current batch
    pub fn len(&self) -> usize {
        if self.samples.is_full() {
            0
        } else {
            self.samples.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hands_out_batch_only_when_full() {
        let mut window = SampleWindow::new();
        for i in 0..SAMPLE_WINDOW - 1 {
            assert!(window.record(i as u16).is_none());
        }
        assert_eq!(window.len(), SAMPLE_WINDOW - 1);

        let batch = window.record(7).expect("window should be full");
        assert_eq!(batch.len(), SAMPLE_WINDOW);
        assert_eq!(batch[0], 0);
        assert_eq!(batch[SAMPLE_WINDOW - 1], 7);
    }

    #[test]
    fn count_resets_after_full_batch() {
        let mut window = SampleWindow::new();
        for _ in 0..SAMPLE_WINDOW {
            window.record(40);
        }
        assert!(window.is_empty());

        assert!(window.record(41).is_none());
        assert_eq!(window.len(), 1);

        for _ in 1..SAMPLE_WINDOW - 1 {
            assert!(window.record(41).is_none());
        }
        let batch = window.record(41).expect("second batch");
        assert!(batch.iter().all(|&code| code == 41));
    }
}
