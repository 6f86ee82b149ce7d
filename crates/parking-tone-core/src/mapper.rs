//! Distance to frequency mapping
//!
//! The sensor's analog output follows `code = 5 * distance + 24`, so a window
//! average is turned into a distance term with `(code - 24) / 5` and the tone
//! value is `10000 / distance`. Closer objects give higher values.
//!
//! # Range policy
//! - Above [`MAX_FREQUENCY`]: clamped to [`MAX_FREQUENCY`]
//! - Below [`MIN_FREQUENCY`]: no object in range, the tone is silenced
//! - Zero distance term (averaged codes 20..=28): no object in range
//!
//! All divisions truncate toward zero, as the calibration was made that way.

use crate::constants::{
    DISTANCE_OFFSET, DISTANCE_SLOPE, FREQUENCY_SCALE, MAX_FREQUENCY, MIN_FREQUENCY,
};

/// Result of mapping one sample window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mapping {
    /// Instantaneous frequency within `MIN_FREQUENCY..=MAX_FREQUENCY`
    Tone(u16),
    /// Nothing in range; the tone must be silenced
    NoObject,
}

/// Truncating mean of a window of raw ADC codes
pub fn average(window: &[u16]) -> u16 {
    if window.is_empty() {
        return 0;
    }
    let sum: u32 = window.iter().map(|&code| u32::from(code)).sum();
    // A mean of u16 values always fits in u16
    (sum / window.len() as u32) as u16
}

/// Distance term of the sensor calibration, in sensor units
pub fn distance(average_code: u16) -> i32 {
    (i32::from(average_code) - DISTANCE_OFFSET) / DISTANCE_SLOPE
}

/// Map an averaged ADC code to an instantaneous frequency
pub fn frequency_for(average_code: u16) -> Mapping {
    let distance = distance(average_code);
    if distance == 0 {
        return Mapping::NoObject;
    }

    let frequency = FREQUENCY_SCALE / distance;
    if frequency > i32::from(MAX_FREQUENCY) {
        Mapping::Tone(MAX_FREQUENCY)
    } else if frequency < i32::from(MIN_FREQUENCY) {
        Mapping::NoObject
    } else {
        Mapping::Tone(frequency as u16)
    }
}

/// Average a full window and map it
pub fn map_window(window: &[u16]) -> Mapping {
    frequency_for(average(window))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_truncates() {
        assert_eq!(average(&[10, 11]), 10);
        assert_eq!(average(&[4095; 100]), 4095);
        assert_eq!(average(&[]), 0);
    }

    #[test]
    fn very_close_object_clamps_to_max() {
        // (29 - 24) / 5 = 1, 10000 / 1 = 10000
        assert_eq!(distance(29), 1);
        assert_eq!(frequency_for(29), Mapping::Tone(MAX_FREQUENCY));
    }

    #[test]
    fn matches_closed_form_over_whole_adc_range() {
        for code in 0..=4095u16 {
            let d = (i32::from(code) - 24) / 5;
            let expected = if d == 0 {
                Mapping::NoObject
            } else {
                let f = 10_000 / d;
                if f < 100 {
                    Mapping::NoObject
                } else {
                    Mapping::Tone(f.min(1000) as u16)
                }
            };
            assert_eq!(frequency_for(code), expected, "code {code}");
        }
    }

    #[test]
    fn far_object_is_out_of_range() {
        // (1024 - 24) / 5 = 200, 10000 / 200 = 50
        assert_eq!(frequency_for(1024), Mapping::NoObject);
    }

    #[test]
    fn zero_distance_term_is_no_object() {
        for code in 20..=28 {
            assert_eq!(frequency_for(code), Mapping::NoObject);
        }
    }

    #[test]
    fn codes_below_offset_are_no_object() {
        assert_eq!(frequency_for(0), Mapping::NoObject);
        assert_eq!(frequency_for(19), Mapping::NoObject);
    }

    #[test]
    fn in_range_values_pass_through() {
        // (524 - 24) / 5 = 100, 10000 / 100 = 100
        assert_eq!(frequency_for(524), Mapping::Tone(100));
        // (74 - 24) / 5 = 10
        assert_eq!(frequency_for(74), Mapping::Tone(1000));
        // (149 - 24) / 5 = 25
        assert_eq!(map_window(&[149; 100]), Mapping::Tone(400));
    }
}
