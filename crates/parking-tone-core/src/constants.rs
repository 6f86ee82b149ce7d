//! Compile-time configuration
//!
//! These constants are the only configuration surface of the firmware.

/// Raw ADC readings averaged into one instantaneous frequency
pub const SAMPLE_WINDOW: usize = 100;

/// Consecutive equal instantaneous frequencies needed before the tone changes
pub const HYSTERESIS_WINDOW: usize = 3;

/// Highest tone value, reached when the object is very close
pub const MAX_FREQUENCY: u16 = 1000;

/// Lowest tone value; anything below means no object in range
pub const MIN_FREQUENCY: u16 = 100;

/// Numerator of the inverse distance transform
pub const FREQUENCY_SCALE: i32 = 10_000;

/// Sensor calibration: code = DISTANCE_SLOPE * distance + DISTANCE_OFFSET
pub const DISTANCE_OFFSET: i32 = 24;

/// Sensor calibration slope, see [`DISTANCE_OFFSET`]
pub const DISTANCE_SLOPE: i32 = 5;

/// Tone timer tick rate (72 MHz core clock / prescaler 720)
pub const TONE_TIMER_HZ: u32 = 100_000;

/// Tone timer base period; the period register is `TONE_PERIOD / frequency`
pub const TONE_PERIOD: u16 = 50_000;

/// Width of each half of the sensor trigger pulse (µs)
pub const TRIGGER_PULSE_US: u32 = 36;
