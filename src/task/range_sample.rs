//! Range sampling loop
//!
//! Foreground loop of the firmware: pulses the sensor trigger, reads its analog
//! distance output and feeds the reading into the sampling pipeline.
//!
//! # Loop Pass
//! - Trigger pulse: 36µs low, 36µs high, blocking (busy-waits on the timer)
//! - ADC read: awaited, yields to the executor while converting
//! - Every 100 readings: average, map to a frequency, run hysteresis
//! - Tone changes are handed to the tone task through `tone_command`
//!
//! # Error Handling
//! - A failed conversion is logged and the pass retried; it never counts as a sample
//! - A conversion that never completes stalls the loop, there is no timeout

use defmt::{debug, info, warn};
use embassy_rp::adc::{Adc, Channel, Config};
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_time::Delay;
use parking_tone_core::{mapper, trigger::TriggerPulse, RangeTone};

use crate::system::{
    resources::{Irqs, RangeSensorResources},
    tone_command,
};

/// Sampling task, runs for the lifetime of the firmware
#[embassy_executor::task]
pub async fn range_sample(r: RangeSensorResources) {
    let mut adc = Adc::new(r.adc, Irqs, Config::default());
    let mut sensor_out = Channel::new_pin(r.analog_pin, Pull::None);

    // The sensor trigger is active low, idle it high
    let trigger = Output::new(r.trigger_pin, Level::High);
    let Ok(mut pulse) = TriggerPulse::new(trigger, Delay);

    let mut range_tone = RangeTone::new();

    info!("Range sampling started");

    loop {
        let Ok(()) = pulse.fire();

        let code = match adc.read(&mut sensor_out).await {
            Ok(code) => code,
            Err(e) => {
                warn!("ADC conversion failed: {:?}", e);
                continue;
            }
        };

        let Some(report) = range_tone.on_sample(code) else {
            continue;
        };

        debug!(
            "Window average {} (distance {}) -> {:?}",
            report.average_code,
            mapper::distance(report.average_code),
            report.mapping
        );

        if let Some(command) = report.command {
            tone_command::update(command);
        }
    }
}
