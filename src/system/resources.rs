//! Hardware Resource Management
//!
//! Assigns the RP2350 pins and peripherals to the two tasks. Nothing is shared:
//! the sampling task owns the sensor and the ADC, the tone task owns the speaker.
//!
//! # Resource Groups
//! - Range Sensor: URM37 trigger line, analog distance output and the ADC
//! - Speaker: piezo buzzer output pin

use assign_resources::assign_resources;
use embassy_rp::adc::InterruptHandler as AdcInterruptHandler;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals;

assign_resources! {
    /// Ultrasonic rangefinder, analog output mode
    range_sensor: RangeSensorResources {
        trigger_pin: PIN_15,
        analog_pin: PIN_26, // ADC0
        adc: ADC,
    },
    /// Piezo speaker driven by a plain push-pull output
    speaker: SpeakerResources {
        speaker_pin: PIN_16,
    },
}

bind_interrupts!(pub struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});
