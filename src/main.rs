//! Parking sensor firmware entry point
//!
//! Initializes the RP2350, starts the high-priority tone executor and spawns the
//! sampling and tone tasks.

#![no_std]
#![no_main]

use crate::task::{range_sample::range_sample, tone_generate::tone_generate};
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use system::resources::{AssignedResources, RangeSensorResources, SpeakerResources};
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// System core modules
mod system;
/// Task implementations
mod task;

/// Executor for the tone task, preempts the thread-mode executor
static EXECUTOR_TONE: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_TONE.on_interrupt()
}

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    let r = split_resources!(p);

    // Tone updates must be able to interrupt the sampling loop's busy-wait
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let tone_spawner = EXECUTOR_TONE.start(interrupt::SWI_IRQ_1);
    tone_spawner.spawn(tone_generate(r.speaker)).unwrap();

    spawner.spawn(range_sample(r.range_sensor)).unwrap();
}
