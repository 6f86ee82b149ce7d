//! Speaker tone generation
//!
//! Produces the audible square wave. Runs on the high-priority interrupt
//! executor so pin toggles preempt the sampling loop, like a timer interrupt.
//!
//! # Operation
//! - Starts silent, nothing plays before the first committed frequency
//! - While running, a ticker fires every `(TONE_PERIOD / f + 1) * 10µs` and each
//!   tick toggles the speaker pin, so one wave takes two ticks
//! - A new command replaces the ticker, restarting the period from zero
//! - Silence stops the ticker and pulls the speaker pin low

use defmt::info;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::{Level, Output};
use embassy_time::{Duration, Ticker};
use parking_tone_core::{
    tone::{ToneGenerator, ToneState},
    ToneCommand,
};

use crate::system::{resources::SpeakerResources, tone_command};

/// Tone task, owns the speaker pin and the tone state
#[embassy_executor::task]
pub async fn tone_generate(r: SpeakerResources) {
    let speaker = Output::new(r.speaker_pin, Level::Low);
    let mut tone = ToneGenerator::new(speaker);

    info!("Tone generator ready, silent");

    loop {
        match tone.state() {
            ToneState::Disabled => {
                let command = tone_command::wait().await;
                apply(&mut tone, command);
            }
            ToneState::Running(_) => {
                let interval = Duration::from_micros(tone.timer().update_interval_us());
                let mut ticker = Ticker::every(interval);

                loop {
                    match select(ticker.next(), tone_command::wait()).await {
                        Either::First(()) => {
                            let Ok(()) = tone.on_update();
                        }
                        Either::Second(command) => {
                            apply(&mut tone, command);
                            break;
                        }
                    }
                }
            }
        }
    }
}

/// Applies a command and logs tone changes
fn apply(tone: &mut ToneGenerator<Output<'static>>, command: ToneCommand) {
    let previous = tone.state();
    let Ok(()) = tone.apply(command);

    let current = tone.state();
    if current != previous {
        info!(
            "Tone {:?} -> {:?}, period register {}",
            previous,
            current,
            tone.timer().reload()
        );
    }
}
