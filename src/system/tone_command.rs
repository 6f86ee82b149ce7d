//! Tone Command Module
//!
//! Carries tone commands from the sampling task to the tone task. The signal is
//! guarded by a critical section, so a command is handed over in one piece even
//! though the tone task runs at a higher interrupt priority than the sender.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use parking_tone_core::ToneCommand;

/// Latest tone command; a newer command replaces one not yet picked up
static TONE: Signal<CriticalSectionRawMutex, ToneCommand> = Signal::new();

/// Sends a new tone command
///
/// Synchronous, the sampling loop never waits on the tone task.
pub fn update(command: ToneCommand) {
    TONE.signal(command);
}

/// Waits for the next tone command
pub async fn wait() -> ToneCommand {
    TONE.wait().await
}
