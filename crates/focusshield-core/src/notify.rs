//! Presentation seams.
//!
//! The engine reports everything through [`Event`](crate::events::Event);
//! drivers that want desktop notifications or an audio cue implement
//! these traits and fan events out to them. Failures are the driver's
//! problem and never feed back into session state.

/// Sink for desktop notifications.
pub trait Notifier {
    fn notify(&self, title: &str, body: &str);
}

/// Sink for the short audio cue played on fires and phase flips.
pub trait Chime {
    fn play(&self);
}

/// Discards notifications. Useful in tests and headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _title: &str, _body: &str) {}
}

/// Discards the audio cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullChime;

impl Chime for NullChime {
    fn play(&self) {}
}
