//! Notification and audio-cue sinks for the watch loop.

use focusshield_core::notify::{Chime, Notifier};
use notify_rust::{Notification, Urgency};

/// Sends desktop notifications through the platform daemon. Delivery
/// failures are logged and dropped; the watch loop keeps running.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, body: &str) {
        let result = Notification::new()
            .summary(title)
            .body(body)
            .appname("focusshield")
            .icon("alarm-clock")
            .urgency(Urgency::Normal)
            .show();
        if let Err(e) = result {
            tracing::debug!(error = %e, "desktop notification failed");
        }
    }
}

/// Rings the terminal bell.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalChime;

impl Chime for TerminalChime {
    fn play(&self) {
        use std::io::Write;
        print!("\x07");
        let _ = std::io::stdout().flush();
    }
}
