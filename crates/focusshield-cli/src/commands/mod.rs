//! CLI command modules.
//!
//! Every command follows the same shape: open the store, rebuild the
//! session from the saved record, apply the action, print the result,
//! save the record back. The countdown does not tick between
//! invocations; `timer watch` is the live driver.

pub mod affirm;
pub mod checklist;
pub mod cloud;
pub mod deploy;
pub mod learning;
pub mod nudge;
pub mod overlay;
pub mod prefs;
pub mod session;
pub mod timer;
pub mod tooling;

use focusshield_core::clock::{Clock, SystemClock};
use focusshield_core::{Event, Session, Store};

pub(crate) type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Rebuild the session from the saved record, stamped with the current
/// wall clock.
pub(crate) fn load_session(store: &Store) -> (Session, u64) {
    let now_ms = SystemClock.now_ms();
    (Session::from_snapshot(store.load_snapshot(), now_ms), now_ms)
}

pub(crate) fn save_session(store: &Store, session: &Session) -> CliResult {
    store.save_snapshot(&session.snapshot())?;
    Ok(())
}

/// Print each emitted event as pretty JSON.
pub(crate) fn print_events(events: &[Event]) -> CliResult {
    for event in events {
        println!("{}", serde_json::to_string_pretty(event)?);
    }
    Ok(())
}

/// Print the point-in-time status view as pretty JSON.
pub(crate) fn print_status(session: &Session, now_ms: u64) -> CliResult {
    println!(
        "{}",
        serde_json::to_string_pretty(&session.status(now_ms))?
    );
    Ok(())
}
