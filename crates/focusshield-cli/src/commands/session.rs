use clap::Subcommand;
use focusshield_core::Store;

use super::{load_session, print_events, print_status, save_session, CliResult};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Start the work session
    ClockIn,
    /// End the work session and reset the countdown
    ClockOut,
    /// Print the current session status as JSON
    Status,
}

pub fn run(action: SessionAction) -> CliResult {
    let store = Store::open()?;
    let (mut session, now_ms) = load_session(&store);

    match action {
        SessionAction::ClockIn => {
            let events = session.clock_in(now_ms);
            print_events(&events)?;
        }
        SessionAction::ClockOut => {
            let events = session.clock_out(now_ms);
            print_events(&events)?;
        }
        SessionAction::Status => {
            print_status(&session, now_ms)?;
        }
    }

    save_session(&store, &session)
}
