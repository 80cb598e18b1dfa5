use clap::Subcommand;
use focusshield_core::Store;

use super::{load_session, print_events, print_status, save_session, CliResult};

#[derive(Subcommand)]
pub enum NudgeAction {
    /// Change the random delay window in minutes
    Set {
        /// Lower bound
        #[arg(long)]
        min: u64,
        /// Upper bound
        #[arg(long)]
        max: u64,
    },
    /// Fire the nudge right now, gate or no gate
    Test,
}

pub fn run(action: NudgeAction) -> CliResult {
    let store = Store::open()?;
    let (mut session, now_ms) = load_session(&store);

    match action {
        NudgeAction::Set { min, max } => {
            session.set_nudge_bounds(min, max, now_ms);
            print_status(&session, now_ms)?;
        }
        NudgeAction::Test => {
            let events = session.trigger_nudge(now_ms);
            print_events(&events)?;
        }
    }

    save_session(&store, &session)
}
