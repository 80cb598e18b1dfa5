use clap::Subcommand;
use focusshield_core::Store;

use super::{load_session, print_events, save_session, CliResult};

#[derive(Subcommand)]
pub enum AffirmAction {
    /// List the affirmation pool
    List,
    /// Add an affirmation to the pool
    Add {
        /// Affirmation text
        text: String,
    },
    /// Remove an affirmation by list position
    Remove {
        /// Zero-based list position
        index: usize,
    },
    /// Change the reminder period in minutes
    Every {
        /// Minutes between firings
        minutes: u64,
    },
    /// Show a random affirmation right now
    Test,
}

pub fn run(action: AffirmAction) -> CliResult {
    let store = Store::open()?;
    let (mut session, now_ms) = load_session(&store);

    match action {
        AffirmAction::List => {
            for (i, text) in session.affirmations().iter().enumerate() {
                println!("{i}: {text}");
            }
        }
        AffirmAction::Add { text } => {
            session.add_affirmation(text, now_ms);
            println!("ok");
        }
        AffirmAction::Remove { index } => match session.remove_affirmation(index, now_ms) {
            Some(text) => println!("removed: {text}"),
            None => {
                eprintln!("no affirmation at index {index}");
                std::process::exit(1);
            }
        },
        AffirmAction::Every { minutes } => {
            session.set_affirmation_every(minutes, now_ms);
            println!("ok");
        }
        AffirmAction::Test => {
            let events = session.trigger_affirmation(now_ms);
            print_events(&events)?;
        }
    }

    save_session(&store, &session)
}
