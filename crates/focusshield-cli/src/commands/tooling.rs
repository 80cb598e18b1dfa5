use clap::Subcommand;
use focusshield_core::Store;
use uuid::Uuid;

use super::{load_session, save_session, CliResult};

#[derive(Subcommand)]
pub enum ToolingAction {
    /// List the tooling roadmap as JSON
    List,
    /// Add an entry to the roadmap
    Add {
        /// Entry label
        label: String,
    },
    /// Flip an entry's done flag by id
    Toggle {
        /// Entry id
        id: String,
    },
    /// Remove an entry by id
    Remove {
        /// Entry id
        id: String,
    },
}

pub fn run(action: ToolingAction) -> CliResult {
    let store = Store::open()?;
    let (mut session, _now_ms) = load_session(&store);

    match action {
        ToolingAction::List => {
            println!(
                "{}",
                serde_json::to_string_pretty(session.tooling().items())?
            );
        }
        ToolingAction::Add { label } => {
            let item = session.add_tool(label);
            println!("Added: {}", item.id);
            println!("{}", serde_json::to_string_pretty(&item)?);
        }
        ToolingAction::Toggle { id } => {
            let id = Uuid::parse_str(&id)?;
            match session.toggle_tool(&id) {
                Some(true) => println!("done"),
                Some(false) => println!("not done"),
                None => {
                    eprintln!("no entry with id {id}");
                    std::process::exit(1);
                }
            }
        }
        ToolingAction::Remove { id } => {
            let id = Uuid::parse_str(&id)?;
            if session.remove_tool(&id) {
                println!("ok");
            } else {
                eprintln!("no entry with id {id}");
                std::process::exit(1);
            }
        }
    }

    save_session(&store, &session)
}
