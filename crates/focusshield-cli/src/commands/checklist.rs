use clap::Subcommand;
use focusshield_core::Store;

use super::{load_session, save_session, CliResult};

#[derive(Subcommand)]
pub enum ChecklistAction {
    /// Print the checklist with its marks
    Show,
    /// Append an item
    Add {
        /// Item label
        label: String,
    },
    /// Flip an item's mark by label
    Toggle {
        /// Item label
        label: String,
    },
    /// Remove the first item with the given label
    Remove {
        /// Item label
        label: String,
    },
}

pub fn run(action: ChecklistAction) -> CliResult {
    let store = Store::open()?;
    let (mut session, _now_ms) = load_session(&store);

    match action {
        ChecklistAction::Show => {
            let checklist = session.checklist();
            for label in checklist.items() {
                let mark = if checklist.is_checked(label) { "x" } else { " " };
                println!("[{mark}] {label}");
            }
            println!("({}/{} done)", checklist.checked_count(), checklist.len());
        }
        ChecklistAction::Add { label } => {
            session.add_checklist_item(label);
            println!("ok");
        }
        ChecklistAction::Toggle { label } => {
            let checked = session.toggle_checklist_item(&label);
            println!("{}", if checked { "checked" } else { "unchecked" });
        }
        ChecklistAction::Remove { label } => {
            if session.remove_checklist_item(&label) {
                println!("ok");
            } else {
                eprintln!("no checklist item: {label}");
                std::process::exit(1);
            }
        }
    }

    save_session(&store, &session)
}
