use clap::Subcommand;
use focusshield_core::{OverlayKind, Store};

use super::{load_session, save_session, CliResult};

#[derive(Subcommand)]
pub enum OverlayAction {
    /// Open the checklist overlay
    ShowChecklist,
    /// Close one overlay: break, checklist, nudge, affirmation, or learning
    Dismiss {
        /// Overlay name
        kind: String,
    },
    /// Close every overlay
    DismissAll,
}

pub fn run(action: OverlayAction) -> CliResult {
    let store = Store::open()?;
    let (mut session, _now_ms) = load_session(&store);

    match action {
        OverlayAction::ShowChecklist => {
            session.open_checklist_overlay();
            println!("ok");
        }
        OverlayAction::Dismiss { kind } => {
            let kind = match kind.as_str() {
                "break" => OverlayKind::Break,
                "checklist" => OverlayKind::Checklist,
                "nudge" => OverlayKind::Nudge,
                "affirmation" => OverlayKind::Affirmation,
                "learning" => OverlayKind::Learning,
                other => {
                    eprintln!("unknown overlay: {other}");
                    std::process::exit(1);
                }
            };
            session.dismiss_overlay(kind);
            println!("ok");
        }
        OverlayAction::DismissAll => {
            session.dismiss_all_overlays();
            println!("ok");
        }
    }

    save_session(&store, &session)
}
