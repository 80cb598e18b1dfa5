use clap::Subcommand;
use focusshield_core::Store;

use super::{load_session, save_session, CliResult};

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Print the preferences as JSON
    Show,
    /// Turn the audio cue on or off
    Sound {
        /// "on" or "off"
        value: String,
    },
    /// Turn the pastel theme on or off
    Pastel {
        /// "on" or "off"
        value: String,
    },
}

fn parse_switch(value: &str) -> bool {
    match value {
        "on" | "true" | "1" => true,
        "off" | "false" | "0" => false,
        other => {
            eprintln!("expected on or off, got: {other}");
            std::process::exit(1);
        }
    }
}

pub fn run(action: PrefsAction) -> CliResult {
    let store = Store::open()?;
    let (mut session, _now_ms) = load_session(&store);

    match action {
        PrefsAction::Show => {
            println!(
                "{}",
                serde_json::to_string_pretty(&session.preferences())?
            );
        }
        PrefsAction::Sound { value } => {
            session.set_sound(parse_switch(&value));
            println!("ok");
        }
        PrefsAction::Pastel { value } => {
            session.set_pastel(parse_switch(&value));
            println!("ok");
        }
    }

    save_session(&store, &session)
}
