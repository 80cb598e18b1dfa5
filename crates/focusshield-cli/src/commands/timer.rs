use std::time::Duration;

use clap::Subcommand;
use focusshield_core::clock::{Clock, SystemClock};
use focusshield_core::notify::{Chime, Notifier};
use focusshield_core::{Event, Session, Status, Store};

use crate::notify::{DesktopNotifier, TerminalChime};

use super::{load_session, print_events, print_status, save_session, CliResult};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start or pause the countdown (starting clocks in first)
    Toggle,
    /// Jump to a fresh, running focus phase
    Focus,
    /// Jump to a fresh, running break phase
    Break,
    /// Change the phase lengths in minutes
    Set {
        /// Focus phase length
        #[arg(long)]
        focus: Option<u64>,
        /// Break phase length
        #[arg(long = "break")]
        break_minutes: Option<u64>,
    },
    /// Drive the countdown live at one tick per second until Ctrl-C
    Watch,
}

pub fn run(action: TimerAction) -> CliResult {
    let store = Store::open()?;
    let (mut session, now_ms) = load_session(&store);

    match action {
        TimerAction::Toggle => {
            let events = session.toggle_run(now_ms);
            print_events(&events)?;
        }
        TimerAction::Focus => {
            let events = session.start_focus(now_ms);
            print_events(&events)?;
        }
        TimerAction::Break => {
            let events = session.start_break(now_ms);
            print_events(&events)?;
        }
        TimerAction::Set {
            focus,
            break_minutes,
        } => {
            if let Some(minutes) = focus {
                session.set_focus_minutes(minutes);
            }
            if let Some(minutes) = break_minutes {
                session.set_break_minutes(minutes);
            }
            print_status(&session, now_ms)?;
        }
        TimerAction::Watch => return watch(&store, session),
    }

    save_session(&store, &session)
}

/// The live driver. Polls the engine once a second, fans events out to
/// the desktop notifier and the chime, keeps the saved record current,
/// and rewrites a one-line status. Ctrl-C saves and exits.
fn watch(store: &Store, mut session: Session) -> CliResult {
    let notifier = DesktopNotifier;
    let chime = TerminalChime;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let mut ticker = tokio::time::interval(Duration::from_secs(1));
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let now_ms = SystemClock.now_ms();
                    let events = session.poll(now_ms);
                    for event in &events {
                        announce(event, &notifier, &chime, session.preferences().sound)?;
                    }
                    render_line(&session.status(now_ms))?;
                    save_session(store, &session)?;
                }
                _ = tokio::signal::ctrl_c() => break,
            }
        }
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;

    println!();
    save_session(store, &session)
}

/// Print the event on its own line, below the rewritten status line.
fn announce(
    event: &Event,
    notifier: &DesktopNotifier,
    chime: &TerminalChime,
    sound: bool,
) -> CliResult {
    println!();
    println!("{}", serde_json::to_string(event)?);
    if let Some(n) = event.notification() {
        notifier.notify(&n.title, &n.body);
    }
    if sound && event.chimes() {
        chime.play();
    }
    Ok(())
}

fn render_line(status: &Status) -> CliResult {
    use std::io::Write;
    print!(
        "\r{phase} {remaining}  [{run}]  reminders {gate}      ",
        phase = status.phase,
        remaining = status.remaining_display,
        run = if status.running { "running" } else { "paused" },
        gate = if status.reminders_active {
            "active"
        } else {
            "gated"
        },
    );
    std::io::stdout().flush()?;
    Ok(())
}
