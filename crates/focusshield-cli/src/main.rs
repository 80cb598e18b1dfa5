use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod notify;

#[derive(Parser)]
#[command(name = "focusshield-cli", version, about = "Focus Shield CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Session clock control
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Focus/break countdown control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Randomized focus-check reminder
    Nudge {
        #[command(subcommand)]
        action: commands::nudge::NudgeAction,
    },
    /// Affirmation reminder and its text pool
    Affirm {
        #[command(subcommand)]
        action: commands::affirm::AffirmAction,
    },
    /// Learning-block reminder and its topic rotation
    Learning {
        #[command(subcommand)]
        action: commands::learning::LearningAction,
    },
    /// Daily session checklist
    Checklist {
        #[command(subcommand)]
        action: commands::checklist::ChecklistAction,
    },
    /// Tooling roadmap
    Tooling {
        #[command(subcommand)]
        action: commands::tooling::ToolingAction,
    },
    /// Deployment step tracking and command rendering
    Deploy {
        #[command(subcommand)]
        action: commands::deploy::DeployAction,
    },
    /// Cloud deploy form
    Cloud {
        #[command(subcommand)]
        action: commands::cloud::CloudAction,
    },
    /// Display and sound preferences
    Prefs {
        #[command(subcommand)]
        action: commands::prefs::PrefsAction,
    },
    /// Overlay presentation state
    Overlay {
        #[command(subcommand)]
        action: commands::overlay::OverlayAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Session { action } => commands::session::run(action),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Nudge { action } => commands::nudge::run(action),
        Commands::Affirm { action } => commands::affirm::run(action),
        Commands::Learning { action } => commands::learning::run(action),
        Commands::Checklist { action } => commands::checklist::run(action),
        Commands::Tooling { action } => commands::tooling::run(action),
        Commands::Deploy { action } => commands::deploy::run(action),
        Commands::Cloud { action } => commands::cloud::run(action),
        Commands::Prefs { action } => commands::prefs::run(action),
        Commands::Overlay { action } => commands::overlay::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
