use clap::Subcommand;
use focusshield_core::Store;
use url::Url;
use uuid::Uuid;

use super::{load_session, print_events, save_session, CliResult};

#[derive(Subcommand)]
pub enum LearningAction {
    /// List the topic rotation as JSON
    List,
    /// Add a topic to the rotation
    Add {
        /// Topic title
        title: String,
        /// Suggested minutes to spend (floors at 5)
        #[arg(long, default_value = "15")]
        minutes: u64,
        /// Resource URL to open with the topic
        #[arg(long)]
        link: Option<String>,
    },
    /// Remove a topic by id
    Remove {
        /// Topic id
        id: String,
    },
    /// Turn the learning reminder on
    Enable,
    /// Turn the learning reminder off
    Disable,
    /// Change the reminder period in minutes
    Every {
        /// Minutes between firings (floors at 5)
        minutes: u64,
    },
    /// Open the current topic's link in the browser
    Open,
    /// Show the current topic right now, without advancing the rotation
    Test,
}

pub fn run(action: LearningAction) -> CliResult {
    let store = Store::open()?;
    let (mut session, now_ms) = load_session(&store);

    match action {
        LearningAction::List => {
            println!(
                "{}",
                serde_json::to_string_pretty(session.learning().topics())?
            );
        }
        LearningAction::Add {
            title,
            minutes,
            link,
        } => {
            let link = link.map(|raw| Url::parse(&raw)).transpose()?;
            let topic = session.add_learning_topic(title, minutes, link, now_ms);
            println!("Added: {}", topic.id);
            println!("{}", serde_json::to_string_pretty(&topic)?);
        }
        LearningAction::Remove { id } => {
            let id = Uuid::parse_str(&id)?;
            if session.remove_learning_topic(&id, now_ms) {
                println!("ok");
            } else {
                eprintln!("no topic with id {id}");
                std::process::exit(1);
            }
        }
        LearningAction::Enable => {
            session.set_learning_enabled(true, now_ms);
            println!("ok");
        }
        LearningAction::Disable => {
            session.set_learning_enabled(false, now_ms);
            println!("ok");
        }
        LearningAction::Every { minutes } => {
            session.set_learning_every(minutes, now_ms);
            println!("ok");
        }
        LearningAction::Open => match session.learning().peek() {
            Some(topic) => match &topic.link {
                Some(url) => {
                    println!("{url}");
                    if let Err(e) = topic.open_link() {
                        tracing::debug!(error = %e, "failed to launch browser");
                    }
                }
                None => println!("no link on {}", topic.title),
            },
            None => {
                eprintln!("no learning topics");
                std::process::exit(1);
            }
        },
        LearningAction::Test => {
            let events = session.trigger_learning(now_ms);
            print_events(&events)?;
        }
    }

    save_session(&store, &session)
}
