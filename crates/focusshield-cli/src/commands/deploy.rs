use clap::Subcommand;
use focusshield_core::{CloudOpsForm, CommandBlock, Store};
use uuid::Uuid;

use super::{load_session, save_session, CliResult};

#[derive(Subcommand)]
pub enum DeployAction {
    /// List the deployment steps as JSON
    Steps,
    /// Flip a step's done flag by id
    Check {
        /// Step id
        id: String,
    },
    /// Render the deployment command blocks, ready to paste
    Commands {
        /// Which provider to render: vercel, docker, gcloud, or all
        #[arg(long, default_value = "all")]
        target: String,
    },
}

pub fn run(action: DeployAction) -> CliResult {
    let store = Store::open()?;
    let (mut session, _now_ms) = load_session(&store);

    match action {
        DeployAction::Steps => {
            println!(
                "{}",
                serde_json::to_string_pretty(session.deploy_steps().items())?
            );
        }
        DeployAction::Check { id } => {
            let id = Uuid::parse_str(&id)?;
            match session.toggle_deploy_step(&id) {
                Some(true) => println!("done"),
                Some(false) => println!("not done"),
                None => {
                    eprintln!("no step with id {id}");
                    std::process::exit(1);
                }
            }
        }
        DeployAction::Commands { target } => {
            let cloud = session.cloud();
            let blocks = match target.as_str() {
                "vercel" => CloudOpsForm::vercel_blocks(),
                "docker" => CloudOpsForm::docker_blocks(),
                "gcloud" => cloud.gcloud_blocks(),
                _ => cloud.all_blocks(),
            };
            print_blocks(&blocks);
        }
    }

    save_session(&store, &session)
}

fn print_blocks(blocks: &[CommandBlock]) {
    for block in blocks {
        println!("# {}", block.title);
        println!("{}", block.command);
        println!();
    }
}
