use clap::Subcommand;
use focusshield_core::Store;

use super::{load_session, save_session, CliResult};

#[derive(Subcommand)]
pub enum CloudAction {
    /// Update fields on the cloud deploy form
    Set {
        /// GCP project id
        #[arg(long)]
        project: Option<String>,
        /// Cloud Run region
        #[arg(long)]
        region: Option<String>,
        /// Artifact Registry multi-region
        #[arg(long)]
        artifact_region: Option<String>,
        /// Cloud Run service name
        #[arg(long)]
        service: Option<String>,
        /// Container image name
        #[arg(long)]
        image: Option<String>,
        /// GCS bucket name
        #[arg(long)]
        bucket: Option<String>,
        /// Include the Vertex AI training block
        #[arg(long)]
        vertex_train: Option<bool>,
    },
    /// Print the form as JSON
    Show,
}

pub fn run(action: CloudAction) -> CliResult {
    let store = Store::open()?;
    let (mut session, _now_ms) = load_session(&store);

    match action {
        CloudAction::Set {
            project,
            region,
            artifact_region,
            service,
            image,
            bucket,
            vertex_train,
        } => {
            let form = session.cloud_mut();
            if let Some(v) = project {
                form.project = v;
            }
            if let Some(v) = region {
                form.region = v;
            }
            if let Some(v) = artifact_region {
                form.artifact_region = v;
            }
            if let Some(v) = service {
                form.service = v;
            }
            if let Some(v) = image {
                form.image = v;
            }
            if let Some(v) = bucket {
                form.bucket = v;
            }
            if let Some(v) = vertex_train {
                form.vertex_train = v;
            }
            println!("{}", serde_json::to_string_pretty(session.cloud())?);
        }
        CloudAction::Show => {
            println!("{}", serde_json::to_string_pretty(session.cloud())?);
        }
    }

    save_session(&store, &session)
}
