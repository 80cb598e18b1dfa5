//! Deployment command templating.
//!
//! Pure string interpolation from the cloud-ops form fields into
//! ready-to-paste shell blocks. Nothing here is validated or executed;
//! whatever is in the form lands in the rendered command.

use indoc::formatdoc;
use serde::{Deserialize, Serialize};

/// User-editable fields backing the rendered command blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudOpsForm {
    #[serde(default)]
    pub project: String,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_artifact_region")]
    pub artifact_region: String,
    #[serde(default = "default_service")]
    pub service: String,
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default)]
    pub bucket: String,
    #[serde(default = "default_true")]
    pub vertex_train: bool,
}

fn default_region() -> String {
    "us-central1".to_string()
}

fn default_artifact_region() -> String {
    "us".to_string()
}

fn default_service() -> String {
    "focusshield-hub".to_string()
}

fn default_image() -> String {
    "core-api".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for CloudOpsForm {
    fn default() -> Self {
        Self {
            project: String::new(),
            region: default_region(),
            artifact_region: default_artifact_region(),
            service: default_service(),
            image: default_image(),
            bucket: String::new(),
            vertex_train: true,
        }
    }
}

/// A titled shell snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandBlock {
    pub title: String,
    pub command: String,
}

impl CommandBlock {
    fn new(title: &str, command: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            command: command.into(),
        }
    }
}

impl CloudOpsForm {
    /// Fully qualified Artifact Registry image path.
    pub fn artifact_repo(&self) -> String {
        format!(
            "{}-docker.pkg.dev/{}/focusshield/{}",
            self.artifact_region, self.project, self.image
        )
    }

    /// The GCP blocks, in run order.
    pub fn gcloud_blocks(&self) -> Vec<CommandBlock> {
        let repo = self.artifact_repo();
        vec![
            CommandBlock::new(
                "Auth & Project",
                formatdoc! {"
                    gcloud auth login
                    gcloud config set project {project}
                    gcloud auth configure-docker {artifact_region}-docker.pkg.dev",
                    project = self.project,
                    artifact_region = self.artifact_region,
                },
            ),
            CommandBlock::new(
                "Create Artifact Registry",
                format!(
                    "gcloud artifacts repositories create focusshield --repository-format=docker --location={}",
                    self.artifact_region
                ),
            ),
            CommandBlock::new(
                "Docker Build",
                format!("docker build -t {repo}:v1 -f infra/docker/core-api.Dockerfile ."),
            ),
            CommandBlock::new("Docker Push", format!("docker push {repo}:v1")),
            CommandBlock::new(
                "Deploy to Cloud Run",
                format!(
                    "gcloud run deploy {} --image={}:v1 --region={} --platform=managed --allow-unauthenticated --set-env-vars NEXT_PUBLIC_SUPABASE_URL=...,NEXT_PUBLIC_SUPABASE_ANON_KEY=...",
                    self.service, repo, self.region
                ),
            ),
            CommandBlock::new("Make GCS Bucket", self.gcs_bucket_command()),
            CommandBlock::new("Vertex AI Training Job", self.vertex_command()),
        ]
    }

    fn gcs_bucket_command(&self) -> String {
        if self.bucket.is_empty() {
            "# Set a bucket name to see the command".to_string()
        } else {
            format!("gsutil mb -l {} gs://{}", self.region, self.bucket)
        }
    }

    fn vertex_command(&self) -> String {
        if !self.vertex_train {
            return "# Vertex training disabled".to_string();
        }
        formatdoc! {r#"
            gcloud ai custom-jobs create \
              --region={region} \
              --display-name=trainer-job-$(date +%s) \
              --worker-pool-spec=machine-type=n1-standard-4,replica-count=1,container-image-uri={repo}:v1,local-package-path=services/trainer"#,
            region = self.region,
            repo = self.artifact_repo(),
        }
    }

    /// Vercel-hosted deploy path.
    pub fn vercel_blocks() -> Vec<CommandBlock> {
        vec![
            CommandBlock::new("Vercel: Install + Login", "npm i -g vercel\nvercel login"),
            CommandBlock::new("Vercel: Link + Deploy", "vercel link\nvercel --prod"),
        ]
    }

    /// Local container path.
    pub fn docker_blocks() -> Vec<CommandBlock> {
        vec![CommandBlock::new(
            "Local: Compose Up",
            "cd infra/docker\ndocker compose up --build",
        )]
    }

    /// Everything the deploy panel shows, grouped in display order.
    pub fn all_blocks(&self) -> Vec<CommandBlock> {
        let mut blocks = Self::vercel_blocks();
        blocks.extend(Self::docker_blocks());
        blocks.extend(self.gcloud_blocks());
        blocks
    }
}
