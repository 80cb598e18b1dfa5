//! The persisted record.
//!
//! One flat JSON document holds everything worth keeping across runs.
//! Every field carries its own default so a record written by an older
//! build, or one with fields stripped by hand, loads without complaint;
//! unknown fields are dropped on read.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::checklist::TrackedItem;
use crate::cloudops::CloudOpsForm;
use crate::overlay::OverlayState;
use crate::reminders::LearningTopic;

/// Everything the session persists, in wire form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub clocked_in: bool,
    #[serde(default)]
    pub running: bool,
    #[serde(default)]
    pub on_break: bool,
    #[serde(default = "default_focus_secs")]
    pub focus_secs: u64,
    #[serde(default = "default_focus_secs")]
    pub remaining_secs: u64,
    #[serde(default = "default_break_secs")]
    pub break_secs: u64,
    #[serde(default = "default_nudge_min")]
    pub nudge_min_minutes: u64,
    #[serde(default = "default_nudge_max")]
    pub nudge_max_minutes: u64,
    #[serde(default = "default_affirm_every")]
    pub affirm_every_minutes: u64,
    #[serde(default = "default_affirmations")]
    pub affirmations: Vec<String>,
    #[serde(default = "default_true")]
    pub learning_enabled: bool,
    #[serde(default = "default_learning_every")]
    pub learning_every_minutes: u64,
    #[serde(default = "default_learning_topics")]
    pub learning_topics: Vec<LearningTopic>,
    #[serde(default)]
    pub learning_cursor: usize,
    #[serde(default = "default_checklist")]
    pub checklist: Vec<String>,
    #[serde(default)]
    pub checked: HashMap<String, bool>,
    #[serde(default = "default_true")]
    pub pastel: bool,
    #[serde(default = "default_true")]
    pub sound: bool,
    #[serde(default = "default_tooling")]
    pub tooling: Vec<TrackedItem>,
    #[serde(default = "default_deploy_steps")]
    pub deploy_steps: Vec<TrackedItem>,
    #[serde(default)]
    pub cloud: CloudOpsForm,
    #[serde(default)]
    pub overlays: OverlayState,
}

// Default functions

fn default_focus_secs() -> u64 {
    25 * 60
}

fn default_break_secs() -> u64 {
    5 * 60
}

fn default_nudge_min() -> u64 {
    12
}

fn default_nudge_max() -> u64 {
    20
}

fn default_affirm_every() -> u64 {
    30
}

fn default_learning_every() -> u64 {
    45
}

fn default_true() -> bool {
    true
}

fn default_affirmations() -> Vec<String> {
    [
        "You're building a legacy, one commit at a time.",
        "Small steps compound. Ship the next brick.",
        "Your future self thanks you for today's focus.",
        "You are capable, creative, and unstoppable.",
        "Progress over perfection. Keep going.",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn url(s: &str) -> Option<Url> {
    Url::parse(s).ok()
}

fn default_learning_topics() -> Vec<LearningTopic> {
    vec![
        LearningTopic::new("Git & GitHub Basics", 20, url("https://docs.github.com/")),
        LearningTopic::new(
            "GitHub Actions (CI)",
            20,
            url("https://docs.github.com/actions"),
        ),
        LearningTopic::new("Docker 101", 20, url("https://docs.docker.com/get-started/")),
        LearningTopic::new("Vercel Deploy", 15, url("https://vercel.com/docs")),
        LearningTopic::new("Supabase + Auth", 20, url("https://supabase.com/docs")),
    ]
}

fn default_checklist() -> Vec<String> {
    [
        "ONE main goal",
        "ONE active task",
        "Open Focus Shield",
        "Commit once today (git)",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_tooling() -> Vec<TrackedItem> {
    [
        "Focus Shield Cloud (self-host later)",
        "Deployment Orchestrator (one-click, multi-target)",
        "Cost Monitor (usage + alerts)",
        "AI Trainer (Ollama/LoRA local)",
        "Template Marketplace (agents/apps)",
    ]
    .into_iter()
    .map(TrackedItem::new)
    .collect()
}

fn default_deploy_steps() -> Vec<TrackedItem> {
    [
        "Push repo to GitHub",
        "Vercel: connect repo + set env",
        "Local: Docker compose up",
        "GCP: build + push image",
        "Cloud Run deploy",
    ]
    .into_iter()
    .map(TrackedItem::new)
    .collect()
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            clocked_in: false,
            running: false,
            on_break: false,
            focus_secs: default_focus_secs(),
            remaining_secs: default_focus_secs(),
            break_secs: default_break_secs(),
            nudge_min_minutes: default_nudge_min(),
            nudge_max_minutes: default_nudge_max(),
            affirm_every_minutes: default_affirm_every(),
            affirmations: default_affirmations(),
            learning_enabled: true,
            learning_every_minutes: default_learning_every(),
            learning_topics: default_learning_topics(),
            learning_cursor: 0,
            checklist: default_checklist(),
            checked: HashMap::new(),
            pastel: true,
            sound: true,
            tooling: default_tooling(),
            deploy_steps: default_deploy_steps(),
            cloud: CloudOpsForm::default(),
            overlays: OverlayState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_loads_as_defaults() {
        let snap: Snapshot = serde_json::from_str("{}").unwrap();
        assert!(!snap.clocked_in);
        assert_eq!(snap.focus_secs, 1500);
        assert_eq!(snap.remaining_secs, 1500);
        assert_eq!(snap.break_secs, 300);
        assert_eq!(snap.nudge_min_minutes, 12);
        assert_eq!(snap.nudge_max_minutes, 20);
        assert_eq!(snap.affirmations.len(), 5);
        assert_eq!(snap.learning_topics.len(), 5);
        assert_eq!(snap.checklist.len(), 4);
        assert_eq!(snap.tooling.len(), 5);
        assert_eq!(snap.deploy_steps.len(), 5);
        assert!(snap.pastel);
        assert!(snap.sound);
    }

    #[test]
    fn partial_document_keeps_present_fields() {
        let snap: Snapshot =
            serde_json::from_str(r#"{"clocked_in":true,"focus_secs":600,"affirmations":[]}"#)
                .unwrap();
        assert!(snap.clocked_in);
        assert_eq!(snap.focus_secs, 600);
        assert!(snap.affirmations.is_empty());
        // untouched fields still default
        assert_eq!(snap.break_secs, 300);
        assert_eq!(snap.learning_every_minutes, 45);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let snap: Snapshot = serde_json::from_str(r#"{"not_a_field":123}"#).unwrap();
        assert_eq!(snap.focus_secs, 1500);
    }

    #[test]
    fn roundtrip_preserves_every_field() {
        let mut snap = Snapshot::default();
        snap.clocked_in = true;
        snap.running = true;
        snap.remaining_secs = 42;
        snap.learning_cursor = 7;
        snap.checked.insert("ONE main goal".into(), true);
        snap.overlays.nudge_open = true;
        snap.cloud.project = "proj".into();

        let json = serde_json::to_string(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn default_topics_carry_links() {
        let topics = default_learning_topics();
        assert!(topics.iter().all(|t| t.link.is_some()));
        assert_eq!(topics[3].minutes, 15);
    }
}
