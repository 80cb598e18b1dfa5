//! Overlay presentation state.
//!
//! Overlays are a pure projection of session activity: events open them,
//! dismissal closes them, and nothing else reads them back. Dismissing
//! an overlay never touches the underlying session or timer state.

use serde::{Deserialize, Serialize};

use crate::reminders::LearningTopic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayKind {
    Break,
    Checklist,
    Nudge,
    Affirmation,
    Learning,
}

impl std::fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverlayKind::Break => write!(f, "break"),
            OverlayKind::Checklist => write!(f, "checklist"),
            OverlayKind::Nudge => write!(f, "nudge"),
            OverlayKind::Affirmation => write!(f, "affirmation"),
            OverlayKind::Learning => write!(f, "learning"),
        }
    }
}

/// Which overlays are currently showing. The affirmation and learning
/// overlays carry the content they were opened with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayState {
    #[serde(default)]
    pub break_open: bool,
    #[serde(default)]
    pub checklist_open: bool,
    #[serde(default)]
    pub nudge_open: bool,
    #[serde(default)]
    pub affirmation: Option<String>,
    #[serde(default)]
    pub learning: Option<LearningTopic>,
}

impl OverlayState {
    pub fn dismiss(&mut self, kind: OverlayKind) {
        match kind {
            OverlayKind::Break => self.break_open = false,
            OverlayKind::Checklist => self.checklist_open = false,
            OverlayKind::Nudge => self.nudge_open = false,
            OverlayKind::Affirmation => self.affirmation = None,
            OverlayKind::Learning => self.learning = None,
        }
    }

    pub fn close_all(&mut self) {
        *self = Self::default();
    }

    pub fn any_open(&self) -> bool {
        self.break_open
            || self.checklist_open
            || self.nudge_open
            || self.affirmation.is_some()
            || self.learning.is_some()
    }

    /// The kinds currently showing, in a fixed display order.
    pub fn open_kinds(&self) -> Vec<OverlayKind> {
        let mut kinds = Vec::new();
        if self.break_open {
            kinds.push(OverlayKind::Break);
        }
        if self.checklist_open {
            kinds.push(OverlayKind::Checklist);
        }
        if self.nudge_open {
            kinds.push(OverlayKind::Nudge);
        }
        if self.affirmation.is_some() {
            kinds.push(OverlayKind::Affirmation);
        }
        if self.learning.is_some() {
            kinds.push(OverlayKind::Learning);
        }
        kinds
    }
}
