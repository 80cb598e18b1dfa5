use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reminders::LearningTopic;
use crate::session::Phase;

/// Every observable state change in the system produces an Event.
/// Drivers map events to desktop notifications and audio cues; tests
/// assert on them directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ClockedIn {
        at: DateTime<Utc>,
    },
    ClockedOut {
        at: DateTime<Utc>,
    },
    TimerStarted {
        phase: Phase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        phase: Phase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// A focus phase was started explicitly (as opposed to resumed).
    FocusStarted {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// A break phase was started explicitly.
    BreakStarted {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// The countdown reached zero and the timer flipped phases. The timer
    /// is stopped afterwards; the next phase waits for an explicit start.
    PhaseCompleted {
        completed: Phase,
        next: Phase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// The focus-check nudge fired. `manual` marks a user-triggered test
    /// fire rather than a scheduled one.
    NudgeFired {
        manual: bool,
        at: DateTime<Utc>,
    },
    AffirmationFired {
        text: String,
        manual: bool,
        at: DateTime<Utc>,
    },
    LearningFired {
        topic: LearningTopic,
        manual: bool,
        at: DateTime<Utc>,
    },
}

/// Title/body pair for a desktop notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    fn new(title: &str, body: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            body: body.into(),
        }
    }
}

impl Event {
    /// When this event happened.
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            Event::ClockedIn { at }
            | Event::ClockedOut { at }
            | Event::TimerStarted { at, .. }
            | Event::TimerPaused { at, .. }
            | Event::FocusStarted { at, .. }
            | Event::BreakStarted { at, .. }
            | Event::PhaseCompleted { at, .. }
            | Event::NudgeFired { at, .. }
            | Event::AffirmationFired { at, .. }
            | Event::LearningFired { at, .. } => *at,
        }
    }

    /// The desktop notification this event maps to, if any. Manual
    /// affirmation and learning fires stay on screen only; pausing and
    /// resuming the countdown is silent.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            Event::ClockedIn { .. } => {
                Some(Notification::new("Clocked in", "Let's win this session"))
            }
            Event::ClockedOut { .. } => {
                Some(Notification::new("Clocked out", "Great work today ✨"))
            }
            Event::TimerStarted { .. } | Event::TimerPaused { .. } => None,
            Event::FocusStarted { .. } => {
                Some(Notification::new("Focus started", "Deep work mode engaged"))
            }
            Event::BreakStarted { .. } => {
                Some(Notification::new("Break started", "Stretch, water, breathe"))
            }
            Event::PhaseCompleted { next, .. } => Some(match next {
                Phase::Break => Notification::new("Break time", "Stand up, breathe, water."),
                Phase::Focus => Notification::new("Break finished", "Back to focus ✨"),
            }),
            Event::NudgeFired { manual, .. } => Some(if *manual {
                Notification::new("Focus check", "Manual check")
            } else {
                Notification::new("Focus check", "Are we still on the ONE task?")
            }),
            Event::AffirmationFired { text, manual, .. } => {
                (!manual).then(|| Notification::new("You've got this", text.clone()))
            }
            Event::LearningFired { topic, manual, .. } => {
                (!manual).then(|| Notification::new("Learning Block", topic.title.clone()))
            }
        }
    }

    /// Whether this event plays the audio cue.
    pub fn chimes(&self) -> bool {
        matches!(
            self,
            Event::PhaseCompleted { .. }
                | Event::NudgeFired { .. }
                | Event::AffirmationFired { .. }
                | Event::LearningFired { .. }
        )
    }
}

/// Epoch-milliseconds to a UTC timestamp for event payloads.
pub(crate) fn timestamp(now_ms: u64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(now_ms as i64).unwrap_or_default()
}
