//! One-shot reminder scheduling.
//!
//! Each reminder stream owns a single pending due instant. Arming again
//! replaces that instant, which is also how a pending fire gets
//! cancelled: there is never more than one outstanding delay per stream,
//! so a reconfigured or re-gated stream cannot double-fire.
//!
//! Delay computation is split out as pure functions of the configured
//! bounds and an injected RNG so the distribution can be tested without
//! any session machinery.

mod affirmations;
mod learning;

pub use affirmations::AffirmationSet;
pub use learning::{LearningQueue, LearningTopic};

use rand::Rng;
use serde::{Deserialize, Serialize};

const MS_PER_MINUTE: u64 = 60 * 1000;

/// Floor for the learning-block interval, in minutes.
pub const LEARNING_FLOOR_MINUTES: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    Nudge,
    Affirmation,
    Learning,
}

impl ReminderKind {
    pub const ALL: [ReminderKind; 3] = [
        ReminderKind::Nudge,
        ReminderKind::Affirmation,
        ReminderKind::Learning,
    ];
}

impl std::fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReminderKind::Nudge => write!(f, "nudge"),
            ReminderKind::Affirmation => write!(f, "affirmation"),
            ReminderKind::Learning => write!(f, "learning"),
        }
    }
}

/// A single pending delay, owned by one reminder stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneShot {
    due_at_ms: Option<u64>,
}

impl OneShot {
    /// Schedule the next fire `delay_ms` after `now_ms`, replacing any
    /// pending one.
    pub fn arm(&mut self, now_ms: u64, delay_ms: u64) {
        self.due_at_ms = Some(now_ms.saturating_add(delay_ms));
    }

    pub fn cancel(&mut self) {
        self.due_at_ms = None;
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        matches!(self.due_at_ms, Some(due) if now_ms >= due)
    }

    pub fn due_at_ms(&self) -> Option<u64> {
        self.due_at_ms
    }
}

/// Draw the next nudge delay uniformly from the configured window.
///
/// The lower bound clamps to one minute; the upper bound clamps up to
/// the lower so an inverted window degenerates to a fixed delay. Both
/// endpoints are inclusive.
pub fn nudge_delay_ms<R: Rng + ?Sized>(min_minutes: u64, max_minutes: u64, rng: &mut R) -> u64 {
    let min_ms = min_minutes.max(1).saturating_mul(MS_PER_MINUTE);
    let max_ms = max_minutes.saturating_mul(MS_PER_MINUTE).max(min_ms);
    rng.gen_range(min_ms..=max_ms)
}

/// Fixed affirmation period, floored at one minute.
pub fn affirmation_delay_ms(every_minutes: u64) -> u64 {
    every_minutes.max(1).saturating_mul(MS_PER_MINUTE)
}

/// Fixed learning-block period, floored at five minutes.
pub fn learning_delay_ms(every_minutes: u64) -> u64 {
    every_minutes
        .max(LEARNING_FLOOR_MINUTES)
        .saturating_mul(MS_PER_MINUTE)
}
