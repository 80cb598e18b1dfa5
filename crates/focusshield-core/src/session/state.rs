use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Focus,
    Break,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Focus => write!(f, "focus"),
            Phase::Break => write!(f, "break"),
        }
    }
}

/// The live session flags plus the countdown position.
///
/// `clocked_in` and `running` are independent: the countdown can run
/// while clocked out (reminders stay gated), and a clocked-in session
/// can sit with the countdown paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub clocked_in: bool,
    pub running: bool,
    pub on_break: bool,
    pub remaining_secs: u64,
}

impl SessionState {
    pub fn phase(&self) -> Phase {
        if self.on_break {
            Phase::Break
        } else {
            Phase::Focus
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            clocked_in: false,
            running: false,
            on_break: false,
            remaining_secs: TimerConfig::default().focus_secs,
        }
    }
}

/// Phase durations in seconds. Always at least one second each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    pub focus_secs: u64,
    pub break_secs: u64,
}

impl TimerConfig {
    pub fn duration_secs(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Focus => self.focus_secs,
            Phase::Break => self.break_secs,
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_secs: 25 * 60,
            break_secs: 5 * 60,
        }
    }
}

/// Bounds for the randomized focus-check delay, in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NudgeConfig {
    pub min_minutes: u64,
    pub max_minutes: u64,
}

impl Default for NudgeConfig {
    fn default() -> Self {
        Self {
            min_minutes: 12,
            max_minutes: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffirmationConfig {
    pub every_minutes: u64,
}

impl Default for AffirmationConfig {
    fn default() -> Self {
        Self { every_minutes: 30 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningConfig {
    pub enabled: bool,
    pub every_minutes: u64,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            every_minutes: 45,
        }
    }
}

/// Presentation preferences. `sound` gates the audio cue only; desktop
/// notifications are always attempted and left to the OS to suppress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub pastel: bool,
    pub sound: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            pastel: true,
            sound: true,
        }
    }
}

/// Render seconds as `h:mm:ss`, dropping the hour field when zero.
pub fn format_hms(total_secs: u64) -> String {
    let h = total_secs / 3600;
    let m = (total_secs % 3600) / 60;
    let s = total_secs % 60;
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m:02}:{s:02}")
    }
}
