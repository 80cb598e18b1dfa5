mod engine;
mod state;

pub use engine::{Session, Status};
pub use state::{
    format_hms, AffirmationConfig, LearningConfig, NudgeConfig, Phase, Preferences, SessionState,
    TimerConfig,
};
