//! # Focus Shield Core Library
//!
//! This library provides the core business logic for the Focus Shield
//! focus timer. It implements a CLI-first philosophy where all operations
//! are available via a standalone CLI binary; any richer frontend is a
//! thin presentation layer over the same core library.
//!
//! ## Architecture
//!
//! - **Session engine**: A wall-clock-based state machine that requires the
//!   caller to periodically invoke `poll()` for progress updates. The engine
//!   spawns no threads and never reads the system clock itself.
//! - **Reminder schedulers**: Three independent one-shot schedulers (focus
//!   nudge, affirmation, learning block) that re-arm themselves after every
//!   firing and collapse to a skip while the session is gated.
//! - **Storage**: SQLite-backed single-record snapshot persistence.
//! - **Cloud ops**: Pure string templating for deployment command blocks.
//!
//! ## Key Components
//!
//! - [`Session`]: Core session state machine
//! - [`Store`]: Snapshot persistence
//! - [`Event`]: Everything observable the engine emits
//! - [`Clock`]: Time source abstraction so tests can drive virtual time

pub mod checklist;
pub mod clock;
pub mod cloudops;
pub mod error;
pub mod events;
pub mod notify;
pub mod overlay;
pub mod reminders;
pub mod session;
pub mod storage;

pub use checklist::{Checklist, TrackedItem, TrackedList};
pub use clock::{Clock, ManualClock, SystemClock};
pub use cloudops::{CloudOpsForm, CommandBlock};
pub use error::{CoreError, StoreError};
pub use events::{Event, Notification};
pub use overlay::{OverlayKind, OverlayState};
pub use reminders::{AffirmationSet, LearningQueue, LearningTopic, OneShot, ReminderKind};
pub use session::{format_hms, Phase, Session, SessionState, Status, TimerConfig};
pub use storage::{Snapshot, Store};
