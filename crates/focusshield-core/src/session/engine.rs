//! Session engine implementation.
//!
//! The session engine is a wall-clock-based state machine. It does not
//! use internal threads - the caller passes the current time into every
//! command and is responsible for calling `poll()` periodically.
//!
//! ## Shape
//!
//! ```text
//! clocked in/out  x  countdown running/paused  x  focus/break
//! ```
//!
//! The three axes are independent. Reminders fire only while clocked in
//! on the focus side; the countdown runs regardless.
//!
//! ## Usage
//!
//! ```ignore
//! let mut session = Session::new(clock.now_ms());
//! session.toggle_run(clock.now_ms());
//! // In a loop:
//! session.poll(clock.now_ms()); // Returns events as things happen
//! ```

use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;
use serde::Serialize;
use url::Url;
use uuid::Uuid;

use crate::checklist::{Checklist, TrackedItem, TrackedList};
use crate::cloudops::CloudOpsForm;
use crate::events::{timestamp, Event};
use crate::overlay::{OverlayKind, OverlayState};
use crate::reminders::{
    affirmation_delay_ms, learning_delay_ms, nudge_delay_ms, AffirmationSet, LearningQueue,
    LearningTopic, OneShot, ReminderKind,
};
use crate::storage::Snapshot;

use super::state::{
    format_hms, AffirmationConfig, LearningConfig, NudgeConfig, Phase, Preferences, SessionState,
    TimerConfig,
};

/// Core session state machine.
///
/// Operates on caller-supplied epoch-millisecond timestamps -- no
/// internal thread and no system clock access, so tests can drive
/// virtual time. Commands return the events they caused; `poll()`
/// returns whatever came due since the last call.
pub struct Session {
    state: SessionState,
    timer: TimerConfig,
    nudge_cfg: NudgeConfig,
    affirm_cfg: AffirmationConfig,
    learning_cfg: LearningConfig,
    affirmations: AffirmationSet,
    learning: LearningQueue,
    checklist: Checklist,
    tooling: TrackedList,
    deploy_steps: TrackedList,
    prefs: Preferences,
    cloud: CloudOpsForm,
    overlays: OverlayState,
    // Ephemeral: rebuilt on every load, never persisted.
    nudge_timer: OneShot,
    affirm_timer: OneShot,
    learning_timer: OneShot,
    /// Epoch ms up to which the countdown has been consumed. `None`
    /// whenever the countdown is not running.
    last_tick_ms: Option<u64>,
    rng: Mcg128Xsl64,
}

impl Session {
    /// Fresh session with default content, reminders armed from `now_ms`.
    pub fn new(now_ms: u64) -> Self {
        Self::from_snapshot(Snapshot::default(), now_ms)
    }

    /// Restore a session from its persisted record. Out-of-band values
    /// are clamped on the way in; all three reminder streams arm fresh
    /// from `now_ms`.
    pub fn from_snapshot(snapshot: Snapshot, now_ms: u64) -> Self {
        Self::build(snapshot, now_ms, Mcg128Xsl64::from_entropy())
    }

    /// Like [`Session::from_snapshot`] but with a deterministic RNG, so
    /// tests can pin down the randomized nudge delays.
    pub fn with_seed(snapshot: Snapshot, now_ms: u64, seed: u64) -> Self {
        Self::build(snapshot, now_ms, Mcg128Xsl64::seed_from_u64(seed))
    }

    fn build(snapshot: Snapshot, now_ms: u64, rng: Mcg128Xsl64) -> Self {
        let nudge_min = snapshot.nudge_min_minutes.max(1);
        let mut session = Self {
            state: SessionState {
                clocked_in: snapshot.clocked_in,
                running: snapshot.running,
                on_break: snapshot.on_break,
                remaining_secs: snapshot.remaining_secs,
            },
            timer: TimerConfig {
                focus_secs: snapshot.focus_secs.max(1),
                break_secs: snapshot.break_secs.max(1),
            },
            nudge_cfg: NudgeConfig {
                min_minutes: nudge_min,
                max_minutes: snapshot.nudge_max_minutes.max(nudge_min),
            },
            affirm_cfg: AffirmationConfig {
                every_minutes: snapshot.affirm_every_minutes.max(1),
            },
            learning_cfg: LearningConfig {
                enabled: snapshot.learning_enabled,
                every_minutes: snapshot.learning_every_minutes.max(5),
            },
            affirmations: AffirmationSet::new(snapshot.affirmations),
            learning: LearningQueue::new(snapshot.learning_topics, snapshot.learning_cursor),
            checklist: Checklist::new(snapshot.checklist, snapshot.checked),
            tooling: TrackedList::new(snapshot.tooling),
            deploy_steps: TrackedList::new(snapshot.deploy_steps),
            prefs: Preferences {
                pastel: snapshot.pastel,
                sound: snapshot.sound,
            },
            cloud: snapshot.cloud,
            overlays: snapshot.overlays,
            nudge_timer: OneShot::default(),
            affirm_timer: OneShot::default(),
            learning_timer: OneShot::default(),
            last_tick_ms: None,
            rng,
        };
        session.rearm_all(now_ms);
        session.last_tick_ms = session.state.running.then_some(now_ms);
        session
    }

    /// Flatten the session back into its persisted record.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            clocked_in: self.state.clocked_in,
            running: self.state.running,
            on_break: self.state.on_break,
            focus_secs: self.timer.focus_secs,
            remaining_secs: self.state.remaining_secs,
            break_secs: self.timer.break_secs,
            nudge_min_minutes: self.nudge_cfg.min_minutes,
            nudge_max_minutes: self.nudge_cfg.max_minutes,
            affirm_every_minutes: self.affirm_cfg.every_minutes,
            affirmations: self.affirmations.iter().map(String::from).collect(),
            learning_enabled: self.learning_cfg.enabled,
            learning_every_minutes: self.learning_cfg.every_minutes,
            learning_topics: self.learning.topics().to_vec(),
            learning_cursor: self.learning.cursor(),
            checklist: self.checklist.items().to_vec(),
            checked: self.checklist.checked_map().clone(),
            pastel: self.prefs.pastel,
            sound: self.prefs.sound,
            tooling: self.tooling.items().to_vec(),
            deploy_steps: self.deploy_steps.items().to_vec(),
            cloud: self.cloud.clone(),
            overlays: self.overlays.clone(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn timer_config(&self) -> TimerConfig {
        self.timer
    }

    pub fn nudge_config(&self) -> NudgeConfig {
        self.nudge_cfg
    }

    pub fn affirmation_config(&self) -> AffirmationConfig {
        self.affirm_cfg
    }

    pub fn learning_config(&self) -> LearningConfig {
        self.learning_cfg
    }

    pub fn preferences(&self) -> Preferences {
        self.prefs
    }

    pub fn overlays(&self) -> &OverlayState {
        &self.overlays
    }

    pub fn affirmations(&self) -> &AffirmationSet {
        &self.affirmations
    }

    pub fn learning(&self) -> &LearningQueue {
        &self.learning
    }

    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    pub fn tooling(&self) -> &TrackedList {
        &self.tooling
    }

    pub fn deploy_steps(&self) -> &TrackedList {
        &self.deploy_steps
    }

    pub fn cloud(&self) -> &CloudOpsForm {
        &self.cloud
    }

    pub fn cloud_mut(&mut self) -> &mut CloudOpsForm {
        &mut self.cloud
    }

    /// When the given reminder stream next fires, in epoch ms.
    pub fn reminder_due_at(&self, kind: ReminderKind) -> Option<u64> {
        self.reminder(kind).due_at_ms()
    }

    /// Whether reminders would actually fire right now.
    pub fn reminders_active(&self) -> bool {
        self.state.clocked_in && !self.state.on_break
    }

    /// Point-in-time view for display.
    pub fn status(&self, now_ms: u64) -> Status {
        let due_in = |timer: &OneShot| {
            timer
                .due_at_ms()
                .map(|due| due.saturating_sub(now_ms) / 1000)
        };
        Status {
            clocked_in: self.state.clocked_in,
            running: self.state.running,
            phase: self.state.phase(),
            remaining_secs: self.state.remaining_secs,
            remaining_display: format_hms(self.state.remaining_secs),
            focus_minutes: self.timer.focus_secs / 60,
            break_minutes: self.timer.break_secs / 60,
            reminders_active: self.reminders_active(),
            nudge_due_in_secs: due_in(&self.nudge_timer),
            affirmation_due_in_secs: due_in(&self.affirm_timer),
            learning_due_in_secs: due_in(&self.learning_timer),
            checklist_done: self.checklist.checked_count(),
            checklist_total: self.checklist.len(),
            overlays: self.overlays.clone(),
        }
    }

    // ── Session clock ────────────────────────────────────────────────

    /// Start a work session. Idempotent when already clocked in.
    pub fn clock_in(&mut self, now_ms: u64) -> Vec<Event> {
        if self.state.clocked_in {
            return Vec::new();
        }
        self.state.clocked_in = true;
        self.rearm_all(now_ms);
        vec![Event::ClockedIn {
            at: timestamp(now_ms),
        }]
    }

    /// End the work session: stop the countdown, land back on the focus
    /// side with a full phase, and close every overlay. Idempotent when
    /// already clocked out.
    pub fn clock_out(&mut self, now_ms: u64) -> Vec<Event> {
        if !self.state.clocked_in {
            return Vec::new();
        }
        self.state.clocked_in = false;
        self.state.running = false;
        self.state.on_break = false;
        self.state.remaining_secs = self.timer.focus_secs;
        self.last_tick_ms = None;
        self.overlays.close_all();
        self.rearm_all(now_ms);
        vec![Event::ClockedOut {
            at: timestamp(now_ms),
        }]
    }

    // ── Interval timer ───────────────────────────────────────────────

    /// Start or pause the countdown. Starting while clocked out clocks
    /// in first.
    pub fn toggle_run(&mut self, now_ms: u64) -> Vec<Event> {
        let mut events = if self.state.clocked_in {
            Vec::new()
        } else {
            self.clock_in(now_ms)
        };
        self.state.running = !self.state.running;
        if self.state.running {
            self.last_tick_ms = Some(now_ms);
            events.push(Event::TimerStarted {
                phase: self.state.phase(),
                remaining_secs: self.state.remaining_secs,
                at: timestamp(now_ms),
            });
        } else {
            self.last_tick_ms = None;
            events.push(Event::TimerPaused {
                phase: self.state.phase(),
                remaining_secs: self.state.remaining_secs,
                at: timestamp(now_ms),
            });
        }
        events
    }

    /// Jump to a fresh, running focus phase.
    pub fn start_focus(&mut self, now_ms: u64) -> Vec<Event> {
        let flipped = self.state.on_break;
        self.state.on_break = false;
        self.state.remaining_secs = self.timer.focus_secs;
        self.state.running = true;
        self.last_tick_ms = Some(now_ms);
        self.overlays.dismiss(OverlayKind::Break);
        self.overlays.dismiss(OverlayKind::Nudge);
        if flipped {
            self.rearm_all(now_ms);
        }
        vec![Event::FocusStarted {
            remaining_secs: self.state.remaining_secs,
            at: timestamp(now_ms),
        }]
    }

    /// Jump to a fresh, running break phase and show the break overlay.
    pub fn start_break(&mut self, now_ms: u64) -> Vec<Event> {
        let flipped = !self.state.on_break;
        self.state.on_break = true;
        self.state.remaining_secs = self.timer.break_secs;
        self.state.running = true;
        self.last_tick_ms = Some(now_ms);
        self.overlays.break_open = true;
        if flipped {
            self.rearm_all(now_ms);
        }
        vec![Event::BreakStarted {
            remaining_secs: self.state.remaining_secs,
            at: timestamp(now_ms),
        }]
    }

    /// Set the focus phase length. Clamped to at least one minute. When
    /// the session is on the focus side the countdown restarts from the
    /// new length immediately, running or not; a break countdown is left
    /// alone and the new length applies from the next focus phase.
    pub fn set_focus_minutes(&mut self, minutes: u64) {
        self.timer.focus_secs = minutes.max(1).saturating_mul(60);
        if !self.state.on_break {
            self.state.remaining_secs = self.timer.focus_secs;
        }
    }

    /// Set the break phase length. Clamped to at least one minute;
    /// applies from the next break.
    pub fn set_break_minutes(&mut self, minutes: u64) {
        self.timer.break_secs = minutes.max(1).saturating_mul(60);
    }

    /// Advance the countdown to `now_ms` and collect everything that
    /// came due: whole-second ticks (a phase flip consumes the tick that
    /// reached zero and discards the surplus) and reminder firings.
    pub fn poll(&mut self, now_ms: u64) -> Vec<Event> {
        let mut events = Vec::new();

        if self.state.running {
            let anchor = self.last_tick_ms.unwrap_or(now_ms);
            let mut ticks = now_ms.saturating_sub(anchor) / 1000;
            let mut consumed = anchor;
            while ticks > 0 && self.state.running {
                ticks -= 1;
                consumed = consumed.saturating_add(1000);
                self.state.remaining_secs = self.state.remaining_secs.saturating_sub(1);
                if self.state.remaining_secs == 0 {
                    events.push(self.complete_phase(now_ms));
                }
            }
            self.last_tick_ms = self.state.running.then_some(consumed);
        } else {
            self.last_tick_ms = None;
        }

        for kind in ReminderKind::ALL {
            if self.reminder(kind).is_due(now_ms) {
                if let Some(event) = self.fire_scheduled(kind, now_ms) {
                    events.push(event);
                } else {
                    tracing::debug!(reminder = %kind, "due while gated, skipped");
                }
                self.rearm(kind, now_ms);
            }
        }

        events
    }

    /// The countdown reached zero: flip phases, stop, and wait for an
    /// explicit start of the next phase.
    fn complete_phase(&mut self, now_ms: u64) -> Event {
        let completed = self.state.phase();
        self.state.running = false;
        self.last_tick_ms = None;
        self.state.on_break = !self.state.on_break;
        let next = self.state.phase();
        self.state.remaining_secs = self.timer.duration_secs(next);
        match next {
            Phase::Break => self.overlays.break_open = true,
            Phase::Focus => self.overlays.dismiss(OverlayKind::Nudge),
        }
        self.rearm_all(now_ms);
        Event::PhaseCompleted {
            completed,
            next,
            remaining_secs: self.state.remaining_secs,
            at: timestamp(now_ms),
        }
    }

    // ── Reminders ────────────────────────────────────────────────────

    /// Set the nudge window. The lower bound clamps to one minute, the
    /// upper to the lower; the pending delay restarts from now.
    pub fn set_nudge_bounds(&mut self, min_minutes: u64, max_minutes: u64, now_ms: u64) {
        let min = min_minutes.max(1);
        self.nudge_cfg = NudgeConfig {
            min_minutes: min,
            max_minutes: max_minutes.max(min),
        };
        self.rearm(ReminderKind::Nudge, now_ms);
    }

    /// Set the affirmation period, at least one minute; the pending
    /// delay restarts from now.
    pub fn set_affirmation_every(&mut self, minutes: u64, now_ms: u64) {
        self.affirm_cfg.every_minutes = minutes.max(1);
        self.rearm(ReminderKind::Affirmation, now_ms);
    }

    /// Set the learning period, at least five minutes; the pending delay
    /// restarts from now.
    pub fn set_learning_every(&mut self, minutes: u64, now_ms: u64) {
        self.learning_cfg.every_minutes = minutes.max(5);
        self.rearm(ReminderKind::Learning, now_ms);
    }

    /// Enable or disable learning blocks. A change restarts the pending
    /// delay; firing while disabled is skipped either way.
    pub fn set_learning_enabled(&mut self, enabled: bool, now_ms: u64) {
        if self.learning_cfg.enabled != enabled {
            self.learning_cfg.enabled = enabled;
            self.rearm(ReminderKind::Learning, now_ms);
        }
    }

    pub fn add_affirmation(&mut self, text: impl Into<String>, now_ms: u64) {
        self.affirmations.push(text);
        self.rearm(ReminderKind::Affirmation, now_ms);
    }

    /// Remove an affirmation by list position. Out-of-range indices are
    /// ignored.
    pub fn remove_affirmation(&mut self, index: usize, now_ms: u64) -> Option<String> {
        let removed = self.affirmations.remove(index);
        if removed.is_some() {
            self.rearm(ReminderKind::Affirmation, now_ms);
        }
        removed
    }

    /// Add a learning topic. Minutes clamp to at least five.
    pub fn add_learning_topic(
        &mut self,
        title: impl Into<String>,
        minutes: u64,
        link: Option<Url>,
        now_ms: u64,
    ) -> LearningTopic {
        let topic = LearningTopic::new(title, minutes, link);
        self.learning.push(topic.clone());
        self.rearm(ReminderKind::Learning, now_ms);
        topic
    }

    /// Remove a learning topic by id. The rotation cursor is left alone;
    /// the modulo at read time absorbs the shrunken list.
    pub fn remove_learning_topic(&mut self, id: &Uuid, now_ms: u64) -> bool {
        let removed = self.learning.remove(id);
        if removed {
            self.rearm(ReminderKind::Learning, now_ms);
        }
        removed
    }

    /// Fire the nudge immediately, gate or no gate.
    pub fn trigger_nudge(&mut self, now_ms: u64) -> Vec<Event> {
        self.overlays.nudge_open = true;
        vec![Event::NudgeFired {
            manual: true,
            at: timestamp(now_ms),
        }]
    }

    /// Show a random affirmation immediately. An empty set falls back to
    /// a stock line rather than doing nothing.
    pub fn trigger_affirmation(&mut self, now_ms: u64) -> Vec<Event> {
        let text = self
            .affirmations
            .pick(&mut self.rng)
            .unwrap_or("You got this!")
            .to_string();
        self.overlays.affirmation = Some(text.clone());
        vec![Event::AffirmationFired {
            text,
            manual: true,
            at: timestamp(now_ms),
        }]
    }

    /// Show the current learning topic immediately without advancing the
    /// rotation. Does nothing when the topic list is empty.
    pub fn trigger_learning(&mut self, now_ms: u64) -> Vec<Event> {
        let Some(topic) = self.learning.peek().cloned() else {
            return Vec::new();
        };
        self.overlays.learning = Some(topic.clone());
        vec![Event::LearningFired {
            topic,
            manual: true,
            at: timestamp(now_ms),
        }]
    }

    /// A scheduled firing: gate first, then mutate overlays and (for
    /// learning) the rotation. Returns `None` on a skip.
    fn fire_scheduled(&mut self, kind: ReminderKind, now_ms: u64) -> Option<Event> {
        if !self.reminders_active() {
            return None;
        }
        match kind {
            ReminderKind::Nudge => {
                self.overlays.nudge_open = true;
                Some(Event::NudgeFired {
                    manual: false,
                    at: timestamp(now_ms),
                })
            }
            ReminderKind::Affirmation => {
                let text = self.affirmations.pick(&mut self.rng)?.to_string();
                self.overlays.affirmation = Some(text.clone());
                Some(Event::AffirmationFired {
                    text,
                    manual: false,
                    at: timestamp(now_ms),
                })
            }
            ReminderKind::Learning => {
                if !self.learning_cfg.enabled {
                    return None;
                }
                let topic = self.learning.advance()?;
                self.overlays.learning = Some(topic.clone());
                Some(Event::LearningFired {
                    topic,
                    manual: false,
                    at: timestamp(now_ms),
                })
            }
        }
    }

    fn reminder(&self, kind: ReminderKind) -> &OneShot {
        match kind {
            ReminderKind::Nudge => &self.nudge_timer,
            ReminderKind::Affirmation => &self.affirm_timer,
            ReminderKind::Learning => &self.learning_timer,
        }
    }

    /// Replace the stream's pending delay with a fresh draw from now.
    fn rearm(&mut self, kind: ReminderKind, now_ms: u64) {
        let delay_ms = match kind {
            ReminderKind::Nudge => nudge_delay_ms(
                self.nudge_cfg.min_minutes,
                self.nudge_cfg.max_minutes,
                &mut self.rng,
            ),
            ReminderKind::Affirmation => affirmation_delay_ms(self.affirm_cfg.every_minutes),
            ReminderKind::Learning => learning_delay_ms(self.learning_cfg.every_minutes),
        };
        match kind {
            ReminderKind::Nudge => self.nudge_timer.arm(now_ms, delay_ms),
            ReminderKind::Affirmation => self.affirm_timer.arm(now_ms, delay_ms),
            ReminderKind::Learning => self.learning_timer.arm(now_ms, delay_ms),
        }
    }

    fn rearm_all(&mut self, now_ms: u64) {
        for kind in ReminderKind::ALL {
            self.rearm(kind, now_ms);
        }
    }

    // ── Checklists ───────────────────────────────────────────────────

    pub fn add_checklist_item(&mut self, label: impl Into<String>) {
        self.checklist.add(label);
    }

    /// Flip a checklist mark, returning the new state.
    pub fn toggle_checklist_item(&mut self, label: &str) -> bool {
        self.checklist.toggle(label)
    }

    pub fn remove_checklist_item(&mut self, label: &str) -> bool {
        self.checklist.remove(label)
    }

    pub fn add_tool(&mut self, label: impl Into<String>) -> TrackedItem {
        self.tooling.add(label).clone()
    }

    pub fn toggle_tool(&mut self, id: &Uuid) -> Option<bool> {
        self.tooling.toggle(id)
    }

    pub fn remove_tool(&mut self, id: &Uuid) -> bool {
        self.tooling.remove(id)
    }

    pub fn toggle_deploy_step(&mut self, id: &Uuid) -> Option<bool> {
        self.deploy_steps.toggle(id)
    }

    // ── Overlays & preferences ───────────────────────────────────────

    pub fn open_checklist_overlay(&mut self) {
        self.overlays.checklist_open = true;
    }

    pub fn dismiss_overlay(&mut self, kind: OverlayKind) {
        self.overlays.dismiss(kind);
    }

    pub fn dismiss_all_overlays(&mut self) {
        self.overlays.close_all();
    }

    pub fn set_sound(&mut self, on: bool) {
        self.prefs.sound = on;
    }

    pub fn set_pastel(&mut self, on: bool) {
        self.prefs.pastel = on;
    }
}

/// Point-in-time display view of a session.
#[derive(Debug, Clone, Serialize)]
pub struct Status {
    pub clocked_in: bool,
    pub running: bool,
    pub phase: Phase,
    pub remaining_secs: u64,
    pub remaining_display: String,
    pub focus_minutes: u64,
    pub break_minutes: u64,
    pub reminders_active: bool,
    pub nudge_due_in_secs: Option<u64>,
    pub affirmation_due_in_secs: Option<u64>,
    pub learning_due_in_secs: Option<u64>,
    pub checklist_done: usize,
    pub checklist_total: usize,
    pub overlays: OverlayState,
}
