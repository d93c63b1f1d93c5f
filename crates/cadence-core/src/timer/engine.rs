//! Countdown engine implementation.
//!
//! The engine is a tick-driven state machine. It does not use internal
//! threads - the caller feeds it one `tick()` per elapsed second of
//! wall-clock time while the timer runs. Because time only advances in
//! whole ticks, pausing and resuming can never drift the countdown.
//!
//! ## Phase cycle
//!
//! ```text
//! work -> (break | longBreak) -> work -> ...
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(TimerConfig::pomodoro());
//! engine.start();
//! // Once per second:
//! engine.tick(); // Returns Some(Event) when a phase completes
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::config::TimerConfig;
use super::cycle::{self, Phase};
use crate::events::Event;

/// Serializable view of the runtime state at one instant.
///
/// This is the value the subscription stream carries to frontends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub config_id: String,
    pub config_name: String,
    pub phase: Phase,
    pub remaining_secs: u64,
    pub total_secs: u64,
    pub running: bool,
    pub completed_work_sessions: u32,
    /// 0.0 .. 1.0 progress within the current phase.
    pub progress: f64,
    pub at: DateTime<Utc>,
}

/// Core countdown engine.
///
/// Holds the single runtime state of the active session. Mutated only by
/// the commands below and by `tick()`; all transitions are synchronous.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    config: TimerConfig,
    phase: Phase,
    /// Remaining time in seconds for the current phase.
    remaining_secs: u64,
    running: bool,
    completed_work_sessions: u32,
}

impl TimerEngine {
    /// Create a new engine on the given preset.
    ///
    /// Starts paused at the beginning of a work phase.
    pub fn new(config: TimerConfig) -> Self {
        let remaining_secs = config.work_secs;
        Self {
            config,
            phase: Phase::Work,
            remaining_secs,
            running: false,
            completed_work_sessions: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn completed_work_sessions(&self) -> u32 {
        self.completed_work_sessions
    }

    /// Configured duration of the current phase.
    pub fn total_secs(&self) -> u64 {
        self.config.phase_duration(self.phase)
    }

    /// 0.0 .. 1.0 progress within the current phase.
    pub fn progress(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_secs as f64 / total as f64)
    }

    /// Build a full state snapshot.
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            config_id: self.config.id.clone(),
            config_name: self.config.name.clone(),
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            running: self.running,
            completed_work_sessions: self.completed_work_sessions,
            progress: self.progress(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start or resume the countdown. Starting a running engine is a no-op.
    pub fn start(&mut self) -> Option<Event> {
        if self.running {
            return None; // Already running.
        }
        self.running = true;
        Some(Event::TimerStarted {
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Pause the countdown. Pausing a paused engine is a no-op.
    ///
    /// The remaining time is preserved exactly; resuming picks up at the
    /// same second.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(Event::TimerPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Return to the initial state: work phase, full duration, paused,
    /// session counter zeroed. Valid from any phase.
    pub fn reset(&mut self) -> Option<Event> {
        self.phase = Phase::Work;
        self.remaining_secs = self.config.work_secs;
        self.running = false;
        self.completed_work_sessions = 0;
        Some(Event::TimerReset { at: Utc::now() })
    }

    /// Replace the active preset. Implies a reset against the new preset.
    pub fn switch_config(&mut self, config: TimerConfig) -> Option<Event> {
        self.config = config;
        self.reset();
        Some(Event::ConfigSwitched {
            config_id: self.config.id.clone(),
            at: Utc::now(),
        })
    }

    /// Advance the countdown by one elapsed second.
    ///
    /// Returns `Some(Event::PhaseCompleted)` when the current phase
    /// finishes. The engine then sits paused at the start of the next
    /// phase; the user must explicitly resume.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return None;
        }

        // Countdown exhausted: stop before any further decrement and let
        // the cycle decide what comes next.
        let completed = self.phase;
        let transition = cycle::advance(self.phase, self.completed_work_sessions, &self.config);
        self.phase = transition.next;
        self.completed_work_sessions = transition.completed_work_sessions;
        self.remaining_secs = self.config.phase_duration(transition.next);
        self.running = false;

        tracing::debug!(
            from = completed.label(),
            to = transition.next.label(),
            sessions = transition.completed_work_sessions,
            "phase completed"
        );

        Some(Event::PhaseCompleted {
            completed,
            next: transition.next,
            next_duration_secs: self.remaining_secs,
            completed_work_sessions: self.completed_work_sessions,
            at: Utc::now(),
        })
    }
}
