use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Phase;

/// Every state change in the system produces an Event.
/// The CLI prints them; frontends subscribe to the snapshot stream instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        phase: Phase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    /// A countdown reached zero and the cycle moved on.
    /// The engine is left paused at the start of `next`.
    PhaseCompleted {
        completed: Phase,
        next: Phase,
        next_duration_secs: u64,
        completed_work_sessions: u32,
        at: DateTime<Utc>,
    },
    /// The active preset changed (implies a reset).
    ConfigSwitched {
        config_id: String,
        at: DateTime<Utc>,
    },
}
