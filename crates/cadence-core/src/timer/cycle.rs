//! Session cycle state machine.
//!
//! Decides which phase follows a finished countdown and how the
//! completed-session counter moves. Kept free of clocks and I/O so the
//! transition table can be tested exhaustively.

use serde::{Deserialize, Serialize};

use super::config::TimerConfig;

/// One phase of the work/break cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Work,
    Break,
    LongBreak,
}

impl Phase {
    pub fn is_work(self) -> bool {
        matches!(self, Phase::Work)
    }

    /// Human-readable phase name.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Work => "work",
            Phase::Break => "break",
            Phase::LongBreak => "long break",
        }
    }
}

/// Outcome of completing a phase: the phase to enter and the updated
/// completed-work-session count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: Phase,
    pub completed_work_sessions: u32,
}

/// Compute the phase that follows `phase` once its countdown hits zero.
///
/// Every `sessions_before_long_break`-th work completion rotates into a
/// long break; earlier ones into a short break. Breaks always return to
/// work. The session counter moves only on a work completion.
pub fn advance(phase: Phase, completed_work_sessions: u32, config: &TimerConfig) -> Transition {
    match phase {
        Phase::Work => {
            let completed = completed_work_sessions.saturating_add(1);
            let next = if completed % config.sessions_before_long_break == 0 {
                Phase::LongBreak
            } else {
                Phase::Break
            };
            Transition {
                next,
                completed_work_sessions: completed,
            }
        }
        Phase::Break | Phase::LongBreak => Transition {
            next: Phase::Work,
            completed_work_sessions,
        },
    }
}
