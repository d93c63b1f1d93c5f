//! Timer preset definitions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cycle::Phase;
use crate::error::ValidationError;

/// A named set of phase durations and cycle length.
///
/// Immutable once created: the store offers create and list only, so a
/// preset never changes under a running engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    pub id: String,
    pub name: String,
    /// Work phase duration in seconds.
    pub work_secs: u64,
    /// Short break duration in seconds.
    pub break_secs: u64,
    /// Long break duration in seconds.
    pub long_break_secs: u64,
    /// Work sessions completed between long breaks.
    pub sessions_before_long_break: u32,
}

impl TimerConfig {
    /// Validate and build a new preset with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `name` is blank or any duration
    /// or the cycle length is zero.
    pub fn new(
        name: &str,
        work_secs: u64,
        break_secs: u64,
        long_break_secs: u64,
        sessions_before_long_break: u32,
    ) -> Result<Self, ValidationError> {
        let config = Self {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            work_secs,
            break_secs,
            long_break_secs,
            sessions_before_long_break,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check all fields against the store's create contract.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Empty("name"));
        }
        let durations = [
            ("work_secs", self.work_secs),
            ("break_secs", self.break_secs),
            ("long_break_secs", self.long_break_secs),
        ];
        for (field, value) in durations {
            if value == 0 {
                return Err(ValidationError::InvalidValue {
                    field,
                    message: "duration must be a positive number of seconds".into(),
                });
            }
        }
        if self.sessions_before_long_break == 0 {
            return Err(ValidationError::InvalidValue {
                field: "sessions_before_long_break",
                message: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Configured duration of the given phase, in seconds.
    pub fn phase_duration(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Work => self.work_secs,
            Phase::Break => self.break_secs,
            Phase::LongBreak => self.long_break_secs,
        }
    }

    /// The classic 25/5/15 preset.
    pub fn pomodoro() -> Self {
        Self {
            id: "pomodoro".into(),
            name: "Pomodoro".into(),
            work_secs: 25 * 60,
            break_secs: 5 * 60,
            long_break_secs: 15 * 60,
            sessions_before_long_break: 4,
        }
    }

    /// Shorter cycles for easing into a session.
    pub fn short_focus() -> Self {
        Self {
            id: "short-focus".into(),
            name: "Short Focus".into(),
            work_secs: 15 * 60,
            break_secs: 3 * 60,
            long_break_secs: 10 * 60,
            sessions_before_long_break: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_assigns_unique_ids() {
        let a = TimerConfig::new("Deep Work", 50 * 60, 10 * 60, 30 * 60, 3).unwrap();
        let b = TimerConfig::new("Deep Work", 50 * 60, 10 * 60, 30 * 60, 3).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn new_trims_name() {
        let config = TimerConfig::new("  Study  ", 60, 60, 60, 1).unwrap();
        assert_eq!(config.name, "Study");
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = TimerConfig::new("   ", 60, 60, 60, 1).unwrap_err();
        assert!(matches!(err, ValidationError::Empty("name")));
    }

    #[test]
    fn zero_durations_are_rejected() {
        assert!(TimerConfig::new("t", 0, 60, 60, 1).is_err());
        assert!(TimerConfig::new("t", 60, 0, 60, 1).is_err());
        assert!(TimerConfig::new("t", 60, 60, 0, 1).is_err());
    }

    #[test]
    fn zero_cycle_length_is_rejected() {
        let err = TimerConfig::new("t", 60, 60, 60, 0).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidValue {
                field: "sessions_before_long_break",
                ..
            }
        ));
    }

    #[test]
    fn phase_duration_maps_each_phase() {
        let config = TimerConfig::pomodoro();
        assert_eq!(config.phase_duration(Phase::Work), 25 * 60);
        assert_eq!(config.phase_duration(Phase::Break), 5 * 60);
        assert_eq!(config.phase_duration(Phase::LongBreak), 15 * 60);
    }

    #[test]
    fn builtin_presets_pass_validation() {
        TimerConfig::pomodoro().validate().unwrap();
        TimerConfig::short_focus().validate().unwrap();
    }
}
