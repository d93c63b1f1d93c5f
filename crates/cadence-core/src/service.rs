//! Session service.
//!
//! One [`TimerService`] exists per active session. It owns the preset
//! store, the engine, and the snapshot publisher, and is handed to
//! callers by constructor rather than looked up ambiently. Construction
//! is session init; dropping the service is teardown (subscribers then
//! observe the end of their stream).
//!
//! Commands and ticks are applied synchronously; after each one the
//! service republishes a snapshot so every subscriber sees the state
//! that resulted from it.

use crate::error::Result;
use crate::events::Event;
use crate::subscription::{SnapshotPublisher, SnapshotStream};
use crate::timer::{ConfigStore, TimerConfig, TimerEngine};

pub struct TimerService {
    store: ConfigStore,
    engine: TimerEngine,
    publisher: SnapshotPublisher,
}

impl TimerService {
    /// Start a session on the first stored preset.
    pub fn new(store: ConfigStore) -> Result<Self> {
        let config = store
            .list()?
            .into_iter()
            .next()
            .unwrap_or_else(TimerConfig::pomodoro);
        Ok(Self::with_engine(store, TimerEngine::new(config)))
    }

    /// Start a session on the named preset.
    pub fn with_config(store: ConfigStore, config_id: &str) -> Result<Self> {
        let config = store.get(config_id)?;
        Ok(Self::with_engine(store, TimerEngine::new(config)))
    }

    /// Resume a session from a previously captured engine.
    pub fn with_engine(store: ConfigStore, engine: TimerEngine) -> Self {
        Self {
            store,
            engine,
            publisher: SnapshotPublisher::default(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Open a snapshot stream for a frontend.
    pub fn subscribe(&self) -> SnapshotStream {
        self.publisher.subscribe()
    }

    // ── Preset operations ────────────────────────────────────────────

    /// Validate and persist a new preset.
    pub fn create_config(
        &self,
        name: &str,
        work_secs: u64,
        break_secs: u64,
        long_break_secs: u64,
        sessions_before_long_break: u32,
    ) -> Result<TimerConfig> {
        Ok(self.store.create(
            name,
            work_secs,
            break_secs,
            long_break_secs,
            sessions_before_long_break,
        )?)
    }

    /// All presets in creation order.
    pub fn list_configs(&self) -> Result<Vec<TimerConfig>> {
        Ok(self.store.list()?)
    }

    // ── Timer commands ───────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        let event = self.engine.start();
        self.publish();
        event
    }

    pub fn pause(&mut self) -> Option<Event> {
        let event = self.engine.pause();
        self.publish();
        event
    }

    pub fn reset(&mut self) -> Option<Event> {
        let event = self.engine.reset();
        self.publish();
        event
    }

    /// Switch the active preset by id. Unknown ids fail with `NotFound`
    /// and leave the runtime state untouched.
    pub fn switch_config(&mut self, config_id: &str) -> Result<Option<Event>> {
        let config = self.store.get(config_id)?;
        let event = self.engine.switch_config(config);
        self.publish();
        Ok(event)
    }

    /// Apply one elapsed second from the session's clock source.
    pub fn tick(&mut self) -> Option<Event> {
        let event = self.engine.tick();
        self.publish();
        event
    }

    fn publish(&self) {
        self.publisher.publish(self.engine.snapshot());
    }
}
