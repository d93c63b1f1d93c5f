//! # Cadence Core Library
//!
//! This library provides the core business logic for the Cadence focus
//! timer. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any GUI being a thin
//! layer over the same core library.
//!
//! ## Architecture
//!
//! - **Countdown Engine**: A tick-driven state machine that requires the
//!   caller to invoke `tick()` once per elapsed second
//! - **Cycle Controller**: Pure work/break/long-break transition logic
//! - **Preset Store**: TOML-based storage for timer definitions
//! - **Subscription**: Broadcast snapshot stream for frontends
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: Core countdown state machine
//! - [`ConfigStore`]: Timer preset persistence
//! - [`TimerService`]: Per-session root owning store, engine, publisher
//! - [`SnapshotStream`]: Subscriber view of the runtime state sequence

pub mod error;
pub mod events;
pub mod service;
pub mod storage;
pub mod subscription;
pub mod timer;

pub use error::{ConfigError, CoreError, Result, StoreError, ValidationError};
pub use events::Event;
pub use service::TimerService;
pub use storage::Config;
pub use subscription::{SnapshotPublisher, SnapshotStream};
pub use timer::{ConfigStore, Phase, TimerConfig, TimerEngine, TimerSnapshot};
