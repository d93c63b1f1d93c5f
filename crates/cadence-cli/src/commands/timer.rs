use std::path::PathBuf;

use clap::Subcommand;

use cadence_core::storage::data_dir;
use cadence_core::{Config, ConfigStore, TimerConfig, TimerEngine, TimerService};

const ENGINE_FILE: &str = "runtime.json";

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start (or resume) the countdown
    Start,
    /// Pause the countdown
    Pause,
    /// Reset the cycle to the first work phase
    Reset,
    /// Switch the active preset (implies a reset)
    Switch {
        /// Preset id
        id: String,
    },
    /// Print the current timer state as JSON
    Status,
    /// Drive the one-second clock and stream snapshots as JSON lines
    Watch {
        /// Stop after this many seconds (default: run until interrupted)
        #[arg(long)]
        seconds: Option<u64>,
    },
}

fn engine_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    Ok(data_dir()?.join(ENGINE_FILE))
}

/// Restore the persisted engine, or build a fresh one from the active
/// (or first) preset.
fn load_engine(store: &ConfigStore) -> TimerEngine {
    if let Ok(path) = engine_path() {
        if let Ok(json) = std::fs::read_to_string(path) {
            if let Ok(engine) = serde_json::from_str::<TimerEngine>(&json) {
                return engine;
            }
        }
    }

    let app = Config::load_or_default();
    let config = app
        .active_preset
        .as_deref()
        .and_then(|id| store.get(id).ok())
        .or_else(|| store.list().ok().and_then(|presets| presets.into_iter().next()))
        .unwrap_or_else(TimerConfig::pomodoro);
    TimerEngine::new(config)
}

fn save_engine(engine: &TimerEngine) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(engine)?;
    std::fs::write(engine_path()?, json)?;
    Ok(())
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = ConfigStore::open()?;
    let engine = load_engine(&store);
    let mut service = TimerService::with_engine(store, engine);

    match action {
        TimerAction::Start => {
            if let Some(event) = service.start() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                // Already running; show the current state instead.
                println!("{}", serde_json::to_string_pretty(&service.engine().snapshot())?);
            }
        }
        TimerAction::Pause => {
            if let Some(event) = service.pause() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&service.engine().snapshot())?);
            }
        }
        TimerAction::Reset => {
            if let Some(event) = service.reset() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
        TimerAction::Switch { id } => {
            let event = service.switch_config(&id)?;
            if let Some(event) = event {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
            let mut app = Config::load_or_default();
            app.active_preset = Some(id);
            app.save()?;
        }
        TimerAction::Status => {
            let snapshot = service.engine().snapshot();
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        TimerAction::Watch { seconds } => {
            watch(&mut service, seconds)?;
        }
    }

    save_engine(service.engine())?;
    Ok(())
}

/// Feed the engine one tick per second and print every published
/// snapshot (and completion event) as a JSON line.
fn watch(service: &mut TimerService, seconds: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    runtime.block_on(async {
        let mut stream = service.subscribe();
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
        interval.tick().await; // First tick fires immediately; skip it.

        let mut elapsed = 0u64;
        loop {
            interval.tick().await;
            let completed = service.tick();

            if let Some(snapshot) = stream.next().await {
                println!("{}", serde_json::to_string(&snapshot)?);
            }
            if let Some(event) = completed {
                println!("{}", serde_json::to_string(&event)?);
            }

            elapsed += 1;
            if let Some(limit) = seconds {
                if elapsed >= limit {
                    break;
                }
            }
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    })
}
