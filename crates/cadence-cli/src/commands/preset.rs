use clap::Subcommand;

use cadence_core::{Config, ConfigStore};

#[derive(Subcommand)]
pub enum PresetAction {
    /// Create a new timer preset
    Create {
        /// Preset name
        name: String,
        /// Work phase length in minutes
        #[arg(long, value_name = "MINUTES")]
        work: Option<u32>,
        /// Short break length in minutes
        #[arg(long = "break", value_name = "MINUTES")]
        break_minutes: Option<u32>,
        /// Long break length in minutes
        #[arg(long, value_name = "MINUTES")]
        long_break: Option<u32>,
        /// Work sessions before a long break
        #[arg(long)]
        sessions: Option<u32>,
    },
    /// List presets
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one preset as JSON
    Show {
        /// Preset id
        id: String,
    },
}

pub fn run(action: PresetAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = ConfigStore::open()?;

    match action {
        PresetAction::Create {
            name,
            work,
            break_minutes,
            long_break,
            sessions,
        } => {
            let defaults = Config::load_or_default().defaults;
            let work = work.unwrap_or(defaults.work_minutes);
            let break_minutes = break_minutes.unwrap_or(defaults.break_minutes);
            let long_break = long_break.unwrap_or(defaults.long_break_minutes);
            let sessions = sessions.unwrap_or(defaults.sessions_before_long_break);

            let preset = store.create(
                &name,
                u64::from(work) * 60,
                u64::from(break_minutes) * 60,
                u64::from(long_break) * 60,
                sessions,
            )?;
            println!("Preset created: {} ({})", preset.name, preset.id);
        }
        PresetAction::List { json } => {
            let presets = store.list()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&presets)?);
            } else {
                for preset in &presets {
                    println!(
                        "{}  {}  {}m work / {}m break / {}m long break, long break every {}",
                        preset.id,
                        preset.name,
                        preset.work_secs / 60,
                        preset.break_secs / 60,
                        preset.long_break_secs / 60,
                        preset.sessions_before_long_break,
                    );
                }
            }
        }
        PresetAction::Show { id } => {
            let preset = store.get(&id)?;
            println!("{}", serde_json::to_string_pretty(&preset)?);
        }
    }
    Ok(())
}
