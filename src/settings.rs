use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_data_dir() -> PathBuf {
    dirs_next::data_dir()
        .map(|dir| dir.join("cozy_board"))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_grid_columns() -> u32 {
    4
}

fn default_placement_rows() -> u32 {
    10
}

fn default_pomodoro_tick_ms() -> u64 {
    1000
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Write logs to this file instead of stdout.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Directory the dashboard document is stored in.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Columns of the canonical grid new widgets are placed on.
    #[serde(default = "default_grid_columns")]
    pub grid_columns: u32,
    /// Rows scanned for a free cell before stacking below everything.
    #[serde(default = "default_placement_rows")]
    pub placement_rows: u32,
    #[serde(default = "default_pomodoro_tick_ms")]
    pub pomodoro_tick_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            data_dir: default_data_dir(),
            grid_columns: default_grid_columns(),
            placement_rows: default_placement_rows(),
            pomodoro_tick_ms: default_pomodoro_tick_ms(),
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing or empty file yields defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
