/// UI state persistence.
use crate::app::Mode;
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The slice of UI state worth keeping across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiState {
    /// Last selected calendar date, `dd.mm.yyyy`.
    pub selected_date: String,
    /// Last focused pane; state files from older versions fall back to
    /// the calendar.
    #[serde(default)]
    pub focused_pane: Mode,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            selected_date: chrono::Local::now().format("%d.%m.%Y").to_string(),
            focused_pane: Mode::Calendar,
        }
    }
}

impl UiState {
    /// Parse the stored date back into a calendar date.
    /// Returns `None` for a missing or malformed value; callers fall
    /// back to today.
    pub fn restore_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.selected_date, "%d.%m.%Y").ok()
    }
}

/// Application data directory.
/// All platforms: ~/.datebook
pub fn data_dir() -> PathBuf {
    let home_dir = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .expect("Failed to get home directory");
    PathBuf::from(home_dir).join(".datebook")
}

fn state_file_path() -> PathBuf {
    data_dir().join("state.json")
}

/// Extract persistable state from the app. Overlays are not
/// restorable focus targets, so they map back to the pane beneath.
pub fn extract_state(app: &crate::app::App) -> UiState {
    let focused_pane = match app.mode {
        Mode::Confirm => Mode::List,
        Mode::Help => app.saved_mode.unwrap_or(Mode::Calendar),
        mode => mode,
    };
    UiState {
        selected_date: app.calendar.date_key(),
        focused_pane,
    }
}

/// Save state to the state file.
pub fn save_state(state: &UiState) -> Result<()> {
    let state_path = state_file_path();

    if let Some(parent) = state_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(state_path, json)?;

    Ok(())
}

/// Load state from the state file, defaulting to today when absent.
pub fn load_state() -> Result<UiState> {
    let state_path = state_file_path();

    if !state_path.exists() {
        return Ok(UiState::default());
    }

    let content = std::fs::read_to_string(state_path)?;
    let state: UiState = serde_json::from_str(&content)?;

    Ok(state)
}
