//! Content-view collaborators
//!
//! The frame shell is only chrome; the embedded analyzer view sits
//! behind the `ContentView` trait. `SessionView` is the default
//! implementation: it keeps the dock panel layout and language
//! selection, and persists them as a JSON session snapshot.

use crate::utils::error::{Result, SigviewError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Location of the bundled user guide
const USER_GUIDE_URL: &str = "https://sigview.io/docs/user-guide";

/// Contract between the frame shell and the embedded content window
pub trait ContentView {
    /// Restore docked sub-panels from the saved session
    fn restore_dock(&mut self);

    /// Switch the display language
    fn switch_language(&mut self, language: i32);

    /// Persist the session state
    fn save_session(&mut self) -> Result<()>;

    /// Open the external user guide
    fn open_document(&self) -> Result<()>;
}

/// One docked sub-panel of the analyzer view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DockPanel {
    pub name: String,
    pub visible: bool,
}

/// Persisted session state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub language: i32,
    pub docks: Vec<DockPanel>,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            language: 0,
            docks: ["protocol", "trigger", "measure", "search"]
                .iter()
                .map(|name| DockPanel {
                    name: name.to_string(),
                    visible: false,
                })
                .collect(),
        }
    }
}

/// Default content view backed by a JSON session snapshot
pub struct SessionView {
    snapshot: SessionSnapshot,
    path: Option<PathBuf>,
}

impl SessionView {
    /// Create a view persisting to the given snapshot path; `None`
    /// disables persistence (the view still tracks state in memory).
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            snapshot: SessionSnapshot::default(),
            path,
        }
    }

    /// The default snapshot location next to the config file
    pub fn default_session_path() -> Option<PathBuf> {
        if let Ok(dir) = std::env::var("SIGVIEW_CONFIG_DIR") {
            return Some(PathBuf::from(dir).join("session.json"));
        }

        dirs::config_dir().map(|p| p.join("sigview").join("session.json"))
    }

    pub fn language(&self) -> i32 {
        self.snapshot.language
    }

    pub fn docks(&self) -> &[DockPanel] {
        &self.snapshot.docks
    }

    /// Show or hide a dock panel by name
    pub fn set_dock_visible(&mut self, name: &str, visible: bool) {
        if let Some(panel) = self.snapshot.docks.iter_mut().find(|p| p.name == name) {
            panel.visible = visible;
        }
    }

    fn load_from(path: &Path) -> Result<SessionSnapshot> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SigviewError::Session(format!("Failed to read snapshot: {}", e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| SigviewError::Session(format!("Failed to parse snapshot: {}", e)))
    }
}

impl ContentView for SessionView {
    fn restore_dock(&mut self) {
        let Some(path) = self.path.clone() else {
            return;
        };

        if !path.exists() {
            log::debug!("No session snapshot at {}, using defaults", path.display());
            return;
        }

        match Self::load_from(&path) {
            Ok(snapshot) => {
                log::info!("Restored {} dock panels", snapshot.docks.len());
                self.snapshot = snapshot;
            }
            // A damaged snapshot is a first-run condition, not fatal
            Err(e) => log::warn!("Ignoring session snapshot: {}", e),
        }
    }

    fn switch_language(&mut self, language: i32) {
        log::info!("Switching language to code {}", language);
        self.snapshot.language = language;
    }

    fn save_session(&mut self) -> Result<()> {
        let Some(path) = self.path.clone() else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SigviewError::Session(format!("Failed to create session dir: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(&self.snapshot)
            .map_err(|e| SigviewError::Session(format!("Failed to serialize snapshot: {}", e)))?;

        std::fs::write(&path, json)
            .map_err(|e| SigviewError::Session(format!("Failed to write snapshot: {}", e)))?;

        log::debug!("Session saved to {}", path.display());
        Ok(())
    }

    fn open_document(&self) -> Result<()> {
        log::info!("Opening user guide: {}", USER_GUIDE_URL);

        #[cfg(target_os = "linux")]
        let opener = ("xdg-open", vec![USER_GUIDE_URL]);
        #[cfg(target_os = "macos")]
        let opener = ("open", vec![USER_GUIDE_URL]);
        #[cfg(target_os = "windows")]
        let opener = ("cmd", vec!["/C", "start", USER_GUIDE_URL]);

        std::process::Command::new(opener.0)
            .args(&opener.1)
            .spawn()
            .map_err(|e| SigviewError::Session(format!("Failed to open user guide: {}", e)))?;

        Ok(())
    }
}
