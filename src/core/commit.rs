//! # Commit / Cancel
//!
//! How a session ends and what the surrounding process sees.
//!
//! ```text
//! Effect::Save ──► save_and_quit() ──► ConfigStore::save()
//!                                         ├── Ok  → quitting
//!                                         └── Err → quitting + error
//! Effect::Quit ──► (already cancelled + quitting)
//!
//! outcome(app):
//!   error present        → Failed   (exit 1)
//!   cancelled            → Cancelled (exit 2)
//!   otherwise            → Saved    (exit 0)
//! ```
//!
//! Writes are atomic: the config is written to a sibling `.tmp` file and
//! renamed over the target, so the file is either fully old or fully new.

use log::{info, warn};
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::action::{Action, Effect, update};
use crate::core::config::Config;
use crate::core::state::{App, SessionError};

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum SaveError {
    MissingPath,
    Serialize(serde_json::Error),
    Io(io::Error),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::MissingPath => write!(f, "config path is missing"),
            SaveError::Serialize(e) => write!(f, "failed to serialize config: {e}"),
            SaveError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::MissingPath => None,
            SaveError::Serialize(e) => Some(e),
            SaveError::Io(e) => Some(e),
        }
    }
}

// ============================================================================
// Store
// ============================================================================

/// Where a committed config goes.
pub trait ConfigStore {
    fn save(&self, path: &Path, config: &Config) -> Result<(), SaveError>;
}

/// Writes the config to the filesystem.
pub struct FileStore;

impl ConfigStore for FileStore {
    fn save(&self, path: &Path, config: &Config) -> Result<(), SaveError> {
        let text = render_config(config)?;
        atomic_write(path, &text).map_err(SaveError::Io)
    }
}

/// Two-space indented JSON with a trailing newline.
pub fn render_config(config: &Config) -> Result<String, SaveError> {
    let mut text = serde_json::to_string_pretty(config).map_err(SaveError::Serialize)?;
    text.push('\n');
    Ok(text)
}

/// Sibling scratch file: `config.json` → `config.json.tmp`.
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Atomically replace `path` with `contents` (via `.tmp` + rename).
fn atomic_write(path: &Path, contents: &str) -> io::Result<()> {
    let tmp_path = tmp_path_for(path);
    fs::write(&tmp_path, contents)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    Ok(())
}

// ============================================================================
// Protocol
// ============================================================================

/// Persist the session's config through `store`.
pub fn save(app: &App, store: &dyn ConfigStore) -> Result<(), SaveError> {
    let path = &app.payload.config_path;
    if path.trim().is_empty() {
        return Err(SaveError::MissingPath);
    }
    store.save(Path::new(path), &app.payload.config)
}

/// Save, then end the session. A failed save still ends it, with the error kept.
pub fn save_and_quit(app: &mut App, store: &dyn ConfigStore) {
    match save(app, store) {
        Ok(()) => {
            info!("Saved settings to {}", app.payload.config_path);
            app.error = None;
        }
        Err(e) => {
            warn!("Failed to save settings: {}", e);
            app.error = Some(SessionError::Save(e));
        }
    }
    app.quitting = true;
}

/// `update()` plus the I/O its effect asks for.
pub fn dispatch(app: &mut App, action: Action, store: &dyn ConfigStore) -> Effect {
    let effect = update(app, action);
    if effect == Effect::Save {
        save_and_quit(app, store);
    }
    effect
}

/// How a finished session ended, as seen by the calling process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Saved,
    Cancelled,
    Failed(String),
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Saved => 0,
            Outcome::Failed(_) => 1,
            Outcome::Cancelled => 2,
        }
    }
}

/// `None` while the session is still running.
pub fn outcome(app: &App) -> Option<Outcome> {
    if !app.quitting {
        return None;
    }
    Some(match (&app.error, app.cancelled) {
        (Some(e), _) => Outcome::Failed(e.to_string()),
        (None, true) => Outcome::Cancelled,
        (None, false) => Outcome::Saved,
    })
}
