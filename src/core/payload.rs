//! # State Payload
//!
//! The unit handed to the editor at startup: where to save, what to edit,
//! and which fonts may be picked.
//!
//! ```json
//! {
//!   "configPath": "/home/me/.config/cli-timer/config.json",
//!   "config": { "font": "Big", "tickRateMs": 250 },
//!   "fonts": ["Standard", "Big", "Slant"]
//! }
//! ```
//!
//! Loading normalizes everything once, so a `StatePayload` is always valid:
//! non-empty `config_path`, non-empty `fonts`, and `config.font ∈ fonts`.

use log::{debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::config::{Config, DEFAULT_FONT, KeyBindings, RawConfig, normalize_config};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStatePayload {
    config_path: Option<String>,
    #[serde(default)]
    config: RawConfig,
    #[serde(default)]
    fonts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePayload {
    pub config_path: String,
    pub config: Config,
    pub fonts: Vec<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum PayloadError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    MissingConfigPath,
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadError::Io(e) => write!(f, "state I/O error: {e}"),
            PayloadError::Parse(e) => write!(f, "state parse error: {e}"),
            PayloadError::MissingConfigPath => write!(f, "configPath is missing in state payload"),
        }
    }
}

impl std::error::Error for PayloadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PayloadError::Io(e) => Some(e),
            PayloadError::Parse(e) => Some(e),
            PayloadError::MissingConfigPath => None,
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Read and normalize the payload at `path`.
pub fn load_payload(path: &Path) -> Result<StatePayload, PayloadError> {
    let contents = fs::read_to_string(path).map_err(PayloadError::Io)?;
    let payload = parse_payload(&contents, &KeyBindings::default())?;
    info!(
        "Loaded state from {} ({} fonts, config at {})",
        path.display(),
        payload.fonts.len(),
        payload.config_path
    );
    debug!("Config: {:?}", payload.config);
    Ok(payload)
}

/// Parse + normalize a payload from JSON text.
pub fn parse_payload(contents: &str, defaults: &KeyBindings) -> Result<StatePayload, PayloadError> {
    let raw: RawStatePayload = serde_json::from_str(contents).map_err(PayloadError::Parse)?;

    let config_path = match raw.config_path {
        Some(path) if !path.trim().is_empty() => path,
        _ => return Err(PayloadError::MissingConfigPath),
    };

    let fonts = if raw.fonts.is_empty() {
        vec![DEFAULT_FONT.to_string()]
    } else {
        raw.fonts
    };

    let mut config = normalize_config(&raw.config, defaults);
    if !fonts.contains(&config.font) {
        warn!(
            "Font {:?} is not available, falling back to {:?}",
            config.font, fonts[0]
        );
        config.font = fonts[0].clone();
    }

    Ok(StatePayload {
        config_path,
        config,
        fonts,
    })
}
