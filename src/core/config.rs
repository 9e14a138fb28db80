//! # Configuration Model
//!
//! The timer configuration edited by this tool, plus the rules that turn a
//! sparse, possibly-invalid config into a well-formed one.
//!
//! Two shapes, same as the payload on disk:
//!
//! ```text
//! RawConfig (every field Option<T>, straight from JSON)
//!     │
//!     ▼  normalize_config(raw, &defaults)
//! Config (concrete values, every field within bounds)
//! ```
//!
//! Normalization is idempotent: running a normalized config back through
//! `normalize_config` yields the same config.

use serde::{Deserialize, Serialize};

// ============================================================================
// Defaults & Bounds
// ============================================================================

pub const DEFAULT_FONT: &str = "Standard";
pub const DEFAULT_TICK_RATE_MS: i64 = 100;
pub const MIN_TICK_RATE_MS: i64 = 50;
pub const MAX_TICK_RATE_MS: i64 = 1000;
pub const DEFAULT_COMPLETION_MESSAGE: &str = "Time is up!";
pub const MAX_COMPLETION_MESSAGE_CHARS: usize = 240;

/// Symbolic token for the space bar. Every other token is a single char.
pub const SPACE_TOKEN: &str = "space";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// The five configurable single-key bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyBindings {
    pub pause_key: String,
    pub pause_alt_key: String,
    pub restart_key: String,
    pub exit_key: String,
    pub exit_alt_key: String,
}

impl Default for KeyBindings {
    /// p / space / r / q / e
    fn default() -> Self {
        Self {
            pause_key: "p".to_string(),
            pause_alt_key: SPACE_TOKEN.to_string(),
            restart_key: "r".to_string(),
            exit_key: "q".to_string(),
            exit_alt_key: "e".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub font: String,
    pub center_display: bool,
    pub show_header: bool,
    pub show_controls: bool,
    pub tick_rate_ms: i64,
    pub completion_message: String,
    pub notify_on_complete: bool,
    pub keybindings: KeyBindings,
}

impl Default for Config {
    fn default() -> Self {
        normalize_config(&RawConfig::default(), &KeyBindings::default())
    }
}

// ============================================================================
// Sparse Config (all fields Option<T>, as read from the payload)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawKeyBindings {
    pub pause_key: Option<String>,
    pub pause_alt_key: Option<String>,
    pub restart_key: Option<String>,
    pub exit_key: Option<String>,
    pub exit_alt_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    pub font: Option<String>,
    pub center_display: Option<bool>,
    pub show_header: Option<bool>,
    pub show_controls: Option<bool>,
    pub tick_rate_ms: Option<i64>,
    pub completion_message: Option<String>,
    pub notify_on_complete: Option<bool>,
    #[serde(default)]
    pub keybindings: RawKeyBindings,
}

impl From<Config> for RawConfig {
    fn from(config: Config) -> Self {
        Self {
            font: Some(config.font),
            center_display: Some(config.center_display),
            show_header: Some(config.show_header),
            show_controls: Some(config.show_controls),
            tick_rate_ms: Some(config.tick_rate_ms),
            completion_message: Some(config.completion_message),
            notify_on_complete: Some(config.notify_on_complete),
            keybindings: RawKeyBindings {
                pause_key: Some(config.keybindings.pause_key),
                pause_alt_key: Some(config.keybindings.pause_alt_key),
                restart_key: Some(config.keybindings.restart_key),
                exit_key: Some(config.keybindings.exit_key),
                exit_alt_key: Some(config.keybindings.exit_alt_key),
            },
        }
    }
}

// ============================================================================
// Normalization
// ============================================================================

/// Clamp a tick interval into `[MIN_TICK_RATE_MS, MAX_TICK_RATE_MS]`.
pub fn sanitize_tick_rate(value: i64) -> i64 {
    value.clamp(MIN_TICK_RATE_MS, MAX_TICK_RATE_MS)
}

/// Strip CR, turn LF into spaces, cap at 240 chars.
pub fn normalize_completion_message(value: &str) -> String {
    value
        .chars()
        .filter(|&c| c != '\r')
        .map(|c| if c == '\n' { ' ' } else { c })
        .take(MAX_COMPLETION_MESSAGE_CHARS)
        .collect()
}

/// `space`, or exactly one printable ASCII character (33..=126).
pub fn valid_key_token(value: &str) -> bool {
    if value == SPACE_TOKEN {
        return true;
    }
    matches!(value.as_bytes(), [b] if (33..=126).contains(b))
}

/// Trim + lowercase `value`; return `fallback` if the result is not a valid token.
pub fn normalize_key_token(value: &str, fallback: &str) -> String {
    let normalized = value.trim().to_lowercase();
    if valid_key_token(&normalized) {
        normalized
    } else {
        fallback.to_string()
    }
}

fn normalize_key_field(value: Option<&str>, fallback: &str) -> String {
    normalize_key_token(value.unwrap_or_default(), fallback)
}

pub fn normalize_keybindings(raw: &RawKeyBindings, defaults: &KeyBindings) -> KeyBindings {
    KeyBindings {
        pause_key: normalize_key_field(raw.pause_key.as_deref(), &defaults.pause_key),
        pause_alt_key: normalize_key_field(raw.pause_alt_key.as_deref(), &defaults.pause_alt_key),
        restart_key: normalize_key_field(raw.restart_key.as_deref(), &defaults.restart_key),
        exit_key: normalize_key_field(raw.exit_key.as_deref(), &defaults.exit_key),
        exit_alt_key: normalize_key_field(raw.exit_alt_key.as_deref(), &defaults.exit_alt_key),
    }
}

/// Resolve a sparse config: defaults → raw values, each sanitized per field.
///
/// `defaults` supplies the fallback key bindings, so callers can swap in an
/// alternate table without touching global state.
pub fn normalize_config(raw: &RawConfig, defaults: &KeyBindings) -> Config {
    let font = raw
        .font
        .as_deref()
        .filter(|font| !font.trim().is_empty())
        .unwrap_or(DEFAULT_FONT)
        .to_string();

    // Zero means "unset", same as absent
    let tick_rate_ms = match raw.tick_rate_ms {
        Some(value) if value != 0 => sanitize_tick_rate(value),
        _ => DEFAULT_TICK_RATE_MS,
    };

    let completion_message = raw
        .completion_message
        .as_deref()
        .map(normalize_completion_message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| DEFAULT_COMPLETION_MESSAGE.to_string());

    Config {
        font,
        center_display: raw.center_display.unwrap_or(true),
        show_header: raw.show_header.unwrap_or(true),
        show_controls: raw.show_controls.unwrap_or(true),
        tick_rate_ms,
        completion_message,
        notify_on_complete: raw.notify_on_complete.unwrap_or(true),
        keybindings: normalize_keybindings(&raw.keybindings, defaults),
    }
}
