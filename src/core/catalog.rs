//! # Selection Catalogs
//!
//! Everything a list screen shows is derived here from the current config.
//! Nothing is cached: callers rebuild a catalog after every mutation and hand
//! it to the list widget.
//!
//! All three lists share one entry type, `ListEntry`, tagged by `EntryKind`,
//! so there is a single rendering and filtering path for every screen.

use std::borrow::Cow;

use crate::core::config::{Config, SPACE_TOKEN};

/// Menu messages are summarized to this many chars in the main menu.
pub const MESSAGE_SUMMARY_CHARS: usize = 44;

const PICK_HINT: &str = "Press Enter to select";

/// Common accessors for anything shown in a list widget.
pub trait ListItem {
    fn title(&self) -> Cow<'_, str>;
    fn description(&self) -> Cow<'_, str>;
    /// Text matched against the incremental filter.
    fn filter_value(&self) -> Cow<'_, str>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Menu,
    Font,
    Key,
}

/// Identity of a main-menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuId {
    Font,
    Center,
    Header,
    Controls,
    TickRate,
    Message,
    Notify,
    PauseKey,
    PauseAltKey,
    RestartKey,
    ExitKey,
    ExitAltKey,
    Save,
    Cancel,
}

impl MenuId {
    /// Fixed main-menu order.
    pub const ALL: [MenuId; 14] = [
        MenuId::Font,
        MenuId::Center,
        MenuId::Header,
        MenuId::Controls,
        MenuId::TickRate,
        MenuId::Message,
        MenuId::Notify,
        MenuId::PauseKey,
        MenuId::PauseAltKey,
        MenuId::RestartKey,
        MenuId::ExitKey,
        MenuId::ExitAltKey,
        MenuId::Save,
        MenuId::Cancel,
    ];

    pub const fn title(self) -> &'static str {
        match self {
            MenuId::Font => "Font",
            MenuId::Center => "Center display",
            MenuId::Header => "Show header",
            MenuId::Controls => "Show controls",
            MenuId::TickRate => "Tick rate",
            MenuId::Message => "Completion message",
            MenuId::Notify => "System notification",
            MenuId::PauseKey => "Pause key",
            MenuId::PauseAltKey => "Pause alt key",
            MenuId::RestartKey => "Restart key",
            MenuId::ExitKey => "Exit key",
            MenuId::ExitAltKey => "Exit alt key",
            MenuId::Save => "Save and exit",
            MenuId::Cancel => "Cancel",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    Menu { id: MenuId, description: String },
    Font { name: String },
    Key { token: String },
}

impl ListEntry {
    pub fn kind(&self) -> EntryKind {
        match self {
            ListEntry::Menu { .. } => EntryKind::Menu,
            ListEntry::Font { .. } => EntryKind::Font,
            ListEntry::Key { .. } => EntryKind::Key,
        }
    }

    pub fn menu_id(&self) -> Option<MenuId> {
        match self {
            ListEntry::Menu { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// The value written into the config when this entry is picked.
    pub fn value(&self) -> &str {
        match self {
            ListEntry::Menu { id, .. } => id.title(),
            ListEntry::Font { name } => name,
            ListEntry::Key { token } => token,
        }
    }
}

impl ListItem for ListEntry {
    fn title(&self) -> Cow<'_, str> {
        match self {
            ListEntry::Menu { id, .. } => Cow::Borrowed(id.title()),
            ListEntry::Font { name } => Cow::Borrowed(name.as_str()),
            ListEntry::Key { token } => Cow::Borrowed(key_token_label(token)),
        }
    }

    fn description(&self) -> Cow<'_, str> {
        match self {
            ListEntry::Menu { description, .. } => Cow::Borrowed(description.as_str()),
            ListEntry::Font { .. } | ListEntry::Key { .. } => Cow::Borrowed(PICK_HINT),
        }
    }

    fn filter_value(&self) -> Cow<'_, str> {
        match self {
            ListEntry::Menu { id, description } => {
                Cow::Owned(format!("{} {}", id.title(), description))
            }
            ListEntry::Font { name } => Cow::Borrowed(name.as_str()),
            ListEntry::Key { token } => {
                Cow::Owned(format!("{} {}", token, key_token_label(token)))
            }
        }
    }
}

// ============================================================================
// Labels
// ============================================================================

pub fn bool_text(value: bool) -> &'static str {
    if value { "On" } else { "Off" }
}

pub fn key_token_label(token: &str) -> &str {
    if token == SPACE_TOKEN { "Spacebar" } else { token }
}

/// Single-line summary of the completion message for the menu.
pub fn summarize_message(text: &str) -> String {
    if text.trim().is_empty() {
        return "(empty)".to_string();
    }
    let compact: String = text
        .chars()
        .filter(|&c| c != '\r')
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    if compact.chars().count() > MESSAGE_SUMMARY_CHARS {
        let head: String = compact.chars().take(MESSAGE_SUMMARY_CHARS - 3).collect();
        format!("{head}...")
    } else {
        compact
    }
}

// ============================================================================
// Catalogs
// ============================================================================

/// Every token a key binding may be assigned to, in picker order.
pub fn supported_key_tokens() -> Vec<String> {
    const SYMBOLS: [char; 11] = ['`', '-', '=', '[', ']', '\\', ';', '\'', ',', '.', '/'];

    std::iter::once(SPACE_TOKEN.to_string())
        .chain(('a'..='z').map(String::from))
        .chain(('0'..='9').map(String::from))
        .chain(SYMBOLS.iter().map(|c| c.to_string()))
        .collect()
}

fn menu_description(id: MenuId, config: &Config) -> String {
    let keys = &config.keybindings;
    match id {
        MenuId::Font => config.font.clone(),
        MenuId::Center => bool_text(config.center_display).to_string(),
        MenuId::Header => bool_text(config.show_header).to_string(),
        MenuId::Controls => bool_text(config.show_controls).to_string(),
        MenuId::TickRate => format!("{} ms", config.tick_rate_ms),
        MenuId::Message => summarize_message(&config.completion_message),
        MenuId::Notify => bool_text(config.notify_on_complete).to_string(),
        MenuId::PauseKey => key_token_label(&keys.pause_key).to_string(),
        MenuId::PauseAltKey => key_token_label(&keys.pause_alt_key).to_string(),
        MenuId::RestartKey => key_token_label(&keys.restart_key).to_string(),
        MenuId::ExitKey => key_token_label(&keys.exit_key).to_string(),
        MenuId::ExitAltKey => key_token_label(&keys.exit_alt_key).to_string(),
        MenuId::Save => "Write settings and close".to_string(),
        MenuId::Cancel => "Discard changes".to_string(),
    }
}

pub fn build_menu_entries(config: &Config) -> Vec<ListEntry> {
    MenuId::ALL
        .iter()
        .map(|&id| ListEntry::Menu {
            id,
            description: menu_description(id, config),
        })
        .collect()
}

pub fn build_font_entries(fonts: &[String]) -> Vec<ListEntry> {
    fonts
        .iter()
        .map(|name| ListEntry::Font { name: name.clone() })
        .collect()
}

pub fn build_key_entries() -> Vec<ListEntry> {
    supported_key_tokens()
        .into_iter()
        .map(|token| ListEntry::Key { token })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::valid_key_token;

    #[test]
    fn test_menu_has_fixed_order_and_live_labels() {
        let mut config = Config::default();
        config.show_header = false;
        config.tick_rate_ms = 250;
        let entries = build_menu_entries(&config);

        assert_eq!(entries.len(), 14);
        assert_eq!(entries[0].menu_id(), Some(MenuId::Font));
        assert_eq!(entries[13].menu_id(), Some(MenuId::Cancel));
        assert_eq!(entries[0].description(), "Standard");
        assert_eq!(entries[1].description(), "On");
        assert_eq!(entries[2].description(), "Off");
        assert_eq!(entries[4].description(), "250 ms");
        assert_eq!(entries[8].title(), "Pause alt key");
        assert_eq!(entries[8].description(), "Spacebar");
        assert_eq!(entries[12].title(), "Save and exit");
    }

    #[test]
    fn test_summarize_message() {
        assert_eq!(summarize_message("   "), "(empty)");
        assert_eq!(summarize_message("a\r\nb"), "a b");
        let exact = "y".repeat(44);
        assert_eq!(summarize_message(&exact), exact);
        let long = "z".repeat(45);
        let summary = summarize_message(&long);
        assert_eq!(summary, format!("{}...", "z".repeat(41)));
        assert_eq!(summary.chars().count(), 44);
    }

    #[test]
    fn test_key_token_catalog() {
        let tokens = supported_key_tokens();
        assert_eq!(tokens.len(), 1 + 26 + 10 + 11);
        assert_eq!(tokens[0], "space");
        assert_eq!(tokens[1], "a");
        assert_eq!(tokens[27], "0");
        assert_eq!(tokens.last().map(String::as_str), Some("/"));
        assert!(tokens.iter().all(|t| valid_key_token(t)));
    }

    #[test]
    fn test_key_entry_accessors() {
        let entry = ListEntry::Key {
            token: "space".to_string(),
        };
        assert_eq!(entry.kind(), EntryKind::Key);
        assert_eq!(entry.title(), "Spacebar");
        assert_eq!(entry.filter_value(), "space Spacebar");
        assert_eq!(entry.value(), "space");
    }

    #[test]
    fn test_font_entries_keep_payload_order() {
        let fonts = vec!["Standard".to_string(), "Big".to_string(), "Slant".to_string()];
        let entries = build_font_entries(&fonts);
        let names: Vec<&str> = entries.iter().map(ListEntry::value).collect();
        assert_eq!(names, ["Standard", "Big", "Slant"]);
        assert!(entries.iter().all(|e| e.kind() == EntryKind::Font));
        assert_eq!(entries[1].description(), "Press Enter to select");
    }
}
