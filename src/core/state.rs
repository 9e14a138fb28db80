//! # Session State
//!
//! Everything the editor knows while it runs. Created once from a loaded
//! payload, mutated only through `update(app, action)` in action.rs, and
//! dropped at exit. Only `payload.config` is ever written back to disk.
//!
//! ```text
//! App
//! ├── payload: StatePayload          // config path, config, fonts
//! ├── defaults: KeyBindings          // fallback key table
//! ├── screen: Screen                 // which screen handles input
//! ├── menu / font_list / key_list    // Box<dyn ListWidget>
//! ├── tick_input / message_input     // Box<dyn TextWidget>
//! ├── key_target: Option<KeyTarget>  // binding being assigned
//! ├── error: Option<SessionError>    // shown inline, cleared on success
//! ├── quitting: bool                 // session over
//! └── cancelled: bool                // ...without saving
//! ```

use std::fmt;

use log::debug;

use crate::core::catalog::{build_font_entries, build_key_entries, build_menu_entries};
use crate::core::commit::SaveError;
use crate::core::config::{KeyBindings, MAX_COMPLETION_MESSAGE_CHARS};
use crate::core::payload::StatePayload;
use crate::core::widget::{ListWidget, SelectList, TextField, TextWidget};

/// Widest tick value ("1000").
pub const TICK_INPUT_CHARS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    FontPicker,
    KeyPicker,
    TickRateEditor,
    MessageEditor,
}

/// Which key binding the key picker writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTarget {
    Pause,
    PauseAlt,
    Restart,
    Exit,
    ExitAlt,
}

impl KeyTarget {
    pub const fn picker_title(self) -> &'static str {
        match self {
            KeyTarget::Pause => "Select Pause Key",
            KeyTarget::PauseAlt => "Select Pause Alt Key",
            KeyTarget::Restart => "Select Restart Key",
            KeyTarget::Exit => "Select Exit Key",
            KeyTarget::ExitAlt => "Select Exit Alt Key",
        }
    }

    /// JSON field name, for logs.
    pub const fn field_name(self) -> &'static str {
        match self {
            KeyTarget::Pause => "pauseKey",
            KeyTarget::PauseAlt => "pauseAltKey",
            KeyTarget::Restart => "restartKey",
            KeyTarget::Exit => "exitKey",
            KeyTarget::ExitAlt => "exitAltKey",
        }
    }

    fn slot(self, keys: &mut KeyBindings) -> &mut String {
        match self {
            KeyTarget::Pause => &mut keys.pause_key,
            KeyTarget::PauseAlt => &mut keys.pause_alt_key,
            KeyTarget::Restart => &mut keys.restart_key,
            KeyTarget::Exit => &mut keys.exit_key,
            KeyTarget::ExitAlt => &mut keys.exit_alt_key,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Errors that surface inside a running session.
#[derive(Debug)]
pub enum SessionError {
    InvalidTickRate,
    TickRateOutOfRange { min: i64, max: i64 },
    Save(SaveError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidTickRate => write!(f, "tick rate must be an integer"),
            SessionError::TickRateOutOfRange { min, max } => {
                write!(f, "tick rate must be between {min} and {max}")
            }
            SessionError::Save(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {}

// ============================================================================
// Widgets
// ============================================================================

/// The five widgets a session drives. Swap any of them out with
/// `App::with_widgets`.
pub struct Widgets {
    pub menu: Box<dyn ListWidget>,
    pub font_list: Box<dyn ListWidget>,
    pub key_list: Box<dyn ListWidget>,
    pub tick_input: Box<dyn TextWidget>,
    pub message_input: Box<dyn TextWidget>,
}

impl Widgets {
    pub fn for_payload(payload: &StatePayload) -> Self {
        let mut tick_input = TextField::new("Tick rate (ms): ", TICK_INPUT_CHARS);
        tick_input.set_buffer(&payload.config.tick_rate_ms.to_string());
        let mut message_input =
            TextField::new("Completion message: ", MAX_COMPLETION_MESSAGE_CHARS);
        message_input.set_buffer(&payload.config.completion_message);

        Self {
            menu: Box::new(SelectList::new(
                "Timer Settings",
                build_menu_entries(&payload.config),
            )),
            font_list: Box::new(
                SelectList::new("Select Font", build_font_entries(&payload.fonts))
                    .with_filtering(),
            ),
            key_list: Box::new(
                SelectList::new("Select Key", build_key_entries()).with_filtering(),
            ),
            tick_input: Box::new(tick_input),
            message_input: Box::new(message_input),
        }
    }
}

// ============================================================================
// App
// ============================================================================

pub struct App {
    pub payload: StatePayload,
    pub defaults: KeyBindings,
    pub screen: Screen,
    pub menu: Box<dyn ListWidget>,
    pub font_list: Box<dyn ListWidget>,
    pub key_list: Box<dyn ListWidget>,
    pub tick_input: Box<dyn TextWidget>,
    pub message_input: Box<dyn TextWidget>,
    pub key_target: Option<KeyTarget>,
    pub error: Option<SessionError>,
    pub quitting: bool,
    pub cancelled: bool,
}

impl App {
    pub fn new(payload: StatePayload) -> Self {
        let widgets = Widgets::for_payload(&payload);
        Self::with_widgets(payload, widgets, KeyBindings::default())
    }

    pub fn with_widgets(payload: StatePayload, widgets: Widgets, defaults: KeyBindings) -> Self {
        Self {
            payload,
            defaults,
            screen: Screen::Main,
            menu: widgets.menu,
            font_list: widgets.font_list,
            key_list: widgets.key_list,
            tick_input: widgets.tick_input,
            message_input: widgets.message_input,
            key_target: None,
            error: None,
            quitting: false,
            cancelled: false,
        }
    }

    pub fn switch_to(&mut self, screen: Screen) {
        if self.screen != screen {
            debug!("Screen {:?} -> {:?}", self.screen, screen);
        }
        self.screen = screen;
    }

    /// Rebuild the main-menu labels from the current config.
    pub fn refresh_menu(&mut self) {
        self.menu.set_items(build_menu_entries(&self.payload.config));
    }

    /// End the session without saving.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.quitting = true;
    }

    /// Highlight `font`, or the first font when it is not listed.
    pub fn select_font_item(&mut self, font: &str) {
        let index = self.font_list.items().iter().position(|e| e.value() == font);
        self.font_list.select(index.unwrap_or(0));
    }

    /// Highlight `token`, or the first key when the catalog lacks it (`~`, `!`, ...).
    pub fn select_key_item(&mut self, token: &str) {
        let index = self.key_list.items().iter().position(|e| e.value() == token);
        self.key_list.select(index.unwrap_or(0));
    }

    /// Current token for `target`; with no target, the default pause key.
    pub fn token_for_target(&self, target: Option<KeyTarget>) -> &str {
        let keys = &self.payload.config.keybindings;
        match target {
            Some(KeyTarget::Pause) => &keys.pause_key,
            Some(KeyTarget::PauseAlt) => &keys.pause_alt_key,
            Some(KeyTarget::Restart) => &keys.restart_key,
            Some(KeyTarget::Exit) => &keys.exit_key,
            Some(KeyTarget::ExitAlt) => &keys.exit_alt_key,
            None => &self.defaults.pause_key,
        }
    }

    /// Write `token` into `target`; a missing target leaves the config alone.
    pub fn set_token_for_target(&mut self, target: Option<KeyTarget>, token: String) {
        if let Some(target) = target {
            *target.slot(&mut self.payload.config.keybindings) = token;
        }
    }

    pub fn open_key_picker(&mut self, target: KeyTarget) {
        self.key_target = Some(target);
        self.key_list.set_title(target.picker_title());
        let token = self.token_for_target(Some(target)).to_string();
        self.select_key_item(&token);
        self.switch_to(Screen::KeyPicker);
    }
}
