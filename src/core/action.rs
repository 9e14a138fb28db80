//! # Actions
//!
//! Everything the operator can do becomes an `Action`.
//! Presses Enter? That's `Action::Enter`. Presses Ctrl+S? `Action::Ctrl('s')`.
//!
//! The `update()` function takes the session state and an action, mutates
//! the state, and returns an `Effect` telling the caller what I/O (if any)
//! to perform next. No I/O happens in here.
//!
//! ```text
//! App + Action  →  update()  →  App' + Effect
//! ```
//!
//! Actions are classified before dispatch. Several physical encodings map to
//! the same intent, and every screen treats them identically:
//!
//! | Intent  | Actions                                              |
//! |---------|------------------------------------------------------|
//! | confirm | `Enter`, `Ctrl('j')`, `Ctrl('m')`, `Char('\r')`, `Char('\n')` |
//! | back    | `Esc`, `Char('q')`                                   |
//! | quit    | `Char('q')`, `Ctrl('c')` (main screen only)          |
//! | save    | `Ctrl('s')` (main screen only)                       |

use log::{debug, info};

use crate::core::catalog::MenuId;
use crate::core::config::{
    MAX_TICK_RATE_MS, MIN_TICK_RATE_MS, normalize_completion_message,
};
use crate::core::state::{App, KeyTarget, Screen, SessionError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Enter,
    Esc,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Backspace,
    Delete,
    /// A printable (or raw control) character with no Ctrl modifier.
    Char(char),
    /// Ctrl + lowercase letter.
    Ctrl(char),
    /// Bracketed paste.
    Paste(String),
}

/// What the caller must do after `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Persist the current config, then end the session.
    Save,
    /// The session ended without saving.
    Quit,
}

pub fn is_confirm(action: &Action) -> bool {
    matches!(
        action,
        Action::Enter
            | Action::Ctrl('j')
            | Action::Ctrl('m')
            | Action::Char('\r')
            | Action::Char('\n')
    )
}

pub fn is_back(action: &Action) -> bool {
    matches!(action, Action::Esc | Action::Char('q'))
}

/// Hard-wired quit, independent of the configured exit key.
pub fn is_quit(action: &Action) -> bool {
    matches!(action, Action::Char('q') | Action::Ctrl('c'))
}

pub fn is_save(action: &Action) -> bool {
    matches!(action, Action::Ctrl('s'))
}

/// Apply one action to the session.
pub fn update(app: &mut App, action: Action) -> Effect {
    match app.screen {
        Screen::Main => update_main(app, action),
        Screen::FontPicker => update_font_picker(app, action),
        Screen::KeyPicker => update_key_picker(app, action),
        Screen::TickRateEditor => update_tick_rate_editor(app, action),
        Screen::MessageEditor => update_message_editor(app, action),
    }
}

fn update_main(app: &mut App, action: Action) -> Effect {
    if is_quit(&action) {
        app.cancel();
        return Effect::Quit;
    }
    if is_save(&action) {
        return Effect::Save;
    }
    if is_confirm(&action) {
        return apply_menu_action(app);
    }
    app.menu.handle_action(&action);
    Effect::None
}

/// Dispatch on the highlighted main-menu entry.
fn apply_menu_action(app: &mut App) -> Effect {
    let Some(id) = app.menu.selected_item().and_then(|entry| entry.menu_id()) else {
        return Effect::None;
    };
    app.error = None;
    debug!("Menu action: {:?}", id);

    let config = &mut app.payload.config;
    match id {
        MenuId::Font => {
            let font = config.font.clone();
            app.select_font_item(&font);
            app.switch_to(Screen::FontPicker);
        }
        MenuId::Center => {
            config.center_display = !config.center_display;
            app.refresh_menu();
        }
        MenuId::Header => {
            config.show_header = !config.show_header;
            app.refresh_menu();
        }
        MenuId::Controls => {
            config.show_controls = !config.show_controls;
            app.refresh_menu();
        }
        MenuId::Notify => {
            config.notify_on_complete = !config.notify_on_complete;
            app.refresh_menu();
        }
        MenuId::TickRate => {
            let current = config.tick_rate_ms.to_string();
            app.tick_input.set_buffer(&current);
            app.tick_input.focus();
            app.switch_to(Screen::TickRateEditor);
        }
        MenuId::Message => {
            let current = config.completion_message.clone();
            app.message_input.set_buffer(&current);
            app.message_input.focus();
            app.switch_to(Screen::MessageEditor);
        }
        MenuId::PauseKey => app.open_key_picker(KeyTarget::Pause),
        MenuId::PauseAltKey => app.open_key_picker(KeyTarget::PauseAlt),
        MenuId::RestartKey => app.open_key_picker(KeyTarget::Restart),
        MenuId::ExitKey => app.open_key_picker(KeyTarget::Exit),
        MenuId::ExitAltKey => app.open_key_picker(KeyTarget::ExitAlt),
        MenuId::Save => return Effect::Save,
        MenuId::Cancel => {
            app.cancel();
            return Effect::Quit;
        }
    }
    Effect::None
}

fn update_font_picker(app: &mut App, action: Action) -> Effect {
    if is_back(&action) {
        app.error = None;
        app.switch_to(Screen::Main);
        return Effect::None;
    }
    if is_confirm(&action) {
        if let Some(name) = app.font_list.selected_item().map(|e| e.value().to_string()) {
            info!("Font set to {}", name);
            app.payload.config.font = name;
            app.switch_to(Screen::Main);
            app.refresh_menu();
        }
        return Effect::None;
    }
    app.font_list.handle_action(&action);
    Effect::None
}

fn update_key_picker(app: &mut App, action: Action) -> Effect {
    if is_back(&action) {
        app.error = None;
        app.switch_to(Screen::Main);
        return Effect::None;
    }
    if is_confirm(&action) {
        if let Some(token) = app.key_list.selected_item().map(|e| e.value().to_string()) {
            if let Some(target) = app.key_target {
                info!("{} set to {}", target.field_name(), token);
            }
            app.set_token_for_target(app.key_target, token);
            app.switch_to(Screen::Main);
            app.refresh_menu();
        }
        return Effect::None;
    }
    app.key_list.handle_action(&action);
    Effect::None
}

fn update_tick_rate_editor(app: &mut App, action: Action) -> Effect {
    if is_back(&action) {
        app.error = None;
        app.tick_input.blur();
        app.switch_to(Screen::Main);
        return Effect::None;
    }
    if is_confirm(&action) {
        let Ok(value) = app.tick_input.buffer_value().trim().parse::<i64>() else {
            app.error = Some(SessionError::InvalidTickRate);
            return Effect::None;
        };
        if !(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&value) {
            app.error = Some(SessionError::TickRateOutOfRange {
                min: MIN_TICK_RATE_MS,
                max: MAX_TICK_RATE_MS,
            });
            return Effect::None;
        }
        info!("Tick rate set to {} ms", value);
        app.payload.config.tick_rate_ms = value;
        app.error = None;
        app.tick_input.blur();
        app.switch_to(Screen::Main);
        app.refresh_menu();
        return Effect::None;
    }
    app.tick_input.handle_action(&action);
    Effect::None
}

fn update_message_editor(app: &mut App, action: Action) -> Effect {
    if is_back(&action) {
        app.error = None;
        app.message_input.blur();
        app.switch_to(Screen::Main);
        return Effect::None;
    }
    if is_confirm(&action) {
        let message = normalize_completion_message(app.message_input.buffer_value());
        info!("Completion message updated ({} chars)", message.chars().count());
        app.payload.config.completion_message = message;
        app.error = None;
        app.message_input.blur();
        app.switch_to(Screen::Main);
        app.refresh_menu();
        return Effect::None;
    }
    app.message_input.handle_action(&action);
    Effect::None
}
