use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;

/// TUI-level input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Passed to the core state machine
    Action(Action),
    /// Terminal size changed; only needs a redraw
    Resize,
}

/// Poll for an event, blocking up to `timeout`
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(map_event(event::read()?))
}

fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event).map(TuiEvent::Action)
        }
        Event::Paste(data) => Some(TuiEvent::Action(Action::Paste(data))),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Translate a key press. Key releases map to nothing.
pub fn map_key(key_event: KeyEvent) -> Option<Action> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match key_event.code {
        KeyCode::Char(c) if ctrl => Some(Action::Ctrl(c.to_ascii_lowercase())),
        KeyCode::Char(c) => Some(Action::Char(c)),
        KeyCode::Enter => Some(Action::Enter),
        KeyCode::Esc => Some(Action::Esc),
        KeyCode::Up => Some(Action::Up),
        KeyCode::Down => Some(Action::Down),
        KeyCode::Left => Some(Action::Left),
        KeyCode::Right => Some(Action::Right),
        KeyCode::Home => Some(Action::Home),
        KeyCode::End => Some(Action::End),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Delete => Some(Action::Delete),
        _ => None,
    }
}
