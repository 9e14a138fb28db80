//! # Widget Capabilities
//!
//! The state machine owns its list and text-entry widgets but only talks to
//! them through these two traits. It never looks at cursor or filter state
//! directly, so any implementation can be injected (the TUI uses the
//! defaults below; tests can use stubs).
//!
//! ```text
//! ListWidget                      TextWidget
//! ├── set_items / items           ├── set_buffer / buffer_value
//! ├── select / index              ├── focus / blur
//! ├── selected_item               ├── cursor
//! └── handle_action               └── handle_action
//! ```

use crate::core::action::Action;
use crate::core::catalog::{ListEntry, ListItem};

/// Rows moved by PageUp / PageDown.
pub const PAGE_SIZE: usize = 10;

pub trait ListWidget {
    fn title(&self) -> &str;
    fn set_title(&mut self, title: &str);

    /// Replace the entries, keeping the cursor where it was when possible.
    fn set_items(&mut self, items: Vec<ListEntry>);
    fn items(&self) -> &[ListEntry];

    /// Highlight `items()[index]`, clearing any filter that would hide it.
    fn select(&mut self, index: usize);
    /// Index into `items()` of the highlighted entry.
    fn index(&self) -> Option<usize>;

    fn selected_item(&self) -> Option<&ListEntry> {
        self.index().and_then(|index| self.items().get(index))
    }

    /// Indices into `items()` that pass the current filter, in order.
    fn visible(&self) -> Vec<usize>;
    /// Current filter text, if one is being typed or applied.
    fn filter(&self) -> Option<&str>;

    /// Cursor movement and filter editing. Confirm/back never reach here.
    fn handle_action(&mut self, action: &Action);
}

pub trait TextWidget {
    fn prompt(&self) -> &str;

    /// Replace the buffer (truncated to the char limit) and move the cursor to the end.
    fn set_buffer(&mut self, text: &str);
    fn buffer_value(&self) -> &str;

    /// Cursor position in chars.
    fn cursor(&self) -> usize;

    fn focus(&mut self);
    fn blur(&mut self);
    fn is_focused(&self) -> bool;

    fn handle_action(&mut self, action: &Action);
}

// ============================================================================
// SelectList
// ============================================================================

/// Cursor + optional incremental filter over a list of entries.
pub struct SelectList {
    title: String,
    items: Vec<ListEntry>,
    /// Position within `visible()`, not within `items`
    cursor: usize,
    filtering_enabled: bool,
    /// True while the operator is typing a filter
    editing_filter: bool,
    filter: String,
}

impl SelectList {
    pub fn new(title: &str, items: Vec<ListEntry>) -> Self {
        Self {
            title: title.to_string(),
            items,
            cursor: 0,
            filtering_enabled: false,
            editing_filter: false,
            filter: String::new(),
        }
    }

    pub fn with_filtering(mut self) -> Self {
        self.filtering_enabled = true;
        self
    }

    pub fn is_editing_filter(&self) -> bool {
        self.editing_filter
    }

    fn matches(&self, entry: &ListEntry) -> bool {
        self.filter.is_empty()
            || entry
                .filter_value()
                .to_lowercase()
                .contains(&self.filter.to_lowercase())
    }

    fn visible_len(&self) -> usize {
        self.items.iter().filter(|entry| self.matches(entry)).count()
    }

    fn move_by(&mut self, delta: isize) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    fn move_to_end(&mut self) {
        self.cursor = self.visible_len().saturating_sub(1);
    }

    fn handle_filter_input(&mut self, action: &Action) -> bool {
        match action {
            Action::Char(c) if !c.is_control() => {
                self.filter.push(*c);
                self.cursor = 0;
                true
            }
            Action::Paste(text) => {
                self.filter.extend(text.chars().filter(|c| !c.is_control()));
                self.cursor = 0;
                true
            }
            Action::Backspace => {
                if self.filter.pop().is_none() {
                    self.editing_filter = false;
                }
                self.cursor = 0;
                true
            }
            _ => false,
        }
    }
}

impl ListWidget for SelectList {
    fn title(&self) -> &str {
        &self.title
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_items(&mut self, items: Vec<ListEntry>) {
        self.items = items;
        let len = self.visible_len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    fn items(&self) -> &[ListEntry] {
        &self.items
    }

    fn select(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.filter.clear();
        self.editing_filter = false;
        self.cursor = index;
    }

    fn index(&self) -> Option<usize> {
        self.visible().get(self.cursor).copied()
    }

    fn visible(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, entry)| self.matches(entry))
            .map(|(index, _)| index)
            .collect()
    }

    fn filter(&self) -> Option<&str> {
        (self.editing_filter || !self.filter.is_empty()).then_some(self.filter.as_str())
    }

    fn handle_action(&mut self, action: &Action) {
        if self.editing_filter && self.handle_filter_input(action) {
            return;
        }
        match action {
            Action::Up | Action::Char('k') => self.move_by(-1),
            Action::Down | Action::Char('j') => self.move_by(1),
            Action::PageUp => self.move_by(-(PAGE_SIZE as isize)),
            Action::PageDown => self.move_by(PAGE_SIZE as isize),
            Action::Home | Action::Char('g') => self.cursor = 0,
            Action::End | Action::Char('G') => self.move_to_end(),
            Action::Char('/') if self.filtering_enabled => {
                self.editing_filter = true;
                self.cursor = 0;
            }
            _ => {}
        }
    }
}

// ============================================================================
// TextField
// ============================================================================

/// Single-line, char-limited text buffer with a cursor.
pub struct TextField {
    prompt: String,
    buffer: String,
    /// Cursor position in chars (0..=char count)
    cursor: usize,
    char_limit: usize,
    focused: bool,
}

impl TextField {
    pub fn new(prompt: &str, char_limit: usize) -> Self {
        Self {
            prompt: prompt.to_string(),
            buffer: String::new(),
            cursor: 0,
            char_limit,
            focused: false,
        }
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Byte offset of the char at `char_index` (or the end of the buffer).
    fn byte_offset(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.buffer.len())
    }

    fn insert_str(&mut self, text: &str) {
        let room = self.char_limit.saturating_sub(self.char_count());
        let accepted: String = text.chars().filter(|c| !c.is_control()).take(room).collect();
        if accepted.is_empty() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.buffer.insert_str(at, &accepted);
        self.cursor += accepted.chars().count();
    }
}

impl TextWidget for TextField {
    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn set_buffer(&mut self, text: &str) {
        self.buffer = text.chars().take(self.char_limit).collect();
        self.cursor = self.char_count();
    }

    fn buffer_value(&self) -> &str {
        &self.buffer
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn handle_action(&mut self, action: &Action) {
        if !self.focused {
            return;
        }
        match action {
            Action::Char(c) => {
                let mut encoded = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut encoded));
            }
            Action::Paste(text) => self.insert_str(text),
            Action::Backspace => {
                if self.cursor > 0 {
                    let start = self.byte_offset(self.cursor - 1);
                    let end = self.byte_offset(self.cursor);
                    self.buffer.drain(start..end);
                    self.cursor -= 1;
                }
            }
            Action::Delete => {
                if self.cursor < self.char_count() {
                    let start = self.byte_offset(self.cursor);
                    let end = self.byte_offset(self.cursor + 1);
                    self.buffer.drain(start..end);
                }
            }
            Action::Left => self.cursor = self.cursor.saturating_sub(1),
            Action::Right => self.cursor = (self.cursor + 1).min(self.char_count()),
            Action::Home | Action::Ctrl('a') => self.cursor = 0,
            Action::End | Action::Ctrl('e') => self.cursor = self.char_count(),
            // Ctrl+U: delete everything before the cursor
            Action::Ctrl('u') => {
                let end = self.byte_offset(self.cursor);
                self.buffer.drain(..end);
                self.cursor = 0;
            }
            _ => {}
        }
    }
}
