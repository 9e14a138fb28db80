//! # Screen Views
//!
//! What each screen shows, independent of how it is drawn. The TUI renders
//! a `ScreenView` with ratatui widgets; `Display` renders it as plain text.
//!
//! ```text
//! ScreenView
//! ├── title: String
//! ├── body: Body
//! │   ├── List { rows, selected }       // menu and pickers
//! │   ├── Editor { heading, prompt, … } // tick rate / message
//! │   └── Closing(String)               // session over
//! ├── error: Option<String>
//! └── hint: &'static str
//! ```

use std::fmt;

use crate::core::catalog::ListItem;
use crate::core::commit::{Outcome, outcome};
use crate::core::config::{MAX_TICK_RATE_MS, MIN_TICK_RATE_MS};
use crate::core::state::{App, Screen};
use crate::core::widget::{ListWidget, TextWidget};

pub const MAIN_HINT: &str =
    "Enter: select/edit | Ctrl+S: save and exit | q: cancel | Ctrl+C: cancel";
pub const FONT_HINT: &str = "Enter: choose font | /: filter | esc: back";
pub const KEY_HINT: &str = "Enter: choose key | /: filter | esc: back";
pub const EDITOR_HINT: &str = "Enter: save | esc: back";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    List {
        rows: Vec<Row>,
        /// Position within `rows`
        selected: Option<usize>,
        filter: Option<String>,
    },
    Editor {
        heading: String,
        prompt: String,
        buffer: String,
        /// Cursor position in chars
        cursor: usize,
    },
    Closing(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    pub title: String,
    pub body: Body,
    pub error: Option<String>,
    pub hint: &'static str,
}

impl ScreenView {
    pub fn from_app(app: &App) -> Self {
        if let Some(outcome) = outcome(app) {
            let text = match outcome {
                Outcome::Failed(e) => format!("Error: {e}"),
                Outcome::Cancelled => "Cancelled".to_string(),
                Outcome::Saved => "Saved".to_string(),
            };
            return Self {
                title: String::new(),
                body: Body::Closing(text),
                error: None,
                hint: "",
            };
        }

        let error = app.error.as_ref().map(ToString::to_string);
        match app.screen {
            Screen::Main => list_view(app.menu.as_ref(), error, MAIN_HINT),
            Screen::FontPicker => list_view(app.font_list.as_ref(), error, FONT_HINT),
            Screen::KeyPicker => list_view(app.key_list.as_ref(), error, KEY_HINT),
            Screen::TickRateEditor => editor_view(
                format!("Tick rate ({MIN_TICK_RATE_MS}-{MAX_TICK_RATE_MS} ms)"),
                app.tick_input.as_ref(),
                error,
            ),
            Screen::MessageEditor => editor_view(
                "Completion message".to_string(),
                app.message_input.as_ref(),
                error,
            ),
        }
    }
}

fn list_view(list: &dyn ListWidget, error: Option<String>, hint: &'static str) -> ScreenView {
    let items = list.items();
    let visible = list.visible();
    let selected_index = list.index();

    let rows = visible
        .iter()
        .filter_map(|&index| items.get(index))
        .map(|entry| Row {
            title: entry.title().into_owned(),
            description: entry.description().into_owned(),
        })
        .collect();
    let selected = selected_index.and_then(|index| visible.iter().position(|&v| v == index));

    ScreenView {
        title: list.title().to_string(),
        body: Body::List {
            rows,
            selected,
            filter: list.filter().map(str::to_string),
        },
        error,
        hint,
    }
}

fn editor_view(heading: String, input: &dyn TextWidget, error: Option<String>) -> ScreenView {
    ScreenView {
        title: heading.clone(),
        body: Body::Editor {
            heading,
            prompt: input.prompt().to_string(),
            buffer: input.buffer_value().to_string(),
            cursor: input.cursor(),
        },
        error,
        hint: EDITOR_HINT,
    }
}

impl fmt::Display for ScreenView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            Body::Closing(text) => writeln!(f, "{text}"),
            Body::List {
                rows,
                selected,
                filter,
            } => {
                writeln!(f, "{}", self.title)?;
                if let Some(filter) = filter {
                    writeln!(f, "Filter: {filter}")?;
                }
                writeln!(f)?;
                for (index, row) in rows.iter().enumerate() {
                    let marker = if Some(index) == *selected { ">" } else { " " };
                    writeln!(f, "{marker} {}", row.title)?;
                    writeln!(f, "    {}", row.description)?;
                }
                if let Some(error) = &self.error {
                    writeln!(f, "\nError: {error}")?;
                }
                write!(f, "\n{}", self.hint)
            }
            Body::Editor {
                heading,
                prompt,
                buffer,
                ..
            } => {
                write!(f, "{heading}\n\n{prompt}{buffer}\n")?;
                if let Some(error) = &self.error {
                    writeln!(f, "\nError: {error}")?;
                }
                write!(f, "\n{}", self.hint)
            }
        }
    }
}
