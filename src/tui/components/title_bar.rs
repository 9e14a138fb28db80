//! # TitleBar Component
//!
//! Single-line heading for the current screen. Shows the active filter
//! next to the title when a picker is being filtered:
//!
//! 1. **No filter**: `"Select Font"`
//! 2. **Filtering**: `"Select Font  Filter: bi"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar<'a> {
    pub title: &'a str,
    pub filter: Option<&'a str>,
}

impl<'a> TitleBar<'a> {
    pub fn new(title: &'a str, filter: Option<&'a str>) -> Self {
        Self { title, filter }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            self.title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(filter) = self.filter {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("Filter: {filter}"),
                Style::default().fg(Color::Yellow),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
