//! # HintBar Component
//!
//! Bottom two lines: the inline error (red, blank when there is none)
//! and the key hint for the current screen (dim).

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

pub struct HintBar<'a> {
    pub error: Option<&'a str>,
    pub hint: &'a str,
}

impl<'a> HintBar<'a> {
    pub fn new(error: Option<&'a str>, hint: &'a str) -> Self {
        Self { error, hint }
    }
}

impl Component for HintBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [error_area, hint_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        if let Some(error) = self.error {
            frame.render_widget(
                Line::styled(format!("Error: {error}"), Style::default().fg(Color::Red)),
                error_area,
            );
        }
        frame.render_widget(
            Line::styled(
                self.hint,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            ),
            hint_area,
        );
    }
}
