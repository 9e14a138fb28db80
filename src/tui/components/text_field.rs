//! # Text Field Component
//!
//! Bordered single-line editor: prompt, buffer, and a terminal cursor.
//! Scrolls horizontally so the cursor stays inside the box.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub struct TextFieldView<'a> {
    pub heading: &'a str,
    pub prompt: &'a str,
    pub buffer: &'a str,
    /// Cursor position in chars
    pub cursor: usize,
}

impl<'a> TextFieldView<'a> {
    pub fn new(heading: &'a str, prompt: &'a str, buffer: &'a str, cursor: usize) -> Self {
        Self {
            heading,
            prompt,
            buffer,
            cursor,
        }
    }

    /// Display columns from the start of the prompt to the cursor.
    fn cursor_column(&self) -> usize {
        let before: String = self.buffer.chars().take(self.cursor).collect();
        self.prompt.width() + before.width()
    }
}

impl Component for TextFieldView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.heading));
        let inner = block.inner(area);
        if inner.width == 0 || inner.height == 0 {
            frame.render_widget(block, area);
            return;
        }

        // Keep one spare column so the cursor can sit after the last char
        let column = self.cursor_column();
        let scroll = (column + 1).saturating_sub(inner.width as usize);

        let line = Line::from(vec![
            Span::styled(self.prompt, Style::default().fg(Color::Cyan)),
            Span::raw(self.buffer),
        ]);
        let paragraph = Paragraph::new(line)
            .block(block)
            .scroll((0, u16::try_from(scroll).unwrap_or(u16::MAX)));
        frame.render_widget(paragraph, area);

        let x = inner.x + u16::try_from(column - scroll).unwrap_or(0);
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}
