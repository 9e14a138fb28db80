//! # Option List Component
//!
//! Bordered, scrollable list of two-line rows (title + dimmed description)
//! used by the main menu and both pickers.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ListState` (scroll offset) lives in `TuiState`
//! - `OptionList` is created each frame with borrowed rows and state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::core::view::Row;
use crate::tui::component::Component;

const HIGHLIGHT_SYMBOL: &str = "> ";

/// Transient render wrapper over the visible rows.
pub struct OptionList<'a> {
    rows: &'a [Row],
    selected: Option<usize>,
    state: &'a mut ListState,
}

impl<'a> OptionList<'a> {
    pub fn new(rows: &'a [Row], selected: Option<usize>, state: &'a mut ListState) -> Self {
        Self {
            rows,
            selected,
            state,
        }
    }
}

impl Component for OptionList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));

        if self.rows.is_empty() {
            let empty = Paragraph::new("No matches")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        // borders + padding + highlight symbol
        let text_width = (area.width as usize).saturating_sub(4 + HIGHLIGHT_SYMBOL.len());
        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| {
                let description = truncate_to_width(&row.description, text_width.saturating_sub(2));
                ListItem::new(vec![
                    Line::from(truncate_to_width(&row.title, text_width)),
                    Line::from(Span::styled(
                        format!("  {description}"),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            );

        self.state.select(self.selected);
        frame.render_stateful_widget(list, area, self.state);
    }
}

/// Truncate to `max_width` display columns, adding "..." if needed.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let width: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if width <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rows() -> Vec<Row> {
        ["Standard", "Big", "Slant"]
            .iter()
            .map(|name| Row {
                title: name.to_string(),
                description: "Press Enter to select".to_string(),
            })
            .collect()
    }

    fn render(rows: &[Row], selected: Option<usize>, height: u16) -> (String, ListState) {
        let mut state = ListState::default();
        let backend = TestBackend::new(40, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| OptionList::new(rows, selected, &mut state).render(f, f.area()))
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        (text, state)
    }

    #[test]
    fn test_renders_titles_and_highlight() {
        let (text, state) = render(&rows(), Some(1), 10);
        assert!(text.contains("Standard"));
        assert!(text.contains("> Big"));
        assert!(text.contains("Press Enter to select"));
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_scrolls_to_keep_selection_visible() {
        // Room for two two-line rows
        let (text, state) = render(&rows(), Some(2), 6);
        assert!(text.contains("> Slant"));
        assert!(state.offset() > 0);
    }

    #[test]
    fn test_empty_rows_show_placeholder() {
        let (text, _) = render(&[], None, 5);
        assert!(text.contains("No matches"));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Standard", 20), "Standard");
        assert_eq!(truncate_to_width("Completion message", 10), "Complet...");
        assert_eq!(truncate_to_width("日本語テキスト", 9), "日本語...");
        assert_eq!(truncate_to_width("abcdef", 2), "..");
    }
}
