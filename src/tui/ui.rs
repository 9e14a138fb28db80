use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::widgets::Paragraph;

use crate::core::view::{Body, ScreenView};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{HintBar, OptionList, TextFieldView, TitleBar};

pub fn draw_ui(frame: &mut Frame, view: &ScreenView, tui: &mut TuiState) {
    if let Body::Closing(text) = &view.body {
        let paragraph = Paragraph::new(text.as_str()).alignment(Alignment::Center);
        frame.render_widget(paragraph, frame.area());
        return;
    }

    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(2)]);
    let [title_area, body_area, hint_area] = layout.areas(frame.area());

    match &view.body {
        Body::List {
            rows,
            selected,
            filter,
        } => {
            TitleBar::new(&view.title, filter.as_deref()).render(frame, title_area);
            OptionList::new(rows, *selected, &mut tui.list_state).render(frame, body_area);
        }
        Body::Editor {
            heading,
            prompt,
            buffer,
            cursor,
        } => {
            TitleBar::new(&view.title, None).render(frame, title_area);
            let [field_area, _] = Layout::vertical([Length(3), Min(0)]).areas(body_area);
            TextFieldView::new(heading, prompt, buffer, *cursor).render(frame, field_area);
        }
        Body::Closing(_) => {}
    }

    HintBar::new(view.error.as_deref(), view.hint).render(frame, hint_area);
}
