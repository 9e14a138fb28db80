//! # TUI Components
//!
//! Every component renders one piece of a `ScreenView`.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Screen title and active filter
//! - `TextFieldView`: Prompt, buffer, and terminal cursor for the editors
//! - `HintBar`: Inline error and key hint
//!
//! ### Stateful Components
//!
//! - `OptionList`: Menu and picker rows; borrows a persistent `ListState`
//!   so the scroll offset survives between frames
//!
//! Components receive data as props, never by reaching into `App`:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! HintBar::new(view.error.as_deref(), view.hint).render(frame, area);
//!
//! // Bad: Hidden dependency on session state
//! HintBar::from_app(&app).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Screen heading)
//! ├── option_list.rs   (Scrollable two-line rows)
//! ├── text_field.rs    (Single-line editor)
//! └── hint_bar.rs      (Error + key hint)
//! ```

mod hint_bar;
mod option_list;
mod text_field;
mod title_bar;

pub use hint_bar::HintBar;
pub use option_list::OptionList;
pub use text_field::TextFieldView;
pub use title_bar::TitleBar;
