//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the current
//! `ScreenView`, and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 250ms waiting for input and
//! only redraws after events or a terminal resize. All pending events are
//! drained before the next draw so pasted or repeated keys don't each
//! cost a frame. The last frame drawn is the closing one (`Saved`,
//! `Cancelled` or `Error: ...`).

mod component;
mod components;
mod event;
mod ui;

pub use event::{TuiEvent, map_key};

use log::{debug, info};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::widgets::ListState;

use crate::core::commit::{ConfigStore, Outcome, dispatch, outcome};
use crate::core::state::{App, Screen};
use crate::core::view::ScreenView;
use crate::tui::event::poll_event_timeout;

const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of the core session)
pub struct TuiState {
    /// Scroll offset of whichever list is on screen
    pub list_state: ListState,
    screen: Option<Screen>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
            screen: None,
        }
    }

    /// Forget the scroll offset when a different screen comes up.
    pub fn sync_screen(&mut self, screen: Screen) {
        if self.screen != Some(screen) {
            self.list_state = ListState::default();
            self.screen = Some(screen);
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Run the editor until the session ends, then restore the terminal.
pub fn run(mut app: App, store: &dyn ConfigStore) -> io::Result<Outcome> {
    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| {
        event_loop(
            &mut app,
            store,
            |view, tui| draw_frame(&mut terminal, view, tui),
            poll_event_timeout,
        )
    });
    ratatui::restore();
    result
}

fn draw_frame(
    terminal: &mut DefaultTerminal,
    view: &ScreenView,
    tui: &mut TuiState,
) -> io::Result<()> {
    terminal.draw(|f| ui::draw_ui(f, view, tui))?;
    Ok(())
}

/// Draw, wait for input, dispatch; repeat until the session has an outcome.
///
/// `next_event(timeout)` blocks up to `timeout`; a zero timeout only
/// returns events that are already queued.
fn event_loop(
    app: &mut App,
    store: &dyn ConfigStore,
    mut draw: impl FnMut(&ScreenView, &mut TuiState) -> io::Result<()>,
    mut next_event: impl FnMut(Duration) -> io::Result<Option<TuiEvent>>,
) -> io::Result<Outcome> {
    let mut tui = TuiState::new();
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            tui.sync_screen(app.screen);
            draw(&ScreenView::from_app(app), &mut tui)?;
            needs_redraw = false;
        }

        // The closing frame has been drawn by now
        if let Some(outcome) = outcome(app) {
            info!("Session finished: {:?}", outcome);
            return Ok(outcome);
        }

        // Process first event + drain ALL pending events before next draw
        let mut next = next_event(POLL_TIMEOUT)?;
        while let Some(event) = next {
            needs_redraw = true;
            if let TuiEvent::Action(action) = event {
                debug!("Dispatching {:?} on {:?}", action, app.screen);
                dispatch(app, action, store);
                if app.quitting {
                    break;
                }
            }
            next = next_event(Duration::ZERO)?;
        }
    }
}
