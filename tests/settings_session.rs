use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use timer_settings::core::action::{Action, Effect};
use timer_settings::core::catalog::ListItem;
use timer_settings::core::commit::{FileStore, Outcome, dispatch, outcome};
use timer_settings::core::config::Config;
use timer_settings::core::payload::{PayloadError, load_payload};
use timer_settings::core::state::{App, Screen, SessionError};
use timer_settings::core::view::ScreenView;

// ============================================================================
// Helper Functions
// ============================================================================

/// Writes a state file whose configPath points into the same temp dir.
fn write_state(dir: &TempDir, config_json: &str, fonts: &[&str]) -> (PathBuf, PathBuf) {
    let config_path = dir.path().join("config.json");
    let state_path = dir.path().join("state.json");
    let state = serde_json::json!({
        "configPath": config_path.display().to_string(),
        "config": serde_json::from_str::<serde_json::Value>(config_json).unwrap(),
        "fonts": fonts,
    });
    fs::write(&state_path, state.to_string()).unwrap();
    (state_path, config_path)
}

fn start_session(state_path: &Path) -> App {
    App::new(load_payload(state_path).unwrap())
}

fn press(app: &mut App, actions: &[Action]) -> Effect {
    let mut effect = Effect::None;
    for action in actions {
        effect = dispatch(app, action.clone(), &FileStore);
    }
    effect
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        dispatch(app, Action::Char(c), &FileStore);
    }
}

fn read_config(path: &Path) -> Config {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// ============================================================================
// Editing Flows
// ============================================================================

#[test]
fn test_pick_font_edit_tick_rate_and_save() {
    let dir = tempfile::tempdir().unwrap();
    let (state_path, config_path) = write_state(&dir, "{}", &["Standard", "Big"]);
    let mut app = start_session(&state_path);

    press(&mut app, &[Action::Enter]);
    assert_eq!(app.screen, Screen::FontPicker);
    press(&mut app, &[Action::Down, Action::Enter]);
    assert_eq!(app.screen, Screen::Main);
    assert_eq!(app.payload.config.font, "Big");

    press(
        &mut app,
        &[Action::Down, Action::Down, Action::Down, Action::Down, Action::Enter],
    );
    assert_eq!(app.screen, Screen::TickRateEditor);
    press(&mut app, &[Action::Ctrl('u')]);
    type_text(&mut app, "250");
    press(&mut app, &[Action::Enter]);
    assert_eq!(app.screen, Screen::Main);
    assert_eq!(app.payload.config.tick_rate_ms, 250);
    assert!(app.error.is_none());

    let effect = press(&mut app, &[Action::Ctrl('s')]);
    assert_eq!(effect, Effect::Save);
    assert_eq!(outcome(&app), Some(Outcome::Saved));

    let saved = read_config(&config_path);
    assert_eq!(saved.font, "Big");
    assert_eq!(saved.tick_rate_ms, 250);
    assert_eq!(saved, app.payload.config);
}

#[test]
fn test_out_of_range_tick_rate_keeps_editor_open() {
    let dir = tempfile::tempdir().unwrap();
    let (state_path, _) = write_state(&dir, r#"{"tickRateMs": 300}"#, &["Standard"]);
    let mut app = start_session(&state_path);

    for _ in 0..4 {
        press(&mut app, &[Action::Down]);
    }
    press(&mut app, &[Action::Enter, Action::Ctrl('u')]);
    type_text(&mut app, "2000");
    press(&mut app, &[Action::Enter]);

    assert_eq!(app.screen, Screen::TickRateEditor);
    assert_eq!(app.payload.config.tick_rate_ms, 300);
    assert!(matches!(
        app.error,
        Some(SessionError::TickRateOutOfRange { min: 50, max: 1000 })
    ));
    let text = ScreenView::from_app(&app).to_string();
    assert!(text.contains("Error: tick rate must be between 50 and 1000"));
}

#[test]
fn test_filter_key_picker_and_assign() {
    let dir = tempfile::tempdir().unwrap();
    let (state_path, config_path) = write_state(&dir, "{}", &["Standard"]);
    let mut app = start_session(&state_path);

    // Pause key entry
    for _ in 0..7 {
        press(&mut app, &[Action::Down]);
    }
    press(&mut app, &[Action::Enter]);
    assert_eq!(app.screen, Screen::KeyPicker);
    assert_eq!(app.key_list.title(), "Select Pause Key");

    press(&mut app, &[Action::Char('/')]);
    type_text(&mut app, "x");
    assert_eq!(app.key_list.visible().len(), 1);
    press(&mut app, &[Action::Enter]);

    assert_eq!(app.screen, Screen::Main);
    assert_eq!(app.payload.config.keybindings.pause_key, "x");
    assert_eq!(app.menu.items()[7].description(), "x");

    press(&mut app, &[Action::Ctrl('s')]);
    assert_eq!(read_config(&config_path).keybindings.pause_key, "x");
}

#[test]
fn test_every_confirm_encoding_opens_font_picker() {
    let dir = tempfile::tempdir().unwrap();
    let (state_path, _) = write_state(&dir, "{}", &["Standard"]);
    for confirm in [
        Action::Enter,
        Action::Ctrl('j'),
        Action::Ctrl('m'),
        Action::Char('\r'),
        Action::Char('\n'),
    ] {
        let mut app = start_session(&state_path);
        press(&mut app, &[confirm.clone()]);
        assert_eq!(app.screen, Screen::FontPicker, "{confirm:?}");
    }
}

#[test]
fn test_toggle_and_save_round_trips_through_next_load() {
    let dir = tempfile::tempdir().unwrap();
    let (state_path, config_path) = write_state(&dir, "{}", &["Standard"]);
    let mut app = start_session(&state_path);

    press(&mut app, &[Action::Down, Action::Enter, Action::Ctrl('s')]);
    assert!(!read_config(&config_path).center_display);

    // The saved file is a valid config for the next session
    let saved = fs::read_to_string(&config_path).unwrap();
    let (next_state, _) = write_state(&dir, &saved, &["Standard"]);
    let next = start_session(&next_state);
    assert_eq!(next.payload.config, app.payload.config);
}

// ============================================================================
// Cancel / Load Errors
// ============================================================================

#[test]
fn test_cancel_with_q_leaves_config_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let (state_path, config_path) = write_state(&dir, "{}", &["Standard"]);
    fs::write(&config_path, "original\n").unwrap();
    let mut app = start_session(&state_path);

    press(&mut app, &[Action::Down, Action::Enter]);
    let effect = press(&mut app, &[Action::Char('q')]);

    assert_eq!(effect, Effect::Quit);
    let finished = outcome(&app).unwrap();
    assert_eq!(finished, Outcome::Cancelled);
    assert_eq!(finished.exit_code(), 2);
    assert_eq!(fs::read_to_string(&config_path).unwrap(), "original\n");
}

#[test]
fn test_ctrl_c_cancels_from_main() {
    let dir = tempfile::tempdir().unwrap();
    let (state_path, _) = write_state(&dir, "{}", &["Standard"]);
    let mut app = start_session(&state_path);
    press(&mut app, &[Action::Ctrl('c')]);
    assert!(app.cancelled && app.quitting);
}

#[test]
fn test_unknown_font_is_replaced_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let (state_path, _) = write_state(&dir, r#"{"font": "Doom"}"#, &["Slant", "Standard"]);
    let app = start_session(&state_path);
    assert_eq!(app.payload.config.font, "Slant");
}

#[test]
fn test_state_without_config_path_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let state_path = dir.path().join("state.json");
    fs::write(&state_path, r#"{"config": {}, "fonts": ["Standard"]}"#).unwrap();
    let err = load_payload(&state_path).unwrap_err();
    assert!(matches!(err, PayloadError::MissingConfigPath));
}
