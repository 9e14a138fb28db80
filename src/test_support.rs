//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::io;
use std::path::Path;

use crate::core::commit::{ConfigStore, SaveError};
use crate::core::config::Config;
use crate::core::payload::StatePayload;
use crate::core::state::App;

/// A store whose writes always fail.
pub struct FailingStore;

impl ConfigStore for FailingStore {
    fn save(&self, _path: &Path, _config: &Config) -> Result<(), SaveError> {
        Err(SaveError::Io(io::Error::other("disk on fire")))
    }
}

/// Default config, two fonts, and a path nothing should write to.
pub fn test_payload() -> StatePayload {
    StatePayload {
        config_path: "/tmp/cli-timer-test-config.json".to_string(),
        config: Config::default(),
        fonts: vec!["Standard".to_string(), "Big".to_string()],
    }
}

/// Creates a test App on the Main screen.
pub fn test_app() -> App {
    App::new(test_payload())
}
