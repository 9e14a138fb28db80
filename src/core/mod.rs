//! # Core Session Logic
//!
//! The settings editor's state machine. It knows nothing about terminals.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (session data) │
//!                    │  • Action (key intents) │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Payload   │      │   Commit   │
//!     │  Adapter   │      │  (load)    │      │  (save)    │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! File I/O is confined to [`payload::load_payload`] and the
//! [`commit::ConfigStore`] handed to [`commit::dispatch`].
//!
//! ## Modules
//!
//! - [`config`]: The persisted `Config` and its normalization rules
//! - [`payload`]: The startup `StatePayload`
//! - [`catalog`]: Menu, font, and key entries
//! - [`widget`]: List and text-entry capabilities the state machine drives
//! - [`state`]: The `App` struct, all session state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`commit`]: Saving, cancelling, and the session outcome
//! - [`view`]: What each screen shows

pub mod action;
pub mod catalog;
pub mod commit;
pub mod config;
pub mod payload;
pub mod state;
pub mod view;
pub mod widget;
