//! # Core Application Logic
//!
//! This module contains the chat view's state and rules.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Scheduler (timers)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! `update()` is pure: it mutates `App` and returns [`action::Effect`]s.
//! The adapter carries out effects, which for timers means handing them to
//! the [`scheduler::Scheduler`].
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct: all application state in one place
//! - [`action`]: The `Action` enum: everything that can happen in the app
//! - [`message`]: Messages and the append-only conversation
//! - [`scheduler`]: Deferred timers, cancelled on teardown
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod message;
pub mod scheduler;
pub mod state;
