//! # Application State
//!
//! Core state for the chat view. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── conversation: Conversation    // append-only message history
//! ├── ui: UiState
//! │   ├── input_draft: String       // text being typed
//! │   ├── sidebar_expanded: bool    // rail width + labels
//! │   └── welcome_phase: WelcomePhase
//! └── reply_text: String            // canned assistant reply
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::config::{PLACEHOLDER_REPLY, ResolvedConfig};
use crate::core::message::Conversation;

/// Welcome screen lifecycle. Moves forward only.
///
/// ```text
/// Welcome ──first submit──▶ Transitioning ──grace elapsed──▶ Conversation
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WelcomePhase {
    /// No messages yet: greeting banner with a centred input.
    #[default]
    Welcome,
    /// Messages exist, grace timer pending. Neither input is shown.
    Transitioning,
    /// Grace timer fired: floating input bar at the bottom.
    Conversation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub input_draft: String,
    pub sidebar_expanded: bool,
    pub welcome_phase: WelcomePhase,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            input_draft: String::new(),
            sidebar_expanded: true,
            welcome_phase: WelcomePhase::Welcome,
        }
    }
}

impl UiState {
    /// True only while the conversation is empty and the grace timer hasn't fired.
    pub fn welcome_visible(&self) -> bool {
        self.welcome_phase == WelcomePhase::Welcome
    }

    /// True once the conversation has started and the grace period is over.
    pub fn floating_input_visible(&self) -> bool {
        self.welcome_phase == WelcomePhase::Conversation
    }
}

pub struct App {
    pub conversation: Conversation,
    pub ui: UiState,
    /// Text of every assistant reply. Fixed: there is no inference behind it.
    pub reply_text: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            conversation: Conversation::new(),
            ui: UiState::default(),
            reply_text: PLACEHOLDER_REPLY.to_string(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            conversation: Conversation::new(),
            ui: UiState {
                sidebar_expanded: config.sidebar_start_expanded,
                ..UiState::default()
            },
            reply_text: config.reply_text.clone(),
        }
    }

    pub fn welcome_visible(&self) -> bool {
        self.ui.welcome_visible()
    }
}
