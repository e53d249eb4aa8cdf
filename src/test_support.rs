//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Action, Effect, update};
use crate::core::message::Sender;
use crate::core::state::{App, WelcomePhase};

/// Creates a test App with the given draft already typed.
pub fn app_with_draft(draft: &str) -> App {
    let mut app = App::new();
    app.ui.input_draft = draft.to_string();
    app
}

/// Types `text` into the draft and submits it.
pub fn submit_text(app: &mut App, text: &str) -> Vec<Effect> {
    update(app, Action::EditDraft(text.to_string()));
    update(app, Action::Submit)
}

/// Creates an App already in the conversation phase with one exchange.
pub fn app_in_conversation() -> App {
    let mut app = App::new();
    submit_text(&mut app, "hello");
    update(&mut app, Action::ReplyDue);
    update(&mut app, Action::WelcomeGraceElapsed);
    debug_assert_eq!(app.ui.welcome_phase, WelcomePhase::Conversation);
    debug_assert_eq!(
        app.conversation.last().map(|m| m.sender),
        Some(Sender::Assistant)
    );
    app
}

/// Renders into a `TestBackend` and returns the whole buffer as one string.
pub fn buffer_text(terminal: &ratatui::Terminal<ratatui::backend::TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect::<String>()
}
