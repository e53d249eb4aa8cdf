//! # Actions
//!
//! Everything that can happen in the chat view becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The reply timer fires? That's `Action::ReplyDue`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns the effects the caller must carry out.
//! No side effects here. Timers and terminal I/O happen elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effects
//! ```

use log::debug;

use crate::core::message::Sender;
use crate::core::scheduler::Timer;
use crate::core::state::{App, WelcomePhase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The input text changed.
    EditDraft(String),
    /// Send the current draft.
    Submit,
    /// The reply delay for an earlier submission elapsed.
    ReplyDue,
    /// The welcome grace delay elapsed.
    WelcomeGraceElapsed,
    ToggleSidebar,
    Quit,
}

/// Work the caller must perform after `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Schedule(Timer),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Vec<Effect> {
    debug!("update: {:?}", action);
    match action {
        Action::EditDraft(text) => {
            app.ui.input_draft = text;
            Vec::new()
        }
        Action::Submit => submit(app),
        Action::ReplyDue => {
            let reply = app.reply_text.clone();
            app.conversation.push(Sender::Assistant, reply);
            Vec::new()
        }
        Action::WelcomeGraceElapsed => {
            if app.ui.welcome_phase == WelcomePhase::Transitioning {
                app.ui.welcome_phase = WelcomePhase::Conversation;
            } else {
                debug!("Ignoring grace timer in phase {:?}", app.ui.welcome_phase);
            }
            Vec::new()
        }
        Action::ToggleSidebar => {
            app.ui.sidebar_expanded = !app.ui.sidebar_expanded;
            Vec::new()
        }
        Action::Quit => vec![Effect::Quit],
    }
}

fn submit(app: &mut App) -> Vec<Effect> {
    if app.ui.input_draft.trim().is_empty() {
        return Vec::new();
    }

    let text = std::mem::take(&mut app.ui.input_draft);
    app.conversation.push(Sender::User, text);

    let mut effects = vec![Effect::Schedule(Timer::AssistantReply)];
    if app.ui.welcome_phase == WelcomePhase::Welcome {
        app.ui.welcome_phase = WelcomePhase::Transitioning;
        effects.push(Effect::Schedule(Timer::WelcomeGrace));
    }
    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::PLACEHOLDER_REPLY;
    use crate::test_support::{app_with_draft, submit_text};

    #[test]
    fn test_edit_draft_replaces_text() {
        let mut app = App::new();
        assert!(update(&mut app, Action::EditDraft("he".into())).is_empty());
        update(&mut app, Action::EditDraft("hello".into()));
        assert_eq!(app.ui.input_draft, "hello");
        assert!(app.conversation.is_empty());
    }

    #[test]
    fn test_submit_empty_is_noop() {
        let mut app = App::new();
        let effects = update(&mut app, Action::Submit);
        assert!(effects.is_empty());
        assert!(app.conversation.is_empty());
        assert!(app.welcome_visible());
    }

    #[test]
    fn test_submit_whitespace_is_noop_and_keeps_draft() {
        for blank in [" ", "   ", "\t", "\n  \t"] {
            let mut app = app_with_draft(blank);
            let effects = update(&mut app, Action::Submit);
            assert!(effects.is_empty(), "{blank:?} should be ignored");
            assert_eq!(app.conversation.len(), 0);
            assert_eq!(app.ui.input_draft, blank);
            assert_eq!(app.ui.welcome_phase, WelcomePhase::Welcome);
        }
    }

    #[test]
    fn test_first_submit_appends_user_message_and_schedules_both_timers() {
        let mut app = app_with_draft("hello");
        let effects = update(&mut app, Action::Submit);

        assert_eq!(
            effects,
            vec![
                Effect::Schedule(Timer::AssistantReply),
                Effect::Schedule(Timer::WelcomeGrace),
            ]
        );
        assert_eq!(app.conversation.len(), 1);
        let msg = &app.conversation.messages()[0];
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.text, "hello");
        assert!(app.ui.input_draft.is_empty());
        assert_eq!(app.ui.welcome_phase, WelcomePhase::Transitioning);
        assert!(!app.welcome_visible());
    }

    #[test]
    fn test_submit_keeps_text_verbatim() {
        let mut app = app_with_draft("  padded  ");
        update(&mut app, Action::Submit);
        assert_eq!(app.conversation.messages()[0].text, "  padded  ");
    }

    #[test]
    fn test_later_submits_only_schedule_reply() {
        let mut app = App::new();
        submit_text(&mut app, "one");
        let effects = submit_text(&mut app, "two");
        assert_eq!(effects, vec![Effect::Schedule(Timer::AssistantReply)]);

        update(&mut app, Action::WelcomeGraceElapsed);
        let effects = submit_text(&mut app, "three");
        assert_eq!(effects, vec![Effect::Schedule(Timer::AssistantReply)]);
        assert_eq!(app.ui.welcome_phase, WelcomePhase::Conversation);
    }

    #[test]
    fn test_reply_due_appends_placeholder() {
        let mut app = App::new();
        submit_text(&mut app, "hello");
        update(&mut app, Action::ReplyDue);

        assert_eq!(app.conversation.len(), 2);
        let reply = &app.conversation.messages()[1];
        assert_eq!(reply.sender, Sender::Assistant);
        assert_eq!(reply.text, PLACEHOLDER_REPLY);
    }

    #[test]
    fn test_reply_ignores_user_content() {
        let mut a = App::new();
        let mut b = App::new();
        submit_text(&mut a, "what is 2 + 2?");
        submit_text(&mut b, "tell me a story");
        update(&mut a, Action::ReplyDue);
        update(&mut b, Action::ReplyDue);
        assert_eq!(
            a.conversation.last().map(|m| &m.text),
            b.conversation.last().map(|m| &m.text)
        );
    }

    #[test]
    fn test_grace_elapsed_moves_to_conversation_once() {
        let mut app = App::new();
        submit_text(&mut app, "hello");
        update(&mut app, Action::WelcomeGraceElapsed);
        assert_eq!(app.ui.welcome_phase, WelcomePhase::Conversation);
        assert!(app.ui.floating_input_visible());

        // Further submissions never bring the welcome screen back
        submit_text(&mut app, "again");
        update(&mut app, Action::WelcomeGraceElapsed);
        assert!(!app.welcome_visible());
        assert_eq!(app.ui.welcome_phase, WelcomePhase::Conversation);
    }

    #[test]
    fn test_grace_elapsed_in_welcome_is_ignored() {
        let mut app = App::new();
        update(&mut app, Action::WelcomeGraceElapsed);
        assert_eq!(app.ui.welcome_phase, WelcomePhase::Welcome);
        assert!(app.welcome_visible());
    }

    #[test]
    fn test_toggle_sidebar_twice_is_identity() {
        let mut app = App::new();
        let original = app.ui.sidebar_expanded;
        update(&mut app, Action::ToggleSidebar);
        assert_ne!(app.ui.sidebar_expanded, original);
        update(&mut app, Action::ToggleSidebar);
        assert_eq!(app.ui.sidebar_expanded, original);
    }

    #[test]
    fn test_interleaved_replies_keep_insertion_order() {
        let mut app = App::new();
        submit_text(&mut app, "a");
        submit_text(&mut app, "b");
        update(&mut app, Action::ReplyDue);
        update(&mut app, Action::ReplyDue);

        let senders: Vec<Sender> = app.conversation.messages().iter().map(|m| m.sender).collect();
        assert_eq!(
            senders,
            vec![Sender::User, Sender::User, Sender::Assistant, Sender::Assistant]
        );
    }

    #[test]
    fn test_quit_returns_quit_effect() {
        let mut app = App::new();
        assert_eq!(update(&mut app, Action::Quit), vec![Effect::Quit]);
    }
}
