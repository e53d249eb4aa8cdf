use deepforge::core::action::{Action, Effect, update};
use deepforge::core::config::{
    CliOverrides, DeepForgeConfig, PLACEHOLDER_REPLY, ResolvedConfig, resolve_with_env,
};
use deepforge::core::message::Sender;
use deepforge::core::scheduler::{Scheduler, TimerDelays};
use deepforge::core::state::{App, WelcomePhase};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

// ============================================================================
// Helper Functions
// ============================================================================

/// The core plus the timer machinery, wired the way the event loop wires them.
struct Harness {
    app: App,
    scheduler: Scheduler,
    rx: UnboundedReceiver<Action>,
}

impl Harness {
    fn new(config: &ResolvedConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            app: App::from_config(config),
            scheduler: Scheduler::new(tx, TimerDelays::from_config(config)),
            rx,
        }
    }

    fn dispatch(&mut self, action: Action) -> bool {
        let mut quit = false;
        for effect in update(&mut self.app, action) {
            match effect {
                Effect::Schedule(timer) => self.scheduler.schedule(timer),
                Effect::Quit => quit = true,
            }
        }
        quit
    }

    fn submit(&mut self, text: &str) {
        self.dispatch(Action::EditDraft(text.to_string()));
        self.dispatch(Action::Submit);
    }

    /// Let paused time move forward by `ms`, then apply every delivered action.
    async fn advance(&mut self, ms: u64) {
        tokio::time::advance(Duration::from_millis(ms)).await;
        // Give woken timer tasks a chance to send
        tokio::task::yield_now().await;
        while let Ok(action) = self.rx.try_recv() {
            self.dispatch(action);
        }
    }

    fn senders(&self) -> Vec<Sender> {
        self.app
            .conversation
            .messages()
            .iter()
            .map(|m| m.sender)
            .collect()
    }
}

fn default_config() -> ResolvedConfig {
    ResolvedConfig::default()
}

// ============================================================================
// Conversation Flow
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_first_message_gets_reply_and_dismisses_welcome() {
    let mut h = Harness::new(&default_config());
    assert!(h.app.welcome_visible());

    h.submit("What is Rust?");
    assert_eq!(h.app.ui.welcome_phase, WelcomePhase::Transitioning);
    assert_eq!(h.senders(), vec![Sender::User]);
    assert!(h.app.ui.input_draft.is_empty());

    h.advance(999).await;
    assert_eq!(h.senders(), vec![Sender::User]);

    h.advance(2).await;
    assert_eq!(h.senders(), vec![Sender::User, Sender::Assistant]);
    assert_eq!(
        h.app.conversation.last().map(|m| m.text.as_str()),
        Some(PLACEHOLDER_REPLY)
    );
    assert_eq!(h.app.ui.welcome_phase, WelcomePhase::Conversation);
    assert!(!h.scheduler.has_pending());
}

#[tokio::test(start_paused = true)]
async fn test_rapid_submissions_each_get_a_reply_in_order() {
    let mut h = Harness::new(&default_config());

    h.submit("one");
    h.advance(300).await;
    h.submit("two");
    assert_eq!(h.scheduler.pending(), 3); // two replies + grace

    h.advance(701).await;
    assert_eq!(
        h.senders(),
        vec![Sender::User, Sender::Assistant, Sender::User]
    );

    h.advance(300).await;
    assert_eq!(
        h.senders(),
        vec![Sender::User, Sender::Assistant, Sender::User, Sender::Assistant]
    );

    let texts: Vec<&str> = h
        .app
        .conversation
        .messages()
        .iter()
        .map(|m| m.text.as_str())
        .collect();
    assert_eq!(texts[0], "one");
    assert_eq!(texts[2], "two");
}

#[tokio::test(start_paused = true)]
async fn test_whitespace_submit_schedules_nothing() {
    let mut h = Harness::new(&default_config());

    h.submit("   \t ");
    assert!(h.app.conversation.is_empty());
    assert!(!h.scheduler.has_pending());
    assert_eq!(h.app.ui.input_draft, "   \t ");

    h.advance(5000).await;
    assert!(h.app.conversation.is_empty());
    assert!(h.app.welcome_visible());
}

#[tokio::test(start_paused = true)]
async fn test_welcome_never_returns() {
    let mut h = Harness::new(&default_config());

    h.submit("hi");
    h.advance(1001).await;
    assert_eq!(h.app.ui.welcome_phase, WelcomePhase::Conversation);

    h.submit("again");
    h.dispatch(Action::WelcomeGraceElapsed);
    h.advance(1001).await;
    assert_eq!(h.app.ui.welcome_phase, WelcomePhase::Conversation);
    assert!(!h.app.welcome_visible());
}

#[tokio::test(start_paused = true)]
async fn test_quit_cancels_pending_timers() {
    let config = default_config();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::from_config(&config);
    let mut scheduler = Scheduler::new(tx, TimerDelays::from_config(&config));

    update(&mut app, Action::EditDraft("bye".into()));
    for effect in update(&mut app, Action::Submit) {
        if let Effect::Schedule(timer) = effect {
            scheduler.schedule(timer);
        }
    }
    assert_eq!(update(&mut app, Action::Quit), vec![Effect::Quit]);
    drop(scheduler);

    tokio::time::advance(Duration::from_millis(5000)).await;
    // Every sender is gone and nothing was delivered
    assert_eq!(rx.recv().await, None);
    assert_eq!(app.conversation.len(), 1);
    assert_eq!(app.ui.welcome_phase, WelcomePhase::Transitioning);
}

#[tokio::test(start_paused = true)]
async fn test_sidebar_toggle_is_independent_of_conversation() {
    let mut h = Harness::new(&default_config());
    assert!(h.app.ui.sidebar_expanded);

    h.dispatch(Action::ToggleSidebar);
    h.submit("hello");
    h.advance(1001).await;
    assert!(!h.app.ui.sidebar_expanded);

    h.dispatch(Action::ToggleSidebar);
    assert!(h.app.ui.sidebar_expanded);
    assert_eq!(h.app.conversation.len(), 2);
}

// ============================================================================
// Configuration
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_configured_delays_and_reply_text() {
    let file: DeepForgeConfig = toml_config(
        r#"
        [chat]
        reply_text = "Thinking..."
        reply_delay_ms = 250
        welcome_grace_ms = 2000
        "#,
    );
    let config = resolve_with_env(&file, &CliOverrides::default(), |_| None);
    let mut h = Harness::new(&config);

    h.submit("hello");
    h.advance(251).await;
    assert_eq!(
        h.app.conversation.last().map(|m| m.text.as_str()),
        Some("Thinking...")
    );
    assert_eq!(h.app.ui.welcome_phase, WelcomePhase::Transitioning);

    h.advance(1750).await;
    assert_eq!(h.app.ui.welcome_phase, WelcomePhase::Conversation);
}

#[test]
fn test_cli_collapsed_starts_with_sidebar_collapsed() {
    let cli = CliOverrides {
        collapsed: true,
        no_animation: true,
    };
    let config = resolve_with_env(&DeepForgeConfig::default(), &cli, |_| None);
    let app = App::from_config(&config);

    assert!(!app.ui.sidebar_expanded);
    assert!(!config.animate_background);
}

fn toml_config(text: &str) -> DeepForgeConfig {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, text).unwrap();
    deepforge::core::config::load_config_from(&path).unwrap()
}
