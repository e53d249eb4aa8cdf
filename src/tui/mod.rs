//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (aurora background, or a timer pending): draws every ~80ms
//!   so the backdrop moves and timer actions show up promptly.
//! - **Idle** (animation off, nothing scheduled): sleeps up to 500ms, only
//!   redraws on events or terminal resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous redraws.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::scheduler::{Scheduler, TimerDelays};
use crate::core::state::{App, WelcomePhase};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, MessageListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::{ChatLayout, Hit, SidebarWidths};

const ANIMATION_FRAME: Duration = Duration::from_millis(80);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub message_list: MessageListState,
    pub input_box: InputBox,
    // Props fixed at startup
    pub animate: bool,
    pub sidebar_widths: SidebarWidths,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
            animate: config.animate_background,
            sidebar_widths: SidebarWidths::from_config(config),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show, // Show cursor for input editing
            // Non-blinking: avoids blink timer reset from continuous redraws
            SetCursorStyle::SteadyBlock,
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

/// Run `action` through the core and bring the input box back in line with
/// the draft.
fn apply(app: &mut App, tui: &mut TuiState, action: Action) -> Vec<Effect> {
    let effects = update(app, action);
    tui.input_box.sync(&app.ui.input_draft);
    effects
}

/// Translate one terminal event into core actions. `frame_area` is the
/// terminal size used for mouse hit testing.
fn handle_event(
    event: &TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    frame_area: Rect,
) -> Vec<Effect> {
    match event {
        // Resize just needs a redraw
        TuiEvent::Resize => Vec::new(),
        TuiEvent::Quit => apply(app, tui, Action::Quit),
        TuiEvent::ToggleSidebar => apply(app, tui, Action::ToggleSidebar),
        TuiEvent::MouseClick(col, row) => {
            let layout = ChatLayout::compute(
                frame_area,
                app.ui.sidebar_expanded,
                tui.sidebar_widths,
                app.ui.welcome_phase,
            );
            match layout.hit_test(*col, *row) {
                Some(Hit::SidebarToggle) => apply(app, tui, Action::ToggleSidebar),
                Some(Hit::SendButton) => apply(app, tui, Action::Submit),
                None => Vec::new(),
            }
        }
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.message_list.handle_event(event);
            Vec::new()
        }
        _ => {
            // No input is on screen until the grace delay is over
            if app.ui.welcome_phase == WelcomePhase::Transitioning {
                debug!("Ignoring {:?} while transitioning", event);
                return Vec::new();
            }
            match tui.input_box.handle_event(event) {
                Some(InputEvent::ContentChanged) => {
                    let draft = tui.input_box.buffer.clone();
                    apply(app, tui, Action::EditDraft(draft))
                }
                Some(InputEvent::Submit) => apply(app, tui, Action::Submit),
                Some(InputEvent::CursorMoved) | None => Vec::new(),
            }
        }
    }
}

/// Carry out effects. Returns true when the loop should stop.
fn execute_effects(effects: Vec<Effect>, scheduler: &mut Scheduler) -> bool {
    let mut quit = false;
    for effect in effects {
        match effect {
            Effect::Schedule(timer) => scheduler.schedule(timer),
            Effect::Quit => quit = true,
        }
    }
    quit
}

/// Run the chat view until the user quits. Must be called from inside a
/// tokio runtime; timers are spawned onto it.
pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&config);

    // Timer tasks send their actions back over this channel
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let mut scheduler = Scheduler::new(tx, TimerDelays::from_config(&config));

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = tui.animate || scheduler.has_pending();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, elapsed))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating { ANIMATION_FRAME } else { IDLE_POLL };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        let frame_area = terminal.get_frame().area();
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let effects = handle_event(&event, &mut app, &mut tui, frame_area);
            if execute_effects(effects, &mut scheduler) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }

        // Handle timer actions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effects = apply(&mut app, &mut tui, action);
            if execute_effects(effects, &mut scheduler) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    info!(
        "Shutting down with {} message(s) in the conversation",
        app.conversation.len()
    );
    // Cancels pending replies and the grace timer
    drop(scheduler);

    ratatui::restore();
    Ok(())
}
