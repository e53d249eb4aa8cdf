//! # Deferred Timers
//!
//! The only asynchronous work in the app: waiting before a canned reply
//! lands, and waiting before the welcome screen gives way to the floating
//! input bar.
//!
//! Each timer is a tokio task that sleeps, then sends an [`Action`] back to
//! the event loop. Tasks never touch `App` directly.
//!
//! The [`Scheduler`] holds an abort handle for every pending timer. Dropping
//! it aborts them all, so nothing is delivered after the view is torn down.

use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;

use crate::core::action::Action;
use crate::core::config::ResolvedConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    AssistantReply,
    WelcomeGrace,
}

impl Timer {
    /// The action delivered when this timer fires.
    pub fn action(self) -> Action {
        match self {
            Timer::AssistantReply => Action::ReplyDue,
            Timer::WelcomeGrace => Action::WelcomeGraceElapsed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerDelays {
    pub reply: Duration,
    pub welcome_grace: Duration,
}

impl TimerDelays {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            reply: config.reply_delay,
            welcome_grace: config.welcome_grace,
        }
    }

    fn delay_for(&self, timer: Timer) -> Duration {
        match timer {
            Timer::AssistantReply => self.reply,
            Timer::WelcomeGrace => self.welcome_grace,
        }
    }
}

impl Default for TimerDelays {
    fn default() -> Self {
        Self {
            reply: Duration::from_millis(crate::core::config::DEFAULT_REPLY_DELAY_MS),
            welcome_grace: Duration::from_millis(crate::core::config::DEFAULT_WELCOME_GRACE_MS),
        }
    }
}

/// Owns pending timers. Must be created inside a tokio runtime.
pub struct Scheduler {
    tx: UnboundedSender<Action>,
    delays: TimerDelays,
    replies: Vec<AbortHandle>,
    /// At most one grace timer at a time.
    welcome_grace: Option<AbortHandle>,
}

impl Scheduler {
    pub fn new(tx: UnboundedSender<Action>, delays: TimerDelays) -> Self {
        Self {
            tx,
            delays,
            replies: Vec::new(),
            welcome_grace: None,
        }
    }

    /// Start `timer`. Scheduling a grace timer replaces any pending one.
    pub fn schedule(&mut self, timer: Timer) {
        let delay = self.delays.delay_for(timer);
        info!("Scheduling {:?} in {}ms", timer, delay.as_millis());

        // Deadline is fixed now, not when the task first runs
        let deadline = tokio::time::Instant::now() + delay;
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            debug!("Timer fired: {:?}", timer);
            if tx.send(timer.action()).is_err() {
                warn!("Failed to deliver {:?}: receiver dropped", timer);
            }
        })
        .abort_handle();

        match timer {
            Timer::AssistantReply => {
                self.replies.retain(|h| !h.is_finished());
                self.replies.push(handle);
            }
            Timer::WelcomeGrace => {
                if let Some(previous) = self.welcome_grace.replace(handle) {
                    previous.abort();
                }
            }
        }
    }

    /// Number of timers that have not fired yet.
    pub fn pending(&self) -> usize {
        self.replies.iter().filter(|h| !h.is_finished()).count()
            + self
                .welcome_grace
                .as_ref()
                .map_or(0, |h| usize::from(!h.is_finished()))
    }

    pub fn has_pending(&self) -> bool {
        self.pending() > 0
    }

    /// Abort every pending timer. Their actions are never delivered.
    pub fn cancel_all(&mut self) {
        let pending = self.pending();
        if pending > 0 {
            info!("Cancelling {} pending timer(s)", pending);
        }
        for handle in self.replies.drain(..) {
            handle.abort();
        }
        if let Some(handle) = self.welcome_grace.take() {
            handle.abort();
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
