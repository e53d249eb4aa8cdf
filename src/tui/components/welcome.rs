//! # Welcome Screen Component
//!
//! Greeting shown while the conversation is empty. The centred input below
//! it is an `InputBox` placed by the frame layout; this component draws only
//! the heading.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const WELCOME_TITLE: &str = "Welcome to DeepForge AI";

/// Seconds the heading stays dimmed after startup.
const FADE_IN_SECS: f32 = 0.8;

pub struct WelcomeScreen {
    /// Seconds since the screen first appeared.
    pub age_secs: f32,
}

impl WelcomeScreen {
    pub fn new(age_secs: f32) -> Self {
        Self { age_secs }
    }
}

impl Component for WelcomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        if self.age_secs < FADE_IN_SECS {
            style = style.add_modifier(Modifier::DIM);
        }

        let title = Paragraph::new(Line::from(Span::styled(WELCOME_TITLE, style)))
            .alignment(Alignment::Center);
        frame.render_widget(title, area);
    }
}
