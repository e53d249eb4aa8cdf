//! # TopBar Component
//!
//! Header across the main column: the brand centred, icon actions on the right.
//!
//! ## Stateless Component
//!
//! TopBar is purely presentational. The share and user icons are drawn but
//! do nothing when clicked.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              ⚡ DeepForge AI            ⇪  ◉ │
//! └──────────────────────────────────────────────┘
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Accent used for the brand bolt and the send button.
pub const ACCENT: Color = Color::Rgb(0x00, 0xff, 0xaa);

/// Height including the bottom border.
pub const TOP_BAR_HEIGHT: u16 = 2;

pub struct TopBar {
    pub brand: String,
}

impl Default for TopBar {
    fn default() -> Self {
        Self::new("DeepForge")
    }
}

impl TopBar {
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
        }
    }

    fn title_line(&self) -> Line<'_> {
        Line::from(vec![
            Span::styled("⚡ ", Style::default().fg(ACCENT)),
            Span::styled(self.brand.as_str(), Style::default().fg(Color::Gray)),
            Span::raw(" "),
            Span::styled(
                "AI",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ])
    }
}

impl Component for TopBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::new()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        frame.render_widget(
            Paragraph::new(self.title_line()).alignment(Alignment::Center),
            inner,
        );

        let icons = Line::from(vec![
            Span::styled("⇪", Style::default().fg(Color::Gray)),
            Span::raw("  "),
            Span::styled("◉", Style::default().fg(Color::White).bg(Color::DarkGray)),
            Span::raw(" "),
        ]);
        frame.render_widget(Paragraph::new(icons).alignment(Alignment::Right), inner);
    }
}
