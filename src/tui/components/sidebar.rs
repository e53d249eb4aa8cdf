//! # Sidebar Component
//!
//! Collapsible navigation rail on the left edge.
//!
//! Expanded, it shows a "Menu" heading, labelled entries, and a footer.
//! Collapsed, only the icons and the toggle glyph remain. The entries are
//! placeholders: clicking them does nothing.
//!
//! The header row doubles as the toggle button. [`Sidebar::toggle_area`] is
//! shared with the frame layout so mouse hit testing and drawing agree.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::tui::component::Component;

pub const NAV_ITEMS: [(&str, &str); 3] = [("⌂", "New Chat"), ("◷", "History"), ("⚙", "Settings")];
pub const FOOTER: &str = "© 2025 DeepForge";

const OPEN_GLYPH: &str = "☰";
const CLOSE_GLYPH: &str = "✕";

pub struct Sidebar {
    pub expanded: bool,
}

impl Sidebar {
    pub fn new(expanded: bool) -> Self {
        Self { expanded }
    }

    fn block() -> Block<'static> {
        Block::new()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::new(1, 1, 1, 0))
    }

    /// The clickable header row that toggles the sidebar.
    pub fn toggle_area(area: Rect) -> Rect {
        let inner = Self::block().inner(area);
        Rect {
            height: inner.height.min(1),
            ..inner
        }
    }
}

impl Component for Sidebar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Self::block();
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let muted = Style::default().fg(Color::Gray);
        let toggle_style = Style::default().fg(Color::DarkGray);

        let header = if self.expanded {
            Paragraph::new(Line::from(vec![
                Span::styled("Menu", Style::default().add_modifier(Modifier::BOLD)),
            ]))
        } else {
            Paragraph::new("")
        };
        let toggle_rect = Self::toggle_area(area);
        frame.render_widget(header, toggle_rect);
        let (glyph, alignment) = if self.expanded {
            (CLOSE_GLYPH, Alignment::Right)
        } else {
            (OPEN_GLYPH, Alignment::Center)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(glyph, toggle_style)).alignment(alignment),
            toggle_rect,
        );

        // One blank row after the header, then one blank row between entries
        let mut nav_lines = Vec::new();
        for (icon, label) in NAV_ITEMS {
            nav_lines.push(Line::default());
            if self.expanded {
                nav_lines.push(Line::from(vec![
                    Span::raw(icon),
                    Span::raw("  "),
                    Span::raw(label),
                ]));
            } else {
                nav_lines.push(Line::from(icon).alignment(Alignment::Center));
            }
        }
        let nav_area = Rect {
            y: inner.y + 1,
            height: inner.height.saturating_sub(1),
            ..inner
        };
        frame.render_widget(Paragraph::new(nav_lines).style(muted), nav_area);

        if self.expanded && inner.height > 1 {
            let footer_area = Rect {
                y: inner.bottom() - 1,
                height: 1,
                ..inner
            };
            frame.render_widget(
                Paragraph::new(FOOTER).style(Style::default().fg(Color::DarkGray)),
                footer_area,
            );
        }
    }
}
