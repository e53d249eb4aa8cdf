use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::message::{Message, Sender};
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;
/// Bubbles never exceed this share of the panel width, in percent.
const MAX_WIDTH_PERCENT: u16 = 75;

/// A stateless component that renders one message as a rounded bubble.
///
/// Created fresh each frame by `MessageList`. Placement (left for the
/// assistant, right for the user) is the parent's job; the bubble only
/// picks its colours from the sender and fills the rect it is given.
///
/// [`bubble_width`](Self::bubble_width) and
/// [`calculate_height`](Self::calculate_height) predict the rendered size
/// with `textwrap` options that match `Paragraph` wrapping, so the list can
/// lay out the scroll canvas without rendering first.
#[derive(Clone, Copy)]
pub struct MessageBubble<'a> {
    pub message: &'a Message,
}

impl<'a> MessageBubble<'a> {
    pub fn new(message: &'a Message) -> Self {
        Self { message }
    }

    /// Widest a bubble may be inside a panel of `panel_width` columns.
    pub fn max_width(panel_width: u16) -> u16 {
        (panel_width as u32 * MAX_WIDTH_PERCENT as u32 / 100) as u16
    }

    /// Width of the bubble: snug around short text, capped at the max width.
    pub fn bubble_width(text: &str, panel_width: u16) -> u16 {
        let max = Self::max_width(panel_width);
        let widest_line = text
            .trim()
            .lines()
            .map(|line| line.width())
            .max()
            .unwrap_or(0)
            .min(u16::MAX as usize) as u16;
        (widest_line.max(1) + HORIZONTAL_OVERHEAD).min(max)
    }

    /// Height of the bubble when drawn `bubble_width` columns wide.
    pub fn calculate_height(text: &str, bubble_width: u16) -> u16 {
        let content_width = bubble_width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Degenerate case: too narrow for borders + padding.
            return 1;
        }

        let content = text.trim();
        if content.is_empty() {
            return VERTICAL_OVERHEAD;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines = textwrap::wrap(content, options);
        (lines.len() as u16).max(1) + VERTICAL_OVERHEAD
    }

    pub fn style_for(sender: Sender) -> (Style, Style) {
        match sender {
            Sender::User => (
                Style::default()
                    .fg(Color::Rgb(0xe5, 0xe5, 0xe5))
                    .bg(Color::Rgb(0x11, 0x11, 0x11)),
                Style::default().fg(Color::Rgb(0x3a, 0x3a, 0x3a)),
            ),
            Sender::Assistant => (
                Style::default()
                    .fg(Color::Rgb(0xf3, 0xf4, 0xf6))
                    .bg(Color::Rgb(0x2b, 0x30, 0x3b)),
                Style::default().fg(Color::Rgb(0x55, 0x5c, 0x6b)),
            ),
        }
    }
}

impl<'a> Widget for MessageBubble<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let (style, border_style) = Self::style_for(self.message.sender);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style.bg(style.bg.unwrap_or(Color::Reset)))
            .style(style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.message.text.trim())
            .style(style)
            .wrap(Wrap { trim: true })
            .render(inner_area, buf);
    }
}

impl<'a> Component for MessageBubble<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
