//! # InputBox Component
//!
//! Single-line text input with a send button, used both centred on the
//! welcome screen and as the floating bar once the conversation starts.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter)
//! - Show a placeholder when empty
//!
//! ## State Management
//!
//! The buffer mirrors `UiState::input_draft` in the core. Edits happen here
//! first and are reported as `ContentChanged`; the parent forwards the new
//! text to the core and calls [`InputBox::sync`] after every update so a
//! cleared draft clears the box too.

mod cursor;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::top_bar::ACCENT;
use crate::tui::event::TuiEvent;

use cursor::{CursorState, next_char_boundary, prev_char_boundary};

/// Rows taken by the bordered input.
pub const INPUT_HEIGHT: u16 = 3;
/// Columns taken by the send button, including its left gap.
const SEND_BUTTON_WIDTH: u16 = 4;
/// Border (1) + padding (1) on each side
const SIDE_OVERHEAD: u16 = 2;

pub const WELCOME_PLACEHOLDER: &str = "Ask anything...";
pub const FLOATING_PLACEHOLDER: &str = "Type a message…";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User pressed Enter
    Submit,
    /// Text content changed
    ContentChanged,
    /// Cursor moved without changing the text
    CursorMoved,
}

/// Text input component.
///
/// # Props
///
/// - `placeholder`: hint shown while the buffer is empty
///
/// # State
///
/// - `buffer`: Current text being typed
/// - `cursor`: Cursor position and horizontal scroll (see `CursorState`)
pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Placeholder text (Prop)
    pub placeholder: &'static str,
    cursor: CursorState,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            placeholder: WELCOME_PLACEHOLDER,
            cursor: CursorState::new(),
        }
    }

    /// Adopt `draft` if it differs from the buffer, cursor at the end.
    pub fn sync(&mut self, draft: &str) {
        if self.buffer != draft {
            self.buffer = draft.to_string();
            self.cursor.reset_to_end(&self.buffer);
        }
    }

    /// Cursor byte offset in `buffer`.
    pub fn cursor_pos(&self) -> usize {
        self.cursor.pos
    }

    /// Region of the send button inside an input drawn at `area`.
    pub fn send_button_area(area: Rect) -> Rect {
        let inner = Self::block().inner(area);
        let width = SEND_BUTTON_WIDTH.min(inner.width);
        Rect {
            x: inner.right().saturating_sub(width),
            y: inner.y,
            width,
            height: inner.height.min(1),
        }
    }

    /// Region where the text itself is drawn.
    fn text_area(area: Rect) -> Rect {
        let inner = Self::block().inner(area);
        Rect {
            x: inner.x + 1,
            y: inner.y,
            width: inner
                .width
                .saturating_sub(SIDE_OVERHEAD)
                .saturating_sub(SEND_BUTTON_WIDTH),
            height: inner.height.min(1),
        }
    }

    fn block() -> Block<'static> {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Self::block().style(Style::default().bg(Color::Rgb(0x10, 0x12, 0x16)));
        frame.render_widget(block, area);

        let text_area = Self::text_area(area);
        self.cursor.update_scroll(&self.buffer, text_area.width);

        let text = if self.buffer.is_empty() {
            Paragraph::new(Span::styled(self.placeholder, Style::default().fg(Color::DarkGray)))
        } else {
            Paragraph::new(self.cursor.visible(&self.buffer, text_area.width))
                .style(Style::default().fg(Color::White))
        };
        frame.render_widget(text, text_area);

        let button = Paragraph::new(Span::styled(
            " ➤ ",
            Style::default()
                .fg(ACCENT)
                .bg(Color::Rgb(0x0b, 0x33, 0x28))
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(ratatui::layout::Alignment::Right);
        frame.render_widget(button, Self::send_button_area(area));

        if text_area.width > 0 && text_area.height > 0 {
            let col = self.cursor.column(&self.buffer).min(text_area.width - 1);
            frame.set_cursor_position((text_area.x + col, text_area.y));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                // Single-line input: newlines become spaces
                let c = if *c == '\n' || *c == '\r' { ' ' } else { *c };
                self.buffer.insert(self.cursor.pos, c);
                self.cursor.pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                let text: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                self.buffer.insert_str(self.cursor.pos, &text);
                self.cursor.pos += text.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor.pos > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                InputEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor.pos < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorHome => (self.cursor.pos != 0).then(|| {
                self.cursor.pos = 0;
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorEnd => (self.cursor.pos != self.buffer.len()).then(|| {
                self.cursor.pos = self.buffer.len();
                InputEvent::CursorMoved
            }),
            TuiEvent::Submit => Some(InputEvent::Submit),
            _ => None,
        }
    }
}
