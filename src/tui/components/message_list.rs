//! # MessageList Component
//!
//! Scrollable view of the conversation.
//!
//! ## Responsibilities
//!
//! - Place each bubble: user messages hug the right edge, assistant
//!   messages the left
//! - Keep the newest message in view unless the user scrolled away
//! - Cache bubble sizes so only new messages are measured each frame
//!
//! ## Architecture
//!
//! `MessageList` is a transient component (created each frame) that wraps
//! `&'a mut MessageListState` (persistent state) and `&'a Conversation` (props).
//! Messages are immutable once appended, so a cached size stays valid until
//! the panel width changes.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::message::{Conversation, Sender};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::MessageBubble;
use crate::tui::event::TuiEvent;

/// Blank rows between consecutive bubbles.
const BUBBLE_GAP: u16 = 1;

/// Layout and scroll state for the message list.
/// Must be persisted in the parent TuiState.
pub struct MessageListState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Cached layout measurements
    pub layout: LayoutCache,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::new(),
            stick_to_bottom: true, // Start attached to bottom
            viewport_height: 0,
        }
    }

    fn max_scroll(&self) -> u16 {
        self.layout
            .total_height()
            .saturating_sub(self.viewport_height)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.max_scroll();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Clamp scroll and re-engage auto-scroll if the user has reached the bottom.
    pub fn repin_if_at_bottom(&mut self) {
        let max_y = self.max_scroll();
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

/// Scrollable conversation view component.
/// Created fresh each frame with references to state and data.
pub struct MessageList<'a> {
    pub state: &'a mut MessageListState,
    pub conversation: &'a Conversation,
}

impl<'a> MessageList<'a> {
    pub fn new(state: &'a mut MessageListState, conversation: &'a Conversation) -> Self {
        Self {
            state,
            conversation,
        }
    }
}

impl<'a> Component for MessageList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        let messages = self.conversation.messages();

        // 1. Measure any messages not yet in the cache
        let layout = &mut self.state.layout;
        let reusable = layout.reusable_count(messages.len(), content_width);
        layout.truncate(reusable);
        for message in messages.iter().skip(layout.widths.len()) {
            let width = MessageBubble::bubble_width(&message.text, content_width);
            let height = MessageBubble::calculate_height(&message.text, width);
            layout.widths.push(width);
            layout.heights.push(height + BUBBLE_GAP);
        }
        layout.rebuild_prefix_heights();
        layout.update_metadata(messages.len(), content_width);

        let total_height = self.state.layout.total_height();

        // 2. Clamp scroll offset to prevent overscrolling past content
        self.state.viewport_height = area.height;
        if !self.state.stick_to_bottom {
            self.state.clamp_scroll();
        }

        let scroll_offset = self.state.scroll_state.offset().y;
        let visible_range = self.state.layout.visible_range(scroll_offset, area.height);

        // 3. Render visible bubbles into a ScrollView
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for i in visible_range {
            let message = &messages[i];
            let top = self.state.layout.top_of(i);
            let width = self.state.layout.widths[i];
            let height = self.state.layout.heights[i].saturating_sub(BUBBLE_GAP);
            let x = match message.sender {
                Sender::User => content_width.saturating_sub(width),
                Sender::Assistant => 0,
            };
            scroll_view.render_widget(
                MessageBubble::new(message),
                Rect::new(x, top, width, height),
            );
        }

        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// EventHandler lives on `MessageListState` because `MessageList` is rebuilt
/// every frame and cannot hold the scroll position.
impl EventHandler for MessageListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
            }
            _ => {}
        }
        None
    }
}

/// Cached bubble sizes, indexed like the conversation.
pub struct LayoutCache {
    /// Bubble widths
    pub widths: Vec<u16>,
    /// Slot heights (bubble + gap)
    pub heights: Vec<u16>,
    pub prefix_heights: Vec<u16>,
    message_count: usize,
    content_width: u16,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutCache {
    pub fn new() -> Self {
        Self {
            widths: Vec::new(),
            heights: Vec::new(),
            prefix_heights: Vec::new(),
            message_count: 0,
            content_width: 0,
        }
    }

    /// How many cached entries are still valid for this frame.
    pub fn reusable_count(&self, message_count: usize, content_width: u16) -> usize {
        if self.content_width != content_width || message_count < self.message_count {
            return 0;
        }
        self.heights.len().min(message_count)
    }

    pub fn truncate(&mut self, len: usize) {
        self.widths.truncate(len);
        self.heights.truncate(len);
    }

    pub fn update_metadata(&mut self, message_count: usize, content_width: u16) {
        self.message_count = message_count;
        self.content_width = content_width;
    }

    pub fn rebuild_prefix_heights(&mut self) {
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc = acc.saturating_add(h);
                Some(*acc)
            })
            .collect();
    }

    pub fn total_height(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    /// Canvas row where slot `index` begins.
    pub fn top_of(&self, index: usize) -> u16 {
        if index == 0 {
            0
        } else {
            self.prefix_heights[index - 1]
        }
    }

    pub fn visible_range(
        &self,
        scroll_offset: u16,
        viewport_height: u16,
    ) -> std::ops::Range<usize> {
        let buffer = viewport_height / 2;
        let buffered_start = scroll_offset.saturating_sub(buffer);
        let buffered_end = scroll_offset
            .saturating_add(viewport_height)
            .saturating_add(buffer);

        let start = self
            .prefix_heights
            .partition_point(|&end| end <= buffered_start);
        let end = self
            .prefix_heights
            .partition_point(|&end| end < buffered_end)
            .saturating_add(1)
            .min(self.prefix_heights.len());

        start..end.max(start)
    }
}
