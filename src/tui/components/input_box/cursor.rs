//! Cursor position and horizontal scrolling for the single-line InputBox.
//!
//! `CursorState` owns the cursor byte offset and the first visible byte.
//! All methods accept `buffer: &str` explicitly; the text is owned by
//! `InputBox`.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cursor and scroll state, separated from the text buffer.
#[derive(Debug, Default)]
pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Byte offset of the first visible character
    pub scroll: usize,
}

impl CursorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the cursor at the end of `buffer`, scrolled back to the start.
    pub fn reset_to_end(&mut self, buffer: &str) {
        self.pos = buffer.len();
        self.scroll = 0;
    }

    /// Move `scroll` so the cursor cell fits within `width` columns.
    pub fn update_scroll(&mut self, buffer: &str, width: u16) {
        let width = width as usize;
        if width == 0 {
            self.scroll = self.pos;
            return;
        }
        if self.pos < self.scroll {
            self.scroll = self.pos;
        }
        // Leave one column free for the cursor itself
        while self.scroll < self.pos && buffer[self.scroll..self.pos].width() >= width {
            self.scroll = next_char_boundary(buffer, self.scroll);
        }
    }

    /// Visible slice of `buffer` starting at `scroll`, at most `width` columns.
    pub fn visible<'b>(&self, buffer: &'b str, width: u16) -> &'b str {
        let tail = &buffer[self.scroll..];
        let mut used = 0usize;
        let mut end = tail.len();
        for (i, c) in tail.char_indices() {
            let w = c.width().unwrap_or(0);
            if used + w > width as usize {
                end = i;
                break;
            }
            used += w;
        }
        &tail[..end]
    }

    /// Column of the cursor relative to the start of the visible text.
    pub fn column(&self, buffer: &str) -> u16 {
        buffer[self.scroll..self.pos].width() as u16
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
