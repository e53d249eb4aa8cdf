//! # Aurora Background
//!
//! Slow colour wash painted under every other region. The background drifts
//! through three dark tints and loops every [`CYCLE_SECS`] seconds.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::tui::component::Component;

/// Seconds for one full loop through all tints.
pub const CYCLE_SECS: f32 = 25.0;

/// Teal, violet, and green washes over the base gradient.
const TINTS: [(u8, u8, u8); 3] = [(0x0b, 0x2a, 0x30), (0x2a, 0x14, 0x34), (0x06, 0x2c, 0x22)];

pub struct Aurora {
    /// Seconds since startup. Ignored when `animate` is false.
    pub elapsed_secs: f32,
    pub animate: bool,
}

impl Aurora {
    pub fn new(elapsed_secs: f32, animate: bool) -> Self {
        Self {
            elapsed_secs,
            animate,
        }
    }

    /// Background colour at `elapsed_secs` into the loop.
    pub fn tint_at(elapsed_secs: f32) -> Color {
        let segment_len = CYCLE_SECS / TINTS.len() as f32;
        let t = elapsed_secs.rem_euclid(CYCLE_SECS) / segment_len;
        let index = (t.floor() as usize).min(TINTS.len() - 1);
        let frac = t - index as f32;

        let from = TINTS[index];
        let to = TINTS[(index + 1) % TINTS.len()];
        Color::Rgb(
            lerp(from.0, to.0, frac),
            lerp(from.1, to.1, frac),
            lerp(from.2, to.2, frac),
        )
    }

    pub fn color(&self) -> Color {
        if self.animate {
            Self::tint_at(self.elapsed_secs)
        } else {
            Self::tint_at(0.0)
        }
    }
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    let t = t.clamp(0.0, 1.0);
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

impl Component for Aurora {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let wash = Block::new().style(Style::default().bg(self.color()).fg(Color::White));
        frame.render_widget(wash, area);
    }
}
