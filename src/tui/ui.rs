//! # Frame Layout
//!
//! Splits the terminal into the regions every component draws into, and
//! answers "what did the user click?" from the same rectangles.
//!
//! ```text
//! ┌────────┬──────────────────────────────────────┐
//! │sidebar │ top bar                              │
//! │        ├──────────────────────────────────────┤
//! │        │ panel                                │
//! │        │   messages / welcome title + input   │
//! │        │   ╭ floating input ────────────╮     │
//! │        │   ╰────────────────────────────╯     │
//! └────────┴──────────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::core::config::{DEFAULT_COLLAPSED_WIDTH, DEFAULT_EXPANDED_WIDTH, ResolvedConfig};
use crate::core::state::{App, WelcomePhase};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::input_box::{
    FLOATING_PLACEHOLDER, INPUT_HEIGHT, WELCOME_PLACEHOLDER,
};
use crate::tui::components::top_bar::TOP_BAR_HEIGHT;
use crate::tui::components::{Aurora, InputBox, MessageList, Sidebar, TopBar, WelcomeScreen};

/// Widest the welcome input gets.
const WELCOME_INPUT_MAX_WIDTH: u16 = 60;
/// Widest the floating bar gets when the sidebar is collapsed.
const FLOATING_MAX_WIDTH: u16 = 80;
/// Rows left free below the floating bar.
const FLOATING_BOTTOM_GAP: u16 = 1;

/// Sidebar column widths for both states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarWidths {
    pub expanded: u16,
    pub collapsed: u16,
}

impl Default for SidebarWidths {
    fn default() -> Self {
        Self {
            expanded: DEFAULT_EXPANDED_WIDTH,
            collapsed: DEFAULT_COLLAPSED_WIDTH,
        }
    }
}

impl SidebarWidths {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            expanded: config.sidebar_expanded_width,
            collapsed: config.sidebar_collapsed_width,
        }
    }

    fn current(self, expanded: bool) -> u16 {
        if expanded { self.expanded } else { self.collapsed }
    }
}

/// Every region of one frame. `None` means the region is not shown in the
/// current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatLayout {
    pub sidebar: Rect,
    pub sidebar_toggle: Rect,
    pub main: Rect,
    pub top_bar: Rect,
    /// Everything below the top bar.
    pub panel: Rect,
    /// Where the message list draws. Excludes the rows under the floating bar.
    pub messages: Rect,
    pub welcome_title: Option<Rect>,
    pub input: Option<Rect>,
    pub send_button: Option<Rect>,
}

/// Clickable targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    SidebarToggle,
    SendButton,
}

impl ChatLayout {
    pub fn compute(
        area: Rect,
        sidebar_expanded: bool,
        widths: SidebarWidths,
        phase: WelcomePhase,
    ) -> Self {
        use Constraint::{Length, Min};

        let sidebar_width = widths.current(sidebar_expanded).min(area.width);
        let [sidebar, main] = Layout::horizontal([Length(sidebar_width), Min(0)]).areas(area);
        let [top_bar, panel] = Layout::vertical([Length(TOP_BAR_HEIGHT), Min(0)]).areas(main);

        let mut layout = Self {
            sidebar,
            sidebar_toggle: Sidebar::toggle_area(sidebar),
            main,
            top_bar,
            panel,
            messages: panel,
            welcome_title: None,
            input: None,
            send_button: None,
        };

        match phase {
            WelcomePhase::Welcome => {
                // Title, one blank row, then the input, centred as a group
                let group_height = 2 + INPUT_HEIGHT;
                let top = panel.y + panel.height.saturating_sub(group_height) / 2;
                let width = panel.width.saturating_sub(4).min(WELCOME_INPUT_MAX_WIDTH);
                let x = panel.x + (panel.width - width) / 2;

                layout.welcome_title =
                    Some(Rect::new(panel.x, top, panel.width, 1).intersection(panel));
                layout.input = Some(Rect::new(x, top + 2, width, INPUT_HEIGHT).intersection(panel));
            }
            WelcomePhase::Transitioning => {}
            WelcomePhase::Conversation => {
                let (x, width) = if sidebar_expanded {
                    (panel.x + 2, panel.width.saturating_sub(4))
                } else {
                    let width = ((u32::from(panel.width) * 9 / 10) as u16).min(FLOATING_MAX_WIDTH);
                    (panel.x + (panel.width - width) / 2, width)
                };
                let reserved = INPUT_HEIGHT + FLOATING_BOTTOM_GAP;
                let y = panel.bottom().saturating_sub(reserved).max(panel.y);

                layout.input = Some(Rect::new(x, y, width, INPUT_HEIGHT).intersection(panel));
                layout.messages = Rect {
                    height: panel.height.saturating_sub(reserved),
                    ..panel
                };
            }
        }

        layout.send_button = layout.input.map(InputBox::send_button_area);
        layout
    }

    /// What sits under the terminal cell `(col, row)`.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<Hit> {
        let position = Position::new(col, row);
        if self.sidebar_toggle.contains(position) {
            Some(Hit::SidebarToggle)
        } else if self.send_button.is_some_and(|b| b.contains(position)) {
            Some(Hit::SendButton)
        } else {
            None
        }
    }
}

/// Draw one full frame. `elapsed_secs` drives the background and the
/// welcome fade-in.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, elapsed_secs: f32) {
    let area = frame.area();
    Aurora::new(elapsed_secs, tui.animate).render(frame, area);

    let layout = ChatLayout::compute(
        area,
        app.ui.sidebar_expanded,
        tui.sidebar_widths,
        app.ui.welcome_phase,
    );

    Sidebar::new(app.ui.sidebar_expanded).render(frame, layout.sidebar);
    TopBar::default().render(frame, layout.top_bar);

    match app.ui.welcome_phase {
        WelcomePhase::Welcome => {
            if let Some(title) = layout.welcome_title {
                WelcomeScreen::new(elapsed_secs).render(frame, title);
            }
            tui.input_box.placeholder = WELCOME_PLACEHOLDER;
        }
        WelcomePhase::Transitioning | WelcomePhase::Conversation => {
            MessageList::new(&mut tui.message_list, &app.conversation)
                .render(frame, layout.messages);
            tui.input_box.placeholder = FLOATING_PLACEHOLDER;
        }
    }

    if let Some(input) = layout.input {
        tui.input_box.render(frame, input);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{app_in_conversation, buffer_text, submit_text};
    use crate::tui::components::sidebar::FOOTER;
    use crate::tui::components::welcome::WELCOME_TITLE;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn area() -> Rect {
        Rect::new(0, 0, 100, 30)
    }

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 5.0)).unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_sidebar_width_follows_toggle() {
        let widths = SidebarWidths::default();
        let expanded = ChatLayout::compute(area(), true, widths, WelcomePhase::Welcome);
        let collapsed = ChatLayout::compute(area(), false, widths, WelcomePhase::Welcome);

        assert_eq!(expanded.sidebar.width, 24);
        assert_eq!(expanded.main.x, 24);
        assert_eq!(collapsed.sidebar.width, 6);
        assert_eq!(collapsed.main.width, 94);
    }

    #[test]
    fn test_top_bar_sits_above_panel() {
        let layout =
            ChatLayout::compute(area(), true, SidebarWidths::default(), WelcomePhase::Welcome);
        assert_eq!(layout.top_bar.height, TOP_BAR_HEIGHT);
        assert_eq!(layout.panel.y, TOP_BAR_HEIGHT);
        assert_eq!(layout.panel.height, 30 - TOP_BAR_HEIGHT);
    }

    #[test]
    fn test_welcome_input_is_centred_under_title() {
        let layout =
            ChatLayout::compute(area(), false, SidebarWidths::default(), WelcomePhase::Welcome);
        let title = layout.welcome_title.unwrap();
        let input = layout.input.unwrap();

        assert_eq!(input.y, title.y + 2);
        assert_eq!(input.width, WELCOME_INPUT_MAX_WIDTH);
        let left_gap = input.x - layout.panel.x;
        let right_gap = layout.panel.right() - input.right();
        assert!(left_gap.abs_diff(right_gap) <= 1);
    }

    #[test]
    fn test_transitioning_has_no_input() {
        let layout = ChatLayout::compute(
            area(),
            true,
            SidebarWidths::default(),
            WelcomePhase::Transitioning,
        );
        assert_eq!(layout.input, None);
        assert_eq!(layout.send_button, None);
        assert_eq!(layout.welcome_title, None);
        assert_eq!(layout.messages, layout.panel);
    }

    #[test]
    fn test_floating_bar_spans_panel_when_sidebar_expanded() {
        let layout = ChatLayout::compute(
            area(),
            true,
            SidebarWidths::default(),
            WelcomePhase::Conversation,
        );
        let input = layout.input.unwrap();
        assert_eq!(input.x, layout.panel.x + 2);
        assert_eq!(input.width, layout.panel.width - 4);
        assert_eq!(input.bottom(), layout.panel.bottom() - FLOATING_BOTTOM_GAP);
        assert!(layout.messages.bottom() <= input.y);
    }

    #[test]
    fn test_floating_bar_centred_and_capped_when_collapsed() {
        let wide = Rect::new(0, 0, 200, 30);
        let layout = ChatLayout::compute(
            wide,
            false,
            SidebarWidths::default(),
            WelcomePhase::Conversation,
        );
        let input = layout.input.unwrap();
        assert_eq!(input.width, FLOATING_MAX_WIDTH);
        let left_gap = input.x - layout.panel.x;
        let right_gap = layout.panel.right() - input.right();
        assert!(left_gap.abs_diff(right_gap) <= 1);
    }

    #[test]
    fn test_hit_test_targets() {
        let layout = ChatLayout::compute(
            area(),
            true,
            SidebarWidths::default(),
            WelcomePhase::Conversation,
        );
        let toggle = layout.sidebar_toggle;
        let send = layout.send_button.unwrap();

        assert_eq!(layout.hit_test(toggle.x, toggle.y), Some(Hit::SidebarToggle));
        assert_eq!(layout.hit_test(send.x, send.y), Some(Hit::SendButton));
        assert_eq!(layout.hit_test(layout.panel.x + 5, layout.panel.y + 5), None);
    }

    #[test]
    fn test_hit_test_no_send_button_while_transitioning() {
        let layout = ChatLayout::compute(
            area(),
            true,
            SidebarWidths::default(),
            WelcomePhase::Transitioning,
        );
        let bottom_right = (layout.panel.right() - 3, layout.panel.bottom() - 2);
        assert_eq!(layout.hit_test(bottom_right.0, bottom_right.1), None);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        for phase in [
            WelcomePhase::Welcome,
            WelcomePhase::Transitioning,
            WelcomePhase::Conversation,
        ] {
            let layout =
                ChatLayout::compute(Rect::new(0, 0, 8, 3), true, SidebarWidths::default(), phase);
            assert!(layout.sidebar.width <= 8);
            if let Some(input) = layout.input {
                assert!(layout.panel.contains(Position::new(input.x, input.y)) || input.is_empty());
            }
        }
    }

    #[test]
    fn test_draw_welcome_phase() {
        let app = App::new();
        let mut tui = TuiState::new(&ResolvedConfig::default());
        let text = draw(&app, &mut tui);

        assert!(text.contains(WELCOME_TITLE));
        assert!(text.contains(WELCOME_PLACEHOLDER));
        assert!(text.contains("New Chat"));
        assert!(text.contains(FOOTER));
    }

    #[test]
    fn test_draw_transitioning_hides_both_inputs() {
        let mut app = App::new();
        submit_text(&mut app, "first question");
        assert_eq!(app.ui.welcome_phase, WelcomePhase::Transitioning);

        let mut tui = TuiState::new(&ResolvedConfig::default());
        let text = draw(&app, &mut tui);

        assert!(text.contains("first question"));
        assert!(!text.contains(WELCOME_TITLE));
        assert!(!text.contains(WELCOME_PLACEHOLDER));
        assert!(!text.contains(FLOATING_PLACEHOLDER));
    }

    #[test]
    fn test_draw_conversation_shows_floating_bar_and_reply() {
        let app = app_in_conversation();
        let mut tui = TuiState::new(&ResolvedConfig::default());
        let text = draw(&app, &mut tui);

        assert!(text.contains("hello"));
        assert!(text.contains("interesting question"));
        assert!(text.contains(FLOATING_PLACEHOLDER));
        assert!(!text.contains(WELCOME_TITLE));
    }

    #[test]
    fn test_draw_collapsed_sidebar_hides_labels() {
        let mut app = App::new();
        update(&mut app, Action::ToggleSidebar);
        let mut tui = TuiState::new(&ResolvedConfig::default());
        let text = draw(&app, &mut tui);

        assert!(!text.contains("New Chat"));
        assert!(!text.contains(FOOTER));
        assert!(text.contains('☰'));
    }
}
