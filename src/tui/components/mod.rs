//! # TUI Components
//!
//! This module contains all UI components for the chat view.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components built fresh each frame from the data they need:
//! - `Aurora`: Animated backdrop behind everything else
//! - `Sidebar`: Navigation panel with its toggle header
//! - `TopBar`: Brand header over the main column
//! - `WelcomeScreen`: Greeting shown before the first message
//! - `MessageBubble`: Individual conversation message rendering
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `InputBox`: Single-line text input with a send button
//! - `MessageList`: Scrollable conversation view with layout caching
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as struct fields, not by reaching into
//! `App`. The frame layout in `ui.rs` decides what each one gets.
//!
//! ```rust,ignore
//! Sidebar::new(app.ui.sidebar_expanded).render(frame, layout.sidebar);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── aurora.rs        (Background tint)
//! ├── sidebar.rs       (Collapsible navigation)
//! ├── top_bar.rs       (Brand header)
//! ├── welcome.rs       (Welcome heading)
//! ├── message.rs       (Single message bubble)
//! ├── message_list.rs  (Scrollable message container)
//! └── input_box/       (Text input and send button)
//! ```

pub mod aurora;
pub mod input_box;
pub mod message;
pub mod message_list;
pub mod sidebar;
pub mod top_bar;
pub mod welcome;

pub use aurora::Aurora;
pub use input_box::{InputBox, InputEvent};
pub use message_list::{MessageList, MessageListState};
pub use sidebar::Sidebar;
pub use top_bar::TopBar;
pub use welcome::WelcomeScreen;
