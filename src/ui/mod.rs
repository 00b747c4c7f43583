//! # UI Module
//!
//! The terminal rendition of the passport guide page.
//!
//! ## Components
//!
//! - [`App`] - Page state: scroll position, widgets, theme, chat
//! - [`mod@render`] - Drawing the TUI
//! - [`input`] - Key and mouse handling
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ Title                        [☰ Menu] [♿ Accessibility] │
//! ├──────────────────────────────────────────────────────────┤
//! │                                    ┌──────────────────┐  │
//! │   Page sections                    │ Sections /       │  │
//! │   FAQ accordion                    │ Accessibility    │  │
//! │                           ┌────────┴──────────────────┤  │
//! │                           │ Chat window               │  │
//! │                           └───────────────────────────┘  │
//! ├──────────────────────────────────────────────────────────┤
//! │ key hints                          [▲ Top] [💬 Ask us]   │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod chat;
pub mod input;
pub mod layout;
pub mod page;
pub mod render;
pub mod scroll;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use input::handle_event;
pub use render::render;
