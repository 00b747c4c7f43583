//! Keyboard event handling tests
//!
//! Tests for keyboard input handling including quit keys, menus, the
//! accordion and the chat window.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use passport_helper::faq::FALLBACK_RESPONSE;
use passport_helper::ui::chat::Sender;
use passport_helper::ui::widgets::Panel;
use passport_helper::ui::{handle_event, App};
use ratatui::layout::Rect;
use std::time::Instant;

/// Helper to create a key event
fn key_event(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

fn press(app: &mut App, code: KeyCode) {
    handle_event(app, &key_event(code), Instant::now());
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Helper to create a sized app with in-memory settings and no reply delay
fn create_test_app() -> App {
    let mut app = App::in_memory();
    app.resize(Rect::new(0, 0, 100, 30));
    app
}

#[test]
fn test_quit_with_q_key() {
    let mut app = create_test_app();
    assert!(!app.should_quit);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_quit_with_capital_q_key() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('Q'));
    assert!(app.should_quit);
}

#[test]
fn test_ctrl_c_quits_even_in_chat() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('c'));
    assert!(app.chat.is_open());
    handle_event(
        &mut app,
        &Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Instant::now(),
    );
    assert!(app.should_quit);
}

#[test]
fn test_key_release_is_ignored() {
    let mut app = create_test_app();
    let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty());
    release.kind = KeyEventKind::Release;
    handle_event(&mut app, &Event::Key(release), Instant::now());
    assert!(!app.should_quit);
}

#[test]
fn test_scroll_keys() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Down);
    assert_eq!(app.scroll.offset(), 2);
    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.scroll.offset(), 1);

    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.scroll.target(), app.scroll.max_offset());
    press(&mut app, KeyCode::Char('g'));
    assert_eq!(app.scroll.target(), 0);
}

#[test]
fn test_next_section_key() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.scroll.target(), app.layout.section_tops[1]);
}

#[test]
fn test_dark_mode_key() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('d'));
    assert!(app.dark_mode);
    assert!(app.settings().get());
    press(&mut app, KeyCode::Char('d'));
    assert!(!app.dark_mode);
}

#[test]
fn test_accessibility_menu_keys() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('a'));
    assert!(app.accessibility.is_active());

    // Menu captures keys: 'q' does not quit while it is open
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit);

    // First item toggles dark mode
    press(&mut app, KeyCode::Enter);
    assert!(app.dark_mode);

    press(&mut app, KeyCode::Esc);
    assert!(!app.accessibility.is_active());
}

#[test]
fn test_nav_menu_keys() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('m'));
    assert!(app.nav_menu.is_active());
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert!(!app.nav_menu.is_active());
    assert_eq!(app.scroll.target(), app.layout.section_tops[2]);
}

#[test]
fn test_accordion_keys() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.accordion_cursor, 1);
    press(&mut app, KeyCode::Enter);
    assert!(app.accordion.is_open(1));

    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::Enter);
    assert!(app.accordion.is_open(0));
    assert!(!app.accordion.is_open(1));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.accordion.open_item(), None);
}

#[test]
fn test_chat_send_and_reply() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('c'));
    type_text(&mut app, "Is my passport still valid?");
    assert_eq!(app.chat.input, "Is my passport still valid?");

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.chat.input, "");
    assert_eq!(app.chat.log.len(), 1);

    app.tick(Instant::now());
    let reply = app.chat.log.last().expect("reply delivered");
    assert_eq!(reply.sender, Sender::Bot);
    assert!(reply.text.contains("valid for 10 years"));
}

#[test]
fn test_chat_shift_enter_does_not_send() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('c'));
    type_text(&mut app, "fees");
    handle_event(
        &mut app,
        &Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT)),
        Instant::now(),
    );
    assert!(app.chat.log.is_empty());
    assert_eq!(app.chat.input, "fees");
}

#[test]
fn test_chat_blank_message_rejected() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('c'));
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);
    assert!(app.chat.log.is_empty());
}

#[test]
fn test_chat_captures_page_keys() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('c'));
    type_text(&mut app, "qd");
    assert!(!app.should_quit);
    assert!(!app.dark_mode);
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.chat.input, "q");
    press(&mut app, KeyCode::Esc);
    assert!(!app.chat.is_open());
}

#[test]
fn test_chat_fallback_reply() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('c'));
    type_text(&mut app, "hello there");
    press(&mut app, KeyCode::Enter);
    app.tick(Instant::now());
    assert_eq!(
        app.chat.log.last().map(|m| m.text.as_str()),
        Some(FALLBACK_RESPONSE)
    );
}
