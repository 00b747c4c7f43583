//! Application state tests
//!
//! Mouse interaction (click-outside closing, triggers, accordion headers),
//! settings persistence through the app, and rendering smoke tests.

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use passport_helper::faq::FaqTable;
use passport_helper::settings::JsonFileStorage;
use passport_helper::ui::widgets::Panel;
use passport_helper::ui::{handle_event, render, App};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn create_test_app() -> App {
    let mut app = App::in_memory();
    app.resize(Rect::new(0, 0, 100, 30));
    app
}

fn click(app: &mut App, column: u16, row: u16) {
    let event = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    });
    handle_event(app, &event, Instant::now());
}

fn click_rect(app: &mut App, rect: Rect) {
    click(app, rect.x + 1, rect.y);
}

#[test]
fn test_accessibility_trigger_toggles() {
    let mut app = create_test_app();
    let trigger = app.areas.accessibility_trigger;
    click_rect(&mut app, trigger);
    assert!(app.accessibility.is_active());
    click_rect(&mut app, trigger);
    assert!(!app.accessibility.is_active());
}

#[test]
fn test_accessibility_closes_on_click_outside() {
    let mut app = create_test_app();
    app.toggle_accessibility_menu();
    // Inside the dropdown border: stays open
    let dropdown = app.areas.accessibility_dropdown;
    click(&mut app, dropdown.x, dropdown.y);
    assert!(app.accessibility.is_active());

    let body_row = app.areas.body.y + 3;
    click(&mut app, 2, body_row);
    assert!(!app.accessibility.is_active());
}

#[test]
fn test_accessibility_item_click() {
    let mut app = create_test_app();
    app.toggle_accessibility_menu();
    let dropdown = app.areas.accessibility_dropdown;
    // Row 0 inside the border is "Dark mode"
    click(&mut app, dropdown.x + 2, dropdown.y + 1);
    assert!(app.dark_mode);
    assert!(app.accessibility.is_active());
}

#[test]
fn test_chat_button_opens_and_outside_click_closes() {
    let mut app = create_test_app();
    let button = app.areas.chat_button;
    click_rect(&mut app, button);
    assert!(app.chat.is_open());

    // Clicking the button again or inside the window keeps it open
    click_rect(&mut app, button);
    let modal = app.areas.chat_modal;
    click(&mut app, modal.x + 2, modal.y + 2);
    assert!(app.chat.is_open());

    click(&mut app, 1, 1);
    assert!(!app.chat.is_open());
}

#[test]
fn test_nav_link_click() {
    let mut app = create_test_app();
    let trigger = app.areas.menu_trigger;
    click_rect(&mut app, trigger);
    assert!(app.nav_menu.is_active());

    let dropdown = app.areas.nav_dropdown;
    click(&mut app, dropdown.x + 2, dropdown.y + 1 + 3);
    assert!(!app.nav_menu.is_active());
    assert_eq!(
        app.scroll.target(),
        app.layout.section_tops[3].min(app.scroll.max_offset())
    );
}

#[test]
fn test_accordion_header_click() {
    let mut app = create_test_app();
    app.scroll.scroll_by(isize::MAX);
    let header_line = app.layout.accordion_headers[1];
    let offset = app.scroll.offset();
    assert!(header_line >= offset, "header should be on screen");

    let row = app.areas.body.y + 1 + (header_line - offset) as u16;
    let column = app.areas.body.x + 3;
    click(&mut app, column, row);
    assert!(app.accordion.is_open(1));
}

#[test]
fn test_scroll_top_button_click() {
    let mut app = create_test_app();
    app.scroll.scroll_by(20);
    assert!(app.scroll.show_scroll_top_button());
    let button = app.areas.scroll_top_button;
    click_rect(&mut app, button);
    assert_eq!(app.scroll.target(), 0);
}

#[test]
fn test_mouse_wheel_scrolls() {
    let mut app = create_test_app();
    let event = Event::Mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 5,
        row: 5,
        modifiers: KeyModifiers::empty(),
    });
    handle_event(&mut app, &event, Instant::now());
    assert_eq!(app.scroll.offset(), 3);
}

#[test]
fn test_resize_event_rewraps() {
    let mut app = create_test_app();
    let wide = app.layout.height();
    handle_event(&mut app, &Event::Resize(40, 30), Instant::now());
    assert!(app.layout.height() > wide);
    assert_eq!(app.areas.footer.width, 40);
}

#[test]
fn test_dark_mode_persisted_between_runs() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("storage.json");

    let mut first = App::new(
        FaqTable::builtin().clone(),
        Box::new(JsonFileStorage::at(path.clone())),
        Duration::ZERO,
    );
    assert!(!first.dark_mode);
    first.toggle_dark_mode();

    let second = App::new(
        FaqTable::builtin().clone(),
        Box::new(JsonFileStorage::at(path)),
        Duration::ZERO,
    );
    assert!(second.dark_mode);
    assert_eq!(second.theme().name, "Dark");
}

#[test]
fn test_render_menu_and_chat() {
    let mut app = create_test_app();
    app.toggle_nav_menu();
    app.open_chat();
    app.chat.input = "How long is processing?".to_string();
    app.send_chat_message(Instant::now());
    app.tick(Instant::now());
    app.toggle_accordion(0);

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| render(f, &app)).unwrap();

    let buffer = terminal.backend().buffer().clone();
    let text: String = buffer
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(text.contains("Passport Assistant"));
    assert!(text.contains("Sections"));
}

#[test]
fn test_render_tiny_terminal() {
    let mut app = App::in_memory();
    app.resize(Rect::new(0, 0, 12, 6));
    app.open_chat();
    let mut terminal = Terminal::new(TestBackend::new(12, 6)).unwrap();
    terminal.draw(|f| render(f, &app)).unwrap();
}

#[test]
fn test_render_accessibility_labels_follow_mode() {
    let mut app = create_test_app();
    app.toggle_accessibility_menu();
    app.toggle_dark_mode();

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| render(f, &app)).unwrap();

    let text: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(text.contains("Light mode"));
    assert!(!text.contains("Dark mode"));
}

#[test]
fn test_render_chat_follows_newest_message() {
    let mut app = create_test_app();
    app.open_chat();
    for i in 1..=12 {
        app.chat.input = format!("message {:02}", i);
        app.send_chat_message(Instant::now());
        app.tick(Instant::now());
    }
    assert_eq!(app.chat.log.len(), 24);

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| render(f, &app)).unwrap();

    let text: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(text.contains("message 12"));
    assert!(!text.contains("message 01"));
}
