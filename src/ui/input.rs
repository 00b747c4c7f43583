//! # Input Handling
//!
//! Maps terminal events onto [`App`] actions.
//!
//! ## Key Bindings
//!
//! ### Page
//! - `q` / `Q` / `Ctrl+c` - Quit
//! - `j` / `k` / arrows - Scroll by line, `PageUp` / `PageDown` / `Space` by page
//! - `g` / `Home`, `G` / `End` - Scroll to top / bottom
//! - `n` - Scroll to the next section
//! - `d` - Toggle dark mode
//! - `Tab` / `Shift+Tab` - Move between FAQ questions, `Enter` opens/closes one
//! - `m` - Navigation menu, `a` - Accessibility menu, `c` - Chat
//!
//! ### Menus
//! - `j` / `k` / arrows - Move, `Enter` - Choose, `Esc` - Close
//!
//! ### Chat
//! - Type to edit, `Enter` - Send (`Shift+Enter` does nothing), `Esc` - Close
//!
//! ### Mouse
//! Clicking outside an open accessibility menu or chat window closes it.

use crate::ui::app::{AccessibilityAction, App};
use crate::ui::widgets::Panel;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::time::Instant;

const MOUSE_WHEEL_ROWS: isize = 3;

pub fn handle_event(app: &mut App, event: &Event, now: Instant) {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key, now),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Resize(width, height) => app.resize(Rect::new(0, 0, *width, *height)),
        _ => {}
    }
}

fn handle_key(app: &mut App, key: &KeyEvent, now: Instant) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.chat.is_open() {
        handle_chat_key(app, key, now);
    } else if app.accessibility.is_active() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('a') => app.accessibility.close(),
            KeyCode::Down | KeyCode::Char('j') => app.accessibility.next(),
            KeyCode::Up | KeyCode::Char('k') => app.accessibility.previous(),
            KeyCode::Enter => app.activate_accessibility_item(),
            _ => {}
        }
    } else if app.nav_menu.is_active() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => app.nav_menu.close(),
            KeyCode::Down | KeyCode::Char('j') => app.nav_menu.next(),
            KeyCode::Up | KeyCode::Char('k') => app.nav_menu.previous(),
            KeyCode::Enter => app.activate_nav_link(),
            _ => {}
        }
    } else {
        handle_page_key(app, key);
    }
}

fn handle_chat_key(app: &mut App, key: &KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Esc => app.close_chat(),
        KeyCode::Enter if !key.modifiers.contains(KeyModifiers::SHIFT) => {
            app.send_chat_message(now);
        }
        KeyCode::Backspace => app.chat.pop_char(),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.chat.push_char(c);
        }
        _ => {}
    }
}

fn handle_page_key(app: &mut App, key: &KeyEvent) {
    let page_rows = app.areas.page_height().max(1) as isize;

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Down | KeyCode::Char('j') => app.scroll.scroll_by(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll.scroll_by(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll.scroll_by(page_rows),
        KeyCode::PageUp => app.scroll.scroll_by(-page_rows),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.scroll_to_bottom(),
        KeyCode::Char('n') => app.scroll_to_next_section(),
        KeyCode::Char('d') => app.toggle_dark_mode(),
        KeyCode::Char('m') => app.toggle_nav_menu(),
        KeyCode::Char('a') => app.toggle_accessibility_menu(),
        KeyCode::Char('c') => app.open_chat(),
        KeyCode::Tab => app.accordion_next(),
        KeyCode::BackTab => app.accordion_previous(),
        KeyCode::Enter => app.toggle_accordion(app.accordion_cursor),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: &MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => app.scroll.scroll_by(MOUSE_WHEEL_ROWS),
        MouseEventKind::ScrollUp => app.scroll.scroll_by(-MOUSE_WHEEL_ROWS),
        MouseEventKind::Down(MouseButton::Left) => {
            let position = Position::new(mouse.column, mouse.row);
            handle_click(app, position);
            close_on_click_outside(app, position);
        }
        _ => {}
    }
}

/// Act on whatever was clicked.
fn handle_click(app: &mut App, position: Position) {
    let areas = app.areas;

    if app.chat.is_open() && areas.chat_modal.contains(position) {
        return;
    }

    if areas.accessibility_trigger.contains(position) {
        app.toggle_accessibility_menu();
    } else if app.accessibility.is_active() && areas.accessibility_dropdown.contains(position) {
        if let Some(index) = dropdown_row(areas.accessibility_dropdown, position) {
            if let Some(&action) = AccessibilityAction::ALL.get(index) {
                app.accessibility.select(index);
                app.perform(action);
            }
        }
    } else if areas.menu_trigger.contains(position) {
        app.toggle_nav_menu();
    } else if app.nav_menu.is_active() && areas.nav_dropdown.contains(position) {
        if let Some(index) = dropdown_row(areas.nav_dropdown, position) {
            if index < app.nav_menu.len() {
                app.nav_menu.select(index);
                app.activate_nav_link();
            }
        }
    } else if areas.chat_button.contains(position) {
        app.open_chat();
    } else if app.scroll.show_scroll_top_button() && areas.scroll_top_button.contains(position)
    {
        app.scroll_to_top();
    } else if let Some(line) = areas.page_line_at(position, app.scroll.offset()) {
        if let Some(index) = app.layout.accordion_at(line) {
            app.toggle_accordion(index);
        }
    }
}

/// Close the panels that dismiss on clicks elsewhere on the screen.
fn close_on_click_outside(app: &mut App, position: Position) {
    let areas = app.areas;

    let in_accessibility_menu = areas.accessibility_trigger.contains(position)
        || areas.accessibility_dropdown.contains(position);
    if app.accessibility.is_active() && !in_accessibility_menu {
        app.accessibility.close();
    }

    let in_chat =
        areas.chat_modal.contains(position) || areas.chat_button.contains(position);
    if app.chat.is_open() && !in_chat {
        app.close_chat();
    }
}

/// Item row inside a bordered dropdown.
fn dropdown_row(area: Rect, position: Position) -> Option<usize> {
    let first = area.y + 1;
    let last = area.bottom().saturating_sub(1);
    if position.y < first || position.y >= last {
        return None;
    }
    Some((position.y - first) as usize)
}
