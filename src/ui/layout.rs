//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

pub const MENU_TRIGGER_LABEL: &str = " ☰ Menu [m] ";
pub const ACCESSIBILITY_TRIGGER_LABEL: &str = " ♿ Accessibility [a] ";
pub const CHAT_BUTTON_LABEL: &str = " 💬 Ask us [c] ";
pub const SCROLL_TOP_LABEL: &str = " ▲ Top [g] ";

const DROPDOWN_WIDTH: u16 = 28;

/// Where every region of the screen is for a given terminal size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub menu_trigger: Rect,
    pub accessibility_trigger: Rect,
    pub nav_dropdown: Rect,
    pub accessibility_dropdown: Rect,
    pub chat_button: Rect,
    pub scroll_top_button: Rect,
    pub chat_modal: Rect,
}

impl ScreenAreas {
    pub fn compute(area: Rect, nav_items: usize, accessibility_items: usize) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Footer
            ])
            .split(area);
        let (header, body, footer) = (rows[0], rows[1], rows[2]);

        let accessibility_width = label_width(ACCESSIBILITY_TRIGGER_LABEL);
        let menu_width = label_width(MENU_TRIGGER_LABEL);
        let inner_right = header.right().saturating_sub(1);
        let accessibility_trigger = Rect::new(
            inner_right.saturating_sub(accessibility_width),
            header.y + 1,
            accessibility_width,
            1,
        )
        .intersection(header);
        let menu_trigger = Rect::new(
            accessibility_trigger.x.saturating_sub(menu_width + 1),
            header.y + 1,
            menu_width,
            1,
        )
        .intersection(header);

        let nav_dropdown = Rect::new(
            menu_trigger.x,
            body.y,
            DROPDOWN_WIDTH,
            nav_items as u16 + 2,
        )
        .intersection(body);
        let accessibility_dropdown = Rect::new(
            inner_right.saturating_sub(DROPDOWN_WIDTH),
            body.y,
            DROPDOWN_WIDTH,
            accessibility_items as u16 + 2,
        )
        .intersection(body);

        let chat_width = label_width(CHAT_BUTTON_LABEL);
        let chat_button = Rect::new(
            footer.right().saturating_sub(chat_width),
            footer.y,
            chat_width,
            1,
        )
        .intersection(footer);
        let top_width = label_width(SCROLL_TOP_LABEL);
        let scroll_top_button = Rect::new(
            chat_button.x.saturating_sub(top_width + 1),
            footer.y,
            top_width,
            1,
        )
        .intersection(footer);

        let modal_width = (body.width / 2).max(40).min(body.width);
        let modal_height = (body.height / 4 * 3).max(12).min(body.height);
        let chat_modal = Rect::new(
            body.right().saturating_sub(modal_width),
            body.bottom().saturating_sub(modal_height),
            modal_width,
            modal_height,
        );

        Self {
            header,
            body,
            footer,
            menu_trigger,
            accessibility_trigger,
            nav_dropdown,
            accessibility_dropdown,
            chat_button,
            scroll_top_button,
            chat_modal,
        }
    }

    /// Rows of page text visible inside the body border.
    pub fn page_height(&self) -> usize {
        self.body.height.saturating_sub(2) as usize
    }

    /// Columns of page text inside the body border and padding.
    pub fn page_width(&self) -> usize {
        self.body.width.saturating_sub(4) as usize
    }

    /// Page line under a screen position, given the scroll offset.
    pub fn page_line_at(&self, position: Position, offset: usize) -> Option<usize> {
        let inner = Rect::new(
            self.body.x + 1,
            self.body.y + 1,
            self.body.width.saturating_sub(2),
            self.body.height.saturating_sub(2),
        );
        if !inner.contains(position) {
            return None;
        }
        Some(offset + (position.y - inner.y) as usize)
    }
}

fn label_width(label: &str) -> u16 {
    textwrap::core::display_width(label) as u16
}
