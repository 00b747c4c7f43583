use crate::faq::FaqTable;
use crate::settings::{DarkModeSetting, MemoryStorage, SettingsStorage};
use crate::ui::chat::ChatSession;
use crate::ui::layout::ScreenAreas;
use crate::ui::page::{Page, PageLayout};
use crate::ui::scroll::ScrollState;
use crate::ui::theme::Theme;
use crate::ui::widgets::{Accordion, Dropdown, Panel};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Entries of the accessibility dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessibilityAction {
    ToggleDarkMode,
    ScrollToTop,
    NextSection,
    ScrollToBottom,
}

impl AccessibilityAction {
    pub const ALL: [AccessibilityAction; 4] = [
        AccessibilityAction::ToggleDarkMode,
        AccessibilityAction::ScrollToTop,
        AccessibilityAction::NextSection,
        AccessibilityAction::ScrollToBottom,
    ];

    pub fn label(self, dark_mode: bool) -> &'static str {
        match self {
            AccessibilityAction::ToggleDarkMode if dark_mode => "☀ Light mode",
            AccessibilityAction::ToggleDarkMode => "☾ Dark mode",
            AccessibilityAction::ScrollToTop => "⤒ Scroll to top",
            AccessibilityAction::NextSection => "↓ Next section",
            AccessibilityAction::ScrollToBottom => "⤓ Scroll to bottom",
        }
    }
}

pub struct App {
    pub page: Page,
    pub faq: FaqTable,
    pub layout: PageLayout,
    pub areas: ScreenAreas,
    pub scroll: ScrollState,
    pub accordion: Accordion,
    /// Accordion item highlighted for keyboard toggling.
    pub accordion_cursor: usize,
    pub nav_menu: Dropdown,
    pub accessibility: Dropdown,
    pub chat: ChatSession,
    pub dark_mode: bool,
    pub should_quit: bool,
    settings: DarkModeSetting<Box<dyn SettingsStorage>>,
    screen: Rect,
}

impl App {
    pub fn new(
        faq: FaqTable,
        storage: Box<dyn SettingsStorage>,
        reply_delay: Duration,
    ) -> Self {
        let page = Page::passport_guide();
        let settings = DarkModeSetting::new(storage);
        let dark_mode = settings.get();
        let accordion = Accordion::new(page.accordion_len());
        let nav_menu = Dropdown::new(page.sections.len());

        Self {
            page,
            faq,
            layout: PageLayout::default(),
            areas: ScreenAreas::default(),
            scroll: ScrollState::new(),
            accordion,
            accordion_cursor: 0,
            nav_menu,
            accessibility: Dropdown::new(AccessibilityAction::ALL.len()),
            chat: ChatSession::new(reply_delay),
            dark_mode,
            should_quit: false,
            settings,
            screen: Rect::default(),
        }
    }

    /// An app over the built-in table with throwaway settings.
    pub fn in_memory() -> Self {
        Self::new(
            FaqTable::builtin().clone(),
            Box::new(MemoryStorage::new()),
            Duration::ZERO,
        )
    }

    pub fn theme(&self) -> &'static Theme {
        Theme::for_mode(self.dark_mode)
    }

    /// Recompute geometry and page wrapping for a terminal size.
    pub fn resize(&mut self, screen: Rect) {
        self.screen = screen;
        self.relayout();
    }

    fn relayout(&mut self) {
        self.areas = ScreenAreas::compute(
            self.screen,
            self.page.sections.len(),
            AccessibilityAction::ALL.len(),
        );
        self.layout = PageLayout::build(&self.page, &self.accordion, self.areas.page_width());
        self.scroll
            .set_bounds(self.layout.height(), self.areas.page_height());
    }

    /// Advance time: deliver due chat replies and step scroll animation.
    pub fn tick(&mut self, now: Instant) {
        self.chat.deliver_due(now, &self.faq);
        self.scroll.tick();
    }

    /// Whether something is changing without input (faster redraws).
    pub fn is_busy(&self) -> bool {
        self.scroll.is_animating() || self.chat.has_pending()
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.settings.set(self.dark_mode);
        info!(
            "Switched to {} mode",
            if self.dark_mode { "dark" } else { "light" }
        );
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll.scroll_to_top();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll.scroll_to_bottom();
    }

    pub fn scroll_to_next_section(&mut self) {
        self.scroll.scroll_to_next_section(&self.layout.section_tops);
    }

    /// Smoothly scroll to a section by index.
    pub fn go_to_section(&mut self, index: usize) {
        match self.layout.section_tops.get(index) {
            Some(&top) => {
                if let Some(section) = self.page.sections.get(index) {
                    debug!("Jumping to #{}", section.id);
                }
                self.scroll.scroll_to(top);
            }
            None => warn!("Section {} not found", index),
        }
    }

    pub fn toggle_nav_menu(&mut self) {
        self.nav_menu.toggle();
    }

    /// Follow the highlighted navigation link; the menu closes.
    pub fn activate_nav_link(&mut self) {
        let index = self.nav_menu.selected();
        self.go_to_section(index);
        self.nav_menu.close();
    }

    pub fn toggle_accessibility_menu(&mut self) {
        self.accessibility.toggle();
    }

    pub fn activate_accessibility_item(&mut self) {
        let Some(&action) = AccessibilityAction::ALL.get(self.accessibility.selected()) else {
            warn!("Accessibility item {} not found", self.accessibility.selected());
            return;
        };
        self.perform(action);
    }

    pub fn perform(&mut self, action: AccessibilityAction) {
        match action {
            AccessibilityAction::ToggleDarkMode => self.toggle_dark_mode(),
            AccessibilityAction::ScrollToTop => self.scroll_to_top(),
            AccessibilityAction::NextSection => self.scroll_to_next_section(),
            AccessibilityAction::ScrollToBottom => self.scroll_to_bottom(),
        }
    }

    /// Toggle an accordion item; others close. Re-wraps the page.
    pub fn toggle_accordion(&mut self, index: usize) {
        self.accordion.toggle(index);
        if index < self.accordion.len() {
            self.accordion_cursor = index;
        }
        self.relayout();
    }

    pub fn accordion_next(&mut self) {
        if !self.accordion.is_empty() {
            self.accordion_cursor = (self.accordion_cursor + 1) % self.accordion.len();
            self.reveal_accordion_cursor();
        }
    }

    pub fn accordion_previous(&mut self) {
        if !self.accordion.is_empty() {
            self.accordion_cursor = self
                .accordion_cursor
                .checked_sub(1)
                .unwrap_or(self.accordion.len() - 1);
            self.reveal_accordion_cursor();
        }
    }

    fn reveal_accordion_cursor(&mut self) {
        if let Some(&line) = self.layout.accordion_headers.get(self.accordion_cursor) {
            self.scroll.reveal(line);
        }
    }

    pub fn open_chat(&mut self) {
        self.chat.open();
    }

    pub fn close_chat(&mut self) {
        self.chat.close();
    }

    pub fn send_chat_message(&mut self, now: Instant) -> bool {
        self.chat.submit(now)
    }

    pub fn settings(&self) -> &DarkModeSetting<Box<dyn SettingsStorage>> {
        &self.settings
    }
}
