//! Visibility state for the page's toggleable widgets.

use tracing::warn;

/// A widget whose only state is whether it is shown.
pub trait Panel {
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);

    fn toggle(&mut self) {
        let active = self.is_active();
        self.set_active(!active);
    }

    fn open(&mut self) {
        self.set_active(true);
    }

    fn close(&mut self) {
        self.set_active(false);
    }
}

/// A plain on/off panel, e.g. the chat modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toggle {
    active: bool,
}

impl Panel for Toggle {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// A dropdown list with a highlighted item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    active: bool,
    selected: usize,
    len: usize,
}

impl Dropdown {
    pub fn new(len: usize) -> Self {
        Self {
            active: false,
            selected: 0,
            len,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.selected = index;
        } else {
            warn!("Dropdown item {} out of range ({} items)", index, self.len);
        }
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.selected = (self.selected + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            if self.selected > 0 {
                self.selected -= 1;
            } else {
                self.selected = self.len - 1;
            }
        }
    }
}

impl Panel for Dropdown {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
        if active {
            self.selected = 0;
        }
    }
}

/// An accordion group: at most one item is open at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
    len: usize,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { open: None, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Open `index` and close every other item, or close it if it was open.
    /// Returns whether the item is open afterwards.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.len {
            warn!("Accordion item {} not found ({} items)", index, self.len);
            return false;
        }
        let was_open = self.is_open(index);
        self.open = None;
        if !was_open {
            self.open = Some(index);
        }
        !was_open
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }
}
