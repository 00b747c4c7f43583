//! Page scroll position, measured in terminal rows.
//!
//! Jumps (top, bottom, next section) set a target that [`ScrollState::tick`]
//! approaches over a few frames; line-by-line scrolling is immediate.

/// A section must start more than this many rows below the current offset to
/// count as the "next" one.
pub const NEXT_SECTION_THRESHOLD: usize = 2;

/// The scroll-to-top button appears once the page is scrolled past this row.
pub const SCROLL_TOP_BUTTON_THRESHOLD: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: usize,
    target: usize,
    content_height: usize,
    viewport_height: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn is_animating(&self) -> bool {
        self.offset != self.target
    }

    /// Update the page and viewport heights, clamping the position.
    pub fn set_bounds(&mut self, content_height: usize, viewport_height: usize) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        let max = self.max_offset();
        self.offset = self.offset.min(max);
        self.target = self.target.min(max);
    }

    /// Move by `delta` rows immediately, cancelling any running animation.
    pub fn scroll_by(&mut self, delta: isize) {
        let next = self.offset.saturating_add_signed(delta).min(self.max_offset());
        self.offset = next;
        self.target = next;
    }

    /// Smoothly scroll so that `line` is at the top of the viewport.
    pub fn scroll_to(&mut self, line: usize) {
        self.target = line.min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_to(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_to(self.max_offset());
    }

    /// Scroll to the first section starting below the current position, or
    /// to the bottom when there is none. Returns the chosen section index.
    pub fn scroll_to_next_section(&mut self, section_tops: &[usize]) -> Option<usize> {
        let threshold = self.offset + NEXT_SECTION_THRESHOLD;
        match section_tops.iter().position(|&top| top > threshold) {
            Some(index) => {
                self.scroll_to(section_tops[index]);
                Some(index)
            }
            None => {
                self.scroll_to_bottom();
                None
            }
        }
    }

    /// Make sure `line` is inside the viewport, scrolling as little as possible.
    pub fn reveal(&mut self, line: usize) {
        if line < self.offset {
            self.scroll_by(-((self.offset - line) as isize));
        } else if self.viewport_height > 0 && line >= self.offset + self.viewport_height {
            let delta = line + 1 - (self.offset + self.viewport_height);
            self.scroll_by(delta as isize);
        }
    }

    /// Advance one animation frame. Returns whether the offset changed.
    pub fn tick(&mut self) -> bool {
        if self.offset == self.target {
            return false;
        }
        let distance = self.offset.abs_diff(self.target);
        let step = distance.div_ceil(3);
        if self.target > self.offset {
            self.offset += step;
        } else {
            self.offset -= step;
        }
        true
    }

    /// Finish any running animation at once.
    pub fn settle(&mut self) {
        self.offset = self.target;
    }

    pub fn show_scroll_top_button(&self) -> bool {
        self.offset > SCROLL_TOP_BUTTON_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(content: usize, viewport: usize) -> ScrollState {
        let mut s = ScrollState::new();
        s.set_bounds(content, viewport);
        s
    }

    #[test]
    fn test_scroll_by_clamps() {
        let mut s = state(100, 20);
        s.scroll_by(-5);
        assert_eq!(s.offset(), 0);
        s.scroll_by(500);
        assert_eq!(s.offset(), 80);
    }

    #[test]
    fn test_bottom_is_max_offset() {
        let mut s = state(100, 20);
        s.scroll_to_bottom();
        s.settle();
        assert_eq!(s.offset(), 80);
    }

    #[test]
    fn test_short_page_cannot_scroll() {
        let mut s = state(10, 20);
        s.scroll_to_bottom();
        s.settle();
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_next_section_skips_sections_within_threshold() {
        let mut s = state(200, 20);
        s.scroll_by(10);
        // 12 is within the threshold of offset 10, 30 is the next one
        assert_eq!(s.scroll_to_next_section(&[0, 12, 30, 60]), Some(2));
        assert_eq!(s.target(), 30);
    }

    #[test]
    fn test_next_section_falls_back_to_bottom() {
        let mut s = state(200, 20);
        s.scroll_by(100);
        assert_eq!(s.scroll_to_next_section(&[0, 50, 90]), None);
        assert_eq!(s.target(), 180);

        let mut empty = state(50, 20);
        assert_eq!(empty.scroll_to_next_section(&[]), None);
        assert_eq!(empty.target(), 30);
    }

    #[test]
    fn test_tick_reaches_target() {
        let mut s = state(200, 20);
        s.scroll_to(90);
        let mut frames = 0;
        while s.tick() {
            frames += 1;
            assert!(frames < 50, "animation did not converge");
        }
        assert_eq!(s.offset(), 90);
        assert!(!s.is_animating());
    }

    #[test]
    fn test_tick_scrolls_up() {
        let mut s = state(200, 20);
        s.scroll_by(60);
        s.scroll_to_top();
        assert!(s.tick());
        assert!(s.offset() < 60);
        s.settle();
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_scroll_top_button_visibility() {
        let mut s = state(200, 20);
        s.scroll_by(SCROLL_TOP_BUTTON_THRESHOLD as isize);
        assert!(!s.show_scroll_top_button());
        s.scroll_by(1);
        assert!(s.show_scroll_top_button());
    }

    #[test]
    fn test_reveal() {
        let mut s = state(200, 20);
        s.reveal(25);
        assert_eq!(s.offset(), 6);
        s.reveal(10);
        assert_eq!(s.offset(), 6);
        s.reveal(2);
        assert_eq!(s.offset(), 2);
    }

    #[test]
    fn test_set_bounds_clamps_position() {
        let mut s = state(200, 20);
        s.scroll_by(150);
        s.set_bounds(100, 20);
        assert_eq!(s.offset(), 80);
        assert_eq!(s.target(), 80);
    }
}
