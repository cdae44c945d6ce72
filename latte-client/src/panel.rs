//! Menu panel state
//!
//! Pagination over the menu grid and the slide-menu toggle. Cart
//! mutations go through [`crate::MenuStore`]; totals come from
//! [`shared::CartSummary`].

/// Paginated menu panel
#[derive(Debug, Clone)]
pub struct MenuPanel {
    current_page: u32,
    max_page: u32,
    slide_menu_open: bool,
}

impl Default for MenuPanel {
    fn default() -> Self {
        Self {
            current_page: 1,
            max_page: 1,
            slide_menu_open: false,
        }
    }
}

impl MenuPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn max_page(&self) -> u32 {
        self.max_page
    }

    /// Step back one page, clamped at 1
    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Step forward one page, clamped at the discovered maximum
    pub fn next_page(&mut self) {
        if self.current_page < self.max_page {
            self.current_page += 1;
        }
    }

    /// Record the page count discovered by the block renderer
    ///
    /// The current page is pulled back in range if the maximum shrank.
    pub fn set_max_page(&mut self, max_page: u32) {
        self.max_page = max_page.max(1);
        self.current_page = self.current_page.min(self.max_page);
    }

    pub fn slide_menu_open(&self) -> bool {
        self.slide_menu_open
    }

    pub fn toggle_slide_menu(&mut self) {
        self.slide_menu_open = !self.slide_menu_open;
    }
}
