//! Client-side state container
//!
//! Replaces ambient global store access: the slices the menu screens
//! consume and the actions they dispatch live behind this one struct,
//! injected into whatever owns the UI. Single-threaded event-driven
//! state, passed by reference; no locking.

use shared::{CartSummary, FilledPosition, Menu, MenuCategory, OrderLine};

/// Shared state for the menu editor and menu panel
#[derive(Debug, Clone, Default)]
pub struct MenuStore {
    /// Category reference data for the editor dropdown
    pub menu_categories: Vec<MenuCategory>,
    /// Grid placements already taken by existing menus
    pub filled_positions: Vec<FilledPosition>,
    /// All registered menus
    pub menus: Vec<Menu>,
    /// Cart order lines, client-local pending checkout
    pub order_lines: Vec<OrderLine>,
}

impl MenuStore {
    /// Categories offered in the editor; the reserved category is excluded
    pub fn selectable_categories(&self) -> impl Iterator<Item = &MenuCategory> {
        self.menu_categories
            .iter()
            .filter(|category| category.is_selectable())
    }

    /// Occupied placements for one (category, page)
    pub fn filled_for(&self, category_id: i64, page: u32) -> Vec<FilledPosition> {
        self.filled_positions
            .iter()
            .filter(|position| {
                position.menu_category_id == category_id && position.menu_page == page
            })
            .copied()
            .collect()
    }

    /// Append a freshly registered menu and mark its placement as taken
    pub fn append_menu(&mut self, menu: Menu) {
        self.filled_positions.push(FilledPosition::of(&menu));
        self.menus.push(menu);
    }

    /// Add one order line to the cart
    pub fn add_order_line(&mut self, line: OrderLine) {
        self.order_lines.push(line);
    }

    /// Remove one order line by index; out-of-range indices are ignored
    pub fn remove_order_line(&mut self, index: usize) {
        if index < self.order_lines.len() {
            self.order_lines.remove(index);
        } else {
            tracing::warn!(index, len = self.order_lines.len(), "remove past end of cart");
        }
    }

    /// Clear the cart
    pub fn reset_orders(&mut self) {
        self.order_lines.clear();
    }

    /// Aggregates for the cart sidebar
    pub fn cart_summary(&self) -> CartSummary {
        CartSummary::of(&self.order_lines)
    }
}
