//! Occupied grid placements

use serde::{Deserialize, Serialize};

use super::Menu;

/// Grid placement already taken by an existing menu
///
/// Projection of [`Menu`] consumed by the editor to disable occupied
/// cells. Within one category no two menus share (page, row, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilledPosition {
    pub menu_category_id: i64,
    pub menu_page: u32,
    pub menu_row: u32,
    pub menu_column: u32,
}

impl FilledPosition {
    /// Placement slot occupied by the given menu
    pub fn of(menu: &Menu) -> Self {
        Self {
            menu_category_id: menu.menu_category_id,
            menu_page: menu.menu_page,
            menu_row: menu.menu_row,
            menu_column: menu.menu_column,
        }
    }
}
