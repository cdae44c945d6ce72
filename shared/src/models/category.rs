//! Menu category model

use serde::{Deserialize, Serialize};

/// Category id reserved by the backend (e.g. the "all menus" pseudo
/// category). Never offered in the editor's category selection.
pub const RESERVED_CATEGORY_ID: i64 = 1;

/// Menu category reference data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub menu_category_id: i64,
    pub menu_category_name: String,
}

impl MenuCategory {
    /// Whether this category may be assigned to a menu in the editor
    pub fn is_selectable(&self) -> bool {
        self.menu_category_id != RESERVED_CATEGORY_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_category_is_not_selectable() {
        let reserved = MenuCategory {
            menu_category_id: RESERVED_CATEGORY_ID,
            menu_category_name: "All".to_string(),
        };
        let coffee = MenuCategory {
            menu_category_id: 2,
            menu_category_name: "Coffee".to_string(),
        };

        assert!(!reserved.is_selectable());
        assert!(coffee.is_selectable());
    }
}
